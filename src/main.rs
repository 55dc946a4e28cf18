use std::io;

use clap::Parser;

use loadbar::{BarStyle, RunConfig, Runner};

/// A loading bar driven by three threads: a half-second timer, a
/// 100ms renderer, and an unthrottled counter racing the clock.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Run duration in whole seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    duration: u64,

    /// Width of the bar in characters
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    bar_size: u64,

    /// Character for the filled part of the bar
    #[arg(long, default_value_t = '#')]
    fill_char: char,

    /// Character for the remaining part of the bar
    #[arg(long, default_value_t = '-')]
    space_char: char,

    /// Disable colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = RunConfig::new(args.duration, args.bar_size as usize)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let style = if args.no_color {
        BarStyle::plain()
    } else {
        BarStyle::default_bar()
    };
    let style = style.progress_chars(args.fill_char, args.space_char);

    let total = Runner::new(config).with_style(style).run()?;

    println!("====: Total de Aumentos :====");
    println!("{total}");
    println!("=============================");
    Ok(())
}
