use std::io;
use std::thread;

use log::debug;

use crate::config::RunConfig;
use crate::draw_target::DrawTarget;
use crate::state::SharedState;
use crate::style::BarStyle;
use crate::tasks::{counter_loop, render_loop, timer_loop};

/// Orchestrates one run of the demo.
///
/// [`run`] spawns the timer, the renderer, and the counter as scoped
/// threads, waits for all three, and returns the final tally. The
/// scope join is what makes the final counter read race-free.
///
/// [`run`]: Runner::run
#[derive(Debug)]
pub struct Runner {
    config: RunConfig,
    style: BarStyle,
    target: DrawTarget,
}

impl Runner {
    /// Creates a runner drawing to stdout with the default style.
    pub fn new(config: RunConfig) -> Runner {
        Runner {
            config,
            style: BarStyle::default_bar(),
            target: DrawTarget::stdout(),
        }
    }

    /// A convenience builder-like function for a runner with a given
    /// style.
    pub fn with_style(mut self, style: BarStyle) -> Runner {
        self.style = style;
        self
    }

    /// A convenience builder-like function for a runner with a given
    /// draw target.
    pub fn with_draw_target(mut self, target: DrawTarget) -> Runner {
        self.target = target;
        self
    }

    /// Runs the three tasks to completion and returns the final
    /// counter value.
    ///
    /// The only fallible piece is the renderer's terminal I/O; the
    /// timer and counter cannot fail.
    pub fn run(&self) -> io::Result<u64> {
        debug!("run: duration {:?}", self.config.duration());
        let state = SharedState::new();
        let steps = self.config.half_steps();
        let bar_size = self.config.bar_size();

        thread::scope(|s| {
            let renderer = s.spawn(|| render_loop(&state, &self.style, &self.target, bar_size));
            s.spawn(|| timer_loop(&state, steps));
            s.spawn(|| counter_loop(&state));
            renderer.join().expect("render thread panicked")
        })?;

        debug!("run: finished with counter {}", state.counter());
        Ok(state.counter())
    }
}
