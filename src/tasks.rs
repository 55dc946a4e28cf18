use std::io;
use std::thread;
use std::time::Duration;

use log::{debug, trace};

use crate::draw_target::DrawTarget;
use crate::state::SharedState;
use crate::style::BarStyle;

/// Timer resolution: two percentage updates per second.
pub(crate) const STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Redraw cadence of the renderer.
pub(crate) const REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// Percentage after `step` of `steps` half-second steps, 1-indexed.
pub(crate) fn percentage_at(step: u64, steps: u64) -> u8 {
    (step * 100 / steps) as u8
}

/// Advances the percentage once per step, then ends the run.
///
/// This task owns every write to the percentage and the single write
/// that clears the running flag. It never touches the console.
pub(crate) fn timer_loop(state: &SharedState, steps: u64) {
    debug!("timer: {steps} steps of {STEP_INTERVAL:?}");
    for step in 1..=steps {
        state.set_percentage(percentage_at(step, steps));
        thread::sleep(STEP_INTERVAL);
    }
    state.finish();
    trace!("timer: done");
}

/// Busy-increments the tally until the run ends.
///
/// Deliberately a tight loop with no sleep or yield: the point of the
/// demo is to see how far an unthrottled thread gets while the clock
/// runs. Termination is racy; a few extra increments may land after
/// the flag clears.
pub(crate) fn counter_loop(state: &SharedState) {
    while state.is_running() {
        state.inc_counter();
    }
    trace!("counter: done");
}

/// Redraws the bar every [`REDRAW_INTERVAL`] until the run ends, then
/// restores the terminal.
///
/// At most one frame is painted after the flag clears (the one already
/// in flight when the check at the top of the loop last passed); the
/// cleanup sequence is emitted unconditionally.
pub(crate) fn render_loop(
    state: &SharedState,
    style: &BarStyle,
    target: &DrawTarget,
    bar_size: usize,
) -> io::Result<()> {
    while state.is_running() {
        target.draw_frame(&style.frame(state.percentage(), bar_size))?;
        thread::sleep(REDRAW_INTERVAL);
    }
    target.clear_finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryTerm;

    #[test]
    fn percentage_is_monotonic_and_exact() {
        let steps = 20;
        let mut last = 0;
        for step in 1..=steps {
            let pct = percentage_at(step, steps);
            assert_eq!(u64::from(pct), step * 100 / steps);
            assert!(pct >= last);
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn two_second_run_has_four_quarter_steps() {
        let seq: Vec<u8> = (1..=4).map(|i| percentage_at(i, 4)).collect();
        assert_eq!(seq, vec![25, 50, 75, 100]);
    }

    #[test]
    fn timer_ends_the_run_at_hundred() {
        let state = SharedState::new();
        timer_loop(&state, 2);
        assert!(!state.is_running());
        assert_eq!(state.percentage(), 100);
    }

    #[test]
    fn counter_stops_after_finish() {
        let state = SharedState::new();
        thread::scope(|s| {
            s.spawn(|| counter_loop(&state));
            thread::sleep(Duration::from_millis(10));
            state.finish();
        });
        assert!(state.counter() > 0);
    }

    #[test]
    fn renderer_always_cleans_up() {
        let state = SharedState::new();
        state.finish();
        let term = InMemoryTerm::new();
        let target = DrawTarget::term_like(Box::new(term.clone()));
        render_loop(&state, &BarStyle::plain(), &target, 10).unwrap();
        assert_eq!(term.contents(), "\x1b[0m\x1b[?25h\n");
    }

    #[test]
    fn renderer_paints_until_the_flag_clears() {
        let state = SharedState::new();
        state.set_percentage(50);
        let term = InMemoryTerm::new();
        let target = DrawTarget::term_like(Box::new(term.clone()));
        thread::scope(|s| {
            let renderer = s.spawn(|| render_loop(&state, &BarStyle::plain(), &target, 10));
            thread::sleep(Duration::from_millis(50));
            state.finish();
            renderer.join().unwrap().unwrap();
        });
        let contents = term.contents();
        assert!(contents.contains("\r[#####-----] 50%"));
        assert!(contents.ends_with("\x1b[0m\x1b[?25h\n"));
    }
}
