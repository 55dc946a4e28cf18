//! A small threaded console loading bar.
//!
//! Three OS threads cooperate over a piece of [shared atomic
//! state](SharedState): a timer advances an elapsed-time percentage in
//! half-second steps, a renderer redraws a `[####----] 42%` bar on a
//! 100ms cadence, and a counter busy-increments a tally for as long as
//! the run lasts. The [`Runner`] spawns all three, joins them, and
//! hands back the final tally.
//!
//! Rendering goes through a [`DrawTarget`], so the same run can paint
//! a live terminal, stay hidden, or write into an [`InMemoryTerm`] for
//! tests.

mod config;
mod draw_target;
mod in_memory;
mod runner;
mod state;
mod style;
mod tasks;
mod term_like;

pub use crate::config::{ConfigError, RunConfig};
pub use crate::draw_target::DrawTarget;
pub use crate::in_memory::InMemoryTerm;
pub use crate::runner::Runner;
pub use crate::state::SharedState;
pub use crate::style::BarStyle;
pub use crate::term_like::TermLike;
