//! Terminal frontend for the `limn` line picker.
//!
//! Implements the core's [`Frontend`](limn_menu::Frontend) capability on an
//! inline viewport drawn to stderr, so stdout stays reserved for the emitted
//! selection. Raw mode and viewport cleanup are scoped to the frontend value
//! and released on drop, whichever way the run loop exits.

mod disco;
mod keys;
mod render;
mod term;

pub use disco::disco;
pub use term::TermFrontend;
