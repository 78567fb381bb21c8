//! relview App - Console wiring
//!
//! Brings the relview crates together: [`logging`] installs the tracing
//! subscriber, and [`Workbench`] combines settings, preferences, console
//! state and output rendering.

pub mod logging;
mod workbench;

pub use workbench::{DISPLAY_MODE_KEY, Workbench};
