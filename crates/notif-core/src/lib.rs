//! notif-core - Presentation helpers for desktop notifications
//!
//! This crate turns raw notification data into display text: relative time
//! labels ("5 mins ago") and bodies with browser-injected preambles removed.
//! It performs no I/O; the clock and the calendar date rendering are
//! injected so callers (and tests) control both.

pub mod body;
pub mod clock;
pub mod config;
pub mod date;
pub mod errors;
pub mod parser;
pub mod relative;
pub mod types;

pub use body::*;
pub use clock::*;
pub use config::*;
pub use date::*;
pub use errors::*;
pub use parser::*;
pub use relative::*;
pub use types::*;
