//! Activity Recorder crate
//!
//! This crate records user input activity delivered by a hosting
//! environment: pointer moves, clicks, context-menu clicks, wheel and
//! document scrolls, and the drag lifecycle. Events are throttled per
//! category, timestamped into an append-only in-memory log, mirrored to a
//! live textual feed, summarized on demand, and exportable as JSON.

pub mod capture;
pub mod error;
pub mod events;
pub mod export;
pub mod feed;
pub mod recorder;
pub mod report;
pub mod throttle;

pub use capture::*;
pub use error::*;
pub use events::*;
pub use export::*;
pub use feed::*;
pub use recorder::*;
pub use report::*;
pub use throttle::*;
