//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- every keyboard, mouse,
//!   resize, focus and paste event, mapped by the caller.
//! - **Pointer events** ([`pointer_events`]) -- mouse events only, keyed per
//!   listener so each mounted widget owns a distinct subscription.

mod terminal;

pub use terminal::*;
