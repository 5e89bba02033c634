//! User-facing text.
//!
//! Every string jirat shows to the user is a [`Message`] variant, rendered by
//! its `Display` impl in [`display`]. The `msg_*!` macros in [`macros`] decide
//! whether the text goes to the terminal or through `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
