//! # Jirat - Jira issues and time tracking from the terminal
//!
//! A command-line client for a Jira issue tracker that also keeps a local
//! time log for every issue you start and stop progress on.
//!
//! ## Features
//!
//! - **Issues**: list your open issues, show one issue, read and add comments
//! - **Projects**: list the projects visible to you
//! - **Progress**: start/stop progress transitions on the server
//! - **Time Log**: every start/stop is appended to a per-issue log; `time`
//!   reports the accumulated total, including a session still in progress
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jirat::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
