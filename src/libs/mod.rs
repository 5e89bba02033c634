//! Core library modules for jirat.
//!
//! - **Time tracking**: [`timelog`] keeps the append-only per-issue log and
//!   computes logged time
//! - **Infrastructure**: [`config`], [`data_storage`], [`secret`], [`logging`]
//! - **Presentation**: [`formatter`] builds structured output, [`view`]
//!   renders it, [`messages`] holds every user-facing sentence
//!
//! ```rust,no_run
//! use jirat::libs::{data_storage::DataStorage, timelog::TimeLog};
//! use chrono::Local;
//!
//! let log = TimeLog::new(&DataStorage::new());
//! let total = log.accumulate("PROJ-123", Local::now().naive_local())?;
//! # Ok::<(), jirat::libs::timelog::TimeLogError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod secret;
pub mod timelog;
pub mod view;
