//! `investment-tracker` - terminal front end for the investment book.
//!
//! Provides configuration, logging, command-line parsing and the interactive
//! shell around `investment_tracker_core`.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
