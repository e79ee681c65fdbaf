//! The terminal front end: routes, screens and the interactive shell.

pub mod router;
pub mod screens;
pub mod shell;

pub use router::Route;
pub use shell::{Flow, Shell};
