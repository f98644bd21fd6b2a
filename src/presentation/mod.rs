//! Presentation layer
//!
//! Report renderers and the terminal host.

pub mod cli;
pub mod report;
