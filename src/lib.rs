//! jjpane - terminal panes and pickers over the Jujutsu (jj) CLI
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: TOML configuration
//! - [`jj`]: jj command execution and output scraping
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components
//! - [`wizard`]: Multi-step pickers that assemble jj commands

pub mod app;
pub mod config;
pub mod jj;
pub mod keys;
pub mod model;
pub mod ui;
pub mod wizard;
