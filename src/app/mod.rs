//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App, Session and view management
//! - `input`: Key event handling
//! - `actions`: jj operations and wizard driving
//! - `refresh`: Reloading pane text from jj
//! - `render`: UI rendering

mod actions;
mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, Session, View};
