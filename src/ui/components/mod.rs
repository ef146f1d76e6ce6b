//! Reusable UI components
//!
//! Common building blocks for panes and dialogs.

pub mod blocks;
pub mod dialog;
pub mod message;

pub use blocks::*;
pub use dialog::{Dialog, DialogKind, DialogResult, SelectItem};
pub use message::*;
