//! UI layer
//!
//! Contains panes, dialogs, widgets, and theme definitions.

pub mod components;
pub mod navigation;
pub mod theme;
pub mod views;
pub mod widgets;
