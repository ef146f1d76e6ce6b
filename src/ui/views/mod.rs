//! View components
//!
//! Every screen except help is a [`Pane`] over jj's own text output.

mod pane;

pub use pane::{InputMode, Pane, PaneAction, PaneKind, style_line};
