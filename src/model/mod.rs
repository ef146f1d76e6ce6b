//! Data models for jjpane
//!
//! UI-independent values scraped from jj's text output.

mod bookmark;
mod change_id;
mod file_status;
mod log_settings;
mod notification;

pub use bookmark::{Bookmark, BookmarkState};
pub use change_id::{CHANGE_ID_LEN, ChangeId};
pub use file_status::{FileState, FileStatus};
pub use log_settings::LogSettings;
pub use notification::{Notification, NotificationKind};
