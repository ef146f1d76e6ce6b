//! jj output scrapers
//!
//! jj's default text output is meant for people, so everything here is a
//! line-oriented heuristic. Each scraper returns `None` (or skips the line)
//! when a line does not have the expected shape.

mod bookmark;
mod change_ref;
mod operation;
mod remote;
mod status;

pub use bookmark::parse_bookmark_list;
pub use remote::parse_remote_list;

#[cfg(test)]
mod tests;

/// Parser for jj command output
pub struct Parser;
