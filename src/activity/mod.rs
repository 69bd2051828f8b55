// src/activity/mod.rs
// =============================================================================
// This module turns fetched events into the text we print.
//
// Submodules:
// - format: one event -> one "- ..." line
// - report: the whole output (header, first 10 lines, or the empty notice)
// =============================================================================

mod format;
mod report;

pub use format::format_event;
pub use report::summarize;
