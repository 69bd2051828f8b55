// src/activity/report.rs
// =============================================================================
// Builds the full output for one user: a header followed by one line per
// event, or a single notice when the feed is empty.
// =============================================================================

use super::format_event;
use crate::github::Event;

/// How many events from the feed we describe
pub const MAX_EVENTS: usize = 10;

// Returns the lines to print, in order, without trailing newlines
//
// Only the first MAX_EVENTS events are used, in the order they were received.
pub fn summarize(username: &str, events: &[Event]) -> Vec<String> {
    if events.is_empty() {
        return vec!["No recent activity found.".to_string()];
    }

    let header = format!("Recent GitHub Activities for {}:", username);

    std::iter::once(header)
        .chain(events.iter().take(MAX_EVENTS).map(format_event))
        .collect()
}
