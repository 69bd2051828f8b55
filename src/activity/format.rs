// src/activity/format.rs
// =============================================================================
// Describes a single event as one line of text.
//
// Every line starts with "- " so the output reads as a list. Events we don't
// recognise are still described as "- {type} in {repo}".
// =============================================================================

use crate::github::{Activity, Event};

// Formats one event as a list item (no trailing newline)
//
// Example:
//   Event { repo: "octocat/Hello-World", activity: Activity::Watch }
//   -> "- Starred octocat/Hello-World"
pub fn format_event(event: &Event) -> String {
    let repo = &event.repo;

    match &event.activity {
        Activity::Push { commits } => {
            let noun = if *commits == 1 { "commit" } else { "commits" };
            format!("- Pushed {} {} to {}", commits, noun, repo)
        }
        Activity::Create { ref_type } => format!("- Created {} in {}", ref_type, repo),
        Activity::Issues { action } => {
            format!("- {} an issue in {}", capitalize(action), repo)
        }
        Activity::PullRequest { action } => {
            format!("- {} a pull request in {}", capitalize(action), repo)
        }
        Activity::Watch => format!("- Starred {}", repo),
        Activity::Fork => format!("- Forked {}", repo),
        Activity::Delete {
            ref_type,
            git_ref: Some(git_ref),
        } => format!("- Deleted {} {} from {}", ref_type, git_ref, repo),
        Activity::Delete {
            ref_type,
            git_ref: None,
        } => format!("- Deleted {} from {}", ref_type, repo),
        Activity::Comment => format!("- Commented on {}", repo),
        Activity::Other(kind) => format!("- {} in {}", kind, repo),
    }
}

// Uppercases the first character and keeps the rest: "opened" -> "Opened"
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
