// src/github/event.rs
// =============================================================================
// Types for records in the GitHub public event feed
// (GET /users/{username}/events).
//
// The feed is decoded in two steps:
// 1. serde reads each record into `RawEvent`: the type tag, the repo name and
//    the payload as untyped JSON
// 2. `From<RawEvent> for Event` picks an `Activity` variant from the tag and
//    decodes the payload into the shape that variant needs
//
// A known tag whose payload doesn't have the expected shape becomes
// `Activity::Other(tag)`, so formatting never reads a field that isn't there.
// =============================================================================

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// One entry of a user's public activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEvent")]
pub struct Event {
    /// Full "owner/repo" name the event belongs to
    pub repo: String,
    /// What happened, with the payload fields needed to describe it
    pub activity: Activity,
}

/// The kinds of events we know how to describe.
///
/// `Other` carries the raw type tag so new event kinds still print something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Push { commits: usize },
    Create { ref_type: String },
    Issues { action: String },
    PullRequest { action: String },
    Watch,
    Fork,
    Delete { ref_type: String, git_ref: Option<String> },
    Comment,
    Other(String),
}

// The record exactly as GitHub sends it. Fields we never use (id, actor,
// created_at, ...) are ignored by serde.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    repo: RawRepo,
    #[serde(default)]
    payload: Value,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PushPayload {
    commits: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RefPayload {
    ref_type: String,
    #[serde(rename = "ref", default)]
    git_ref: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ActionPayload {
    action: String,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let RawEvent { kind, repo, payload } = raw;

        let activity = match kind.as_str() {
            "PushEvent" => decode_payload::<PushPayload>(&kind, &repo.name, payload)
                .map(|p| Activity::Push { commits: p.commits.len() }),
            "CreateEvent" => decode_payload::<RefPayload>(&kind, &repo.name, payload)
                .map(|p| Activity::Create { ref_type: p.ref_type }),
            "IssuesEvent" => decode_payload::<ActionPayload>(&kind, &repo.name, payload)
                .map(|p| Activity::Issues { action: p.action }),
            "PullRequestEvent" => decode_payload::<ActionPayload>(&kind, &repo.name, payload)
                .map(|p| Activity::PullRequest { action: p.action }),
            "WatchEvent" => Some(Activity::Watch),
            "ForkEvent" => Some(Activity::Fork),
            "DeleteEvent" => decode_payload::<RefPayload>(&kind, &repo.name, payload).map(|p| {
                Activity::Delete {
                    ref_type: p.ref_type,
                    git_ref: p.git_ref,
                }
            }),
            "CommentEvent" => Some(Activity::Comment),
            _ => None,
        };

        Event {
            repo: repo.name,
            activity: activity.unwrap_or(Activity::Other(kind)),
        }
    }
}

// Decodes a payload into the shape a known event kind needs.
// Returns None (and logs) when the payload doesn't match.
fn decode_payload<T: DeserializeOwned>(kind: &str, repo: &str, payload: Value) -> Option<T> {
    match serde_json::from_value(payload) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::info!(kind, repo, error = %e, "unexpected payload shape, using generic description");
            None
        }
    }
}
