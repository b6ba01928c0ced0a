// src/github/event.rs
// =============================================================================
// Typed model of an entry in the GitHub public events feed.
//
// The API sends every event with the same loose shape:
//
//   { "type": "PushEvent", "repo": { "name": "x/y" }, "payload": { ... } }
//
// and which payload fields mean anything depends on "type". We decode into a
// private RawEvent first, then convert it into an EventKind variant that only
// carries the fields its category uses.
//
// GitHub is not strict about these payloads: fields can be missing or null.
// Missing/null fields become empty values instead of decode errors.
// =============================================================================

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

/// One entry of a user's activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    /// Repository the event happened on, as `owner/name`
    pub repo: String,
    pub kind: EventKind,
}

/// What happened, with only the fields relevant to that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push { commit_count: usize },
    Create { ref_type: String },
    Issues { action: String, issue_title: String },
    IssueComment { issue_title: String },
    Watch { action: String },
    Fork { forkee: String },
    PullRequest { action: String, title: String },
    Public,
    /// Any category we don't have a dedicated line for. Keeps the raw
    /// `type` value, e.g. "GollumEvent".
    Other(String),
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    repo: Option<RawRepo>,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
struct RawRepo {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct Titled {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Deserialize)]
struct Forkee {
    #[serde(default)]
    full_name: Option<String>,
}

// One struct covers every payload we read. Each EventKind variant picks the
// fields it needs and ignores the rest.
#[derive(Deserialize, Default)]
struct Payload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    ref_type: Option<String>,
    #[serde(default)]
    commits: Option<Vec<IgnoredAny>>,
    #[serde(default)]
    issue: Option<Titled>,
    #[serde(default)]
    pull_request: Option<Titled>,
    #[serde(default)]
    forkee: Option<Forkee>,
}

impl Payload {
    fn action(&mut self) -> String {
        self.action.take().unwrap_or_default()
    }

    fn issue_title(&mut self) -> String {
        self.issue.take().and_then(|i| i.title).unwrap_or_default()
    }
}

impl TryFrom<RawEvent> for Event {
    type Error = serde_json::Error;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let repo = raw.repo.and_then(|r| r.name).unwrap_or_default();
        let category = raw.kind.unwrap_or_default();

        // A null or absent payload is treated like an empty object
        let mut payload = match raw.payload {
            Value::Null => Payload::default(),
            value => serde_json::from_value::<Payload>(value)?,
        };

        let kind = match category.as_str() {
            "PushEvent" => EventKind::Push {
                commit_count: payload.commits.map_or(0, |c| c.len()),
            },
            "CreateEvent" => EventKind::Create {
                ref_type: payload.ref_type.unwrap_or_default(),
            },
            "IssuesEvent" => EventKind::Issues {
                action: payload.action(),
                issue_title: payload.issue_title(),
            },
            "IssueCommentEvent" => EventKind::IssueComment {
                issue_title: payload.issue_title(),
            },
            "WatchEvent" => EventKind::Watch {
                action: payload.action(),
            },
            "ForkEvent" => EventKind::Fork {
                forkee: payload.forkee.and_then(|f| f.full_name).unwrap_or_default(),
            },
            "PullRequestEvent" => EventKind::PullRequest {
                action: payload.action(),
                title: payload.pull_request.and_then(|p| p.title).unwrap_or_default(),
            },
            "PublicEvent" => EventKind::Public,
            _ => EventKind::Other(category),
        };

        Ok(Event { repo, kind })
    }
}

/// Decodes a response body into the list of events, keeping feed order.
pub fn parse_events(body: &[u8]) -> Result<Vec<Event>, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(json: &str) -> Event {
        let mut events = parse_events(format!("[{}]", json).as_bytes()).unwrap();
        assert_eq!(events.len(), 1);
        events.remove(0)
    }

    #[test]
    fn test_push_counts_commits() {
        let event = parse_one(
            r#"{"id": "1", "type": "PushEvent", "repo": {"id": 7, "name": "x/y"},
                "payload": {"ref": "refs/heads/main", "commits": [{"sha": "a"}, {"sha": "b"}, {"sha": "c"}]}}"#,
        );
        assert_eq!(event.repo, "x/y");
        assert_eq!(event.kind, EventKind::Push { commit_count: 3 });
    }

    #[test]
    fn test_push_without_commits() {
        let event = parse_one(r#"{"type": "PushEvent", "repo": {"name": "x/y"}, "payload": {"commits": null}}"#);
        assert_eq!(event.kind, EventKind::Push { commit_count: 0 });

        let event = parse_one(r#"{"type": "PushEvent", "repo": {"name": "x/y"}, "payload": {}}"#);
        assert_eq!(event.kind, EventKind::Push { commit_count: 0 });
    }

    #[test]
    fn test_issue_and_pull_request_titles() {
        let event = parse_one(
            r#"{"type": "IssuesEvent", "repo": {"name": "a/b"},
                "payload": {"action": "opened", "issue": {"number": 4, "title": "Bug"}}}"#,
        );
        assert_eq!(
            event.kind,
            EventKind::Issues { action: "opened".into(), issue_title: "Bug".into() }
        );

        let event = parse_one(
            r#"{"type": "PullRequestEvent", "repo": {"name": "a/b"},
                "payload": {"action": "closed", "number": 9, "pull_request": {"title": "Fix it"}}}"#,
        );
        assert_eq!(
            event.kind,
            EventKind::PullRequest { action: "closed".into(), title: "Fix it".into() }
        );
    }

    #[test]
    fn test_fork_and_create() {
        let event = parse_one(
            r#"{"type": "ForkEvent", "repo": {"name": "a/b"}, "payload": {"forkee": {"full_name": "me/b"}}}"#,
        );
        assert_eq!(event.kind, EventKind::Fork { forkee: "me/b".into() });

        let event = parse_one(
            r#"{"type": "CreateEvent", "repo": {"name": "a/b"}, "payload": {"ref": null, "ref_type": "repository"}}"#,
        );
        assert_eq!(event.kind, EventKind::Create { ref_type: "repository".into() });
    }

    #[test]
    fn test_unknown_category_keeps_name() {
        let event = parse_one(r#"{"type": "GollumEvent", "repo": {"name": "a/b"}, "payload": {"pages": []}}"#);
        assert_eq!(event.kind, EventKind::Other("GollumEvent".into()));
    }

    #[test]
    fn test_missing_fields_do_not_fail() {
        let event = parse_one(r#"{"type": "PublicEvent", "repo": {"name": "a/b"}}"#);
        assert_eq!(event.kind, EventKind::Public);

        let event = parse_one(r#"{"type": "WatchEvent", "repo": {"name": "a/b"}, "payload": null}"#);
        assert_eq!(event.kind, EventKind::Watch { action: String::new() });

        let event = parse_one(r#"{"type": "IssueCommentEvent", "repo": null, "payload": {"issue": null}}"#);
        assert_eq!(event.repo, "");
        assert_eq!(event.kind, EventKind::IssueComment { issue_title: String::new() });
    }

    #[test]
    fn test_order_is_preserved() {
        let events = parse_events(
            br#"[{"type": "PublicEvent", "repo": {"name": "1/1"}},
                 {"type": "PublicEvent", "repo": {"name": "2/2"}},
                 {"type": "PublicEvent", "repo": {"name": "3/3"}}]"#,
        )
        .unwrap();
        let repos: Vec<_> = events.iter().map(|e| e.repo.as_str()).collect();
        assert_eq!(repos, ["1/1", "2/2", "3/3"]);
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_events(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(parse_events(b"[{\"type\": ").is_err());
        assert!(parse_events(b"{\"message\": \"not an array\"}").is_err());
        assert!(parse_events(br#"[{"type": "PushEvent", "payload": {"commits": 3}}]"#).is_err());
    }
}
