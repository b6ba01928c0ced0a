// src/report/line.rs
// =============================================================================
// Turns one event into one human-readable sentence.
//
// Each category has a fixed template; anything we don't know gets the
// generic "Performed a {category} on {repo}" line.
// =============================================================================

use crate::github::{Event, EventKind};

// Describes a single event, without the leading "- "
//
// Example:
//   Push { commit_count: 3 } on "x/y" -> "Pushed 3 commit(s) to x/y"
pub fn describe(event: &Event) -> String {
    let repo = &event.repo;

    match &event.kind {
        EventKind::Push { commit_count } => {
            format!("Pushed {} commit(s) to {}", commit_count, repo)
        }
        EventKind::Create { ref_type } => format!("Created a new {} in {}", ref_type, repo),
        EventKind::Issues { action, issue_title } => format!(
            "{} an issue in {}: \"{}\"",
            capitalize(action),
            repo,
            issue_title
        ),
        EventKind::IssueComment { issue_title } => {
            format!("Commented on an issue in {}: \"{}\"", repo, issue_title)
        }
        EventKind::Watch { action } => format!("{} watching {}", capitalize(action), repo),
        EventKind::Fork { forkee } => format!("Forked {} to {}", repo, forkee),
        EventKind::PullRequest { action, title } => format!(
            "{} a pull request in {}: \"{}\"",
            capitalize(action),
            repo,
            title
        ),
        EventKind::Public => format!("Made {} public", repo),
        EventKind::Other(category) => format!("Performed a {} on {}", category, repo),
    }
}

// Upper-cases the first character and leaves the rest alone
//
// "opened" -> "Opened", "reopened" -> "Reopened", "" -> ""
//
// Only the first character of the whole token changes, so something like
// "ready_for_review" stays "Ready_for_review" rather than being title-cased
// word by word.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        // to_uppercase() can yield more than one char (e.g. 'ß' -> "SS")
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
