//! Command parsing for submitted text.
//!
//! A command is free text such as `"show grades for cs 180"` or
//! `"open content module 3"`. Parsing picks one action keyword and pulls
//! out an optional course code and module number. Nothing is executed.

use std::fmt;

use serde::Serialize;

/// What the user asked to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    GoToGrades,
    GoToContent,
    GoToAssignments,
    GoToDiscussions,
    Unknown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GoToGrades => "grades",
            Self::GoToContent => "content",
            Self::GoToAssignments => "assignments",
            Self::GoToDiscussions => "discussions",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Keywords in priority order. The first one present wins, wherever it
/// appears in the text.
const ACTION_KEYWORDS: [(&str, Action); 4] = [
    ("grades", Action::GoToGrades),
    ("content", Action::GoToContent),
    ("assignments", Action::GoToAssignments),
    ("discussions", Action::GoToDiscussions),
];

/// Result of parsing one submitted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    pub action: Action,
    /// Normalised as `CS` plus three digits, e.g. `CS180`.
    pub course_code: Option<String>,
    pub module_number: Option<u32>,
}

impl ParsedCommand {
    /// One-line description for the status line.
    pub fn summary(&self) -> String {
        let mut out = format!("action: {}", self.action);
        if let Some(code) = &self.course_code {
            out.push_str(&format!("  course: {code}"));
        }
        if let Some(n) = self.module_number {
            out.push_str(&format!("  module: {n}"));
        }
        out
    }
}

/// Parse a submitted line. Matching is case-insensitive.
pub fn parse(input: &str) -> ParsedCommand {
    let text = input.to_lowercase();
    let action = ACTION_KEYWORDS
        .iter()
        .find(|(kw, _)| text.contains(kw))
        .map_or(Action::Unknown, |&(_, action)| action);
    ParsedCommand {
        action,
        course_code: course_code(&text),
        module_number: module_number(&text),
    }
}

/// First `cs`, optionally one whitespace char, then exactly three digits.
/// Digits after the third are ignored.
fn course_code(text: &str) -> Option<String> {
    text.match_indices("cs").find_map(|(i, kw)| {
        after_optional_space(&text[i + kw.len()..], |rest| {
            let digits = rest.get(..3)?;
            digits
                .bytes()
                .all(|b| b.is_ascii_digit())
                .then(|| format!("CS{digits}"))
        })
    })
}

/// First `module`, optionally one whitespace char, then one or more digits.
fn module_number(text: &str) -> Option<u32> {
    text.match_indices("module").find_map(|(i, kw)| {
        after_optional_space(&text[i + kw.len()..], |rest| {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if end == 0 {
                return None;
            }
            rest[..end].parse().ok()
        })
    })
}

/// Try `f` on `rest` with a single leading whitespace char skipped, then on
/// `rest` as is.
fn after_optional_space<T>(rest: &str, f: impl Fn(&str) -> Option<T>) -> Option<T> {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => f(chars.as_str()),
        _ => f(rest),
    }
}
