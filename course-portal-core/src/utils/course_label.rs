//! Course display names
//!
//! Portal course names usually look like `UE23CS341A - Software Engineering`.
//! The code and title are shown separately; other names are shown as is.

use std::sync::LazyLock;

use regex::Regex;

/// Course code: two letters, two digits, 2-3 letters, three digits, optional letter
static COURSE_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{2}\d{2}[A-Z]{2,3}\d{3}[A-Z]?)\s*-\s*(.+)$").ok());

/// A parsed course display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLabel<'a> {
    /// Code and title
    Coded { code: &'a str, title: &'a str },
    /// Unparsed name
    Raw(&'a str),
}

impl<'a> CourseLabel<'a> {
    /// Title part, or the whole name when there is no code
    pub fn title(&self) -> &'a str {
        match *self {
            Self::Coded { title, .. } => title,
            Self::Raw(name) => name,
        }
    }

    /// Course code
    pub fn code(&self) -> Option<&'a str> {
        match *self {
            Self::Coded { code, .. } => Some(code),
            Self::Raw(_) => None,
        }
    }
}

/// Parse a display name. Never fails.
pub fn parse(name: &str) -> CourseLabel<'_> {
    COURSE_LABEL
        .as_ref()
        .and_then(|re| re.captures(name))
        .and_then(|caps| {
            let code = caps.get(1)?.as_str();
            let title = caps.get(2)?.as_str();
            Some(CourseLabel::Coded { code, title })
        })
        .unwrap_or(CourseLabel::Raw(name))
}
