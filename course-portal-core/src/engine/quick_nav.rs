//! Quick navigation palette state
//!
//! Filters the course list by a free-text query and lets the user pick a
//! course with the keyboard or the pointer. Selecting a course is reported as
//! an outcome; the caller forwards it to the selection machine.

use std::time::{Duration, Instant};

use crate::types::Course;

/// Maximum number of candidates shown.
pub const MAX_CANDIDATES: usize = 10;

/// Delay between opening the palette and the query input accepting keystrokes.
pub const FOCUS_DELAY: Duration = Duration::from_millis(50);

/// Keys the palette reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
    Backspace,
    Char(char),
}

/// Result of feeding input to the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing changed.
    Ignored,
    /// Query or highlight changed.
    Updated,
    /// Closed without a selection.
    Closed,
    /// Closed with a course selection.
    Selected(Course),
}

#[derive(Debug, Default)]
pub struct QuickNav {
    open: bool,
    query: String,
    highlighted: usize,
    focus_due: Option<Instant>,
    focused: bool,
}

impl QuickNav {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Whether the query input accepts keystrokes yet.
    pub fn has_focus(&self) -> bool {
        self.open && self.focused
    }

    /// Open with an empty query. Opening an open palette changes nothing.
    pub fn open(&mut self, now: Instant) {
        if self.open {
            return;
        }
        self.open = true;
        self.query.clear();
        self.highlighted = 0;
        self.focused = false;
        self.focus_due = Some(now + FOCUS_DELAY);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focused = false;
        self.focus_due = None;
    }

    /// Grant input focus once the delay has elapsed. Returns `true` on the
    /// call that grants it.
    pub fn poll_focus(&mut self, now: Instant) -> bool {
        match self.focus_due {
            Some(due) if self.open && !self.focused && now >= due => {
                self.focused = true;
                self.focus_due = None;
                true
            }
            _ => false,
        }
    }

    /// Replace the query; the highlight returns to the first candidate.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.highlighted = 0;
    }

    /// Courses whose display name or raw id contains the query
    /// (case-insensitive), in source order, at most [`MAX_CANDIDATES`].
    pub fn candidates<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        let needle = self.query.to_lowercase();
        courses
            .iter()
            .filter(|course| {
                course.subject_name.to_lowercase().contains(&needle)
                    || course.id.to_lowercase().contains(&needle)
            })
            .take(MAX_CANDIDATES)
            .collect()
    }

    /// Move the highlight down, wrapping. No-op when there are no candidates.
    pub fn move_down(&mut self, count: usize) {
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    /// Move the highlight up, wrapping. No-op when there are no candidates.
    pub fn move_up(&mut self, count: usize) {
        if count > 0 {
            self.highlighted = (self.highlighted % count + count - 1) % count;
        }
    }

    /// Pointer hover: highlight without committing.
    pub fn hover(&mut self, index: usize, count: usize) {
        if index < count {
            self.highlighted = index;
        }
    }

    /// Commit the highlighted candidate and close.
    pub fn commit(&mut self, courses: &[Course]) -> NavOutcome {
        let chosen = self.candidates(courses).get(self.highlighted).map(|c| (*c).clone());
        match chosen {
            Some(course) => {
                self.close();
                NavOutcome::Selected(course)
            }
            None => NavOutcome::Ignored,
        }
    }

    /// Pointer click on a candidate: commit it immediately.
    pub fn click(&mut self, index: usize, courses: &[Course]) -> NavOutcome {
        let chosen = self.candidates(courses).get(index).map(|c| (*c).clone());
        match chosen {
            Some(course) => {
                self.close();
                NavOutcome::Selected(course)
            }
            None => NavOutcome::Ignored,
        }
    }

    pub fn handle_key(&mut self, key: NavKey, courses: &[Course]) -> NavOutcome {
        if !self.open {
            return NavOutcome::Ignored;
        }
        match key {
            NavKey::Escape => {
                self.close();
                NavOutcome::Closed
            }
            NavKey::Down => {
                self.move_down(self.candidates(courses).len());
                NavOutcome::Updated
            }
            NavKey::Up => {
                self.move_up(self.candidates(courses).len());
                NavOutcome::Updated
            }
            NavKey::Enter => self.commit(courses),
            NavKey::Char(_) | NavKey::Backspace if !self.focused => NavOutcome::Ignored,
            NavKey::Char(c) => {
                let mut query = std::mem::take(&mut self.query);
                query.push(c);
                self.set_query(query);
                NavOutcome::Updated
            }
            NavKey::Backspace => {
                let mut query = std::mem::take(&mut self.query);
                query.pop();
                self.set_query(query);
                NavOutcome::Updated
            }
        }
    }
}
