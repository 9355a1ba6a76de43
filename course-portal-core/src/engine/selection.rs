//! Course → unit → class selection state machine
//!
//! Each level has its own generation counter. Starting a fetch bumps the
//! counter and hands out a [`FetchTicket`]; a result is applied only if its
//! ticket still carries the current generation, so a slow response for an
//! abandoned selection can never overwrite a newer one.

use course_portal_gateway::GatewayError;

use crate::error::CoreError;
use crate::types::{ClassSession, Course, FetchLevel, Unit};

/// Course list state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CoursesPhase {
    #[default]
    Idle,
    Loading,
    Ready(Vec<Course>),
}

/// Unit list state of the selected course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitsPhase {
    Loading,
    Ready {
        units: Vec<Unit>,
        unit: Option<UnitSelection>,
    },
}

/// Class list state of the selected unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassesPhase {
    Loading,
    Ready(Vec<ClassSession>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSelection {
    pub course: Course,
    pub units: UnitsPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSelection {
    pub unit: Unit,
    pub classes: ClassesPhase,
}

/// Flattened view of where the machine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    CoursesLoading,
    CoursesReady,
    UnitsLoading,
    UnitsReady,
    ClassesLoading,
    ClassesReady,
}

/// Proof that a fetch was started; hand it back with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    level: FetchLevel,
    generation: u64,
    key: String,
}

impl FetchTicket {
    pub fn level(&self) -> FetchLevel {
        self.level
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identifier to fetch with (empty for courses, sanitized course id, unit id).
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// What applying a fetch result did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The result was applied.
    Updated,
    /// The fetch failed; the level is now empty and no longer loading.
    Failed(CoreError),
    /// A newer fetch superseded this one; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Copy, Default)]
struct Generations {
    courses: u64,
    units: u64,
    classes: u64,
}

/// Selection state machine.
#[derive(Debug, Default)]
pub struct SelectionMachine {
    courses: CoursesPhase,
    course: Option<CourseSelection>,
    generations: Generations,
}

impl SelectionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== transitions =====

    /// Start (re)loading the course list. The current course selection is kept.
    pub fn begin_load_courses(&mut self) -> FetchTicket {
        self.generations.courses += 1;
        self.courses = CoursesPhase::Loading;
        FetchTicket {
            level: FetchLevel::Courses,
            generation: self.generations.courses,
            key: String::new(),
        }
    }

    pub fn apply_courses(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Course>, GatewayError>,
    ) -> Resolution {
        if !self.is_current(ticket, FetchLevel::Courses) {
            return Resolution::Stale;
        }
        match result {
            Ok(courses) => {
                self.courses = CoursesPhase::Ready(courses);
                Resolution::Updated
            }
            Err(e) => {
                self.courses = CoursesPhase::Ready(Vec::new());
                Resolution::Failed(CoreError::from_fetch(FetchLevel::Courses, e))
            }
        }
    }

    /// Select a course: clears unit and class state and starts loading its units.
    ///
    /// Any in-flight unit or class fetch becomes stale.
    pub fn select_course(&mut self, course: Course) -> FetchTicket {
        self.generations.units += 1;
        self.generations.classes += 1;
        let key = course.normalized_id();
        self.course = Some(CourseSelection {
            course,
            units: UnitsPhase::Loading,
        });
        FetchTicket {
            level: FetchLevel::Units,
            generation: self.generations.units,
            key,
        }
    }

    pub fn apply_units(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Unit>, GatewayError>,
    ) -> Resolution {
        if !self.is_current(ticket, FetchLevel::Units) {
            return Resolution::Stale;
        }
        let Some(selection) = self.course.as_mut() else {
            return Resolution::Stale;
        };
        match result {
            Ok(units) => {
                selection.units = UnitsPhase::Ready { units, unit: None };
                Resolution::Updated
            }
            Err(e) => {
                selection.units = UnitsPhase::Ready {
                    units: Vec::new(),
                    unit: None,
                };
                Resolution::Failed(CoreError::from_fetch(FetchLevel::Units, e))
            }
        }
    }

    /// Select a unit of the current course and start loading its classes.
    ///
    /// Returns `None` (and changes nothing) when no course is selected or its
    /// units are still loading.
    pub fn select_unit(&mut self, unit: Unit) -> Option<FetchTicket> {
        let selection = self.course.as_mut()?;
        let UnitsPhase::Ready { unit: slot, .. } = &mut selection.units else {
            return None;
        };

        self.generations.classes += 1;
        let key = unit.unit_id.clone();
        *slot = Some(UnitSelection {
            unit,
            classes: ClassesPhase::Loading,
        });
        Some(FetchTicket {
            level: FetchLevel::Classes,
            generation: self.generations.classes,
            key,
        })
    }

    pub fn apply_classes(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<ClassSession>, GatewayError>,
    ) -> Resolution {
        if !self.is_current(ticket, FetchLevel::Classes) {
            return Resolution::Stale;
        }
        let Some(unit) = self.unit_selection_mut() else {
            return Resolution::Stale;
        };
        match result {
            Ok(classes) => {
                unit.classes = ClassesPhase::Ready(classes);
                Resolution::Updated
            }
            Err(e) => {
                unit.classes = ClassesPhase::Ready(Vec::new());
                Resolution::Failed(CoreError::from_fetch(FetchLevel::Classes, e))
            }
        }
    }

    fn is_current(&self, ticket: &FetchTicket, level: FetchLevel) -> bool {
        let current = match level {
            FetchLevel::Courses => self.generations.courses,
            FetchLevel::Units => self.generations.units,
            FetchLevel::Classes => self.generations.classes,
        };
        ticket.level == level && ticket.generation == current
    }

    fn unit_selection_mut(&mut self) -> Option<&mut UnitSelection> {
        match &mut self.course.as_mut()?.units {
            UnitsPhase::Ready { unit, .. } => unit.as_mut(),
            UnitsPhase::Loading => None,
        }
    }

    // ===== queries =====

    pub fn phase(&self) -> SelectionPhase {
        let Some(selection) = &self.course else {
            return match self.courses {
                CoursesPhase::Idle => SelectionPhase::Idle,
                CoursesPhase::Loading => SelectionPhase::CoursesLoading,
                CoursesPhase::Ready(_) => SelectionPhase::CoursesReady,
            };
        };
        match &selection.units {
            UnitsPhase::Loading => SelectionPhase::UnitsLoading,
            UnitsPhase::Ready { unit: None, .. } => SelectionPhase::UnitsReady,
            UnitsPhase::Ready {
                unit: Some(unit), ..
            } => match unit.classes {
                ClassesPhase::Loading => SelectionPhase::ClassesLoading,
                ClassesPhase::Ready(_) => SelectionPhase::ClassesReady,
            },
        }
    }

    /// Loaded courses (empty while loading).
    pub fn courses(&self) -> &[Course] {
        match &self.courses {
            CoursesPhase::Ready(courses) => courses,
            CoursesPhase::Idle | CoursesPhase::Loading => &[],
        }
    }

    pub fn is_loading_courses(&self) -> bool {
        matches!(self.courses, CoursesPhase::Loading)
    }

    pub fn course_selection(&self) -> Option<&CourseSelection> {
        self.course.as_ref()
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.course.as_ref().map(|s| &s.course)
    }

    pub fn is_loading_units(&self) -> bool {
        matches!(
            self.course,
            Some(CourseSelection {
                units: UnitsPhase::Loading,
                ..
            })
        )
    }

    /// Units of the selected course (empty while loading or with no course).
    pub fn units(&self) -> &[Unit] {
        match self.course.as_ref().map(|s| &s.units) {
            Some(UnitsPhase::Ready { units, .. }) => units,
            _ => &[],
        }
    }

    pub fn unit_selection(&self) -> Option<&UnitSelection> {
        match &self.course.as_ref()?.units {
            UnitsPhase::Ready { unit, .. } => unit.as_ref(),
            UnitsPhase::Loading => None,
        }
    }

    pub fn selected_unit(&self) -> Option<&Unit> {
        self.unit_selection().map(|s| &s.unit)
    }

    pub fn is_loading_classes(&self) -> bool {
        matches!(
            self.unit_selection(),
            Some(UnitSelection {
                classes: ClassesPhase::Loading,
                ..
            })
        )
    }

    /// Classes of the selected unit (empty while loading or with no unit).
    pub fn classes(&self) -> &[ClassSession] {
        match self.unit_selection().map(|s| &s.classes) {
            Some(ClassesPhase::Ready(classes)) => classes,
            _ => &[],
        }
    }
}
