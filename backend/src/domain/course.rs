//! Course data model.
//!
//! Courses are owned independently of students. A student references a
//! course by value, but only the identifier participates in directory logic.

use std::fmt;

/// Store-assigned course identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(i64);

impl CourseId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CourseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course students can be enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    name: String,
}

impl Course {
    /// Build a course from its parts.
    pub fn new(id: CourseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Stable course identifier.
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Display name; never used for matching.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
