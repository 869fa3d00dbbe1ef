//! Filter criteria for student queries.

use crate::domain::{CourseId, Student};

/// Optional course and tenure criteria; absent criteria match everything.
///
/// # Examples
/// ```
/// use enrollment::domain::{CourseId, StudentFilter};
///
/// let filter = StudentFilter::default()
///     .with_course(CourseId::new(2))
///     .with_years_of_studying(3);
/// assert_eq!(filter.course_id, Some(CourseId::new(2)));
/// assert_eq!(filter.years_of_studying, Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentFilter {
    /// Keep only students attending this course.
    pub course_id: Option<CourseId>,
    /// Keep only students enrolled strictly more calendar years ago.
    pub years_of_studying: Option<i32>,
}

impl StudentFilter {
    /// Build a filter from optional parts.
    pub const fn new(course_id: Option<CourseId>, years_of_studying: Option<i32>) -> Self {
        Self {
            course_id,
            years_of_studying,
        }
    }

    /// Restrict to students attending `course_id`.
    #[must_use]
    pub const fn with_course(mut self, course_id: CourseId) -> Self {
        self.course_id = Some(course_id);
        self
    }

    /// Restrict to students enrolled more than `years` calendar years ago.
    #[must_use]
    pub const fn with_years_of_studying(mut self, years: i32) -> Self {
        self.years_of_studying = Some(years);
        self
    }

    /// Whether `student` satisfies the tenure criterion in `current_year`.
    ///
    /// The comparison is strict: a student enrolled exactly
    /// `years_of_studying` years ago is excluded.
    pub fn matches_tenure(&self, student: &Student, current_year: i32) -> bool {
        self.years_of_studying
            .is_none_or(|years| student.years_enrolled(current_year) > years)
    }
}
