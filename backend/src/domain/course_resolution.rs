//! Policy for requested course identifiers that do not resolve.

use std::collections::BTreeSet;

use serde_json::json;

use crate::domain::{Course, CourseId, Error};

/// How create and update treat course identifiers missing from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CourseResolution {
    /// Drop unknown identifiers and keep the resolvable subset.
    #[default]
    Lenient,
    /// Reject the write when any identifier is unknown.
    Strict,
}

impl CourseResolution {
    /// Select the policy from the `strict` settings flag.
    pub const fn from_strict_flag(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }

    /// Reconcile the requested identifiers with the courses the store found.
    ///
    /// Returns the found courses, deduplicated by identifier and ordered as
    /// first requested. In [`CourseResolution::Strict`] mode any missing
    /// identifier fails with `NotFound` (reason `invalid_course_id`).
    pub fn reconcile(self, requested: &[CourseId], found: Vec<Course>) -> Result<Vec<Course>, Error> {
        let missing = missing_ids(requested, &found);
        if self == Self::Strict && !missing.is_empty() {
            let raw: Vec<i64> = missing.iter().map(|id| id.get()).collect();
            return Err(Error::not_found(format!("unknown course ids: {raw:?}"))
                .with_details(json!({ "code": "invalid_course_id", "courseIds": raw })));
        }
        if !missing.is_empty() {
            tracing::warn!(dropped = ?missing, "dropping unresolvable course ids");
        }

        let mut seen = BTreeSet::new();
        let mut ordered = Vec::with_capacity(found.len());
        for id in requested {
            if !seen.insert(*id) {
                continue;
            }
            if let Some(course) = found.iter().find(|course| course.id() == *id) {
                ordered.push(course.clone());
            }
        }
        Ok(ordered)
    }
}

/// Requested identifiers absent from `found`, deduplicated, in request order.
pub fn missing_ids(requested: &[CourseId], found: &[Course]) -> Vec<CourseId> {
    let present: BTreeSet<CourseId> = found.iter().map(Course::id).collect();
    let mut seen = BTreeSet::new();
    requested
        .iter()
        .copied()
        .filter(|id| !present.contains(id) && seen.insert(*id))
        .collect()
}
