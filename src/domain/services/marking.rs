use crate::domain::models::{attendance::AttendanceRecord, student::Student};
use crate::error::AppError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Pending presence marks for one selected date, held in memory until the
/// batch is submitted. Marks are keyed by student id; setting a mark twice
/// replaces the earlier decision.
#[derive(Debug, Clone)]
pub struct MarkingSession {
    date: NaiveDate,
    marks: HashMap<String, bool>,
}

impl MarkingSession {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            marks: HashMap::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_mark(&mut self, student_id: &str, is_present: bool) {
        self.marks.insert(student_id.to_string(), is_present);
    }

    pub fn mark_for(&self, student_id: &str) -> Option<bool> {
        self.marks.get(student_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Builds the submission batch for the currently visible roster: one
    /// record per student, all sharing the session date, each with a fresh
    /// id. Rejects when no marks are set at all, and when any visible
    /// student is still unmarked (naming them).
    pub fn build_batch(&self, visible: &[Student]) -> Result<Vec<AttendanceRecord>, AppError> {
        if self.marks.is_empty() {
            return Err(AppError::Validation(
                "No attendance marks to submit".to_string(),
            ));
        }

        let unmarked: Vec<&str> = visible
            .iter()
            .filter(|s| !self.marks.contains_key(&s.id))
            .map(|s| s.name.as_str())
            .collect();

        if !unmarked.is_empty() {
            return Err(AppError::Validation(format!(
                "Attendance not marked for: {}",
                unmarked.join(", ")
            )));
        }

        Ok(visible
            .iter()
            .map(|s| AttendanceRecord::new(s.id.clone(), self.date, self.marks[&s.id]))
            .collect())
    }
}
