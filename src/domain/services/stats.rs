use crate::domain::models::attendance::AttendanceRecord;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthlyAttendance {
    pub present: usize,
    pub total: usize,
    pub percentage: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub attendance_percentage: f64,
}

/// Present/total/percentage for one student in one calendar month.
///
/// `month0` is zero-based (January = 0). The percentage is unrounded;
/// display rounding is the caller's concern.
pub fn monthly_attendance(
    student_id: &str,
    month0: u32,
    year: i32,
    records: &[AttendanceRecord],
) -> MonthlyAttendance {
    let monthly: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| {
            r.student_id == student_id && r.date.month0() == month0 && r.date.year() == year
        })
        .collect();

    let present = monthly.iter().filter(|r| r.is_present).count();
    let total = monthly.len();
    let percentage = if total > 0 {
        present as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    MonthlyAttendance {
        present,
        total,
        percentage,
    }
}

/// Attendance percentage for one student across every record, any date.
pub fn overall_attendance(student_id: &str, records: &[AttendanceRecord]) -> f64 {
    let student_records: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.student_id == student_id)
        .collect();

    let present = student_records.iter().filter(|r| r.is_present).count();
    let total = student_records.len();
    if total > 0 {
        present as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

pub fn attendance_for_date(date: NaiveDate, records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    records.iter().filter(|r| r.date == date).cloned().collect()
}

/// Twelve chart points, January through December, bucketing every record by
/// calendar month regardless of year. The denominator is floored at 1 so an
/// empty month charts as zero rather than dividing by zero.
pub fn monthly_series(records: &[AttendanceRecord]) -> Vec<MonthlyPoint> {
    (0u32..12)
        .map(|month0| {
            let in_month: Vec<&AttendanceRecord> =
                records.iter().filter(|r| r.date.month0() == month0).collect();
            let present = in_month.iter().filter(|r| r.is_present).count();
            let total = in_month.len().max(1);

            MonthlyPoint {
                month: MONTH_NAMES[month0 as usize],
                attendance_percentage: present as f64 / total as f64 * 100.0,
            }
        })
        .collect()
}
