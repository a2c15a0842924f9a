use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: u64,
    /// `id` of the employee, not the admin-assigned code
    pub employee: u64,
    #[serde(default)]
    pub employee_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Body of `POST attendance/mark/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    pub employee: u64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Server-side narrowing for `GET attendance/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl AttendanceQuery {
    pub fn is_empty(&self) -> bool {
        self.employee.is_none() && self.date.is_none()
    }
}

/// Status selector of the attendance list; `All` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum StatusFilter {
    #[default]
    All,
    Present,
    Absent,
}

impl StatusFilter {
    pub fn matches(self, status: AttendanceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Present => status == AttendanceStatus::Present,
            StatusFilter::Absent => status == AttendanceStatus::Absent,
        }
    }
}
