//! View state for the two workflows. Each form and list owns its state;
//! screens wire a form's success to a refresh of the sibling list.

pub mod attendance_form;
pub mod attendance_list;
pub mod employee_form;
pub mod employee_list;
pub mod screen;

pub use attendance_form::{AttendanceField, AttendanceForm};
pub use attendance_list::{AttendanceList, AttendanceSummary};
pub use employee_form::{EmployeeField, EmployeeForm};
pub use employee_list::{DeleteOutcome, EmployeeList, PendingDelete};
pub use screen::{AttendanceScreen, EmployeesScreen};

/// What a list currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    /// Fetch failed; `load` again to retry
    Error(String),
    Empty,
    /// Rows were fetched but the active filters hide all of them
    NoMatches,
    Ready,
}

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// Local validation failed; nothing was sent
    Invalid,
    /// The backend refused; carries the message shown to the user
    Rejected(String),
    Accepted(T),
}

impl<T> SubmitOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}
