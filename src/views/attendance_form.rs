use crate::api::HrmApi;
use crate::error::NON_FIELD_ERRORS;
use crate::model::{Attendance, AttendanceStatus, Employee, NewAttendance};
use crate::notify::Notifier;
use crate::views::SubmitOutcome;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttendanceField {
    Employee,
    Date,
}

/// Marks one employee Present or Absent for one day.
#[derive(Debug)]
pub struct AttendanceForm {
    roster: Vec<Employee>,
    roster_loading: bool,
    employee: Option<u64>,
    date: Option<NaiveDate>,
    status: AttendanceStatus,
    today: NaiveDate,
    errors: BTreeMap<AttendanceField, String>,
    submitting: bool,
}

impl AttendanceForm {
    /// Date defaults to `today`, which is also the latest date accepted.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            roster: Vec::new(),
            roster_loading: true,
            employee: None,
            date: Some(today),
            status: AttendanceStatus::Present,
            today,
            errors: BTreeMap::new(),
            submitting: false,
        }
    }

    /// Fill the employee selector. A failure leaves it empty.
    pub async fn load_roster<A: HrmApi + ?Sized>(&mut self, api: &A) {
        self.roster_loading = true;
        match api.list_employees().await {
            Ok(employees) => self.roster = employees,
            Err(e) => warn!(error = %e, "Could not load employees for attendance form"),
        }
        self.roster_loading = false;
    }

    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    pub fn is_roster_loading(&self) -> bool {
        self.roster_loading
    }

    pub fn employee(&self) -> Option<u64> {
        self.employee
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    pub fn max_date(&self) -> NaiveDate {
        self.today
    }

    pub fn select_employee(&mut self, id: u64) {
        self.employee = Some(id);
        self.errors.remove(&AttendanceField::Employee);
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
        self.errors.remove(&AttendanceField::Date);
    }

    pub fn set_status(&mut self, status: AttendanceStatus) {
        self.status = status;
    }

    pub fn error(&self, field: AttendanceField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> BTreeMap<AttendanceField, String> {
        let mut errs = BTreeMap::new();

        if self.employee.is_none() {
            errs.insert(AttendanceField::Employee, "Please select an employee".to_string());
        }
        match self.date {
            None => {
                errs.insert(AttendanceField::Date, "Please select a date".to_string());
            }
            Some(d) if d > self.today => {
                errs.insert(AttendanceField::Date, "Date cannot be in the future".to_string());
            }
            Some(_) => {}
        }
        errs
    }

    /// Validate, then mark attendance. `on_success` runs once when the
    /// backend accepts. The selection is kept either way.
    pub async fn submit<A, N>(
        &mut self,
        api: &A,
        notifier: &N,
        on_success: impl FnOnce(),
    ) -> SubmitOutcome<Attendance>
    where
        A: HrmApi + ?Sized,
        N: Notifier + ?Sized,
    {
        let errs = self.validate();
        if !errs.is_empty() {
            debug!(invalid = errs.len(), "Attendance form failed validation");
            self.errors = errs;
            return SubmitOutcome::Invalid;
        }
        let (Some(employee), Some(date)) = (self.employee, self.date) else {
            return SubmitOutcome::Invalid;
        };

        let payload = NewAttendance {
            employee,
            date,
            status: self.status,
        };

        self.submitting = true;
        let result = api.mark_attendance(&payload).await;
        self.submitting = false;

        match result {
            Ok(record) => {
                notifier.success("Attendance marked successfully!");
                on_success();
                SubmitOutcome::Accepted(record)
            }
            Err(e) => {
                let msg = e.describe(
                    &[NON_FIELD_ERRORS, "employee", "date", "status"],
                    "Failed to mark attendance",
                );
                notifier.error("Could not mark attendance", &msg);
                SubmitOutcome::Rejected(msg)
            }
        }
    }
}
