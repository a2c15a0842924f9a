use crate::api::HrmApi;
use crate::model::{Employee, NewEmployee};
use crate::notify::Notifier;
use crate::utils::validation::{is_blank, is_valid_email};
use crate::views::SubmitOutcome;
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::EmployeeId,
        EmployeeField::FullName,
        EmployeeField::Email,
        EmployeeField::Department,
    ];

    /// Name of the field in the JSON payload and in error bodies.
    pub fn key(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::FullName => "full_name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
        }
    }
}

/// Registration form for a new employee.
#[derive(Debug, Default)]
pub struct EmployeeForm {
    values: NewEmployee,
    errors: BTreeMap<EmployeeField, String>,
    submitting: bool,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &NewEmployee {
        &self.values
    }

    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.values.employee_id,
            EmployeeField::FullName => &self.values.full_name,
            EmployeeField::Email => &self.values.email,
            EmployeeField::Department => &self.values.department,
        }
    }

    /// Editing a field clears its error.
    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EmployeeField::EmployeeId => self.values.employee_id = value,
            EmployeeField::FullName => self.values.full_name = value,
            EmployeeField::Email => self.values.email = value,
            EmployeeField::Department => self.values.department = value,
        }
        self.errors.remove(&field);
    }

    pub fn error(&self, field: EmployeeField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<EmployeeField, String> {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> BTreeMap<EmployeeField, String> {
        let mut errs = BTreeMap::new();
        let v = &self.values;

        if is_blank(&v.employee_id) {
            errs.insert(EmployeeField::EmployeeId, "Employee ID is required".to_string());
        }
        if is_blank(&v.full_name) {
            errs.insert(EmployeeField::FullName, "Full name is required".to_string());
        }
        if is_blank(&v.email) {
            errs.insert(EmployeeField::Email, "Email is required".to_string());
        } else if !is_valid_email(&v.email) {
            errs.insert(EmployeeField::Email, "Enter a valid email address".to_string());
        }
        if is_blank(&v.department) {
            errs.insert(EmployeeField::Department, "Department is required".to_string());
        }
        errs
    }

    /// Validate, then create the employee.
    ///
    /// On success the form is reset and `refresh` runs once. On rejection
    /// the values stay, so the admin can correct them.
    pub async fn submit<A, N>(
        &mut self,
        api: &A,
        notifier: &N,
        refresh: impl FnOnce(),
    ) -> SubmitOutcome<Employee>
    where
        A: HrmApi + ?Sized,
        N: Notifier + ?Sized,
    {
        let errs = self.validate();
        if !errs.is_empty() {
            debug!(invalid = errs.len(), "Employee form failed validation");
            self.errors = errs;
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;
        let result = api.create_employee(&self.values).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                info!(id = created.id, employee_id = %created.employee_id, "Employee added");
                self.values = NewEmployee::default();
                self.errors.clear();
                refresh();
                notifier.success("Employee added successfully!");
                SubmitOutcome::Accepted(created)
            }
            Err(e) => {
                let keys: Vec<&str> = EmployeeField::ALL.iter().map(|f| f.key()).collect();
                let msg = e.describe(&keys, "Something went wrong");

                // Local validation passed, so anything left is from an earlier rejection
                self.errors.clear();
                if let Some(body) = e.body() {
                    for field in EmployeeField::ALL {
                        if let Some(field_msg) = body.field(field.key()) {
                            self.errors.insert(field, field_msg.to_string());
                        }
                    }
                }

                notifier.error("Failed to add employee", &msg);
                SubmitOutcome::Rejected(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeApi, employee};
    use crate::notify::{MemoryNotifier, ToastKind};
    use serde_json::json;

    fn filled() -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.set(EmployeeField::EmployeeId, "EMP001");
        form.set(EmployeeField::FullName, "Jane Smith");
        form.set(EmployeeField::Email, "jane@corp.com");
        form.set(EmployeeField::Department, "Engineering");
        form
    }

    #[tokio::test]
    async fn blank_fields_block_submission() {
        for field in EmployeeField::ALL {
            let api = FakeApi::default();
            let notifier = MemoryNotifier::default();
            let mut form = filled();
            form.set(field, "   ");

            let mut refreshed = 0;
            let outcome = form.submit(&api, &notifier, || refreshed += 1).await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert!(form.error(field).is_some(), "{field:?} should be marked");
            assert_eq!(form.errors().len(), 1);
            assert_eq!(api.calls().create_employee, 0);
            assert_eq!(refreshed, 0);
            assert!(notifier.toasts().is_empty());
        }
    }

    #[tokio::test]
    async fn every_blank_field_is_marked_individually() {
        let api = FakeApi::default();
        let notifier = MemoryNotifier::default();
        let mut form = EmployeeForm::new();

        let outcome = form.submit(&api, &notifier, || {}).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(form.error(EmployeeField::EmployeeId), Some("Employee ID is required"));
        assert_eq!(form.error(EmployeeField::FullName), Some("Full name is required"));
        assert_eq!(form.error(EmployeeField::Email), Some("Email is required"));
        assert_eq!(form.error(EmployeeField::Department), Some("Department is required"));
    }

    #[tokio::test]
    async fn malformed_email_rejected_without_network() {
        let api = FakeApi::default();
        let notifier = MemoryNotifier::default();
        let mut form = filled();
        form.set(EmployeeField::Email, "abc");

        let outcome = form.submit(&api, &notifier, || {}).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(form.error(EmployeeField::Email), Some("Enter a valid email address"));
        assert_eq!(api.calls().create_employee, 0);
    }

    #[tokio::test]
    async fn editing_a_field_clears_only_its_error() {
        let api = FakeApi::default();
        let mut form = EmployeeForm::new();
        form.submit(&api, &MemoryNotifier::default(), || {}).await;

        form.set(EmployeeField::FullName, "J");
        assert!(form.error(EmployeeField::FullName).is_none());
        assert!(form.error(EmployeeField::EmployeeId).is_some());
    }

    #[tokio::test]
    async fn success_resets_form_and_refreshes_once() {
        let api = FakeApi::default();
        let notifier = MemoryNotifier::default();
        let mut form = filled();

        let mut refreshed = 0;
        let outcome = form.submit(&api, &notifier, || refreshed += 1).await;

        let SubmitOutcome::Accepted(created) = outcome else {
            panic!("expected acceptance");
        };
        assert_eq!(created.employee_id, "EMP001");
        assert_eq!(refreshed, 1);
        assert_eq!(form.values(), &NewEmployee::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(api.calls().create_employee, 1);

        let toast = notifier.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Employee added successfully!");
    }

    #[tokio::test]
    async fn server_field_error_is_surfaced() {
        let api = FakeApi::with_employees(vec![employee(1, "EMP001", "Someone")]);
        api.reject_next_with(json!({"employee_id": ["Employee ID already exists"]}));
        let notifier = MemoryNotifier::default();
        let mut form = filled();

        let mut refreshed = 0;
        let outcome = form.submit(&api, &notifier, || refreshed += 1).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Employee ID already exists".to_string())
        );
        assert_eq!(refreshed, 0);
        assert_eq!(form.value(EmployeeField::FullName), "Jane Smith");
        assert_eq!(
            form.error(EmployeeField::EmployeeId),
            Some("Employee ID already exists")
        );

        let toast = notifier.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Failed to add employee");
        assert_eq!(toast.description.as_deref(), Some("Employee ID already exists"));
    }

    #[tokio::test]
    async fn field_message_outranks_non_field_errors() {
        let api = FakeApi::default();
        api.reject_next_with(json!({
            "employee_id": ["Employee ID already exists"],
            "non_field_errors": ["Duplicate record"]
        }));
        let mut form = filled();

        let outcome = form.submit(&api, &MemoryNotifier::default(), || {}).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Employee ID already exists".to_string())
        );
    }

    #[tokio::test]
    async fn later_rejection_replaces_earlier_field_errors() {
        let api = FakeApi::default();
        let notifier = MemoryNotifier::default();
        let mut form = filled();

        api.reject_next_with(json!({"employee_id": ["Employee ID already exists"]}));
        form.submit(&api, &notifier, || {}).await;
        assert!(form.error(EmployeeField::EmployeeId).is_some());

        api.reject_next_with(json!({"email": ["Employee with this email already exists."]}));
        form.submit(&api, &notifier, || {}).await;

        assert_eq!(form.error(EmployeeField::EmployeeId), None);
        assert_eq!(
            form.error(EmployeeField::Email),
            Some("Employee with this email already exists.")
        );
        assert_eq!(form.errors().len(), 1);
    }

    #[tokio::test]
    async fn detail_beats_field_errors() {
        let api = FakeApi::default();
        api.reject_next_with(json!({"detail": "Read only", "email": ["bad"]}));
        let mut form = filled();

        let outcome = form.submit(&api, &MemoryNotifier::default(), || {}).await;
        assert_eq!(outcome, SubmitOutcome::Rejected("Read only".to_string()));
    }

    #[tokio::test]
    async fn empty_rejection_uses_generic_message() {
        let api = FakeApi::default();
        api.reject_next_with(json!({}));
        let notifier = MemoryNotifier::default();
        let mut form = filled();

        let outcome = form.submit(&api, &notifier, || {}).await;
        assert_eq!(outcome, SubmitOutcome::Rejected("Something went wrong".to_string()));
    }
}
