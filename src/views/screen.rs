use crate::api::HrmApi;
use crate::model::{Attendance, AttendanceQuery, Employee};
use crate::notify::Notifier;
use crate::views::{AttendanceForm, AttendanceList, EmployeeForm, EmployeeList, SubmitOutcome};
use chrono::NaiveDate;
use tracing::debug;

/// Registration form plus the employee table it refreshes.
#[derive(Debug, Default)]
pub struct EmployeesScreen {
    pub form: EmployeeForm,
    pub list: EmployeeList,
    refresh_generation: u64,
}

impl EmployeesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mount<A: HrmApi + ?Sized>(&mut self, api: &A) {
        self.list.load(api).await;
    }

    /// How many times a submission has refreshed the list.
    pub fn refresh_generation(&self) -> u64 {
        self.refresh_generation
    }

    pub async fn submit<A, N>(&mut self, api: &A, notifier: &N) -> SubmitOutcome<Employee>
    where
        A: HrmApi + ?Sized,
        N: Notifier + ?Sized,
    {
        let mut refresh = false;
        let outcome = self.form.submit(api, notifier, || refresh = true).await;

        if refresh {
            self.refresh_generation += 1;
            debug!(generation = self.refresh_generation, "Refreshing employee list");
            self.list.load(api).await;
        }
        outcome
    }
}

/// Mark-attendance form plus the attendance table it refreshes.
#[derive(Debug)]
pub struct AttendanceScreen {
    pub form: AttendanceForm,
    pub list: AttendanceList,
    refresh_generation: u64,
}

impl AttendanceScreen {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_query(today, AttendanceQuery::default())
    }

    pub fn with_query(today: NaiveDate, query: AttendanceQuery) -> Self {
        Self {
            form: AttendanceForm::new(today),
            list: AttendanceList::with_query(query),
            refresh_generation: 0,
        }
    }

    /// The roster and the records are fetched independently.
    pub async fn mount<A: HrmApi + ?Sized>(&mut self, api: &A) {
        futures::join!(self.form.load_roster(api), self.list.load(api));
    }

    pub fn refresh_generation(&self) -> u64 {
        self.refresh_generation
    }

    pub async fn submit<A, N>(&mut self, api: &A, notifier: &N) -> SubmitOutcome<Attendance>
    where
        A: HrmApi + ?Sized,
        N: Notifier + ?Sized,
    {
        let mut refresh = false;
        let outcome = self.form.submit(api, notifier, || refresh = true).await;

        if refresh {
            self.refresh_generation += 1;
            debug!(generation = self.refresh_generation, "Refreshing attendance list");
            self.list.load(api).await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeApi, employee};
    use crate::notify::MemoryNotifier;
    use crate::views::{EmployeeField, LoadState};

    #[tokio::test]
    async fn employee_creation_refreshes_list_exactly_once() {
        let api = FakeApi::default();
        let notifier = MemoryNotifier::default();
        let mut screen = EmployeesScreen::new();
        screen.mount(&api).await;
        assert_eq!(screen.list.state(), LoadState::Empty);
        assert_eq!(api.calls().list_employees, 1);

        screen.form.set(EmployeeField::EmployeeId, "EMP010");
        screen.form.set(EmployeeField::FullName, "Li Wei");
        screen.form.set(EmployeeField::Email, "li.wei@corp.com");
        screen.form.set(EmployeeField::Department, "Finance");

        assert!(screen.submit(&api, &notifier).await.is_accepted());
        assert_eq!(api.calls().list_employees, 2);
        assert_eq!(screen.refresh_generation(), 1);
        assert_eq!(screen.list.employees().len(), 1);
        assert_eq!(screen.form.value(EmployeeField::FullName), "");
    }

    #[tokio::test]
    async fn invalid_submission_does_not_refresh() {
        let api = FakeApi::default();
        let mut screen = EmployeesScreen::new();
        screen.mount(&api).await;

        let outcome = screen.submit(&api, &MemoryNotifier::default()).await;
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(api.calls().list_employees, 1);
        assert_eq!(screen.refresh_generation(), 0);
    }

    #[tokio::test]
    async fn marking_attendance_refreshes_records() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let api = FakeApi::with_employees(vec![employee(1, "EMP001", "Jane Smith")]);
        let notifier = MemoryNotifier::default();
        let mut screen = AttendanceScreen::new(today);

        screen.mount(&api).await;
        assert_eq!(screen.form.roster().len(), 1);
        assert_eq!(screen.list.state(), LoadState::Empty);

        screen.form.select_employee(1);
        assert!(screen.submit(&api, &notifier).await.is_accepted());

        assert_eq!(api.calls().list_attendance, 2);
        assert_eq!(screen.refresh_generation(), 1);
        assert_eq!(screen.list.summary().present, 1);
        assert_eq!(screen.list.records()[0].employee_name, "Jane Smith");
    }
}
