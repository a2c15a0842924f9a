use crate::api::HrmApi;
use crate::confirm::Confirm;
use crate::error::ApiError;
use crate::model::Employee;
use crate::notify::Notifier;
use crate::utils::format::record_count;
use crate::views::LoadState;
use futures::future::join_all;
use std::collections::HashSet;
use tracing::{info, warn};

pub const LOAD_ERROR: &str = "Failed to load employees. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Backend refused; the row is still listed
    Failed,
    /// The admin declined the confirmation
    Cancelled,
    /// A delete for this row is already running
    Busy,
    NotListed,
}

/// A confirmed delete whose request has not resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: u64,
    pub name: String,
}

#[derive(Debug)]
pub struct EmployeeList {
    employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    deleting: HashSet<u64>,
}

impl Default for EmployeeList {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeList {
    /// A list that has not fetched yet is loading.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
            error: None,
            deleting: HashSet::new(),
        }
    }

    /// Fetch every employee. Also used as the retry action.
    pub async fn load<A: HrmApi + ?Sized>(&mut self, api: &A) {
        self.loading = true;
        self.error = None;

        match api.list_employees().await {
            Ok(employees) => self.employees = employees,
            Err(e) => {
                warn!(error = %e, "Employee list fetch failed");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }

        self.loading = false;
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn state(&self) -> LoadState {
        if self.loading {
            LoadState::Loading
        } else if let Some(e) = &self.error {
            LoadState::Error(e.clone())
        } else if self.employees.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Ready
        }
    }

    /// Header caption: "Loading..." or the record count.
    pub fn caption(&self) -> String {
        if self.loading {
            "Loading...".to_string()
        } else {
            record_count(self.employees.len())
        }
    }

    pub fn is_deleting(&self, id: u64) -> bool {
        self.deleting.contains(&id)
    }

    /// Ask for confirmation and mark the row busy.
    pub fn begin_delete<C: Confirm + ?Sized>(
        &mut self,
        id: u64,
        confirm: &C,
    ) -> Result<PendingDelete, DeleteOutcome> {
        if self.deleting.contains(&id) {
            return Err(DeleteOutcome::Busy);
        }
        let name = self
            .employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.full_name.clone())
            .ok_or(DeleteOutcome::NotListed)?;

        if !confirm.confirm(&format!(
            "Remove {name} from the system? This cannot be undone."
        )) {
            return Err(DeleteOutcome::Cancelled);
        }

        self.deleting.insert(id);
        Ok(PendingDelete { id, name })
    }

    /// Apply the backend's answer. The row leaves the list only on success.
    pub fn finish_delete<N: Notifier + ?Sized>(
        &mut self,
        pending: PendingDelete,
        result: Result<(), ApiError>,
        notifier: &N,
    ) -> DeleteOutcome {
        self.deleting.remove(&pending.id);

        match result {
            Ok(()) => {
                self.employees.retain(|e| e.id != pending.id);
                info!(id = pending.id, "Employee removed from list");
                notifier.success(&format!("{} removed successfully", pending.name));
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(id = pending.id, error = %e, "Employee delete failed");
                notifier.error("Failed to delete employee", "Please try again.");
                DeleteOutcome::Failed
            }
        }
    }

    pub async fn delete<A, N, C>(
        &mut self,
        api: &A,
        notifier: &N,
        confirm: &C,
        id: u64,
    ) -> DeleteOutcome
    where
        A: HrmApi + ?Sized,
        N: Notifier + ?Sized,
        C: Confirm + ?Sized,
    {
        let pending = match self.begin_delete(id, confirm) {
            Ok(p) => p,
            Err(outcome) => return outcome,
        };
        let result = api.delete_employee(id).await;
        self.finish_delete(pending, result, notifier)
    }

    /// Confirm each row, then run the confirmed deletes concurrently.
    /// Outcomes come back in the order of `ids`.
    pub async fn delete_many<A, N, C>(
        &mut self,
        api: &A,
        notifier: &N,
        confirm: &C,
        ids: &[u64],
    ) -> Vec<(u64, DeleteOutcome)>
    where
        A: HrmApi + ?Sized,
        N: Notifier + ?Sized,
        C: Confirm + ?Sized,
    {
        let mut slots: Vec<Option<DeleteOutcome>> = vec![None; ids.len()];
        let mut pending = Vec::new();

        for (slot, &id) in ids.iter().enumerate() {
            match self.begin_delete(id, confirm) {
                Ok(p) => pending.push((slot, p)),
                Err(outcome) => slots[slot] = Some(outcome),
            }
        }

        let results = join_all(pending.iter().map(|(_, p)| api.delete_employee(p.id))).await;

        for ((slot, p), result) in pending.into_iter().zip(results) {
            slots[slot] = Some(self.finish_delete(p, result, notifier));
        }

        ids.iter()
            .zip(slots)
            .filter_map(|(&id, outcome)| outcome.map(|o| (id, o)))
            .collect()
    }
}
