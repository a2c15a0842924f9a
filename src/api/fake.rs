//! In-memory [`HrmApi`] for view tests. Counts every call.

use super::HrmApi;
use crate::error::{ApiError, ErrorBody};
use crate::model::{Attendance, AttendanceQuery, Employee, NewAttendance, NewEmployee};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
pub struct Calls {
    pub list_employees: usize,
    pub create_employee: usize,
    pub delete_employee: Vec<u64>,
    pub list_attendance: usize,
    pub mark_attendance: usize,
}

#[derive(Default)]
pub struct FakeApi {
    pub employees: Mutex<Vec<Employee>>,
    pub attendance: Mutex<Vec<Attendance>>,
    pub calls: Mutex<Calls>,

    pub fail_list: Mutex<bool>,
    pub fail_delete: Mutex<HashSet<u64>>,
    /// When set, create/mark are rejected with this JSON body
    pub reject_with: Mutex<Option<Value>>,
}

pub fn employee(id: u64, code: &str, name: &str) -> Employee {
    Employee {
        id,
        employee_id: code.to_string(),
        full_name: name.to_string(),
        email: format!("{}@example.com", code.to_lowercase()),
        department: "Engineering".to_string(),
        created_at: None,
    }
}

fn rejected(status: u16, body: &Value) -> ApiError {
    ApiError::Rejected {
        status,
        body: ErrorBody::parse(&body.to_string()),
    }
}

impl FakeApi {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let api = Self::default();
        *api.employees.lock().unwrap() = employees;
        api
    }

    pub fn with_attendance(records: Vec<Attendance>) -> Self {
        let api = Self::default();
        *api.attendance.lock().unwrap() = records;
        api
    }

    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }

    pub fn fail_delete_of(&self, id: u64) {
        self.fail_delete.lock().unwrap().insert(id);
    }

    pub fn reject_next_with(&self, body: Value) {
        *self.reject_with.lock().unwrap() = Some(body);
    }

    pub fn calls(&self) -> std::sync::MutexGuard<'_, Calls> {
        self.calls.lock().unwrap()
    }

    fn list_failure(&self) -> Option<ApiError> {
        if *self.fail_list.lock().unwrap() {
            Some(rejected(500, &serde_json::json!({"detail": "boom"})))
        } else {
            None
        }
    }
}

#[async_trait]
impl HrmApi for FakeApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.calls().list_employees += 1;
        if let Some(e) = self.list_failure() {
            return Err(e);
        }
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        self.calls().create_employee += 1;
        if let Some(body) = self.reject_with.lock().unwrap().take() {
            return Err(rejected(400, &body));
        }
        let mut employees = self.employees.lock().unwrap();
        let id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let created = Employee {
            id,
            employee_id: payload.employee_id.clone(),
            full_name: payload.full_name.clone(),
            email: payload.email.clone(),
            department: payload.department.clone(),
            created_at: None,
        };
        employees.insert(0, created.clone());
        Ok(created)
    }

    async fn delete_employee(&self, id: u64) -> Result<(), ApiError> {
        self.calls().delete_employee.push(id);
        if self.fail_delete.lock().unwrap().contains(&id) {
            return Err(rejected(500, &serde_json::json!({})));
        }
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(rejected(404, &serde_json::json!({"error": "Employee not found"})));
        }
        Ok(())
    }

    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<Attendance>, ApiError> {
        self.calls().list_attendance += 1;
        if let Some(e) = self.list_failure() {
            return Err(e);
        }
        Ok(self
            .attendance
            .lock()
            .unwrap()
            .iter()
            .filter(|a| query.employee.is_none_or(|id| a.employee == id))
            .filter(|a| query.date.is_none_or(|d| a.date == d))
            .cloned()
            .collect())
    }

    async fn mark_attendance(&self, payload: &NewAttendance) -> Result<Attendance, ApiError> {
        self.calls().mark_attendance += 1;
        if let Some(body) = self.reject_with.lock().unwrap().take() {
            return Err(rejected(400, &body));
        }
        let name = self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == payload.employee)
            .map(|e| e.full_name.clone())
            .unwrap_or_default();
        let mut records = self.attendance.lock().unwrap();
        let record = Attendance {
            id: records.len() as u64 + 1,
            employee: payload.employee,
            employee_name: name,
            date: payload.date,
            status: payload.status,
        };
        records.push(record.clone());
        Ok(record)
    }
}
