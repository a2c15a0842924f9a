pub mod attendance;
pub mod client;
pub mod employee;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::ApiError;
use crate::model::{Attendance, AttendanceQuery, Employee, NewAttendance, NewEmployee};
use async_trait::async_trait;

pub use client::ApiClient;

/// The backend as seen by forms and lists.
#[async_trait]
pub trait HrmApi: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;

    async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError>;

    async fn delete_employee(&self, id: u64) -> Result<(), ApiError>;

    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<Attendance>, ApiError>;

    async fn mark_attendance(&self, payload: &NewAttendance) -> Result<Attendance, ApiError>;
}

#[async_trait]
impl HrmApi for ApiClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_employees().await
    }

    async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        ApiClient::create_employee(self, payload).await
    }

    async fn delete_employee(&self, id: u64) -> Result<(), ApiError> {
        ApiClient::delete_employee(self, id).await
    }

    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<Attendance>, ApiError> {
        self.get_attendance(query).await
    }

    async fn mark_attendance(&self, payload: &NewAttendance) -> Result<Attendance, ApiError> {
        ApiClient::mark_attendance(self, payload).await
    }
}
