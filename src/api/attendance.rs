use crate::api::client::ApiClient;
use crate::error::ApiError;
use crate::model::{Attendance, AttendanceQuery, NewAttendance};
use reqwest::Method;
use tracing::{error, info, instrument};

impl ApiClient {
    /// `GET attendance/`, optionally narrowed server-side by employee and date.
    #[instrument(name = "get_attendance", skip(self))]
    pub async fn get_attendance(&self, query: AttendanceQuery) -> Result<Vec<Attendance>, ApiError> {
        let (mut request, request_id) = self.request(Method::GET, self.endpoint("attendance/")?);
        if !query.is_empty() {
            request = request.query(&query);
        }

        let result =
            async { Self::parse_json::<Vec<Attendance>>(request.send().await?).await }.await;
        match &result {
            Ok(list) => info!(request_id = %request_id, count = list.len(), "Fetched attendance"),
            Err(e) => error!(request_id = %request_id, error = %e, "Failed to fetch attendance"),
        }
        result
    }

    /// `POST attendance/mark/`
    #[instrument(
        name = "mark_attendance",
        skip(self, payload),
        fields(employee = payload.employee, date = %payload.date, status = %payload.status)
    )]
    pub async fn mark_attendance(&self, payload: &NewAttendance) -> Result<Attendance, ApiError> {
        let (request, request_id) = self.request(Method::POST, self.endpoint("attendance/mark/")?);

        let result =
            async { Self::parse_json::<Attendance>(request.json(payload).send().await?).await }
                .await;
        match &result {
            Ok(record) => info!(request_id = %request_id, id = record.id, "Attendance marked"),
            Err(e) => error!(request_id = %request_id, error = %e, "Failed to mark attendance"),
        }
        result
    }
}
