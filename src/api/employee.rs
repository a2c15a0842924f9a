use crate::api::client::ApiClient;
use crate::error::ApiError;
use crate::model::{Employee, NewEmployee};
use reqwest::Method;
use tracing::{error, info, instrument};

impl ApiClient {
    /// `GET employees/`
    #[instrument(name = "get_employees", skip(self))]
    pub async fn get_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let (request, request_id) = self.request(Method::GET, self.endpoint("employees/")?);

        let result = async { Self::parse_json::<Vec<Employee>>(request.send().await?).await }.await;
        match &result {
            Ok(list) => info!(request_id = %request_id, count = list.len(), "Fetched employees"),
            Err(e) => error!(request_id = %request_id, error = %e, "Failed to fetch employees"),
        }
        result
    }

    /// `POST employees/create/`
    #[instrument(
        name = "create_employee",
        skip(self, payload),
        fields(employee_id = %payload.employee_id)
    )]
    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        let (request, request_id) = self.request(Method::POST, self.endpoint("employees/create/")?);

        let result =
            async { Self::parse_json::<Employee>(request.json(payload).send().await?).await }.await;
        match &result {
            Ok(created) => info!(request_id = %request_id, id = created.id, "Employee created"),
            Err(e) => error!(request_id = %request_id, error = %e, "Failed to create employee"),
        }
        result
    }

    /// `DELETE employees/delete/{id}/`. Any 2xx counts as deleted; the body is ignored.
    #[instrument(name = "delete_employee", skip(self))]
    pub async fn delete_employee(&self, id: u64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("employees/delete/{id}/"))?;
        let (request, request_id) = self.request(Method::DELETE, url);

        let result = async {
            Self::ensure_success(request.send().await?).await?;
            Ok::<(), ApiError>(())
        }
        .await;
        match &result {
            Ok(()) => info!(request_id = %request_id, "Employee deleted"),
            Err(e) => error!(request_id = %request_id, error = %e, "Failed to delete employee"),
        }
        result
    }
}
