//! Typed client over the backend's CRUD endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;

use clinica_core::models::{
    decode_records, Appointment, Doctor, HistoryEntry, NewAppointment, NewDoctor, NewHistoryEntry,
    NewPatient, Patient,
};

use crate::{AccessToken, ApiError, ApiResult};

/// Client for the clinic backend.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (scheme + host + port).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    // =========================================================================
    // Patients
    // =========================================================================

    pub async fn list_patients(&self, token: &AccessToken) -> ApiResult<Vec<Patient>> {
        self.fetch_list(token, "/pacientes").await
    }

    pub async fn create_patient(
        &self,
        token: &AccessToken,
        patient: &NewPatient,
    ) -> ApiResult<Patient> {
        self.post_json(token, "/pacientes", patient).await
    }

    /// Full replace of the editable fields.
    pub async fn update_patient(
        &self,
        token: &AccessToken,
        id: i64,
        patient: &NewPatient,
    ) -> ApiResult<Patient> {
        self.put_json(token, &format!("/pacientes/{id}"), patient).await
    }

    /// Deletes the patient; the backend cascades appointments and history.
    pub async fn delete_patient(&self, token: &AccessToken, id: i64) -> ApiResult<()> {
        self.delete(token, &format!("/pacientes/{id}")).await
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    pub async fn list_appointments(&self, token: &AccessToken) -> ApiResult<Vec<Appointment>> {
        self.fetch_list(token, "/citas").await
    }

    pub async fn create_appointment(
        &self,
        token: &AccessToken,
        appointment: &NewAppointment,
    ) -> ApiResult<Appointment> {
        self.post_json(token, "/citas", appointment).await
    }

    pub async fn delete_appointment(&self, token: &AccessToken, id: i64) -> ApiResult<()> {
        self.delete(token, &format!("/citas/{id}")).await
    }

    // =========================================================================
    // Clinical history
    // =========================================================================

    pub async fn list_history(&self, token: &AccessToken) -> ApiResult<Vec<HistoryEntry>> {
        self.fetch_list(token, "/historiales").await
    }

    pub async fn get_history_entry(
        &self,
        token: &AccessToken,
        id: i64,
    ) -> ApiResult<HistoryEntry> {
        self.get_json(token, &format!("/historiales/{id}")).await
    }

    pub async fn create_history_entry(
        &self,
        token: &AccessToken,
        entry: &NewHistoryEntry,
    ) -> ApiResult<HistoryEntry> {
        self.post_json(token, "/historiales", entry).await
    }

    pub async fn delete_history_entry(&self, token: &AccessToken, id: i64) -> ApiResult<()> {
        self.delete(token, &format!("/historiales/{id}")).await
    }

    // =========================================================================
    // Doctors
    // =========================================================================

    pub async fn list_doctors(&self, token: &AccessToken) -> ApiResult<Vec<Doctor>> {
        self.fetch_list(token, "/doctores").await
    }

    pub async fn create_doctor(
        &self,
        token: &AccessToken,
        doctor: &NewDoctor,
    ) -> ApiResult<Doctor> {
        self.post_json(token, "/doctores", doctor).await
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch a collection, decoding record by record so one malformed entry
    /// cannot fail the batch.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
    ) -> ApiResult<Vec<T>> {
        tracing::debug!(path, "GET collection");
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token.secret())
            .send()
            .await?;
        let response = Self::check_status(response, path)?;

        let values: Vec<serde_json::Value> = response.json().await?;
        let batch = decode_records(values);
        if batch.skipped > 0 {
            tracing::warn!(path, skipped = batch.skipped, "dropped malformed records");
        }
        Ok(batch.records)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
    ) -> ApiResult<T> {
        tracing::debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token.secret())
            .send()
            .await?;
        Ok(Self::check_status(response, path)?.json().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!(path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token.secret())
            .json(body)
            .send()
            .await?;
        Ok(Self::check_status(response, path)?.json().await?)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!(path, "PUT");
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(token.secret())
            .json(body)
            .send()
            .await?;
        Ok(Self::check_status(response, path)?.json().await?)
    }

    async fn delete(&self, token: &AccessToken, path: &str) -> ApiResult<()> {
        tracing::debug!(path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(token.secret())
            .send()
            .await?;
        Self::check_status(response, path)?;
        Ok(())
    }

    fn check_status(response: reqwest::Response, path: &str) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status,
                path: path.to_string(),
            })
        }
    }
}
