//! HTTP client for the course collection endpoints

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use thiserror::Error;

use crate::model::{CourseDraft, CourseRecord};

/// Failures talking to the course API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

/// Blocking client for the course endpoints
///
/// Only ever called from worker threads; the UI thread never blocks on a
/// request. No timeout is set beyond the transport defaults; requests are
/// not cancellable once issued.
pub struct CourseApi {
    client: Client,
    base_url: String,
}

impl CourseApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full collection; no pagination or filter parameters exist
    pub fn fetch_courses(&self) -> Result<Vec<CourseRecord>, ApiError> {
        let response = self.client.get(self.url("/api/course/get-course")).send()?;
        let response = Self::check_status(response)?;
        Ok(response.json()?)
    }

    /// Delete one record, scoped by the `id` query parameter
    ///
    /// The response body is ignored beyond success/failure.
    pub fn delete_course(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url("/api/course/delete-course"))
            .query(&[("id", id)])
            .send()?;
        Self::check_status(response)?;
        Ok(())
    }

    pub fn create_course(&self, draft: &CourseDraft) -> Result<CourseRecord, ApiError> {
        let response = self
            .client
            .post(self.url("/api/course/add-course"))
            .json(draft)
            .send()?;
        let response = Self::check_status(response)?;
        Ok(response.json()?)
    }

    pub fn update_course(&self, id: &str, draft: &CourseDraft) -> Result<CourseRecord, ApiError> {
        let response = self
            .client
            .put(self.url("/api/course/update-course"))
            .query(&[("id", id)])
            .json(draft)
            .send()?;
        let response = Self::check_status(response)?;
        Ok(response.json()?)
    }

    fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().unwrap_or_default();
            Err(ApiError::Status { status, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = CourseApi::new("http://localhost:8080/");
        assert_eq!(
            api.url("/api/course/get-course"),
            "http://localhost:8080/api/course/get-course"
        );
    }
}
