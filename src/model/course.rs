//! Data model for course records as served by the course API

use serde::{Deserialize, Serialize};

/// Role options offered by the role filter
///
/// The server stores roles as free-form strings, but the admin UI only ever
/// assigns values from this list.
pub const ROLE_OPTIONS: &[&str] = &[
    "ux designer",
    "full stack designer",
    "backend developer",
    "project manager",
    "leader",
    "ui designer",
    "ui/ux designer",
    "front end developer",
    "full stack developer",
];

/// Publication status of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Active,
    Banned,
}

impl CourseStatus {
    pub fn label(&self) -> &str {
        match self {
            CourseStatus::Active => "active",
            CourseStatus::Banned => "banned",
        }
    }
}

/// A course record from the remote collection
///
/// The wire format uses the server's field names (`_id`, `fullName`,
/// `imageUrl`); everything downstream of deserialization uses the Rust
/// names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: CourseStatus,
}

impl CourseRecord {
    /// Price as displayed in the table, with the currency suffix appended
    pub fn price_label(&self) -> String {
        format!("{}$", self.price)
    }
}

/// Fields of a course as entered in the create/edit form
///
/// Identical to [`CourseRecord`] minus the server-assigned id. Serialized
/// as the request body for create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDraft {
    pub title: String,
    pub instructor: String,
    pub author: String,
    pub language: String,
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: String,
    pub status: CourseStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "_id": "c-1",
            "title": "React Basics",
            "instructor": "Ada",
            "author": "Ada Lovelace",
            "language": "English",
            "price": 19.5,
            "imageUrl": "https://cdn.example.com/react.png",
            "fullName": "React Basics",
            "role": "front end developer",
            "status": "banned"
        }"#;

        let course: CourseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, "c-1");
        assert_eq!(course.title, "React Basics");
        assert_eq!(course.price, 19.5);
        assert_eq!(
            course.image_url.as_deref(),
            Some("https://cdn.example.com/react.png")
        );
        assert_eq!(course.full_name, "React Basics");
        assert_eq!(course.status, CourseStatus::Banned);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{ "_id": "c-2", "title": "Advanced SQL" }"#;

        let course: CourseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, "c-2");
        assert_eq!(course.price, 0.0);
        assert!(course.image_url.is_none());
        assert_eq!(course.status, CourseStatus::Active);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let course = CourseRecord {
            id: "c-3".to_string(),
            title: "Rust".to_string(),
            instructor: String::new(),
            author: String::new(),
            language: String::new(),
            price: 10.0,
            image_url: None,
            full_name: "Rust".to_string(),
            role: "leader".to_string(),
            status: CourseStatus::Active,
        };

        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["_id"], "c-3");
        assert_eq!(value["fullName"], "Rust");
        assert_eq!(value["status"], "active");
    }

    #[test]
    fn test_price_label_has_currency_suffix() {
        let mut course: CourseRecord =
            serde_json::from_str(r#"{ "_id": "c-4", "title": "T", "price": 20 }"#).unwrap();
        assert_eq!(course.price_label(), "20$");

        course.price = 19.99;
        assert_eq!(course.price_label(), "19.99$");
    }
}
