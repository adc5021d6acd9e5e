//! The `Course` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;
use super::schema::{Field, FieldKind};

/// A course as stored and served. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<Description>>,
    /// Total length, in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Vec<Instructor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Vec<Certificate>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
}

const DESCRIPTION_FIELDS: &[Field] = &[
    Field::new("about", FieldKind::Text),
    Field::new("learning", FieldKind::List(&FieldKind::Text)),
    Field::new("materials", FieldKind::List(&FieldKind::Text)),
];

const INSTRUCTOR_FIELDS: &[Field] = &[
    Field::new("user", FieldKind::Text),
    Field::new("title", FieldKind::Text),
];

const CERTIFICATE_FIELDS: &[Field] = &[Field::new("isLocked", FieldKind::Boolean)];

const COURSE_FIELDS: &[Field] = &[
    Field::new("title", FieldKind::Text),
    Field::new("description", FieldKind::List(&FieldKind::Object(DESCRIPTION_FIELDS))),
    Field::new("duration", FieldKind::Number),
    Field::new("rating", FieldKind::Number),
    Field::new("level", FieldKind::Text),
    Field::new("instructor", FieldKind::List(&FieldKind::Object(INSTRUCTOR_FIELDS))),
    Field::new("language", FieldKind::Text),
    Field::new("lastUpdated", FieldKind::DateTime),
    Field::new("courseType", FieldKind::Text),
    Field::new("enrolled", FieldKind::Number),
    Field::new("certificate", FieldKind::List(&FieldKind::Object(CERTIFICATE_FIELDS))),
];

impl Resource for Course {
    const NAME: &'static str = "Course";
    const PATH: &'static str = "courses";

    fn fields() -> &'static [Field] {
        COURSE_FIELDS
    }
}
