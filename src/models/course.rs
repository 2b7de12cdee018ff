use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Course row as stored in the `courses` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct Course {
    pub course_id: i64,
    pub course_name: String,
    pub course_duration: i32,
    /// Integer code of a [`CourseType`].
    pub course_type: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    Engineering = 1,
    Medical = 2,
    Management = 3,
}

/// Course as it travels over the wire.
///
/// `courseId` is ignored on writes; the store assigns identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[serde(default)]
    pub course_id: i64,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub course_duration: i32,
    pub course_type: CourseType,
}
