//! Conversions between the stored [`Course`] row and the wire [`CourseDto`].
//!
//! Storage keeps the course type as an integer code; the wire carries the
//! named variant. Codes outside the declared set are rejected, never coerced.

use thiserror::Error;

use super::course::{Course, CourseDto, CourseType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("unknown course type code: {0}")]
    UnknownCourseType(i32),
}

impl TryFrom<i32> for CourseType {
    type Error = MappingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CourseType::Engineering),
            2 => Ok(CourseType::Medical),
            3 => Ok(CourseType::Management),
            other => Err(MappingError::UnknownCourseType(other)),
        }
    }
}

impl From<CourseType> for i32 {
    fn from(course_type: CourseType) -> Self {
        course_type as i32
    }
}

impl TryFrom<Course> for CourseDto {
    type Error = MappingError;

    fn try_from(course: Course) -> Result<Self, Self::Error> {
        Ok(CourseDto {
            course_id: course.course_id,
            course_name: course.course_name,
            course_duration: course.course_duration,
            course_type: CourseType::try_from(course.course_type)?,
        })
    }
}

impl From<CourseDto> for Course {
    fn from(dto: CourseDto) -> Self {
        Course {
            course_id: dto.course_id,
            course_name: dto.course_name,
            course_duration: dto.course_duration,
            course_type: dto.course_type.into(),
        }
    }
}
