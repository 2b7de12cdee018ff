use sqlx::SqlitePool;
use tracing::debug;

use crate::models::Course;

pub async fn fetch_courses(db: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT course_id, course_name, course_duration, course_type FROM courses ORDER BY course_id"
    )
    .fetch_all(db)
    .await
}

pub async fn find_course_by_id(db: &SqlitePool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT course_id, course_name, course_duration, course_type FROM courses WHERE course_id = ?"
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Inserts a course and returns it with its assigned id. `course.course_id` is ignored.
pub async fn insert_course(db: &SqlitePool, course: &Course) -> Result<Course, sqlx::Error> {
    let inserted = sqlx::query_as::<_, Course>(
        r#"
        INSERT INTO courses (course_name, course_duration, course_type)
        VALUES (?1, ?2, ?3)
        RETURNING course_id, course_name, course_duration, course_type
        "#,
    )
    .bind(&course.course_name)
    .bind(course.course_duration)
    .bind(course.course_type)
    .fetch_one(db)
    .await?;

    debug!("inserted course {}", inserted.course_id);
    Ok(inserted)
}

pub async fn update_course(
    db: &SqlitePool,
    id: i64,
    course: &Course,
) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        r#"
        UPDATE courses
        SET course_name = ?1,
            course_duration = ?2,
            course_type = ?3
        WHERE course_id = ?4
        RETURNING course_id, course_name, course_duration, course_type
        "#,
    )
    .bind(&course.course_name)
    .bind(course.course_duration)
    .bind(course.course_type)
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Removes a course, returning the row as it was before deletion.
pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        r#"
        DELETE FROM courses
        WHERE course_id = ?1
        RETURNING course_id, course_name, course_duration, course_type
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}
