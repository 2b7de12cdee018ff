pub mod repository;

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::error::AppError;
use crate::models::Course;

/// Opens the course database and applies the embedded migrations.
///
/// The pool holds exactly one connection that is never recycled: an
/// in-memory SQLite database is dropped together with its connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("course database ready at {}", database_url);

    Ok(pool)
}

/// Owner of the course records and of identifier assignment.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, AppError>;
    async fn get(&self, id: i64) -> Result<Option<Course>, AppError>;
    async fn create(&self, course: Course) -> Result<Course, AppError>;
    async fn update(&self, id: i64, course: Course) -> Result<Option<Course>, AppError>;
    async fn delete(&self, id: i64) -> Result<Option<Course>, AppError>;
}

pub struct SqliteCourseStore {
    db: SqlitePool,
}

impl SqliteCourseStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        Ok(repository::fetch_courses(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(repository::find_course_by_id(&self.db, id).await?)
    }

    async fn create(&self, course: Course) -> Result<Course, AppError> {
        Ok(repository::insert_course(&self.db, &course).await?)
    }

    async fn update(&self, id: i64, course: Course) -> Result<Option<Course>, AppError> {
        Ok(repository::update_course(&self.db, id, &course).await?)
    }

    async fn delete(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(repository::delete_course(&self.db, id).await?)
    }
}
