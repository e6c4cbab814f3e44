//! Repository for the `users` table.

use plotline_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::UserRow;

const COLUMNS: &str = "id, username, projects, created_at";

/// Provides user lookup and project-list maintenance.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user with an empty project list.
    pub async fn create(pool: &PgPool, username: &str) -> Result<UserRow, sqlx::Error> {
        let query = format!("INSERT INTO users (username) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(username)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Append a project id to the user's list. Returns `true` if the user exists.
    pub async fn push_project(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET projects = array_append(projects, $2) WHERE id = $1")
                .bind(user_id)
                .bind(project_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every occurrence of a project id from the user's list.
    pub async fn pull_project(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET projects = array_remove(projects, $2) WHERE id = $1")
                .bind(user_id)
                .bind(project_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
