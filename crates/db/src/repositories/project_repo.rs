//! Repository for the `projects` table.

use plotline_core::model::{NewProject, ProjectList};
use plotline_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::ProjectRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, world_title, world_description, plots, characters, created_at";

/// Provides create/read/delete and list-push operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with empty plot and character lists.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<ProjectRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, world_title, world_description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.world.title)
            .bind(&input.world.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the projects named by `ids`, ordered as `ids` lists them.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<ProjectRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE id = ANY($1)
             ORDER BY array_position($1, id)"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a project, returning the removed row if one existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Append `id` to one of the project's id arrays. Returns `true` if the
    /// project exists.
    pub async fn push_ref(
        pool: &PgPool,
        project_id: DbId,
        list: ProjectList,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let column = list.as_str();
        let query = format!("UPDATE projects SET {column} = array_append({column}, $2) WHERE id = $1");
        let result = sqlx::query(&query)
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
