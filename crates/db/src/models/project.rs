//! Project row model.

use plotline_core::model::{Project, World};
use plotline_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `projects` table. The world is stored flattened.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub world_title: String,
    pub world_description: String,
    pub plots: Vec<DbId>,
    pub characters: Vec<DbId>,
    pub created_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            world: World {
                title: row.world_title,
                description: row.world_description,
            },
            plots: row.plots,
            characters: row.characters,
            created_at: row.created_at,
        }
    }
}
