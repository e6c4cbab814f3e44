//! Repository for the `characters` table.

use plotline_core::model::NewCharacter;
use plotline_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::CharacterRow;

const COLUMNS: &str = "id, name, role, sex, age, appearance, personality, etc, image_url";

pub struct CharacterRepo;

impl CharacterRepo {
    pub async fn create(pool: &PgPool, input: &NewCharacter) -> Result<CharacterRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, role, sex, age, appearance, personality, etc, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterRow>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.sex)
            .bind(&input.age)
            .bind(&input.appearance)
            .bind(&input.personality)
            .bind(&input.etc)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Fetch the characters named by `ids`, ordered as `ids` lists them.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<CharacterRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE id = ANY($1)
             ORDER BY array_position($1, id)"
        );
        sqlx::query_as::<_, CharacterRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
