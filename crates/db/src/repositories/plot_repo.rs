//! Repository for the `plots` table.

use plotline_core::model::NewPlot;
use plotline_core::types::DbId;
use sqlx::PgPool;

use crate::models::plot::PlotRow;

const COLUMNS: &str =
    "id, is_time_flag, situation, location_title, location_description, location_image_url";

pub struct PlotRepo;

impl PlotRepo {
    pub async fn create(pool: &PgPool, input: &NewPlot) -> Result<PlotRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO plots (is_time_flag, situation, location_title, location_description, location_image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlotRow>(&query)
            .bind(input.is_time_flag)
            .bind(&input.situation)
            .bind(&input.location.title)
            .bind(&input.location.description)
            .bind(&input.location.image_url)
            .fetch_one(pool)
            .await
    }

    /// Fetch the plots named by `ids`, ordered as `ids` lists them.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<PlotRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM plots
             WHERE id = ANY($1)
             ORDER BY array_position($1, id)"
        );
        sqlx::query_as::<_, PlotRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a plot. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
