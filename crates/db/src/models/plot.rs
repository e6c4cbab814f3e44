//! Plot row model.

use plotline_core::model::{Location, Plot};
use plotline_core::types::DbId;
use sqlx::FromRow;

/// A row from the `plots` table. The location is stored flattened.
#[derive(Debug, Clone, FromRow)]
pub struct PlotRow {
    pub id: DbId,
    pub is_time_flag: bool,
    pub situation: String,
    pub location_title: String,
    pub location_description: String,
    pub location_image_url: String,
}

impl From<PlotRow> for Plot {
    fn from(row: PlotRow) -> Self {
        Plot {
            id: row.id,
            is_time_flag: row.is_time_flag,
            situation: row.situation,
            location: Location {
                title: row.location_title,
                description: row.location_description,
                image_url: row.location_image_url,
            },
        }
    }
}
