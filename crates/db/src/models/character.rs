//! Character row model.

use plotline_core::model::Character;
use plotline_core::types::DbId;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CharacterRow {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub sex: String,
    pub age: String,
    pub appearance: String,
    pub personality: String,
    pub etc: String,
    pub image_url: String,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Character {
            id: row.id,
            name: row.name,
            role: row.role,
            sex: row.sex,
            age: row.age,
            appearance: row.appearance,
            personality: row.personality,
            etc: row.etc,
            image_url: row.image_url,
        }
    }
}
