//! Domain records and DTOs for projects and the documents they own.
//!
//! JSON field names follow the client wire format (`isTimeFlag`,
//! `imageURL`, `creatorId`, ...), hence the camelCase renames.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// The world a project's story takes place in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct World {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// A stored project with its plot and character references as bare ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub world: World,
    /// Plot ids in narrative order.
    pub plots: Vec<DbId>,
    /// Character ids in creation order.
    pub characters: Vec<DbId>,
    pub created_at: Timestamp,
}

/// A project with its plots and characters expanded into full records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub world: World,
    pub plots: Vec<Plot>,
    pub characters: Vec<Character>,
    pub created_at: Timestamp,
}

/// Validated input for inserting a project.
#[derive(Debug, Clone, Validate)]
pub struct NewProject {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(nested)]
    pub world: World,
}

/// The two ordered id lists a project holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectList {
    Plots,
    Characters,
}

impl ProjectList {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectList::Plots => "plots",
            ProjectList::Characters => "characters",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub username: String,
    /// Ids of the projects this user owns, oldest first.
    pub projects: Vec<DbId>,
    pub created_at: Timestamp,
}

impl User {
    pub fn owns(&self, project_id: DbId) -> bool {
        self.projects.contains(&project_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// A plot card. Chapter cards carry `is_time_flag = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    pub id: DbId,
    pub is_time_flag: bool,
    pub situation: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlot {
    pub is_time_flag: bool,
    pub situation: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub sex: String,
    pub age: String,
    pub appearance: String,
    pub personality: String,
    pub etc: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub role: String,
    pub sex: String,
    pub age: String,
    pub appearance: String,
    pub personality: String,
    pub etc: String,
    pub image_url: String,
}

/// Body of `POST /projects`. Every field is optional at the wire level so
/// missing fields surface as a validation error rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub creator_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub world: Option<World>,
}

/// Body of `DELETE /projects`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectRequest {
    pub project_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_serializes_with_wire_names() {
        let plot = Plot {
            id: 3,
            is_time_flag: true,
            situation: "s".into(),
            location: Location {
                title: "t".into(),
                description: "d".into(),
                image_url: "u".into(),
            },
        };
        let json = serde_json::to_value(&plot).unwrap();
        assert_eq!(json["isTimeFlag"], true);
        assert_eq!(json["location"]["imageURL"], "u");
    }

    #[test]
    fn create_request_reads_camel_case() {
        let req: CreateProjectRequest = serde_json::from_value(serde_json::json!({
            "creatorId": 9,
            "title": "Saga",
        }))
        .unwrap();
        assert_eq!(req.creator_id, Some(9));
        assert_eq!(req.title.as_deref(), Some("Saga"));
        assert!(req.description.is_none());
    }

    #[test]
    fn empty_world_title_fails_validation() {
        let new = NewProject {
            title: "a".into(),
            description: "b".into(),
            world: World {
                title: String::new(),
                description: "c".into(),
            },
        };
        assert!(new.validate().is_err());
    }
}
