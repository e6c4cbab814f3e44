//! Persistence interface for projects, users, plots and characters.
//!
//! - [`EntityStore`] -- the operations the project services need.
//! - [`memory::MemoryStore`] -- in-process implementation for tests and local runs.
//!
//! The Postgres implementation lives in `plotline-db`.

pub mod memory;

use std::fmt;

use async_trait::async_trait;

use crate::model::{
    Character, NewCharacter, NewPlot, NewProject, Plot, Project, ProjectList, User,
};
use crate::types::DbId;

/// Identifies a single store operation, for error reporting and fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    CreateProject,
    FindProject,
    FindProjects,
    DeleteProject,
    PushProjectRef,
    FindUser,
    PushUserProject,
    PullUserProject,
    CreatePlot,
    FindPlots,
    DeletePlot,
    CreateCharacter,
    FindCharacters,
    DeleteCharacter,
}

impl StoreOp {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreOp::CreateProject => "create_project",
            StoreOp::FindProject => "find_project",
            StoreOp::FindProjects => "find_projects",
            StoreOp::DeleteProject => "delete_project",
            StoreOp::PushProjectRef => "push_project_ref",
            StoreOp::FindUser => "find_user",
            StoreOp::PushUserProject => "push_user_project",
            StoreOp::PullUserProject => "pull_user_project",
            StoreOp::CreatePlot => "create_plot",
            StoreOp::FindPlots => "find_plots",
            StoreOp::DeletePlot => "delete_plot",
            StoreOp::CreateCharacter => "create_character",
            StoreOp::FindCharacters => "find_characters",
            StoreOp::DeleteCharacter => "delete_character",
        }
    }
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing database reported an error.
    #[error("{op} failed: {message}")]
    Backend { op: StoreOp, message: String },

    /// The operation was refused by the store without touching any data.
    #[error("{0} rejected by store")]
    Rejected(StoreOp),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Document-style store the project services run against.
///
/// List lookups (`find_projects`, `find_plots`, `find_characters`) return
/// records in the order of the given ids and silently skip ids with no
/// record. Push/pull operations return `false` when the parent record does
/// not exist.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn create_project(&self, input: &NewProject) -> StoreResult<Project>;

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    async fn find_projects(&self, ids: &[DbId]) -> StoreResult<Vec<Project>>;

    /// Delete a project, returning the removed record if it existed.
    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    /// Append `id` to one of the project's ordered id lists.
    async fn push_project_ref(
        &self,
        project_id: DbId,
        list: ProjectList,
        id: DbId,
    ) -> StoreResult<bool>;

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>>;

    /// Append `project_id` to the user's project list.
    async fn push_user_project(&self, user_id: DbId, project_id: DbId) -> StoreResult<bool>;

    /// Remove every occurrence of `project_id` from the user's project list.
    async fn pull_user_project(&self, user_id: DbId, project_id: DbId) -> StoreResult<bool>;

    async fn create_plot(&self, input: &NewPlot) -> StoreResult<Plot>;

    async fn find_plots(&self, ids: &[DbId]) -> StoreResult<Vec<Plot>>;

    async fn delete_plot(&self, id: DbId) -> StoreResult<bool>;

    async fn create_character(&self, input: &NewCharacter) -> StoreResult<Character>;

    async fn find_characters(&self, ids: &[DbId]) -> StoreResult<Vec<Character>>;

    async fn delete_character(&self, id: DbId) -> StoreResult<bool>;
}
