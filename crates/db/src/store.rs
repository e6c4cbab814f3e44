//! [`EntityStore`] implementation over the Postgres repositories.

use async_trait::async_trait;
use plotline_core::model::{
    Character, NewCharacter, NewPlot, NewProject, Plot, Project, ProjectList, User,
};
use plotline_core::store::{EntityStore, StoreError, StoreOp, StoreResult};
use plotline_core::types::DbId;

use crate::repositories::{CharacterRepo, PlotRepo, ProjectRepo, UserRepo};
use crate::DbPool;

/// Postgres-backed entity store. Cheap to clone; the pool is reference counted.
#[derive(Clone)]
pub struct PgEntityStore {
    pool: DbPool,
}

impl PgEntityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Tag a sqlx error with the store operation that produced it.
fn backend(op: StoreOp) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |err| StoreError::Backend {
        op,
        message: err.to_string(),
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    async fn create_project(&self, input: &NewProject) -> StoreResult<Project> {
        let row = ProjectRepo::create(&self.pool, input)
            .await
            .map_err(backend(StoreOp::CreateProject))?;
        Ok(row.into())
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let row = ProjectRepo::find_by_id(&self.pool, id)
            .await
            .map_err(backend(StoreOp::FindProject))?;
        Ok(row.map(Into::into))
    }

    async fn find_projects(&self, ids: &[DbId]) -> StoreResult<Vec<Project>> {
        let rows = ProjectRepo::find_by_ids(&self.pool, ids)
            .await
            .map_err(backend(StoreOp::FindProjects))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let row = ProjectRepo::delete(&self.pool, id)
            .await
            .map_err(backend(StoreOp::DeleteProject))?;
        Ok(row.map(Into::into))
    }

    async fn push_project_ref(
        &self,
        project_id: DbId,
        list: ProjectList,
        id: DbId,
    ) -> StoreResult<bool> {
        ProjectRepo::push_ref(&self.pool, project_id, list, id)
            .await
            .map_err(backend(StoreOp::PushProjectRef))
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        let row = UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(backend(StoreOp::FindUser))?;
        Ok(row.map(Into::into))
    }

    async fn push_user_project(&self, user_id: DbId, project_id: DbId) -> StoreResult<bool> {
        UserRepo::push_project(&self.pool, user_id, project_id)
            .await
            .map_err(backend(StoreOp::PushUserProject))
    }

    async fn pull_user_project(&self, user_id: DbId, project_id: DbId) -> StoreResult<bool> {
        UserRepo::pull_project(&self.pool, user_id, project_id)
            .await
            .map_err(backend(StoreOp::PullUserProject))
    }

    async fn create_plot(&self, input: &NewPlot) -> StoreResult<Plot> {
        let row = PlotRepo::create(&self.pool, input)
            .await
            .map_err(backend(StoreOp::CreatePlot))?;
        Ok(row.into())
    }

    async fn find_plots(&self, ids: &[DbId]) -> StoreResult<Vec<Plot>> {
        let rows = PlotRepo::find_by_ids(&self.pool, ids)
            .await
            .map_err(backend(StoreOp::FindPlots))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_plot(&self, id: DbId) -> StoreResult<bool> {
        PlotRepo::delete(&self.pool, id)
            .await
            .map_err(backend(StoreOp::DeletePlot))
    }

    async fn create_character(&self, input: &NewCharacter) -> StoreResult<Character> {
        let row = CharacterRepo::create(&self.pool, input)
            .await
            .map_err(backend(StoreOp::CreateCharacter))?;
        Ok(row.into())
    }

    async fn find_characters(&self, ids: &[DbId]) -> StoreResult<Vec<Character>> {
        let rows = CharacterRepo::find_by_ids(&self.pool, ids)
            .await
            .map_err(backend(StoreOp::FindCharacters))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_character(&self, id: DbId) -> StoreResult<bool> {
        CharacterRepo::delete(&self.pool, id)
            .await
            .map_err(backend(StoreOp::DeleteCharacter))
    }
}
