//! In-process [`EntityStore`] backed by ordered maps.
//!
//! All tables sit behind one `RwLock`. Ids come from a single counter
//! shared by every table, so an id never names two records.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EntityStore, StoreError, StoreOp, StoreResult};
use crate::model::{
    Character, NewCharacter, NewPlot, NewProject, Plot, Project, ProjectList, User,
};
use crate::types::DbId;

#[derive(Default)]
struct Tables {
    last_id: DbId,
    users: BTreeMap<DbId, User>,
    projects: BTreeMap<DbId, Project>,
    plots: BTreeMap<DbId, Plot>,
    characters: BTreeMap<DbId, Character>,
    failing: HashSet<StoreOp>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }

    fn check(&self, op: StoreOp) -> StoreResult<()> {
        if self.failing.contains(&op) {
            return Err(StoreError::Rejected(op));
        }
        Ok(())
    }
}

/// Number of records per table, for asserting on side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordCounts {
    pub projects: usize,
    pub plots: usize,
    pub characters: usize,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user with an empty project list.
    ///
    /// Account creation belongs to the sign-up flow, so this is not part of
    /// [`EntityStore`].
    pub async fn create_user(&self, username: &str) -> User {
        let mut tables = self.tables.write().await;
        let user = User {
            id: tables.next_id(),
            username: username.to_string(),
            projects: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        user
    }

    /// Make every later call of `op` fail with [`StoreError::Rejected`].
    pub async fn fail_on(&self, op: StoreOp) {
        self.tables.write().await.failing.insert(op);
    }

    /// Undo [`fail_on`](Self::fail_on) for every operation.
    pub async fn clear_failures(&self) {
        self.tables.write().await.failing.clear();
    }

    pub async fn record_counts(&self) -> RecordCounts {
        let tables = self.tables.read().await;
        RecordCounts {
            projects: tables.projects.len(),
            plots: tables.plots.len(),
            characters: tables.characters.len(),
        }
    }
}

fn collect_in_order<T: Clone>(table: &BTreeMap<DbId, T>, ids: &[DbId]) -> Vec<T> {
    ids.iter().filter_map(|id| table.get(id).cloned()).collect()
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn create_project(&self, input: &NewProject) -> StoreResult<Project> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::CreateProject)?;
        let project = Project {
            id: tables.next_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            world: input.world.clone(),
            plots: Vec::new(),
            characters: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let tables = self.tables.read().await;
        tables.check(StoreOp::FindProject)?;
        Ok(tables.projects.get(&id).cloned())
    }

    async fn find_projects(&self, ids: &[DbId]) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        tables.check(StoreOp::FindProjects)?;
        Ok(collect_in_order(&tables.projects, ids))
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::DeleteProject)?;
        Ok(tables.projects.remove(&id))
    }

    async fn push_project_ref(
        &self,
        project_id: DbId,
        list: ProjectList,
        id: DbId,
    ) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::PushProjectRef)?;
        let Some(project) = tables.projects.get_mut(&project_id) else {
            return Ok(false);
        };
        match list {
            ProjectList::Plots => project.plots.push(id),
            ProjectList::Characters => project.characters.push(id),
        }
        Ok(true)
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        tables.check(StoreOp::FindUser)?;
        Ok(tables.users.get(&id).cloned())
    }

    async fn push_user_project(&self, user_id: DbId, project_id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::PushUserProject)?;
        let Some(user) = tables.users.get_mut(&user_id) else {
            return Ok(false);
        };
        user.projects.push(project_id);
        Ok(true)
    }

    async fn pull_user_project(&self, user_id: DbId, project_id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::PullUserProject)?;
        let Some(user) = tables.users.get_mut(&user_id) else {
            return Ok(false);
        };
        user.projects.retain(|id| *id != project_id);
        Ok(true)
    }

    async fn create_plot(&self, input: &NewPlot) -> StoreResult<Plot> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::CreatePlot)?;
        let plot = Plot {
            id: tables.next_id(),
            is_time_flag: input.is_time_flag,
            situation: input.situation.clone(),
            location: input.location.clone(),
        };
        tables.plots.insert(plot.id, plot.clone());
        Ok(plot)
    }

    async fn find_plots(&self, ids: &[DbId]) -> StoreResult<Vec<Plot>> {
        let tables = self.tables.read().await;
        tables.check(StoreOp::FindPlots)?;
        Ok(collect_in_order(&tables.plots, ids))
    }

    async fn delete_plot(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::DeletePlot)?;
        Ok(tables.plots.remove(&id).is_some())
    }

    async fn create_character(&self, input: &NewCharacter) -> StoreResult<Character> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::CreateCharacter)?;
        let character = Character {
            id: tables.next_id(),
            name: input.name.clone(),
            role: input.role.clone(),
            sex: input.sex.clone(),
            age: input.age.clone(),
            appearance: input.appearance.clone(),
            personality: input.personality.clone(),
            etc: input.etc.clone(),
            image_url: input.image_url.clone(),
        };
        tables.characters.insert(character.id, character.clone());
        Ok(character)
    }

    async fn find_characters(&self, ids: &[DbId]) -> StoreResult<Vec<Character>> {
        let tables = self.tables.read().await;
        tables.check(StoreOp::FindCharacters)?;
        Ok(collect_in_order(&tables.characters, ids))
    }

    async fn delete_character(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        tables.check(StoreOp::DeleteCharacter)?;
        Ok(tables.characters.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn new_project() -> NewProject {
        NewProject {
            title: "Saga".into(),
            description: "A long tale".into(),
            world: seed::default_world(),
        }
    }

    #[tokio::test]
    async fn find_projects_keeps_requested_order_and_skips_missing() {
        let store = MemoryStore::new();
        let a = store.create_project(&new_project()).await.unwrap();
        let b = store.create_project(&new_project()).await.unwrap();

        let found = store.find_projects(&[b.id, 999, a.id]).await.unwrap();
        let ids: Vec<DbId> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn push_to_missing_parent_reports_false() {
        let store = MemoryStore::new();
        assert!(!store
            .push_project_ref(42, ProjectList::Plots, 1)
            .await
            .unwrap());
        assert!(!store.push_user_project(42, 1).await.unwrap());
    }

    #[tokio::test]
    async fn pull_removes_every_occurrence() {
        let store = MemoryStore::new();
        let user = store.create_user("ada").await;
        store.push_user_project(user.id, 5).await.unwrap();
        store.push_user_project(user.id, 6).await.unwrap();
        store.push_user_project(user.id, 5).await.unwrap();

        store.pull_user_project(user.id, 5).await.unwrap();
        let user = store.find_user(user.id).await.unwrap().unwrap();
        assert_eq!(user.projects, vec![6]);
    }

    #[tokio::test]
    async fn injected_failure_leaves_tables_untouched() {
        let store = MemoryStore::new();
        store.fail_on(StoreOp::CreatePlot).await;

        let err = store.create_plot(&seed::chapter_card()).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(StoreOp::CreatePlot)));
        assert_eq!(store.record_counts().await.plots, 0);

        store.clear_failures().await;
        assert!(store.create_plot(&seed::chapter_card()).await.is_ok());
    }

    #[tokio::test]
    async fn ids_are_unique_across_tables() {
        let store = MemoryStore::new();
        let user = store.create_user("ada").await;
        let project = store.create_project(&new_project()).await.unwrap();
        let plot = store.create_plot(&seed::plot_card()).await.unwrap();
        let character = store
            .create_character(&seed::default_character())
            .await
            .unwrap();

        let ids: HashSet<DbId> = [user.id, project.id, plot.id, character.id]
            .into_iter()
            .collect();
        assert_eq!(ids.len(), 4);
    }
}
