//! Integration tests for the Postgres entity store.
//!
//! Exercises the repositories and the project services against a real
//! database:
//! - Creation cascade and list ordering
//! - Ordered multi-id lookups
//! - Push/pull on array columns
//! - Delete without child cascade
//! - Schema check constraints

use assert_matches::assert_matches;
use plotline_core::error::CoreError;
use plotline_core::model::{CreateProjectRequest, DeleteProjectRequest, NewProject, ProjectList};
use plotline_core::projects;
use plotline_core::seed;
use plotline_core::store::{EntityStore, StoreError, StoreOp};
use plotline_db::repositories::UserRepo;
use plotline_db::PgEntityStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn create_request(user_id: i64, title: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        creator_id: Some(user_id),
        title: Some(title.to_string()),
        description: Some("A story".to_string()),
        world: None,
    }
}

fn new_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: "A story".to_string(),
        world: seed::default_world(),
    }
}

// ---------------------------------------------------------------------------
// Cascade through the services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn cascade_creates_and_links_seed_records(pool: PgPool) {
    let user = UserRepo::create(&pool, "ada").await.unwrap();
    let store = PgEntityStore::new(pool);

    let id = projects::create_project(&store, user.id, create_request(user.id, "Saga"))
        .await
        .unwrap();

    let detail = projects::get_project(&store, id).await.unwrap();
    assert_eq!(detail.plots.len(), 2);
    assert!(detail.plots[0].is_time_flag);
    assert_eq!(detail.plots[1].location.image_url, seed::CHAPTER_LOCATION_IMAGE);
    assert_eq!(detail.characters.len(), 1);
    assert_eq!(detail.world, seed::default_world());

    let owner = store.find_user(user.id).await.unwrap().unwrap();
    assert_eq!(owner.projects, vec![id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_follows_owner_order(pool: PgPool) {
    let user = UserRepo::create(&pool, "ada").await.unwrap();
    let store = PgEntityStore::new(pool);
    let first = projects::create_project(&store, user.id, create_request(user.id, "One"))
        .await
        .unwrap();
    let second = projects::create_project(&store, user.id, create_request(user.id, "Two"))
        .await
        .unwrap();

    let listed = projects::list_projects(&store, user.id).await.unwrap();

    let titles: Vec<&str> = listed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two"]);
    assert_eq!(listed[0].id, first);
    assert_eq!(listed[1].id, second);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_unlinks_but_keeps_children(pool: PgPool) {
    let user = UserRepo::create(&pool, "ada").await.unwrap();
    let store = PgEntityStore::new(pool);
    let id = projects::create_project(&store, user.id, create_request(user.id, "Saga"))
        .await
        .unwrap();
    let project = store.find_project(id).await.unwrap().unwrap();

    projects::delete_project(
        &store,
        user.id,
        DeleteProjectRequest {
            project_id: Some(id),
        },
    )
    .await
    .unwrap();

    assert!(store.find_project(id).await.unwrap().is_none());
    assert!(store.find_user(user.id).await.unwrap().unwrap().projects.is_empty());
    assert_eq!(store.find_plots(&project.plots).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_by_other_user_is_forbidden(pool: PgPool) {
    let ada = UserRepo::create(&pool, "ada").await.unwrap();
    let bob = UserRepo::create(&pool, "bob").await.unwrap();
    let store = PgEntityStore::new(pool);
    let id = projects::create_project(&store, ada.id, create_request(ada.id, "Saga"))
        .await
        .unwrap();

    let err = projects::delete_project(
        &store,
        bob.id,
        DeleteProjectRequest {
            project_id: Some(id),
        },
    )
    .await
    .unwrap_err();

    assert_matches!(err, CoreError::Forbidden(_));
    assert!(store.find_project(id).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Store primitives
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn find_plots_preserves_requested_order(pool: PgPool) {
    let store = PgEntityStore::new(pool);
    let a = store.create_plot(&seed::chapter_card()).await.unwrap();
    let b = store.create_plot(&seed::plot_card()).await.unwrap();

    let found = store.find_plots(&[b.id, 123_456, a.id]).await.unwrap();

    let ids: Vec<i64> = found.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn push_ref_appends_in_order(pool: PgPool) {
    let store = PgEntityStore::new(pool);
    let project = store.create_project(&new_project("Saga")).await.unwrap();

    assert!(store
        .push_project_ref(project.id, ProjectList::Characters, 10)
        .await
        .unwrap());
    assert!(store
        .push_project_ref(project.id, ProjectList::Characters, 11)
        .await
        .unwrap());

    let stored = store.find_project(project.id).await.unwrap().unwrap();
    assert_eq!(stored.characters, vec![10, 11]);
    assert!(stored.plots.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn push_ref_on_missing_project_returns_false(pool: PgPool) {
    let store = PgEntityStore::new(pool);
    assert!(!store
        .push_project_ref(999_999, ProjectList::Plots, 1)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn pull_user_project_removes_id(pool: PgPool) {
    let user = UserRepo::create(&pool, "ada").await.unwrap();
    let store = PgEntityStore::new(pool);
    store.push_user_project(user.id, 1).await.unwrap();
    store.push_user_project(user.id, 2).await.unwrap();

    assert!(store.pull_user_project(user.id, 1).await.unwrap());

    let user = store.find_user(user.id).await.unwrap().unwrap();
    assert_eq!(user.projects, vec![2]);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_project_returns_removed_row(pool: PgPool) {
    let store = PgEntityStore::new(pool);
    let project = store.create_project(&new_project("Saga")).await.unwrap();

    let removed = store.delete_project(project.id).await.unwrap();
    assert_eq!(removed.map(|p| p.id), Some(project.id));
    assert!(store.delete_project(project.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_title_violates_check_constraint(pool: PgPool) {
    let store = PgEntityStore::new(pool);

    let err = store.create_project(&new_project("")).await.unwrap_err();

    assert_matches!(
        err,
        StoreError::Backend {
            op: StoreOp::CreateProject,
            ..
        }
    );
}
