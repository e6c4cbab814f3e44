//! Project services: the creation cascade, read paths and deletion.
//!
//! Every service takes the acting user's id explicitly; resolving it from a
//! credential is the HTTP layer's job.
//!
//! Creating a project touches four kinds of record in a fixed order:
//!
//! 1. the project itself,
//! 2. the owner's project list,
//! 3. a chapter card and a plot card, linked onto the project in that order,
//! 4. a default character, linked onto the project.
//!
//! If any step fails, the steps already applied are undone in reverse order
//! before the error is returned, so a failed request leaves no orphans.

use validator::Validate;

use crate::error::CoreError;
use crate::messages::{INVALID_REQUEST, NO_AUTHORITY_TO_ACCESS};
use crate::model::{
    CreateProjectRequest, DeleteProjectRequest, NewProject, Project, ProjectDetail, ProjectList,
};
use crate::seed;
use crate::store::EntityStore;
use crate::types::DbId;

fn invalid_request() -> CoreError {
    CoreError::Validation(INVALID_REQUEST.to_string())
}

fn no_authority() -> CoreError {
    CoreError::Forbidden(NO_AUTHORITY_TO_ACCESS.to_string())
}

/// Check a create request against the acting user and turn it into a
/// validated [`NewProject`].
///
/// Authority is checked before shape. A request whose `creator_id` is not
/// the acting user, including one with no `creator_id` at all, is refused as
/// forbidden even when it is also incomplete.
pub fn validate_create_request(
    current_user: DbId,
    request: CreateProjectRequest,
) -> Result<NewProject, CoreError> {
    if request.creator_id != Some(current_user) {
        return Err(no_authority());
    }

    let (Some(title), Some(description)) = (request.title, request.description) else {
        return Err(invalid_request());
    };

    let new_project = NewProject {
        title,
        description,
        world: request.world.unwrap_or_else(seed::default_world),
    };
    new_project.validate().map_err(|errors| {
        tracing::debug!(%errors, "Rejected project input");
        invalid_request()
    })?;

    Ok(new_project)
}

/// A cascade step that has been applied and how to take it back.
#[derive(Debug, Clone, Copy)]
enum Compensation {
    DeleteProject(DbId),
    UnlinkFromUser { user_id: DbId, project_id: DbId },
    DeletePlot(DbId),
    DeleteCharacter(DbId),
}

/// Create a project for `current_user` with its seed plots and character.
///
/// Returns the new project's id.
pub async fn create_project(
    store: &dyn EntityStore,
    current_user: DbId,
    request: CreateProjectRequest,
) -> Result<DbId, CoreError> {
    let new_project = validate_create_request(current_user, request)?;

    let mut applied = Vec::new();
    match run_cascade(store, current_user, &new_project, &mut applied).await {
        Ok(project_id) => {
            tracing::info!(project_id, user_id = current_user, "Project created");
            Ok(project_id)
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                user_id = current_user,
                steps = applied.len(),
                "Project creation failed, rolling back"
            );
            compensate(store, applied).await;
            Err(err)
        }
    }
}

async fn run_cascade(
    store: &dyn EntityStore,
    user_id: DbId,
    new_project: &NewProject,
    applied: &mut Vec<Compensation>,
) -> Result<DbId, CoreError> {
    let project = store.create_project(new_project).await?;
    let project_id = project.id;
    applied.push(Compensation::DeleteProject(project_id));
    tracing::debug!(project_id, "Project record created");

    if !store.push_user_project(user_id, project_id).await? {
        return Err(CoreError::NotFound {
            entity: "User",
            id: user_id,
        });
    }
    applied.push(Compensation::UnlinkFromUser {
        user_id,
        project_id,
    });

    let chapter = store.create_plot(&seed::chapter_card()).await?;
    applied.push(Compensation::DeletePlot(chapter.id));
    let plot = store.create_plot(&seed::plot_card()).await?;
    applied.push(Compensation::DeletePlot(plot.id));
    tracing::debug!(project_id, chapter_id = chapter.id, plot_id = plot.id, "Seed plots created");

    // Chapter first: list order is narrative order.
    link(store, project_id, ProjectList::Plots, chapter.id).await?;
    link(store, project_id, ProjectList::Plots, plot.id).await?;

    let character = store.create_character(&seed::default_character()).await?;
    applied.push(Compensation::DeleteCharacter(character.id));
    link(store, project_id, ProjectList::Characters, character.id).await?;
    tracing::debug!(project_id, character_id = character.id, "Seed character linked");

    Ok(project_id)
}

async fn link(
    store: &dyn EntityStore,
    project_id: DbId,
    list: ProjectList,
    id: DbId,
) -> Result<(), CoreError> {
    if store.push_project_ref(project_id, list, id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })
    }
}

/// Undo applied steps, newest first. Failures are logged and skipped so one
/// stuck record does not keep the rest from being cleaned up.
async fn compensate(store: &dyn EntityStore, applied: Vec<Compensation>) {
    for step in applied.into_iter().rev() {
        let outcome = match step {
            Compensation::DeleteCharacter(id) => store.delete_character(id).await.map(drop),
            Compensation::DeletePlot(id) => store.delete_plot(id).await.map(drop),
            Compensation::UnlinkFromUser {
                user_id,
                project_id,
            } => store.pull_user_project(user_id, project_id).await.map(drop),
            Compensation::DeleteProject(id) => store.delete_project(id).await.map(drop),
        };
        if let Err(err) = outcome {
            tracing::error!(error = %err, ?step, "Rollback step failed, record left behind");
        }
    }
}

/// Fetch a project with its plots and characters expanded, in list order.
///
/// Referenced records that no longer exist are left out.
pub async fn get_project(store: &dyn EntityStore, id: DbId) -> Result<ProjectDetail, CoreError> {
    let project = store
        .find_project(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;

    let plots = store.find_plots(&project.plots).await?;
    let characters = store.find_characters(&project.characters).await?;

    Ok(ProjectDetail {
        id: project.id,
        title: project.title,
        description: project.description,
        world: project.world,
        plots,
        characters,
        created_at: project.created_at,
    })
}

/// List the acting user's projects in the order they were created.
pub async fn list_projects(
    store: &dyn EntityStore,
    current_user: DbId,
) -> Result<Vec<Project>, CoreError> {
    let user = store
        .find_user(current_user)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: current_user,
        })?;

    Ok(store.find_projects(&user.projects).await?)
}

/// Delete one of the acting user's projects and unlink it from their list.
///
/// Plots and characters the project referenced are not deleted.
pub async fn delete_project(
    store: &dyn EntityStore,
    current_user: DbId,
    request: DeleteProjectRequest,
) -> Result<(), CoreError> {
    let project_id = request.project_id.ok_or_else(invalid_request)?;

    let not_found = CoreError::NotFound {
        entity: "Project",
        id: project_id,
    };

    if store.find_project(project_id).await?.is_none() {
        return Err(not_found);
    }

    let owns = store
        .find_user(current_user)
        .await?
        .is_some_and(|user| user.owns(project_id));
    if !owns {
        tracing::warn!(project_id, user_id = current_user, "Refused to delete unowned project");
        return Err(no_authority());
    }

    if store.delete_project(project_id).await?.is_none() {
        return Err(not_found);
    }
    store.pull_user_project(current_user, project_id).await?;

    tracing::info!(project_id, user_id = current_user, "Project deleted");
    Ok(())
}
