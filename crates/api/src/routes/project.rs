//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /        -> list       (auth required)
/// POST   /        -> create     (auth required)
/// DELETE /        -> delete     (auth required, body: { projectId })
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project::list)
                .post(project::create)
                .delete(project::delete),
        )
        .route("/{id}", get(project::get_by_id))
}
