//! Repository structs providing queries per table.

pub mod character_repo;
pub mod plot_repo;
pub mod project_repo;
pub mod user_repo;

pub use character_repo::CharacterRepo;
pub use plot_repo::PlotRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
