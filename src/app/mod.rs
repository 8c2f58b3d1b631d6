// Application layer - Use case interactors

pub mod container;
pub mod remux_interactor;
pub mod track_repository;

// Re-export interactors
pub use remux_interactor::{RemuxInteractor, RemuxPlan, RemuxRequest, RemuxResponse};
pub use track_repository::TrackRepository;
