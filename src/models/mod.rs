// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Interaction, InteractionKind, NewUser, ProfileChanges, SwipeResult, User};
pub use requests::{CreateUserRequest, LoginRequest, SwipeRequest, UpdateInterestsRequest, UpdateProfileRequest};
pub use responses::{ErrorResponse, HealthResponse};
