// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, Demographics, FamilyStatus, Interest, Lifestyle, Neighborhood, Priority,
    ScoredNeighborhood, UserPreferences,
};
pub use requests::FindMatchesRequest;
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
