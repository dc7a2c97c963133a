//! Haven Algo - Neighborhood matching service for the Haven relocation app
//!
//! This library provides the match-scoring engine behind Haven's
//! neighborhood recommendations. A questionnaire's preferences are scored
//! against a static neighborhood catalog with a deterministic weighted
//! formula, and the catalog is returned ranked by compatibility.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_match_score, MatchResult, Matcher};
pub use models::{
    BudgetRange, FamilyStatus, FindMatchesRequest, FindMatchesResponse, Interest, Lifestyle,
    Neighborhood, Priority, ScoredNeighborhood, UserPreferences,
};
pub use services::CatalogStore;
