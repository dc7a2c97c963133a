use crate::models::domain::UserPreferences;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank the catalog against a questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub preferences: UserPreferences,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[validate(range(max = 100))]
    #[serde(rename = "minScore", default)]
    pub min_score: Option<u8>,
}

fn default_limit() -> u16 {
    20
}
