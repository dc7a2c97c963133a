use serde::{Deserialize, Serialize};

/// Static neighborhood catalog record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "safetyScore")]
    pub safety_score: u8,
    #[serde(rename = "walkabilityScore")]
    pub walkability_score: u8,
    #[serde(rename = "schoolRating")]
    pub school_rating: u8,
    #[serde(rename = "medianRent")]
    pub median_rent: f64,
    #[serde(rename = "transitScore")]
    pub transit_score: u8,
    #[serde(rename = "nightlifeScore")]
    pub nightlife_score: u8,
    #[serde(rename = "parksScore")]
    pub parks_score: u8,
    #[serde(rename = "diversityScore")]
    pub diversity_score: u8,
    #[serde(rename = "jobOpportunities")]
    pub job_opportunities: u8,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub demographics: Demographics,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Demographic profile of a neighborhood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(rename = "averageAge")]
    pub average_age: u16,
    #[serde(rename = "familyFriendly")]
    pub family_friendly: u8,
    #[serde(default)]
    pub diversity: u8,
}

/// Questionnaire priority selection
///
/// Each variant carries the exact label the questionnaire UI sends. Labels
/// the service does not know (including "Shopping & Dining", which the UI
/// offers but has no dedicated formula) deserialize to `Unrecognized` and
/// score a flat default instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Safety & Low Crime")]
    Safety,
    #[serde(rename = "Good Schools")]
    Schools,
    #[serde(rename = "Public Transportation")]
    Transit,
    #[serde(rename = "Walkability")]
    Walkability,
    #[serde(rename = "Nightlife & Entertainment")]
    Nightlife,
    #[serde(rename = "Parks & Recreation")]
    Parks,
    #[serde(rename = "Affordable Housing")]
    AffordableHousing,
    #[serde(rename = "Cultural Diversity")]
    Diversity,
    #[serde(rename = "Job Opportunities")]
    Jobs,
    #[serde(other)]
    Unrecognized,
}

/// Monthly rent budget band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "Under $1,500/month")]
    Under1500,
    #[serde(rename = "$1,500 - $2,500/month")]
    From1500To2500,
    #[serde(rename = "$2,500 - $4,000/month")]
    From2500To4000,
    #[serde(rename = "$4,000 - $6,000/month")]
    From4000To6000,
    #[serde(rename = "Over $6,000/month")]
    Over6000,
    #[serde(other)]
    Unrecognized,
}

impl BudgetRange {
    /// Rent band in currency units per month, inclusive both ends
    ///
    /// `Unrecognized` has no band.
    pub fn rent_band(self) -> Option<(f64, f64)> {
        match self {
            BudgetRange::Under1500 => Some((0.0, 1500.0)),
            BudgetRange::From1500To2500 => Some((1500.0, 2500.0)),
            BudgetRange::From2500To4000 => Some((2500.0, 4000.0)),
            BudgetRange::From4000To6000 => Some((4000.0, 6000.0)),
            BudgetRange::Over6000 => Some((6000.0, f64::INFINITY)),
            BudgetRange::Unrecognized => None,
        }
    }
}

/// Lifestyle self-description from the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifestyle {
    #[serde(rename = "Urban Professional - Love city energy")]
    UrbanProfessional,
    #[serde(rename = "Suburban Family - Prefer quiet communities")]
    SuburbanFamily,
    #[serde(rename = "Young Professional - Active social life")]
    YoungProfessional,
    #[serde(rename = "Retiree - Seeking peaceful environment")]
    Retiree,
    #[serde(rename = "Student - Budget-conscious, social")]
    Student,
    #[serde(other)]
    Unrecognized,
}

/// Household composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyStatus {
    #[serde(rename = "Single, no children")]
    Single,
    #[serde(rename = "Couple, no children")]
    Couple,
    #[serde(rename = "Young family with children")]
    YoungFamily,
    #[serde(rename = "Family with teenagers")]
    Teenagers,
    #[serde(rename = "Empty nesters")]
    EmptyNesters,
    #[serde(other)]
    Unrecognized,
}

/// Questionnaire interest selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "Outdoor Activities")]
    Outdoor,
    #[serde(rename = "Arts & Culture")]
    Arts,
    #[serde(rename = "Fitness & Sports")]
    Fitness,
    #[serde(rename = "Food & Dining")]
    Food,
    #[serde(rename = "Music & Concerts")]
    Music,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Community Events")]
    CommunityEvents,
    #[serde(rename = "Nightlife")]
    Nightlife,
    #[serde(rename = "Reading & Libraries")]
    Reading,
    #[serde(rename = "Technology & Innovation")]
    Technology,
    #[serde(other)]
    Unrecognized,
}

/// One completed questionnaire session
///
/// Every field may be empty or absent. A dimension the user skipped
/// contributes neither achieved nor possible points when scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub priorities: Vec<Priority>,
    #[serde(default)]
    pub budget: Option<BudgetRange>,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
    #[serde(rename = "familyStatus", default)]
    pub family_status: Option<FamilyStatus>,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl UserPreferences {
    /// True when no dimension is populated at all
    ///
    /// An empty questionnaire gives the engine nothing to normalize
    /// against; callers can use this to short-circuit ranking.
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
            && self.budget.is_none()
            && self.lifestyle.is_none()
            && self.family_status.is_none()
            && self.interests.is_empty()
    }
}

/// Catalog record with its computed match score attached
///
/// Display copy produced per request; the catalog record itself is never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredNeighborhood {
    #[serde(flatten)]
    pub neighborhood: Neighborhood,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}
