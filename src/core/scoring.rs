use crate::models::{
    BudgetRange, FamilyStatus, Interest, Lifestyle, Neighborhood, Priority, UserPreferences,
};

/// Points each stated priority adds to the possible total
const PRIORITY_WEIGHT: f64 = 25.0;
/// Maximum points for the budget dimension
const BUDGET_WEIGHT: f64 = 20.0;
/// Nominal maximum for the lifestyle dimension
const LIFESTYLE_WEIGHT: f64 = 15.0;
/// Nominal maximum for the family status dimension
const FAMILY_WEIGHT: f64 = 10.0;
/// Absolute cap on the interest dimension
const INTEREST_CAP: f64 = 10.0;
/// Possible points contributed per selected interest
const INTEREST_WEIGHT: f64 = 2.0;

/// Calculate a match score (0-100) for a neighborhood against a questionnaire
///
/// Weighted sum over the dimensions the user actually answered, normalized
/// by the weight those dimensions could have contributed:
///
/// ```text
/// score = round(clamp(achieved / possible * 100, 0, 100))
/// ```
///
/// Five independent sub-scorers feed the accumulators:
///   priorities     25 points each     heaviest weight
///   budget         20 points max
///   lifestyle      15 points max
///   family status  10 points max
///   interests      min(10, 2 * count) points max
///
/// A skipped dimension adds nothing to either accumulator, so answering
/// only one question still yields a meaningful percentage. When no
/// dimension is answered at all there is nothing to normalize against and
/// the score is defined as 0.
///
/// Pure and total: unrecognized labels score flat defaults, out-of-range
/// attribute values pass through the linear formulas deterministically.
pub fn calculate_match_score(neighborhood: &Neighborhood, preferences: &UserPreferences) -> u8 {
    let mut achieved = 0.0;
    let mut possible = 0.0;

    // Priorities are summed as stated: duplicates count twice, and the
    // questionnaire's recommended cap of 3 is not enforced here.
    for priority in &preferences.priorities {
        achieved += priority_score(neighborhood, *priority);
        possible += PRIORITY_WEIGHT;
    }

    if let Some(budget) = preferences.budget {
        achieved += budget_score(neighborhood.median_rent, budget);
        possible += BUDGET_WEIGHT;
    }

    if let Some(lifestyle) = preferences.lifestyle {
        achieved += lifestyle_score(neighborhood, lifestyle);
        possible += LIFESTYLE_WEIGHT;
    }

    if let Some(family_status) = preferences.family_status {
        achieved += family_score(neighborhood, family_status);
        possible += FAMILY_WEIGHT;
    }

    if !preferences.interests.is_empty() {
        let cap = interest_cap(preferences.interests.len());
        achieved += interest_score(neighborhood, &preferences.interests);
        possible += cap;
    }

    if possible == 0.0 {
        return 0;
    }

    (achieved / possible * 100.0).clamp(0.0, 100.0).round() as u8
}

/// Score one priority on a 0-25 scale
///
/// The 0-10 attributes are stretched by 2.5; the percentage attributes are
/// rescaled from 0-100. Affordability inverts rent: every $1,000/month of
/// rent costs one point of a 10-point base, floored at zero.
fn priority_score(n: &Neighborhood, priority: Priority) -> f64 {
    match priority {
        Priority::Safety => f64::from(n.safety_score) * 2.5,
        Priority::Schools => f64::from(n.school_rating) * 2.5,
        Priority::Transit => f64::from(n.transit_score) / 100.0 * 25.0,
        Priority::Walkability => f64::from(n.walkability_score) / 100.0 * 25.0,
        Priority::Nightlife => f64::from(n.nightlife_score) * 2.5,
        Priority::Parks => f64::from(n.parks_score) * 2.5,
        Priority::AffordableHousing => (10.0 - n.median_rent / 1000.0).max(0.0) * 2.5,
        Priority::Diversity => f64::from(n.diversity_score) * 2.5,
        Priority::Jobs => f64::from(n.job_opportunities) * 2.5,
        Priority::Unrecognized => 15.0,
    }
}

/// Score the budget dimension on a 0-20 scale
///
/// 20 when the median rent falls inside the chosen band (inclusive both
/// ends), 15 when it lands within $500 of either band boundary, 5
/// otherwise.
fn budget_score(median_rent: f64, budget: BudgetRange) -> f64 {
    let Some((min, max)) = budget.rent_band() else {
        return 10.0;
    };

    if median_rent >= min && median_rent <= max {
        20.0
    } else if (median_rent - min).abs() <= 500.0 || (median_rent - max).abs() <= 500.0 {
        15.0
    } else {
        5.0
    }
}

/// Score the lifestyle dimension, nominally 0-15
///
/// Each lifestyle blends two attributes the persona cares about. The
/// formulas are applied literally, so a neighborhood that maxes both
/// attributes can exceed the nominal 15; normalization absorbs the
/// overshoot by clamping the final percentage.
fn lifestyle_score(n: &Neighborhood, lifestyle: Lifestyle) -> f64 {
    match lifestyle {
        Lifestyle::UrbanProfessional => {
            f64::from(n.transit_score) / 100.0 * 5.0 + f64::from(n.nightlife_score) * 1.5
        }
        Lifestyle::SuburbanFamily => {
            f64::from(n.demographics.family_friendly) * 1.5 + f64::from(n.school_rating) * 1.5
        }
        Lifestyle::YoungProfessional => {
            f64::from(n.nightlife_score) * 2.0 + f64::from(n.walkability_score) / 100.0 * 5.0
        }
        Lifestyle::Retiree => {
            f64::from(n.safety_score) * 1.5 + f64::from(n.parks_score) * 1.5
        }
        Lifestyle::Student => {
            (10.0 - n.median_rent / 800.0).max(0.0) + f64::from(n.nightlife_score)
        }
        Lifestyle::Unrecognized => 10.0,
    }
}

/// Score the family status dimension, nominally 0-10
fn family_score(n: &Neighborhood, family_status: FamilyStatus) -> f64 {
    match family_status {
        FamilyStatus::Single => {
            f64::from(n.nightlife_score) + f64::from(n.walkability_score) / 100.0 * 5.0
        }
        FamilyStatus::Couple => {
            // Widen before adding so out-of-range catalog scores stay on
            // the deterministic linear path instead of overflowing
            (f64::from(n.safety_score) + f64::from(n.nightlife_score)) / 2.0 * 2.0
        }
        FamilyStatus::YoungFamily => {
            f64::from(n.school_rating) + f64::from(n.demographics.family_friendly)
        }
        FamilyStatus::Teenagers => {
            f64::from(n.school_rating) * 1.2 + f64::from(n.safety_score) * 0.8
        }
        FamilyStatus::EmptyNesters => f64::from(n.safety_score) + f64::from(n.parks_score),
        FamilyStatus::Unrecognized => 7.0,
    }
}

/// Maximum points the interest dimension can contribute
///
/// Grows two points per selected interest up to an absolute cap of ten.
#[inline]
pub fn interest_cap(count: usize) -> f64 {
    (count as f64 * INTEREST_WEIGHT).min(INTEREST_CAP)
}

/// Score the interest dimension
///
/// Each interest adds a small fraction of one attribute; the sum is capped
/// at `interest_cap` so long interest lists cannot dominate the score.
fn interest_score(n: &Neighborhood, interests: &[Interest]) -> f64 {
    let mut score = 0.0;

    for interest in interests {
        score += match interest {
            Interest::Outdoor => f64::from(n.parks_score) * 0.5,
            Interest::Arts => f64::from(n.diversity_score) * 0.4,
            Interest::Fitness => f64::from(n.parks_score) * 0.4,
            Interest::Food => f64::from(n.nightlife_score) * 0.4,
            Interest::Music => f64::from(n.nightlife_score) * 0.5,
            Interest::Shopping => f64::from(n.walkability_score) / 100.0 * 2.0,
            Interest::CommunityEvents => f64::from(n.demographics.family_friendly) * 0.4,
            Interest::Nightlife => f64::from(n.nightlife_score) * 0.6,
            Interest::Reading => f64::from(n.school_rating) * 0.3,
            Interest::Technology => f64::from(n.job_opportunities) * 0.4,
            Interest::Unrecognized => 1.0,
        };
    }

    score.min(interest_cap(interests.len()))
}
