use serde::Serialize;

use super::domain::{Bonus, Casino, ExpertReview, Game, Review};
use crate::query::Page;
use crate::rating::{
    display, CategoryBreakdown, ProsAndCons, RatingSource, RatingSummary,
};

/// Rating numbers as sent to clients: the unrounded values plus display helpers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingView {
    pub safety_index: f64,
    pub display_safety_index: String,
    pub progress_percent: u8,
    pub expert_rating: Option<f64>,
    pub user_rating: Option<f64>,
    pub expert_review_count: usize,
    pub user_review_count: usize,
    pub source: RatingSource,
    pub source_label: &'static str,
}

impl From<RatingSummary> for RatingView {
    fn from(summary: RatingSummary) -> Self {
        Self {
            safety_index: summary.safety_index,
            display_safety_index: display::one_decimal(summary.safety_index),
            progress_percent: display::progress_percent(summary.safety_index),
            expert_rating: summary.expert_rating,
            user_rating: summary.user_rating,
            expert_review_count: summary.expert_review_count,
            user_review_count: summary.user_review_count,
            source: summary.source,
            source_label: summary.source.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoCard {
    pub casino: Casino,
    pub rating: RatingView,
}

pub type CasinoListing = Page<CasinoCard>;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusCard {
    pub bonus: Bonus,
    pub bonus_type_label: &'static str,
    pub rating: RatingView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoDetail {
    pub casino: Casino,
    pub rating: RatingView,
    pub category_breakdown: Option<CategoryBreakdown>,
    pub expert_review: Option<ExpertReview>,
    pub pros_and_cons: ProsAndCons,
    pub bonuses: Vec<BonusCard>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusDetail {
    pub bonus: Bonus,
    pub bonus_type_label: &'static str,
    pub casino: Option<Casino>,
    pub rating: RatingView,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub game: Game,
    pub rating: RatingView,
    pub reviews: Vec<Review>,
}
