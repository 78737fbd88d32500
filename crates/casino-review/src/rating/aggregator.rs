use serde::{Deserialize, Serialize};

use super::pros_cons::{ProsAndCons, ProsConsStatements};
use crate::catalog::domain::{CategoryRatings, ExpertReview, RatingCategory, Review};

/// Which inputs produced a displayed safety index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingSource {
    Blended,
    ExpertOnly,
    UserOnly,
    Fallback,
}

impl RatingSource {
    pub fn label(&self) -> &'static str {
        match self {
            RatingSource::Blended => "expert and user reviews",
            RatingSource::ExpertOnly => "expert review",
            RatingSource::UserOnly => "user reviews",
            RatingSource::Fallback => "stored rating",
        }
    }
}

/// How category averages treat reviews that skipped a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryAveraging {
    /// A missing rating counts as 0 but still increments the denominator.
    #[default]
    ZeroFill,
    /// Missing ratings are excluded from both the sum and the denominator.
    SkipMissing,
}

impl CategoryAveraging {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "zero-fill" | "zero_fill" | "zerofill" => Some(Self::ZeroFill),
            "skip-missing" | "skip_missing" | "skipmissing" => Some(Self::SkipMissing),
            _ => None,
        }
    }
}

/// Unrounded rating numbers for one catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub safety_index: f64,
    pub expert_rating: Option<f64>,
    pub user_rating: Option<f64>,
    pub expert_review_count: usize,
    pub user_review_count: usize,
    pub source: RatingSource,
}

/// Per-category averages over a set of user reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub overall: f64,
    pub bonuses: Option<f64>,
    pub design: Option<f64>,
    pub payouts: Option<f64>,
    pub customer_support: Option<f64>,
    pub game_selection: Option<f64>,
    pub mobile_experience: Option<f64>,
}

impl CategoryBreakdown {
    pub fn get(&self, category: RatingCategory) -> Option<f64> {
        match category {
            RatingCategory::Bonuses => self.bonuses,
            RatingCategory::Design => self.design,
            RatingCategory::Payouts => self.payouts,
            RatingCategory::CustomerSupport => self.customer_support,
            RatingCategory::GameSelection => self.game_selection,
            RatingCategory::MobileExperience => self.mobile_experience,
        }
    }
}

/// Stateless rating calculator shared by every catalog surface.
#[derive(Debug, Clone, Default)]
pub struct RatingAggregator {
    averaging: CategoryAveraging,
    statements: ProsConsStatements,
}

impl RatingAggregator {
    pub fn new(averaging: CategoryAveraging) -> Self {
        Self {
            averaging,
            statements: ProsConsStatements::default(),
        }
    }

    pub fn with_statements(mut self, statements: ProsConsStatements) -> Self {
        self.statements = statements;
        self
    }

    pub fn summarize(
        &self,
        expert_reviews: &[ExpertReview],
        user_reviews: &[Review],
        fallback: f64,
    ) -> RatingSummary {
        let expert_avg = expert_average(expert_reviews);
        let user_avg = user_average(user_reviews);
        let (safety_index, source) = blend(expert_avg, user_avg, fallback);

        RatingSummary {
            safety_index,
            expert_rating: (!expert_reviews.is_empty()).then_some(expert_avg),
            user_rating: (!user_reviews.is_empty()).then_some(user_avg),
            expert_review_count: expert_reviews.len(),
            user_review_count: user_reviews.len(),
            source,
        }
    }

    pub fn category_breakdown(&self, user_reviews: &[Review]) -> Option<CategoryBreakdown> {
        if user_reviews.is_empty() {
            return None;
        }

        let overall = user_average(user_reviews);
        let category = |category: RatingCategory| {
            category_average(user_reviews, category, self.averaging)
        };

        Some(CategoryBreakdown {
            overall,
            bonuses: category(RatingCategory::Bonuses),
            design: category(RatingCategory::Design),
            payouts: category(RatingCategory::Payouts),
            customer_support: category(RatingCategory::CustomerSupport),
            game_selection: category(RatingCategory::GameSelection),
            mobile_experience: category(RatingCategory::MobileExperience),
        })
    }

    pub fn pros_and_cons(&self, ratings: &CategoryRatings) -> ProsAndCons {
        self.statements.evaluate(ratings)
    }
}

/// Blend expert and user scores, falling back to the stored rating when neither exists.
pub fn compute_safety_index(
    expert_reviews: &[ExpertReview],
    user_reviews: &[Review],
    fallback: f64,
) -> f64 {
    let (safety_index, _) = blend(
        expert_average(expert_reviews),
        user_average(user_reviews),
        fallback,
    );
    safety_index
}

/// Zero-fill category breakdown. Returns `None` when there are no reviews.
pub fn compute_category_breakdown(user_reviews: &[Review]) -> Option<CategoryBreakdown> {
    RatingAggregator::default().category_breakdown(user_reviews)
}

pub fn expert_average(expert_reviews: &[ExpertReview]) -> f64 {
    mean(expert_reviews.iter().map(|review| review.overall_rating)).unwrap_or(0.0)
}

pub fn user_average(user_reviews: &[Review]) -> f64 {
    mean(
        user_reviews
            .iter()
            .map(|review| f64::from(review.overall_rating)),
    )
    .unwrap_or(0.0)
}

fn blend(expert_avg: f64, user_avg: f64, fallback: f64) -> (f64, RatingSource) {
    match (expert_avg > 0.0, user_avg > 0.0) {
        (true, true) => ((expert_avg + user_avg) / 2.0, RatingSource::Blended),
        (true, false) => (expert_avg, RatingSource::ExpertOnly),
        (false, true) => (user_avg, RatingSource::UserOnly),
        (false, false) => (fallback, RatingSource::Fallback),
    }
}

fn category_average(
    user_reviews: &[Review],
    category: RatingCategory,
    averaging: CategoryAveraging,
) -> Option<f64> {
    let values = user_reviews
        .iter()
        .map(|review| review.categories.get(category));

    match averaging {
        CategoryAveraging::ZeroFill => mean(values.map(|value| value.unwrap_or(0.0))),
        CategoryAveraging::SkipMissing => mean(values.flatten()),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{CasinoId, ReviewId, ReviewTarget};

    fn review(rating: u8, categories: CategoryRatings) -> Review {
        Review {
            id: ReviewId(format!("r-{rating}")),
            target: ReviewTarget::Casino(CasinoId("c-1".to_string())),
            author: "visitor".to_string(),
            title: String::new(),
            content: "fine".to_string(),
            overall_rating: rating,
            categories,
            pros: Vec::new(),
            cons: Vec::new(),
            helpful_votes: 0,
            is_published: true,
            created_at: None,
        }
    }

    #[test]
    fn blend_prefers_available_sources_in_order() {
        assert_eq!(blend(8.0, 7.0, 1.0), (7.5, RatingSource::Blended));
        assert_eq!(blend(8.0, 0.0, 1.0), (8.0, RatingSource::ExpertOnly));
        assert_eq!(blend(0.0, 6.0, 1.0), (6.0, RatingSource::UserOnly));
        assert_eq!(blend(0.0, 0.0, 4.2), (4.2, RatingSource::Fallback));
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(mean([1.0, 2.0].into_iter()), Some(1.5));
    }

    #[test]
    fn skip_missing_leaves_unrated_categories_absent() {
        let aggregator = RatingAggregator::new(CategoryAveraging::SkipMissing);
        let reviews = vec![
            review(8, CategoryRatings::default().with(RatingCategory::Payouts, Some(9.0))),
            review(6, CategoryRatings::default()),
        ];

        let breakdown = aggregator
            .category_breakdown(&reviews)
            .expect("breakdown present");

        assert_eq!(breakdown.overall, 7.0);
        assert_eq!(breakdown.payouts, Some(9.0));
        assert_eq!(breakdown.design, None);
    }

    #[test]
    fn averaging_mode_parses_config_values() {
        assert_eq!(
            CategoryAveraging::parse("skip-missing"),
            Some(CategoryAveraging::SkipMissing)
        );
        assert_eq!(
            CategoryAveraging::parse(" Zero_Fill "),
            Some(CategoryAveraging::ZeroFill)
        );
        assert_eq!(CategoryAveraging::parse("median"), None);
    }
}
