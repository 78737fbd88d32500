//! Rating behavior observed through the public aggregator API: blending,
//! fallback, category breakdowns, and pros/cons derivation.

mod common {
    use casino_review::catalog::{
        CasinoId, CategoryAssessment, CategoryRatings, ExpertReview, ExpertReviewId, Review,
        ReviewId, ReviewTarget,
    };

    fn assessment(rating: f64) -> CategoryAssessment {
        CategoryAssessment {
            rating,
            explanation: String::new(),
        }
    }

    pub(super) fn expert(overall_rating: f64) -> ExpertReview {
        ExpertReview {
            id: ExpertReviewId(format!("expert-{overall_rating}")),
            casino_id: CasinoId("c-1".to_string()),
            bonuses: assessment(overall_rating),
            design: assessment(overall_rating),
            payouts: assessment(overall_rating),
            customer_support: assessment(overall_rating),
            game_selection: assessment(overall_rating),
            mobile_experience: assessment(overall_rating),
            overall_rating,
            summary: String::new(),
            author: "Editorial".to_string(),
            created_at: None,
        }
    }

    pub(super) fn user(overall_rating: u8) -> Review {
        user_with(overall_rating, CategoryRatings::default())
    }

    pub(super) fn user_with(overall_rating: u8, categories: CategoryRatings) -> Review {
        Review {
            id: ReviewId(format!("r-{overall_rating}")),
            target: ReviewTarget::Casino(CasinoId("c-1".to_string())),
            author: "visitor".to_string(),
            title: String::new(),
            content: "fine".to_string(),
            overall_rating,
            categories,
            pros: Vec::new(),
            cons: Vec::new(),
            helpful_votes: 0,
            is_published: true,
            created_at: None,
        }
    }
}

use casino_review::catalog::{CategoryRatings, RatingCategory};
use casino_review::rating::{
    compute_category_breakdown, compute_safety_index, generate_pros_and_cons, CategoryAveraging,
    ProsConsStatements, RatingAggregator, RatingSource,
};
use common::*;

#[test]
fn no_reviews_returns_fallback_exactly() {
    assert_eq!(compute_safety_index(&[], &[], 6.3), 6.3);
    assert_eq!(compute_safety_index(&[], &[], 0.0), 0.0);
}

#[test]
fn user_reviews_alone_ignore_fallback() {
    let reviews = vec![user(6), user(8)];

    assert_eq!(compute_safety_index(&[], &reviews, 1.0), 7.0);
    assert_eq!(compute_safety_index(&[], &reviews, 9.5), 7.0);
}

#[test]
fn expert_and_user_averages_are_blended_evenly() {
    let summary = RatingAggregator::default().summarize(&[expert(8.0)], &[user(7)], 2.0);

    assert_eq!(summary.safety_index, 7.5);
    assert_eq!(summary.source, RatingSource::Blended);
    assert_eq!(summary.expert_rating, Some(8.0));
    assert_eq!(summary.user_rating, Some(7.0));
}

#[test]
fn end_to_end_blend_of_one_expert_and_two_visitors() {
    let safety_index = compute_safety_index(&[expert(9.0)], &[user(7), user(9)], 5.0);

    assert_eq!(safety_index, 8.5);
}

#[test]
fn expert_only_uses_expert_average() {
    let summary =
        RatingAggregator::default().summarize(&[expert(6.0), expert(9.0)], &[], 3.0);

    assert_eq!(summary.safety_index, 7.5);
    assert_eq!(summary.source, RatingSource::ExpertOnly);
    assert_eq!(summary.user_rating, None);
}

#[test]
fn zero_valued_expert_average_falls_through_to_users() {
    let summary = RatingAggregator::default().summarize(&[expert(0.0)], &[user(4)], 9.0);

    assert_eq!(summary.safety_index, 4.0);
    assert_eq!(summary.source, RatingSource::UserOnly);
}

#[test]
fn breakdown_is_absent_without_reviews() {
    assert!(compute_category_breakdown(&[]).is_none());
}

#[test]
fn breakdown_zero_fills_missing_categories_by_default() {
    let reviews = vec![
        user_with(
            8,
            CategoryRatings::default().with(RatingCategory::Payouts, Some(8.0)),
        ),
        user(6),
    ];

    let breakdown = compute_category_breakdown(&reviews).expect("reviews exist");

    assert_eq!(breakdown.overall, 7.0);
    assert_eq!(breakdown.payouts, Some(4.0));
    assert_eq!(breakdown.design, Some(0.0));
}

#[test]
fn skip_missing_averages_only_supplied_categories() {
    let reviews = vec![
        user_with(
            8,
            CategoryRatings::default().with(RatingCategory::Payouts, Some(8.0)),
        ),
        user(6),
    ];

    let breakdown = RatingAggregator::new(CategoryAveraging::SkipMissing)
        .category_breakdown(&reviews)
        .expect("reviews exist");

    assert_eq!(breakdown.payouts, Some(8.0));
    assert_eq!(breakdown.design, None);
}

#[test]
fn pros_and_cons_follow_thresholds() {
    let ratings = CategoryRatings::default()
        .with(RatingCategory::Bonuses, Some(9.0))
        .with(RatingCategory::Design, Some(3.0))
        .with(RatingCategory::Payouts, Some(6.0));

    let result = generate_pros_and_cons(&ratings);

    assert_eq!(result.pros, vec!["Excellent bonus offers".to_string()]);
    assert_eq!(result.cons, vec!["Outdated website design".to_string()]);
}

#[test]
fn threshold_values_are_inclusive() {
    let ratings = CategoryRatings::default()
        .with(RatingCategory::GameSelection, Some(8.0))
        .with(RatingCategory::MobileExperience, Some(4.0));

    let result = generate_pros_and_cons(&ratings);

    assert_eq!(result.pros, vec!["Wide selection of games".to_string()]);
    assert_eq!(result.cons, vec!["Poor mobile experience".to_string()]);
}

#[test]
fn custom_statements_replace_defaults() {
    let statements = ProsConsStatements::default().with(
        RatingCategory::Bonuses,
        "Generous promotions",
        "Stingy promotions",
    );
    let aggregator = RatingAggregator::default().with_statements(statements);

    let result = aggregator.pros_and_cons(
        &CategoryRatings::default().with(RatingCategory::Bonuses, Some(10.0)),
    );

    assert_eq!(result.pros, vec!["Generous promotions".to_string()]);
    assert!(result.cons.is_empty());
}
