use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{parse_rating, FormErrors};
use crate::catalog::domain::{
    CasinoId, CategoryAssessment, CategoryRatings, ExpertReview, ExpertReviewId, RatingCategory,
};
use crate::rating::{ProsAndCons, ProsConsStatements};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryInput {
    pub rating: String,
    pub explanation: String,
}

/// Raw state of the expert review editor. Updated only through [`ExpertReviewForm::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpertReviewForm {
    pub categories: BTreeMap<RatingCategory, CategoryInput>,
    /// Left blank to use the mean of the category ratings.
    pub overall_rating: String,
    pub summary: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpertReviewFormAction {
    SetCategoryRating(RatingCategory, String),
    SetCategoryExplanation(RatingCategory, String),
    SetOverallRating(String),
    SetSummary(String),
    SetAuthor(String),
    Load(Box<ExpertReview>),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpertReviewDraft {
    pub assessments: BTreeMap<RatingCategory, CategoryAssessment>,
    pub overall_rating: f64,
    pub summary: String,
    pub author: String,
}

impl ExpertReviewDraft {
    pub fn into_expert_review(
        mut self,
        id: ExpertReviewId,
        casino_id: CasinoId,
        created_at: Option<DateTime<Utc>>,
    ) -> ExpertReview {
        let mut take = |category: RatingCategory| {
            self.assessments
                .remove(&category)
                .unwrap_or(CategoryAssessment {
                    rating: 0.0,
                    explanation: String::new(),
                })
        };

        ExpertReview {
            id,
            casino_id,
            bonuses: take(RatingCategory::Bonuses),
            design: take(RatingCategory::Design),
            payouts: take(RatingCategory::Payouts),
            customer_support: take(RatingCategory::CustomerSupport),
            game_selection: take(RatingCategory::GameSelection),
            mobile_experience: take(RatingCategory::MobileExperience),
            overall_rating: self.overall_rating,
            summary: self.summary,
            author: self.author,
            created_at,
        }
    }
}

impl ExpertReviewForm {
    pub fn from_review(review: &ExpertReview) -> Self {
        let categories = RatingCategory::ordered()
            .into_iter()
            .map(|category| {
                let assessment = review.assessment(category);
                (
                    category,
                    CategoryInput {
                        rating: assessment.rating.to_string(),
                        explanation: assessment.explanation.clone(),
                    },
                )
            })
            .collect();

        Self {
            categories,
            overall_rating: review.overall_rating.to_string(),
            summary: review.summary.clone(),
            author: review.author.clone(),
        }
    }

    pub fn apply(self, action: ExpertReviewFormAction) -> Self {
        match action {
            ExpertReviewFormAction::SetCategoryRating(category, rating) => {
                self.with_category(category, |input| CategoryInput { rating, ..input })
            }
            ExpertReviewFormAction::SetCategoryExplanation(category, explanation) => self
                .with_category(category, |input| CategoryInput {
                    explanation,
                    ..input
                }),
            ExpertReviewFormAction::SetOverallRating(overall_rating) => Self {
                overall_rating,
                ..self
            },
            ExpertReviewFormAction::SetSummary(summary) => Self { summary, ..self },
            ExpertReviewFormAction::SetAuthor(author) => Self { author, ..self },
            ExpertReviewFormAction::Load(review) => Self::from_review(&review),
            ExpertReviewFormAction::Reset => Self::default(),
        }
    }

    fn with_category(
        self,
        category: RatingCategory,
        update: impl FnOnce(CategoryInput) -> CategoryInput,
    ) -> Self {
        let mut categories = self.categories;
        let current = categories.remove(&category).unwrap_or_default();
        categories.insert(category, update(current));
        Self { categories, ..self }
    }

    /// Category ratings that currently parse, ignoring blank or invalid entries.
    pub fn entered_ratings(&self) -> CategoryRatings {
        RatingCategory::ordered()
            .into_iter()
            .fold(CategoryRatings::default(), |ratings, category| {
                let rating = self
                    .categories
                    .get(&category)
                    .and_then(|input| input.rating.trim().parse::<f64>().ok())
                    .filter(|value| value.is_finite());
                ratings.with(category, rating)
            })
    }

    /// Preview of the pros and cons the entered ratings would produce.
    pub fn suggested_pros_and_cons(&self, statements: &ProsConsStatements) -> ProsAndCons {
        statements.evaluate(&self.entered_ratings())
    }

    pub fn validate(&self) -> Result<ExpertReviewDraft, FormErrors> {
        let mut errors = FormErrors::default();
        let mut assessments = BTreeMap::new();

        for category in RatingCategory::ordered() {
            let field = format!("categories.{}", category.key());
            let input = self.categories.get(&category).cloned().unwrap_or_default();

            if input.rating.trim().is_empty() {
                errors.push(field, "rating is required");
                continue;
            }

            if let Some(rating) = parse_rating(&mut errors, &field, &input.rating, 0.0..=10.0) {
                assessments.insert(
                    category,
                    CategoryAssessment {
                        rating,
                        explanation: input.explanation.trim().to_string(),
                    },
                );
            }
        }

        let overall_rating =
            match parse_rating(&mut errors, "overallRating", &self.overall_rating, 0.0..=10.0) {
                Some(value) => value,
                None if assessments.is_empty() => 0.0,
                None => {
                    assessments
                        .values()
                        .map(|assessment| assessment.rating)
                        .sum::<f64>()
                        / assessments.len() as f64
                }
            };

        let summary = self.summary.trim().to_string();
        if summary.is_empty() {
            errors.push("summary", "is required");
        }

        errors.into_result(|| ExpertReviewDraft {
            assessments,
            overall_rating,
            summary,
            author: self.author.trim().to_string(),
        })
    }
}
