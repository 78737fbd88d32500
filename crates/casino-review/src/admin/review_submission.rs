use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::FormErrors;
use crate::catalog::domain::{CategoryRatings, RatingCategory, Review, ReviewId, ReviewTarget};

pub const MIN_USER_RATING: i64 = 1;
pub const MAX_USER_RATING: i64 = 10;

/// Visitor review as posted by the public review form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub target: ReviewTarget,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub overall_rating: i64,
    #[serde(default)]
    pub categories: CategoryRatings,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl ReviewSubmission {
    /// Check the submission and build an unpublished review awaiting moderation.
    pub fn into_review(
        self,
        id: ReviewId,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Review, FormErrors> {
        let mut errors = FormErrors::default();

        let overall_rating = match u8::try_from(self.overall_rating) {
            Ok(rating) if (MIN_USER_RATING..=MAX_USER_RATING).contains(&self.overall_rating) => {
                rating
            }
            _ => {
                errors.push(
                    "overallRating",
                    format!("must be between {MIN_USER_RATING} and {MAX_USER_RATING}"),
                );
                0
            }
        };

        let content = self.content.trim().to_string();
        if content.is_empty() {
            errors.push("content", "is required");
        }

        let is_casino = matches!(self.target, ReviewTarget::Casino(_));
        if !is_casino && !self.categories.is_empty() {
            errors.push(
                "categories",
                format!("are only accepted for casino reviews, not {}", self.target.label()),
            );
        }

        for category in RatingCategory::ordered() {
            if let Some(rating) = self.categories.get(category) {
                let in_range = rating.is_finite()
                    && (MIN_USER_RATING as f64..=MAX_USER_RATING as f64).contains(&rating);
                if !in_range {
                    errors.push(
                        format!("categories.{}", category.key()),
                        format!("must be between {MIN_USER_RATING} and {MAX_USER_RATING}"),
                    );
                }
            }
        }

        errors.into_result(|| Review {
            id,
            target: self.target,
            author: self.author.trim().to_string(),
            title: self.title.trim().to_string(),
            content,
            overall_rating,
            categories: self.categories,
            pros: clean_entries(self.pros),
            cons: clean_entries(self.cons),
            helpful_votes: 0,
            is_published: false,
            created_at,
        })
    }
}

fn clean_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}
