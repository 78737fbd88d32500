use serde::{Deserialize, Serialize};

use crate::catalog::domain::{CategoryRatings, RatingCategory};

/// Ratings at or above this value produce a positive statement.
pub const PRO_THRESHOLD: f64 = 8.0;
/// Ratings at or below this value produce a negative statement.
pub const CON_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsAndCons {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Positive and negative statement pair for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStatements {
    pub category: RatingCategory,
    pub pro: String,
    pub con: String,
}

impl CategoryStatements {
    fn new(category: RatingCategory, pro: &str, con: &str) -> Self {
        Self {
            category,
            pro: pro.to_string(),
            con: con.to_string(),
        }
    }
}

/// Statement table consulted when synthesizing review summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsConsStatements {
    entries: Vec<CategoryStatements>,
}

impl Default for ProsConsStatements {
    fn default() -> Self {
        Self {
            entries: vec![
                CategoryStatements::new(
                    RatingCategory::Bonuses,
                    "Excellent bonus offers",
                    "Limited bonus offers",
                ),
                CategoryStatements::new(
                    RatingCategory::Design,
                    "Modern and intuitive design",
                    "Outdated website design",
                ),
                CategoryStatements::new(
                    RatingCategory::Payouts,
                    "Fast and reliable payouts",
                    "Slow payout processing",
                ),
                CategoryStatements::new(
                    RatingCategory::CustomerSupport,
                    "Responsive customer support",
                    "Poor customer support",
                ),
                CategoryStatements::new(
                    RatingCategory::GameSelection,
                    "Wide selection of games",
                    "Limited game selection",
                ),
                CategoryStatements::new(
                    RatingCategory::MobileExperience,
                    "Excellent mobile experience",
                    "Poor mobile experience",
                ),
            ],
        }
    }
}

impl ProsConsStatements {
    /// Replace the statements for a category, keeping category order stable.
    pub fn with(mut self, category: RatingCategory, pro: &str, con: &str) -> Self {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.category == category)
        {
            Some(entry) => *entry = CategoryStatements::new(category, pro, con),
            None => self.entries.push(CategoryStatements::new(category, pro, con)),
        }
        self
    }

    pub fn statements_for(&self, category: RatingCategory) -> Option<&CategoryStatements> {
        self.entries.iter().find(|entry| entry.category == category)
    }

    pub fn evaluate(&self, ratings: &CategoryRatings) -> ProsAndCons {
        let mut result = ProsAndCons::default();

        for category in RatingCategory::ordered() {
            let (Some(rating), Some(statements)) =
                (ratings.get(category), self.statements_for(category))
            else {
                continue;
            };

            if rating >= PRO_THRESHOLD {
                result.pros.push(statements.pro.clone());
            } else if rating <= CON_THRESHOLD {
                result.cons.push(statements.con.clone());
            }
        }

        result
    }
}

/// Derive pros and cons from category ratings using the default statement table.
pub fn generate_pros_and_cons(ratings: &CategoryRatings) -> ProsAndCons {
    ProsConsStatements::default().evaluate(ratings)
}
