use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog casinos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CasinoId(pub String);

/// Identifier wrapper for casino bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BonusId(pub String);

/// Identifier wrapper for catalog games.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub String);

/// Identifier wrapper for visitor reviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReviewId(pub String);

/// Identifier wrapper for staff-authored expert reviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExpertReviewId(pub String);

/// Catalog entry for a single casino. Owned by the store, read-only to the rating and query code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Casino {
    pub id: CasinoId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Stored fallback rating used when no reviews exist.
    pub safety_index: f64,
    /// Optional denormalized user rating a caller may pre-populate for sorting.
    #[serde(default)]
    pub user_rating: Option<f64>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub established_year: Option<i32>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub supported_currencies: Vec<String>,
    #[serde(default)]
    pub game_providers: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub restricted_countries: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// The six rating dimensions shared by expert and casino user reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingCategory {
    Bonuses,
    Design,
    Payouts,
    CustomerSupport,
    GameSelection,
    MobileExperience,
}

impl RatingCategory {
    pub fn ordered() -> [RatingCategory; 6] {
        [
            RatingCategory::Bonuses,
            RatingCategory::Design,
            RatingCategory::Payouts,
            RatingCategory::CustomerSupport,
            RatingCategory::GameSelection,
            RatingCategory::MobileExperience,
        ]
    }

    /// JSON field name of the category.
    pub fn key(&self) -> &'static str {
        match self {
            RatingCategory::Bonuses => "bonuses",
            RatingCategory::Design => "design",
            RatingCategory::Payouts => "payouts",
            RatingCategory::CustomerSupport => "customerSupport",
            RatingCategory::GameSelection => "gameSelection",
            RatingCategory::MobileExperience => "mobileExperience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingCategory::Bonuses => "Bonuses",
            RatingCategory::Design => "Design",
            RatingCategory::Payouts => "Payouts",
            RatingCategory::CustomerSupport => "Customer Support",
            RatingCategory::GameSelection => "Game Selection",
            RatingCategory::MobileExperience => "Mobile Experience",
        }
    }
}

/// Optional per-category ratings. Visitor reviews leave them empty for bonuses and games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRatings {
    #[serde(default)]
    pub bonuses: Option<f64>,
    #[serde(default)]
    pub design: Option<f64>,
    #[serde(default)]
    pub payouts: Option<f64>,
    #[serde(default)]
    pub customer_support: Option<f64>,
    #[serde(default)]
    pub game_selection: Option<f64>,
    #[serde(default)]
    pub mobile_experience: Option<f64>,
}

impl CategoryRatings {
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

    pub fn with(mut self, category: RatingCategory, rating: Option<f64>) -> Self {
        match category {
            RatingCategory::Bonuses => self.bonuses = rating,
            RatingCategory::Design => self.design = rating,
            RatingCategory::Payouts => self.payouts = rating,
            RatingCategory::CustomerSupport => self.customer_support = rating,
            RatingCategory::GameSelection => self.game_selection = rating,
            RatingCategory::MobileExperience => self.mobile_experience = rating,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        RatingCategory::ordered()
            .iter()
            .all(|category| self.get(*category).is_none())
    }
}

/// Expert rating for one category together with the written justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAssessment {
    pub rating: f64,
    #[serde(default)]
    pub explanation: String,
}

/// Staff-authored, multi-category assessment of a casino.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertReview {
    pub id: ExpertReviewId,
    pub casino_id: CasinoId,
    pub bonuses: CategoryAssessment,
    pub design: CategoryAssessment,
    pub payouts: CategoryAssessment,
    pub customer_support: CategoryAssessment,
    pub game_selection: CategoryAssessment,
    pub mobile_experience: CategoryAssessment,
    pub overall_rating: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ExpertReview {
    pub fn assessment(&self, category: RatingCategory) -> &CategoryAssessment {
        match category {
            RatingCategory::Bonuses => &self.bonuses,
            RatingCategory::Design => &self.design,
            RatingCategory::Payouts => &self.payouts,
            RatingCategory::CustomerSupport => &self.customer_support,
            RatingCategory::GameSelection => &self.game_selection,
            RatingCategory::MobileExperience => &self.mobile_experience,
        }
    }

    pub fn category_ratings(&self) -> CategoryRatings {
        RatingCategory::ordered()
            .into_iter()
            .fold(CategoryRatings::default(), |ratings, category| {
                ratings.with(category, Some(self.assessment(category).rating))
            })
    }
}

/// The single catalog entity a visitor review is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "camelCase")]
pub enum ReviewTarget {
    Casino(CasinoId),
    Bonus(BonusId),
    Game(GameId),
}

impl ReviewTarget {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewTarget::Casino(_) => "casino",
            ReviewTarget::Bonus(_) => "bonus",
            ReviewTarget::Game(_) => "game",
        }
    }
}

/// Visitor-submitted review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub target: ReviewTarget,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Mandatory 1-10 score.
    pub overall_rating: u8,
    #[serde(default)]
    pub categories: CategoryRatings,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub helpful_votes: u32,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BonusType {
    Welcome,
    NoDeposit,
    FreeSpins,
    Reload,
    Cashback,
    Other,
}

impl BonusType {
    pub fn label(&self) -> &'static str {
        match self {
            BonusType::Welcome => "Welcome Bonus",
            BonusType::NoDeposit => "No Deposit Bonus",
            BonusType::FreeSpins => "Free Spins",
            BonusType::Reload => "Reload Bonus",
            BonusType::Cashback => "Cashback",
            BonusType::Other => "Other",
        }
    }
}

/// Promotional offer attached to a casino.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    pub id: BonusId,
    pub casino_id: CasinoId,
    pub title: String,
    pub bonus_type: BonusType,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub wagering_requirement: Option<f64>,
    /// Stored fallback rating.
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Catalog game entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rtp: Option<f64>,
    /// Stored fallback rating.
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
