use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::domain::{
    Bonus, BonusId, BonusType, Casino, CasinoId, CategoryAssessment, CategoryRatings,
    ExpertReview, ExpertReviewId, Game, GameId, Review, ReviewId, ReviewTarget,
};
use crate::catalog::repository::{CatalogRepository, RepositoryError};
use crate::catalog::{catalog_router, CatalogService, CatalogServiceConfig, CatalogSnapshot};
use crate::catalog::InMemoryCatalog;

pub(super) fn casino(id: &str, name: &str, safety_index: f64) -> Casino {
    Casino {
        id: CasinoId(id.to_string()),
        name: name.to_string(),
        slug: id.to_string(),
        description: format!("{name} online casino"),
        website_url: format!("https://{id}.example"),
        logo_url: None,
        safety_index,
        user_rating: None,
        license: Some("Malta Gaming Authority".to_string()),
        established_year: Some(2015),
        payment_methods: vec!["Visa".to_string()],
        supported_currencies: vec!["EUR".to_string()],
        game_providers: vec!["NetEnt".to_string()],
        features: vec!["Live Chat".to_string()],
        restricted_countries: Vec::new(),
        is_active: true,
        is_featured: false,
        created_at: None,
    }
}

fn assessment(rating: f64) -> CategoryAssessment {
    CategoryAssessment {
        rating,
        explanation: String::new(),
    }
}

pub(super) fn expert_review(casino_id: &str, overall_rating: f64) -> ExpertReview {
    ExpertReview {
        id: ExpertReviewId(format!("expert-{casino_id}")),
        casino_id: CasinoId(casino_id.to_string()),
        bonuses: assessment(9.0),
        design: assessment(3.0),
        payouts: assessment(6.0),
        customer_support: assessment(8.5),
        game_selection: assessment(7.0),
        mobile_experience: assessment(5.0),
        overall_rating,
        summary: "Solid operator".to_string(),
        author: "Editorial".to_string(),
        created_at: None,
    }
}

pub(super) fn user_review(id: &str, target: ReviewTarget, overall_rating: u8) -> Review {
    Review {
        id: ReviewId(id.to_string()),
        target,
        author: "visitor".to_string(),
        title: String::new(),
        content: "Played for a month".to_string(),
        overall_rating,
        categories: CategoryRatings::default(),
        pros: Vec::new(),
        cons: Vec::new(),
        helpful_votes: 0,
        is_published: true,
        created_at: None,
    }
}

pub(super) fn casino_target(id: &str) -> ReviewTarget {
    ReviewTarget::Casino(CasinoId(id.to_string()))
}

/// Two active casinos, one inactive, a bonus, and a game.
///
/// `aurora` has an expert review at 9.0 and published user reviews at 7 and 9,
/// plus one unpublished review that must never be counted.
pub(super) fn snapshot() -> CatalogSnapshot {
    let mut inactive = casino("shuttered", "Shuttered Palace", 9.9);
    inactive.is_active = false;

    let mut hidden = user_review("rev-hidden", casino_target("aurora"), 1);
    hidden.is_published = false;

    CatalogSnapshot {
        casinos: vec![
            casino("aurora", "Aurora Casino", 5.0),
            casino("borealis", "Borealis Bet", 6.5),
            inactive,
        ],
        expert_reviews: vec![expert_review("aurora", 9.0)],
        reviews: vec![
            user_review("rev-a", casino_target("aurora"), 7),
            user_review("rev-b", casino_target("aurora"), 9),
            hidden,
            user_review("rev-bonus", ReviewTarget::Bonus(BonusId("aurora-welcome".to_string())), 6),
        ],
        bonuses: vec![Bonus {
            id: BonusId("aurora-welcome".to_string()),
            casino_id: CasinoId("aurora".to_string()),
            title: "100% up to 500 EUR".to_string(),
            bonus_type: BonusType::Welcome,
            amount: "500 EUR".to_string(),
            wagering_requirement: Some(35.0),
            rating: 8.0,
            is_active: true,
        }],
        games: vec![Game {
            id: GameId("starburst".to_string()),
            name: "Starburst".to_string(),
            provider: "NetEnt".to_string(),
            category: "slots".to_string(),
            rtp: Some(96.1),
            rating: 7.8,
            is_active: true,
        }],
    }
}

pub(super) fn build_service() -> (Arc<CatalogService<InMemoryCatalog>>, Arc<InMemoryCatalog>) {
    let repository = Arc::new(InMemoryCatalog::from_snapshot(snapshot()));
    let service = CatalogService::new(repository.clone(), CatalogServiceConfig::default())
        .expect("default config is valid");
    (Arc::new(service), repository)
}

pub(super) fn router_with_service(service: Arc<CatalogService<InMemoryCatalog>>) -> axum::Router {
    catalog_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body reads");
    serde_json::from_slice(&body).expect("body is JSON")
}

pub(super) struct UnavailableRepository;

impl CatalogRepository for UnavailableRepository {
    fn active_casinos(&self) -> Result<Vec<Casino>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn casino(&self, _id: &CasinoId) -> Result<Option<Casino>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn expert_reviews(&self, _casino_id: &CasinoId) -> Result<Vec<ExpertReview>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn published_reviews(&self, _target: &ReviewTarget) -> Result<Vec<Review>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn bonuses_for_casino(&self, _casino_id: &CasinoId) -> Result<Vec<Bonus>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn bonus(&self, _id: &BonusId) -> Result<Option<Bonus>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn game(&self, _id: &GameId) -> Result<Option<Game>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn insert_casino(&self, _casino: Casino) -> Result<Casino, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update_casino(&self, _casino: Casino) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn upsert_expert_review(&self, _review: ExpertReview) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn insert_review(&self, _review: Review) -> Result<Review, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn publish_review(&self, _id: &ReviewId) -> Result<Review, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn increment_helpful(&self, _id: &ReviewId) -> Result<u32, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
