use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{
    Bonus, BonusId, Casino, CasinoId, CategoryRatings, ExpertReview, ExpertReviewId, GameId,
    RatingCategory, Review, ReviewId, ReviewTarget,
};
use super::repository::{CatalogRepository, RepositoryError};
use super::views::{
    BonusCard, BonusDetail, CasinoCard, CasinoDetail, CasinoListing, GameDetail, RatingView,
};
use crate::admin::{CasinoForm, ExpertReviewForm, FormErrors, ReviewSubmission};
use crate::query::{CasinoQuery, CasinoQueryPipeline, Page, PaginationError, QueryParamError};
use crate::rating::{CategoryAveraging, CategoryBreakdown, RatingAggregator};

/// Tuning knobs for the catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogServiceConfig {
    pub page_size: usize,
    pub category_averaging: CategoryAveraging,
    /// Replace stored safety index and user rating with aggregated values before filtering and sorting.
    pub rank_by_aggregated: bool,
}

impl Default for CatalogServiceConfig {
    fn default() -> Self {
        Self {
            page_size: crate::query::DEFAULT_PAGE_SIZE,
            category_averaging: CategoryAveraging::default(),
            rank_by_aggregated: false,
        }
    }
}

/// Service composing the repository, listing pipeline, and rating aggregator.
pub struct CatalogService<R> {
    repository: Arc<R>,
    pipeline: CasinoQueryPipeline,
    aggregator: RatingAggregator,
    rank_by_aggregated: bool,
    review_sequence: AtomicU64,
    expert_sequence: AtomicU64,
}

impl<R> CatalogService<R>
where
    R: CatalogRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: CatalogServiceConfig) -> Result<Self, CatalogServiceError> {
        let pipeline = CasinoQueryPipeline::new(config.page_size)?;
        Ok(Self {
            repository,
            pipeline,
            aggregator: RatingAggregator::new(config.category_averaging),
            rank_by_aggregated: config.rank_by_aggregated,
            review_sequence: AtomicU64::new(1),
            expert_sequence: AtomicU64::new(1),
        })
    }

    /// Run the listing pipeline and attach display ratings to the visible page.
    pub fn list_casinos(&self, query: &CasinoQuery) -> Result<CasinoListing, CatalogServiceError> {
        let mut casinos = self.repository.active_casinos()?;

        if self.rank_by_aggregated {
            casinos = casinos
                .into_iter()
                .map(|casino| self.with_aggregated_ratings(casino))
                .collect::<Result<_, _>>()?;
        }

        let page = self.pipeline.run(&casinos, query)?;
        debug!(
            search = %query.search,
            total = page.total_count,
            page = page.page,
            "casino listing built"
        );

        let mut cards = Vec::with_capacity(page.items.len());
        for casino in &page.items {
            cards.push(CasinoCard {
                rating: self.casino_rating(casino)?,
                casino: casino.clone(),
            });
        }

        Ok(Page {
            items: cards,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            total_count: page.total_count,
        })
    }

    pub fn casino_detail(&self, id: &CasinoId) -> Result<CasinoDetail, CatalogServiceError> {
        let casino = self
            .repository
            .casino(id)?
            .filter(|casino| casino.is_active)
            .ok_or_else(|| CatalogServiceError::not_found("casino", &id.0))?;

        let expert_reviews = self.repository.expert_reviews(id)?;
        let mut reviews = self
            .repository
            .published_reviews(&ReviewTarget::Casino(id.clone()))?;

        let summary = self
            .aggregator
            .summarize(&expert_reviews, &reviews, casino.safety_index);
        let category_breakdown = self.aggregator.category_breakdown(&reviews);

        let expert_review = expert_reviews.into_iter().next();
        let pros_and_cons = match (&expert_review, &category_breakdown) {
            (Some(review), _) => self.aggregator.pros_and_cons(&review.category_ratings()),
            (None, Some(breakdown)) => self
                .aggregator
                .pros_and_cons(&breakdown_ratings(breakdown)),
            (None, None) => Default::default(),
        };

        let bonuses = self
            .repository
            .bonuses_for_casino(id)?
            .into_iter()
            .map(|bonus| self.bonus_card(bonus))
            .collect::<Result<Vec<_>, _>>()?;

        reviews.sort_by(|left, right| right.helpful_votes.cmp(&left.helpful_votes));

        Ok(CasinoDetail {
            casino,
            rating: summary.into(),
            category_breakdown,
            expert_review,
            pros_and_cons,
            bonuses,
            reviews,
        })
    }

    pub fn bonus_detail(&self, id: &BonusId) -> Result<BonusDetail, CatalogServiceError> {
        let bonus = self
            .repository
            .bonus(id)?
            .filter(|bonus| bonus.is_active)
            .ok_or_else(|| CatalogServiceError::not_found("bonus", &id.0))?;

        let mut reviews = self
            .repository
            .published_reviews(&ReviewTarget::Bonus(id.clone()))?;
        let rating = self.aggregator.summarize(&[], &reviews, bonus.rating).into();
        let casino = self.repository.casino(&bonus.casino_id)?;
        reviews.sort_by(|left, right| right.helpful_votes.cmp(&left.helpful_votes));

        Ok(BonusDetail {
            bonus_type_label: bonus.bonus_type.label(),
            bonus,
            casino,
            rating,
            reviews,
        })
    }

    pub fn game_detail(&self, id: &GameId) -> Result<GameDetail, CatalogServiceError> {
        let game = self
            .repository
            .game(id)?
            .filter(|game| game.is_active)
            .ok_or_else(|| CatalogServiceError::not_found("game", &id.0))?;

        let mut reviews = self
            .repository
            .published_reviews(&ReviewTarget::Game(id.clone()))?;
        let rating = self.aggregator.summarize(&[], &reviews, game.rating).into();
        reviews.sort_by(|left, right| right.helpful_votes.cmp(&left.helpful_votes));

        Ok(GameDetail {
            game,
            rating,
            reviews,
        })
    }

    /// Store a visitor review. It stays hidden until an admin publishes it.
    pub fn submit_review(
        &self,
        submission: ReviewSubmission,
    ) -> Result<Review, CatalogServiceError> {
        self.ensure_target_exists(&submission.target)?;

        let mut review = submission.into_review(self.next_review_id(), Some(Utc::now()))?;
        // Seeded catalogs may already hold ids from the sequence; skip past them.
        let stored = loop {
            match self.repository.insert_review(review.clone()) {
                Err(RepositoryError::Conflict) => {
                    debug!(review_id = %review.id.0, "review id taken, advancing sequence");
                    review.id = self.next_review_id();
                }
                result => break result?,
            }
        };

        info!(review_id = %stored.id.0, target = stored.target.label(), "review submitted");
        Ok(stored)
    }

    pub fn publish_review(&self, id: &ReviewId) -> Result<Review, CatalogServiceError> {
        let review = self
            .repository
            .publish_review(id)
            .map_err(|err| not_found_as(err, "review", &id.0))?;
        info!(review_id = %id.0, "review published");
        Ok(review)
    }

    pub fn mark_helpful(&self, id: &ReviewId) -> Result<u32, CatalogServiceError> {
        self.repository
            .increment_helpful(id)
            .map_err(|err| not_found_as(err, "review", &id.0))
    }

    pub fn create_casino(&self, form: CasinoForm) -> Result<Casino, CatalogServiceError> {
        let draft = form.validate()?;
        let id = CasinoId(draft.slug.clone());
        let casino = self
            .repository
            .insert_casino(draft.into_casino(id, Some(Utc::now())))?;

        info!(casino_id = %casino.id.0, "casino created");
        Ok(casino)
    }

    pub fn update_casino(
        &self,
        id: &CasinoId,
        form: CasinoForm,
    ) -> Result<Casino, CatalogServiceError> {
        let existing = self
            .repository
            .casino(id)?
            .ok_or_else(|| CatalogServiceError::not_found("casino", &id.0))?;

        let draft = form.validate()?;
        let mut casino = draft.into_casino(existing.id, existing.created_at);
        casino.user_rating = existing.user_rating;

        self.repository
            .update_casino(casino.clone())
            .map_err(|err| not_found_as(err, "casino", &id.0))?;

        info!(casino_id = %id.0, "casino updated");
        Ok(casino)
    }

    /// Create or replace the expert review of a casino.
    pub fn save_expert_review(
        &self,
        casino_id: &CasinoId,
        form: ExpertReviewForm,
    ) -> Result<ExpertReview, CatalogServiceError> {
        if self.repository.casino(casino_id)?.is_none() {
            return Err(CatalogServiceError::not_found("casino", &casino_id.0));
        }

        let draft = form.validate()?;
        let existing = self.repository.expert_reviews(casino_id)?.into_iter().next();
        let (id, created_at) = match existing {
            Some(review) => (review.id, review.created_at),
            None => (self.next_expert_id(), Some(Utc::now())),
        };

        let mut review = draft.into_expert_review(id, casino_id.clone(), created_at);
        loop {
            match self.repository.upsert_expert_review(review.clone()) {
                Err(RepositoryError::Conflict) => {
                    debug!(expert_review_id = %review.id.0, "expert review id taken, advancing sequence");
                    review.id = self.next_expert_id();
                }
                result => break result?,
            }
        }

        info!(casino_id = %casino_id.0, expert_review_id = %review.id.0, "expert review saved");
        Ok(review)
    }

    fn next_review_id(&self) -> ReviewId {
        ReviewId(format!(
            "rev-{:06}",
            self.review_sequence.fetch_add(1, Ordering::Relaxed)
        ))
    }

    fn next_expert_id(&self) -> ExpertReviewId {
        ExpertReviewId(format!(
            "expert-{:06}",
            self.expert_sequence.fetch_add(1, Ordering::Relaxed)
        ))
    }

    fn casino_rating(&self, casino: &Casino) -> Result<RatingView, CatalogServiceError> {
        let expert_reviews = self.repository.expert_reviews(&casino.id)?;
        let reviews = self
            .repository
            .published_reviews(&ReviewTarget::Casino(casino.id.clone()))?;
        Ok(self
            .aggregator
            .summarize(&expert_reviews, &reviews, casino.safety_index)
            .into())
    }

    fn with_aggregated_ratings(&self, mut casino: Casino) -> Result<Casino, CatalogServiceError> {
        let expert_reviews = self.repository.expert_reviews(&casino.id)?;
        let reviews = self
            .repository
            .published_reviews(&ReviewTarget::Casino(casino.id.clone()))?;
        let summary = self
            .aggregator
            .summarize(&expert_reviews, &reviews, casino.safety_index);

        casino.safety_index = summary.safety_index;
        casino.user_rating = summary.user_rating.or(casino.user_rating);
        Ok(casino)
    }

    fn bonus_card(&self, bonus: Bonus) -> Result<BonusCard, CatalogServiceError> {
        let reviews = self
            .repository
            .published_reviews(&ReviewTarget::Bonus(bonus.id.clone()))?;
        let rating = self.aggregator.summarize(&[], &reviews, bonus.rating).into();
        Ok(BonusCard {
            bonus_type_label: bonus.bonus_type.label(),
            bonus,
            rating,
        })
    }

    fn ensure_target_exists(&self, target: &ReviewTarget) -> Result<(), CatalogServiceError> {
        let exists = match target {
            ReviewTarget::Casino(id) => self.repository.casino(id)?.is_some(),
            ReviewTarget::Bonus(id) => self.repository.bonus(id)?.is_some(),
            ReviewTarget::Game(id) => self.repository.game(id)?.is_some(),
        };

        if exists {
            Ok(())
        } else {
            let id = match target {
                ReviewTarget::Casino(id) => &id.0,
                ReviewTarget::Bonus(id) => &id.0,
                ReviewTarget::Game(id) => &id.0,
            };
            Err(CatalogServiceError::not_found(target.label(), id))
        }
    }
}

fn breakdown_ratings(breakdown: &CategoryBreakdown) -> CategoryRatings {
    RatingCategory::ordered()
        .into_iter()
        .fold(CategoryRatings::default(), |ratings, category| {
            ratings.with(category, breakdown.get(category))
        })
}

fn not_found_as(err: RepositoryError, entity: &'static str, id: &str) -> CatalogServiceError {
    match err {
        RepositoryError::NotFound => CatalogServiceError::not_found(entity, id),
        other => CatalogServiceError::Repository(other),
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    Validation(#[from] FormErrors),
    #[error(transparent)]
    Query(#[from] QueryParamError),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogServiceError {
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
