use super::domain::{
    Bonus, BonusId, Casino, CasinoId, ExpertReview, Game, GameId, Review, ReviewId, ReviewTarget,
};

/// Storage abstraction so the catalog service can be exercised in isolation.
///
/// Implementations filter visibility: `active_casinos` excludes inactive
/// casinos and `published_reviews` excludes unpublished reviews. The rating
/// code trusts these filters and does not re-check them.
pub trait CatalogRepository: Send + Sync {
    fn active_casinos(&self) -> Result<Vec<Casino>, RepositoryError>;
    fn casino(&self, id: &CasinoId) -> Result<Option<Casino>, RepositoryError>;
    fn expert_reviews(&self, casino_id: &CasinoId) -> Result<Vec<ExpertReview>, RepositoryError>;
    fn published_reviews(&self, target: &ReviewTarget) -> Result<Vec<Review>, RepositoryError>;
    fn bonuses_for_casino(&self, casino_id: &CasinoId) -> Result<Vec<Bonus>, RepositoryError>;
    fn bonus(&self, id: &BonusId) -> Result<Option<Bonus>, RepositoryError>;
    fn game(&self, id: &GameId) -> Result<Option<Game>, RepositoryError>;

    fn insert_casino(&self, casino: Casino) -> Result<Casino, RepositoryError>;
    fn update_casino(&self, casino: Casino) -> Result<(), RepositoryError>;
    /// Insert or replace by id. An id already owned by another casino is a `Conflict`.
    fn upsert_expert_review(&self, review: ExpertReview) -> Result<(), RepositoryError>;
    fn insert_review(&self, review: Review) -> Result<Review, RepositoryError>;
    fn publish_review(&self, id: &ReviewId) -> Result<Review, RepositoryError>;
    /// Add one helpful vote to a published review and return the new total.
    fn increment_helpful(&self, id: &ReviewId) -> Result<u32, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
