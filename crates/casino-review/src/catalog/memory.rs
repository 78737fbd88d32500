use std::sync::RwLock;

use super::domain::{
    Bonus, BonusId, Casino, CasinoId, ExpertReview, Game, GameId, Review, ReviewId, ReviewTarget,
};
use super::import::CatalogSnapshot;
use super::repository::{CatalogRepository, RepositoryError};

/// Process-local catalog store keeping records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogSnapshot>,
}

impl InMemoryCatalog {
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Copy of everything currently stored, including inactive and unpublished records.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.read().expect("catalog lock poisoned").clone()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn active_casinos(&self) -> Result<Vec<Casino>, RepositoryError> {
        let guard = self.state.read().expect("catalog lock poisoned");
        Ok(guard
            .casinos
            .iter()
            .filter(|casino| casino.is_active)
            .cloned()
            .collect())
    }

    fn casino(&self, id: &CasinoId) -> Result<Option<Casino>, RepositoryError> {
        let guard = self.state.read().expect("catalog lock poisoned");
        Ok(guard.casinos.iter().find(|casino| &casino.id == id).cloned())
    }

    fn expert_reviews(&self, casino_id: &CasinoId) -> Result<Vec<ExpertReview>, RepositoryError> {
        let guard = self.state.read().expect("catalog lock poisoned");
        Ok(guard
            .expert_reviews
            .iter()
            .filter(|review| &review.casino_id == casino_id)
            .cloned()
            .collect())
    }

    fn published_reviews(&self, target: &ReviewTarget) -> Result<Vec<Review>, RepositoryError> {
        let guard = self.state.read().expect("catalog lock poisoned");
        Ok(guard
            .reviews
            .iter()
            .filter(|review| review.is_published && &review.target == target)
            .cloned()
            .collect())
    }

    fn bonuses_for_casino(&self, casino_id: &CasinoId) -> Result<Vec<Bonus>, RepositoryError> {
        let guard = self.state.read().expect("catalog lock poisoned");
        Ok(guard
            .bonuses
            .iter()
            .filter(|bonus| bonus.is_active && &bonus.casino_id == casino_id)
            .cloned()
            .collect())
    }

    fn bonus(&self, id: &BonusId) -> Result<Option<Bonus>, RepositoryError> {
        let guard = self.state.read().expect("catalog lock poisoned");
        Ok(guard.bonuses.iter().find(|bonus| &bonus.id == id).cloned())
    }

    fn game(&self, id: &GameId) -> Result<Option<Game>, RepositoryError> {
        let guard = self.state.read().expect("catalog lock poisoned");
        Ok(guard.games.iter().find(|game| &game.id == id).cloned())
    }

    fn insert_casino(&self, casino: Casino) -> Result<Casino, RepositoryError> {
        let mut guard = self.state.write().expect("catalog lock poisoned");
        let duplicate = guard.casinos.iter().any(|existing| {
            existing.id == casino.id || (!casino.slug.is_empty() && existing.slug == casino.slug)
        });
        if duplicate {
            return Err(RepositoryError::Conflict);
        }
        guard.casinos.push(casino.clone());
        Ok(casino)
    }

    fn update_casino(&self, casino: Casino) -> Result<(), RepositoryError> {
        let mut guard = self.state.write().expect("catalog lock poisoned");
        let slug_taken = guard
            .casinos
            .iter()
            .any(|existing| existing.id != casino.id && existing.slug == casino.slug);
        if slug_taken {
            return Err(RepositoryError::Conflict);
        }

        match guard
            .casinos
            .iter_mut()
            .find(|existing| existing.id == casino.id)
        {
            Some(existing) => {
                *existing = casino;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn upsert_expert_review(&self, review: ExpertReview) -> Result<(), RepositoryError> {
        let mut guard = self.state.write().expect("catalog lock poisoned");
        match guard
            .expert_reviews
            .iter()
            .position(|existing| existing.id == review.id)
        {
            Some(index) if guard.expert_reviews[index].casino_id != review.casino_id => {
                return Err(RepositoryError::Conflict);
            }
            Some(index) => guard.expert_reviews[index] = review,
            None => guard.expert_reviews.push(review),
        }
        Ok(())
    }

    fn insert_review(&self, review: Review) -> Result<Review, RepositoryError> {
        let mut guard = self.state.write().expect("catalog lock poisoned");
        if guard.reviews.iter().any(|existing| existing.id == review.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.reviews.push(review.clone());
        Ok(review)
    }

    fn publish_review(&self, id: &ReviewId) -> Result<Review, RepositoryError> {
        let mut guard = self.state.write().expect("catalog lock poisoned");
        let review = guard
            .reviews
            .iter_mut()
            .find(|review| &review.id == id)
            .ok_or(RepositoryError::NotFound)?;
        review.is_published = true;
        Ok(review.clone())
    }

    fn increment_helpful(&self, id: &ReviewId) -> Result<u32, RepositoryError> {
        let mut guard = self.state.write().expect("catalog lock poisoned");
        let review = guard
            .reviews
            .iter_mut()
            .find(|review| &review.id == id && review.is_published)
            .ok_or(RepositoryError::NotFound)?;
        review.helpful_votes = review.helpful_votes.saturating_add(1);
        Ok(review.helpful_votes)
    }
}
