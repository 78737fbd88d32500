//! Catalog records, storage, and the HTTP surface of the review site.
//!
//! The service composes a [`CatalogRepository`] with the listing pipeline and
//! the rating aggregator so that listings, detail pages, and admin edits all
//! report the same numbers.

pub mod domain;
pub mod import;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Bonus, BonusId, BonusType, Casino, CasinoId, CategoryAssessment, CategoryRatings,
    ExpertReview, ExpertReviewId, Game, GameId, RatingCategory, Review, ReviewId, ReviewTarget,
};
pub use import::{CasinoCsvImporter, CatalogImportError, CatalogSnapshot};
pub use memory::InMemoryCatalog;
pub use repository::{CatalogRepository, RepositoryError};
pub use router::catalog_router;
pub use service::{CatalogService, CatalogServiceConfig, CatalogServiceError};
pub use views::{BonusCard, BonusDetail, CasinoCard, CasinoDetail, CasinoListing, GameDetail, RatingView};
