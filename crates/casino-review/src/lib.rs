//! Core of a casino review and affiliate catalog.
//!
//! [`rating`] blends expert and visitor scores into a safety index,
//! [`query`] runs the search, facet, sort, and pagination chain behind the
//! listing page, [`admin`] holds the editor form state, and [`catalog`] ties
//! them to a repository and an axum router.

pub mod admin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod rating;
pub mod telemetry;

pub use error::AppError;
