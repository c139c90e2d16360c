//! Career Recommendation Backend
//!
//! Maps a user's self-reported interests and strengths to careers from a
//! fixed catalog, each with a description and a learning roadmap.
//! - Catalog: the static career table
//! - Recommender: ordered rule matching against the catalog
//! - API: the `POST /recommend` HTTP endpoint

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod recommender;

pub use api::{configure, run_server, AppState};
pub use catalog::{CareerCatalog, CareerEntry};
pub use config::ServerConfig;
pub use error::{ApiError, ConfigError};
pub use recommender::{recommend_careers, CareerRecommendation, RecommendationRequest, Recommender};
