pub mod api;
pub mod client;
pub mod sequencer;

pub use api::{HttpRecommendationApi, RecommendationApi};
pub use client::{RecommendationClient, MAX_DISPLAYED};
