//! Review aggregate

pub mod model;

mod dto;

pub use dto::{CreateReviewDto, UpdateReviewDto};
pub use model::Review;
