//! Review domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{CreateReviewDto, UpdateReviewDto};
use crate::domain::entity::{next_update, Entity, PlaceId, ReviewId, UserId};
use crate::domain::{DomainError, DomainResult};
use crate::shared::validations::{non_blank, require};

pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

fn validate_rating(rating: i64) -> DomainResult<u8> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(DomainError::Validation(format!(
            "Rating must be an integer between {} and {}",
            RATING_MIN, RATING_MAX
        )));
    }
    // range checked above
    Ok(rating as u8)
}

/// A user's review of a place.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Review {
    id: ReviewId,
    text: String,
    /// 1 to 5 inclusive
    rating: u8,
    /// Author
    user_id: UserId,
    /// Reviewed place
    place_id: PlaceId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(text: &str, rating: i64, user_id: UserId, place_id: PlaceId) -> DomainResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: ReviewId::new(),
            text: non_blank("Text", text)?,
            rating: validate_rating(rating)?,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn place_id(&self) -> &PlaceId {
        &self.place_id
    }

    pub fn with_text(mut self, text: &str) -> DomainResult<Self> {
        self.text = non_blank("Text", text)?;
        Ok(self.touched())
    }

    pub fn with_rating(mut self, rating: i64) -> DomainResult<Self> {
        self.rating = validate_rating(rating)?;
        Ok(self.touched())
    }

    /// Apply every supplied field of `dto`, or none of them.
    pub fn apply(self, dto: &UpdateReviewDto) -> DomainResult<Self> {
        let mut review = self;
        if let Some(text) = &dto.text {
            review = review.with_text(text)?;
        }
        if let Some(rating) = dto.rating {
            review = review.with_rating(rating)?;
        }
        Ok(review)
    }

    fn touched(mut self) -> Self {
        self.updated_at = next_update(self.updated_at);
        self
    }
}

impl TryFrom<CreateReviewDto> for Review {
    type Error = DomainError;

    fn try_from(dto: CreateReviewDto) -> DomainResult<Self> {
        let text = require("Text", dto.text)?;
        let rating = require("Rating", dto.rating)?;
        let user_id = require("User", dto.user_id)?;
        let place_id = require("Place", dto.place_id)?;
        Self::new(&text, rating, user_id, place_id)
    }
}

impl Entity for Review {
    type Id = ReviewId;
    const KIND: &'static str = "Review";

    fn id(&self) -> &ReviewId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
