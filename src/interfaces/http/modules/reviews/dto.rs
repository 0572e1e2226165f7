//! Review request bodies

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{CreateReviewDto, DomainError, UpdateReviewDto};

/// Create review request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub text: Option<String>,
    /// Integer from 1 to 5
    pub rating: Option<i64>,
    /// Author
    pub user_id: Option<String>,
    pub place_id: Option<String>,
}

impl TryFrom<CreateReviewRequest> for CreateReviewDto {
    type Error = DomainError;

    fn try_from(req: CreateReviewRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: req.user_id.as_deref().map(str::parse).transpose()?,
            place_id: req.place_id.as_deref().map(str::parse).transpose()?,
            text: req.text,
            rating: req.rating,
        })
    }
}

/// Update review request. Author and place cannot change.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    pub id: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i64>,
}

impl From<UpdateReviewRequest> for UpdateReviewDto {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            text: req.text,
            rating: req.rating,
        }
    }
}
