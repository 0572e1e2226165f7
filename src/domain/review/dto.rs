use crate::domain::entity::{PlaceId, UserId};

/// Input for posting a review.
#[derive(Debug, Clone, Default)]
pub struct CreateReviewDto {
    pub text: Option<String>,
    pub rating: Option<i64>,
    /// Author
    pub user_id: Option<UserId>,
    /// Reviewed place
    pub place_id: Option<PlaceId>,
}

/// Fields to replace on an existing review. Author and place are fixed.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewDto {
    pub text: Option<String>,
    pub rating: Option<i64>,
}
