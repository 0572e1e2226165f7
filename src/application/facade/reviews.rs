//! Review use-cases

use tracing::{info, warn};

use super::HbnbFacade;
use crate::domain::{
    CreateReviewDto, DomainError, DomainResult, Entity, PlaceId, Review, ReviewId,
    UpdateReviewDto,
};

impl HbnbFacade {
    /// Post a review. Author and place must exist, and the author may not
    /// own the place.
    pub fn create_review(&self, dto: CreateReviewDto) -> DomainResult<Review> {
        let review = Review::try_from(dto)?;

        let _guard = self.write_guard();
        self.require_user(review.user_id(), "user_id")?;
        let place = self.require_place(review.place_id(), "place_id")?;
        if place.is_owned_by(review.user_id()) {
            warn!(
                user_id = %review.user_id(),
                place_id = %review.place_id(),
                "Rejected review of own place"
            );
            return Err(DomainError::Forbidden(
                "You cannot review your own place".into(),
            ));
        }
        self.repos.reviews().add(review.clone());

        info!(review_id = %review.id(), place_id = %review.place_id(), "Review created");
        Ok(review)
    }

    pub fn get_review(&self, id: &ReviewId) -> DomainResult<Review> {
        self.repos
            .reviews()
            .get(id)
            .ok_or_else(|| DomainError::not_found(Review::KIND, id))
    }

    pub fn get_all_reviews(&self) -> Vec<Review> {
        self.repos.reviews().get_all()
    }

    /// Reviews of an existing place, in storage order.
    pub fn get_reviews_by_place(&self, place_id: &PlaceId) -> DomainResult<Vec<Review>> {
        self.require_place(place_id, "id")?;
        Ok(self
            .repos
            .reviews()
            .find_all(&|review: &Review| review.place_id() == place_id))
    }

    pub fn update_review(&self, id: &ReviewId, dto: UpdateReviewDto) -> DomainResult<Review> {
        let _guard = self.write_guard();
        let current = self.get_review(id)?;

        let updated = current.apply(&dto)?;
        self.repos.reviews().add(updated.clone());

        info!(review_id = %id, "Review updated");
        Ok(updated)
    }

    /// Remove a review, returning it as confirmation.
    pub fn delete_review(&self, id: &ReviewId) -> DomainResult<Review> {
        let _guard = self.write_guard();
        let removed = self
            .repos
            .reviews()
            .delete(id)
            .ok_or_else(|| DomainError::not_found(Review::KIND, id))?;

        info!(review_id = %id, "Review deleted");
        Ok(removed)
    }
}
