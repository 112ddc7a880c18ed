//! Customer review management.

use chrono::Utc;

use ratannam_core::ReviewId;

use super::{ContentStore, find_record, remove_record, update_record};
use crate::models::{NewReview, Record, Review, ReviewPatch};

impl ContentStore {
    /// Enabled reviews in insertion order.
    #[must_use]
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.iter().filter(|r| r.is_enabled()).cloned().collect()
    }

    /// Look up a review by ID, enabled or not.
    #[must_use]
    pub fn review(&self, id: &ReviewId) -> Option<Review> {
        find_record(&self.reviews, id.as_str()).cloned()
    }

    /// Create a review with a fresh ID.
    pub fn add_review(&mut self, input: NewReview) -> Review {
        let existing = &self.reviews;
        let id = self
            .ids
            .reviews
            .next_id(|candidate| existing.iter().any(|r| r.id.as_str() == candidate));
        let review = input.into_review(ReviewId::new(id), Utc::now());

        tracing::info!(id = %review.id, rating = review.rating, "Review added");
        self.reviews.push(review.clone());
        review
    }

    /// Merge `patch` onto a review. `None` if no review has this ID.
    pub fn update_review(&mut self, id: &ReviewId, patch: ReviewPatch) -> Option<Review> {
        let updated = update_record(&mut self.reviews, id.as_str(), patch);
        if updated.is_some() {
            tracing::info!(id = %id, "Review updated");
        }
        updated
    }

    /// Delete a review. `false` if no review has this ID.
    pub fn delete_review(&mut self, id: &ReviewId) -> bool {
        let removed = remove_record(&mut self.reviews, id.as_str());
        if removed {
            tracing::info!(id = %id, "Review deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> NewReview {
        NewReview {
            name: "Asha".to_string(),
            comment: "Great".to_string(),
            rating: 5,
            customer_type: "Customer".to_string(),
            enabled: true,
        }
    }

    #[test]
    fn test_add_list_delete_review() {
        let mut store = ContentStore::seeded();

        let review = store.add_review(asha());
        assert!(store.reviews().contains(&review));

        assert!(store.delete_review(&review.id));
        assert!(!store.reviews().iter().any(|r| r.id == review.id));
        assert!(!store.delete_review(&review.id));
    }

    #[test]
    fn test_new_review_does_not_reuse_seeded_id() {
        let mut store = ContentStore::seeded();
        let review = store.add_review(asha());
        assert_ne!(review.id.as_str(), "review-1");
    }

    #[test]
    fn test_out_of_range_rating_is_stored_as_given() {
        let mut store = ContentStore::default();
        let review = store.add_review(NewReview {
            rating: 9,
            ..asha()
        });
        assert_eq!(review.rating, 9);
    }

    #[test]
    fn test_reviews_keep_insertion_order() {
        let mut store = ContentStore::default();
        let first = store.add_review(asha());
        let second = store.add_review(NewReview {
            name: "Meera".to_string(),
            ..asha()
        });

        let ids: Vec<_> = store.reviews().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_disabled_review_is_hidden_but_still_addressable() {
        let mut store = ContentStore::seeded();
        let id = ReviewId::new("review-1");
        store.update_review(
            &id,
            ReviewPatch {
                enabled: Some(false),
                ..ReviewPatch::default()
            },
        );

        assert!(store.reviews().iter().all(|r| r.id != id));
        let hidden = store.review(&id).expect("disabled review is still stored");
        assert!(!hidden.enabled);
        assert_eq!(hidden.name, "Priya Sharma");
        assert!(store.review(&ReviewId::new("review-404")).is_none());
    }
}
