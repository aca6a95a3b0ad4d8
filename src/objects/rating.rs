use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// Body of a rating submission.
///
/// The rating is sent as a plain JSON number; the backend enforces that it
/// is an integer from 0 to 5 and answers 422 otherwise.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RatingSubmission {
    pub username: String,
    pub series_name: String,
    pub rating: f64,
}

/// A rating previously accepted by the backend
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Rating {
    /// Who submitted the rating.
    pub username: String,
    /// The series that was rated.
    pub series_name: String,
    /// The score given, from 0 to 5.
    pub rating: u8,
}

/// The latest accepted ratings, most recent first. Order and length come
/// from the backend verbatim.
#[derive(Deserialize, Clone, Debug)]
#[serde(transparent)]
pub struct RecentRatings(pub Vec<Rating>);

impl Deref for RecentRatings {
    type Target = Vec<Rating>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RecentRatings {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
