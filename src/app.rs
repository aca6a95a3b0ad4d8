//! State behind the rating form: the draft being edited, the latest
//! accepted ratings, the last stats lookup, and the message the user should
//! currently see.

use std::fmt;

use tracing::warn;

use crate::{
    errors::ApiError,
    objects::{Rating, SeriesStats},
    SeriesRateClient,
};

/// A not-yet-submitted rating, held exactly as typed.
///
/// The rating stays raw text so the field can hold intermediate states like
/// "" or "4." while the user edits; it is parsed at submission time only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub username: String,
    pub series_name: String,
    pub rating: String,
}

/// What the user should currently be told
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Notice {
    /// The draft failed the pre-submission check
    MissingFields,
    /// The backend refused the submission (http 422)
    RatingRejected,
    /// Submission failed for any other reason
    SubmitFailed,
    /// A stats lookup was requested with an empty series name
    SeriesNameMissing,
    /// The recent list could not be refreshed; the last known one is shown
    RecentUnavailable,
    /// Stats could not be fetched; the last known result is shown
    StatsUnavailable,
}

impl Notice {
    /// Whether the message should interrupt the user (a prompt or alert) or
    /// render inline next to the stale data it refers to
    pub fn blocking(&self) -> bool {
        !matches!(self, Notice::RecentUnavailable | Notice::StatsUnavailable)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Notice::MissingFields => {
                "Please fill in all fields. Rating must be a number between 0 and 5."
            }
            Notice::RatingRejected => {
                "Invalid data. Make sure your rating is a number between 0 and 5."
            }
            Notice::SubmitFailed => {
                "Something went wrong while submitting your rating. Please try again."
            }
            Notice::SeriesNameMissing => "Please enter a series name",
            Notice::RecentUnavailable => "Couldn't load the latest ratings.",
            Notice::StatsUnavailable => "Couldn't load stats for that series.",
        };

        f.write_str(msg)
    }
}

/// Owns everything the rating form displays and mutates.
///
/// Every operation takes `&mut self`, so state changes land in the order
/// the operations complete.
pub struct App {
    client: SeriesRateClient,
    pub draft: Draft,
    pub series_query: String,
    pub recent: Vec<Rating>,
    pub stats: Option<SeriesStats>,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(client: SeriesRateClient) -> Self {
        Self {
            client,
            draft: Draft::default(),
            series_query: String::new(),
            recent: Vec::new(),
            stats: None,
            notice: None,
        }
    }

    /// Load the initial recent-ratings list. Call once after construction.
    pub async fn init(&mut self) {
        self.refresh_recent().await;
    }

    pub fn set_username(&mut self, username: &str) {
        self.draft.username = username.to_owned();
    }

    pub fn set_series_name(&mut self, series_name: &str) {
        self.draft.series_name = series_name.to_owned();
    }

    pub fn set_rating(&mut self, rating: &str) {
        self.draft.rating = rating.to_owned();
    }

    pub fn set_series_query(&mut self, query: &str) {
        self.series_query = query.to_owned();
    }

    /// Validate the draft and submit it. On acceptance the draft resets to
    /// empty and the recent list is refreshed; otherwise the draft is kept
    /// so the user can correct it. Nothing is sent while the draft fails
    /// the local checks.
    pub async fn submit(&mut self) {
        let Some(rating) = parse_rating(&self.draft.rating) else {
            self.notice = Some(Notice::MissingFields);
            return;
        };

        if self.draft.username.is_empty() || self.draft.series_name.is_empty() {
            self.notice = Some(Notice::MissingFields);
            return;
        }

        let result = self
            .client
            .rate()
            .post()
            .username(&self.draft.username)
            .series_name(&self.draft.series_name)
            .rating(rating)
            .send()
            .await;

        match result {
            Ok(()) => {
                self.draft = Draft::default();
                self.notice = None;
                self.refresh_recent().await;
            }
            Err(ApiError::Rejected(_)) => {
                self.notice = Some(Notice::RatingRejected);
            }
            Err(err) => {
                warn!(%err, "rating submission failed");
                self.notice = Some(Notice::SubmitFailed);
            }
        }
    }

    /// Replace the recent list with the backend's latest. On failure the
    /// last known list stays and an inline notice is set.
    pub async fn refresh_recent(&mut self) {
        match self.client.recent().get().send().await {
            Ok(ratings) => {
                self.recent = ratings.0;

                if self.notice == Some(Notice::RecentUnavailable) {
                    self.notice = None;
                }
            }
            Err(err) => {
                warn!(%err, "recent ratings refresh failed");
                self.notice = Some(Notice::RecentUnavailable);
            }
        }
    }

    /// Look up stats for the series the user typed. On failure the last
    /// result stays and an inline notice is set.
    pub async fn fetch_stats(&mut self) {
        if self.series_query.trim().is_empty() {
            self.notice = Some(Notice::SeriesNameMissing);
            return;
        }

        let result = self
            .client
            .series()
            .stats()
            .name(&self.series_query)
            .send()
            .await;

        match result {
            Ok(stats) => {
                self.stats = Some(stats);
                self.notice = None;
            }
            Err(err) => {
                warn!(%err, "series stats fetch failed");
                self.notice = Some(Notice::StatsUnavailable);
            }
        }
    }
}

/// A rating is submittable iff its text parses to a finite number from 0 to
/// 5 inclusive
fn parse_rating(raw: &str) -> Option<f64> {
    let rating: f64 = raw.trim().parse().ok()?;

    (rating.is_finite() && (0.0..=5.0).contains(&rating)).then_some(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_parse_accepts_finite_in_range() {
        for ok in ["0", "3", "4.5", "5", " 2 "] {
            assert!(parse_rating(ok).is_some(), "{ok:?} should parse");
        }
    }

    #[test]
    fn rating_parse_rejects_everything_else() {
        for bad in ["", "abc", "NaN", "inf", "-inf", "-1", "5.1", "1e999"] {
            assert!(parse_rating(bad).is_none(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn field_updates_leave_other_fields_untouched() {
        let mut app = App::new(SeriesRateClient::new("http://localhost:8000"));

        app.set_username("alice");
        app.set_series_name("Bleach");
        app.set_rating("3");
        app.set_rating("4");

        assert_eq!(app.draft.username, "alice");
        assert_eq!(app.draft.series_name, "Bleach");
        assert_eq!(app.draft.rating, "4");
    }

    #[test]
    fn read_failures_are_inline_the_rest_block() {
        assert!(Notice::MissingFields.blocking());
        assert!(Notice::RatingRejected.blocking());
        assert!(Notice::SubmitFailed.blocking());
        assert!(Notice::SeriesNameMissing.blocking());
        assert!(!Notice::RecentUnavailable.blocking());
        assert!(!Notice::StatsUnavailable.blocking());
    }

    #[test]
    fn notices_render_the_form_messages() {
        assert_eq!(
            Notice::MissingFields.to_string(),
            "Please fill in all fields. Rating must be a number between 0 and 5."
        );
        assert_eq!(Notice::SeriesNameMissing.to_string(), "Please enter a series name");
    }
}
