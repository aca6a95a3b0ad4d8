use serde::Deserialize;

/// Aggregate rating stats for one series
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SeriesStats {
    /// The name the stats were looked up under.
    pub series_name: String,
    /// How many ratings the series has received.
    pub num_ratings: u64,
    /// Mean score, rounded to two decimals by the backend. Null while the
    /// series has no ratings.
    pub avg_rating: Option<f64>,
}

impl SeriesStats {
    /// The average as the form displays it: two decimals, or "N/A" for a
    /// series nobody has rated yet
    pub fn average_display(&self) -> String {
        match self.avg_rating {
            Some(avg) => format!("{avg:.2}"),
            None => "N/A".to_owned(),
        }
    }
}
