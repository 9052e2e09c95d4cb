//! Curated listing selectors: popularity charts and trending windows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Time span a trending chart is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    /// Interpret a path segment, falling back to [`TimeWindow::Week`] for
    /// anything other than `day` or `week`.
    ///
    /// # Examples
    /// ```
    /// use media_gateway::domain::TimeWindow;
    ///
    /// assert_eq!(TimeWindow::parse_lenient("day"), TimeWindow::Day);
    /// assert_eq!(TimeWindow::parse_lenient("fortnight"), TimeWindow::Week);
    /// ```
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "day" => Self::Day,
            _ => Self::Week,
        }
    }

    /// Path segment understood by the provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart of movies curated by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieChart {
    Popular,
    TopRated,
}

impl MovieChart {
    /// Provider path segment under `/movie`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
        }
    }
}
