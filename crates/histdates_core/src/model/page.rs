//! Page and article reference data.
//!
//! # Responsibility
//! - Define the immutable records supplied by the page catalog.
//!
//! # Invariants
//! - `year_to` should not be earlier than `year_from`.
//! - Article order is display order inside the carousel.

use serde::{Deserialize, Serialize};

/// Identifier of a page and of its point on the circle (`1..=N`).
///
/// Kept as a type alias so signatures read in domain terms.
pub type PageId = u32;

/// One historical entry shown as a carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Year label, kept as text so ranges like `1961-1962` render verbatim.
    pub year: String,
    /// Descriptive body text.
    pub text: String,
}

impl Article {
    pub fn new(year: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            text: text.into(),
        }
    }
}

/// One selectable unit of content bound to a year range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    /// Start of the range shown by the left year counter. May be negative (BCE).
    pub year_from: i32,
    /// End of the range shown by the right year counter.
    pub year_to: i32,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Page {
    pub fn new(id: PageId, year_from: i32, year_to: i32, articles: Vec<Article>) -> Self {
        Self {
            id,
            year_from,
            year_to,
            articles,
        }
    }

    /// Returns whether the year range is ordered.
    pub fn has_ordered_years(&self) -> bool {
        self.year_to >= self.year_from
    }
}
