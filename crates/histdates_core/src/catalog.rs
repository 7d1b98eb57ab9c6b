//! Page catalog loading and validation.
//!
//! # Responsibility
//! - Load the static page list from the built-in data, a JSON string or a file.
//! - Reject catalogs that would break point/page identity invariants.
//!
//! # Invariants
//! - A catalog is never empty.
//! - Page ids are exactly `1..=N` in declaration order.
//! - Every page has `year_to >= year_from`.

use crate::model::page::{Page, PageId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const BUILTIN_PAGES_JSON: &str = include_str!("../data/pages.json");

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading and validation errors.
#[derive(Debug)]
pub enum CatalogError {
    Empty,
    NonContiguousId {
        expected: PageId,
        found: PageId,
    },
    InvalidYearRange {
        id: PageId,
        year_from: i32,
        year_to: i32,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "page catalog must contain at least one page"),
            Self::NonContiguousId { expected, found } => {
                write!(f, "page id {found} is out of order; expected {expected}")
            }
            Self::InvalidYearRange {
                id,
                year_from,
                year_to,
            } => write!(
                f,
                "page {id}: year_to ({year_to}) must be >= year_from ({year_from})"
            ),
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid catalog JSON: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Empty | Self::NonContiguousId { .. } | Self::InvalidYearRange { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Validated, immutable list of pages for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCatalog {
    pages: Vec<Page>,
}

impl PageCatalog {
    /// Builds a catalog after validating identity and year-range invariants.
    pub fn from_pages(pages: Vec<Page>) -> CatalogResult<Self> {
        validate_pages(&pages)?;
        Ok(Self { pages })
    }

    /// Parses a JSON array of pages.
    pub fn from_json_str(raw: &str) -> CatalogResult<Self> {
        let pages: Vec<Page> = serde_json::from_str(raw)?;
        Self::from_pages(pages)
    }

    /// Reads and parses a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "event=catalog_load module=catalog status=ok source=file pages={}",
            catalog.len()
        );
        Ok(catalog)
    }

    /// Catalog embedded in the crate.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json_str(BUILTIN_PAGES_JSON)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Looks up a page by id.
    pub fn page(&self, id: PageId) -> Option<&Page> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages as a page id (the id of the last page).
    pub fn last_id(&self) -> PageId {
        PageId::try_from(self.pages.len()).unwrap_or(PageId::MAX)
    }
}

fn validate_pages(pages: &[Page]) -> CatalogResult<()> {
    if pages.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (expected, page) in (1..).zip(pages) {
        if page.id != expected {
            return Err(CatalogError::NonContiguousId {
                expected,
                found: page.id,
            });
        }
        if !page.has_ordered_years() {
            return Err(CatalogError::InvalidYearRange {
                id: page.id,
                year_from: page.year_from,
                year_to: page.year_to,
            });
        }
    }
    Ok(())
}
