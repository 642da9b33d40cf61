//! Cover resolution — looks up a cover image URL for a book, degrading to a
//! fixed placeholder on any failure.
//!
//! Two lookup strategies exist and the choice is a runtime capability:
//! - `search`: Google Books title+author search, picking the largest image
//!   variant offered.
//! - `isbn`: deterministic Open Library cover URL checked with a HEAD request
//!   (no body fetch).
//!
//! Both collapse every internal error to the placeholder at this component's
//! boundary — a cover failure must never cost the batch a day.

use async_trait::async_trait;
use clap::ValueEnum;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::models::BookContent;

/// Fallback image shown when no cover can be resolved.
pub const PLACEHOLDER_COVER_URL: &str =
    "https://placehold.co/600x900/EEE/31343C?text=Classic+Literature";

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const OPEN_LIBRARY_COVERS_URL: &str = "https://covers.openlibrary.org/b/isbn";

/// Short per-call bound so a slow lookup cannot stall the batch.
const LOOKUP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Which external lookup the resolver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CoverStrategy {
    /// Title + author search against Google Books.
    #[default]
    Search,
    /// Deterministic Open Library URL derived from the record's ISBN.
    Isbn,
}

/// Resolves a cover image URL for a book. Infallible by signature: the
/// returned string is either a real cover URL or the placeholder, never empty.
#[async_trait]
pub trait CoverResolver: Send + Sync {
    async fn resolve(&self, book: &BookContent) -> String;
}

#[derive(Debug, Error)]
enum CoverError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no cover image in search results")]
    NoImage,

    #[error("record carries no ISBN")]
    NoIsbn,

    #[error("cover not found (status {0})")]
    NotFound(u16),
}

// ── Google Books response shape (only the fields we read) ──────────────────

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageLinks {
    #[serde(rename = "extraLarge")]
    extra_large: Option<String>,
    large: Option<String>,
    medium: Option<String>,
    thumbnail: Option<String>,
}

impl ImageLinks {
    /// Largest available variant wins.
    fn best(&self) -> Option<&str> {
        self.extra_large
            .as_deref()
            .or(self.large.as_deref())
            .or(self.medium.as_deref())
            .or(self.thumbnail.as_deref())
    }
}

/// Production resolver backed by the configured lookup service.
pub struct HttpCoverResolver {
    client: Client,
    strategy: CoverStrategy,
}

impl HttpCoverResolver {
    pub fn new(strategy: CoverStrategy) -> Self {
        Self {
            client: Client::builder()
                .timeout(LOOKUP_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            strategy,
        }
    }

    async fn search_cover(&self, book: &BookContent) -> Result<String, CoverError> {
        let query = format!("{} {}", book.title, book.author);

        let response: VolumesResponse = self
            .client
            .get(GOOGLE_BOOKS_URL)
            .query(&[("q", query.as_str()), ("maxResults", "1")])
            .send()
            .await?
            .json()
            .await?;

        response
            .items
            .first()
            .and_then(|v| v.volume_info.image_links.as_ref())
            .and_then(|links| links.best())
            .map(upgrade_to_https)
            .ok_or(CoverError::NoImage)
    }

    async fn isbn_cover(&self, book: &BookContent) -> Result<String, CoverError> {
        let isbn = book
            .isbn
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(CoverError::NoIsbn)?;

        let url = isbn_cover_url(isbn);

        // Existence check only — no body fetch
        let status = self.client.head(&url).send().await?.status();
        if status.is_success() {
            Ok(url)
        } else {
            Err(CoverError::NotFound(status.as_u16()))
        }
    }
}

#[async_trait]
impl CoverResolver for HttpCoverResolver {
    async fn resolve(&self, book: &BookContent) -> String {
        let result = match self.strategy {
            CoverStrategy::Search => self.search_cover(book).await,
            CoverStrategy::Isbn => self.isbn_cover(book).await,
        };

        match result {
            Ok(url) => url,
            Err(e) => {
                warn!("Cover lookup failed for '{}': {e}", book.title);
                PLACEHOLDER_COVER_URL.to_string()
            }
        }
    }
}

/// Deterministic Open Library cover URL for an ISBN. `default=false` makes
/// the service report 404 instead of serving its own fallback image.
fn isbn_cover_url(isbn: &str) -> String {
    format!("{OPEN_LIBRARY_COVERS_URL}/{isbn}-L.jpg?default=false")
}

/// Google Books serves image links over plain http; upgrade to avoid
/// mixed-content warnings in consuming pages.
fn upgrade_to_https(url: &str) -> String {
    url.replacen("http://", "https://", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(
        extra_large: Option<&str>,
        large: Option<&str>,
        medium: Option<&str>,
        thumbnail: Option<&str>,
    ) -> ImageLinks {
        ImageLinks {
            extra_large: extra_large.map(String::from),
            large: large.map(String::from),
            medium: medium.map(String::from),
            thumbnail: thumbnail.map(String::from),
        }
    }

    #[test]
    fn test_best_prefers_largest_variant() {
        let all = links(Some("xl"), Some("l"), Some("m"), Some("t"));
        assert_eq!(all.best(), Some("xl"));

        let no_xl = links(None, Some("l"), Some("m"), Some("t"));
        assert_eq!(no_xl.best(), Some("l"));

        let only_thumb = links(None, None, None, Some("t"));
        assert_eq!(only_thumb.best(), Some("t"));

        assert_eq!(links(None, None, None, None).best(), None);
    }

    #[test]
    fn test_upgrade_to_https() {
        assert_eq!(
            upgrade_to_https("http://books.google.com/c.jpg"),
            "https://books.google.com/c.jpg"
        );
        // Already-secure URLs pass through unchanged
        assert_eq!(
            upgrade_to_https("https://books.google.com/c.jpg"),
            "https://books.google.com/c.jpg"
        );
    }

    #[test]
    fn test_isbn_cover_url_format() {
        assert_eq!(
            isbn_cover_url("9780441013593"),
            "https://covers.openlibrary.org/b/isbn/9780441013593-L.jpg?default=false"
        );
    }

    #[test]
    fn test_volumes_response_tolerates_missing_items() {
        let parsed: VolumesResponse = serde_json::from_str(r#"{"kind":"books#volumes"}"#).unwrap();
        assert!(parsed.items.is_empty());
    }

    #[tokio::test]
    async fn test_isbn_strategy_without_isbn_degrades_to_placeholder() {
        // NoIsbn short-circuits before any network call is made
        let resolver = HttpCoverResolver::new(CoverStrategy::Isbn);
        let book = BookContent {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: "1965".to_string(),
            genre: "SF".to_string(),
            country: "US".to_string(),
            isbn: None,
            plot: String::new(),
            buzz: String::new(),
            matters: String::new(),
            taste: String::new(),
        };
        assert_eq!(resolver.resolve(&book).await, PLACEHOLDER_COVER_URL);
    }
}
