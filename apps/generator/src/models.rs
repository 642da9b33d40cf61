use serde::{Deserialize, Serialize};

/// Core book fields as returned by the generative service.
///
/// Word-count targets for the narrative fields live in the prompt only —
/// nothing here validates lengths, and unknown keys in the response are
/// ignored rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookContent {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub country: String,
    /// ISBN-13 when the model knows one. Only consulted by the ISBN cover
    /// strategy; absent ISBNs degrade to the placeholder cover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// The elevator pitch — what actually happens.
    pub plot: String,
    /// Social proof: awards, bestseller status, bans, adaptations.
    pub buzz: String,
    /// Why read it today — the feeling of the book, not the accolades.
    pub matters: String,
    /// A verbatim excerpt from the book's own text.
    pub taste: String,
}

/// One day's fully enriched record, as persisted to disk.
///
/// `date_id` is both the record's natural key and its output filename stem.
/// Records are written once and never read back; re-running a date silently
/// overwrites the prior file.
#[derive(Debug, Clone, Serialize)]
pub struct BookRecord {
    #[serde(flatten)]
    pub book: BookContent,
    pub cover_url: String,
    pub buy_link: String,
    /// Long-form date for display fields only, e.g. "January 01, 2024".
    pub date_display: String,
    /// ISO calendar date, e.g. "2024-01-01".
    pub date_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_content() -> BookContent {
        BookContent {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: "1965".to_string(),
            genre: "Science Fiction".to_string(),
            country: "United States".to_string(),
            isbn: None,
            plot: "A noble family takes over a desert planet.".to_string(),
            buzz: "Hugo and Nebula winner.".to_string(),
            matters: "Ecology and power still read as current.".to_string(),
            taste: "A beginning is the time for taking the most delicate care."
                .to_string(),
        }
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = BookRecord {
            book: sample_content(),
            cover_url: "https://example.com/cover.jpg".to_string(),
            buy_link: "https://example.com/buy".to_string(),
            date_display: "January 01, 2024".to_string(),
            date_id: "2024-01-01".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        // Flattened: book fields sit alongside enrichment fields, no nesting
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["date_id"], "2024-01-01");
        assert!(value.get("book").is_none());
        // Absent ISBN is omitted entirely rather than serialized as null
        assert!(value.get("isbn").is_none());
    }

    #[test]
    fn test_content_tolerates_unknown_keys() {
        let parsed: BookContent = serde_json::from_str(
            r#"{
                "title": "Dune", "author": "Frank Herbert", "year": "1965",
                "genre": "SF", "country": "US", "plot": "p", "buzz": "b",
                "matters": "m", "taste": "t", "surprise_field": 42
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.title, "Dune");
        assert!(parsed.isbn.is_none());
    }
}
