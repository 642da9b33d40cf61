//! HTML rendering — literal `{{FIELD}}` substitution into a caller-supplied
//! template.
//!
//! Substitution is verbatim: generated text is inserted with NO escaping,
//! mirroring the JSON output which also carries the raw strings. Placeholders
//! are the record's field names uppercased (`{{TITLE}}`, `{{COVER_URL}}`,
//! `{{DATE_DISPLAY}}`, ...). Placeholders with no matching field are left
//! untouched rather than blanked, so template typos stay visible in output.

use crate::models::BookRecord;

/// Renders a record into a template by replacing `{{FIELD}}` placeholders.
pub fn render_template(template: &str, record: &BookRecord) -> String {
    let mut out = template.to_string();

    // The record serializes flat, so every content and enrichment field shows
    // up as a top-level string entry here.
    if let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(record) {
        for (key, value) in fields {
            if let serde_json::Value::String(text) = value {
                let placeholder = format!("{{{{{}}}}}", key.to_uppercase());
                out = out.replace(&placeholder, &text);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookContent;

    fn sample_record() -> BookRecord {
        BookRecord {
            book: BookContent {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                year: "1965".to_string(),
                genre: "Science Fiction".to_string(),
                country: "United States".to_string(),
                isbn: None,
                plot: "Sand & spice".to_string(),
                buzz: "Hugo winner".to_string(),
                matters: "Still current".to_string(),
                taste: "A beginning is the time...".to_string(),
            },
            cover_url: "https://example.com/c.jpg".to_string(),
            buy_link: "https://example.com/buy?tag=t-20".to_string(),
            date_display: "January 01, 2024".to_string(),
            date_id: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_substitutes_content_and_enrichment_fields() {
        let html = render_template(
            "<h1>{{TITLE}}</h1><img src=\"{{COVER_URL}}\"><p>{{DATE_DISPLAY}}</p>",
            &sample_record(),
        );
        assert_eq!(
            html,
            "<h1>Dune</h1><img src=\"https://example.com/c.jpg\"><p>January 01, 2024</p>"
        );
    }

    #[test]
    fn test_substitution_is_verbatim_not_escaped() {
        let html = render_template("<p>{{PLOT}}</p>", &sample_record());
        // '&' passes through unescaped
        assert_eq!(html, "<p>Sand & spice</p>");
    }

    #[test]
    fn test_unknown_placeholders_left_untouched() {
        let html = render_template("{{TITLE}} {{NOT_A_FIELD}}", &sample_record());
        assert_eq!(html, "Dune {{NOT_A_FIELD}}");
    }

    #[test]
    fn test_repeated_placeholder_replaced_everywhere() {
        let html = render_template("{{TITLE}} / {{TITLE}}", &sample_record());
        assert_eq!(html, "Dune / Dune");
    }
}
