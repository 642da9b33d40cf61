//! Purchase-link construction — pure string assembly, no I/O.

/// Builds an affiliate search URL from a book's title and author.
///
/// Deterministic: the same inputs always yield the same URL. Spaces become
/// `+` so the result reads as a search query; no further encoding is applied
/// because titles and authors are plain prose.
pub fn build_buy_link(title: &str, author: &str, tag: &str) -> String {
    let query = format!("{title} {author}").replace(' ', "+");
    format!("https://www.amazon.com/s?k={query}&tag={tag}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_buy_link_is_deterministic() {
        let a = build_buy_link("Dune", "Frank Herbert", "t-20");
        let b = build_buy_link("Dune", "Frank Herbert", "t-20");
        assert_eq!(a, b);
        assert_eq!(a, "https://www.amazon.com/s?k=Dune+Frank+Herbert&tag=t-20");
    }

    #[test]
    fn test_build_buy_link_contains_tag() {
        let url = build_buy_link("The Master and Margarita", "Mikhail Bulgakov", "shelf-07");
        assert!(url.contains("&tag=shelf-07"));
        assert!(url.contains("The+Master+and+Margarita+Mikhail+Bulgakov"));
    }

    #[test]
    fn test_build_buy_link_single_word_inputs() {
        let url = build_buy_link("Ulysses", "Joyce", "t-20");
        assert_eq!(url, "https://www.amazon.com/s?k=Ulysses+Joyce&tag=t-20");
    }
}
