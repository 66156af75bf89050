//! Document link data structure.

use serde::{Deserialize, Serialize};

/// A document link found on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReference {
    /// Absolute URL of the document
    pub url: String,

    /// Anchor text, or the last path segment of `href` when the text is empty
    pub name: String,

    /// The `href` attribute as it appeared on the page
    pub href: String,
}

impl LinkReference {
    /// Build a link, falling back to the last `href` segment for the name.
    pub fn new(url: String, text: &str, href: &str) -> Self {
        let text = text.trim();
        let name = if text.is_empty() {
            href.rsplit('/').next().unwrap_or(href).to_string()
        } else {
            text.to_string()
        };

        Self {
            url,
            name,
            href: href.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_text() {
        let link = LinkReference::new(
            "http://pakirsa.gov.pk/Data/r.pdf".into(),
            "  Daily Report  ",
            "Data/r.pdf",
        );
        assert_eq!(link.name, "Daily Report");
        assert_eq!(link.href, "Data/r.pdf");
    }

    #[test]
    fn test_name_falls_back_to_last_segment() {
        let link = LinkReference::new(
            "http://pakirsa.gov.pk/Data/r.pdf".into(),
            "",
            "/Data/2025/r.pdf",
        );
        assert_eq!(link.name, "r.pdf");
    }
}
