// src/services/links.rs

//! Document link discovery.
//!
//! Fetches the report index page and collects anchors whose `href` looks
//! like a document link.

use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{LinkReference, SourceConfig};
use crate::utils::http::Transport;
use crate::utils::resolve_url;

/// Service for discovering report links on the index page.
pub struct LinkDiscovery<'a> {
    transport: &'a dyn Transport,
    source: &'a SourceConfig,
}

impl<'a> LinkDiscovery<'a> {
    pub fn new(transport: &'a dyn Transport, source: &'a SourceConfig) -> Self {
        Self { transport, source }
    }

    /// Fetch the index page and return its document links in page order.
    ///
    /// Transport and parse failures are logged and yield an empty list.
    pub fn discover(&self) -> Vec<LinkReference> {
        log::info!("Scraping index page {}", self.source.index_url);

        match self.try_discover() {
            Ok(links) => {
                log::info!("Found {} document link(s)", links.len());
                links
            }
            Err(e) => {
                log::error!("Error fetching index page: {e}");
                Vec::new()
            }
        }
    }

    fn try_discover(&self) -> Result<Vec<LinkReference>> {
        let html = self.transport.get_text(&self.source.index_url)?;
        let base = Url::parse(&self.source.base_url)?;
        parse_links(&html, &base, &self.source.link_hint)
    }
}

/// Collect `<a href>` elements whose href contains `hint` (case-insensitive).
pub fn parse_links(html: &str, base: &Url, hint: &str) -> Result<Vec<LinkReference>> {
    let document = Html::parse_document(html);
    let anchor_sel = parse_selector("a")?;
    let hint = hint.to_lowercase();

    let links = document
        .select(&anchor_sel)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            if href.is_empty() || !href.to_lowercase().contains(&hint) {
                return None;
            }
            let text: String = anchor.text().map(str::trim).collect();
            Some(LinkReference::new(resolve_url(base, href), &text, href))
        })
        .collect();

    Ok(links)
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
