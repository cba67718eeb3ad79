//! Link construction for paginated views
//!
//! Builds the address of any target page from a base path and the view's
//! query parameters, and assembles the full previous/numbered/next
//! navigation model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::range::{visible_pages, PageToken, DEFAULT_PAGE_RADIUS};

/// Link target builder for a paginated view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrls {
    /// Path the links point at
    base_path: String,
    /// Query parameters carried by every link
    params: BTreeMap<String, String>,
}

impl PageUrls {
    /// Create a builder for a base path
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add or replace a query parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add or replace several query parameters
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in params {
            self.params.insert(key.into(), value.into());
        }
        self
    }

    /// Address of a target page
    ///
    /// Overrides any carried `page` parameter, percent-encodes keys and
    /// values, and serializes parameters in lexicographic key order.
    pub fn url_for(&self, page: u32) -> String {
        let mut params = self.params.clone();
        params.insert("page".to_string(), page.to_string());

        let query = params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.base_path, query)
    }
}

/// Previous or next navigation control
///
/// Disabled controls are still materialized so the view renders them
/// inert instead of dropping them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Target page number
    pub page: u32,
    /// Link address
    pub href: String,
    /// Whether the control is active
    pub enabled: bool,
}

/// A numbered entry or gap in the navigation strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    /// A concrete page with its link target
    Page {
        /// Page number
        number: u32,
        /// Link address
        href: String,
        /// Whether this is the page being viewed
        current: bool,
    },
    /// An elided run of pages
    Gap,
}

/// Fully assembled page navigation model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNav {
    /// Previous-page control
    pub previous: NavLink,
    /// Numbered entries with gaps, in display order
    pub items: Vec<NavItem>,
    /// Next-page control
    pub next: NavLink,
}

impl PageNav {
    /// Build the navigation model at the default radius
    ///
    /// Returns `None` when there is a single page or none; callers skip
    /// rendering entirely in that case.
    pub fn build(current_page: u32, total_pages: u32, urls: &PageUrls) -> Option<Self> {
        Self::build_with_radius(current_page, total_pages, urls, DEFAULT_PAGE_RADIUS)
    }

    /// Build the navigation model with an explicit radius
    pub fn build_with_radius(
        current_page: u32,
        total_pages: u32,
        urls: &PageUrls,
        radius: u32,
    ) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let items = visible_pages(current_page, total_pages, radius)
            .into_iter()
            .map(|token| match token {
                PageToken::Page(number) => NavItem::Page {
                    number,
                    href: urls.url_for(number),
                    current: number == current_page,
                },
                PageToken::Gap => NavItem::Gap,
            })
            .collect();

        let previous_page = current_page.saturating_sub(1);
        let next_page = current_page.saturating_add(1);

        Some(Self {
            previous: NavLink {
                page: previous_page,
                href: urls.url_for(previous_page),
                enabled: current_page > 1,
            },
            items,
            next: NavLink {
                page: next_page,
                href: urls.url_for(next_page),
                enabled: current_page < total_pages,
            },
        })
    }
}
