//! Visible page sequences and page math
//!
//! Computes which page numbers a pagination strip shows, compressing long
//! runs behind gap markers, plus the count/request arithmetic around it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pages shown on each side of the current page
pub const DEFAULT_PAGE_RADIUS: u32 = 2;

/// Items per page when the caller does not choose one
pub const DEFAULT_PER_PAGE: u64 = 10;

/// One entry of the visible page sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageToken {
    /// A concrete page number
    Page(u32),
    /// An elided run of pages (rendered as an ellipsis)
    Gap,
}

/// Compute the visible page sequence around the current page
///
/// The sequence always starts at page 1 and ends at `total_pages`, with up
/// to `radius` neighbors on each side of `current_page` in between. Runs
/// elided on either side collapse into a single [`PageToken::Gap`].
///
/// With one page or none there is nothing to navigate, so the sequence is
/// empty. A `current_page` outside `1..=total_pages` clamps to a possibly
/// empty neighbor block with both boundary pages still present.
pub fn visible_pages(current_page: u32, total_pages: u32, radius: u32) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let low = current_page.saturating_sub(radius).max(2);
    let high = current_page.saturating_add(radius).min(total_pages - 1);

    let mut tokens = vec![PageToken::Page(1)];

    if current_page.saturating_sub(radius) > 2 {
        tokens.push(PageToken::Gap);
    }

    for page in low..=high {
        tokens.push(PageToken::Page(page));
    }

    if current_page.saturating_add(radius) < total_pages - 1 {
        tokens.push(PageToken::Gap);
    }

    tokens.push(PageToken::Page(total_pages));
    tokens
}

/// Number of pages needed for `total_items` at `per_page` items each
///
/// Ceiling division; zero items means zero pages. A zero `per_page` is
/// treated as 1 rather than dividing by zero, and counts beyond `u32`
/// saturate.
pub fn page_count(total_items: u64, per_page: u64) -> u32 {
    let per_page = per_page.max(1);
    u32::try_from(total_items.div_ceil(per_page)).unwrap_or(u32::MAX)
}

/// Read the requested page from a query-parameter map
///
/// Missing, unparseable, or zero `page` values fall back to page 1.
pub fn requested_page(params: &BTreeMap<String, String>) -> u32 {
    params
        .get("page")
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}
