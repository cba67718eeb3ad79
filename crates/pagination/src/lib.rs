//! Stockdeck Pagination
//!
//! Page-range computation and link construction for paginated views.
//!
//! # Overview
//!
//! - **Page tokens**: the visible page sequence with gap markers for
//!   elided runs
//! - **Page math**: page counts from item totals and lenient
//!   request-parameter parsing
//! - **Links**: percent-encoded query strings and the assembled
//!   previous/numbered/next navigation model
//!
//! # Usage
//!
//! ```ignore
//! use stockdeck_pagination::{PageNav, PageUrls};
//!
//! let urls = PageUrls::new("/products").with_param("search", "desk chair");
//! if let Some(nav) = PageNav::build(3, 12, &urls) {
//!     // render nav.previous, nav.items, nav.next
//! }
//! ```
//!
//! Every operation is pure and total: out-of-range pages clamp instead of
//! erroring, and single-page collections yield no navigation at all.

pub mod links;
pub mod range;


// Re-exports for convenience
pub use links::{NavItem, NavLink, PageNav, PageUrls};
pub use range::{
    page_count, requested_page, visible_pages, PageToken, DEFAULT_PAGE_RADIUS, DEFAULT_PER_PAGE,
};
