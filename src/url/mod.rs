//! URL handling module for Mail-Harvest
//!
//! This module turns raw domain inputs into base URLs, renders the domain
//! shown in reports, and derives the candidate page set crawled per domain.

mod candidates;
mod domain;
mod normalize;

// Re-export main functions
pub use candidates::{candidate_urls, COMMON_PATHS};
pub use domain::display_domain;
pub use normalize::normalize_base_url;
