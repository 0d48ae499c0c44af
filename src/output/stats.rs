//! Statistics over a finished batch
//!
//! This module provides functionality for summarizing and displaying the
//! outcome of a harvest run.

use crate::crawler::DomainResult;
use std::collections::BTreeSet;

/// Batch statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStatistics {
    /// Number of result rows (one per input domain, duplicates included)
    pub total_domains: usize,

    /// Rows with at least one address
    pub domains_with_emails: usize,

    /// Distinct addresses across the whole batch
    pub unique_emails: usize,

    /// Rows that ended with no address, in input order
    pub empty_domains: Vec<String>,
}

impl BatchStatistics {
    /// Computes statistics from a result table
    pub fn from_results(results: &[DomainResult]) -> Self {
        let mut unique = BTreeSet::new();
        let mut empty_domains = Vec::new();

        for result in results {
            if result.emails.is_empty() {
                empty_domains.push(result.domain.clone());
            }
            unique.extend(result.addresses());
        }

        Self {
            total_domains: results.len(),
            domains_with_emails: results.len() - empty_domains.len(),
            unique_emails: unique.len(),
            empty_domains,
        }
    }

    /// Share of domains that yielded at least one address, in percent
    pub fn hit_rate(&self) -> f64 {
        if self.total_domains == 0 {
            0.0
        } else {
            (self.domains_with_emails as f64 / self.total_domains as f64) * 100.0
        }
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &BatchStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Overview:");
    println!("  Domains processed: {}", stats.total_domains);
    println!(
        "  Domains with emails: {} ({:.1}%)",
        stats.domains_with_emails,
        stats.hit_rate()
    );
    println!("  Unique emails: {}", stats.unique_emails);

    if !stats.empty_domains.is_empty() {
        println!("\nNo emails found for:");
        for domain in &stats.empty_domains {
            println!("  - {}", domain);
        }
    }
}
