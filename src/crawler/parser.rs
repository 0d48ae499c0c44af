//! HTML parser for extracting email addresses
//!
//! This module handles parsing HTML content to extract:
//! - Addresses from `mailto:` links
//! - Addresses appearing anywhere in the visible text
//!
//! Parsing never fails: html5ever recovers from malformed markup, so broken
//! input degrades to a partial or empty result.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node, Selector};
use std::collections::BTreeSet;

/// An ordered, de-duplicated set of email addresses
pub type EmailSet = BTreeSet<String>;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Unanchored pattern used to scan visible text
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Pattern anchored at the start, used to validate `mailto:` targets
static MAILTO_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:{})", EMAIL_PATTERN)).expect("email pattern is valid"));

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("link selector is valid"));

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Valid addresses taken from `mailto:` links
    pub mailto_emails: EmailSet,

    /// Addresses found in the visible text
    pub text_emails: EmailSet,
}

impl ParsedPage {
    /// Union of both extraction passes
    pub fn into_emails(self) -> EmailSet {
        let mut emails = self.mailto_emails;
        emails.extend(self.text_emails);
        emails
    }
}

/// Parses HTML content and runs both extraction passes
///
/// # Mailto Rules
///
/// - Only `<a>` elements with an `href` starting with `mailto:` are considered
/// - The prefix is stripped and everything from the first `?` is dropped
/// - The remainder is trimmed and must start with an email-shaped address
///
/// # Text Rules
///
/// - Text nodes are joined with single spaces, skipping `script`, `style`
///   and `template` content
/// - Every non-overlapping email-shaped substring is collected
///
/// # Example
///
/// ```
/// use mail_harvest::crawler::parse_html;
///
/// let html = r#"<a href="mailto:jane@example.com?subject=Hi">Mail</a> or ops@example.org"#;
/// let parsed = parse_html(html);
/// assert!(parsed.mailto_emails.contains("jane@example.com"));
/// assert!(parsed.text_emails.contains("ops@example.org"));
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    if html.trim().is_empty() {
        return ParsedPage::default();
    }

    let document = Html::parse_document(html);

    ParsedPage {
        mailto_emails: extract_mailto_emails(&document),
        text_emails: extract_text_emails(&document),
    }
}

/// Extracts every email address found in an HTML document
///
/// Pure function of its input: the result is the union of the `mailto:`
/// pass and the visible-text pass. Empty or unparsable input yields an
/// empty set.
pub fn extract_emails(html: &str) -> EmailSet {
    parse_html(html).into_emails()
}

fn extract_mailto_emails(document: &Html) -> EmailSet {
    document
        .select(&LINK_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(mailto_address)
        .collect()
}

/// Returns the address carried by a `mailto:` href, if it looks valid
fn mailto_address(href: &str) -> Option<String> {
    let target = href.strip_prefix("mailto:")?;
    let address = target.split('?').next().unwrap_or_default().trim();

    if MAILTO_REGEX.is_match(address) {
        Some(address.to_string())
    } else {
        None
    }
}

fn extract_text_emails(document: &Html) -> EmailSet {
    let text = visible_text(document);

    EMAIL_REGEX
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Joins the document's rendered text nodes with single spaces
fn visible_text(document: &Html) -> String {
    let mut pieces: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });

        if !hidden {
            pieces.push(text);
        }
    }

    pieces.join(" ")
}
