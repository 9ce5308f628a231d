//! The page-automation capability surface.
//!
//! `BrandResolver` and `SellerInfoExtractor` depend only on this narrow
//! contract, never on a concrete automation tool, so the backend can be a
//! headless browser or the bundled HTTP+HTML implementation (at reduced
//! fidelity for script-rendered panels).

mod http;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DriverError;

pub use http::HttpPageDriver;

/// Capability surface over one live page context.
///
/// The page context is a single mutable resource: callers must never run two
/// operations against the same driver concurrently. Navigation replaces the
/// current document; the query methods are synchronous reads of it.
#[async_trait]
pub trait PageDriver {
    /// Load `url` and wait for the network to go idle.
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError>;

    /// Fixed settle pause for post-load rendering.
    async fn wait_settled(&mut self, delay: Duration) -> Result<(), DriverError>;

    /// Scroll to the page's vertical midpoint to trigger lazy-loaded content.
    async fn scroll_to_midpoint(&mut self) -> Result<(), DriverError>;

    /// Href of the first anchor matched by `selectors`, tried in priority
    /// order, absolutized against the current page URL.
    fn find_link(&self, selectors: &[String]) -> Result<Option<String>, DriverError>;

    /// Activate the first element matched by `selectors` (in selector order,
    /// then DOM order) whose text contains any of `tokens`. Returns whether
    /// a control was found and activated.
    fn activate(&mut self, selectors: &[String], tokens: &[String])
        -> Result<bool, DriverError>;

    /// All term-definition pairs (`dt` label followed by its `dd` value
    /// sibling) on the current page, in DOM order, trimmed.
    fn definition_pairs(&self) -> Result<Vec<(String, String)>, DriverError>;

    /// Full rendered text of the current page.
    fn body_text(&self) -> Result<String, DriverError>;
}
