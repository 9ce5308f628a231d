use thiserror::Error;

/// Faults raised by a [`crate::driver::PageDriver`] implementation.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid selector \"{selector}\"")]
    InvalidSelector { selector: String },

    #[error("no page loaded")]
    NoPage,
}

/// Per-brand pipeline failures. Each variant's Display string is the
/// stage-identifying error message recorded on the brand's failure record;
/// none of these abort a batch run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Every name variant and selector strategy was exhausted without a
    /// product-page link.
    #[error("no product found")]
    NoProductFound,

    /// The seller-information disclosure control could not be located or
    /// activated on the product page.
    #[error("seller information panel not found")]
    PanelNotFound,

    /// Extraction completed but yielded no usable email address.
    #[error("no email found")]
    NoEmailFound,

    /// Unexpected fault from the page-automation layer.
    #[error(transparent)]
    Driver(#[from] DriverError),
}
