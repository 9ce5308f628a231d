pub mod driver;
pub mod email;
pub mod error;
pub mod extract;
pub mod profile;
pub mod resolve;

pub use driver::{HttpPageDriver, PageDriver};
pub use email::select_email;
pub use error::{DriverError, ScrapeError};
pub use extract::SellerInfoExtractor;
pub use profile::{Pacing, SiteProfile};
pub use resolve::BrandResolver;
