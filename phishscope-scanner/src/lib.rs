pub mod error;
pub mod fetcher;
pub mod inspect;
pub mod result;

pub use error::ScanError;
pub use fetcher::{BROWSER_USER_AGENT, DEFAULT_TIMEOUT_SECS, MAX_BODY_BYTES, PageFetcher};
pub use inspect::{PageInspector, authority};
pub use result::{ContentFeatures, ContentReport};
