/// Network adapters for external API calls
mod pdc_client;

pub use pdc_client::{PdcEdgeProvider, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
