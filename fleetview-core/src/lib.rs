pub mod api;
pub mod config;
pub mod error;
pub mod pagination;
pub mod reveal;
pub mod screen;

pub use api::{Acquisition, AcquisitionList, AcquisitionsClient, column_names};
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_ITEMS_PER_PAGE, DEFAULT_WINDOW_SIZE, ScreenConfig,
};
pub use error::FleetError;
pub use pagination::{PageWindow, PaginatedView, compute_window, page_slice, total_pages};
pub use reveal::{REVEAL_DURATION, REVEAL_START_OFFSET, Reveal};
pub use screen::{AcquisitionsScreen, LoadState, PageModel, ScreenView};

/// Fetch the full acquisitions list once, with a client built from `config`
pub async fn fetch_acquisitions(config: &ClientConfig) -> Result<AcquisitionList, FleetError> {
    let client = AcquisitionsClient::new(config)?;
    client.fetch_acquisitions().await
}
