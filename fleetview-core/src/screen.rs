//! State holder for the acquisitions screen.
//!
//! Renderers call [`AcquisitionsScreen::view`] after every state change and
//! forward page-change requests to [`AcquisitionsScreen::set_page`].

use crate::api::{Acquisition, AcquisitionList, AcquisitionsClient};
use crate::config::ScreenConfig;
use crate::error::FleetError;
use crate::pagination::{PageWindow, PaginatedView};
use crate::reveal::Reveal;
use log::{debug, info, warn};
use std::time::Instant;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded {
        view: PaginatedView<Acquisition>,
        fetched_at: OffsetDateTime,
    },
}

/// What the renderer should draw
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView<'a> {
    Loading,
    Failed(&'a str),
    Ready(PageModel<'a>),
}

/// One rendered page plus everything the pagination controls need
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel<'a> {
    pub rows: &'a [Acquisition],
    /// Index of `rows[0]` within the whole collection
    pub first_row_index: usize,
    pub total_items: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub window: PageWindow,
    /// Controls are only drawn when there is more than one page
    pub show_controls: bool,
    pub first_enabled: bool,
    pub last_enabled: bool,
    pub fetched_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct AcquisitionsScreen {
    config: ScreenConfig,
    state: LoadState,
    reveal: Reveal,
    mounted: bool,
}

impl AcquisitionsScreen {
    pub fn new(config: ScreenConfig) -> Self {
        Self {
            config,
            state: LoadState::Loading,
            reveal: Reveal::new(),
            mounted: true,
        }
    }

    pub fn config(&self) -> ScreenConfig {
        self.config
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Tear the screen down; any fetch still in flight is discarded on arrival
    pub fn unmount(&mut self) {
        debug!("acquisitions screen unmounted");
        self.mounted = false;
    }

    /// Fetch the collection and apply the outcome
    pub async fn load(&mut self, client: &AcquisitionsClient) -> bool {
        let result = client.fetch_acquisitions().await;
        self.apply_fetch_result(result, Instant::now())
    }

    /// Apply the single fetch outcome. Returns false when it was discarded.
    ///
    /// Only the first result after mounting is applied; later page state is
    /// owned by the user's page changes.
    pub fn apply_fetch_result(
        &mut self,
        result: Result<AcquisitionList, FleetError>,
        now: Instant,
    ) -> bool {
        match result {
            Ok(list) => self.apply_loaded(list, now),
            Err(e) => self.apply_failed(e.to_string()),
        }
    }

    pub fn apply_loaded(&mut self, list: AcquisitionList, now: Instant) -> bool {
        if !self.accepts_result() {
            return false;
        }
        info!("showing {} acquisitions", list.items.len());
        self.state = LoadState::Loaded {
            view: PaginatedView::new(list.items, self.config.items_per_page),
            fetched_at: list.fetched_at,
        };
        self.reveal.start(now);
        true
    }

    pub fn apply_failed(&mut self, message: impl Into<String>) -> bool {
        if !self.accepts_result() {
            return false;
        }
        let message = message.into();
        warn!("acquisitions fetch failed: {}", message);
        self.state = LoadState::Failed(message);
        true
    }

    fn accepts_result(&self) -> bool {
        if !self.mounted {
            warn!("discarding acquisitions fetch result: screen is unmounted");
            return false;
        }
        if !matches!(self.state, LoadState::Loading) {
            warn!("discarding acquisitions fetch result: already settled");
            return false;
        }
        true
    }

    /// Change the current page; ignored until data has loaded
    pub fn set_page(&mut self, page: usize) -> bool {
        match &mut self.state {
            LoadState::Loaded { view, .. } => {
                let changed = view.set_page(page);
                if changed {
                    debug!("page changed to {}", view.current_page());
                }
                changed
            }
            _ => false,
        }
    }

    pub fn first_page(&mut self) -> bool {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        match &self.state {
            LoadState::Loaded { view, .. } => {
                let last = view.total_pages();
                self.set_page(last)
            }
            _ => false,
        }
    }

    pub fn view(&self) -> ScreenView<'_> {
        match &self.state {
            LoadState::Loading => ScreenView::Loading,
            LoadState::Failed(message) => ScreenView::Failed(message),
            LoadState::Loaded { view, fetched_at } => {
                let current_page = view.current_page();
                let total_pages = view.total_pages();
                ScreenView::Ready(PageModel {
                    rows: view.current_items(),
                    first_row_index: view.current_range().start,
                    total_items: view.total_items(),
                    current_page,
                    total_pages,
                    window: view.window(self.config.window_size),
                    show_controls: total_pages > 1,
                    first_enabled: current_page != 1,
                    last_enabled: current_page != total_pages,
                    fetched_at: *fetched_at,
                })
            }
        }
    }
}

impl Default for AcquisitionsScreen {
    fn default() -> Self {
        Self::new(ScreenConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Mutex, Once};

    /// Records every log event so tests can assert on what reached the backend
    struct CaptureLogger {
        records: Mutex<Vec<(log::Level, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };
    static INSTALL_CAPTURE: Once = Once::new();

    fn captured_logs() -> &'static CaptureLogger {
        INSTALL_CAPTURE.call_once(|| {
            log::set_logger(&CAPTURE).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
        &CAPTURE
    }

    fn was_logged(level: log::Level, needle: &str) -> bool {
        captured_logs()
            .records
            .lock()
            .unwrap()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    fn rows(count: usize) -> AcquisitionList {
        let items = (0..count)
            .map(|i| Acquisition::new(json!({ "NR_PLACA": format!("PLT{:04}", i) })))
            .collect();
        AcquisitionList::new(items)
    }

    fn loaded(count: usize) -> AcquisitionsScreen {
        let mut screen = AcquisitionsScreen::default();
        assert!(screen.apply_fetch_result(Ok(rows(count)), Instant::now()));
        screen
    }

    fn ready(screen: &AcquisitionsScreen) -> PageModel<'_> {
        match screen.view() {
            ScreenView::Ready(model) => model,
            other => panic!("expected a ready screen, got {:?}", other),
        }
    }

    #[test]
    fn test_starts_loading() {
        let screen = AcquisitionsScreen::default();
        assert_eq!(screen.view(), ScreenView::Loading);
        assert!(!screen.reveal().is_started());
    }

    #[test]
    fn test_failed_fetch_shows_message() {
        let mut screen = AcquisitionsScreen::default();
        assert!(screen.apply_fetch_result(Err(FleetError::Status(503)), Instant::now()));

        match screen.view() {
            ScreenView::Failed(message) => assert!(message.contains("503")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(!screen.reveal().is_started());
        assert!(!screen.set_page(2));
    }

    #[test]
    fn test_first_page_model() {
        let screen = loaded(240);
        let model = ready(&screen);

        assert_eq!(model.rows.len(), 12);
        assert_eq!(model.rows[0].plate(), Some("PLT0000"));
        assert_eq!(model.first_row_index, 0);
        assert_eq!(model.total_items, 240);
        assert_eq!(model.current_page, 1);
        assert_eq!(model.total_pages, 20);
        assert_eq!(model.window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!model.window.show_leading_ellipsis);
        assert!(model.window.show_trailing_ellipsis);
        assert!(model.show_controls);
        assert!(!model.first_enabled);
        assert!(model.last_enabled);
        assert!(screen.reveal().is_started());
    }

    #[test]
    fn test_page_changes() {
        let mut screen = loaded(240);

        assert!(screen.set_page(10));
        let model = ready(&screen);
        assert_eq!(model.rows[0].plate(), Some("PLT0108"));
        assert_eq!(model.first_row_index, 108);
        assert_eq!(model.window.pages, vec![8, 9, 10, 11, 12]);
        assert!(model.first_enabled && model.last_enabled);

        assert!(screen.last_page());
        let model = ready(&screen);
        assert_eq!(model.current_page, 20);
        assert_eq!(model.window.pages, vec![16, 17, 18, 19, 20]);
        assert!(model.first_enabled);
        assert!(!model.last_enabled);

        assert!(!screen.last_page());
        assert!(screen.first_page());
        assert_eq!(ready(&screen).current_page, 1);
    }

    #[test]
    fn test_page_request_is_clamped() {
        let mut screen = loaded(30);
        screen.set_page(99);
        assert_eq!(ready(&screen).current_page, 3);
        assert_eq!(ready(&screen).rows.len(), 6);
    }

    #[test]
    fn test_single_page_hides_controls() {
        let screen = loaded(12);
        let model = ready(&screen);
        assert_eq!(model.total_pages, 1);
        assert!(!model.show_controls);
    }

    #[test]
    fn test_empty_collection() {
        let screen = loaded(0);
        let model = ready(&screen);
        assert!(model.rows.is_empty());
        assert_eq!(model.total_pages, 0);
        assert!(model.window.is_empty());
        assert!(!model.show_controls);
    }

    #[test]
    fn test_result_after_unmount_is_discarded() {
        let mut screen = AcquisitionsScreen::default();
        screen.unmount();
        assert!(!screen.apply_fetch_result(Ok(rows(5)), Instant::now()));
        assert_eq!(screen.view(), ScreenView::Loading);
    }

    #[test]
    fn test_second_result_does_not_reset_page() {
        let mut screen = loaded(240);
        screen.set_page(4);
        assert!(!screen.apply_fetch_result(Ok(rows(3)), Instant::now()));
        let model = ready(&screen);
        assert_eq!(model.current_page, 4);
        assert_eq!(model.total_items, 240);
    }

    #[test]
    fn test_failure_message_is_kept_verbatim() {
        let mut screen = AcquisitionsScreen::default();
        assert!(screen.apply_failed("Failed to fetch data"));
        assert_eq!(screen.view(), ScreenView::Failed("Failed to fetch data"));
        assert!(!screen.apply_loaded(rows(3), Instant::now()));
    }

    #[test]
    fn test_screen_events_reach_log_backend() {
        captured_logs();

        let mut screen = AcquisitionsScreen::default();
        screen.apply_failed("gateway exploded");
        assert!(was_logged(log::Level::Warn, "acquisitions fetch failed: gateway exploded"));

        let mut screen = AcquisitionsScreen::default();
        screen.unmount();
        screen.apply_loaded(rows(1), Instant::now());
        assert!(was_logged(log::Level::Debug, "acquisitions screen unmounted"));
        assert!(was_logged(log::Level::Warn, "screen is unmounted"));

        let mut screen = loaded(40);
        screen.set_page(3);
        assert!(was_logged(log::Level::Info, "showing 40 acquisitions"));
        assert!(was_logged(log::Level::Debug, "page changed to 3"));
    }

    #[test]
    fn test_page_change_before_load_is_ignored() {
        let mut screen = AcquisitionsScreen::default();
        assert!(!screen.set_page(3));
        assert!(!screen.last_page());
    }

    #[test]
    fn test_custom_page_size_and_window() {
        let mut screen = AcquisitionsScreen::new(ScreenConfig {
            items_per_page: 10,
            window_size: 3,
        });
        screen.apply_fetch_result(Ok(rows(95)), Instant::now());
        screen.set_page(5);

        let model = ready(&screen);
        assert_eq!(model.total_pages, 10);
        assert_eq!(model.window.pages, vec![4, 5, 6]);
        assert_eq!(model.rows.len(), 10);
    }
}
