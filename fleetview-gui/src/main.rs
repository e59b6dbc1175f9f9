mod app;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // Default to info level, but allow override via RUST_LOG
            // Example: RUST_LOG=fleetview_core=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetview_core=info,fleetview_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Vehicle Acquisitions", app::update, app::view)
        .subscription(app::subscription)
        .run_with(app::initialize)
}
