//! Member Admin - Main Entry Point

use member_admin::app::application::run_app;
use member_admin::utils::config_store::load_config_or_default;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config_or_default();
    tracing::info!(
        url = %config.members_url,
        page_size = config.page_size,
        "Starting Member Admin..."
    );

    run_app(config);
}
