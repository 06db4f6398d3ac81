//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::features::members::controller::MembersController;
use crate::i18n::t;
use crate::services::service_hub::ServiceHub;

actions!(member_admin, [Quit]);

/// Run the member admin application
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let entities = AppEntities::init(&config, cx);
        cx.set_global(entities.clone());

        // Service -> UI channel
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        cx.set_global(ServiceHub::new(event_tx));

        let controller = MembersController::new(entities.clone(), config.members_url.clone());

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(config.locale, "app-title")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), controller, event_rx, cx))
        });
        if let Err(err) = opened {
            tracing::error!(error = %err, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
