//! Workspace - Main Shell with Layout and Event Pump
//!
//! Holds the header, the members page and the log panel, and runs the event
//! pump that bridges service events to entity updates.

use gpui::{div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::members::controller::MembersController;
use crate::features::members::page::MembersPage;
use crate::theme::colors::Palette;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    members_page: Entity<MembersPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        controller: MembersController,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Start the pump before the page requests its data
        Self::start_event_pump(event_rx, entities.clone(), cx);

        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));
        let members_page = cx.new(|cx| MembersPage::new(entities.clone(), controller, cx));

        Self {
            header,
            members_page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                if cx
                    .update(|cx: &mut App| dispatch_event(event, &entities, cx))
                    .is_err()
                {
                    tracing::debug!("App released; stopping event pump");
                    break;
                }
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Palette::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(Palette::content_bg())
                    .child(self.members_page.clone()),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log { level, message, timestamp } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::MembersLoaded { members } => {
            tracing::info!(count = members.len(), "Members loaded");
            entities.members.update(cx, |state, cx| {
                state.set_members(members);
                cx.notify();
            });
        }
        AppEvent::MembersFetchFailed => {
            entities.members.update(cx, |state, cx| {
                state.fetch_failed();
                cx.notify();
            });
        }
    }
}
