//! Log Panel Component
//!
//! Collapsible strip at the bottom of the window showing recent in-app logs.

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::state::log_state::LogEntry;
use crate::theme::colors::Palette;
use crate::utils::format::format_time_ms;

/// Number of entries rendered when expanded
const VISIBLE_ENTRIES: usize = 50;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_log_entry(entry: &LogEntry) -> AnyElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(Palette::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(Palette::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
            .into_any_element()
    }

    fn header_button(id: &'static str) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(Palette::text_muted())
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (count, entries) = {
            let logs = self.entities.logs.read(cx);
            let entries: Vec<AnyElement> = if self.expanded {
                logs.recent(VISIBLE_ENTRIES).map(Self::render_log_entry).collect()
            } else {
                Vec::new()
            };
            (logs.len(), entries)
        };

        let height = if self.expanded { px(150.0) } else { px(32.0) };
        let entities = self.entities.clone();

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(Palette::log_panel_bg())
            .flex()
            .flex_col()
            .child(
                div()
                    .h(px(32.0))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(Palette::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child(t(locale, "log-title")),
                            )
                            .child(
                                div()
                                    .text_color(Palette::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({count})")),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Self::header_button("clear-logs")
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        entities.logs.update(cx, |logs, cx| {
                                            logs.clear();
                                            cx.notify();
                                        });
                                    })
                                    .child(t(locale, "log-clear")),
                            )
                            .child(
                                Self::header_button("toggle-logs")
                                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                        this.toggle_expanded(cx);
                                    }))
                                    .child(if self.expanded { "▼" } else { "▲" }),
                            ),
                    ),
            );

        if self.expanded {
            panel = panel.child(
                div()
                    .id("log-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(entries),
            );
        }

        panel
    }
}
