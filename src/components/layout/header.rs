//! Header Component
//!
//! Title, member count with fetch status, and the language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::state::members_state::FetchStatus;
use crate::theme::colors::Palette;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.members, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_fetch_indicator(&self, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let members = self.entities.members.read(cx);

        let (color, glyph) = match members.fetch_status() {
            FetchStatus::Idle => (Palette::text_muted(), "○"),
            FetchStatus::Loading => (Palette::warning(), "●"),
            FetchStatus::Loaded => (Palette::success(), "●"),
            FetchStatus::Failed => (Palette::danger(), "●"),
        };

        div()
            .flex()
            .items_center()
            .gap_1()
            .child(div().text_color(color).text_size(px(10.0)).child(glyph))
            .child(
                div()
                    .text_color(Palette::text_light())
                    .text_size(px(12.0))
                    .child(format!(
                        "{} {}",
                        members.members().len(),
                        t(locale, "header-members")
                    )),
            )
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.display_name();

        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .bg(Palette::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .text_color(Palette::text_light())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(title),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(self.render_fetch_indicator(cx))
                    // Language switcher
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(Palette::text_light())
                            .text_size(px(13.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                });
                            })
                            .child(lang_label),
                    ),
            )
    }
}
