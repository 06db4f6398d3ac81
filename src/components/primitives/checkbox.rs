//! Checkbox Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::Palette;

/// A checkbox that reports the requested new state on click
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Called with the state the box would flip to
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let (fill, border) = if checked {
            (Palette::accent(), Palette::accent())
        } else {
            (Palette::input_bg(), Palette::input_border())
        };

        let mut checkbox = div()
            .id(self.id)
            .size(px(18.0))
            .rounded_sm()
            .border_1()
            .border_color(border)
            .bg(fill)
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .text_color(Palette::text_light())
            .text_size(px(12.0))
            .child(if checked { "✓" } else { "" });

        if let Some(handler) = self.on_change {
            checkbox = checkbox.on_click(move |_event, window, cx| handler(!checked, window, cx));
        }

        checkbox
    }
}
