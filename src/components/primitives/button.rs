//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, Pixels, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::theme::colors::Palette;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button
    #[default]
    Primary,
    /// Destructive action (red)
    Danger,
    /// Transparent button for secondary row actions
    Ghost,
}

impl ButtonVariant {
    /// (background, text, hover background)
    fn colors(self) -> (Rgba, Rgba, Rgba) {
        match self {
            ButtonVariant::Primary => (
                Palette::button_primary_bg(),
                Palette::button_primary_text(),
                gpui::rgba(0x2563ebff),
            ),
            ButtonVariant::Danger => (
                Palette::button_danger_bg(),
                Palette::button_danger_text(),
                gpui::rgba(0xdc2626ff),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                Palette::button_ghost_text(),
                Palette::table_row_hover(),
            ),
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact button for table rows
    Small,
    #[default]
    Medium,
}

impl ButtonSize {
    /// (padding x, padding y, font size)
    fn metrics(self) -> (Pixels, Pixels, Pixels) {
        match self {
            ButtonSize::Small => (px(8.0), px(3.0), px(12.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// A disabled button is dimmed and ignores clicks
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = self.variant.colors();
        let (padding_x, padding_y, font_size) = self.size.metrics();

        let mut element = div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .child(self.label);

        if self.disabled {
            return element.opacity(0.5);
        }

        element = element.cursor_pointer().hover(|s| s.bg(hover_bg));
        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }
        element
    }
}
