//! TextInput Component
//!
//! A single-line input that takes focus on click, accepts typed characters
//! and backspace, and reports every value change through `on_change`.

use gpui::{
    div, prelude::*, px, App, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::theme::colors::Palette;

type ChangeHandler = Box<dyn Fn(&str, &mut Context<TextInput>) + 'static>;

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    min_width: f32,
    focus_handle: FocusHandle,
    on_change: Option<ChangeHandler>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            min_width: 200.0,
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    /// Replace the value without notifying `on_change`
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_min_width(&mut self, width: f32) {
        self.min_width = width;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn emit_change(&mut self, cx: &mut Context<Self>) {
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    /// Append typed text
    fn handle_input(&mut self, text: &str, cx: &mut Context<Self>) {
        self.value.push_str(text);
        self.emit_change(cx);
    }

    /// Remove the last character
    fn handle_backspace(&mut self, cx: &mut Context<Self>) {
        if self.value.pop().is_some() {
            self.emit_change(cx);
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        if keystroke.key == "backspace" {
            self.handle_backspace(cx);
            cx.stop_propagation();
            return;
        }

        if let Some(text) = keystroke.key_char.as_deref() {
            if !text.is_empty() && !text.chars().any(char::is_control) {
                self.handle_input(text, cx);
                cx.stop_propagation();
            }
        }
    }

    fn on_mouse_down(&mut self, _event: &MouseDownEvent, window: &mut Window, _cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            Palette::border_focus()
        } else {
            Palette::input_border()
        };

        let (display_text, text_color) = if self.value.is_empty() && !is_focused {
            (self.placeholder.clone(), Palette::input_placeholder())
        } else if is_focused {
            (
                SharedString::from(format!("{}|", self.value)),
                Palette::text_primary(),
            )
        } else {
            (SharedString::from(self.value.clone()), Palette::text_primary())
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_mouse_down))
            .on_key_down(cx.listener(Self::on_key_down))
            .px_3()
            .py_1()
            .bg(Palette::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(self.min_width))
            .cursor_text()
            .child(display_text)
    }
}

/// Create a text input entity that forwards changes to `on_change`
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    on_change: impl Fn(&str, &mut Context<TextInput>) + 'static,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input.on_change(on_change);
        input
    })
}
