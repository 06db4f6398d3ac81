//! Pagination Component
//!
//! Numbered page navigation with previous/next controls for the DataTable.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::domain::members_view::MembersView;
use crate::domain::paging::PageRequest;
use crate::theme::colors::Palette;

type NavigateHandler = Rc<dyn Fn(PageRequest, &mut Window, &mut App)>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    pages: Vec<usize>,
    can_prev: bool,
    can_next: bool,
    total_items: usize,
    items_label: SharedString,
    on_navigate: Option<NavigateHandler>,
}

impl Pagination {
    /// Take page numbers and boundary flags from a derived view
    pub fn from_view(view: &MembersView) -> Self {
        Self {
            current_page: view.current_page,
            pages: view.page_numbers().collect(),
            can_prev: view.can_prev(),
            can_next: view.can_next(),
            total_items: view.filtered_len,
            items_label: "items".into(),
            on_navigate: None,
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Set the navigation handler
    pub fn on_navigate(mut self, handler: impl Fn(PageRequest, &mut Window, &mut App) + 'static) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }

    fn nav_button(
        &self,
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        request: PageRequest,
        enabled: bool,
        active: bool,
    ) -> impl IntoElement {
        let (bg, text) = if active {
            (Palette::accent(), Palette::text_light())
        } else if enabled {
            (Palette::content_bg(), Palette::text_primary())
        } else {
            (Palette::content_bg(), Palette::text_muted())
        };

        let id: SharedString = id.into();
        let label: SharedString = label.into();

        let mut btn = div()
            .id(id)
            .min_w(px(28.0))
            .px_2()
            .py_1()
            .flex()
            .justify_center()
            .rounded_sm()
            .border_1()
            .border_color(Palette::border())
            .bg(bg)
            .text_sm()
            .text_color(text)
            .child(label);

        if enabled && !active {
            btn = btn
                .cursor_pointer()
                .hover(|s| s.bg(Palette::table_row_hover()));
            if let Some(handler) = self.on_navigate.clone() {
                btn = btn.on_click(move |_event: &ClickEvent, window, cx| {
                    handler(request, window, cx);
                });
            }
        }

        btn
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let numbers: Vec<_> = self
            .pages
            .iter()
            .map(|&n| {
                self.nav_button(
                    format!("page-{n}"),
                    n.to_string(),
                    PageRequest::Jump(n),
                    true,
                    n == self.current_page,
                )
            })
            .collect();

        div()
            .flex()
            .items_center()
            .gap_4()
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(Palette::text_secondary())
                    .child(format!("{} {}", self.total_items, self.items_label)),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(self.nav_button("prev-page", "<", PageRequest::Previous, self.can_prev, false))
                    .children(numbers)
                    .child(self.nav_button("next-page", ">", PageRequest::Next, self.can_next, false)),
            )
    }
}
