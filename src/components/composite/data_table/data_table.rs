//! DataTable Component
//!
//! Renders a header row and one row per item. Rows can be highlighted by a
//! predicate (e.g. selected rows).

use gpui::{
    div, prelude::*, px, Context, Div, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::Palette;

type RowPredicate<R> = Box<dyn Fn(&R) -> bool>;

/// DataTable component
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    loading_message: SharedString,
    highlight: Option<RowPredicate<R>>,
}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 44.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No data".into(),
            loading_message: "Loading...".into(),
            highlight: None,
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the placeholder texts for the empty and loading states
    pub fn set_messages(&mut self, empty: impl Into<SharedString>, loading: impl Into<SharedString>) {
        self.empty_message = empty.into();
        self.loading_message = loading.into();
    }

    /// Highlight rows for which `predicate` returns true
    pub fn set_highlight(&mut self, predicate: impl Fn(&R) -> bool + 'static) {
        self.highlight = Some(Box::new(predicate));
    }

    fn sized_cell(width: ColumnWidth) -> Div {
        match width {
            ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => div().flex_1().min_w(px(min)),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(Palette::table_header_bg())
            .border_b_1()
            .border_color(Palette::border())
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width)
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(Palette::text_primary())
                    .child(col.label.clone())
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let highlighted = self.highlight.as_ref().is_some_and(|f| f(row));
        let bg = if highlighted {
            Palette::table_row_selected()
        } else if index % 2 == 0 {
            Palette::content_bg()
        } else {
            Palette::table_row_alt()
        };

        div()
            .min_h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .border_b_1()
            .border_color(Palette::border())
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width)
                    .px_3()
                    .py_1()
                    .text_sm()
                    .text_color(Palette::text_primary())
                    .overflow_hidden()
                    .child(col.render_cell(row))
            }))
    }

    fn render_placeholder(&self, message: SharedString) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_8()
            .text_color(Palette::text_muted())
            .child(message)
    }
}

impl<R: Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Palette::content_bg())
            .border_1()
            .border_color(Palette::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header());

        if self.loading {
            table.child(self.render_placeholder(self.loading_message.clone()))
        } else if self.rows.is_empty() {
            table.child(self.render_placeholder(self.empty_message.clone()))
        } else {
            table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(
                        self.rows
                            .iter()
                            .enumerate()
                            .map(|(i, row)| self.render_row(row, i)),
                    ),
            )
        }
    }
}
