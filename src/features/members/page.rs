//! Members Page
//!
//! Search bar, paged member table and the footer with bulk delete and
//! pagination. Rows are re-derived from `MembersState` on every change.

use ahash::AHashMap;
use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use super::controller::MembersController;
use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::member::{MemberDraft, MemberField, MemberId};
use crate::domain::members_view::{MembersView, RowView};
use crate::i18n::{t, Locale};

/// Inline editors for a member that has a pending draft
#[derive(Clone)]
pub struct RowEditors {
    name: Entity<TextInput>,
    email: Entity<TextInput>,
    role: Entity<TextInput>,
}

impl RowEditors {
    fn get(&self, field: MemberField) -> &Entity<TextInput> {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }
}

/// Table row: derived view plus editors when the row is being edited
#[derive(Clone)]
pub struct MemberRow {
    row: RowView,
    editors: Option<RowEditors>,
}

/// Members page
pub struct MembersPage {
    entities: AppEntities,
    controller: MembersController,
    search_input: Entity<TextInput>,
    table: Entity<DataTable<MemberRow>>,
    editors: AHashMap<MemberId, RowEditors>,
    view: MembersView,
}

impl MembersPage {
    /// Create the page and request the member list
    pub fn new(entities: AppEntities, controller: MembersController, cx: &mut Context<Self>) -> Self {
        let locale = entities.i18n.read(cx).locale;

        let search_input = {
            let controller = controller.clone();
            text_input(
                "member-search",
                "",
                t(locale, "search-placeholder"),
                move |value, cx| controller.search(value, cx),
                cx,
            )
        };
        search_input.update(cx, |input, _| input.set_min_width(360.0));

        let columns = Self::create_columns(locale, &controller);
        let table = cx.new(|cx| {
            let mut table = DataTable::new(cx);
            table.set_columns(columns);
            table.set_messages(t(locale, "table-no-data"), t(locale, "table-loading"));
            table.set_highlight(|row: &MemberRow| row.row.selected);
            table
        });

        cx.observe(&entities.members, |this, _, cx| this.sync_rows(cx))
            .detach();
        cx.observe(&entities.i18n, |this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.relabel(locale, cx);
        })
        .detach();

        let mut page = Self {
            entities,
            controller,
            search_input,
            table,
            editors: AHashMap::new(),
            view: MembersView::default(),
        };
        page.sync_rows(cx);
        page.controller.load(cx);
        page
    }

    /// Re-derive the visible rows and keep editors in step with drafts
    fn sync_rows(&mut self, cx: &mut Context<Self>) {
        let (view, loading) = {
            let state = self.entities.members.read(cx);
            (state.view(), state.is_loading())
        };

        self.editors.retain(|id, _| {
            view.rows
                .iter()
                .any(|row| row.member.id == *id && row.draft.is_some())
        });
        for row in &view.rows {
            let Some(draft) = &row.draft else { continue };
            if !self.editors.contains_key(&row.member.id) {
                let editors = self.create_editors(row.member.id, draft, cx);
                self.editors.insert(row.member.id, editors);
            }
        }

        let rows: Vec<MemberRow> = view
            .rows
            .iter()
            .map(|row| MemberRow {
                row: row.clone(),
                editors: self.editors.get(&row.member.id).cloned(),
            })
            .collect();

        self.table.update(cx, |table, cx| {
            table.set_rows(rows);
            table.set_loading(loading);
            cx.notify();
        });
        self.view = view;
        cx.notify();
    }

    fn create_editors(&self, id: MemberId, draft: &MemberDraft, cx: &mut Context<Self>) -> RowEditors {
        let mut editor = |field: MemberField| {
            let controller = self.controller.clone();
            let input = text_input(
                SharedString::from(format!("edit-{id}-{}", field.key())),
                draft.field(field),
                "",
                move |value, cx| controller.edit_field(id, field, value.to_string(), cx),
                cx,
            );
            input.update(cx, |input, _| input.set_min_width(120.0));
            input
        };

        RowEditors {
            name: editor(MemberField::Name),
            email: editor(MemberField::Email),
            role: editor(MemberField::Role),
        }
    }

    fn relabel(&mut self, locale: Locale, cx: &mut Context<Self>) {
        let columns = Self::create_columns(locale, &self.controller);
        self.table.update(cx, |table, cx| {
            table.set_columns(columns);
            table.set_messages(t(locale, "table-no-data"), t(locale, "table-loading"));
            cx.notify();
        });
        self.search_input.update(cx, |input, cx| {
            input.set_placeholder(t(locale, "search-placeholder"));
            cx.notify();
        });
        cx.notify();
    }

    fn create_columns(locale: Locale, controller: &MembersController) -> Vec<Column<MemberRow>> {
        let select = {
            let controller = controller.clone();
            Column::new("select", t(locale, "col-select"), move |row: &MemberRow| {
                let id = row.row.member.id;
                let controller = controller.clone();
                Checkbox::new(SharedString::from(format!("select-{id}")))
                    .checked(row.row.selected)
                    .on_change(move |_, _, cx| controller.toggle_selection(id, cx))
                    .into_any_element()
            })
            .fixed_width(80.0)
        };

        let field_column = |key: &'static str, label_key: &str, field: MemberField| {
            Column::new(key, t(locale, label_key), move |row: &MemberRow| match &row.editors {
                Some(editors) => editors.get(field).clone().into_any_element(),
                None => div()
                    .child(SharedString::from(row.row.member.field(field).to_string()))
                    .into_any_element(),
            })
            .flex_width(140.0)
        };

        let actions = {
            let controller = controller.clone();
            let edit_label = t(locale, "action-edit");
            let save_label = t(locale, "action-save");
            let delete_label = t(locale, "action-delete");
            Column::new("actions", t(locale, "col-actions"), move |row: &MemberRow| {
                let id = row.row.member.id;
                let primary = if row.editors.is_some() {
                    let controller = controller.clone();
                    Button::primary(SharedString::from(format!("save-{id}")), save_label.clone())
                        .on_click(move |_, _, cx| controller.save(id, cx))
                } else {
                    let controller = controller.clone();
                    Button::ghost(SharedString::from(format!("edit-{id}")), edit_label.clone())
                        .on_click(move |_, _, cx| controller.begin_edit(id, cx))
                };
                let delete = {
                    let controller = controller.clone();
                    Button::danger(SharedString::from(format!("delete-{id}")), delete_label.clone())
                        .size(ButtonSize::Small)
                        .on_click(move |_, _, cx| controller.delete(id, cx))
                };

                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(primary.size(ButtonSize::Small))
                    .child(delete)
                    .into_any_element()
            })
            .fixed_width(180.0)
        };

        vec![
            select,
            field_column("name", "col-name", MemberField::Name),
            field_column("email", "col-email", MemberField::Email),
            field_column("role", "col-role", MemberField::Role),
            actions,
        ]
    }
}

impl Render for MembersPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let view = &self.view;
        let delete_controller = self.controller.clone();
        let nav_controller = self.controller.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .child(self.search_input.clone()),
            )
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        Button::danger("delete-selected", t(locale, "action-delete-selected"))
                            .disabled(view.selected_len == 0)
                            .on_click(move |_, _, cx: &mut App| delete_controller.delete_selected(cx)),
                    )
                    .child(
                        Pagination::from_view(view)
                            .items_label(t(locale, "pagination-items"))
                            .on_navigate(move |request, _, cx| nav_controller.navigate(request, cx)),
                    ),
            )
    }
}
