//! Members Controller
//!
//! Translates UI gestures into `MembersState` operations and logs the
//! outcome. Every method mutates through `Entity::update` and notifies, so
//! observers re-derive their view afterwards.

use gpui::{App, SharedString};

use crate::app::entities::AppEntities;
use crate::domain::member::{MemberField, MemberId};
use crate::domain::paging::PageRequest;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;
use crate::state::members_state::MembersState;

/// Members page controller
#[derive(Clone)]
pub struct MembersController {
    entities: AppEntities,
    members_url: SharedString,
}

impl MembersController {
    /// Create a new controller
    pub fn new(entities: AppEntities, members_url: impl Into<SharedString>) -> Self {
        Self {
            entities,
            members_url: members_url.into(),
        }
    }

    fn update<T>(&self, cx: &mut App, f: impl FnOnce(&mut MembersState) -> T) -> T {
        self.entities.members.update(cx, |state, cx| {
            let result = f(state);
            cx.notify();
            result
        })
    }

    fn log(&self, cx: &mut App, event: AppEvent) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(event);
        }
    }

    /// Request the member list once; later calls are ignored
    pub fn load(&self, cx: &mut App) {
        if !self.update(cx, MembersState::begin_fetch) {
            tracing::debug!("Member fetch already requested");
            return;
        }

        let requested = cx
            .try_global::<ServiceHub>()
            .map(|hub| hub.fetch_members(self.members_url.to_string()))
            .is_some();
        if !requested {
            tracing::error!("ServiceHub missing; cannot fetch members");
            self.update(cx, MembersState::fetch_failed);
        }
    }

    /// Apply a new search term (resets to page 1)
    pub fn search(&self, term: &str, cx: &mut App) {
        let term = term.to_string();
        self.update(cx, move |state| state.set_search_term(term));
    }

    pub fn navigate(&self, request: PageRequest, cx: &mut App) {
        self.update(cx, |state| state.navigate(request));
    }

    pub fn toggle_selection(&self, id: MemberId, cx: &mut App) {
        self.update(cx, |state| state.toggle_selection(id));
    }

    pub fn begin_edit(&self, id: MemberId, cx: &mut App) {
        if !self.update(cx, |state| state.begin_edit(id)) {
            tracing::debug!(%id, "Edit requested for unknown member");
        }
    }

    pub fn edit_field(&self, id: MemberId, field: MemberField, value: String, cx: &mut App) {
        self.update(cx, |state| state.edit_field(id, field, value));
    }

    pub fn save(&self, id: MemberId, cx: &mut App) {
        if self.update(cx, |state| state.save(id)) {
            tracing::info!(%id, "Member updated");
            self.log(cx, AppEvent::info(format!("Member {id} updated")));
        }
    }

    pub fn delete(&self, id: MemberId, cx: &mut App) {
        if self.update(cx, |state| state.delete(id)) {
            tracing::info!(%id, "Member deleted");
            self.log(cx, AppEvent::info(format!("Member {id} deleted")));
        }
    }

    pub fn delete_selected(&self, cx: &mut App) {
        let removed = self.update(cx, MembersState::delete_selected);
        if removed > 0 {
            tracing::info!(removed, "Selected members deleted");
            self.log(cx, AppEvent::info(format!("Deleted {removed} selected members")));
        }
    }
}
