//! MembersState - Member List, Selection and Edit Overlay
//!
//! The full member list is the only source of truth. The filtered list and
//! the page window are never stored; `view()` derives them on demand.

use ahash::{AHashMap, AHashSet};

use crate::domain::member::{Member, MemberDraft, MemberField, MemberId};
use crate::domain::members_view::{derive_view, MembersView};
use crate::domain::paging::{self, PageRequest};
use crate::domain::search::filter_members;

/// Progress of the one-time member fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No request issued yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Members received
    Loaded,
    /// Request failed; the list stays empty
    Failed,
}

/// State for the members table
#[derive(Debug, Clone)]
pub struct MembersState {
    members: Vec<Member>,
    search_term: String,
    current_page: usize,
    page_size: usize,
    selected: AHashSet<MemberId>,
    drafts: AHashMap<MemberId, MemberDraft>,
    fetch: FetchStatus,
}

impl Default for MembersState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PAGE_SIZE)
    }
}

impl MembersState {
    /// Create an empty state with the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            members: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            selected: AHashSet::new(),
            drafts: AHashMap::new(),
            fetch: FetchStatus::Idle,
        }
    }

    // ==================== Fetch ====================

    /// Mark the fetch as started. Returns false if it was already requested.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch != FetchStatus::Idle {
            return false;
        }
        self.fetch = FetchStatus::Loading;
        true
    }

    /// Replace the member list with freshly fetched records
    pub fn set_members(&mut self, members: Vec<Member>) {
        self.members = members;
        self.selected.clear();
        self.drafts.clear();
        self.current_page = 1;
        self.fetch = FetchStatus::Loaded;
    }

    /// Record a failed fetch; the list is left as it is (empty)
    pub fn fetch_failed(&mut self) {
        self.fetch = FetchStatus::Failed;
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch
    }

    pub fn is_loading(&self) -> bool {
        self.fetch == FetchStatus::Loading
    }

    // ==================== Accessors ====================

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    fn contains(&self, id: MemberId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    /// Number of members matching the current search term
    fn filtered_len(&self) -> usize {
        filter_members(&self.members, &self.search_term).len()
    }

    fn page_count(&self) -> usize {
        paging::page_count(self.filtered_len(), self.page_size)
    }

    /// Derive the rows and pagination for the current page
    pub fn view(&self) -> MembersView {
        derive_view(
            &self.members,
            &self.search_term,
            self.current_page,
            self.page_size,
            &self.selected,
            &self.drafts,
        )
    }

    // ==================== Filter & Pages ====================

    /// Apply a new search term and go back to the first page
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Move between pages; out-of-range requests leave the page unchanged
    pub fn navigate(&mut self, request: PageRequest) {
        self.current_page = paging::navigate(self.current_page, self.page_count(), request);
    }

    /// Keep the current page inside the (possibly shrunk) filtered list
    fn clamp_current_page(&mut self) {
        self.current_page = paging::clamp_page(self.current_page, self.page_count());
    }

    // ==================== Selection ====================

    /// Flip selection of a member. Unknown ids are ignored.
    pub fn toggle_selection(&mut self, id: MemberId) {
        if !self.selected.remove(&id) && self.contains(id) {
            self.selected.insert(id);
        }
    }

    /// Remove every selected member, then clear the selection and all drafts.
    ///
    /// Returns how many members were removed.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.members.len();
        let selected = &self.selected;
        self.members.retain(|m| !selected.contains(&m.id));
        self.selected.clear();
        self.drafts.clear();
        self.clamp_current_page();
        before - self.members.len()
    }

    // ==================== Edit ====================

    /// Start editing a member by snapshotting its fields.
    ///
    /// An existing draft is kept untouched. Returns false for unknown ids.
    pub fn begin_edit(&mut self, id: MemberId) -> bool {
        if self.drafts.contains_key(&id) {
            return true;
        }
        match self.members.iter().find(|m| m.id == id) {
            Some(member) => {
                self.drafts.insert(id, member.draft());
                true
            }
            None => false,
        }
    }

    /// Change one field of a draft; the member itself is untouched until save
    pub fn edit_field(&mut self, id: MemberId, field: MemberField, value: impl Into<String>) {
        if let Some(draft) = self.drafts.get_mut(&id) {
            draft.set_field(field, value.into());
        }
    }

    /// Apply a draft onto its member and drop the draft.
    ///
    /// Returns false when there was no draft or no such member.
    pub fn save(&mut self, id: MemberId) -> bool {
        let Some(draft) = self.drafts.remove(&id) else {
            return false;
        };
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.apply(draft);
                self.clamp_current_page();
                true
            }
            None => false,
        }
    }

    /// Remove a single member along with its selection and draft.
    ///
    /// Returns false for unknown ids.
    pub fn delete(&mut self, id: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        self.selected.remove(&id);
        self.drafts.remove(&id);
        self.clamp_current_page();
        self.members.len() != before
    }
}

#[cfg(test)]
impl MembersState {
    fn search_term(&self) -> &str {
        &self.search_term
    }

    fn current_page(&self) -> usize {
        self.current_page
    }

    fn is_selected(&self, id: MemberId) -> bool {
        self.selected.contains(&id)
    }

    fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn draft(&self, id: MemberId) -> Option<&MemberDraft> {
        self.drafts.get(&id)
    }

    fn is_editing(&self, id: MemberId) -> bool {
        self.drafts.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(i: u64) -> Member {
        let role = if i <= 12 { "admin" } else { "member" };
        Member::new(i, format!("Person {i}"), format!("person{i}@mailinator.com"), role)
    }

    fn loaded(n: u64) -> MembersState {
        let mut state = MembersState::new(10);
        assert!(state.begin_fetch());
        state.set_members((1..=n).map(member).collect());
        state
    }

    fn ids(state: &MembersState) -> Vec<u64> {
        state.members().iter().map(|m| m.id.0).collect()
    }

    fn assert_no_dangling_ids(state: &MembersState) {
        for id in state.selected.iter().chain(state.drafts.keys()) {
            assert!(state.contains(*id), "dangling id {id}");
        }
    }

    #[test]
    fn fetch_is_requested_once() {
        let mut state = MembersState::new(10);
        assert_eq!(state.fetch_status(), FetchStatus::Idle);
        assert!(state.begin_fetch());
        assert!(state.is_loading());
        assert!(!state.begin_fetch());

        state.fetch_failed();
        assert_eq!(state.fetch_status(), FetchStatus::Failed);
        assert!(!state.begin_fetch());
        assert!(state.members().is_empty());
        assert_eq!(state.view().page_count, 0);
    }

    #[test]
    fn twenty_five_members_scenario() {
        let mut state = loaded(25);
        assert_eq!(state.page_count(), 3);

        state.navigate(PageRequest::Jump(3));
        let view = state.view();
        assert_eq!(view.current_page, 3);
        assert_eq!(view.rows.len(), 5);

        // 12 admins match
        state.set_search_term("adm");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.filtered_len(), 12);
        assert_eq!(state.page_count(), 2);

        state.navigate(PageRequest::Next);
        assert_eq!(state.view().rows.len(), 2);

        // every keystroke resets to page 1
        state.set_search_term("admi");
        assert_eq!(state.current_page(), 1);
        state.navigate(PageRequest::Next);
        state.set_search_term("");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.filtered_len(), 25);
    }

    #[test]
    fn configured_page_size_drives_the_window() {
        let mut state = MembersState::new(5);
        assert!(state.begin_fetch());
        state.set_members((1..=12).map(member).collect());

        assert_eq!(state.page_count(), 3);
        state.navigate(PageRequest::Jump(3));
        let view = state.view();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].member.id, MemberId(11));
    }

    #[test]
    fn navigation_clamps_at_boundaries() {
        let mut state = loaded(25);
        state.navigate(PageRequest::Previous);
        assert_eq!(state.current_page(), 1);

        state.navigate(PageRequest::Jump(3));
        state.navigate(PageRequest::Next);
        assert_eq!(state.current_page(), 3);

        state.navigate(PageRequest::Jump(7));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut state = loaded(5);
        state.toggle_selection(MemberId(2));
        let once: Vec<_> = state.selected.iter().copied().collect();
        assert_eq!(once, vec![MemberId(2)]);

        state.toggle_selection(MemberId(4));
        state.toggle_selection(MemberId(4));
        assert!(state.is_selected(MemberId(2)));
        assert!(!state.is_selected(MemberId(4)));
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn toggling_unknown_id_is_ignored() {
        let mut state = loaded(3);
        state.toggle_selection(MemberId(99));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn selection_survives_filtering() {
        let mut state = loaded(20);
        state.toggle_selection(MemberId(15));
        state.set_search_term("admin");
        assert!(state.is_selected(MemberId(15)));
        assert!(state.view().rows.iter().all(|r| !r.selected));
    }

    #[test]
    fn bulk_delete_removes_selected_and_clears_tracking() {
        let mut state = loaded(10);
        state.toggle_selection(MemberId(3));
        state.toggle_selection(MemberId(7));
        assert!(state.begin_edit(MemberId(3)));
        assert!(state.begin_edit(MemberId(5)));

        assert_eq!(state.delete_selected(), 2);
        assert_eq!(ids(&state), vec![1, 2, 4, 5, 6, 8, 9, 10]);
        assert_eq!(state.selected_count(), 0);
        assert!(state.draft(MemberId(3)).is_none());
        assert!(state.draft(MemberId(5)).is_none());
        assert_no_dangling_ids(&state);
    }

    #[test]
    fn bulk_delete_with_nothing_selected_is_noop() {
        let mut state = loaded(4);
        assert_eq!(state.delete_selected(), 0);
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn delete_prunes_selection_and_draft() {
        let mut state = loaded(5);
        state.toggle_selection(MemberId(2));
        state.toggle_selection(MemberId(3));
        state.begin_edit(MemberId(2));

        assert!(state.delete(MemberId(2)));
        assert_eq!(ids(&state), vec![1, 3, 4, 5]);
        assert!(!state.is_selected(MemberId(2)));
        assert!(state.is_selected(MemberId(3)));
        assert!(!state.is_editing(MemberId(2)));
        assert!(state.view().rows.iter().all(|r| r.member.id != MemberId(2)));
        assert_no_dangling_ids(&state);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut state = loaded(3);
        assert!(!state.delete(MemberId(42)));
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn delete_pulls_page_back_when_last_page_empties() {
        let mut state = loaded(11);
        state.navigate(PageRequest::Jump(2));
        assert!(state.delete(MemberId(11)));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.view().rows.len(), 10);
    }

    #[test]
    fn edit_touches_only_the_draft_until_save() {
        let mut state = loaded(3);
        assert!(state.begin_edit(MemberId(2)));
        state.edit_field(MemberId(2), MemberField::Name, "Renamed");
        state.edit_field(MemberId(2), MemberField::Email, "renamed@mailinator.com");
        state.edit_field(MemberId(2), MemberField::Role, "owner");

        assert_eq!(state.members()[1].name, "Person 2");
        assert_eq!(state.draft(MemberId(2)).map(|d| d.name.as_str()), Some("Renamed"));

        let before_others: Vec<_> = [0, 2].iter().map(|&i| state.members()[i].clone()).collect();
        assert!(state.save(MemberId(2)));

        let saved = &state.members()[1];
        assert_eq!(saved.id, MemberId(2));
        assert_eq!(saved.name, "Renamed");
        assert_eq!(saved.email, "renamed@mailinator.com");
        assert_eq!(saved.role, "owner");
        assert!(!state.is_editing(MemberId(2)));

        let after_others: Vec<_> = [0, 2].iter().map(|&i| state.members()[i].clone()).collect();
        assert_eq!(before_others, after_others);
    }

    #[test]
    fn begin_edit_keeps_existing_draft() {
        let mut state = loaded(2);
        state.begin_edit(MemberId(1));
        state.edit_field(MemberId(1), MemberField::Role, "owner");
        assert!(state.begin_edit(MemberId(1)));
        assert_eq!(state.draft(MemberId(1)).map(|d| d.role.as_str()), Some("owner"));
    }

    #[test]
    fn edit_and_save_on_unknown_ids_are_noops() {
        let mut state = loaded(2);
        assert!(!state.begin_edit(MemberId(9)));
        state.edit_field(MemberId(9), MemberField::Name, "ghost");
        assert!(!state.save(MemberId(9)));
        assert!(!state.save(MemberId(1)));
        assert_eq!(ids(&state), vec![1, 2]);
        assert!(state.draft(MemberId(9)).is_none());
    }

    #[test]
    fn search_stays_applied_after_save() {
        let mut state = loaded(20);
        state.set_search_term("person1");
        let before = state.filtered_len();

        state.begin_edit(MemberId(1));
        state.edit_field(MemberId(1), MemberField::Name, "Zed");
        state.edit_field(MemberId(1), MemberField::Email, "zed@mailinator.com");
        state.save(MemberId(1));

        assert_eq!(state.search_term(), "person1");
        assert_eq!(state.filtered_len(), before - 1);
    }

    #[test]
    fn reload_resets_tracking() {
        let mut state = loaded(4);
        state.toggle_selection(MemberId(1));
        state.begin_edit(MemberId(2));
        state.set_members(vec![member(1)]);
        assert_eq!(state.selected_count(), 0);
        assert!(!state.is_editing(MemberId(2)));
        assert_eq!(state.fetch_status(), FetchStatus::Loaded);
    }
}
