//! MembersView - Derived Page View
//!
//! A single pure derivation from (members, search term, page) to what the
//! table renders. Called after every mutation instead of keeping filtered and
//! paged copies in sync by hand.

use ahash::{AHashMap, AHashSet};

use super::member::{Member, MemberDraft, MemberId};
use super::paging::{clamp_page, page_count, page_range};
use super::search::filter_members;

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub member: Member,
    pub selected: bool,
    /// Present while the row is being edited
    pub draft: Option<MemberDraft>,
}

/// Everything the members page needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MembersView {
    /// Rows of the current page window
    pub rows: Vec<RowView>,
    /// Current page (1-based, already clamped)
    pub current_page: usize,
    /// Total pages of the filtered list (0 when nothing matches)
    pub page_count: usize,
    /// Number of members matching the search term
    pub filtered_len: usize,
    /// Number of selected members
    pub selected_len: usize,
}

impl MembersView {
    /// Page numbers to render, `1..=page_count`
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.page_count
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.page_count
    }
}

/// Derive the current page view
pub fn derive_view(
    members: &[Member],
    term: &str,
    page: usize,
    page_size: usize,
    selected: &AHashSet<MemberId>,
    drafts: &AHashMap<MemberId, MemberDraft>,
) -> MembersView {
    let filtered = filter_members(members, term);
    let pages = page_count(filtered.len(), page_size);
    let current_page = clamp_page(page, pages);
    let window = page_range(current_page, page_size, filtered.len());

    let rows = filtered[window]
        .iter()
        .map(|member| RowView {
            member: (*member).clone(),
            selected: selected.contains(&member.id),
            draft: drafts.get(&member.id).cloned(),
        })
        .collect();

    MembersView {
        rows,
        current_page,
        page_count: pages,
        filtered_len: filtered.len(),
        selected_len: selected.len(),
    }
}
