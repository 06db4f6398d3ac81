//! Search - Case-Insensitive Member Filter

use super::member::Member;

/// Whether a member matches an already-lowercased search term
fn matches_lowered(member: &Member, term: &str) -> bool {
    member.name.to_lowercase().contains(term)
        || member.email.to_lowercase().contains(term)
        || member.role.to_lowercase().contains(term)
}

/// Check whether a member's name, email or role contains `term`, ignoring case
pub fn matches(member: &Member, term: &str) -> bool {
    term.is_empty() || matches_lowered(member, &term.to_lowercase())
}

/// Filter members by search term; an empty term keeps every member
pub fn filter_members<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    if term.is_empty() {
        return members.iter().collect();
    }

    let term = term.to_lowercase();
    members
        .iter()
        .filter(|m| matches_lowered(m, &term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Member> {
        vec![
            Member::new(1u64, "Aaron Miles", "aaron@mailinator.com", "member"),
            Member::new(2u64, "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
            Member::new(3u64, "Arvind Kumar", "arvind@mailinator.com", "admin"),
            Member::new(4u64, "Caterina Binotto", "caterina@mailinator.com", "member"),
        ]
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let members = sample();
        let ids: Vec<_> = filter_members(&members, "").iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn matches_any_of_three_fields_ignoring_case() {
        let members = sample();

        let by_role: Vec<_> = filter_members(&members, "ADMIN").iter().map(|m| m.id.0).collect();
        assert_eq!(by_role, vec![3]);

        let by_name: Vec<_> = filter_members(&members, "naik").iter().map(|m| m.id.0).collect();
        assert_eq!(by_name, vec![2]);

        let by_email: Vec<_> = filter_members(&members, "Caterina@")
            .iter()
            .map(|m| m.id.0)
            .collect();
        assert_eq!(by_email, vec![4]);
    }

    #[test]
    fn filtered_is_subset_and_every_entry_matches() {
        let members = sample();
        for term in ["a", "mail", "MEM", "zzz", "r", " "] {
            let filtered = filter_members(&members, term);
            assert!(filtered.len() <= members.len());
            for member in filtered {
                assert!(members.contains(member));
                assert!(matches(member, term), "{term:?} should match {member:?}");
            }
        }
    }

    #[test]
    fn no_match_yields_empty() {
        let members = sample();
        assert!(filter_members(&members, "nobody").is_empty());
    }
}
