//! Case-insensitive substring filtering of the roster.
//!
//! # Responsibility
//! - Derive the filtered view of the member list for a search term.
//!
//! # Invariants
//! - A blank term yields the full roster in original order.
//! - Matching covers both name and skill, case-insensitively.

use crate::model::member::Member;

/// Returns a lazy view of `members` matching `term`.
///
/// The term is trimmed and lowercased once; each member matches when its
/// name or skill contains the term as a case-insensitive substring. The
/// returned iterator borrows the slice, so callers restart the view by
/// calling again with the current term.
pub fn filter_members<'a>(
    members: &'a [Member],
    term: &str,
) -> impl Iterator<Item = &'a Member> + 'a {
    let needle = term.trim().to_lowercase();
    members.iter().filter(move |member| {
        needle.is_empty()
            || member.name.to_lowercase().contains(&needle)
            || member.skill.to_lowercase().contains(&needle)
    })
}

#[cfg(test)]
mod tests {
    use super::filter_members;
    use crate::model::member::Member;

    fn sample() -> Vec<Member> {
        vec![
            Member::new(1, "Adesola", "Node.js Explorer"),
            Member::new(2, "Gemini", "React Guide"),
        ]
    }

    #[test]
    fn blank_term_returns_all_in_order() {
        let members = sample();
        let ids: Vec<_> = filter_members(&members, "   ").map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn term_matches_skill_case_insensitively() {
        let members = sample();
        let names: Vec<_> = filter_members(&members, "react")
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Gemini"]);
    }

    #[test]
    fn term_matches_name() {
        let members = sample();
        let names: Vec<_> = filter_members(&members, "ADES")
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Adesola"]);
    }

    #[test]
    fn view_is_restartable() {
        let members = sample();
        assert_eq!(filter_members(&members, "guide").count(), 1);
        assert_eq!(filter_members(&members, "guide").count(), 1);
    }
}
