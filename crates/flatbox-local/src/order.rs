//! Listing order.
//!
//! Entries closer to the root sort first. Within a depth tier, entries are
//! ordered byte-wise by relative name, which keeps the order total and
//! independent of the order directories happen to be read in. Cursors rely
//! on this: an unchanged tree must always produce the same sequence.

use std::cmp::Ordering;

use crate::flatten::FlatEntry;
use crate::path::SEPARATOR;

/// Number of path separators in a relative name.
pub fn depth_of(name: &str) -> usize {
    name.matches(SEPARATOR).count()
}

/// Compare two relative names by depth, then byte-wise.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    depth_of(a)
        .cmp(&depth_of(b))
        .then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

/// Sort flattened entries into listing order.
pub fn sort_entries(entries: &mut [FlatEntry]) {
    entries.sort_by(|a, b| compare_names(a.name(), b.name()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sep(name: &str) -> String {
        name.replace('/', &SEPARATOR.to_string())
    }

    #[test]
    fn depth_counts_separators() {
        assert_eq!(depth_of("top.txt"), 0);
        assert_eq!(depth_of(&sep("a/b/c.txt")), 2);
    }

    #[test]
    fn shallower_sorts_first() {
        assert_eq!(compare_names("zzz", &sep("a/a")), Ordering::Less);
        assert_eq!(compare_names(&sep("a/b/c"), &sep("z/z")), Ordering::Greater);
    }

    #[test]
    fn ties_break_by_name() {
        assert_eq!(compare_names("a.txt", "b.txt"), Ordering::Less);
        assert_eq!(compare_names(&sep("x/b"), &sep("x/a")), Ordering::Greater);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    fn name_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-c]{1,2}", 1..4).prop_map(|parts| parts.join(SEPARATOR.to_string().as_str()))
    }

    proptest! {
        #[test]
        fn sorted_names_never_decrease_in_depth(mut names in prop::collection::vec(name_strategy(), 0..40)) {
            names.sort_by(|a, b| compare_names(a, b));
            for pair in names.windows(2) {
                prop_assert!(depth_of(&pair[0]) <= depth_of(&pair[1]));
            }
        }

        #[test]
        fn order_ignores_input_permutation(names in prop::collection::vec(name_strategy(), 0..40)) {
            let mut forward = names.clone();
            let mut reversed: Vec<String> = names.into_iter().rev().collect();
            forward.sort_by(|a, b| compare_names(a, b));
            reversed.sort_by(|a, b| compare_names(a, b));
            prop_assert_eq!(forward, reversed);
        }
    }
}
