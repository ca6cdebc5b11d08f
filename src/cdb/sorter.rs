//! The canonical order of a watch list: binary clauses first.
use {super::Watch, std::cmp::Ordering};

/// return `true` if `a` should be placed before `b` in a watch list.
///
/// - every binary watch precedes any clause or bnn watch;
/// - binary watches are ordered by the other literal, then irreducible
///   before redundant, then by id;
/// - clause and bnn watches are equivalent to each other.
///
/// Idx watches must not be in the list.
///
/// ```
/// use splr_watch::{cdb::*, types::*};
/// let bin = Watch::try_new_binary(Lit::from(9i32), true, 3).unwrap();
/// let cls = Watch::new_clause(ClOffset::try_from(0u64).unwrap(), Lit::from(1i32));
/// assert!(bin_first_less(&bin, &cls));
/// assert!(!bin_first_less(&cls, &bin));
/// ```
#[inline]
pub fn bin_first_less(a: &Watch, b: &Watch) -> bool {
    watch_assert!(!a.is_idx());
    watch_assert!(!b.is_idx());
    if a.is_clause() || a.is_bnn() {
        return false;
    }
    if b.is_clause() || b.is_bnn() {
        return true;
    }
    watch_assert!(a.is_binary() && b.is_binary());
    if a.other() != b.other() {
        return a.other() < b.other();
    }
    if a.is_red() != b.is_red() {
        return !a.is_red();
    }
    a.bin_id() < b.bin_id()
}

/// [`bin_first_less`] as an `Ordering`, to be used with `sort_by`.
#[inline]
pub fn bin_first_order(a: &Watch, b: &Watch) -> Ordering {
    if bin_first_less(a, b) {
        Ordering::Less
    } else if bin_first_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
