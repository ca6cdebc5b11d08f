use {
    super::Watch,
    crate::types::*,
    std::{cmp::Ordering, fmt},
};

/// A literal and a watch, an element of an occurrence list.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct OccurClause {
    pub lit: Lit,
    pub ws: Watch,
}

impl fmt::Display for OccurClause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.lit, self.ws)
    }
}

impl OccurClause {
    pub fn new(lit: Lit, ws: Watch) -> Self {
        OccurClause { lit, ws }
    }
    /// compare by watches: binary ones first ordered by the other literal,
    /// then long clauses ordered by offset. `lit` isn't a key.
    /// Bnn and idx watches have no offset and must not be compared.
    ///
    /// ```
    /// use splr_watch::{cdb::*, types::*};
    /// let a = Lit::from(1i32);
    /// let p1 = OccurClause::new(a, Watch::try_new_binary(Lit::from(-8i32), false, 0).unwrap());
    /// let p2 = OccurClause::new(a, Watch::new_clause(ClOffset::try_from(5u64).unwrap(), a));
    /// assert!(p1.precedes(&p2));
    /// ```
    pub fn cmp_occurrence(&self, other: &Self) -> Ordering {
        match (self.ws.is_binary(), other.ws.is_binary()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => self.ws.other().cmp(&other.ws.other()),
            (false, false) => {
                watch_assert!(!self.ws.is_bnn() && !other.ws.is_bnn());
                self.ws.offset().cmp(&other.ws.offset())
            }
        }
    }
    /// return `true` if `self < other` in the order of `cmp_occurrence`.
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool {
        self.cmp_occurrence(other) == Ordering::Less
    }
}

/// API for occurrence lists
pub trait OccurListIF {
    /// sort in `cmp_occurrence` order; ties are broken by literal and raw
    /// watch words, so the result doesn't depend on the input order.
    fn sort_occurrences(&mut self);
    /// sort and remove duplicated pairs. Return the number of removed ones.
    fn dedup_occurrences(&mut self) -> usize;
}

impl OccurListIF for Vec<OccurClause> {
    fn sort_occurrences(&mut self) {
        self.sort_unstable_by(|a, b| {
            a.cmp_occurrence(b)
                .then_with(|| a.lit.cmp(&b.lit))
                .then_with(|| a.ws.raw().cmp(&b.ws.raw()))
        });
    }
    fn dedup_occurrences(&mut self) -> usize {
        let len = self.len();
        self.sort_occurrences();
        self.dedup();
        len - self.len()
    }
}
