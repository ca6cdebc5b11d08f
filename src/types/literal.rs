use {
    super::WatchError,
    std::{fmt, num::NonZeroU32, ops::Not},
};

/// Var index, starting with one.
pub type VarId = usize;

/// Literal encoded on `u32` as:
///
/// - the Literal corresponding to a positive occurrence of *variable `n` is `2 * n + 1` and
/// - that for the negative one is `2 * n`.
///
/// # Examples
///
/// ```
/// use splr_watch::types::*;
/// assert_eq!(2usize, Lit::from(-1i32).into());
/// assert_eq!(3usize, Lit::from( 1i32).into());
/// assert_eq!(4usize, Lit::from(-2i32).into());
/// assert_eq!(5usize, Lit::from( 2i32).into());
/// assert_eq!( 1i32, Lit::from( 1i32).into());
/// assert_eq!(-1i32, Lit::from(-1i32).into());
/// assert_eq!( 2i32, Lit::from( 2i32).into());
/// assert_eq!(-2i32, Lit::from(-2i32).into());
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Lit {
    /// literal encoded into folded u32
    ordinal: NonZeroU32,
}

impl Default for Lit {
    /// return the undefined literal.
    #[inline]
    fn default() -> Self {
        Lit::UNDEF
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_undef() {
            write!(f, "UndefL")
        } else {
            write!(f, "{}L", i32::from(self))
        }
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<(VarId, bool)> for Lit {
    /// make a Lit from a var and its polarity; `true` means a positive literal.
    #[inline]
    fn from((vi, positive): (VarId, bool)) -> Self {
        debug_assert!(0 < vi && vi < Lit::UNDEF.vi());
        Lit::from_raw(((vi as u32) << 1) | (positive as u32))
    }
}

impl From<i32> for Lit {
    #[inline]
    /// `x` must be a DIMACS literal; `i32::MAX` and `i32::MIN` aren't,
    /// as their variables don't fit in. Use `Lit::try_from` for unchecked input.
    fn from(x: i32) -> Self {
        debug_assert!(x != 0 && x.unsigned_abs() < Lit::UNDEF.vi() as u32);
        let vi = x.unsigned_abs();
        Lit::from_raw((vi << 1) | (0 < x) as u32)
    }
}

impl TryFrom<i64> for Lit {
    type Error = WatchError;
    /// make a Lit from a DIMACS integer, rejecting `0` and out-of-range values.
    fn try_from(x: i64) -> Result<Self, Self::Error> {
        let vi = x.unsigned_abs();
        if x == 0 || (Lit::UNDEF.vi() as u64) <= vi {
            return Err(WatchError::InvalidLiteral);
        }
        Ok(Lit::from((vi as VarId, 0 < x)))
    }
}

impl From<Lit> for bool {
    /// - negative Lit (= even u32) => false
    /// - positive Lit (= odd u32)  => true
    #[inline]
    fn from(l: Lit) -> bool {
        (NonZeroU32::get(l.ordinal) & 1) != 0
    }
}

impl From<Lit> for usize {
    #[inline]
    fn from(l: Lit) -> usize {
        NonZeroU32::get(l.ordinal) as usize
    }
}

impl From<Lit> for i32 {
    #[inline]
    fn from(l: Lit) -> i32 {
        i32::from(&l)
    }
}

impl From<&Lit> for i32 {
    #[inline]
    fn from(l: &Lit) -> i32 {
        let vi = (NonZeroU32::get(l.ordinal) >> 1) as i32;
        if NonZeroU32::get(l.ordinal) % 2 == 0 {
            -vi
        } else {
            vi
        }
    }
}

impl Not for Lit {
    type Output = Lit;
    #[inline]
    fn not(self) -> Self {
        Lit::from_raw(NonZeroU32::get(self.ordinal) ^ 1)
    }
}

/// # Examples
///
/// ```
/// use splr_watch::types::*;
/// assert_eq!(Lit::from(1i32), Lit::from((1 as VarId, true)));
/// assert_eq!(Lit::from(2i32), Lit::from((2 as VarId, true)));
/// assert_eq!(1, Lit::from((1usize, true)).vi());
/// assert_eq!(1, Lit::from((1usize, false)).vi());
/// assert_eq!(Lit::from( 1i32), !Lit::from(-1i32));
/// assert_eq!(Lit::from(-2i32), !Lit::from( 2i32));
/// assert_eq!(Lit::from(-7i32), Lit::from_raw(Lit::from(-7i32).to_raw()));
/// ```
impl Lit {
    /// the undefined literal; it is larger than any valid literal.
    pub const UNDEF: Lit = Lit {
        ordinal: NonZeroU32::MAX,
    };
    /// convert to `VarId`.
    #[inline]
    pub fn vi(self) -> VarId {
        (NonZeroU32::get(self.ordinal) >> 1) as VarId
    }
    #[inline]
    pub fn is_positive(self) -> bool {
        bool::from(self)
    }
    #[inline]
    pub fn is_undef(self) -> bool {
        self == Lit::UNDEF
    }
    /// return the packed encoding.
    #[inline]
    pub fn to_raw(self) -> u32 {
        NonZeroU32::get(self.ordinal)
    }
    /// decode a packed literal; `0` isn't an encoding of any literal and
    /// maps to `Lit::UNDEF`.
    #[inline]
    pub fn from_raw(raw: u32) -> Lit {
        NonZeroU32::new(raw).map_or(Lit::UNDEF, |ordinal| Lit { ordinal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit_encoding() {
        for x in [1i32, -1, 2, -2, 1000, -65_535] {
            let l = Lit::from(x);
            assert_eq!(i32::from(l), x);
            assert_eq!(l.vi(), x.unsigned_abs() as VarId);
            assert_eq!(l.is_positive(), 0 < x);
            assert_eq!(Lit::from_raw(l.to_raw()), l);
            assert_eq!(!!l, l);
            assert_ne!(!l, l);
        }
    }
    #[test]
    fn test_lit_order() {
        assert!(Lit::from(-1i32) < Lit::from(1i32));
        assert!(Lit::from(1i32) < Lit::from(-2i32));
        assert!(Lit::from(100_000i32) < Lit::UNDEF);
        assert_eq!(Lit::default(), Lit::UNDEF);
        assert_eq!(Lit::from_raw(0), Lit::UNDEF);
        assert_eq!(Lit::from_raw(u32::MAX), Lit::UNDEF);
    }
    #[test]
    fn test_lit_try_from() {
        assert_eq!(Lit::try_from(0i64), Err(WatchError::InvalidLiteral));
        assert_eq!(Lit::try_from(-3i64), Ok(Lit::from(-3i32)));
        assert_eq!(
            Lit::try_from(i64::from(i32::MAX) + 1),
            Err(WatchError::InvalidLiteral)
        );
    }
    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn test_lit_from_largest_i32() {
        let _ = Lit::from(i32::MAX);
    }
    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn test_lit_from_smallest_i32() {
        let _ = Lit::from(i32::MIN);
    }
    #[test]
    fn test_lit_largest_var() {
        let x = i32::MAX - 1;
        assert_eq!(i32::from(Lit::from(x)), x);
        assert_eq!(i32::from(Lit::from(-x)), -x);
        assert!(!Lit::from(x).is_undef());
        assert_eq!(Lit::try_from(i64::from(x)), Ok(Lit::from(x)));
    }
}
