//! Handles stored in watches: clause offsets, binary clause ids and
//! abstraction signatures, and the bit budget they share.
use {super::WatchError, std::fmt};

/// the bits of the native word which holds a watch's tag and payload
pub const WORD_BITS: u32 = u64::BITS;
/// the bits for `WatchType`
pub const TYPE_BITS: u32 = 2;
/// the bits left for a clause offset, or any other payload
pub const EFFECTIVELY_USABLE_BITS: u32 = WORD_BITS - TYPE_BITS;
/// the bits reserved for binary watch flags in the payload
pub const FLAG_BITS: u32 = 2;
/// the bits left for the id of a binary clause
pub const BIN_ID_BITS: u32 = EFFECTIVELY_USABLE_BITS - FLAG_BITS;

const _: () = assert!(TYPE_BITS + FLAG_BITS + BIN_ID_BITS == WORD_BITS);

/// Offset of a long clause in the (external) clause arena.
///
/// ```
/// use splr_watch::types::*;
/// assert!(ClOffset::try_from(ClOffset::MAX.to_u64()).is_ok());
/// assert!(ClOffset::try_from(ClOffset::MAX.to_u64() + 1).is_err());
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClOffset {
    ordinal: u64,
}

impl ClOffset {
    /// the largest representable offset. The arena never hands it out.
    pub const MAX: ClOffset = ClOffset {
        ordinal: (1 << EFFECTIVELY_USABLE_BITS) - 1,
    };
    #[inline]
    pub fn to_u64(self) -> u64 {
        self.ordinal
    }
    /// unpack from a watch payload, which always fits.
    #[inline]
    pub(crate) fn from_payload(payload: u64) -> Self {
        debug_assert!(payload <= ClOffset::MAX.ordinal);
        ClOffset { ordinal: payload }
    }
}

impl TryFrom<u64> for ClOffset {
    type Error = WatchError;
    #[inline]
    fn try_from(ordinal: u64) -> Result<Self, Self::Error> {
        if ClOffset::MAX.ordinal < ordinal {
            return Err(WatchError::OffsetOverflow(ordinal));
        }
        Ok(ClOffset { ordinal })
    }
}

impl TryFrom<usize> for ClOffset {
    type Error = WatchError;
    #[inline]
    fn try_from(u: usize) -> Result<Self, Self::Error> {
        ClOffset::try_from(u as u64)
    }
}

impl From<ClOffset> for u64 {
    #[inline]
    fn from(o: ClOffset) -> u64 {
        o.ordinal
    }
}

impl fmt::Debug for ClOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}O", self.ordinal)
    }
}

impl fmt::Display for ClOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ordinal)
    }
}

/// Identifier of a binary clause, as used by proof logging.
///
/// ```
/// use splr_watch::types::*;
/// assert_eq!(BinId::MAX.to_u64(), (1 << 60) - 1);
/// assert!(BinId::try_from(1u64 << 60).is_err());
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BinId {
    ordinal: u64,
}

impl BinId {
    /// the largest id which fits in a binary watch.
    pub const MAX: BinId = BinId {
        ordinal: (1 << BIN_ID_BITS) - 1,
    };
    #[inline]
    pub fn to_u64(self) -> u64 {
        self.ordinal
    }
    #[inline]
    pub(crate) fn from_payload(bits: u64) -> Self {
        debug_assert!(bits <= BinId::MAX.ordinal);
        BinId { ordinal: bits }
    }
}

impl TryFrom<u64> for BinId {
    type Error = WatchError;
    #[inline]
    fn try_from(ordinal: u64) -> Result<Self, Self::Error> {
        if BinId::MAX.ordinal < ordinal {
            return Err(WatchError::IdOverflow(ordinal));
        }
        Ok(BinId { ordinal })
    }
}

impl From<BinId> for u64 {
    #[inline]
    fn from(id: BinId) -> u64 {
        id.ordinal
    }
}

impl fmt::Debug for BinId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}B", self.ordinal)
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ordinal)
    }
}

/// Abstraction signature of a clause's literal set; opaque here.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ClauseAbstraction(pub u32);

impl From<u32> for ClauseAbstraction {
    #[inline]
    fn from(bits: u32) -> Self {
        ClauseAbstraction(bits)
    }
}

impl From<ClauseAbstraction> for u32 {
    #[inline]
    fn from(abst: ClauseAbstraction) -> u32 {
        abst.0
    }
}

impl fmt::Display for ClauseAbstraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
