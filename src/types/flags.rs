use bitflags::bitflags;

bitflags! {
    /// Flags in the low bits of a binary [`Watch`](`crate::cdb::Watch`) payload.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FlagBin: u64 {
        /// a binary clause is redundant (learnt) and removable.
        const RED          = 0b0000_0001;
        /// a binary watch is marked by a simplification pass for later removal.
        const MARKED       = 0b0000_0010;
    }
}

impl FlagBin {
    /// the flags part of a binary watch payload.
    #[inline]
    pub(crate) fn of_payload(payload: u64) -> Self {
        FlagBin::from_bits_truncate(payload)
    }
}
