use {
    crate::types::*,
    std::{fmt, hash},
};

/// Kind of a [`Watch`]; it occupies exactly `TYPE_BITS` bits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WatchType {
    /// a long clause stored in the clause arena
    Clause = 0,
    /// a binary clause stored in the watch itself
    Binary = 1,
    /// a literal of a thresholded linear constraint
    Bnn = 2,
    /// an index into an external array
    Idx = 3,
}

impl WatchType {
    const MASK: u64 = (1 << TYPE_BITS) - 1;
    #[inline]
    fn from_tag(word: u64) -> Self {
        match word & WatchType::MASK {
            0 => WatchType::Clause,
            1 => WatchType::Binary,
            2 => WatchType::Bnn,
            _ => WatchType::Idx,
        }
    }
}

/// The role of a literal in a thresholded linear constraint.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BnnPropType {
    Pos = 0,
    Neg = 1,
    Out = 2,
}

impl BnnPropType {
    #[inline]
    fn from_payload(payload: u64) -> Self {
        debug_assert!(payload <= BnnPropType::Out as u64);
        match payload {
            0 => BnnPropType::Pos,
            1 => BnnPropType::Neg,
            _ => BnnPropType::Out,
        }
    }
}

impl fmt::Display for BnnPropType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            BnnPropType::Pos => "pos",
            BnnPropType::Neg => "neg",
            BnnPropType::Out => "out",
        })
    }
}

/// What the first word of a long clause watch holds.
/// The choice is made at the call site; a watch doesn't remember it.
pub trait ClauseData: Copy {
    fn encode(self) -> u32;
    fn decode(raw: u32) -> Self;
}

/// a blocking literal, a cached literal of the clause
impl ClauseData for Lit {
    #[inline]
    fn encode(self) -> u32 {
        self.to_raw()
    }
    #[inline]
    fn decode(raw: u32) -> Self {
        Lit::from_raw(raw)
    }
}

/// an abstraction signature of the clause
impl ClauseData for ClauseAbstraction {
    #[inline]
    fn encode(self) -> u32 {
        self.0
    }
    #[inline]
    fn decode(raw: u32) -> Self {
        ClauseAbstraction(raw)
    }
}

/// An element of a watch list, packed into 12 bytes.
///
/// - `data1`: a blocking literal or an abstraction (clause), the other
///   literal (binary), or an index (bnn and idx)
/// - `word`: `WatchType` in the lowest `TYPE_BITS` bits, and the payload
///   above them: a clause offset (clause), `FlagBin` and `BinId` (binary),
///   or `BnnPropType` (bnn)
///
/// Accessors for a specific kind assume the kind. It is checked by
/// `debug_assert` only, or by `assert` under feature `boundary_check`.
///
/// ```
/// use splr_watch::{cdb::*, types::*};
/// let id = BinId::try_from(12345u64).unwrap();
/// let w = Watch::new_binary(Lit::from(-3i32), true, id);
/// assert!(w.is_binary());
/// assert_eq!(w.other(), Lit::from(-3i32));
/// assert!(w.is_red());
/// assert_eq!(w.bin_id(), id);
/// ```
#[derive(Clone, Copy)]
#[repr(C, packed(4))]
pub struct Watch {
    data1: u32,
    word: u64,
}

impl Default for Watch {
    /// an invalid clause watch; its offset is never used by the arena.
    fn default() -> Watch {
        Watch::pack(u32::MAX, WatchType::Clause, ClOffset::MAX.to_u64())
    }
}

impl PartialEq for Watch {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for Watch {}

impl hash::Hash for Watch {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl fmt::Display for Watch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.watch_type() {
            WatchType::Clause => write!(f, "Clause offset {}", self.offset()),
            WatchType::Binary => write!(f, "Bin lit {} (red: {} )", self.other(), self.is_red()),
            WatchType::Bnn => write!(f, "BNN {} ({})", self.bnn(), self.bnn_prop_type()),
            WatchType::Idx => write!(f, "Idx {}", self.idx()),
        }
    }
}

impl fmt::Debug for Watch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.watch_type() {
            WatchType::Clause => write!(f, "W({:?}, data:{:#x})", self.offset(), { self.data1 }),
            WatchType::Binary => write!(
                f,
                "W({:?}, {:?}, {:?})",
                self.other(),
                self.bin_id(),
                self.flags()
            ),
            WatchType::Bnn => write!(f, "W(bnn:{}, {})", self.bnn(), self.bnn_prop_type()),
            WatchType::Idx => write!(f, "W(idx:{})", self.idx()),
        }
    }
}

impl Watch {
    #[inline]
    fn pack(data1: u32, t: WatchType, payload: u64) -> Watch {
        debug_assert!(payload >> EFFECTIVELY_USABLE_BITS == 0);
        Watch {
            data1,
            word: (payload << TYPE_BITS) | t as u64,
        }
    }
    #[inline]
    fn payload(&self) -> u64 {
        self.word >> TYPE_BITS
    }
    #[inline]
    fn set_payload(&mut self, payload: u64) {
        debug_assert!(payload >> EFFECTIVELY_USABLE_BITS == 0);
        self.word = (payload << TYPE_BITS) | (self.word & WatchType::MASK);
    }
    /// return both words; equal watches have equal raw words.
    #[inline]
    pub fn raw(&self) -> (u32, u64) {
        (self.data1, self.word)
    }

    //
    //## constructors
    //

    /// make a watch for a long clause at `offset`. `data` is a blocking
    /// literal (`Lit`) or an abstraction signature (`ClauseAbstraction`).
    #[inline]
    pub fn new_clause<D: ClauseData>(offset: ClOffset, data: D) -> Watch {
        Watch::pack(data.encode(), WatchType::Clause, offset.to_u64())
    }
    /// make a watch for a binary clause `(self, other)`.
    #[inline]
    pub fn new_binary(other: Lit, red: bool, id: BinId) -> Watch {
        let flags = if red { FlagBin::RED } else { FlagBin::empty() };
        Watch::pack(
            other.to_raw(),
            WatchType::Binary,
            (id.to_u64() << FLAG_BITS) | flags.bits(),
        )
    }
    /// make a watch for a binary clause after checking `id` fits.
    pub fn try_new_binary(other: Lit, red: bool, id: u64) -> WatchResult<Watch> {
        Ok(Watch::new_binary(other, red, BinId::try_from(id)?))
    }
    /// make a watch referring to an element of an external array.
    #[inline]
    pub fn new_idx(idx: u32) -> Watch {
        Watch::pack(idx, WatchType::Idx, 0)
    }
    /// make a watch for the `idx`-th literal of a thresholded constraint.
    #[inline]
    pub fn new_bnn(idx: u32, role: BnnPropType) -> Watch {
        Watch::pack(idx, WatchType::Bnn, role as u64)
    }

    //
    //## kind
    //

    #[inline]
    pub fn watch_type(&self) -> WatchType {
        WatchType::from_tag(self.word)
    }
    #[inline]
    pub fn is_clause(&self) -> bool {
        self.watch_type() == WatchType::Clause
    }
    #[inline]
    pub fn is_binary(&self) -> bool {
        self.watch_type() == WatchType::Binary
    }
    #[inline]
    pub fn is_bnn(&self) -> bool {
        self.watch_type() == WatchType::Bnn
    }
    #[inline]
    pub fn is_idx(&self) -> bool {
        self.watch_type() == WatchType::Idx
    }

    //
    //## long clause
    //

    /// return the first word of a long clause watch, read as `D`.
    #[inline]
    pub fn clause_data<D: ClauseData>(&self) -> D {
        watch_assert!(self.is_clause(), "{self:?} isn't a clause watch");
        D::decode(self.data1)
    }
    /// return the blocking literal of a long clause watch.
    #[inline]
    pub fn blocker(&self) -> Lit {
        self.clause_data::<Lit>()
    }
    /// return the abstraction signature of a long clause watch.
    #[inline]
    pub fn abst(&self) -> ClauseAbstraction {
        self.clause_data::<ClauseAbstraction>()
    }
    /// update the blocking literal of a long clause watch.
    #[inline]
    pub fn set_blocker(&mut self, blocker: Lit) {
        watch_assert!(self.is_clause(), "{self:?} isn't a clause watch");
        self.data1 = blocker.to_raw();
    }
    #[inline]
    pub fn offset(&self) -> ClOffset {
        watch_assert!(self.is_clause(), "{self:?} isn't a clause watch");
        ClOffset::from_payload(self.payload())
    }

    //
    //## binary clause
    //

    /// return the other literal of a binary clause.
    #[inline]
    pub fn other(&self) -> Lit {
        watch_assert!(self.is_binary(), "{self:?} isn't a binary watch");
        Lit::from_raw(self.data1)
    }
    #[inline]
    pub fn set_other(&mut self, lit: Lit) {
        watch_assert!(self.is_binary(), "{self:?} isn't a binary watch");
        self.data1 = lit.to_raw();
    }
    #[inline]
    fn flags(&self) -> FlagBin {
        FlagBin::of_payload(self.payload())
    }
    #[inline]
    pub fn is_red(&self) -> bool {
        watch_assert!(self.is_binary(), "{self:?} isn't a binary watch");
        self.flags().contains(FlagBin::RED)
    }
    #[inline]
    pub fn bin_id(&self) -> BinId {
        watch_assert!(self.is_binary(), "{self:?} isn't a binary watch");
        BinId::from_payload(self.payload() >> FLAG_BITS)
    }
    /// make a redundant binary clause irreducible. There's no way back.
    #[inline]
    pub fn clear_red(&mut self) {
        watch_assert!(self.is_binary(), "{self:?} isn't a binary watch");
        self.set_payload(self.payload() & !FlagBin::RED.bits());
    }
    #[inline]
    pub fn mark_bin(&mut self) {
        watch_assert!(self.is_binary(), "{self:?} isn't a binary watch");
        self.set_payload(self.payload() | FlagBin::MARKED.bits());
    }
    #[inline]
    pub fn unmark_bin(&mut self) {
        watch_assert!(self.is_binary(), "{self:?} isn't a binary watch");
        self.set_payload(self.payload() & !FlagBin::MARKED.bits());
    }
    #[inline]
    pub fn is_bin_marked(&self) -> bool {
        watch_assert!(self.is_binary(), "{self:?} isn't a binary watch");
        self.flags().contains(FlagBin::MARKED)
    }

    //
    //## bnn and idx
    //

    #[inline]
    pub fn idx(&self) -> u32 {
        watch_assert!(self.is_idx(), "{self:?} isn't an idx watch");
        self.data1
    }
    #[inline]
    pub fn bnn(&self) -> u32 {
        watch_assert!(self.is_bnn(), "{self:?} isn't a bnn watch");
        self.data1
    }
    #[inline]
    pub fn bnn_prop_type(&self) -> BnnPropType {
        watch_assert!(self.is_bnn(), "{self:?} isn't a bnn watch");
        BnnPropType::from_payload(self.payload())
    }

    /// decode into a [`WatchView`], reading a long clause's first word as `D`.
    pub fn view<D: ClauseData>(&self) -> WatchView<D> {
        match self.watch_type() {
            WatchType::Clause => WatchView::Clause {
                offset: self.offset(),
                data: self.clause_data::<D>(),
            },
            WatchType::Binary => WatchView::Binary {
                other: self.other(),
                red: self.is_red(),
                marked: self.is_bin_marked(),
                id: self.bin_id(),
            },
            WatchType::Bnn => WatchView::Bnn {
                idx: self.bnn(),
                role: self.bnn_prop_type(),
            },
            WatchType::Idx => WatchView::Idx { idx: self.idx() },
        }
    }
}

/// Unpacked form of a [`Watch`]. Each kind carries only its own fields,
/// so no field can be read under a wrong kind.
///
/// ```
/// use splr_watch::{cdb::*, types::*};
/// let offset = ClOffset::try_from(40u64).unwrap();
/// let w = Watch::new_clause(offset, Lit::from(2i32));
/// match w.view::<Lit>() {
///     WatchView::Clause { offset: o, data } => {
///         assert_eq!(o, offset);
///         assert_eq!(data, Lit::from(2i32));
///     }
///     _ => panic!("not a clause"),
/// }
/// assert_eq!(Watch::from(w.view::<Lit>()), w);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WatchView<D: ClauseData = Lit> {
    Clause {
        offset: ClOffset,
        data: D,
    },
    Binary {
        other: Lit,
        red: bool,
        marked: bool,
        id: BinId,
    },
    Bnn {
        idx: u32,
        role: BnnPropType,
    },
    Idx {
        idx: u32,
    },
}

impl<D: ClauseData> From<WatchView<D>> for Watch {
    fn from(view: WatchView<D>) -> Watch {
        match view {
            WatchView::Clause { offset, data } => Watch::new_clause(offset, data),
            WatchView::Binary {
                other,
                red,
                marked,
                id,
            } => {
                let mut w = Watch::new_binary(other, red, id);
                if marked {
                    w.mark_bin();
                }
                w
            }
            WatchView::Bnn { idx, role } => Watch::new_bnn(idx, role),
            WatchView::Idx { idx } => Watch::new_idx(idx),
        }
    }
}
