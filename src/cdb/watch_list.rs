use {
    super::{sorter, BnnPropType, ClauseData, Watch, WatchType},
    crate::types::*,
};

/// API for 'watcher list' like `register_clause`, `detach`, `detach_clause` and so on.
pub trait WatchListIF {
    /// make a new long clause watch, and add it to this watcher list.
    fn register_clause<D: ClauseData>(&mut self, offset: ClOffset, data: D);
    /// make a new binary clause watch, and add it to this watcher list.
    fn register_binary(&mut self, other: Lit, red: bool, id: BinId);
    fn register_bnn(&mut self, idx: u32, role: BnnPropType);
    fn register_idx(&mut self, idx: u32);
    /// remove *n*-th watch from the watcher list. *O(1)* operation.
    fn detach(&mut self, n: usize);
    /// remove the watch of a long clause at `offset`. *O(n)* operation.
    fn detach_clause(&mut self, offset: ClOffset) -> bool;
    /// remove the watch of a binary clause. *O(n)* operation.
    fn detach_binary(&mut self, other: Lit, red: bool, id: BinId) -> bool;
    /// return the position of the watch of a long clause at `offset`.
    fn find_clause(&self, offset: ClOffset) -> Option<usize>;
    /// update the blocker of the long clause at `offset`.
    fn update_blocker(&mut self, offset: ClOffset, l: Lit) -> bool;
    /// remove marked binary watches keeping the order of the rest.
    /// Return the number of removed watches.
    fn sweep_marked_bins(&mut self) -> usize;
    /// sort in the binary-first order. Clause and bnn watches keep their order.
    fn sort_bin_first(&mut self);
    /// return `true` if the list is in the binary-first order.
    fn is_bin_first(&self) -> bool;
    /// return the number of watches of a kind.
    fn count_of(&self, t: WatchType) -> usize;
}

impl WatchListIF for Vec<Watch> {
    fn register_clause<D: ClauseData>(&mut self, offset: ClOffset, data: D) {
        self.push(Watch::new_clause(offset, data));
    }
    fn register_binary(&mut self, other: Lit, red: bool, id: BinId) {
        self.push(Watch::new_binary(other, red, id));
    }
    fn register_bnn(&mut self, idx: u32, role: BnnPropType) {
        self.push(Watch::new_bnn(idx, role));
    }
    fn register_idx(&mut self, idx: u32) {
        self.push(Watch::new_idx(idx));
    }
    fn detach(&mut self, n: usize) {
        self.swap_remove(n);
    }
    fn detach_clause(&mut self, offset: ClOffset) -> bool {
        let found = self.delete_unstable(|w| w.is_clause() && w.offset() == offset);
        #[cfg(feature = "boundary_check")]
        assert!(found, "detach_clause failed to seek {offset}");
        found
    }
    fn detach_binary(&mut self, other: Lit, red: bool, id: BinId) -> bool {
        let found = self.delete_unstable(|w| {
            w.is_binary() && w.other() == other && w.is_red() == red && w.bin_id() == id
        });
        #[cfg(feature = "boundary_check")]
        assert!(found, "detach_binary failed to seek {other}");
        found
    }
    fn find_clause(&self, offset: ClOffset) -> Option<usize> {
        self.iter()
            .position(|w| w.is_clause() && w.offset() == offset)
    }
    /// This O(n) function is used only in simplification. So the cost can be ignored.
    fn update_blocker(&mut self, offset: ClOffset, l: Lit) -> bool {
        if let Some(i) = self.find_clause(offset) {
            self[i].set_blocker(l);
            return true;
        }
        false
    }
    fn sweep_marked_bins(&mut self) -> usize {
        let len = self.len();
        self.retain(|w| !(w.is_binary() && w.is_bin_marked()));
        len - self.len()
    }
    fn sort_bin_first(&mut self) {
        self.sort_by(sorter::bin_first_order);
    }
    fn is_bin_first(&self) -> bool {
        self.windows(2).all(|p| !sorter::bin_first_less(&p[1], &p[0]))
    }
    fn count_of(&self, t: WatchType) -> usize {
        self.iter().filter(|w| w.watch_type() == t).count()
    }
}
