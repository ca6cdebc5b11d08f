extern crate splr_watch;
use splr_watch::{cdb::*, types::*};

macro_rules! lit {
    ($x:expr) => {
        Lit::from($x as i32)
    };
}

fn offset(o: u64) -> ClOffset {
    ClOffset::try_from(o).unwrap()
}

#[test]
fn round_trip_every_kind() {
    let c = Watch::new_clause(offset(1 << 40), lit!(-17));
    assert_eq!((c.offset(), c.blocker()), (offset(1 << 40), lit!(-17)));
    let a = Watch::new_clause(offset(3), ClauseAbstraction(0x8000_0001));
    assert_eq!((a.offset(), a.abst()), (offset(3), ClauseAbstraction(0x8000_0001)));
    let b = Watch::try_new_binary(lit!(5), true, 12345).unwrap();
    assert_eq!(b.other(), lit!(5));
    assert!(b.is_red());
    assert_eq!(b.bin_id().to_u64(), 12345);
    let n = Watch::new_bnn(42, BnnPropType::Neg);
    assert_eq!((n.bnn(), n.bnn_prop_type()), (42, BnnPropType::Neg));
    let i = Watch::new_idx(7);
    assert_eq!(i.idx(), 7);
}

#[test]
fn mutators_keep_watch_type() {
    let mut c = Watch::new_clause(offset(9), lit!(1));
    c.set_blocker(lit!(2));
    assert_eq!(c.watch_type(), WatchType::Clause);
    let mut b = Watch::try_new_binary(lit!(1), true, 4).unwrap();
    for step in 0..4 {
        match step {
            0 => b.set_other(lit!(-1)),
            1 => b.mark_bin(),
            2 => b.clear_red(),
            _ => b.unmark_bin(),
        }
        assert_eq!(b.watch_type(), WatchType::Binary);
        assert_eq!(b.bin_id().to_u64(), 4);
    }
}

#[test]
fn clear_red_only_goes_down() {
    let mut irred = Watch::try_new_binary(lit!(8), false, 1).unwrap();
    irred.clear_red();
    assert!(!irred.is_red());
    let mut red = Watch::try_new_binary(lit!(8), true, 1).unwrap();
    red.clear_red();
    let once = red;
    red.clear_red();
    assert_eq!(red, once);
    assert_eq!(red, irred);
}

#[test]
fn bit_budget_boundary() {
    let max = BinId::MAX.to_u64();
    let w = Watch::try_new_binary(lit!(-1), true, max).unwrap();
    assert_eq!(w.bin_id().to_u64(), max);
    assert!(w.is_red());
    let mut w = w;
    w.mark_bin();
    assert_eq!(w.bin_id().to_u64(), max);
    assert_eq!(
        Watch::try_new_binary(lit!(-1), true, max + 1),
        Err(WatchError::IdOverflow(max + 1))
    );
    let c = Watch::new_clause(ClOffset::MAX, lit!(2));
    assert_eq!(c.offset(), ClOffset::MAX);
    assert!(ClOffset::try_from(ClOffset::MAX.to_u64() + 1).is_err());
}

#[test]
fn equality_of_clause_watches() {
    let w1 = Watch::new_clause(offset(5), lit!(3));
    let w2 = Watch::new_clause(offset(5), lit!(3));
    assert_eq!(w1, w2);
    assert_ne!(w1, Watch::new_clause(offset(6), lit!(3)));
    assert_ne!(w1, Watch::new_clause(offset(5), lit!(-3)));
}

#[test]
fn occurrence_pair_binary_first() {
    let a = lit!(1);
    let p1 = OccurClause::new(a, Watch::try_new_binary(lit!(-99), false, 0).unwrap());
    let p2 = OccurClause::new(a, Watch::new_clause(offset(5), a));
    assert!(p1.precedes(&p2));
    assert!(!p2.precedes(&p1));
}
