/// text form of watch lists
mod dump;
/// methods on `OccurClause`
mod occur;
/// binary-first order of watch lists
mod sorter;
/// methods on `Watch`
mod watch;
/// methods on watch lists
mod watch_list;

pub use self::{
    dump::{format_watch, parse_watch, WatchListDumpIF},
    occur::{OccurClause, OccurListIF},
    sorter::{bin_first_less, bin_first_order},
    watch::{BnnPropType, ClauseData, Watch, WatchType, WatchView},
    watch_list::WatchListIF,
};
