//! Text form of a watch list, one watch per line:
//!
//! ```text
//! c <offset> <blocker>        a long clause with a blocking literal
//! a <offset> <abstraction>    a long clause with an abstraction signature
//! b <other> <0|1> <id> [m]    a binary clause; '1' for redundant, 'm' if marked
//! n <idx> <pos|neg|out>       a literal of a thresholded constraint
//! i <idx>                     an index
//! ```
//!
//! Literals are in DIMACS form. Empty lines and lines starting with `#` are skipped.
//! A long clause watch whose first word isn't a literal, like the default
//! watch, is always written in the `a` form.
use {
    super::{BnnPropType, Watch, WatchType},
    crate::types::*,
    std::{
        fs::File,
        io::{BufRead, BufReader, BufWriter, Write},
        path::Path,
    },
};

/// parse a line. Return `Ok(None)` for an empty or comment line.
///
/// ```
/// use splr_watch::{cdb::*, types::*};
/// let w = parse_watch("b -3 1 12345").unwrap().unwrap();
/// assert_eq!(w, Watch::try_new_binary(Lit::from(-3i32), true, 12345).unwrap());
/// assert_eq!(parse_watch("# comment"), Ok(None));
/// ```
pub fn parse_watch(line: &str) -> WatchResult<Option<Watch>> {
    let mut iter = line.split_whitespace();
    let Some(head) = iter.next() else {
        return Ok(None);
    };
    if head.starts_with('#') {
        return Ok(None);
    }
    let args = iter.collect::<Vec<&str>>();
    let num = |i: usize| -> WatchResult<u64> {
        args.get(i)
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or(WatchError::ParseError(0))
    };
    let index = |i: usize| -> WatchResult<u32> {
        args.get(i)
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or(WatchError::ParseError(0))
    };
    let literal = |i: usize| -> WatchResult<Lit> {
        let x = args
            .get(i)
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or(WatchError::ParseError(0))?;
        Lit::try_from(x)
    };
    let w = match (head, args.len()) {
        ("c", 2) => Watch::new_clause(ClOffset::try_from(num(0)?)?, literal(1)?),
        ("a", 2) => Watch::new_clause(ClOffset::try_from(num(0)?)?, ClauseAbstraction(index(1)?)),
        ("b", 3) | ("b", 4) => {
            let red = match args[1] {
                "0" => false,
                "1" => true,
                _ => return Err(WatchError::ParseError(0)),
            };
            let mut w = Watch::try_new_binary(literal(0)?, red, num(2)?)?;
            match args.get(3) {
                None => (),
                Some(&"m") => w.mark_bin(),
                Some(_) => return Err(WatchError::ParseError(0)),
            }
            w
        }
        ("n", 2) => {
            let role = match args[1] {
                "pos" => BnnPropType::Pos,
                "neg" => BnnPropType::Neg,
                "out" => BnnPropType::Out,
                _ => return Err(WatchError::ParseError(0)),
            };
            Watch::new_bnn(index(0)?, role)
        }
        ("i", 1) => Watch::new_idx(index(0)?),
        _ => return Err(WatchError::ParseError(0)),
    };
    Ok(Some(w))
}

/// format a watch in the form `parse_watch` reads.
/// A long clause watch is written with its blocker if `with_abst` is `false`
/// and its first word is a literal.
pub fn format_watch(w: &Watch, with_abst: bool) -> String {
    match w.watch_type() {
        WatchType::Clause => match dimacs(w.blocker()) {
            Some(l) if !with_abst => format!("c {} {}", w.offset(), l),
            _ => format!("a {} {}", w.offset(), u32::from(w.abst())),
        },
        WatchType::Binary => format!(
            "b {} {} {}{}",
            i32::from(w.other()),
            w.is_red() as u8,
            w.bin_id(),
            if w.is_bin_marked() { " m" } else { "" },
        ),
        WatchType::Bnn => format!("n {} {}", w.bnn(), w.bnn_prop_type()),
        WatchType::Idx => format!("i {}", w.idx()),
    }
}

/// API for saving and loading watch lists in the text form.
pub trait WatchListDumpIF: Sized {
    /// read from a string.
    fn from_text(text: &str) -> WatchResult<Self>;
    /// read from a file.
    fn load(path: &Path) -> WatchResult<Self>;
    /// write to a file; long clauses are written with their blockers.
    fn save(&self, path: &Path) -> WatchResult<()>;
    /// write to a file; long clauses are written with their abstraction signatures.
    fn save_with_abst(&self, path: &Path) -> WatchResult<()>;
    /// long clauses are written with their blockers.
    fn dump_to_string(&self) -> String;
    /// long clauses are written with their abstraction signatures.
    fn dump_with_abst(&self) -> String;
}

impl WatchListDumpIF for Vec<Watch> {
    fn from_text(text: &str) -> WatchResult<Self> {
        let mut ws = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if let Some(w) = parse_watch(line).map_err(|e| locate(e, i + 1))? {
                ws.push(w);
            }
        }
        Ok(ws)
    }
    fn load(path: &Path) -> WatchResult<Self> {
        let fs = File::open(path)?;
        let mut reader = BufReader::new(fs);
        let mut buf = String::new();
        let mut ws = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    line_no += 1;
                    if let Some(w) = parse_watch(&buf).map_err(|e| locate(e, line_no))? {
                        ws.push(w);
                    }
                }
                Err(_) => return Err(WatchError::IOError),
            }
        }
        Ok(ws)
    }
    fn save(&self, path: &Path) -> WatchResult<()> {
        write_to(path, &self.dump_to_string())
    }
    fn save_with_abst(&self, path: &Path) -> WatchResult<()> {
        write_to(path, &self.dump_with_abst())
    }
    fn dump_to_string(&self) -> String {
        dump(self, false)
    }
    fn dump_with_abst(&self) -> String {
        dump(self, true)
    }
}

fn dump(ws: &[Watch], with_abst: bool) -> String {
    ws.iter()
        .map(|w| format!("{}\n", format_watch(w, with_abst)))
        .collect::<String>()
}

fn write_to(path: &Path, text: &str) -> WatchResult<()> {
    let mut buf = BufWriter::new(File::create(path)?);
    buf.write_all(text.as_bytes())?;
    buf.flush()?;
    Ok(())
}

/// the DIMACS form of `l` if `parse_watch` can read it back.
fn dimacs(l: Lit) -> Option<i32> {
    let raw = l.to_raw();
    (2 <= raw && (raw >> 1) < Lit::UNDEF.to_raw() >> 1).then(|| i32::from(l))
}

/// attach the line number to a syntax error.
fn locate(e: WatchError, line_no: usize) -> WatchError {
    match e {
        WatchError::ParseError(_) => WatchError::ParseError(line_no),
        e => e,
    }
}
