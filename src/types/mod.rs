//! Module `types' provides various building blocks, including
//! some common traits.

/// clause offsets, binary clause ids and abstraction signatures
pub mod cid;
/// methods on flags used in binary watches
pub mod flags;
/// methods on literals
pub mod literal;

pub use self::{cid::*, flags::*, literal::*};

use std::{fmt, fs::File};

/// API for O(n) deletion from a list, providing `delete_unstable`.
pub trait Delete<T> {
    /// *O(n)* item deletion protocol.
    /// Return `true` if an item was found and removed.
    fn delete_unstable<F>(&mut self, filter: F) -> bool
    where
        F: FnMut(&T) -> bool;
}

impl<T> Delete<T> for Vec<T> {
    fn delete_unstable<F>(&mut self, filter: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        if let Some(i) = self.iter().position(filter) {
            self.swap_remove(i);
            return true;
        }
        false
    }
}

/// Errors about building, loading or saving watches.
#[derive(Debug, Eq, PartialEq)]
pub enum WatchError {
    // A clause offset doesn't fit in `EFFECTIVELY_USABLE_BITS`.
    OffsetOverflow(u64),
    // A binary clause id doesn't fit in `BIN_ID_BITS`.
    IdOverflow(u64),
    // '0' or a value beyond the literal encoding.
    InvalidLiteral,
    // Exceptions caused by file operations
    IOError,
    // A line of a watch list dump which can't be read; the number is 1-origin.
    ParseError(usize),
    // A list violates the binary-first order
    Unsorted,
    // Bad command line option
    InvalidOption(String),
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for WatchError {}

impl From<std::io::Error> for WatchError {
    fn from(_: std::io::Error) -> Self {
        WatchError::IOError
    }
}

/// A Return type used by fallible functions in this crate.
pub type WatchResult<T> = Result<T, WatchError>;

#[derive(Debug, Default)]
pub struct Logger {
    dest: Option<File>,
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Dump({:?})", self.dest)
    }
}

impl Logger {
    pub fn new<T: AsRef<str>>(fname: T) -> Self {
        Logger {
            dest: File::create(fname.as_ref()).ok(),
        }
    }
    /// return `true` if messages go to a file.
    pub fn is_file(&self) -> bool {
        self.dest.is_some()
    }
    pub fn dump(&mut self, mes: String) -> WatchResult<()> {
        use std::io::Write;
        if let Some(f) = &mut self.dest {
            f.write_all(&mes.into_bytes())?;
            f.write_all(b"\n")?;
        } else {
            println!("{mes}");
        }
        Ok(())
    }
}
