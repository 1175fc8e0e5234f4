#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

extern crate alloc;

use core::fmt;

pub mod fault;
pub mod record;
pub mod tree;

pub use tree::BinaryTree;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    NoFirstChild,
    NoSecondChild,
    FirstChildExists,
    SecondChildExists,
    NoFirstChildToRemove,
    NoSecondChildToRemove,
    CannotOpenForWriting,
    CannotOpenForReading,
    WriteFailed,
    ReadFailed,
    /// The input ended in the middle of a record, or before a flagged child.
    TruncatedRecord,
    /// A child flag held something other than 0 or 1.
    InvalidChildFlag(i32),
    /// Bytes left over once the root's subtree was fully read.
    TrailingBytes(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoFirstChild => f.write_str("tree has no first child"),
            Error::NoSecondChild => f.write_str("tree has no second child"),
            Error::FirstChildExists => f.write_str("first child already exists"),
            Error::SecondChildExists => f.write_str("second child already exists"),
            Error::NoFirstChildToRemove => f.write_str("no first child to remove"),
            Error::NoSecondChildToRemove => f.write_str("no second child to remove"),
            Error::CannotOpenForWriting => f.write_str("cannot open file for writing"),
            Error::CannotOpenForReading => f.write_str("cannot open file for reading"),
            Error::WriteFailed => f.write_str("cannot write to file"),
            Error::ReadFailed => f.write_str("cannot read from file"),
            Error::TruncatedRecord => f.write_str("tree file ends in the middle of a record"),
            Error::InvalidChildFlag(flag) => {
                write!(f, "invalid child flag {flag} in tree file, expected 0 or 1")
            }
            Error::TrailingBytes(len) => {
                write!(f, "{len} unexpected bytes after the end of the tree")
            }
        }
    }
}

impl core::error::Error for Error {}
