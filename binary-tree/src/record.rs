use core::fmt;

#[cfg(feature = "std")]
use type_layout::TypeLayout;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, byteorder::native_endian::I32};

use crate::Error;

/// The on-disk representation of a single node.
///
/// A tree file is a plain sequence of records in pre-order: the node itself,
/// then its first subtree, then its second subtree. Each record holds three
/// native-endian `i32`s:
///
/// * the node's value
/// * 1 if a first child follows, 0 otherwise
/// * 1 if a second child follows, 0 otherwise
///
/// There is no header, so a file is only readable on a host with the same
/// byte order as the one that wrote it.
#[repr(C)]
#[derive(Clone, IntoBytes, KnownLayout, Immutable, FromBytes)]
#[cfg_attr(feature = "std", derive(TypeLayout))]
pub struct Record {
    value: I32,
    has_first: I32,
    has_second: I32,
}

impl Record {
    pub const SIZE: usize = size_of::<Self>();

    pub fn new(value: i32, has_first: bool, has_second: bool) -> Self {
        Self {
            value: I32::new(value),
            has_first: I32::new(has_first as i32),
            has_second: I32::new(has_second as i32),
        }
    }

    /// Split one record off the front of `bytes`.
    pub fn read_from(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        Self::read_from_prefix(bytes).map_err(|_| Error::TruncatedRecord)
    }

    pub fn value(&self) -> i32 {
        self.value.get()
    }

    pub fn has_first(&self) -> Result<bool, Error> {
        flag(self.has_first.get())
    }

    pub fn has_second(&self) -> Result<bool, Error> {
        flag(self.has_second.get())
    }
}

fn flag(raw: i32) -> Result<bool, Error> {
    match raw {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(Error::InvalidChildFlag(other)),
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record {{ bytes: {:?}, value: {}, first: {}, second: {} }}",
            self.as_bytes(),
            self.value.get(),
            self.has_first.get(),
            self.has_second.get()
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record | value: {}, first: {}, second: {}",
            self.value.get(),
            self.has_first.get(),
            self.has_second.get()
        )
    }
}
