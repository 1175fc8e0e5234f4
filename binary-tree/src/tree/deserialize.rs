use tracing::debug;

use crate::{Error, record::Record};

use super::{BinaryTree, Builder};

impl BinaryTree {
    /// Rebuild a tree from the records written by `to_bytes`.
    ///
    /// The input must hold exactly one tree: running out of bytes before
    /// every flagged child was read, a flag that is neither 0 nor 1, or bytes
    /// left over after the root's subtree are all errors.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut rest = bytes;
        let mut builder = Builder::new();

        let tree = loop {
            let (record, tail) = Record::read_from(rest)?;
            rest = tail;

            let node = BinaryTree::new(record.value());
            if let Some(tree) = builder.push(node, record.has_first()?, record.has_second()?) {
                break tree;
            }
        };

        if !rest.is_empty() {
            return Err(Error::TrailingBytes(rest.len()));
        }

        debug!(bytes = bytes.len(), nodes = tree.size(), "decoded tree");
        Ok(tree)
    }
}

#[cfg(feature = "std")]
mod file {
    use std::{
        fs::File,
        io::{BufReader, Read},
        path::Path,
    };

    use tracing::{debug, warn};

    use crate::Error;

    use super::BinaryTree;

    impl BinaryTree {
        /// Read a whole tree file from `reader`.
        pub fn read_from(mut reader: impl Read) -> Result<Self, Error> {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).map_err(|e| {
                warn!(error = %e, "could not read tree");
                Error::ReadFailed
            })?;

            Self::from_bytes(&bytes)
        }

        /// Load the tree stored at `path`, reporting failures as a [`Result`].
        pub fn try_load(path: impl AsRef<Path>) -> Result<Self, Error> {
            let path = path.as_ref();
            debug!(path = %path.display(), "loading tree");

            let file = File::open(path).map_err(|e| {
                warn!(path = %path.display(), error = %e, "could not open tree file");
                Error::CannotOpenForReading
            })?;

            Self::read_from(BufReader::new(file))
        }

        /// Load the tree stored at `path`.
        ///
        /// This never fails outright. If the file cannot be opened or does not
        /// hold a valid tree, the result is a single node of value 0 with the
        /// failure recorded on it, see [`has_error`](Self::has_error).
        pub fn load(path: impl AsRef<Path>) -> Self {
            match Self::try_load(path) {
                Ok(tree) => tree,
                Err(error) => {
                    let mut root = BinaryTree::new(0);
                    root.record(error);
                    root
                }
            }
        }
    }
}
