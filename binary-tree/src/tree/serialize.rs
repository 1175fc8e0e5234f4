use std::{fs::File, io::Write, path::Path};

use aligned_vec::AVec;
use tracing::{debug, warn};
use zerocopy::IntoBytes;

use crate::{Error, record::Record};

use super::BinaryTree;

impl BinaryTree {
    /// Encode the tree as a sequence of [`Record`]s in pre-order.
    ///
    /// The buffer is aligned for `i32`, so it can be reinterpreted as the
    /// native integer triples it is made of.
    pub fn to_bytes(&self) -> AVec<u8> {
        let mut bytes = AVec::<u8>::with_capacity(align_of::<i32>(), self.size() * Record::SIZE);

        for node in self.iter() {
            let record = Record::new(node.value(), node.first().is_some(), node.second().is_some());
            bytes.extend_from_slice(record.as_bytes());
        }

        bytes
    }

    /// Write the encoded tree to `writer`.
    pub fn write_to(&self, mut writer: impl Write) -> Result<(), Error> {
        let bytes = self.to_bytes();
        writer
            .write_all(&bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| {
                warn!(error = %e, "could not write tree");
                Error::WriteFailed
            })?;

        debug!(bytes = bytes.len(), "encoded tree");
        Ok(())
    }

    /// Save the tree to `path`, replacing any existing file.
    ///
    /// Every fault in the tree is cleared first. If the file cannot be
    /// created, [`Error::CannotOpenForWriting`] is recorded on this node and
    /// nothing is written.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        self.clear_errors();

        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not create tree file");
                return Err(self.record(Error::CannotOpenForWriting));
            }
        };

        debug!(path = %path.display(), nodes = self.size(), "saving tree");
        self.write_to(file).map_err(|error| self.record(error))
    }
}
