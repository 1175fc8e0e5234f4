use core::fmt::{self, Write};

use heapless::String;

/// Maximum number of bytes kept from a fault message.
pub const MESSAGE_CAPACITY: usize = 255;

/// The sticky fault slot carried by every node.
///
/// A fault is raised by an operation that detected a local problem and stays
/// raised until it is explicitly cleared. Messages longer than
/// [`MESSAGE_CAPACITY`] bytes are truncated on a character boundary.
#[derive(Clone, Default)]
pub struct Fault {
    raised: bool,
    message: String<MESSAGE_CAPACITY>,
}

impl Fault {
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Raise the fault, replacing any previous message.
    pub fn raise(&mut self, message: &str) {
        self.raise_with(message);
    }

    /// Raise the fault with the `Display` output of `reason`.
    pub fn raise_with(&mut self, reason: impl fmt::Display) {
        self.raised = true;
        self.message.clear();
        // Overflowing the buffer only means the message got truncated
        let _ = write!(Truncating(&mut self.message), "{reason}");
    }

    /// Lower the flag. The message is left in place until overwritten.
    pub fn lower(&mut self) {
        self.raised = false;
    }

    pub(crate) fn clear_message(&mut self) {
        self.message.clear();
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raised {
            write!(f, "Fault({:?})", self.message.as_str())
        } else {
            f.write_str("Fault(none)")
        }
    }
}

/// Writes as many whole characters as fit, then reports an error.
struct Truncating<'a>(&'a mut String<MESSAGE_CAPACITY>);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.0.push(c).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
