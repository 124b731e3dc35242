use std::fmt;
use std::sync::Arc;

use crate::error::{Error, ScanResult};

/// The text a scanner searches in.
///
/// Cheap to clone: the content is shared. Positions given to and returned by the scanner
/// are byte offsets into this content.
///
/// Match positions are reported as `u32`, so buffers longer than [`ScanBuffer::MAX_LEN`]
/// bytes can be created but scanning them returns [`Error::BufferTooLarge`].
#[derive(Clone, PartialEq, Eq)]
pub struct ScanBuffer {
    content: Arc<str>,
}

impl ScanBuffer {
    /// `u32::MAX` is kept for capture groups that did not participate
    pub const MAX_LEN: usize = u32::MAX as usize - 1;

    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            content: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<&str> for ScanBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ScanBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Debug for ScanBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScanBuffer({:?})", self.content)
    }
}

pub(crate) fn ensure_scannable(len: usize) -> ScanResult<()> {
    if len > ScanBuffer::MAX_LEN {
        return Err(Error::BufferTooLarge { len });
    }
    Ok(())
}
