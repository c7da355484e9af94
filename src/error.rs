use core::fmt;

#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The index provided to the function is past the end of the palette
    IndexOutOfRange(usize),
    /// The slice provided to the function is too small
    BufferTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange(index) => write!(f, "Index {} out of range", index),
            Self::BufferTooSmall => write!(f, "Buffer is too small"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl core::error::Error for Error {}
