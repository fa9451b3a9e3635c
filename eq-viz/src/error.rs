use core::fmt;

/// Errors raised by edits on an [`Equalizer`](crate::equalizer::Equalizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqError {
    /// The band index does not exist in the current layout.
    BandOutOfRange { index: usize, len: usize },
    /// No preset is registered under the requested name.
    UnknownPreset,
}

impl fmt::Display for EqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EqError::BandOutOfRange { index, len } => {
                write!(f, "band index {} out of range for {} bands", index, len)
            }
            EqError::UnknownPreset => write!(f, "unknown preset"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EqError {}
