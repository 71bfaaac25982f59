use crate::compat::String;

/// Errors that can occur while decoding a query string or resolving a charset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A `%` not followed by two hexadecimal digits
    InvalidPercentEncoding {
        /// Byte offset of the offending `%`
        offset: usize,
    },
    /// A run of `%XX` escapes that is not valid text in the target charset
    InvalidByteSequence {
        /// Name of the charset the bytes were decoded with
        charset: &'static str,
        /// Byte offset of the first `%` of the run
        offset: usize,
    },
    /// Charset label not known to the transcoding layer
    UnsupportedCharset(String),
}

impl QueryError {
    /// Whether this error came from percent-decoding (as opposed to charset lookup).
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPercentEncoding { .. } | Self::InvalidByteSequence { .. }
        )
    }

    /// Byte offset into the decoded input, if the error has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::InvalidPercentEncoding { offset } | Self::InvalidByteSequence { offset, .. } => {
                Some(*offset)
            }
            Self::UnsupportedCharset(_) => None,
        }
    }

    /// Rebase the offset of a component-level error onto the enclosing input.
    #[must_use]
    pub(crate) fn shift(self, base: usize) -> Self {
        match self {
            Self::InvalidPercentEncoding { offset } => Self::InvalidPercentEncoding {
                offset: offset + base,
            },
            Self::InvalidByteSequence { charset, offset } => Self::InvalidByteSequence {
                charset,
                offset: offset + base,
            },
            other @ Self::UnsupportedCharset(_) => other,
        }
    }
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPercentEncoding { offset } => {
                write!(f, "Invalid percent encoding at offset {offset}")
            }
            Self::InvalidByteSequence { charset, offset } => {
                write!(f, "Invalid {charset} byte sequence at offset {offset}")
            }
            Self::UnsupportedCharset(label) => write!(f, "Unsupported charset: {label}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueryError {}

/// Result type for query parsing operations
pub type Result<T> = core::result::Result<T, QueryError>;
