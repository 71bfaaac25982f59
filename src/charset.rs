use crate::compat::ToString;
use crate::error::{QueryError, Result};
use encoding_rs::Encoding;

/// Byte encoding used to move between text and percent-escaped bytes.
///
/// [`Charset::NONE`] is the pass-through charset: nothing is encoded on build
/// and nothing is decoded on parse, so a query string is carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Charset(Option<&'static Encoding>);

impl Charset {
    /// Pass-through: no transcoding and no escaping.
    pub const NONE: Self = Self(None);

    /// UTF-8, the usual charset for query strings.
    pub fn utf_8() -> Self {
        Self(Some(encoding_rs::UTF_8))
    }

    /// Resolve a charset from a WHATWG encoding label such as `"utf-8"`,
    /// `"gbk"` or `"latin1"` (case-insensitive, surrounding whitespace ignored).
    ///
    /// Labels of the `replacement` encoding and the UTF-16 labels fail with
    /// [`QueryError::UnsupportedCharset`]: neither can encode to the bytes it
    /// decodes from.
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label_no_replacement(label.as_bytes())
            .and_then(|encoding| Self::try_from(encoding).ok())
            .ok_or_else(|| QueryError::UnsupportedCharset(label.to_string()))
    }

    /// Canonical name of the charset, or `None` for pass-through.
    pub fn name(self) -> Option<&'static str> {
        self.0.map(Encoding::name)
    }

    /// Check if this is the pass-through charset
    pub fn is_none(self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn encoding(self) -> Option<&'static Encoding> {
        self.0
    }
}

/// Only encodings whose encoder writes the same encoding are accepted
impl TryFrom<&'static Encoding> for Charset {
    type Error = QueryError;

    fn try_from(encoding: &'static Encoding) -> Result<Self> {
        if encoding.output_encoding() != encoding {
            return Err(QueryError::UnsupportedCharset(encoding.name().to_string()));
        }
        Ok(Self(Some(encoding)))
    }
}
