use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Encode sets name the characters that get ESCAPED.
// Based on https://www.rfc-editor.org/rfc/rfc3986#section-2

/// Everything but the RFC 3986 unreserved set: ALPHA / DIGIT / "-" / "." / "_" / "~"
pub const STRICT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Query value set
/// Unreserved + sub-delims (minus `&`) + `:`, `@`, `/`, `?` stay literal
pub const QUERY_VALUE_SET: &AsciiSet = &STRICT_SET
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Query key set
/// `QUERY_VALUE_SET` + `=`, which would otherwise end the key
pub const QUERY_KEY_SET: &AsciiSet = &QUERY_VALUE_SET.add(b'=');

/// Policy deciding which ASCII characters are written literally by the encoder.
#[derive(Clone, Copy)]
pub struct SafeChars {
    name: &'static str,
    escaped: &'static AsciiSet,
}

impl SafeChars {
    /// Lenient policy for query values.
    ///
    /// Unreserved characters, `+`, the sub-delimiters other than `&`, and
    /// `:` `@` `/` `?` are left as they are, so content a caller already
    /// escaped by hand is not escaped twice.
    pub const LENIENT: Self = Self {
        name: "lenient",
        escaped: QUERY_VALUE_SET,
    };

    /// Lenient policy for query keys: [`SafeChars::LENIENT`] with `=` escaped.
    pub const LENIENT_KEY: Self = Self {
        name: "lenient-key",
        escaped: QUERY_KEY_SET,
    };

    /// Only the RFC 3986 unreserved characters are safe.
    pub const STRICT: Self = Self {
        name: "strict",
        escaped: STRICT_SET,
    };

    /// A custom policy escaping exactly the characters in `escaped`
    /// (plus every non-ASCII byte, which is never safe).
    pub const fn escaping(name: &'static str, escaped: &'static AsciiSet) -> Self {
        Self { name, escaped }
    }

    /// Key and value policies for a build pass.
    pub(crate) fn for_build(strict: bool) -> (Self, Self) {
        if strict {
            (Self::STRICT, Self::STRICT)
        } else {
            (Self::LENIENT_KEY, Self::LENIENT)
        }
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    /// Check if `c` is written literally under this policy
    pub fn is_safe(self, c: char) -> bool {
        if !c.is_ascii() {
            return false;
        }
        let byte = [c as u8];
        percent_encoding::percent_encode(&byte, self.escaped)
            .next()
            .is_some_and(|chunk| chunk.len() == 1)
    }

    pub(crate) fn escaped(self) -> &'static AsciiSet {
        self.escaped
    }
}

impl Default for SafeChars {
    fn default() -> Self {
        Self::LENIENT
    }
}

impl core::fmt::Debug for SafeChars {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("SafeChars").field(&self.name).finish()
    }
}

/// Hex digit values, 0xFF for anything that is not a hex digit
const HEX_TABLE: [u8; 256] = {
    let mut table = [0xFFu8; 256];

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = i - b'0';
        i += 1;
    }
    let mut i = b'a';
    while i <= b'f' {
        table[i as usize] = i - b'a' + 10;
        table[(i - 32) as usize] = i - b'a' + 10;
        i += 1;
    }

    table
};

/// Decode the two hex digits following the `%` at `pos`
pub fn decode_hex_pair(bytes: &[u8], pos: usize) -> Option<u8> {
    let hi = HEX_TABLE[*bytes.get(pos + 1)? as usize];
    let lo = HEX_TABLE[*bytes.get(pos + 2)? as usize];
    if hi == 0xFF || lo == 0xFF {
        return None;
    }
    Some((hi << 4) | lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::CONTROLS;

    #[test]
    fn test_strict_only_unreserved() {
        for c in ":/?#[]@!$&'()*+,;= %\"<>".chars() {
            assert!(!SafeChars::STRICT.is_safe(c), "{c:?} should be escaped");
        }
        for c in "azAZ09-._~".chars() {
            assert!(SafeChars::STRICT.is_safe(c));
        }
    }

    #[test]
    fn test_lenient_keeps_sub_delims() {
        for c in "!$'()*+,;=:@/?".chars() {
            assert!(SafeChars::LENIENT.is_safe(c), "{c:?} should be literal");
        }
        for c in "& #%[]\"<>{}|\\^`".chars() {
            assert!(!SafeChars::LENIENT.is_safe(c), "{c:?} should be escaped");
        }
        assert!(!SafeChars::LENIENT_KEY.is_safe('='));
        assert!(SafeChars::LENIENT_KEY.is_safe('+'));
    }

    #[test]
    fn test_non_ascii_never_safe() {
        assert!(!SafeChars::LENIENT.is_safe('é'));
        assert!(!SafeChars::escaping("controls", CONTROLS).is_safe('中'));
        assert!(SafeChars::escaping("controls", CONTROLS).is_safe(' '));
    }

    #[test]
    fn test_decode_hex_pair() {
        assert_eq!(decode_hex_pair(b"%2B", 0), Some(0x2B));
        assert_eq!(decode_hex_pair(b"x%c3", 1), Some(0xC3));
        assert_eq!(decode_hex_pair(b"%Fz", 0), None);
        assert_eq!(decode_hex_pair(b"%F", 0), None);
        assert_eq!(decode_hex_pair(b"%", 0), None);
    }
}
