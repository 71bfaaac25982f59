use crate::character_sets::{SafeChars, decode_hex_pair};
use crate::charset::Charset;
use crate::compat::{Cow, String, Vec};
use crate::error::{QueryError, Result};
use encoding_rs::Encoding;

/// Percent-encode `input` under `charset`, leaving characters that `safe`
/// allows as they are.
///
/// With [`Charset::NONE`] the input is returned untouched. Every byte of a
/// character that is not safe is escaped, even when the charset puts ASCII
/// range bytes inside a multi-byte sequence. Escapes use uppercase hex digits.
pub fn percent_encode<'a>(input: &'a str, charset: Charset, safe: SafeChars) -> Cow<'a, str> {
    let Some(encoding) = charset.encoding() else {
        return Cow::Borrowed(input);
    };

    if is_byte_transparent(encoding, input) {
        return percent_encoding::percent_encode(input.as_bytes(), safe.escaped()).into();
    }

    let mut buffer = String::with_capacity(input.len() * 3);
    encode_runs_into(&mut buffer, input, encoding, safe);
    Cow::Owned(buffer)
}

/// Write the percent-encoded form of `input` directly to `buffer`
pub fn percent_encode_into(buffer: &mut String, input: &str, charset: Charset, safe: SafeChars) {
    let Some(encoding) = charset.encoding() else {
        buffer.push_str(input);
        return;
    };

    if is_byte_transparent(encoding, input) {
        buffer.reserve(input.len());
        for chunk in percent_encoding::percent_encode(input.as_bytes(), safe.escaped()) {
            buffer.push_str(chunk);
        }
        return;
    }

    encode_runs_into(buffer, input, encoding, safe);
}

/// The charset bytes of `input` are its UTF-8 bytes, and no multi-byte
/// sequence contains an ASCII byte
fn is_byte_transparent(encoding: &'static Encoding, input: &str) -> bool {
    encoding == encoding_rs::UTF_8 || input.is_ascii()
}

/// Escape runs of unsafe characters as whole units, so that decoding a run
/// of escapes gives back exactly those characters
fn encode_runs_into(
    buffer: &mut String,
    input: &str,
    encoding: &'static Encoding,
    safe: SafeChars,
) {
    let mut run_start = None;
    for (pos, c) in input.char_indices() {
        if safe.is_safe(c) {
            if let Some(start) = run_start.take() {
                escape_all_into(buffer, &input[start..pos], encoding);
            }
            buffer.push(c);
        } else if run_start.is_none() {
            run_start = Some(pos);
        }
    }
    if let Some(start) = run_start {
        escape_all_into(buffer, &input[start..], encoding);
    }
}

fn escape_all_into(buffer: &mut String, text: &str, encoding: &'static Encoding) {
    let bytes = encoding.encode(text).0;
    buffer.reserve(bytes.len() * 3);
    for &byte in bytes.iter() {
        buffer.push_str(percent_encoding::percent_encode_byte(byte));
    }
}

/// Decode `%XX` escapes in `input` under `charset`.
///
/// Consecutive escapes are collected and decoded together, so a multi-byte
/// character may be spread over several of them. `+` is kept as `+`.
/// With [`Charset::NONE`] the input is returned untouched.
pub fn percent_decode<'a>(input: &'a str, charset: Charset) -> Result<Cow<'a, str>> {
    let Some(encoding) = charset.encoding() else {
        return Ok(Cow::Borrowed(input));
    };

    let bytes = input.as_bytes();
    let Some(first) = memchr::memchr(b'%', bytes) else {
        return Ok(Cow::Borrowed(input));
    };

    let mut output = String::with_capacity(input.len());
    output.push_str(&input[..first]);

    let mut run = EscapeRun::new(encoding);
    let mut pos = first;
    while pos < bytes.len() {
        if bytes[pos] == b'%' {
            let byte = decode_hex_pair(bytes, pos)
                .ok_or(QueryError::InvalidPercentEncoding { offset: pos })?;
            run.push(pos, byte);
            pos += 3;
            continue;
        }

        run.flush_into(&mut output)?;

        // Escapes are ASCII, so both ends of this slice are char boundaries
        let end = memchr::memchr(b'%', &bytes[pos..]).map_or(bytes.len(), |offset| pos + offset);
        output.push_str(&input[pos..end]);
        pos = end;
    }
    run.flush_into(&mut output)?;

    Ok(Cow::Owned(output))
}

/// Bytes from consecutive `%XX` escapes waiting to be decoded as one unit
struct EscapeRun {
    encoding: &'static Encoding,
    start: usize,
    bytes: Vec<u8>,
}

impl EscapeRun {
    fn new(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            start: 0,
            bytes: Vec::new(),
        }
    }

    fn push(&mut self, offset: usize, byte: u8) {
        if self.bytes.is_empty() {
            self.start = offset;
        }
        self.bytes.push(byte);
    }

    fn flush_into(&mut self, output: &mut String) -> Result<()> {
        if self.bytes.is_empty() {
            return Ok(());
        }

        let text = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(&self.bytes)
            .ok_or(QueryError::InvalidByteSequence {
                charset: self.encoding.name(),
                offset: self.start,
            })?;
        output.push_str(&text);
        self.bytes.clear();
        Ok(())
    }
}
