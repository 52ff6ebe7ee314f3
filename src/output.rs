//! JSON emission.
//!
//! Documents are written on a single line with `", "` between items and `": "` between keys and
//! values, followed by a newline. Only printable ASCII is written raw; everything else in a string
//! becomes a `\uXXXX` escape.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::error::{Error, Result};

/// The object written to stderr on failure.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&Error> for ErrorReport {
    fn from(err: &Error) -> ErrorReport {
        ErrorReport { error: err.to_string() }
    }
}

/// Compact layout with a space after every separator and ASCII-only strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    #[inline]
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;

        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&bytes[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }

        writer.write_all(&bytes[start..])
    }
}

/// Write `value` as one JSON document followed by a newline, then flush.
pub fn write_json<W, T>(mut writer: W, value: &T) -> Result
where
    W: Write,
    T: ?Sized + Serialize,
{
    {
        let mut ser = Serializer::with_formatter(&mut writer, SpacedFormatter);
        value.serialize(&mut ser).map_err(io::Error::from)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write `{"error": ...}` for the given error.
pub fn write_error<W>(writer: W, err: &Error) -> Result
where
    W: Write,
{
    write_json(writer, &ErrorReport::from(err))
}
