//! NDJSON output for `--json`.
//!
//! One JSON object per line on stdout, each tagged with an `event` field.
//! Event shapes live in [`events`].

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

/// Write `event` as one line to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    write_typed_event(&mut io::stdout().lock(), event)
}

/// Write `event` as one line to `out`.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
