use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::{self, Write};

/// Write the flattened walk as a JSON array of strings, indented four
/// spaces, with a trailing newline. Written at most once per walk, and
/// only after the whole walk has succeeded.
pub fn write_flat_list<W: Write>(writer: &mut W, values: &[String]) -> io::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
    values.serialize(&mut serializer)?;
    writer.write_all(b"\n")
}
