//! Canonical YAML rendering for `.fleek.yml`.
//!
//! The typed model is first lowered to a generic [`serde_yaml::Value`] tree
//! and then written out by hand so the layout never depends on serializer
//! defaults:
//!
//! - mappings are block mappings, keys in model order
//! - sequences are block sequences, one `- item` per line, never `[a, b]`
//! - nesting is indented by two spaces
//! - empty sequences and mappings are written as a bare `key:` (null)
//!
//! Scalars are quoted by `serde_yaml` so that strings like `"true"` or `"1"`
//! survive a round trip.
use std::fmt::Write as _;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::Result;

const INDENT: usize = 2;

/// Render `value` as canonical YAML.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as YAML.
pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    let tree = serde_yaml::to_value(value)?;
    let mut out = String::new();
    match &tree {
        Value::Mapping(map) => write_mapping(&mut out, map, 0)?,
        Value::Sequence(seq) => write_sequence(&mut out, seq, 0)?,
        other => {
            out.push_str(&scalar(other)?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn pad(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat_n(' ', indent));
}

fn write_mapping(out: &mut String, map: &Mapping, indent: usize) -> Result<()> {
    // Keys come out in the order serde produced them: declaration order for
    // the model, sorted for `aliases`. They are not re-sorted here.
    for (key, value) in map {
        pad(out, indent);
        write_entry(out, key, value, indent)?;
    }
    Ok(())
}

/// Write `key:` followed by `value`; the caller has already indented.
fn write_entry(out: &mut String, key: &Value, value: &Value, indent: usize) -> Result<()> {
    out.push_str(&scalar(key)?);
    out.push(':');
    write_value(out, value, indent)
}

/// Write the value that follows a `key:` or `-` marker.
fn write_value(out: &mut String, value: &Value, indent: usize) -> Result<()> {
    match value {
        Value::Sequence(seq) if !seq.is_empty() => {
            out.push('\n');
            write_sequence(out, seq, indent + INDENT)
        }
        Value::Mapping(map) if !map.is_empty() => {
            out.push('\n');
            write_mapping(out, map, indent + INDENT)
        }
        Value::Tagged(tagged) => write_value(out, &tagged.value, indent),
        Value::Sequence(_) | Value::Mapping(_) | Value::Null => {
            out.push('\n');
            Ok(())
        }
        other => {
            out.push(' ');
            out.push_str(&scalar(other)?);
            out.push('\n');
            Ok(())
        }
    }
}

fn write_sequence(out: &mut String, seq: &[Value], indent: usize) -> Result<()> {
    for item in seq {
        pad(out, indent);
        out.push('-');
        match item {
            // The first key shares the `- ` line; the rest align under it.
            Value::Mapping(map) if !map.is_empty() => {
                for (i, (key, value)) in map.iter().enumerate() {
                    if i == 0 {
                        out.push(' ');
                    } else {
                        pad(out, indent + INDENT);
                    }
                    write_entry(out, key, value, indent + INDENT)?;
                }
            }
            other => write_value(out, other, indent)?,
        }
    }
    Ok(())
}

/// Render a single scalar on one line.
fn scalar(value: &Value) -> Result<String> {
    let text = serde_yaml::to_string(value)?;
    let text = text.strip_suffix('\n').unwrap_or(&text);
    // Multi-line strings come back as block scalars; keep them on one line.
    match value {
        Value::String(s) if text.contains('\n') => Ok(double_quoted(s)),
        _ => Ok(text.to_string()),
    }
}

fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
