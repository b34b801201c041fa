//! Canonical rendering of JSON documents
//!
//! Drift detection compares raw bytes, so the renderer has to be
//! deterministic: keys in sorted order, one entry per line, indentation
//! and line terminator from the resolved style, and exactly one trailing
//! line terminator. Sorting is done here rather than relying on map
//! iteration order, so the output is stable no matter how the value was
//! built.

use serde_json::Value;

use crate::style::StyleOptions;

/// Render a JSON value in canonical form.
pub fn canonical_string(value: &Value, style: &StyleOptions) -> String {
    let mut out = String::new();
    write_value(&mut out, value, style, 0);
    out.push_str(style.line_ending());
    out
}

fn write_value(out: &mut String, value: &Value, style: &StyleOptions, depth: usize) {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by_key(|(key, _)| key.as_str());

            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(style.line_ending());
                push_indent(out, style, depth + 1);
                out.push_str(&escape(key));
                out.push_str(": ");
                write_value(out, item, style, depth + 1);
            }
            out.push_str(style.line_ending());
            push_indent(out, style, depth);
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(style.line_ending());
                push_indent(out, style, depth + 1);
                write_value(out, item, style, depth + 1);
            }
            out.push_str(style.line_ending());
            push_indent(out, style, depth);
            out.push(']');
        }
        Value::String(text) => out.push_str(&escape(text)),
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn push_indent(out: &mut String, style: &StyleOptions, depth: usize) {
    let unit = style.indent_unit();
    for _ in 0..depth {
        out.push_str(&unit);
    }
}

fn escape(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_default()
}
