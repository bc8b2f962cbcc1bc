use crate::types::ArgValue;
use std::fmt::Write;

/// Placeholder for collection arguments
pub const COLLECTION_PLACEHOLDER: &str = "[Array]";

/// Placeholder for null arguments
pub const NULL_PLACEHOLDER: &str = "NULL";

/// Placeholder for arguments of unrecognized kind
pub const UNKNOWN_PLACEHOLDER: &str = "[?]";

/// Render a single argument the way it appears inside a call site.
///
/// Text is quoted but not escaped, so embedded quotes pass through as-is.
#[must_use]
pub fn summarize_arg(value: &ArgValue) -> String {
    let mut out = String::new();
    write_arg(&mut out, value);
    out
}

/// Render all arguments joined by `,` (no space)
#[must_use]
pub fn summarize_args(args: &[ArgValue]) -> String {
    let mut out = String::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        write_arg(&mut out, arg);
    }
    out
}

fn write_arg(out: &mut String, value: &ArgValue) {
    match value {
        ArgValue::Boolean(true) => out.push_str("true"),
        ArgValue::Boolean(false) => out.push_str("false"),
        ArgValue::Text(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        // Writing into a String cannot fail
        ArgValue::Number(number) => {
            let _ = write!(out, "{number}");
        }
        ArgValue::Collection => out.push_str(COLLECTION_PLACEHOLDER),
        ArgValue::Structured(type_name) => {
            out.push('[');
            out.push_str(type_name);
            out.push(']');
        }
        ArgValue::Null => out.push_str(NULL_PLACEHOLDER),
        ArgValue::Unknown => out.push_str(UNKNOWN_PLACEHOLDER),
    }
}
