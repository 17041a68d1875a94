// SPDX-License-Identifier: Apache-2.0

//! Indented, one-node-per-line rendering of a parsed tree.

use std::fmt::{self, Write};

use rdjson::{Member, ParseError, Value};

const RULE_CODE: &str = "==================== Code =======================";
const RULE_RESULT: &str = "=================== Result ======================";
const RULE_DETAIL: &str = "=================== Detail ======================";
const RULE_END: &str = "=================================================";

fn indent<W: Write>(out: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_char('\t')?;
    }
    Ok(())
}

fn write_member<W: Write>(out: &mut W, member: &Member, depth: usize) -> fmt::Result {
    indent(out, depth)?;
    writeln!(out, "MemberNode({}) {{", member.key)?;
    write_tree(out, &member.value, depth + 1)?;
    indent(out, depth)?;
    writeln!(out, "}}")
}

/// Writes `value` and its children, one tab per nesting level.
pub fn write_tree<W: Write>(out: &mut W, value: &Value, depth: usize) -> fmt::Result {
    indent(out, depth)?;
    match value {
        Value::Bool(b) => writeln!(out, "BoolNode({b})"),
        Value::Null => writeln!(out, "NULLNode"),
        Value::Number(n) => writeln!(out, "NumNode({n:.6})"),
        Value::String(s) => writeln!(out, "StringNode({s})"),
        Value::Array(elements) => {
            writeln!(out, "ArrayNode {{")?;
            for element in elements {
                write_tree(out, element, depth + 1)?;
            }
            indent(out, depth)?;
            writeln!(out, "}}")
        }
        Value::Object(members) => {
            writeln!(out, "ObjectNode {{")?;
            for member in members {
                write_member(out, member, depth + 1)?;
            }
            indent(out, depth)?;
            writeln!(out, "}}")
        }
    }
}

pub fn render_tree(value: &Value) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_tree(&mut out, value, 0)?;
    Ok(out)
}

/// Writes the full report block for one document: its text, the outcome,
/// then either the tree or the error flags.
///
/// An empty document succeeds with nothing to dump.
pub fn write_report<W: Write>(
    out: &mut W,
    code: &str,
    result: &Result<Option<Value>, ParseError>,
) -> fmt::Result {
    writeln!(out, "{RULE_CODE}")?;
    writeln!(out, "{code}")?;
    writeln!(out, "{RULE_RESULT}")?;
    writeln!(out, "{}", if result.is_ok() { "Success" } else { "Failure" })?;
    writeln!(out, "{RULE_DETAIL}")?;
    match result {
        Ok(Some(value)) => write_tree(out, value, 0)?,
        Ok(None) => {}
        Err(e) => {
            writeln!(out, "ERROR_FLAGS: {:02x} ({})", e.flags().bits(), e.flags())?;
            writeln!(out, "{e}")?;
        }
    }
    writeln!(out, "{RULE_END}")
}
