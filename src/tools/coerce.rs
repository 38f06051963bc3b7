//! Best-effort argument coercion against a tool descriptor.
//!
//! The descriptor is advisory, not a strict filter: arguments it does not
//! declare pass through unchanged, unrecognized type tags are skipped, and
//! a failed conversion keeps the original value. Coercion never fails the
//! call — a bad value surfaces later as an execution error instead.

use crate::tools::descriptor::ToolDescriptor;
use crate::types::ArgMap;
use serde_json::{Number, Value};
use tracing::debug;

/// Recognized coercion targets and their type-tag spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetType {
    Int,
    Float,
    Bool,
    Str,
}

impl TargetType {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "int" | "integer" => Some(Self::Int),
            "float" | "number" => Some(Self::Float),
            "bool" | "boolean" => Some(Self::Bool),
            "str" | "string" => Some(Self::Str),
            _ => None,
        }
    }
}

/// Convert each argument to its descriptor-declared type, in place.
///
/// Idempotent: a second pass over already-coerced arguments is a no-op.
pub fn coerce_arguments(arguments: &mut ArgMap, descriptor: &ToolDescriptor) {
    for (name, value) in arguments.iter_mut() {
        let Some(tag) = descriptor.type_tag(name) else {
            continue;
        };
        let Some(target) = TargetType::from_tag(tag) else {
            continue;
        };
        if let Some(converted) = convert(value, target) {
            debug!("Converting argument '{}' to {}", name, tag);
            *value = converted;
        }
    }
}

/// `None` means the value already satisfies the target type, or the
/// conversion failed and the original must be kept.
fn convert(value: &Value, target: TargetType) -> Option<Value> {
    match target {
        TargetType::Int => to_int(value),
        TargetType::Float => to_float(value),
        TargetType::Bool => to_bool(value),
        TargetType::Str => to_str(value),
    }
}

fn to_int(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => None,
        // Fractional numbers truncate toward zero.
        Value::Number(n) => n.as_f64().map(|f| Value::from(f.trunc() as i64)),
        Value::Bool(b) => Some(Value::from(i64::from(*b))),
        Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
        _ => None,
    }
}

fn to_float(value: &Value) -> Option<Value> {
    let widened = match value {
        Value::Number(n) => {
            if !n.is_i64() && !n.is_u64() {
                return None; // already floating-point
            }
            n.as_f64()
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    widened.and_then(Number::from_f64).map(Value::Number)
}

fn to_bool(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(_) => None,
        other => Some(Value::Bool(truthy(other))),
    }
}

fn to_str(value: &Value) -> Option<Value> {
    match value {
        Value::String(_) => None,
        other => Some(Value::String(other.to_string())),
    }
}

/// Default truthiness of a JSON value: zero numbers, empty strings, empty
/// collections and null are false; everything else is true. Note that the
/// non-empty string "false" is therefore true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
