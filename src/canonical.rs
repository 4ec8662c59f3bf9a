//! Canonical JSON serialization and reasoning-chain hashing.
//!
//! The ledger's tamper evidence rests on hashing a canonical textual form:
//! object keys are sorted lexicographically, arrays preserve element order,
//! and strings use standard JSON escaping, so the same logical value always
//! produces the same bytes. Reasoning chains are canonicalized as JSON
//! arrays, which makes the digest order-sensitive by construction.

use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt::Write;

use crate::errors::{VanguardError, VanguardResult};

/// Canonicalize a JSON value into its deterministic string form.
pub fn canonicalize_json(value: &Value) -> Result<String, String> {
    let mut output = String::new();
    serialize_value(value, &mut output)?;
    Ok(output)
}

/// SHA-256 digest (lowercase hex) of a reasoning chain's canonical form.
///
/// The same ordered list of steps always yields the same digest; reordering
/// the steps yields a different one.
pub fn hash_reasoning_chain(steps: &[String]) -> VanguardResult<String> {
    let value = Value::Array(steps.iter().map(|s| Value::String(s.clone())).collect());
    let canonical =
        canonicalize_json(&value).map_err(|message| VanguardError::internal(message))?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

fn serialize_value(value: &Value, output: &mut String) -> Result<(), String> {
    match value {
        Value::Object(map) => serialize_object(map, output)?,
        Value::Array(arr) => serialize_array(arr, output)?,
        Value::String(s) => serialize_string(s, output)?,
        Value::Number(n) => serialize_number(n, output)?,
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Null => output.push_str("null"),
    }
    Ok(())
}

/// Serialize a JSON object with lexicographically sorted keys.
fn serialize_object(map: &serde_json::Map<String, Value>, output: &mut String) -> Result<(), String> {
    output.push('{');

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_string(key, output)?;
        output.push(':');
        serialize_value(&map[*key], output)?;
    }

    output.push('}');
    Ok(())
}

fn serialize_array(arr: &[Value], output: &mut String) -> Result<(), String> {
    output.push('[');
    for (i, item) in arr.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_value(item, output)?;
    }
    output.push(']');
    Ok(())
}

fn serialize_string(s: &str, output: &mut String) -> Result<(), String> {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\u{08}' => output.push_str("\\b"),
            '\u{0C}' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            ch if ch.is_control() => {
                write!(output, "\\u{:04x}", ch as u32).map_err(|e| e.to_string())?;
            }
            ch => output.push(ch),
        }
    }
    output.push('"');
    Ok(())
}

fn serialize_number(num: &serde_json::Number, output: &mut String) -> Result<(), String> {
    if let Some(i) = num.as_i64() {
        write!(output, "{}", i).map_err(|e| e.to_string())?;
    } else if let Some(u) = num.as_u64() {
        write!(output, "{}", u).map_err(|e| e.to_string())?;
    } else if let Some(f) = num.as_f64() {
        if f.is_nan() || f.is_infinite() {
            return Err("non-finite numbers are not allowed in JSON".to_string());
        }
        if f.fract() == 0.0 && f.abs() < 1e15 && f.abs() >= 1e-4 {
            write!(output, "{}", f as i64).map_err(|e| e.to_string())?;
        } else {
            write!(output, "{}", f).map_err(|e| e.to_string())?;
        }
    } else {
        return Err("invalid number format".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_keys_are_sorted() {
        let input = json!({
            "z": 1,
            "a": 2,
            "m": 3
        });

        let canonical = canonicalize_json(&input).unwrap();
        assert_eq!(canonical, r#"{"a":2,"m":3,"z":1}"#);
    }

    #[test]
    fn arrays_preserve_order() {
        let input = json!({
            "array": [3, 1, 2],
            "another": ["z", "a", "m"]
        });

        let canonical = canonicalize_json(&input).unwrap();
        assert_eq!(canonical, r#"{"another":["z","a","m"],"array":[3,1,2]}"#);
    }

    #[test]
    fn strings_are_escaped() {
        let input = json!({
            "quotes": "He said \"Hello\"",
            "newline": "line1\nline2"
        });

        let canonical = canonicalize_json(&input).unwrap();
        assert_eq!(
            canonical,
            r#"{"newline":"line1\nline2","quotes":"He said \"Hello\""}"#
        );
    }

    #[test]
    fn chain_hash_is_deterministic() {
        let chain = vec![
            "Matched invoice to purchase order.".to_string(),
            "Vendor appears in payment history.".to_string(),
        ];

        let first = hash_reasoning_chain(&chain).unwrap();
        let second = hash_reasoning_chain(&chain).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn chain_hash_is_order_sensitive() {
        let forward = vec!["step one".to_string(), "step two".to_string()];
        let reversed = vec!["step two".to_string(), "step one".to_string()];

        assert_ne!(
            hash_reasoning_chain(&forward).unwrap(),
            hash_reasoning_chain(&reversed).unwrap()
        );
    }

    #[test]
    fn empty_chain_hashes() {
        let digest = hash_reasoning_chain(&[]).unwrap();
        assert_eq!(digest.len(), 64);
    }
}
