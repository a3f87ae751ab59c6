//! Playback-position input coercion for the progress workflow.
//!
//! Clients post `{ "seconds": <value> }`. Integers and numeric strings are
//! accepted, fractional values are truncated toward zero, and anything
//! negative or non-numeric is rejected instead of being clamped.

use serde_json::Value;

use crate::error::CoreError;

/// Largest position that fits the `INTEGER` column.
pub const MAX_POSITION_SECS: i64 = i32::MAX as i64;

/// Coerce a raw `seconds` value into a non-negative position.
///
/// A missing value (`None`) or JSON `null` means position 0.
pub fn parse_position(raw: Option<&Value>) -> Result<i32, CoreError> {
    let seconds = match raw {
        None | Some(Value::Null) => return Ok(0),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                return Err(out_of_range());
            } else {
                truncate_float(n.as_f64().unwrap_or(f64::NAN))?
            }
        }
        Some(Value::String(s)) => parse_numeric_str(s.trim())?,
        Some(other) => {
            return Err(CoreError::Validation(format!(
                "seconds must be a number, got {}",
                json_kind(other)
            )))
        }
    };

    if seconds < 0 {
        return Err(CoreError::Validation(
            "seconds must not be negative".to_string(),
        ));
    }
    if seconds > MAX_POSITION_SECS {
        return Err(out_of_range());
    }
    Ok(seconds as i32)
}

/// Read the position from a request body, which must be a JSON object.
///
/// Any other body shape is rejected so it cannot reset a stored position.
pub fn position_from_body(body: &Value) -> Result<i32, CoreError> {
    match body {
        Value::Object(fields) => parse_position(fields.get("seconds")),
        other => Err(CoreError::Validation(format!(
            "Request body must be an object with a `seconds` field, got {}",
            json_kind(other)
        ))),
    }
}

fn parse_numeric_str(s: &str) -> Result<i64, CoreError> {
    if let Ok(i) = s.parse::<i64>() {
        return Ok(i);
    }
    match s.parse::<f64>() {
        Ok(f) => truncate_float(f),
        Err(_) => Err(CoreError::Validation(format!(
            "seconds must be numeric, got '{s}'"
        ))),
    }
}

fn truncate_float(f: f64) -> Result<i64, CoreError> {
    if !f.is_finite() {
        return Err(CoreError::Validation(
            "seconds must be a finite number".to_string(),
        ));
    }
    let truncated = f.trunc();
    if truncated < 0.0 {
        return Err(CoreError::Validation(
            "seconds must not be negative".to_string(),
        ));
    }
    if truncated > MAX_POSITION_SECS as f64 {
        return Err(out_of_range());
    }
    Ok(truncated as i64)
}

fn out_of_range() -> CoreError {
    CoreError::Validation(format!("seconds must be at most {MAX_POSITION_SECS}"))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integer_is_accepted() {
        assert_eq!(parse_position(Some(&json!(120))).unwrap(), 120);
        assert_eq!(parse_position(Some(&json!(0))).unwrap(), 0);
    }

    #[test]
    fn missing_or_null_defaults_to_zero() {
        assert_eq!(parse_position(None).unwrap(), 0);
        assert_eq!(parse_position(Some(&Value::Null)).unwrap(), 0);
    }

    #[test]
    fn float_is_truncated() {
        assert_eq!(parse_position(Some(&json!(45.9))).unwrap(), 45);
        assert_eq!(parse_position(Some(&json!(0.4))).unwrap(), 0);
    }

    #[test]
    fn numeric_string_is_accepted() {
        assert_eq!(parse_position(Some(&json!("90"))).unwrap(), 90);
        assert_eq!(parse_position(Some(&json!(" 12.7 "))).unwrap(), 12);
    }

    #[test]
    fn negative_is_rejected() {
        let err = parse_position(Some(&json!(-1))).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(parse_position(Some(&json!(-2.5))).is_err());
        assert!(parse_position(Some(&json!("-3"))).is_err());
    }

    #[test]
    fn non_numeric_is_rejected() {
        assert!(parse_position(Some(&json!("abc"))).is_err());
        assert!(parse_position(Some(&json!(true))).is_err());
        assert!(parse_position(Some(&json!([1]))).is_err());
        assert!(parse_position(Some(&json!({"s": 1}))).is_err());
    }

    #[test]
    fn body_must_be_an_object() {
        assert_eq!(position_from_body(&json!({"seconds": 30})).unwrap(), 30);
        assert_eq!(position_from_body(&json!({})).unwrap(), 0);
        for body in [json!(-5), json!(120), json!("60"), json!(null), json!([30])] {
            let err = position_from_body(&body).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "{body} should be rejected");
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(parse_position(Some(&json!(MAX_POSITION_SECS + 1))).is_err());
        assert!(parse_position(Some(&json!(u64::MAX))).is_err());
        assert_eq!(
            parse_position(Some(&json!(MAX_POSITION_SECS))).unwrap(),
            i32::MAX
        );
    }
}
