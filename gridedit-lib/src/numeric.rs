//! Numeric value parsing for integer and real editors

use serde::Deserialize;
use serde::Serialize;

use crate::model::CellValue;
use crate::model::EditKind;

/// How an empty numeric input is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyInput {
    /// Empty input is stored as `0`, indistinguishable from a typed zero.
    #[default]
    Zero,
    /// Empty input is stored as an absent value.
    Absent,
}

/// Parses raw editor input into a number.
///
/// Falsy input (null, `""`, `0`, NaN, `false`) yields `0`. Integer editors
/// parse the leading radix-10 integer prefix, truncating any fraction; every
/// other kind parses the leading float prefix. Input with no numeric prefix
/// yields NaN, which callers surface through ordinary validation.
///
/// ```
/// use gridedit_lib::model::{CellValue, EditKind};
/// use gridedit_lib::numeric::parse_numeric;
///
/// assert_eq!(parse_numeric(EditKind::Integer, &CellValue::from("42.9")), 42.0);
/// assert_eq!(parse_numeric(EditKind::Real, &CellValue::from("42.9")), 42.9);
/// assert_eq!(parse_numeric(EditKind::Integer, &CellValue::Null), 0.0);
/// ```
pub fn parse_numeric(kind: EditKind, raw: &CellValue) -> f64 {
    if raw.is_falsy() {
        return 0.0;
    }

    match raw {
        CellValue::Int(i) => *i as f64,
        CellValue::Float(f) if kind == EditKind::Integer => f.trunc(),
        CellValue::Float(f) => *f,
        CellValue::String(s) if kind == EditKind::Integer => parse_int_prefix(s),
        CellValue::String(s) => parse_float_prefix(s),
        _ => f64::NAN,
    }
}

/// Parses raw editor input under an [`EmptyInput`] policy.
///
/// With [`EmptyInput::Absent`], null and empty-string input give `None`
/// while a typed `0` still gives `Some(0.0)`.
pub fn parse_numeric_with(policy: EmptyInput, kind: EditKind, raw: &CellValue) -> Option<f64> {
    let empty = match raw {
        CellValue::Null => true,
        CellValue::String(s) => s.trim().is_empty(),
        _ => false,
    };
    if empty && policy == EmptyInput::Absent {
        return None;
    }
    Some(parse_numeric(kind, raw))
}

/// Converts a parsed number into the cell value stored for `kind`.
pub fn numeric_cell_value(kind: EditKind, value: Option<f64>) -> CellValue {
    match value {
        None => CellValue::Null,
        Some(v) if kind == EditKind::Integer && v.is_finite() => CellValue::Int(v as i64),
        Some(v) => CellValue::Float(v),
    }
}

/// Input attributes for the number field behind integer and real editors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NumericInputProps {
    #[serde(rename = "type")]
    pub input_type: &'static str,
    pub input_class: &'static str,
    pub step: &'static str,
}

/// Returns the number-field attributes for `kind`, or `None` for kinds not
/// edited through a number input.
pub fn numeric_input_props(kind: EditKind) -> Option<NumericInputProps> {
    let step = match kind {
        EditKind::Integer => "1",
        EditKind::Real => "any",
        _ => return None,
    };
    Some(NumericInputProps {
        input_type: "number",
        input_class: "no-spinners",
        step,
    })
}

fn sign_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    }
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading radix-10 integer prefix: `"  -12px"` gives `-12`.
fn parse_int_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_len(&bytes[sign..]);
    if digits == 0 {
        return f64::NAN;
    }
    // Digit runs beyond i64 range still parse as a (rounded) float.
    s[..sign + digits].parse::<f64>().map(f64::trunc).unwrap_or(f64::NAN)
}

/// Leading float prefix: `"1.5e3kg"` gives `1500`, `"-Infinity"` gives -∞.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);

    if s[sign..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mut end = sign;
    let int_digits = digits_len(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digits_len(&bytes[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_prefix() {
        assert_eq!(parse_int_prefix("42.9"), 42.0);
        assert_eq!(parse_int_prefix("  -12px"), -12.0);
        assert_eq!(parse_int_prefix("+7"), 7.0);
        assert!(parse_int_prefix("px12").is_nan());
        assert!(parse_int_prefix("-").is_nan());
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("42.9"), 42.9);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("5."), 5.0);
        assert_eq!(parse_float_prefix("1.5e3kg"), 1500.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("abc").is_nan());
    }

    #[test]
    fn test_number_input_truncates_for_integer() {
        assert_eq!(parse_numeric(EditKind::Integer, &CellValue::Float(3.7)), 3.0);
        assert_eq!(parse_numeric(EditKind::Real, &CellValue::Float(3.7)), 3.7);
        assert_eq!(parse_numeric(EditKind::Real, &CellValue::Int(3)), 3.0);
    }

    #[test]
    fn test_numeric_cell_value() {
        assert_eq!(numeric_cell_value(EditKind::Integer, Some(42.0)), CellValue::Int(42));
        assert_eq!(numeric_cell_value(EditKind::Real, Some(4.5)), CellValue::Float(4.5));
        assert_eq!(numeric_cell_value(EditKind::Integer, None), CellValue::Null);
        assert!(matches!(
            numeric_cell_value(EditKind::Integer, Some(f64::NAN)),
            CellValue::Float(v) if v.is_nan()
        ));
    }
}
