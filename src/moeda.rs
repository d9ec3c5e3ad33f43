//! Brazilian-locale currency handling.
//!
//! The entry form accepts values typed as locale-formatted currency strings
//! ("R$ 1.234,56"). Parsing assumes '.' is a thousands separator and ',' is
//! the decimal separator. A plain-decimal input such as "1234.56" therefore
//! parses as 123456, a known ambiguity of the heuristic that is kept as-is.

use regex::Regex;
use serde_json::Value;

/// Parses a locale-formatted currency string ("R$ 1.234,56" → 1234.56).
///
/// Strips everything except digits, comma, dot, and minus; drops dots as
/// thousands separators; converts the decimal comma to a dot; then parses.
/// Returns `None` when nothing numeric remains, in which case the draft is
/// submitted with a null value.
pub fn parse_valor_brl(raw: &str) -> Option<f64> {
    let filtro = Regex::new(r"[^\d,.\-]+").unwrap();
    let filtrado = filtro.replace_all(raw, "");
    let normalizado = filtrado.replace('.', "").replace(',', ".");
    normalizado.parse::<f64>().ok()
}

/// Coerces a stored `valor` to a number for aggregation.
///
/// Numbers pass through, numeric strings parse, everything else (including
/// null and absent values) counts as zero.
pub fn valor_numerico(valor: &Value) -> f64 {
    match valor {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Formats a numeric total as currency text ("R$ 150.50").
pub fn formatar_brl(valor: f64) -> String {
    format!("R$ {:.2}", valor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_locale_formatted_currency() {
        assert_eq!(parse_valor_brl("R$ 1.234,56"), Some(1234.56));
        assert_eq!(parse_valor_brl("R$ 0,99"), Some(0.99));
        assert_eq!(parse_valor_brl("1500"), Some(1500.0));
        assert_eq!(parse_valor_brl("12,5"), Some(12.5));
    }

    #[test]
    fn plain_decimal_input_is_misread_as_thousands() {
        // Known ambiguity of the heuristic: the dot is treated as a
        // thousands separator and removed.
        assert_eq!(parse_valor_brl("1234.56"), Some(123456.0));
    }

    #[test]
    fn negative_values_parse() {
        assert_eq!(parse_valor_brl("-R$ 10,00"), Some(-10.0));
    }

    #[test]
    fn non_numeric_input_yields_none() {
        assert_eq!(parse_valor_brl(""), None);
        assert_eq!(parse_valor_brl("abc"), None);
        assert_eq!(parse_valor_brl("R$"), None);
    }

    #[test]
    fn valor_numerico_treats_non_numeric_as_zero() {
        assert_eq!(valor_numerico(&json!(100.5)), 100.5);
        assert_eq!(valor_numerico(&json!("50")), 50.0);
        assert_eq!(valor_numerico(&json!("abc")), 0.0);
        assert_eq!(valor_numerico(&Value::Null), 0.0);
        assert_eq!(valor_numerico(&json!({ "x": 1 })), 0.0);
    }

    #[test]
    fn formats_total_as_currency_text() {
        assert_eq!(formatar_brl(150.5), "R$ 150.50");
        assert_eq!(formatar_brl(0.0), "R$ 0.00");
    }
}
