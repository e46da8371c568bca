//! Literal ladder: infer the most specific scalar shape of a text.
//!
//! Rungs, in order: bool literal, integer, float, quoted string, bare string.
//! Every rung is an explicit fallible parse; the last one cannot fail.

use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Literal {
    pub fn into_value(self) -> Value {
        match self {
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(i) => Value::Int(i),
            Literal::Float(f) => Value::float(f),
            Literal::Str(s) => Value::Str(s),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Literal::Int(_) | Literal::Float(_))
    }
}

pub fn infer(text: &str) -> Literal {
    let t = text.trim();
    if let Some(b) = parse_bool(t) {
        return Literal::Bool(b);
    }
    if let Some(i) = parse_int(t) {
        return Literal::Int(i);
    }
    if let Some(f) = parse_float(t) {
        return Literal::Float(f);
    }
    if let Some(s) = parse_quoted(t) {
        return Literal::Str(s);
    }
    Literal::Str(t.to_string())
}

// ------------------------------- Rungs ------------------------------------ //

/// `True`/`False` after first-upper, rest-lower normalisation, so `true`,
/// `TRUE` and `tRuE` are all accepted.
pub fn parse_bool(t: &str) -> Option<bool> {
    if t.eq_ignore_ascii_case("true") {
        Some(true)
    } else if t.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub fn parse_int(t: &str) -> Option<i64> {
    let digits = strip_sign(t);
    if !is_digit_run(digits) {
        return None;
    }
    t.replace('_', "").parse::<i64>().ok()
}

/// Decimal or exponent form; integer-shaped text only lands here when it is
/// too wide for i64. `inf`/`nan` spellings are words, not literals.
pub fn parse_float(t: &str) -> Option<f64> {
    parse_float_unbounded(t).filter(|f| f.is_finite())
}

/// Well-formed float text whose magnitude does not fit in an f64 (`1e400`).
pub fn float_out_of_range(t: &str) -> bool {
    parse_float_unbounded(t).is_some_and(f64::is_infinite)
}

fn parse_float_unbounded(t: &str) -> Option<f64> {
    let body = strip_sign(t);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let (whole, frac) = match mantissa.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (mantissa, None),
    };
    let whole_ok = whole.is_empty() || is_digit_run(whole);
    let frac_ok = frac.is_none_or(|f| f.is_empty() || is_digit_run(f));
    let has_digits = !whole.is_empty() || frac.is_some_and(|f| !f.is_empty());
    let exp_ok = exponent.is_none_or(|e| is_digit_run(strip_sign(e)));
    if !(whole_ok && frac_ok && has_digits && exp_ok) {
        return None;
    }
    t.replace('_', "").parse::<f64>().ok()
}

/// Text wrapped in matching `'` or `"`, with `\'`, `\"` and `\\` unescaped.
pub fn parse_quoted(t: &str) -> Option<String> {
    if t.len() < 2 {
        return None;
    }
    let quote = t.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let inner = t.strip_prefix(quote)?.strip_suffix(quote)?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(n @ ('\\' | '\'' | '"')) => out.push(n),
                Some(n) => { out.push('\\'); out.push(n); }
                None => out.push('\\'),
            },
            c if c == quote => return None, // unescaped quote inside: not one literal
            c => out.push(c),
        }
    }
    Some(out)
}

// ------------------------------- Helpers ---------------------------------- //

fn strip_sign(t: &str) -> &str {
    t.strip_prefix(['+', '-']).unwrap_or(t)
}

// Digits with single underscores between them.
fn is_digit_run(s: &str) -> bool {
    !s.is_empty()
        && s.starts_with(|c: char| c.is_ascii_digit())
        && s.ends_with(|c: char| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || c == '_')
        && !s.contains("__")
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_prefers_most_specific_shape() {
        assert_eq!(infer("13"), Literal::Int(13));
        assert_eq!(infer(" -7 "), Literal::Int(-7));
        assert_eq!(infer("1_000"), Literal::Int(1000));
        assert_eq!(infer("1.0"), Literal::Float(1.0));
        assert_eq!(infer("-1.1"), Literal::Float(-1.1));
        assert_eq!(infer(".5"), Literal::Float(0.5));
        assert_eq!(infer("3."), Literal::Float(3.0));
        assert_eq!(infer("2e3"), Literal::Float(2000.0));
        assert_eq!(infer("TRUE"), Literal::Bool(true));
        assert_eq!(infer("'abc'"), Literal::Str("abc".into()));
        assert_eq!(infer("abc"), Literal::Str("abc".into()));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(parse_int("1__0"), None);
        assert_eq!(parse_int("_1"), None);
        assert_eq!(parse_int("1.0"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("1e"), None);
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("nan"), None);
        assert_eq!(parse_float("2.42334f"), None);
        assert_eq!(infer("a1.125f3"), Literal::Str("a1.125f3".into()));
    }

    #[test]
    fn integer_overflow_falls_through_to_float() {
        assert_eq!(parse_int("99999999999999999999"), None);
        assert_eq!(infer("99999999999999999999"), Literal::Float(1e20));
        assert_eq!(infer("99999999999999999999.0"), Literal::Float(1e20));
    }

    #[test]
    fn float_overflow_is_not_a_float_literal() {
        assert_eq!(parse_float("1e400"), None);
        assert!(float_out_of_range("1e400"));
        assert!(float_out_of_range("-1e400"));
        assert!(!float_out_of_range("1e300"));
        assert!(!float_out_of_range("inf"));
        assert_eq!(infer("1e400"), Literal::Str("1e400".into()));
    }

    #[test]
    fn quoted_strings() {
        assert_eq!(parse_quoted(r#""it's""#), Some("it's".into()));
        assert_eq!(parse_quoted(r"'it\'s'"), Some("it's".into()));
        assert_eq!(parse_quoted(r"'a\nb'"), Some(r"a\nb".into()));
        assert_eq!(parse_quoted("'a'b'"), None);
        assert_eq!(parse_quoted("'"), None);
        assert_eq!(parse_quoted("''"), Some(String::new()));
        assert_eq!(parse_quoted("'abc\""), None);
    }
}
