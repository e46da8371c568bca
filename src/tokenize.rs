//! Escaped tokenizer: the one field-separation primitive every container
//! caster goes through.

/// Split `text` on every `delimiter` not immediately preceded by `escape`.
///
/// An escaped delimiter is kept as literal text and its escape is dropped.
/// An escape before any other character is kept as is. Fields are trimmed.
/// Always returns at least one field.
pub fn split(text: &str, delimiter: char, escape: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == escape && chars.peek() == Some(&delimiter) {
            chars.next();
            current.push(delimiter);
        } else if c == delimiter {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Split on exactly one unescaped `separator`.
/// On failure returns how many unescaped separators were found instead.
pub fn split_pair(text: &str, separator: char, escape: char) -> Result<(String, String), usize> {
    let mut parts = split(text, separator, escape);
    if parts.len() != 2 {
        return Err(parts.len() - 1);
    }
    let value = parts.pop().unwrap_or_default();
    let key = parts.pop().unwrap_or_default();
    Ok((key, value))
}
