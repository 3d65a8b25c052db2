use serde::Serialize;
use validator::ValidationErrors;

pub mod categories;
pub mod products;
pub mod suppliers;
pub mod transactions;
pub mod users;

/// A single rejected field, reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears on the wire.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` output into wire-named field errors, ordered by field.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flattened: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let wire_name = camel_case(&field);
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                FieldError::new(wire_name.clone(), message)
            })
        })
        .collect();

    flattened.sort_by(|a, b| a.field.cmp(&b.field));
    flattened
}

/// Render a list of field errors as one line for logs and form error messages.
pub fn describe_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn camel_case(snake: &str) -> String {
    let mut result = String::with_capacity(snake.len());
    let mut upper_next = false;

    for ch in snake.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}

pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        if line.is_empty() {
            if previous_empty {
                continue;
            }
            previous_empty = true;
        } else {
            previous_empty = false;
        }
        result.push(line);
    }

    result.join("\n")
}

/// Sanitize optional free text, mapping blank input to `None`.
pub(crate) fn sanitize_optional_text(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_multiline_text)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_converts_snake_names() {
        assert_eq!(camel_case("product_id"), "productId");
        assert_eq!(camel_case("quantity"), "quantity");
        assert_eq!(camel_case("supplier_id"), "supplierId");
    }

    #[test]
    fn multiline_text_collapses_blank_runs() {
        let sanitized = sanitize_multiline_text("\n  First \n\n\n  Second  \n\n");

        assert_eq!(sanitized, "First\n\nSecond");
    }

    #[test]
    fn blank_optional_text_becomes_none() {
        assert_eq!(sanitize_optional_text(Some("   ")), None);
        assert_eq!(
            sanitize_optional_text(Some(" Main  St ")).as_deref(),
            Some("Main St")
        );
    }
}
