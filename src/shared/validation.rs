//! Validation Utilities

use validator::{ValidationErrors, ValidationErrorsKind};

use super::error::AppError;

/// Convert validation errors to AppError
///
/// Nested structs are walked so the reported field reads as a path
/// (`message.body`).
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let message = first_error(&errors, None)
        .map(|(field, message)| format!("Invalid request body: {}: {}", field, message))
        .unwrap_or_else(|| "Invalid request body".into());

    AppError::Validation(message)
}

fn first_error(errors: &ValidationErrors, prefix: Option<&str>) -> Option<(String, String)> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields.into_iter().find_map(|(field, kind)| {
        let path = match prefix {
            Some(p) => format!("{}.{}", p, field),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(errs) => errs.first().map(|e| {
                let message = e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (path, message)
            }),
            ValidationErrorsKind::Struct(nested) => first_error(nested, Some(&path)),
            ValidationErrorsKind::List(items) => items
                .values()
                .find_map(|nested| first_error(nested, Some(&path))),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::request::CreateMessageRequest;
    use validator::Validate;

    #[test]
    fn test_nested_field_path() {
        let request: CreateMessageRequest =
            serde_json::from_str(r#"{"message": {"body": ""}}"#).unwrap();
        let err = validation_error(request.validate().unwrap_err());

        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "Invalid request body: message.body: body is required")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
