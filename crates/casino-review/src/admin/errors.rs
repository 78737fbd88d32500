use serde::Serialize;

/// Validation message for a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every validation failure found in one pass over a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid form: {}", summary(.errors))]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{} {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormErrors {
    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub(crate) fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.errors.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Parse an optional 0-10 rating entered as text.
pub(crate) fn parse_rating(
    errors: &mut FormErrors,
    field: &str,
    raw: &str,
    range: std::ops::RangeInclusive<f64>,
) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && range.contains(&value) => Some(value),
        Ok(_) => {
            errors.push(
                field,
                format!(
                    "must be between {} and {}",
                    range.start(),
                    range.end()
                ),
            );
            None
        }
        Err(_) => {
            errors.push(field, "must be a number");
            None
        }
    }
}
