//! Command-line form rule check.

use portal_desa::logic::{FieldName, validate_field};

/// What: Check `value` against the rule of the field named `field`.
///
/// Output:
/// - `Ok(message)` when valid; `Err(message)` with the rule's error text or an
///   unknown-field notice.
pub fn check(field: &str, value: &str, required: bool) -> Result<String, String> {
    let Some(name) = FieldName::from_key(field) else {
        let known: Vec<&str> = FieldName::ALL.iter().map(|f| f.key()).collect();
        return Err(format!("unknown field '{field}' (expected one of: {})", known.join(", ")));
    };
    validate_field(name, value, required || name.required())
        .map(|()| format!("{}: valid", name.label()))
        .map_err(|msg| format!("{}: {msg}", name.label()))
}

/// What: Handle the `validate` subcommand.
///
/// Output:
/// - Exit code: 0 when valid, 1 otherwise.
pub fn handle_validate(field: &str, value: &str, required: bool) -> i32 {
    match check(field, value, required) {
        Ok(msg) => {
            println!("{msg}");
            0
        }
        Err(msg) => {
            eprintln!("{msg}");
            tracing::info!(field, "validation failed from CLI");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_rules_and_unknown_fields() {
        assert!(check("nik", "3201234567890123", false).is_ok());
        let err = check("nik", "12345", false).expect_err("short nik");
        assert!(err.contains("16 digit"));
        assert!(check("email", "", false).is_ok());
        assert!(check("email", "", true).is_err());
        assert!(check("alamat", "x", false).expect_err("unknown").starts_with("unknown field"));
    }
}
