//! Service request form state: editing, blur validation and submit.

use std::collections::HashMap;

use super::validation::{FieldName, validate_field};
use crate::state::types::ServiceType;

/// Confirmation shown after a successful submission.
pub const SUBMIT_SUCCESS: &str =
    "Permohonan berhasil dikirim! Kami akan menghubungi Anda segera.";

/// Validated copy of the form values, ready to hand over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRequest {
    /// Applicant name.
    pub full_name: String,
    /// National identity number.
    pub nik: String,
    /// Phone number.
    pub phone: String,
    /// Email address, possibly empty.
    pub email: String,
    /// Selected service type value.
    pub service_type: String,
    /// Free-form message, possibly empty.
    pub message: String,
}

/// Editable form with per-field error messages.
#[derive(Clone, Debug, Default)]
pub struct ServiceForm {
    /// Raw values keyed by field.
    values: HashMap<FieldName, String>,
    /// Current error per field.
    errors: HashMap<FieldName, &'static str>,
    /// Focused field index into [`FieldName::ALL`].
    focus: usize,
    /// Options for the service type field.
    service_types: Vec<ServiceType>,
    /// Selected option index.
    selected_type: usize,
}

impl ServiceForm {
    /// Create an empty form with the given service type options.
    #[must_use]
    pub fn new(service_types: Vec<ServiceType>) -> Self {
        let mut form = Self {
            service_types,
            ..Self::default()
        };
        form.sync_service_type();
        form
    }

    /// Currently focused field.
    #[must_use]
    pub fn focused(&self) -> FieldName {
        FieldName::ALL[self.focus % FieldName::ALL.len()]
    }

    /// Value of a field (empty when untouched).
    #[must_use]
    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Current error of a field.
    #[must_use]
    pub fn error(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Service type options.
    #[must_use]
    pub fn service_types(&self) -> &[ServiceType] {
        &self.service_types
    }

    /// Label of the selected service type, if any option exists.
    #[must_use]
    pub fn selected_type_label(&self) -> Option<&str> {
        self.service_types
            .get(self.selected_type)
            .map(|t| t.label.as_str())
    }

    /// What: Move focus to the next field, validating the one being left.
    ///
    /// Details:
    /// - Mirrors the web form's blur validation.
    pub fn focus_next(&mut self) {
        self.blur();
        self.focus = (self.focus + 1) % FieldName::ALL.len();
    }

    /// Move focus to the previous field, validating the one being left.
    pub fn focus_prev(&mut self) {
        self.blur();
        self.focus = (self.focus + FieldName::ALL.len() - 1) % FieldName::ALL.len();
    }

    /// Validate the focused field and record its error.
    pub fn blur(&mut self) {
        let field = self.focused();
        self.check(field);
    }

    /// What: Append a character to the focused field.
    ///
    /// Details:
    /// - Typing clears the field's error. The service type field ignores text
    ///   input; use [`Self::cycle_service_type`].
    pub fn push_char(&mut self, ch: char) {
        let field = self.focused();
        if field == FieldName::ServiceType {
            return;
        }
        self.values.entry(field).or_default().push(ch);
        self.errors.remove(&field);
    }

    /// Delete the last character of the focused field.
    pub fn pop_char(&mut self) {
        let field = self.focused();
        if field == FieldName::ServiceType {
            return;
        }
        if let Some(v) = self.values.get_mut(&field) {
            v.pop();
        }
        self.errors.remove(&field);
    }

    /// Select the next (`forward`) or previous service type option.
    pub fn cycle_service_type(&mut self, forward: bool) {
        let n = self.service_types.len();
        if n == 0 {
            return;
        }
        self.selected_type = if forward {
            (self.selected_type + 1) % n
        } else {
            (self.selected_type + n - 1) % n
        };
        self.sync_service_type();
        self.errors.remove(&FieldName::ServiceType);
    }

    /// What: Validate every field and, when all pass, produce the request and reset.
    ///
    /// Output:
    /// - `Some(ServiceRequest)` on success (form cleared);
    ///   `None` when any field failed (errors recorded on each failing field).
    ///
    /// Details:
    /// - Every required field is checked so all errors are visible at once.
    ///   Optional fields (email, message) are only checked on blur and never
    ///   block a submit.
    pub fn submit(&mut self) -> Option<ServiceRequest> {
        let mut ok = true;
        for field in FieldName::ALL.into_iter().filter(|f| f.required()) {
            ok &= self.check(field);
        }
        if !ok {
            tracing::debug!(errors = self.errors.len(), "service request rejected");
            return None;
        }
        let get = |f: FieldName| self.value(f).trim().to_string();
        let request = ServiceRequest {
            full_name: get(FieldName::FullName),
            nik: get(FieldName::Nik),
            phone: get(FieldName::Phone),
            email: get(FieldName::Email),
            service_type: get(FieldName::ServiceType),
            message: get(FieldName::Message),
        };
        self.reset();
        Some(request)
    }

    /// Clear values, errors and focus; keep the options.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.focus = 0;
        self.selected_type = 0;
        self.sync_service_type();
    }

    /// Run the field rule and store or clear its error.
    fn check(&mut self, field: FieldName) -> bool {
        match validate_field(field, self.value(field), field.required()) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(msg) => {
                self.errors.insert(field, msg);
                false
            }
        }
    }

    /// Mirror the selected option into the field value.
    fn sync_service_type(&mut self) {
        match self.service_types.get(self.selected_type) {
            Some(t) => {
                self.values.insert(FieldName::ServiceType, t.value.clone());
            }
            None => {
                self.values.remove(&FieldName::ServiceType);
            }
        }
    }
}
