//! Field rules for the service request form.

use regex::Regex;
use std::sync::LazyLock;

/// Message for an empty required field.
pub const MSG_REQUIRED: &str = "Field ini wajib diisi";
/// Message for a malformed NIK.
pub const MSG_NIK: &str = "NIK harus terdiri dari 16 digit angka";
/// Message for a malformed phone number.
pub const MSG_PHONE: &str = "Format nomor telepon tidak valid";
/// Message for a malformed email address.
pub const MSG_EMAIL: &str = "Format email tidak valid";
/// Message for a too short full name.
pub const MSG_FULL_NAME: &str = "Nama lengkap minimal 3 karakter";

/// Sixteen digit national identity number.
static NIK_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{16}$"));
/// Indonesian phone number with `+62`, `62` or `0` prefix.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^(\+62|62|0)[0-9]{9,13}$"));
/// Loose `local@domain.tld` shape.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Compile a pattern known to be valid at build time.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static validation pattern")
}

/// Named fields of the service request form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Applicant's full name.
    FullName,
    /// National identity number (NIK).
    Nik,
    /// Phone number.
    Phone,
    /// Email address.
    Email,
    /// Requested service type.
    ServiceType,
    /// Free-form message.
    Message,
}

impl FieldName {
    /// Form order.
    pub const ALL: [Self; 6] = [
        Self::FullName,
        Self::Nik,
        Self::Phone,
        Self::Email,
        Self::ServiceType,
        Self::Message,
    ];

    /// Form key as submitted by the web portal.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Nik => "nik",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::ServiceType => "serviceType",
            Self::Message => "message",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Nama Lengkap",
            Self::Nik => "NIK",
            Self::Phone => "No. Telepon",
            Self::Email => "Email",
            Self::ServiceType => "Jenis Layanan",
            Self::Message => "Keterangan",
        }
    }

    /// Whether the form marks the field as required.
    #[must_use]
    pub const fn required(self) -> bool {
        !matches!(self, Self::Email | Self::Message)
    }

    /// Parse a form key (`fullName`, `nik`, ...).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// What: Validate one field value.
///
/// Inputs:
/// - `field`: Which rule set applies
/// - `raw`: Value as typed; trimmed before checking
/// - `required`: Whether an empty value is an error
///
/// Output:
/// - `Ok(())` when valid; `Err(message)` with the user-facing reason otherwise.
///
/// Details:
/// - Format rules only run on non-empty values.
/// - Phone numbers are checked with all whitespace removed.
pub fn validate_field(field: FieldName, raw: &str, required: bool) -> Result<(), &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return if required { Err(MSG_REQUIRED) } else { Ok(()) };
    }
    match field {
        FieldName::Nik if !NIK_RE.is_match(value) => Err(MSG_NIK),
        FieldName::Phone => {
            let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            if PHONE_RE.is_match(&compact) {
                Ok(())
            } else {
                Err(MSG_PHONE)
            }
        }
        FieldName::Email if !EMAIL_RE.is_match(value) => Err(MSG_EMAIL),
        FieldName::FullName if value.chars().count() < 3 => Err(MSG_FULL_NAME),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Required check applies before any format rule.
    fn required_empty_values() {
        assert_eq!(validate_field(FieldName::Nik, "   ", true), Err(MSG_REQUIRED));
        assert_eq!(validate_field(FieldName::Email, "", false), Ok(()));
        assert_eq!(validate_field(FieldName::Message, "", false), Ok(()));
    }

    #[test]
    fn nik_must_be_sixteen_digits() {
        assert_eq!(validate_field(FieldName::Nik, "3201234567890001", true), Ok(()));
        assert_eq!(validate_field(FieldName::Nik, "320123456789000", true), Err(MSG_NIK));
        assert_eq!(validate_field(FieldName::Nik, "32012345678900012", true), Err(MSG_NIK));
        assert_eq!(validate_field(FieldName::Nik, "32012345678900a1", true), Err(MSG_NIK));
        let arabic_indic = "\u{663}".repeat(16);
        assert_eq!(validate_field(FieldName::Nik, &arabic_indic, true), Err(MSG_NIK));
    }

    #[test]
    /// What: Phone prefixes and whitespace stripping.
    ///
    /// - Input: numbers with 0, 62 and +62 prefixes, some with spaces
    /// - Output: accepted when 9 to 13 digits follow the prefix
    fn phone_prefixes_and_spaces() {
        assert_eq!(validate_field(FieldName::Phone, "081234567890", true), Ok(()));
        assert_eq!(validate_field(FieldName::Phone, "+62 812 3456 7890", true), Ok(()));
        assert_eq!(validate_field(FieldName::Phone, "62812345678", true), Ok(()));
        assert_eq!(validate_field(FieldName::Phone, "0812345", true), Err(MSG_PHONE));
        assert_eq!(validate_field(FieldName::Phone, "1812345678901", true), Err(MSG_PHONE));
        assert_eq!(validate_field(FieldName::Phone, "08123456789012345", true), Err(MSG_PHONE));
    }

    #[test]
    fn email_shape() {
        assert_eq!(validate_field(FieldName::Email, "warga@desa.id", false), Ok(()));
        assert_eq!(validate_field(FieldName::Email, "warga@desa", false), Err(MSG_EMAIL));
        assert_eq!(validate_field(FieldName::Email, "war ga@desa.id", false), Err(MSG_EMAIL));
    }

    #[test]
    fn full_name_minimum_length() {
        assert_eq!(validate_field(FieldName::FullName, "Al", true), Err(MSG_FULL_NAME));
        assert_eq!(validate_field(FieldName::FullName, "  Ani  ", true), Ok(()));
    }

    #[test]
    fn field_keys_round_trip() {
        for f in FieldName::ALL {
            assert_eq!(FieldName::from_key(f.key()), Some(f));
        }
        assert_eq!(FieldName::from_key("unknown"), None);
    }
}
