//! Whole-form validation of registration records.
//!
//! A [`FormValidator`] runs the required-field pass followed by the format
//! checks of the contact and document fields:
//!
//! | Field       | Check       | Severity |
//! |-------------|-------------|----------|
//! | `cpf`       | CPF         | error    |
//! | `email`     | e-mail      | error    |
//! | `celular`   | phone       | error    |
//! | `cep`       | postal code | error    |
//! | `microchip` | 15 digits   | warning  |
//! | `rg`        | 8-9 digits  | warning  |
//!
//! Format checks only run on fields that are present and non-empty; a
//! missing field is the required pass's concern. Warnings never make a
//! record invalid.
//!
//! ```
//! use castra_validator::form::{FormConfig, FormRecord, FormValidator};
//!
//! let validator = FormValidator::new(FormConfig::default().with_required_fields(["tutor", "cpf"]));
//! let record = FormRecord::new()
//!     .with("tutor", "Ana Souza")
//!     .with("cpf", "529.982.247-25")
//!     .with("microchip", "123");
//!
//! let report = validator.validate(&record);
//! assert!(report.valid);
//! assert_eq!(report.warnings, ["Microchip deve ter 15 dígitos."]);
//! ```

mod config;
mod error;
mod record;

pub use config::{DEFAULT_REQUIRED_FIELDS, FormConfig, FormMessages, LABEL_PLACEHOLDER};
pub use error::RecordError;
pub use record::FormRecord;

use serde::Serialize;
use tracing::{debug, trace};

use crate::foundation::{
    ErrorSeverity, Validate, ValidateExt, ValidationError, ValidationErrors,
};
use crate::validators::{Cpf, Email, Microchip, Phone, PostalCode, Required, Rg};

// ============================================================================
// REPORT
// ============================================================================

/// Outcome of validating one record, as display messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    /// True when there are no errors. Warnings do not count.
    pub valid: bool,
    /// Blocking messages, required fields first.
    pub errors: Vec<String>,
    /// Non-blocking messages.
    pub warnings: Vec<String>,
}

impl From<&ValidationErrors> for FormReport {
    fn from(issues: &ValidationErrors) -> Self {
        let errors: Vec<String> = issues.blocking().map(|e| e.message.to_string()).collect();
        let warnings = issues.warnings().map(|e| e.message.to_string()).collect();
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates whole registration records against a [`FormConfig`].
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    config: FormConfig,
}

impl FormValidator {
    /// Creates a validator that owns `config`.
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Runs every check and returns the structured issues.
    ///
    /// Each issue names its field. Required-field failures have
    /// [`ErrorKind::Missing`](crate::foundation::ErrorKind::Missing); format
    /// failures keep the code of the validator that rejected the value
    /// (`cpf_checksum`, `microchip_length`, ...) with the configured message.
    pub fn check(&self, record: &FormRecord) -> ValidationErrors {
        let mut issues = ValidationErrors::new();
        let messages = &self.config.messages;

        for field in &self.config.required_fields {
            if !record.get(field).is_some_and(|v| Required.is_valid(v)) {
                trace!(field = %field, "required field missing");
                issues.add(
                    ValidationError::required(field.clone())
                        .with_message(self.config.required_message(field)),
                );
            }
        }

        let error = ErrorSeverity::Error;
        check_filled(&mut issues, record, "cpf", Cpf, &messages.invalid_cpf, error);
        check_filled(&mut issues, record, "email", Email, &messages.invalid_email, error);
        check_filled(
            &mut issues,
            record,
            "celular",
            Phone::brazil(),
            &messages.invalid_mobile,
            error,
        );
        check_filled(
            &mut issues,
            record,
            "cep",
            PostalCode,
            &messages.invalid_postal_code,
            error,
        );

        let warning = ErrorSeverity::Warning;
        check_filled(
            &mut issues,
            record,
            "microchip",
            Microchip,
            &messages.microchip_warning,
            warning,
        );
        check_filled(&mut issues, record, "rg", Rg, &messages.rg_warning, warning);

        debug!(
            fields = record.len(),
            errors = issues.blocking().count(),
            warnings = issues.warnings().count(),
            "form validated"
        );

        issues
    }

    /// Runs every check and returns the display report.
    pub fn validate(&self, record: &FormRecord) -> FormReport {
        FormReport::from(&self.check(record))
    }
}

/// Validates `field` when it is present and non-empty.
fn check_filled<V>(
    issues: &mut ValidationErrors,
    record: &FormRecord,
    field: &'static str,
    validator: V,
    message: &str,
    severity: ErrorSeverity,
) where
    V: Validate<Input = str>,
{
    let Some(value) = record.filled(field) else {
        return;
    };

    if let Err(error) = validator.with_message(message).validate(value) {
        trace!(field, code = %error.code, "field check failed");
        issues.add(error.with_field(field).with_severity(severity));
    }
}

/// Validates `record` with the default labels and messages and the given
/// required fields.
///
/// ```
/// use castra_validator::form::{FormRecord, validate_whole_form};
///
/// let record = FormRecord::new().with("email", "tutor@");
/// let report = validate_whole_form(&record, &["animal"]);
/// assert!(!report.valid);
/// assert_eq!(
///     report.errors,
///     ["O campo \"Nome do Animal\" é obrigatório.", "E-mail inválido."]
/// );
/// ```
pub fn validate_whole_form<S: AsRef<str>>(record: &FormRecord, required_fields: &[S]) -> FormReport {
    let config = FormConfig::default()
        .with_required_fields(required_fields.iter().map(|f| f.as_ref().to_owned()));
    FormValidator::new(config).validate(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use pretty_assertions::assert_eq;

    fn complete_record() -> FormRecord {
        FormRecord::new()
            .with("animal", "Mel")
            .with("especie", "Canina")
            .with("sexo", "Fêmea")
            .with("pelagem", "Caramelo")
            .with("idade", "3")
            .with("porte", "Médio")
            .with("raca", "SRD")
            .with("castra", "Não")
            .with("tutor", "Ana Souza")
            .with("cpf", "529.982.247-25")
            .with("rg", "12.345.678-9")
            .with("celular", "(11) 98765-4321")
            .with("cep", "01310-100")
            .with("logradouro", "Avenida Paulista")
            .with("numero", "1000")
            .with("bairro", "Bela Vista")
            .with("cidade", "São Paulo")
            .with("estado", "SP")
    }

    #[test]
    fn test_complete_record_is_valid() {
        let report = FormValidator::default().validate(&complete_record());
        assert_eq!(report, FormReport { valid: true, errors: vec![], warnings: vec![] });
    }

    #[test]
    fn test_missing_and_blank_required_fields() {
        let mut record = complete_record();
        record.insert("tutor", "   ");
        let record: FormRecord = record.iter().filter(|(k, _)| *k != "animal").collect();

        let report = FormValidator::default().validate(&record);
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![
                "O campo \"Nome do Animal\" é obrigatório.",
                "O campo \"Nome do Tutor\" é obrigatório.",
            ]
        );
    }

    #[test]
    fn test_warnings_do_not_block() {
        let record = complete_record().with("microchip", "12345").with("rg", "1234");
        let report = FormValidator::default().validate(&record);
        assert!(report.valid);
        assert_eq!(
            report.warnings,
            vec!["Microchip deve ter 15 dígitos.", "RG pode estar incompleto."]
        );
    }

    #[test]
    fn test_format_errors_in_order() {
        let record = complete_record()
            .with("cep", "0131")
            .with("email", "a@b")
            .with("celular", "123")
            .with("cpf", "111.111.111-11");
        let report = FormValidator::default().validate(&record);
        assert_eq!(
            report.errors,
            vec!["CPF inválido.", "E-mail inválido.", "Celular inválido.", "CEP inválido."]
        );
    }

    #[test]
    fn test_structured_issues() {
        let record = complete_record().with("cpf", "52998224724").with("microchip", "1");
        let issues = FormValidator::default().check(&record);
        assert_eq!(issues.len(), 2);

        let cpf = &issues.errors()[0];
        assert_eq!(cpf.field.as_deref(), Some("cpf"));
        assert_eq!(cpf.code, "cpf_checksum");
        assert_eq!(cpf.message, "CPF inválido.");
        assert!(cpf.is_blocking());

        let chip = &issues.errors()[1];
        assert_eq!(chip.code, "microchip_length");
        assert_eq!(chip.severity, ErrorSeverity::Warning);
        assert!(issues.has_errors());
    }

    #[test]
    fn test_required_issue_kind() {
        let issues = FormValidator::default().check(&FormRecord::new());
        assert_eq!(issues.len(), DEFAULT_REQUIRED_FIELDS.len());
        assert!(issues.errors().iter().all(|e| e.kind == ErrorKind::Missing));
        assert_eq!(issues.errors()[0].field.as_deref(), Some("animal"));
    }

    #[test]
    fn test_empty_optional_fields_are_skipped() {
        let record = complete_record().with("email", "").with("microchip", "");
        let report = FormValidator::default().validate(&record);
        assert!(report.valid);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_custom_messages() {
        let mut config = FormConfig::default().with_required_fields(Vec::<String>::new());
        config.messages.invalid_cpf = "Documento inválido".to_owned();
        let report = FormValidator::new(config).validate(&FormRecord::new().with("cpf", "1"));
        assert_eq!(report.errors, vec!["Documento inválido"]);
    }
}
