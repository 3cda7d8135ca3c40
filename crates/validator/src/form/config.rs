//! Form configuration: required fields, display labels and report messages.
//!
//! The defaults reproduce the pet-registration form. Every section derives
//! `serde` traits with `#[serde(default)]`, so a configuration file only
//! needs to name what it changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields a registration cannot be saved without, in report order.
pub const DEFAULT_REQUIRED_FIELDS: [&str; 18] = [
    "animal",
    "especie",
    "sexo",
    "pelagem",
    "idade",
    "porte",
    "raca",
    "castra",
    "tutor",
    "cpf",
    "rg",
    "celular",
    "cep",
    "logradouro",
    "numero",
    "bairro",
    "cidade",
    "estado",
];

const DEFAULT_LABELS: [(&str, &str); 25] = [
    ("animal", "Nome do Animal"),
    ("especie", "Espécie"),
    ("sexo", "Sexo"),
    ("pelagem", "Pelagem"),
    ("idade", "Idade"),
    ("porte", "Porte"),
    ("raca", "Raça"),
    ("castra", "Castrado"),
    ("tutor", "Nome do Tutor"),
    ("cpf", "CPF"),
    ("rg", "RG"),
    ("celular", "Celular"),
    ("telefone", "Telefone"),
    ("email", "E-mail"),
    ("profissao", "Profissão"),
    ("cep", "CEP"),
    ("logradouro", "Logradouro"),
    ("numero", "Número"),
    ("complemento", "Complemento"),
    ("bairro", "Bairro"),
    ("cidade", "Cidade"),
    ("estado", "Estado"),
    ("referencia", "Ponto de Referência"),
    ("observacoes", "Observações"),
    ("microchip", "Microchip"),
];

/// Placeholder replaced by the field label in [`FormMessages::required`].
pub const LABEL_PLACEHOLDER: &str = "{label}";

/// Messages used in form reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMessages {
    /// Template for a missing required field; `{label}` is substituted.
    pub required: String,
    pub invalid_cpf: String,
    pub invalid_email: String,
    pub invalid_mobile: String,
    pub invalid_postal_code: String,
    pub microchip_warning: String,
    pub rg_warning: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            required: "O campo \"{label}\" é obrigatório.".to_owned(),
            invalid_cpf: "CPF inválido.".to_owned(),
            invalid_email: "E-mail inválido.".to_owned(),
            invalid_mobile: "Celular inválido.".to_owned(),
            invalid_postal_code: "CEP inválido.".to_owned(),
            microchip_warning: "Microchip deve ter 15 dígitos.".to_owned(),
            rg_warning: "RG pode estar incompleto.".to_owned(),
        }
    }
}

/// Immutable configuration of a [`FormValidator`](super::FormValidator).
///
/// # Examples
///
/// ```
/// use castra_validator::form::FormConfig;
///
/// let config = FormConfig::default();
/// assert_eq!(config.label("tutor"), "Nome do Tutor");
/// assert_eq!(config.label("desconhecido"), "desconhecido");
/// assert_eq!(config.required_message("cpf"), "O campo \"CPF\" é obrigatório.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Required fields, in the order their errors are reported.
    pub required_fields: Vec<String>,
    /// Display label per field name.
    pub labels: BTreeMap<String, String>,
    /// Report messages.
    pub messages: FormMessages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            required_fields: DEFAULT_REQUIRED_FIELDS.iter().map(|f| (*f).to_owned()).collect(),
            labels: DEFAULT_LABELS
                .iter()
                .map(|(field, label)| ((*field).to_owned(), (*label).to_owned()))
                .collect(),
            messages: FormMessages::default(),
        }
    }
}

impl FormConfig {
    /// Replaces the required-field list.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_required_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the display label of one field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(field.into(), label.into());
        self
    }

    /// Display label of `field`, falling back to the field name.
    pub fn label<'a>(&'a self, field: &'a str) -> &'a str {
        self.labels.get(field).map_or(field, String::as_str)
    }

    /// The missing-field message for `field`.
    pub fn required_message(&self, field: &str) -> String {
        self.messages
            .required
            .replace(LABEL_PLACEHOLDER, self.label(field))
    }
}
