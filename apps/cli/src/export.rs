//! CSV, JSON and plain-text rendering of registration records.

use std::fmt;

use anyhow::ensure;
use castra_validator::form::{FormConfig, FormRecord};
use castra_validator::mask::{format_cpf, format_phone, format_postal_code};
use chrono::DateTime;
use clap::ValueEnum;

use crate::config::ExportConfig;

/// Fields exported by default, in column order.
pub const BASE_FIELDS: [&str; 26] = [
    "id",
    "animal",
    "especie",
    "sexo",
    "pelagem",
    "idade",
    "porte",
    "raca",
    "castra",
    "microchip",
    "observacoes",
    "tutor",
    "cpf",
    "rg",
    "celular",
    "telefone",
    "email",
    "profissao",
    "cep",
    "logradouro",
    "numero",
    "complemento",
    "bairro",
    "cidade",
    "estado",
    "referencia",
];

/// Bookkeeping timestamps appended by `--all-fields`.
pub const TIMESTAMP_FIELDS: [&str; 2] = ["dataCadastro", "ultimaAtualizacao"];

const REPORT_WIDTH: usize = 80;
const RECORD_RULE_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 25;

/// Output format of `castra export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Quoted, delimiter-separated values with a header row.
    Csv,
    /// Pretty-printed array of records.
    Json,
    /// Human-readable report.
    Txt,
}

/// Columns for an export.
pub fn fields(all_fields: bool) -> Vec<&'static str> {
    let mut fields = BASE_FIELDS.to_vec();
    if all_fields {
        fields.extend(TIMESTAMP_FIELDS);
    }
    fields
}

/// Renders records using the export and form configuration.
#[derive(Debug, Clone, Copy)]
pub struct Exporter<'a> {
    export: &'a ExportConfig,
    form: &'a FormConfig,
}

impl<'a> Exporter<'a> {
    pub fn new(export: &'a ExportConfig, form: &'a FormConfig) -> Self {
        Self { export, form }
    }

    /// Column label: export labels first, then form labels, then the name.
    pub fn label(&self, field: &'a str) -> &'a str {
        self.export
            .labels
            .get(field)
            .map_or_else(|| self.form.label(field), String::as_str)
    }

    /// Renders `records` in `format`.
    ///
    /// `exported_at` is printed in the text report header.
    pub fn render(
        &self,
        format: ExportFormat,
        records: &[FormRecord],
        all_fields: bool,
        exported_at: &str,
    ) -> anyhow::Result<String> {
        ensure!(!records.is_empty(), "nothing to export");

        tracing::debug!(?format, records = records.len(), all_fields, "rendering export");

        Ok(match format {
            ExportFormat::Csv => self.csv(records, all_fields),
            ExportFormat::Json => serde_json::to_string_pretty(records)? + "\n",
            ExportFormat::Txt => self.txt(records, exported_at)?,
        })
    }

    /// CSV with every cell quoted and embedded quotes doubled.
    pub fn csv(&self, records: &[FormRecord], all_fields: bool) -> String {
        let columns = fields(all_fields);
        let delimiter = self.export.delimiter.to_string();

        let header: Vec<String> = columns.iter().map(|f| quote(self.label(f))).collect();
        let mut out = header.join(&delimiter);
        out.push('\n');

        for record in records {
            let row: Vec<String> = columns
                .iter()
                .map(|field| quote(&csv_value(field, record.get(field).unwrap_or_default())))
                .collect();
            out.push_str(&row.join(&delimiter));
            out.push('\n');
        }

        out
    }

    /// Plain-text report listing the non-empty fields of every record.
    pub fn txt(&self, records: &[FormRecord], exported_at: &str) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_txt(&mut out, records, exported_at)?;
        Ok(out)
    }

    fn write_txt(
        &self,
        out: &mut impl fmt::Write,
        records: &[FormRecord],
        exported_at: &str,
    ) -> fmt::Result {
        let banner = "=".repeat(REPORT_WIDTH);
        let total = records.len();

        writeln!(out, "{banner}\n{}\n{banner}\n", self.export.title)?;
        writeln!(out, "Data da exportação: {exported_at}")?;
        writeln!(out, "Total de registros: {total}")?;
        writeln!(out, "\n{banner}\n")?;

        for (index, record) in records.iter().enumerate() {
            writeln!(out, "REGISTRO {} de {total}", index + 1)?;
            writeln!(out, "{}", "-".repeat(RECORD_RULE_WIDTH))?;

            for field in fields(true) {
                if let Some(raw) = record.filled(field) {
                    let label = self.label(field);
                    writeln!(
                        out,
                        "{label:<width$}: {}",
                        txt_value(field, raw),
                        width = LABEL_WIDTH
                    )?;
                }
            }
            writeln!(out)?;
        }

        writeln!(out, "{banner}\nFIM DO RELATÓRIO\n{banner}")
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_value(field: &str, raw: &str) -> String {
    match field {
        "cpf" => format_cpf(raw),
        "celular" | "telefone" => format_phone(raw),
        "cep" => format_postal_code(raw),
        f if TIMESTAMP_FIELDS.contains(&f) => format_timestamp(raw),
        _ => raw.to_owned(),
    }
}

fn txt_value(field: &str, raw: &str) -> String {
    match field {
        "cpf" => format_cpf(raw),
        f if TIMESTAMP_FIELDS.contains(&f) => format_timestamp(raw),
        _ => raw.to_owned(),
    }
}

/// `2024-03-10T14:30:00Z` → `10/03/2024 14:30:00`, in the timestamp's own
/// offset. Anything that is not RFC 3339 is kept as-is.
fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> FormRecord {
        FormRecord::new()
            .with("id", "m1x")
            .with("animal", "Mel \"Pequena\"")
            .with("cpf", "52998224725")
            .with("celular", "11987654321")
            .with("cep", "01310100")
            .with("dataCadastro", "2024-03-10T14:30:00.000Z")
    }

    #[test]
    fn test_fields() {
        assert_eq!(fields(false).len(), 26);
        assert_eq!(fields(true).last(), Some(&"ultimaAtualizacao"));
    }

    #[test]
    fn test_labels() {
        let export = ExportConfig::default();
        let form = FormConfig::default();
        let exporter = Exporter::new(&export, &form);
        assert_eq!(exporter.label("raca"), "Raça Definida");
        assert_eq!(exporter.label("especie"), "Espécie");
        assert_eq!(exporter.label("outro"), "outro");
    }

    #[test]
    fn test_csv() {
        let export = ExportConfig::default();
        let form = FormConfig::default();
        let csv = Exporter::new(&export, &form).csv(&[record()], true);
        let mut lines = csv.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("\"ID\";\"Nome do Animal\";\"Espécie\";"));
        assert!(header.ends_with(";\"Data do Cadastro\";\"Última Atualização\""));

        let row: Vec<&str> = lines.next().unwrap().split(';').collect();
        assert_eq!(row.len(), 28);
        assert_eq!(row[0], "\"m1x\"");
        assert_eq!(row[1], "\"Mel \"\"Pequena\"\"\"");
        assert_eq!(row[12], "\"529.982.247-25\"");
        assert_eq!(row[14], "\"(11) 98765-4321\"");
        assert_eq!(row[18], "\"01310-100\"");
        assert_eq!(row[26], "\"10/03/2024 14:30:00\"");
        assert_eq!(row[27], "\"\"");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_custom_delimiter() {
        let export = ExportConfig {
            delimiter: ',',
            ..ExportConfig::default()
        };
        let form = FormConfig::default();
        let csv = Exporter::new(&export, &form).csv(&[FormRecord::new()], false);
        assert!(csv.starts_with("\"ID\",\"Nome do Animal\","));
    }

    #[test]
    fn test_txt() {
        let export = ExportConfig::default();
        let form = FormConfig::default();
        let txt = Exporter::new(&export, &form).txt(&[record(), record()], "01/01/2025 08:00:00")
            .unwrap();

        assert!(txt.starts_with(&format!("{}\nRELATÓRIO CASTRA PET", "=".repeat(80))));
        assert!(txt.contains("Data da exportação: 01/01/2025 08:00:00\n"));
        assert!(txt.contains("Total de registros: 2\n"));
        assert!(txt.contains("REGISTRO 2 de 2\n----------------------------------------\n"));
        assert!(txt.contains("CPF                      : 529.982.247-25\n"));
        assert!(txt.contains("Data do Cadastro         : 10/03/2024 14:30:00\n"));
        assert!(txt.contains("Celular                  : 11987654321\n"));
        assert!(!txt.contains("Microchip"));
        assert!(txt.ends_with(&format!("FIM DO RELATÓRIO\n{}\n", "=".repeat(80))));
    }

    #[test]
    fn test_render_rejects_empty_input() {
        let export = ExportConfig::default();
        let form = FormConfig::default();
        let err = Exporter::new(&export, &form)
            .render(ExportFormat::Json, &[], false, "")
            .unwrap_err();
        assert_eq!(err.to_string(), "nothing to export");
    }

    #[test]
    fn test_render_json() {
        let export = ExportConfig::default();
        let form = FormConfig::default();
        let json = Exporter::new(&export, &form)
            .render(ExportFormat::Json, &[FormRecord::new().with("animal", "Rex")], false, "")
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!([{"animal": "Rex"}]));
    }

    #[test]
    fn test_timestamps_keep_unparseable_values() {
        assert_eq!(format_timestamp("ontem"), "ontem");
        assert_eq!(format_timestamp("2024-03-10T11:30:00-03:00"), "10/03/2024 11:30:00");
    }
}
