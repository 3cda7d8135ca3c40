//! Subcommand implementations.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use castra_validator::form::{FormRecord, FormReport, FormValidator};
use castra_validator::foundation::{Validate, ValidateExt};
use castra_validator::mask::Mask;
use castra_validator::registry::{RegistryStats, SearchCriteria};
use castra_validator::validators::{
    Cnpj, Cpf, DateDmy, Email, Microchip, Phone, PostalCode, Rg, Weight,
};
use chrono::Local;
use clap::ValueEnum;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::export::{ExportFormat, Exporter};

/// Field kinds accepted by `castra check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    Cpf,
    Cnpj,
    Rg,
    Phone,
    Cep,
    Email,
    Microchip,
    Weight,
    Date,
}

impl CheckKind {
    /// Validator for the kind. Optional fields accept an empty value.
    fn validator(self) -> Box<dyn Validate<Input = str>> {
        match self {
            CheckKind::Cpf => Box::new(Cpf),
            CheckKind::Cnpj => Box::new(Cnpj),
            CheckKind::Rg => Box::new(Rg),
            CheckKind::Phone => Box::new(Phone::brazil()),
            CheckKind::Cep => Box::new(PostalCode),
            CheckKind::Email => Box::new(Email.allow_blank()),
            CheckKind::Microchip => Box::new(Microchip.allow_blank()),
            CheckKind::Weight => Box::new(Weight),
            CheckKind::Date => Box::new(DateDmy),
        }
    }
}

/// Field kinds accepted by `castra mask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskKind {
    Cpf,
    Cnpj,
    Rg,
    Phone,
    Cep,
}

impl From<MaskKind> for Mask {
    fn from(kind: MaskKind) -> Self {
        match kind {
            MaskKind::Cpf => Mask::Cpf,
            MaskKind::Cnpj => Mask::Cnpj,
            MaskKind::Rg => Mask::Rg,
            MaskKind::Phone => Mask::Phone,
            MaskKind::Cep => Mask::PostalCode,
        }
    }
}

/// `castra check`: prints `valid` or `invalid: <reason>`.
pub fn check(kind: CheckKind, value: &str, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    match kind.validator().validate(value) {
        Ok(()) => {
            writeln!(out, "valid")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            debug!(?kind, code = %err.code, "value rejected");
            writeln!(out, "invalid: {err}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// `castra mask`: prints the masked value.
pub fn mask(kind: MaskKind, value: &str, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    writeln!(out, "{}", Mask::from(kind).apply(value))?;
    Ok(ExitCode::SUCCESS)
}

/// `castra validate`: validates every record of a JSON file.
pub fn validate(
    config: &AppConfig,
    input: &Path,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let records = read_records(input)?;
    let validator = FormValidator::new(config.form.clone());
    let reports: Vec<FormReport> = records.iter().map(|r| validator.validate(r)).collect();
    let invalid = reports.iter().filter(|r| !r.valid).count();

    info!(records = reports.len(), invalid, "validation finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    } else {
        for (index, report) in reports.iter().enumerate() {
            let status = if report.valid { "valid" } else { "invalid" };
            writeln!(out, "record {}: {status}", index + 1)?;
            for error in &report.errors {
                writeln!(out, "  error: {error}")?;
            }
            for warning in &report.warnings {
                writeln!(out, "  warning: {warning}")?;
            }
        }
    }

    Ok(if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `castra export`: renders records to a file or stdout.
pub fn export(
    config: &AppConfig,
    input: &Path,
    format: ExportFormat,
    all_fields: bool,
    output: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let records = read_records(input)?;
    let exported_at = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
    let rendered = Exporter::new(&config.export, &config.form).render(
        format,
        &records,
        all_fields,
        &exported_at,
    )?;

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), records = records.len(), "export written");
        }
        None => out.write_all(rendered.as_bytes())?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Parses a `FIELD=TERM` search argument.
pub fn parse_term(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((field, term)) if !field.trim().is_empty() => {
            Ok((field.trim().to_owned(), term.to_owned()))
        }
        _ => Err(format!("expected FIELD=TERM, got '{arg}'")),
    }
}

/// `castra search`: prints the matching records as a JSON array.
pub fn search(
    input: &Path,
    terms: Vec<(String, String)>,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let records = read_records(input)?;
    let criteria: SearchCriteria = terms.into_iter().collect();
    let found = criteria.filter(&records);

    info!(records = records.len(), found = found.len(), "search finished");

    serde_json::to_writer_pretty(&mut *out, &found)?;
    writeln!(out)?;
    Ok(ExitCode::SUCCESS)
}

/// `castra stats`: prints record counts.
pub fn stats(input: &Path, json: bool, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let stats = RegistryStats::from_records(&read_records(input)?);

    if json {
        serde_json::to_writer_pretty(&mut *out, &stats)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Total de cadastros: {}", stats.total)?;
        writeln!(out, "Cães: {}", stats.dogs)?;
        writeln!(out, "Gatos: {}", stats.cats)?;
        writeln!(out, "Castrados: {}", stats.neutered)?;
        writeln!(out, "Com microchip: {}", stats.microchipped)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads records from a JSON file, or from stdin when `input` is `-`.
fn read_records(input: &Path) -> anyhow::Result<Vec<FormRecord>> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read records from stdin")?;
        text
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };

    let records = FormRecord::many_from_str(&text)
        .with_context(|| format!("invalid records in {}", input.display()))?;
    debug!(records = records.len(), "records loaded");
    Ok(records)
}
