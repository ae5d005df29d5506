use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::extract::{self, SheetRecord};
use crate::models::{AccountRecord, CompanyRecord, EmployeeRecord};
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Lê a aba de empresas e grava o JSON de importação.
pub fn export_companies(config: &ExportConfig) -> Result<ExportSummary> {
    export_sheet::<CompanyRecord>(config)
}

pub fn export_employees(config: &ExportConfig) -> Result<ExportSummary> {
    export_sheet::<EmployeeRecord>(config)
}

pub fn export_accounts(config: &ExportConfig) -> Result<ExportSummary> {
    export_sheet::<AccountRecord>(config)
}

/// Lê uma aba, lista os registros no console e grava o JSON.
pub fn export_sheet<T: SheetRecord>(config: &ExportConfig) -> Result<ExportSummary> {
    ui::print_verbose(&format!("Hora de início: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    ui::print_verbose(&format!("Planilha: {:?} (aba '{}')", config.input, config.sheet));

    let pb = ui::spinner("Carregando planilha...");
    let range = extract::open_sheet(&config.input, &config.sheet);
    pb.finish_and_clear();
    let range = range?;

    let extraction = extract::extract_records::<T>(&range);
    let records = &extraction.records;

    ui::print_success(&T::found_message(records.len()));
    for line in record_lines(records) {
        ui::print_record(&line);
    }
    if extraction.skipped > 0 {
        ui::print_verbose(&format!("{} linha(s) ignorada(s) pelo filtro da aba", extraction.skipped));
    }
    if records.is_empty() {
        ui::print_warning("Nenhum registro encontrado; o arquivo terá uma lista vazia");
    }

    write_json(&config.output, records)?;

    ui::print_blank();
    ui::print_success(&format!("Dados salvos em {}", config.output.display()));
    ui::print_verbose(&format!("Hora de término: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));

    Ok(ExportSummary {
        written: records.len(),
        skipped: extraction.skipped,
    })
}

/// Uma linha de console por registro.
pub fn record_lines<T: SheetRecord>(records: &[T]) -> Vec<String> {
    records
        .iter()
        .map(|rec| format!("  - {}", rec.summary()))
        .collect()
}

/// Grava os registros como array JSON indentado (2 espaços, UTF-8).
/// O arquivo existente é sobrescrito.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let output_err = |source: io::Error| ExportError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
        if e.is_io() {
            output_err(io::Error::from(e))
        } else {
            ExportError::Json(e)
        }
    })?;
    writer.flush().map_err(output_err)?;
    Ok(())
}
