use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "/home/ubuntu/upload/Controle_Empresarial_Nivel_CEO.xlsx";
pub const DEFAULT_SHEET: &str = "Empresas";
pub const DEFAULT_OUTPUT: &str = "/tmp/empresas_import.json";

pub const EMPLOYEES_SHEET: &str = "Funcionários";
pub const EMPLOYEES_OUTPUT: &str = "/tmp/funcionarios_import.json";

pub const ACCOUNTS_SHEET: &str = "Contas a Pagar e Receber";
pub const ACCOUNTS_OUTPUT: &str = "/tmp/contas_import.json";

/// Caminhos resolvidos de uma execução de exportação.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub sheet: String,
    pub output: PathBuf,
}

impl ExportConfig {
    fn with(sheet: &str, output: &str) -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sheet: sheet.to_string(),
            output: PathBuf::from(output),
        }
    }

    pub fn companies() -> Self {
        Self::with(DEFAULT_SHEET, DEFAULT_OUTPUT)
    }

    pub fn employees() -> Self {
        Self::with(EMPLOYEES_SHEET, EMPLOYEES_OUTPUT)
    }

    pub fn accounts() -> Self {
        Self::with(ACCOUNTS_SHEET, ACCOUNTS_OUTPUT)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::companies()
    }
}
