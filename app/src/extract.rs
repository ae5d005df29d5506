use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::Path;

use crate::cells::{cell_text, is_truthy, non_empty_text, truthy_text};
use crate::error::{ExportError, Result};
use crate::models::{
    AccountKind, AccountRecord, CompanyRecord, EmployeeRecord, Priority, DEFAULT_ACCOUNT_STATUS,
    DEFAULT_AMOUNT, DEFAULT_CONTRACT_TYPE, DEFAULT_EMPLOYEE_STATUS, DEFAULT_STATUS,
};

/// Colunas (base 0) de cada aba.
pub mod columns {
    pub mod company {
        pub const LEGAL_NAME: u32 = 1;
        pub const TRADE_NAME: u32 = 2;
        pub const TAX_ID: u32 = 3;
        pub const SHARE_CAPITAL: u32 = 4;
        pub const ACTIVITY_CODE: u32 = 5;
        pub const TAX_REGIME: u32 = 6;
        pub const FULL_ADDRESS: u32 = 7;
        pub const CITY: u32 = 8;
        pub const STATE: u32 = 9;
        pub const LEGAL_REPRESENTATIVE: u32 = 10;
        pub const PHONE: u32 = 11;
        pub const EMAIL: u32 = 12;
        pub const OPENING_DATE: u32 = 13;
        pub const STATUS: u32 = 14;
    }

    pub mod employee {
        pub const NAME: u32 = 1;
        pub const TAX_ID: u32 = 2;
        pub const ROLE: u32 = 4;
        pub const CONTRACT_TYPE: u32 = 5;
        pub const BASE_SALARY: u32 = 6;
        pub const BENEFITS: u32 = 7;
        pub const STATUS: u32 = 11;
    }

    pub mod account {
        pub const KIND: u32 = 0;
        pub const DESCRIPTION: u32 = 2;
        pub const CATEGORY: u32 = 3;
        pub const AMOUNT: u32 = 4;
        pub const PRIORITY: u32 = 7;
    }
}

/// Primeira linha de dados (base 0); a linha 0 é o cabeçalho.
const FIRST_DATA_ROW: u32 = 1;

/// Uma linha de dados da aba, endereçada por posição absoluta.
pub struct RowCells<'a> {
    range: &'a Range<Data>,
    row: u32,
    today: NaiveDate,
}

impl<'a> RowCells<'a> {
    pub fn get(&self, col: u32) -> Option<&'a Data> {
        self.range.get_value((self.row, col))
    }

    /// Data da extração, para campos que a planilha não traz.
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Registro montado a partir de uma linha de aba.
pub trait SheetRecord: Serialize + Sized {
    /// `None` quando a linha não passa no filtro da aba.
    fn from_row(row: &RowCells<'_>) -> Option<Self>;

    /// Linha de console do registro, sem indentação.
    fn summary(&self) -> String;

    /// Mensagem com o total encontrado.
    fn found_message(count: usize) -> String;
}

impl SheetRecord for CompanyRecord {
    fn from_row(row: &RowCells<'_>) -> Option<Self> {
        use columns::company::*;

        if !is_truthy(row.get(TAX_ID)) {
            return None;
        }

        Some(CompanyRecord {
            legal_name: cell_text(row.get(LEGAL_NAME)),
            trade_name: cell_text(row.get(TRADE_NAME)),
            tax_id: cell_text(row.get(TAX_ID))?,
            share_capital: truthy_text(row.get(SHARE_CAPITAL)),
            activity_code: cell_text(row.get(ACTIVITY_CODE)),
            tax_regime: cell_text(row.get(TAX_REGIME)),
            full_address: cell_text(row.get(FULL_ADDRESS)),
            city: cell_text(row.get(CITY)),
            state: cell_text(row.get(STATE)),
            legal_representative: cell_text(row.get(LEGAL_REPRESENTATIVE)),
            phone: cell_text(row.get(PHONE)),
            email: cell_text(row.get(EMAIL)),
            opening_date: truthy_text(row.get(OPENING_DATE)),
            status: truthy_text(row.get(STATUS)).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.display_name().unwrap_or("sem nome"), self.tax_id)
    }

    fn found_message(count: usize) -> String {
        format!("Encontradas {} empresas na planilha", count)
    }
}

impl SheetRecord for EmployeeRecord {
    fn from_row(row: &RowCells<'_>) -> Option<Self> {
        use columns::employee::*;

        let or_default =
            |col: u32, default: &str| non_empty_text(row.get(col)).unwrap_or_else(|| default.to_string());

        Some(EmployeeRecord {
            tax_id: non_empty_text(row.get(TAX_ID))?,
            name: non_empty_text(row.get(NAME))?,
            role: cell_text(row.get(ROLE)),
            contract_type: or_default(CONTRACT_TYPE, DEFAULT_CONTRACT_TYPE),
            base_salary: or_default(BASE_SALARY, DEFAULT_AMOUNT),
            benefits: or_default(BENEFITS, DEFAULT_AMOUNT),
            status: or_default(STATUS, DEFAULT_EMPLOYEE_STATUS),
        })
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, self.tax_id)
    }

    fn found_message(count: usize) -> String {
        format!("Encontrados {} funcionários na planilha", count)
    }
}

impl SheetRecord for AccountRecord {
    fn from_row(row: &RowCells<'_>) -> Option<Self> {
        use columns::account::*;

        let kind_text = cell_text(row.get(KIND));
        // Sem descrição, usa o texto da coluna de tipo
        let description = non_empty_text(row.get(DESCRIPTION))
            .or_else(|| kind_text.clone().filter(|text| !text.is_empty()))?;

        let kind = match kind_text.as_deref() {
            Some("pagar") => AccountKind::Payable,
            _ => AccountKind::Receivable,
        };
        let priority = match cell_text(row.get(PRIORITY)).as_deref() {
            Some("alta") => Priority::High,
            _ => Priority::Medium,
        };

        Some(AccountRecord {
            kind,
            description,
            category: cell_text(row.get(CATEGORY)),
            amount: non_empty_text(row.get(AMOUNT)).unwrap_or_else(|| DEFAULT_AMOUNT.to_string()),
            due_date: row.today().format("%Y-%m-%d").to_string(),
            status: DEFAULT_ACCOUNT_STATUS.to_string(),
            priority,
        })
    }

    fn summary(&self) -> String {
        let kind = match self.kind {
            AccountKind::Payable => "pagar",
            AccountKind::Receivable => "receber",
        };
        format!("{} [{}] {}", self.description, kind, self.amount)
    }

    fn found_message(count: usize) -> String {
        format!("Encontradas {} contas na planilha", count)
    }
}

#[derive(Debug)]
pub struct Extraction<T> {
    pub records: Vec<T>,
    /// Linhas de dados descartadas pelo filtro da aba.
    pub skipped: usize,
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// Abre a planilha e carrega a aba inteira em memória.
pub fn open_sheet(path: &Path, sheet: &str) -> Result<Range<Data>> {
    if !path.exists() {
        return Err(ExportError::InputNotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(ExportError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    Ok(workbook.worksheet_range(sheet)?)
}

/// Nomes das abas com a quantidade de linhas usadas em cada uma.
pub fn list_sheets(path: &Path) -> Result<Vec<(String, usize)>> {
    if !path.exists() {
        return Err(ExportError::InputNotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        sheets.push((name, range.height()));
    }
    Ok(sheets)
}

/// Percorre as linhas de dados da aba e monta os registros.
///
/// As células são lidas pela posição absoluta (linha 1 = cabeçalho), então
/// uma aba cujo intervalo usado não começa em A1 continua alinhada às
/// colunas esperadas. Células fora do intervalo contam como vazias.
pub fn extract_records<T: SheetRecord>(range: &Range<Data>) -> Extraction<T> {
    extract_records_on(range, Local::now().date_naive())
}

pub fn extract_records_on<T: SheetRecord>(range: &Range<Data>, today: NaiveDate) -> Extraction<T> {
    let mut extraction = Extraction::default();
    let Some((last_row, _)) = range.end() else {
        return extraction;
    };

    for row in FIRST_DATA_ROW..=last_row {
        let cells = RowCells { range, row, today };
        match T::from_row(&cells) {
            Some(record) => extraction.records.push(record),
            None => extraction.skipped += 1,
        }
    }

    extraction
}
