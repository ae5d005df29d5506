use serde::{Deserialize, Serialize};

/// Situação usada quando a coluna de status está vazia.
pub const DEFAULT_STATUS: &str = "Open";

/// Empresa lida de uma linha da aba "Empresas".
///
/// Todos os campos são serializados, inclusive os ausentes (como `null`),
/// na mesma ordem das colunas da planilha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub legal_name: Option<String>,
    pub trade_name: Option<String>,
    pub tax_id: String,
    pub share_capital: Option<String>,
    pub activity_code: Option<String>,
    pub tax_regime: Option<String>,
    pub full_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub legal_representative: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_date: Option<String>,
    pub status: String,
}

impl CompanyRecord {
    /// Nome fantasia, ou razão social quando o nome fantasia está vazio.
    pub fn display_name(&self) -> Option<&str> {
        [&self.trade_name, &self.legal_name]
            .into_iter()
            .filter_map(|name| name.as_deref())
            .find(|name| !name.is_empty())
    }
}

pub const DEFAULT_CONTRACT_TYPE: &str = "PJ";
pub const DEFAULT_AMOUNT: &str = "0";
pub const DEFAULT_EMPLOYEE_STATUS: &str = "Hired";

/// Funcionário lido da aba "Funcionários".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub name: String,
    /// CPF do funcionário.
    pub tax_id: String,
    pub role: Option<String>,
    pub contract_type: String,
    pub base_salary: String,
    pub benefits: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Payable,
    Receivable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

pub const DEFAULT_ACCOUNT_STATUS: &str = "Pending";

/// Conta lida da aba "Contas a Pagar e Receber".
///
/// A planilha não traz vencimento; `due_date` recebe a data da exportação.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub kind: AccountKind,
    pub description: String,
    pub category: Option<String>,
    pub amount: String,
    pub due_date: String,
    pub status: String,
    pub priority: Priority,
}
