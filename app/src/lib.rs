pub mod cells;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod ui;

pub use config::ExportConfig;
pub use error::{ExportError, Result};
pub use export::{export_accounts, export_companies, export_employees, ExportSummary};
pub use models::{AccountRecord, CompanyRecord, EmployeeRecord};
