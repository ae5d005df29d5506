//! Planilha de controle gerada para os testes de integração.
#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};

pub const COMPANY_TAX_ID: &str = "12.345.678/0001-90";
pub const SECOND_TAX_ID: &str = "98.765.432/0001-10";

const COMPANY_HEADER: [&str; 15] = [
    "ID",
    "Razão Social",
    "Nome Fantasia",
    "CNPJ",
    "Capital Social",
    "CNAE",
    "Regime Tributário",
    "Endereço Completo",
    "Cidade",
    "Estado",
    "Responsável Legal",
    "Telefone",
    "E-mail",
    "Data de Abertura",
    "Status",
];

fn write_strings(sheet: &mut Worksheet, row: u32, cells: &[(u16, &str)]) {
    for (col, value) in cells {
        sheet.write_string(row, *col, *value).unwrap();
    }
}

/// Grava `controle.xlsx` em `dir` com as abas "Empresas", "Funcionários" e
/// "Contas a Pagar e Receber".
///
/// Empresas: linha 2 completa (capital 100000, abertura em data, status
/// vazio), linha 3 sem CNPJ, linha 4 sem nome fantasia e com status.
pub fn write_control_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("controle.xlsx");
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let companies = workbook.add_worksheet().set_name("Empresas").unwrap();
    for (col, title) in COMPANY_HEADER.iter().enumerate() {
        companies.write_string(0, col as u16, *title).unwrap();
    }

    companies.write_number(1, 0, 1).unwrap();
    write_strings(
        companies,
        1,
        &[
            (1, "Comércio de Alimentos Ltda"),
            (2, "Mercadão"),
            (3, COMPANY_TAX_ID),
            (5, "4711-3/02"),
            (6, "Simples Nacional"),
            (7, "Rua das Flores, 100"),
            (8, "São Paulo"),
            (9, "SP"),
            (10, "Maria Souza"),
            (11, "(11) 3333-4444"),
            (12, "contato@mercadao.com.br"),
        ],
    );
    companies.write_number(1, 4, 100000).unwrap();
    let opening = ExcelDateTime::from_ymd(2015, 6, 10).unwrap();
    companies
        .write_datetime_with_format(1, 13, &opening, &date_format)
        .unwrap();

    companies.write_number(2, 0, 2).unwrap();
    write_strings(companies, 2, &[(1, "Sem Cadastro ME"), (8, "Campinas")]);

    companies.write_number(3, 0, 3).unwrap();
    write_strings(
        companies,
        3,
        &[
            (1, "Ferragens Silva Ltda"),
            (3, SECOND_TAX_ID),
            (8, "Curitiba"),
            (14, "Suspenso"),
        ],
    );

    let employees = workbook.add_worksheet().set_name("Funcionários").unwrap();
    write_strings(
        employees,
        0,
        &[(1, "Nome"), (2, "CPF"), (4, "Cargo"), (5, "Contrato"), (11, "Status")],
    );
    write_strings(
        employees,
        1,
        &[(1, "Ana Lima"), (2, "123.456.789-00"), (4, "Analista Fiscal")],
    );
    employees.write_number(1, 6, 4500).unwrap();
    write_strings(employees, 2, &[(2, "987.654.321-00"), (4, "Estagiário")]);

    let accounts = workbook
        .add_worksheet()
        .set_name("Contas a Pagar e Receber")
        .unwrap();
    write_strings(
        accounts,
        0,
        &[(0, "Tipo"), (2, "Descrição"), (3, "Categoria"), (4, "Valor"), (7, "Prioridade")],
    );
    write_strings(
        accounts,
        1,
        &[(0, "pagar"), (2, "Aluguel do escritório"), (3, "Infraestrutura"), (7, "alta")],
    );
    accounts.write_number(1, 4, 3200.5).unwrap();
    write_strings(accounts, 2, &[(0, "receber")]);

    workbook.save(&path).unwrap();
    path
}
