use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use empresas_export::config::{ACCOUNTS_SHEET, DEFAULT_INPUT, DEFAULT_SHEET, EMPLOYEES_SHEET};
use empresas_export::{export, extract, ui, ExportConfig, ExportSummary};

#[derive(Parser)]
#[command(name = "empresas-export")]
#[command(about = "Extrai os dados da planilha de controle e gera o JSON de importação", long_about = None)]
struct Cli {
    /// Modo silencioso (menos saída)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Modo verboso (mais detalhes)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Sem subcomando, executa `export` com os caminhos padrão
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lê a aba "Empresas" e grava o JSON para importação
    Export(SheetArgs),
    /// Lê a aba "Funcionários" e grava o JSON para importação
    Employees(SheetArgs),
    /// Lê a aba "Contas a Pagar e Receber" e grava o JSON para importação
    Accounts(SheetArgs),
    /// Lista as abas da planilha
    Sheets {
        /// Planilha de origem
        #[arg(short, long, env = "EMPRESAS_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

#[derive(Args)]
struct SheetArgs {
    /// Planilha de origem (.xlsx, .xls, .ods)
    #[arg(short, long, env = "EMPRESAS_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Nome da aba (padrão depende do subcomando)
    #[arg(short, long)]
    sheet: Option<String>,
    /// Arquivo JSON de saída, sobrescrito a cada execução (padrão depende do subcomando)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SheetArgs {
    fn into_config(self, defaults: ExportConfig) -> ExportConfig {
        ExportConfig {
            input: self.input,
            sheet: self.sheet.unwrap_or(defaults.sheet),
            output: self.output.unwrap_or(defaults.output),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ui::init(cli.quiet, cli.verbose);

    match cli.command {
        None => run_export(ExportConfig::default(), export::export_companies),
        Some(Commands::Export(args)) => {
            run_export(args.into_config(ExportConfig::companies()), export::export_companies)
        }
        Some(Commands::Employees(args)) => {
            run_export(args.into_config(ExportConfig::employees()), export::export_employees)
        }
        Some(Commands::Accounts(args)) => {
            run_export(args.into_config(ExportConfig::accounts()), export::export_accounts)
        }
        Some(Commands::Sheets { input }) => run_sheets(input),
    }
}

fn run_export(
    config: ExportConfig,
    run: fn(&ExportConfig) -> empresas_export::Result<ExportSummary>,
) -> Result<()> {
    run(&config).with_context(|| {
        format!("Falha ao exportar a aba '{}' de {:?}", config.sheet, config.input)
    })?;
    Ok(())
}

fn run_sheets(input: PathBuf) -> Result<()> {
    let sheets = extract::list_sheets(&input)
        .with_context(|| format!("Falha ao listar abas de {:?}", input))?;

    ui::print_header(&format!("📄 Abas de {}", input.display()));
    for (name, rows) in &sheets {
        ui::print_info(&format!("{} ({} linha(s))", name, rows));
    }
    for expected in [DEFAULT_SHEET, EMPLOYEES_SHEET, ACCOUNTS_SHEET] {
        if !sheets.iter().any(|(name, _)| name == expected) {
            ui::print_warning(&format!("A aba '{}' não existe nesta planilha", expected));
        }
    }
    Ok(())
}
