use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn init(quiet: bool, verbose: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue(), message);
    }
}

pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green().bold(), message.green());
    }
}

pub fn print_warning(message: &str) {
    if !is_quiet() {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }
}

pub fn print_header(message: &str) {
    if !is_quiet() {
        println!("\n{}", message.bold().cyan());
        println!("{}", "─".repeat(message.chars().count()).cyan());
    }
}

pub fn print_verbose(message: &str) {
    if is_verbose() && !is_quiet() {
        println!("  {}", message.dimmed());
    }
}

pub fn print_blank() {
    if !is_quiet() {
        println!();
    }
}

/// Linha já formatada de um registro (ver `export::record_lines`).
pub fn print_record(line: &str) {
    if !is_quiet() {
        println!("{}", line);
    }
}

/// Spinner para operações sem total conhecido (carga da planilha).
/// Em modo silencioso devolve uma barra oculta.
pub fn spinner(message: &str) -> ProgressBar {
    if is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
