//! solkit: print Solidity source from solc JSON ASTs.
//!
//! Usage:
//!   solkit [options] <file...>
//!
//! Each input is a compact-JSON `SourceUnit` (`solc --ast-compact-json`) or,
//! with `--standard-json`, a standard-JSON output holding several sources.

mod logging;

use clap::Parser as ClapParser;
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use solkit_ast::SourceTree;
use solkit_astjson::LoadedUnit;
use solkit_core::{AstArena, StringInterner};
use solkit_diagnostics::{Diagnostic, DiagnosticCollection};
use solkit_options::SolkitConfig;
use solkit_printer::{Printer, PrinterOptions};
use std::path::{Path, PathBuf};
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "solkit", version, about = "solkit - print Solidity source from solc JSON ASTs")]
struct Cli {
    /// JSON AST files to print.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Path to solkit.json. Defaults to ./solkit.json when present.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Write `<stem>.sol` files to this directory instead of stdout.
    #[arg(long = "out-dir")]
    out_dir: Option<String>,

    /// Spaces per nesting level.
    #[arg(long)]
    indent: Option<usize>,

    /// Exit with status 2 when any output is partial.
    #[arg(long)]
    strict: bool,

    /// Inputs are standard-JSON compiler outputs.
    #[arg(long = "standard-json")]
    standard_json: bool,

    /// Log filter such as `debug` or `solkit_printer=trace`. Overrides RUST_LOG.
    #[arg(long = "log-level")]
    log_level: Option<String>,

    /// Color diagnostics when stderr is a terminal.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pretty: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Exit status when `--strict` is set and some output is partial.
const EXIT_PARTIAL: i32 = 2;

fn main() {
    let cli = Cli::parse();
    let use_color = cli.pretty && atty_is_terminal();
    logging::init_logger(cli.log_level.as_deref(), use_color);

    let code = match run(&cli, use_color) {
        Ok(code) => code,
        Err(report) => {
            eprintln!("{report:?}");
            1
        }
    };
    process::exit(code);
}

fn run(cli: &Cli, use_color: bool) -> Result<i32> {
    let config = resolve_config(cli)?;
    let options = printer_options(&config)?;

    let mut partial = 0usize;
    let mut errors = 0usize;
    for path in &cli.files {
        let text = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;

        let interner = StringInterner::new();
        let arena = AstArena::new();
        let units = load_units(cli, path, &text, &interner, &arena)?;

        for (name, unit) in units {
            let report = print_unit(&name, unit, &interner, &options, config.out_dir.as_deref())?;
            for diag in &report.diagnostics {
                print_diagnostic(diag, use_color);
            }
            errors += report.diagnostics.error_count();
            if !report.success {
                partial += 1;
            }
        }
    }

    if errors > 0 {
        let summary = format!(
            "Found {} error{} in {} partial output{}.",
            errors,
            if errors == 1 { "" } else { "s" },
            partial,
            if partial == 1 { "" } else { "s" }
        );
        if use_color {
            eprintln!("\n{RED}{summary}{RESET}");
        } else {
            eprintln!("\n{summary}");
        }
    }

    Ok(if partial > 0 && config.is_strict() { EXIT_PARTIAL } else { 0 })
}

/// solkit.json (explicit or found in the working directory) with flags applied on top.
fn resolve_config(cli: &Cli) -> Result<SolkitConfig> {
    let file = match &cli.config {
        Some(path) => solkit_options::parse_config_file(path).into_diagnostic()?,
        None if Path::new("solkit.json").exists() => {
            solkit_options::parse_config_file("solkit.json").into_diagnostic()?
        }
        None => SolkitConfig::default(),
    };
    let flags = SolkitConfig {
        indent_width: cli.indent,
        out_dir: cli.out_dir.clone(),
        strict: cli.strict.then_some(true),
        ..SolkitConfig::default()
    };
    Ok(file.merged_with(&flags))
}

fn printer_options(config: &SolkitConfig) -> Result<PrinterOptions> {
    let defaults = PrinterOptions::default();
    let indent_width = config.indent_width.unwrap_or(defaults.indent_width);
    if indent_width > 16 {
        return Err(miette!("indent width {indent_width} is out of range (0-16)"));
    }
    Ok(PrinterOptions {
        indent_width,
        new_line: config
            .new_line
            .map(|n| n.as_str().to_string())
            .unwrap_or(defaults.new_line),
        emit_license: config.emit_license.unwrap_or(defaults.emit_license),
    })
}

fn load_units<'a>(
    cli: &Cli,
    path: &Path,
    text: &str,
    interner: &'a StringInterner,
    arena: &'a AstArena,
) -> Result<Vec<(String, LoadedUnit<'a>)>> {
    let name = path.display().to_string();
    if cli.standard_json {
        solkit_astjson::load_standard_json_str(interner, arena, text)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to load '{name}'"))
    } else {
        let mut unit = solkit_astjson::load_str(interner, arena, text)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to load '{name}'"))?;
        unit.diagnostics.set_file(&name);
        Ok(vec![(name, unit)])
    }
}

struct UnitReport {
    success: bool,
    diagnostics: DiagnosticCollection,
}

fn print_unit(
    name: &str,
    unit: LoadedUnit<'_>,
    interner: &StringInterner,
    options: &PrinterOptions,
    out_dir: Option<&str>,
) -> Result<UnitReport> {
    let tree = SourceTree::new(unit.root, interner);
    let mut output = Printer::with_options(&tree, options.clone()).print_source_unit();
    tracing::info!(unit = name, success = output.success, bytes = output.text.len(), "printed");

    match out_dir {
        Some(dir) => {
            let target = output_path(dir, name);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
            }
            std::fs::write(&target, &output.text)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write '{}'", target.display()))?;
        }
        None => print!("{}", output.text),
    }

    let mut diagnostics = unit.diagnostics;
    output.diagnostics.set_file(name);
    diagnostics.extend(output.diagnostics);
    diagnostics.sort();
    Ok(UnitReport {
        success: output.success,
        diagnostics,
    })
}

/// `<out_dir>/<stem>.sol`, with `Foo.json` and `Foo.sol` both becoming `Foo.sol`.
fn output_path(out_dir: &str, name: &str) -> PathBuf {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    Path::new(out_dir).join(format!("{stem}.sol"))
}

fn print_diagnostic(diag: &Diagnostic, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        if let Some(ref file) = diag.file {
            eprint!("{CYAN}{file}{RESET}");
            if let Some(span) = diag.span {
                eprint!("({})", span.start);
            }
            eprint!(": ");
        }
        eprintln!(
            "{BOLD}{color}{}{RESET} {CYAN}SK{}{RESET}: {}",
            diag.category, diag.code, diag.message_text
        );
    } else {
        eprintln!("{diag}");
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
