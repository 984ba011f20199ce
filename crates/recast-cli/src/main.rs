// crates/recast-cli/src/main.rs
// ============================================================================
// Module: Recast CLI Entry Point
// Description: Command dispatcher for catalog export and batch translation.
// Purpose: Provide a safe, localized CLI over the Recast translation engine.
// Dependencies: clap, recast-core, recast-sources, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The Recast CLI exports the built-in validation message catalog as seed
//! translation data and batch-translates error files against a translations
//! directory. All user-facing strings are routed through the i18n catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use recast_cli::catalog;
use recast_cli::catalog::ExportFormat;
use recast_cli::i18n::Locale;
use recast_cli::i18n::set_locale;
use recast_cli::t;
use recast_core::ErrorRecord;
use recast_core::SourceError;
use recast_core::TemplateSource;
use recast_core::runtime::Translator;
use recast_sources::JsonDirSource;
use recast_sources::PoDirSource;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of an errors JSON input file.
const MAX_ERRORS_BYTES: usize = 8 * 1024 * 1024;
/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "RECAST_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "recast", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `RECAST_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export the built-in validation message catalog.
    Messages(MessagesCommand),
    /// Translate a JSON errors file into a target locale.
    Translate(TranslateCommand),
}

/// Arguments for the `messages` command.
#[derive(Args, Debug)]
struct MessagesCommand {
    /// Output format for the catalog.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = ExportFormatArg::Dict)]
    format: ExportFormatArg,
    /// Optional output path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

/// Arguments for the `translate` command.
#[derive(Args, Debug)]
struct TranslateCommand {
    /// Path to the JSON file holding an array of error records.
    #[arg(long, value_name = "PATH")]
    errors: PathBuf,
    /// Directory holding per-locale translation files.
    #[arg(long, value_name = "DIR")]
    translations: PathBuf,
    /// Format of the translation files in the directory.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = SourceFormatArg::Json)]
    source_format: SourceFormatArg,
    /// Target locale to translate into.
    #[arg(long, value_name = "LOCALE")]
    locale: String,
    /// Locale whose templates define the known message universe.
    #[arg(long, value_name = "LOCALE", default_value = "en_US")]
    default_locale: String,
    /// Optional output path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

/// CLI locale argument values.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Portuguese.
    Pt,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Pt => Self::Pt,
        }
    }
}

/// Catalog export format argument values.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum ExportFormatArg {
    /// Plain tab-separated mapping.
    Dict,
    /// Pretty-printed JSON object.
    Json,
    /// Gettext-style msgid/msgstr skeleton.
    Babel,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Dict => Self::Dict,
            ExportFormatArg::Json => Self::Json,
            ExportFormatArg::Babel => Self::Babel,
        }
    }
}

/// Translation source format argument values.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum SourceFormatArg {
    /// Directory of `<locale>.json` files.
    Json,
    /// Directory of `<locale>.po` gettext catalogs.
    Po,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Messages(command) => command_messages(&command),
        Commands::Translate(command) => command_translate(&command),
    }
}

// ============================================================================
// SECTION: Messages Command
// ============================================================================

/// Executes the `messages` command.
fn command_messages(command: &MessagesCommand) -> CliResult<ExitCode> {
    let templates = catalog::builtin_templates();
    let rendered = catalog::export(command.format.into(), &templates)
        .map_err(|err| CliError::new(t!("messages.render_failed", error = err)))?;

    match &command.out {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes()).map_err(|err| {
                CliError::new(t!(
                    "messages.write_failed",
                    path = path.display(),
                    error = err
                ))
            })?;
            write_stdout_line(&t!("messages.ok", path = path.display()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        None => {
            write_stdout_text(&rendered)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Translate Command
// ============================================================================

/// Executes the `translate` command.
fn command_translate(command: &TranslateCommand) -> CliResult<ExitCode> {
    let contents = read_errors_with_limit(&command.errors)?;
    let errors: Vec<ErrorRecord> = serde_json::from_str(&contents).map_err(|err| {
        CliError::new(t!(
            "translate.errors.parse_failed",
            path = command.errors.display(),
            error = err
        ))
    })?;

    let source = load_source(command.source_format, &command.translations)?;
    let translator =
        Translator::new(source, command.default_locale.as_str()).map_err(|err| {
            CliError::new(t!("translate.engine.init_failed", error = err))
        })?;
    let translated = translator
        .translate(&errors, &recast_core::Locale::new(command.locale.as_str()))
        .map_err(|err| CliError::new(t!("translate.failed", error = err)))?;

    let rendered = serde_json::to_string_pretty(&translated)
        .map_err(|err| CliError::new(t!("translate.serialize_failed", error = err)))?;

    match &command.out {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes()).map_err(|err| {
                CliError::new(t!(
                    "translate.write_failed",
                    path = path.display(),
                    error = err
                ))
            })?;
            write_stdout_line(&t!("translate.ok", path = path.display()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        None => {
            write_stdout_text(&rendered)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Translation source backends selectable on the command line.
#[derive(Debug)]
enum SourceBackend {
    /// JSON translations directory.
    Json(JsonDirSource),
    /// Gettext translations directory.
    Po(PoDirSource),
}

impl TemplateSource for SourceBackend {
    fn translations(
        &self,
        locale: &recast_core::Locale,
    ) -> Result<BTreeMap<String, String>, SourceError> {
        match self {
            Self::Json(source) => source.translations(locale),
            Self::Po(source) => source.translations(locale),
        }
    }

    fn gettext(
        &self,
        template: &str,
        locale: &recast_core::Locale,
    ) -> Result<String, SourceError> {
        match self {
            Self::Json(source) => source.gettext(template, locale),
            Self::Po(source) => source.gettext(template, locale),
        }
    }

    fn locales(&self) -> Vec<recast_core::Locale> {
        match self {
            Self::Json(source) => source.locales(),
            Self::Po(source) => source.locales(),
        }
    }
}

/// Loads the translations directory in the selected format.
fn load_source(format: SourceFormatArg, dir: &Path) -> CliResult<SourceBackend> {
    let loaded = match format {
        SourceFormatArg::Json => JsonDirSource::load(dir).map(SourceBackend::Json),
        SourceFormatArg::Po => PoDirSource::load(dir).map(SourceBackend::Po),
    };
    loaded.map_err(|err| {
        CliError::new(t!(
            "translate.translations.load_failed",
            path = dir.display(),
            error = err
        ))
    })
}

/// Reads the errors file while enforcing the input size limit.
fn read_errors_with_limit(path: &Path) -> CliResult<String> {
    let file = std::fs::File::open(path).map_err(|err| {
        CliError::new(t!("translate.errors.read_failed", path = path.display(), error = err))
    })?;
    let mut limited = file.take((MAX_ERRORS_BYTES as u64).saturating_add(1));
    let mut contents = String::new();
    limited.read_to_string(&mut contents).map_err(|err| {
        CliError::new(t!("translate.errors.read_failed", path = path.display(), error = err))
    })?;
    if contents.len() > MAX_ERRORS_BYTES {
        return Err(CliError::new(t!(
            "translate.errors.too_large",
            path = path.display(),
            size = contents.len(),
            limit = MAX_ERRORS_BYTES
        )));
    }
    Ok(contents)
}

// ============================================================================
// SECTION: Locale Resolution
// ============================================================================

/// Resolves the CLI output locale from the flag and environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    match env_lang {
        Some(value) => Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        }),
        None => Ok(Locale::En),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes text to stdout, ensuring a trailing newline.
fn write_stdout_text(text: &str) -> CliResult<()> {
    let mut output = text.to_string();
    if !output.ends_with('\n') {
        output.push('\n');
    }
    let mut stdout = std::io::stdout();
    stdout
        .write_all(output.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

/// Prints long help for the top-level command.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}
