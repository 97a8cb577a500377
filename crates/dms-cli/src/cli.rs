//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use dms_model::InfoVariant;

#[derive(Parser)]
#[command(
    name = "dms",
    version,
    about = "Data Module Studio - author technical data modules in two information variants",
    long_about = "Author technical data modules derived from source documents.\n\n\
                  Each module exists in two information variants: a verbatim\n\
                  transcription (00) and a simplified rewrite (01), each kept in\n\
                  sync between plain text and its generated XML representation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the data modules in a library.
    List(ListArgs),

    /// Print one variant of a data module.
    Show(ShowArgs),

    /// Ingest a plain-text source document, creating its module pair.
    Ingest(IngestArgs),

    /// Replace a variant's plain text and save it (XML is regenerated).
    EditText(EditTextArgs),

    /// Replace a variant's XML and save it (text is re-derived).
    EditXml(EditXmlArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Path to the module library file.
    #[arg(value_name = "LIBRARY")]
    pub library: PathBuf,

    /// Emit the list as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the module library file.
    #[arg(value_name = "LIBRARY")]
    pub library: PathBuf,

    /// Data module code.
    #[arg(value_name = "DMC")]
    pub dmc: String,

    /// Information variant to show.
    #[arg(long = "variant", value_enum, default_value = "00")]
    pub variant: VariantArg,

    /// Print the structured XML representation instead of the text.
    #[arg(long = "xml")]
    pub xml: bool,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Path to the module library file (created if missing).
    #[arg(value_name = "LIBRARY")]
    pub library: PathBuf,

    /// Plain-text source document to ingest.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Module title (defaults to the file name).
    #[arg(long = "title")]
    pub title: Option<String>,
}

#[derive(Parser)]
pub struct EditTextArgs {
    /// Path to the module library file.
    #[arg(value_name = "LIBRARY")]
    pub library: PathBuf,

    /// Data module code.
    #[arg(value_name = "DMC")]
    pub dmc: String,

    /// Information variant to edit.
    #[arg(long = "variant", value_enum, default_value = "00")]
    pub variant: VariantArg,

    /// Replacement text content.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: String,
}

#[derive(Parser)]
pub struct EditXmlArgs {
    /// Path to the module library file.
    #[arg(value_name = "LIBRARY")]
    pub library: PathBuf,

    /// Data module code.
    #[arg(value_name = "DMC")]
    pub dmc: String,

    /// Information variant to edit.
    #[arg(long = "variant", value_enum, default_value = "00")]
    pub variant: VariantArg,

    /// File holding the replacement XML (may be transiently invalid).
    #[arg(long = "xml-file", value_name = "PATH")]
    pub xml_file: PathBuf,
}

/// The two fixed information variant codes.
#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    /// Verbatim transcription.
    #[value(name = "00")]
    Verbatim,
    /// Simplified rewrite.
    #[value(name = "01")]
    Simplified,
}

impl From<VariantArg> for InfoVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Verbatim => Self::Verbatim,
            VariantArg::Simplified => Self::Simplified,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
