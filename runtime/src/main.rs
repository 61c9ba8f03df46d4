//! `docsum`: summarize documents from the command line or over HTTP.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docsum_runtime::cli::summarize_cmd::SourceArgs;
use docsum_runtime::cli::{render_cmd, serve_cmd, summarize_cmd};
use docsum_runtime::render::RenderFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docsum", version, about = "Summarize PDFs, web pages and text with Gemini")]
struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Suppress decorative output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Interface to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Summarize one document and print the result
    Summarize(SummarizeArgs),
    /// Render text to a .txt or .pdf file
    Render {
        /// Output format: txt or pdf
        #[arg(long, default_value = "txt")]
        format: RenderFormat,
        /// Text file to read (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Destination file
        #[arg(long, short)]
        output: PathBuf,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct SummarizeArgs {
    /// Local PDF file
    #[arg(long)]
    file: Option<PathBuf>,
    /// URL of a remote PDF
    #[arg(long, visible_alias = "pdf-url")]
    document_url: Option<String>,
    /// URL of a web page
    #[arg(long)]
    webpage_url: Option<String>,
    /// Inline text
    #[arg(long)]
    text: Option<String>,
}

impl From<SummarizeArgs> for SourceArgs {
    fn from(args: SummarizeArgs) -> Self {
        SourceArgs {
            file: args.file,
            document_url: args.document_url,
            webpage_url: args.webpage_url,
            text: args.text,
        }
    }
}

fn init_tracing(default_directive: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Output flags are read through the environment by `cli::output`.
    // Set them before the runtime starts any threads.
    if cli.json {
        std::env::set_var("DOCSUM_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("DOCSUM_QUIET", "1");
    }

    let default_directive = match cli.command {
        Command::Serve { .. } => "docsum=info,docsum_runtime=info,tower_http=info",
        _ => "docsum=warn,docsum_runtime=warn",
    };
    init_tracing(default_directive, cli.log_json);

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(async move {
        match cli.command {
            Command::Serve { host, port } => serve_cmd::run(host, port).await,
            Command::Summarize(args) => summarize_cmd::run(args.into()).await,
            Command::Render {
                format,
                input,
                output,
            } => render_cmd::run(format, input, &output),
        }
    })
}
