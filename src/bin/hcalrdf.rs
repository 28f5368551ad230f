//! hcalrdf CLI — extract hCalendar data from an HTML file as RDF quads.
//!
//! Usage:
//!   hcalrdf extract <FILE> --base-uri <URI> [--metadata-graph <IRI>] [--format nquads|jsonl]
//!   hcalrdf list

use clap::{Parser, Subcommand};
use hcalrdf::{
    CliOverrides, Config, ExtractorRegistry, HtmlDocument, Iri, JsonLinesWriter, NQuadsWriter,
    OutputFormat, QuadSink, QuadWriter, TripleSink,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(
    name = "hcalrdf",
    version,
    about = "Extract hCalendar microformat data as RDF quads"
)]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract quads from an HTML file
    Extract {
        /// HTML file to read
        file: PathBuf,
        /// URI the page was fetched from; names its graph
        #[arg(long)]
        base_uri: String,
        /// Graph for provenance and title quads
        #[arg(long)]
        metadata_graph: Option<String>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Extractor to run (repeatable); defaults to all
        #[arg(long = "extractor")]
        extractors: Vec<String>,
        /// Media type of the input
        #[arg(long, default_value = "text/html")]
        media_type: String,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List registered extractors
    List,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>, String> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

fn quad_sink(format: OutputFormat, out: Box<dyn Write>) -> Box<dyn QuadSink> {
    match format {
        OutputFormat::Nquads => Box::new(NQuadsWriter::new(out)),
        OutputFormat::Jsonl => Box::new(JsonLinesWriter::new(out)),
    }
}

struct ExtractArgs<'a> {
    file: &'a Path,
    base_uri: &'a str,
    media_type: &'a str,
    output: Option<&'a Path>,
}

fn cmd_extract(config: &Config, args: ExtractArgs<'_>) -> Result<(), String> {
    let html = std::fs::read_to_string(args.file)
        .map_err(|e| format!("Failed to read {}: {}", args.file.display(), e))?;
    let document = HtmlDocument::parse(&html, args.base_uri).map_err(|e| e.to_string())?;

    let registry = ExtractorRegistry::with_defaults();
    let registry = if config.extractors.is_empty() {
        registry
    } else {
        registry.select(&config.extractors).map_err(|e| e.to_string())?
    };

    let downstream = quad_sink(config.format, open_output(args.output)?);
    let mut writer = match &config.metadata_graph {
        Some(graph) => QuadWriter::with_metadata_graph(downstream, Iri::new(graph.clone())),
        None => QuadWriter::new(downstream),
    };

    let report = registry
        .run_all(&document, args.media_type, &mut writer)
        .map_err(|e| e.to_string());
    // Close on every path so buffered output is flushed
    let closed = writer.close().map_err(|e| e.to_string());
    let report = report?;
    closed?;

    debug!(extractors_run = report.extractors_run, "run complete");
    if report.found.is_empty() {
        info!(document = args.base_uri, "no calendar data found");
    }
    Ok(())
}

fn cmd_list() -> i32 {
    let registry = ExtractorRegistry::with_defaults();
    for extractor in registry.iter() {
        let description = extractor.description();
        println!("{}\t{}", description.name, description.media_types.join(", "));
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Extract {
            file,
            base_uri,
            metadata_graph,
            format,
            extractors,
            media_type,
            output,
        } => match Config::resolve(cli.config.as_deref()) {
            Ok(config) => {
                let config = config.merge_cli(CliOverrides {
                    metadata_graph,
                    format,
                    extractors,
                });
                let args = ExtractArgs {
                    file: &file,
                    base_uri: &base_uri,
                    media_type: &media_type,
                    output: output.as_deref(),
                };
                match cmd_extract(&config, args) {
                    Ok(()) => 0,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        1
                    }
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Commands::List => cmd_list(),
    };
    std::process::exit(code);
}
