use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use atty::Stream;
use clap::Parser;
use glossary_rs::{
    DirectorySink, GlossaryStore, HtmlRenderer, MemorySink, RenderConfig, RenderSummary, loader,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "glossary-rs",
    about = "Generate cross-linked HTML pages from a glossary text file",
    version
)]
pub struct Cli {
    /// Glossary text file. Prompted for when omitted.
    input: Option<PathBuf>,

    /// Folder receiving index.html and one page per term. Prompted for when omitted.
    output: Option<PathBuf>,

    /// Page title shown on the index.
    #[arg(long)]
    title: Option<String>,

    /// Colour of the term heading on each term page.
    #[arg(long)]
    term_color: Option<String>,

    /// Background image for every page.
    #[arg(long)]
    background: Option<String>,

    /// Link known terms that appear inside definitions.
    #[arg(long)]
    nested: bool,

    /// List terms alphabetically on the index.
    #[arg(long)]
    sort: bool,

    /// Render term pages in parallel.
    #[arg(long)]
    parallel: bool,

    /// JSON file with rendering settings; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render into memory and only report what would be written.
    #[arg(long)]
    dry_run: bool,

    /// Emit the run summary as JSON.
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = resolve_config(&cli)?;
    let input = match cli.input.clone() {
        Some(path) => path,
        None => prompt_path("Please enter the location of your glossary text file: ")?,
    };
    let output = match cli.output.clone() {
        Some(path) => path,
        None => prompt_path("Please enter the name of your output folder: ")?,
    };

    let mut store = GlossaryStore::new();
    store.apply_config(&config);
    let records = loader::load_file(&mut store, &input)?;
    let renderer = HtmlRenderer::new(config);

    let summary = if cli.dry_run {
        let sink = MemorySink::new();
        renderer.render(&store, &sink)?
    } else {
        let sink = DirectorySink::create(&output)?;
        renderer.render(&store, &sink)?
    };

    report(&cli, &input, &output, records, summary)
}

fn resolve_config(cli: &Cli) -> Result<RenderConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => RenderConfig::default(),
    };
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }
    if let Some(color) = &cli.term_color {
        config.term_color = color.clone();
    }
    if let Some(background) = &cli.background {
        config.background_image = background.clone();
    }
    config.nested_terms_mode |= cli.nested;
    config.sort_alphabetically |= cli.sort;
    config.parallel |= cli.parallel;
    Ok(config)
}

fn read_config(path: &Path) -> Result<RenderConfig, Box<dyn Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read config {}: {err}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .map_err(|err| format!("Invalid config {}: {err}", path.display()))?;
    Ok(config)
}

fn prompt_path(prompt: &str) -> Result<PathBuf, Box<dyn Error>> {
    if atty::is(Stream::Stdin) {
        print!("{prompt}");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(format!("No answer given to {:?}", prompt.trim()).into());
    }
    let answer = line.trim();
    if answer.is_empty() {
        return Err(format!("No answer given to {:?}", prompt.trim()).into());
    }
    Ok(PathBuf::from(answer))
}

#[derive(Serialize)]
struct ReportPayload<'a> {
    input: String,
    output: String,
    dry_run: bool,
    records: usize,
    #[serde(flatten)]
    summary: &'a RenderSummary,
}

fn report(
    cli: &Cli,
    input: &Path,
    output: &Path,
    records: usize,
    summary: RenderSummary,
) -> Result<(), Box<dyn Error>> {
    if cli.json {
        let payload = ReportPayload {
            input: input.display().to_string(),
            output: output.display().to_string(),
            dry_run: cli.dry_run,
            records,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if cli.dry_run {
        println!(
            "Read {records} record(s) from {}; would write {} page(s) to {}.",
            input.display(),
            summary.pages,
            output.display()
        );
    } else {
        println!(
            "Read {records} record(s) from {}; wrote {} page(s) to {}.",
            input.display(),
            summary.pages,
            output.display()
        );
    }
    Ok(())
}
