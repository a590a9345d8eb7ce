use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use rustie_events::data::DocumentParser;
use rustie_events::engine::{GeneratorConfig, TypeConstraints};
use rustie_events::features::{FeatureTableStats, FeatureTableWriter, GlobalFeatureGenerator};
use rustie_events::types::Alphabets;

#[derive(Parser, Debug)]
#[command(name = "rustie-events")]
#[command(about = "Write global event features for annotated documents")]
#[command(version)]
struct Args {
    /// JSON document file (optionally gzipped) or a directory of them
    #[arg(short, long)]
    input: PathBuf,

    /// Role constraints YAML (defaults to the bundled ACE 2005 table)
    #[arg(short, long)]
    constraints: Option<PathBuf>,

    /// Generator configuration YAML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output feature table (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only write sentences carrying at least one event
    #[arg(long)]
    events_only: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug)]
struct RunStats {
    files: usize,
    failed_files: usize,
    documents: usize,
    sentences: usize,
    events: usize,
    start_time: Instant,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            files: 0,
            failed_files: 0,
            documents: 0,
            sentences: 0,
            events: 0,
            start_time: Instant::now(),
        }
    }
}

/// Input files under `input`: the path itself, or every `.json` /
/// `.json.gz` file of a directory, sorted
fn find_input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        let path = entry?.path();
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        if path.is_file() && (name.ends_with(".json") || name.ends_with(".json.gz")) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn progress_bar(len: usize, hidden: bool) -> Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Extracting features...");
    Ok(pb)
}

fn process_file<W: Write>(
    path: &Path,
    parser: &DocumentParser,
    generator: &GlobalFeatureGenerator<'_>,
    writer: &mut FeatureTableWriter<W>,
    stats: &mut RunStats,
) -> Result<()> {
    let documents = parser.parse_file(path)?;
    for document in &documents {
        let sentences =
            parser.to_labeled_sentences(document, generator.alphabets(), generator.config())?;
        let features = generator
            .extract_corpus(&sentences)
            .with_context(|| format!("Feature generation failed for document '{}'", document.id))?;
        for (sentence, sentence_features) in sentences.iter().zip(&features) {
            writer.write_sentence(
                &sentence.instance,
                &sentence.assignment,
                generator.alphabets(),
                sentence_features,
            )?;
        }
        stats.documents += 1;
        stats.sentences += sentences.len();
        stats.events += document.event_count();
    }
    Ok(())
}

fn print_stats(stats: &RunStats, table: &FeatureTableStats, alphabets: &Alphabets) {
    let elapsed = stats.start_time.elapsed();

    eprintln!("\n=== Feature Table Statistics ===");
    eprintln!("Files processed: {} ({} failed)", stats.files, stats.failed_files);
    eprintln!("Documents: {}", stats.documents);
    eprintln!("Sentences: {}", stats.sentences);
    eprintln!("Gold events: {}", stats.events);
    eprintln!("Token lines: {}", table.lines);
    eprintln!("Trigger lines: {} ({:.2}%)", table.trigger_lines, table.trigger_rate() * 100.0);
    eprintln!("Features written: {}", table.features);
    eprintln!("Feature families: {}", table.families.len());
    for family in &table.families {
        eprintln!("  {}", family);
    }
    eprintln!("Trigger labels: {}", alphabets.triggers.len());
    eprintln!("Argument roles: {}", alphabets.roles.len());
    eprintln!("Total time: {:.2?}", elapsed);
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let config = match &args.config {
        Some(path) => GeneratorConfig::from_yaml_file(path)?,
        None => GeneratorConfig::default(),
    };
    let constraints = match &args.constraints {
        Some(path) => TypeConstraints::from_yaml_file(path)?,
        None => TypeConstraints::ace2005()?,
    };
    let alphabets = Alphabets::new();
    let generator = GlobalFeatureGenerator::new(&config, &constraints, &alphabets);

    let parser = if args.events_only {
        DocumentParser::new().skip_non_event_sentences()
    } else {
        DocumentParser::new()
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut writer = FeatureTableWriter::new(output);

    let files = find_input_files(&args.input)?;
    info!("Found {} input files under {}", files.len(), args.input.display());

    let mut stats = RunStats::default();
    let pb = progress_bar(files.len(), args.verbose)?;
    for path in &files {
        stats.files += 1;
        if let Err(e) = process_file(path, &parser, &generator, &mut writer, &mut stats) {
            stats.failed_files += 1;
            error!("Failed to process {}: {:#}", path.display(), e);
        }
        pb.inc(1);
    }
    pb.finish_with_message("Extraction completed!");

    let table = writer.finish()?;
    print_stats(&stats, &table, &alphabets);
    Ok(())
}
