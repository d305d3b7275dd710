//! smogwatch command line
//!
//! Reads glyph paths back into numbers, grades the PM2.5 level and decides
//! when an alert should be published.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use smogwatch::analysis::{self, SensorPaths};
use smogwatch::config::{self, AppConfig, RecognitionSettings};
use smogwatch::storage::{self, AlertState};
use smogwatch::vision::reference::{REFERENCE_GLYPHS, REFERENCE_NUMBERS};
use smogwatch::vision::{self, closest_glyph, normalize, GlyphCatalog, GlyphReader, MatchStrategy};

/// smogwatch - read air-quality values rendered as vector glyphs
#[derive(Parser, Debug)]
#[command(name = "smogwatch")]
#[command(about = "Reads sensor values drawn as SVG glyphs and grades air quality")]
struct Args {
    /// Configuration file (defaults to config.toml in the config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the matching strategy
    #[arg(long, global = true, value_enum)]
    strategy: Option<StrategyArg>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recognize a number from draw-path text
    Recognize {
        /// Draw paths, joined in order (one per glyph or one for the number)
        paths: Vec<String>,

        /// Read paths from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Fail when any glyph is not recognized
        #[arg(long)]
        checked: bool,
    },
    /// Validate and print the glyph catalog
    Catalog {
        /// Write the catalog to a TOML file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Check recognition against the bundled reference renderings
    SelfTest,
    /// Grade a round of sensor readings and decide whether to alert
    Assess {
        /// JSON file: {"sensor": {"pm2.5": "<path>" | ["<path>", ...]}}
        #[arg(short, long)]
        readings: PathBuf,

        /// Alert state file (defaults to the data directory)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Do not update the alert state
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Substitution,
    LongestMatch,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Substitution => MatchStrategy::Substitution,
            StrategyArg::LongestMatch => MatchStrategy::LongestMatch,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, source) = load_or_default_config(args.config.as_deref())?;
    if let Some(strategy) = args.strategy {
        config.recognition.strategy = strategy.into();
    }

    // Initialize logging
    let level = if args.verbose { "debug" } else { config.general.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match source {
        Some(path) => info!("Loaded configuration from {:?}", path),
        None => info!("Using default configuration"),
    }

    let reader = build_reader(&config.recognition)?;

    match args.command {
        Command::Recognize { paths, file, checked } => run_recognize(&reader, paths, file, checked),
        Command::Catalog { export } => run_catalog(&reader, export),
        Command::SelfTest => run_self_test(&reader),
        Command::Assess { readings, state, dry_run } => {
            run_assess(&reader, &config, &readings, state, dry_run)
        }
    }
}

/// Load configuration from file or fall back to defaults
///
/// An explicitly given file must load; the default location may be absent.
fn load_or_default_config(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = config::load_config(path)
            .with_context(|| format!("Failed to load configuration {:?}", path))?;
        return Ok((config, Some(path.to_path_buf())));
    }

    if let Ok(config_dir) = storage::get_config_dir() {
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let config = config::load_config(&config_path)?;
            return Ok((config, Some(config_path)));
        }
    }

    Ok((AppConfig::default(), None))
}

fn build_reader(settings: &RecognitionSettings) -> Result<GlyphReader> {
    match &settings.catalog_path {
        Some(path) => {
            info!("Using glyph catalog {:?}", path);
            GlyphReader::from_catalog_file(path, settings.reader_config())
        }
        None => GlyphReader::with_catalog(GlyphCatalog::default(), settings.reader_config()),
    }
}

fn run_recognize(
    reader: &GlyphReader,
    paths: Vec<String>,
    file: Option<PathBuf>,
    checked: bool,
) -> Result<()> {
    let paths = if let Some(file) = file {
        let content = std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {:?}", file))?;
        non_empty_lines(&content)
    } else if paths.is_empty() {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        non_empty_lines(&content)
    } else {
        paths
    };

    let recognition = reader.read_collated(&paths);
    println!("{}", recognition.render());

    if checked && !recognition.is_complete() {
        for span in recognition.unmatched() {
            let hint = closest_glyph(reader.catalog(), &span.fragment)
                .map(|(symbol, score)| format!(" (closest '{}', similarity {:.2})", symbol, score))
                .unwrap_or_default();
            eprintln!(
                "unmatched after {} character(s), skeleton offset {}: {}{}",
                span.position, span.offset, span.fragment, hint
            );
        }
        bail!("{} unrecognized glyph fragment(s)", recognition.unmatched().len());
    }

    Ok(())
}

/// Lines that carry path text, passed through untrimmed
fn non_empty_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

fn run_catalog(reader: &GlyphReader, export: Option<PathBuf>) -> Result<()> {
    let catalog = reader.catalog();
    catalog.validate()?;
    println!("{} glyphs, strategy {:?}", catalog.len(), reader.strategy());

    for entry in catalog {
        println!("{}  {}", entry.symbol, entry.skeleton);
    }

    if let Some(path) = export {
        vision::catalog::save_catalog(catalog, &path)?;
        info!("Catalog written to {:?}", path);
    }

    Ok(())
}

fn run_self_test(reader: &GlyphReader) -> Result<()> {
    let mut failures = 0;

    for glyph in REFERENCE_GLYPHS {
        let skeleton = normalize(glyph.path);
        match reader.catalog().skeleton_for(glyph.symbol) {
            Some(expected) if expected == skeleton => {}
            Some(expected) => {
                failures += 1;
                println!("glyph {}: expected\n  {}\nfound\n  {}", glyph.label, expected, skeleton);
            }
            None => {
                failures += 1;
                println!("glyph {}: symbol {:?} missing from catalog", glyph.label, glyph.symbol);
            }
        }
    }

    for number in REFERENCE_NUMBERS {
        let found = reader.read(&number.paths().concat());
        if found != number.expected {
            failures += 1;
            println!("number {:?}: found {:?}", number.expected, found);
        }
    }

    let total = REFERENCE_GLYPHS.len() + REFERENCE_NUMBERS.len();
    if failures > 0 {
        bail!("{} of {} reference checks failed", failures, total);
    }
    println!("{} reference checks passed", total);
    Ok(())
}

fn run_assess(
    reader: &GlyphReader,
    config: &AppConfig,
    readings: &Path,
    state: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(readings)
        .with_context(|| format!("Failed to read {:?}", readings))?;
    let sensors: SensorPaths = serde_json::from_str(&content)
        .with_context(|| format!("Invalid readings file {:?}", readings))?;

    let reports = analysis::read_sensors(reader, &sensors);
    let mut current_sensor = None;
    for report in &reports {
        if current_sensor != Some(&report.sensor) {
            println!("{}", report.sensor);
            current_sensor = Some(&report.sensor);
        }
        println!(" {:>12}{:>8}", report.measurement.to_lowercase(), report.text);
    }

    let measurement = &config.alert.measurement;
    let values = analysis::values_of(&reports, measurement);
    info!("{} concentrations: {:?}", measurement, values);

    let state_path = match state {
        Some(path) => path,
        None => storage::default_state_path()?,
    };
    let previous = storage::load_state(&state_path)?;

    let Some(decision) =
        analysis::assess(&values, previous.as_ref().map(|s| s.bad_air), &config.alert)
    else {
        bail!("No valid {} measurement among {} sensor(s)", measurement, sensors.0.len());
    };

    if decision.notify {
        println!("\n{}\n\n[{}]", decision.status, decision.badge);
    } else {
        info!(
            "Air quality still {} ({:.0}), nothing to publish",
            decision.category, decision.average
        );
    }

    if dry_run {
        warn!("Dry run, alert state not updated");
        return Ok(());
    }

    storage::save_state(
        &AlertState {
            bad_air: decision.bad_air,
            category: decision.category,
            average: decision.average,
        },
        &state_path,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_lines_untrimmed() {
        let lines = non_empty_lines(" 5 \n\n   \nM1 2Z\n");
        assert_eq!(lines, vec![" 5 ".to_string(), "M1 2Z".to_string()]);
        assert_eq!(normalize(&lines[0]), " * ");
    }
}
