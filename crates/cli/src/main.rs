use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use redirect_trace_formatter::{
    FormatterConfig, StackFrame, Trace, TraceFormatter, DEFAULT_COMMENT_PREFIX,
    DEFAULT_HEADER_PREFIX,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "redirect-trace")]
#[command(about = "Format a captured call stack as a fixed-width redirect trace", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON array of stack frames ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Leading frames to skip (overrides the config file)
    #[arg(long, short = 's')]
    skip: Option<usize>,

    /// TOML file with layout settings
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output shape
    #[arg(long, short = 'm', value_enum, default_value_t = OutputMode::Plain)]
    mode: OutputMode,

    /// Name prefix for header and comment entries
    #[arg(long)]
    prefix: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// `NN: line`
    Plain,
    /// `Prefix-NN: line`, one response header per line
    Headers,
    /// `<!-- prefix-NN: line -->` comments
    Comments,
    /// JSON object keyed by sequence number
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(&cli)?;
    let formatter = TraceFormatter::new(config).context("Invalid formatter configuration")?;

    let raw = read_input(cli.input.as_ref())?;
    let frames: Vec<StackFrame> =
        serde_json::from_str(&raw).context("Input must be a JSON array of stack frames")?;
    log::debug!("Loaded {} frames", frames.len());

    let trace = formatter.format(&frames);
    print!("{}", render(&trace, cli.mode, cli.prefix.as_deref())?);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FormatterConfig> {
    let mut config = match &cli.config {
        Some(path) => FormatterConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FormatterConfig::default(),
    };
    if let Some(skip) = cli.skip {
        config.skip_frames = skip;
    }
    Ok(config)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn render(trace: &Trace, mode: OutputMode, prefix: Option<&str>) -> Result<String> {
    let out = match mode {
        OutputMode::Plain => line_block(trace.to_text()),
        OutputMode::Headers => {
            let prefix = prefix.unwrap_or(DEFAULT_HEADER_PREFIX);
            let lines: Vec<String> = trace
                .header_entries(prefix)
                .into_iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect();
            line_block(lines.join("\n"))
        }
        OutputMode::Comments => trace.comment_block(prefix.unwrap_or(DEFAULT_COMMENT_PREFIX)),
        OutputMode::Json => line_block(serde_json::to_string_pretty(trace)?),
    };
    Ok(out)
}

fn line_block(body: String) -> String {
    if body.is_empty() {
        body
    } else {
        body + "\n"
    }
}
