use clap::{Parser, Subcommand, ValueEnum};
use doxystub::config::{self, CONFIG_FILE_NAME, default_settings};
use doxystub::{DocGenerator, DoxyError, DoxyResult, OutputFormat, Position, SourceText};
use log::debug;
use std::path::PathBuf;

/// Generate Doxygen comment templates for C-family declarations
#[derive(Parser)]
#[command(name = "doxystub")]
#[command(version)]
#[command(about = "Generate Doxygen comment templates for C-family declarations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the comment for the declaration at a cursor position
    Generate(GenerateArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the default configuration as TOML
    Init,
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Source file to read
    file: PathBuf,

    /// Cursor line (1-based)
    #[arg(long)]
    line: usize,

    /// Cursor column (0-based, as reported by editors)
    #[arg(long, default_value_t = 0)]
    column: usize,

    /// Visual width of a tab character
    #[arg(long, default_value_t = 8)]
    tabstop: usize,

    #[arg(long, value_enum, default_value_t = Format::Snippet)]
    format: Format,

    /// Insert the comment into the file instead of printing it
    #[arg(long)]
    write: bool,

    /// Project configuration file (default: ./doxystub.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language of the file, overriding its extension
    #[arg(short = 'x', long = "language")]
    language: Option<String>,

    /// Extra parser arguments
    #[arg(last = true)]
    parser_args: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Snippet,
    Plain,
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Config {
            command: ConfigCommands::Init,
        } => config_init(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn generate(args: GenerateArgs) -> DoxyResult<()> {
    let project = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let settings = config::load_settings(Some(&project))?;

    let mut generator = DocGenerator::new(&settings)?;
    let mut extra_args = Vec::new();
    if let Some(language) = &args.language {
        extra_args.push("-x".to_string());
        extra_args.push(language.clone());
    }
    extra_args.extend(args.parser_args.iter().cloned());
    generator.extend_parser_args(extra_args);

    let content = std::fs::read_to_string(&args.file)?;
    let text = SourceText::from_text(&content, args.tabstop);
    let filename = args.file.to_string_lossy();
    let pos = Position::from_editor(args.line, args.column);
    debug!(target: "doxystub::cli", "Generating for {filename} at {pos}");

    let format = match (args.write, args.format) {
        (true, _) | (false, Format::Plain) => OutputFormat::Plain,
        (false, Format::Snippet | Format::Json) => OutputFormat::Snippet,
    };
    let insertion = generator.generate(&text, &filename, pos, format)?;

    if args.write {
        let mut lines = text.lines().to_vec();
        insertion.apply(&mut lines);
        let line_ending = if content.contains("\r\n") { "\r\n" } else { "\n" };
        let mut output = lines.join(line_ending);
        if content.ends_with('\n') {
            output.push_str(line_ending);
        }
        std::fs::write(&args.file, output)?;
        return Ok(());
    }

    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&insertion)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            println!("{json}");
        }
        Format::Snippet | Format::Plain => {
            for line in &insertion.lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn config_init() -> DoxyResult<()> {
    let toml_str = toml::to_string_pretty(&default_settings())
        .map_err(|e| DoxyError::config(e.to_string()))?;
    print!("{toml_str}");
    Ok(())
}
