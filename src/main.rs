use clap::{Parser, Subcommand, ValueEnum};
use lexipix_codec::{Picture, Picturizer, WordSequence};
use lexipix_core::{LexipixConfig, LexipixError, LookupMode, RenderStrategy};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lexipix", about = "Turn files into words and words back into pictures", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Word list to use instead of the configured one
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// How unknown words are resolved when decoding
    #[arg(long, global = true, value_enum)]
    lookup: Option<LookupArg>,

    /// Sizing rule for the fallback bitmap
    #[arg(long, global = true, value_enum)]
    render_strategy: Option<RenderArg>,

    /// Enable info-level logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file (or stdin) as words
    Encode {
        /// Input file, `-` for stdin
        input: Option<PathBuf>,
    },
    /// Decode words back into raw bytes
    Decode {
        /// Input file holding the words, `-` for stdin
        input: Option<PathBuf>,
        /// Output file, stdout when omitted
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Emit the "Invalid words." payload instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Decode words into an image, rendering raw bytes when needed
    Picture {
        /// Input file holding the words, `-` for stdin
        input: Option<PathBuf>,
        /// Output file, stdout when omitted
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Load and validate the dictionary
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum LookupArg {
    Strict,
    Legacy,
}

#[derive(Clone, Copy, ValueEnum)]
enum RenderArg {
    Legacy,
    Consistent,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<LexipixConfig, LexipixError> {
    let mut config = match &cli.config {
        Some(path) => LexipixConfig::load(path)?,
        None => LexipixConfig::default(),
    };
    if let Some(path) = &cli.dictionary {
        config.dictionary_path = path.clone();
    }
    if let Some(lookup) = cli.lookup {
        config.lookup = match lookup {
            LookupArg::Strict => LookupMode::Strict,
            LookupArg::Legacy => LookupMode::Legacy,
        };
    }
    if let Some(strategy) = cli.render_strategy {
        config.render_strategy = match strategy {
            RenderArg::Legacy => RenderStrategy::Legacy,
            RenderArg::Consistent => RenderStrategy::Consistent,
        };
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), LexipixError> {
    let config = resolve_config(&cli)?;
    let dictionary = lexipix_core::load_dictionary(&config)?;
    let picturizer = Picturizer::from_config(&config, dictionary);

    match cli.command {
        Commands::Encode { input } => {
            let data = read_input(input.as_deref())?;
            let words = picturizer.wordify(&data);
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{words}")?;
        }
        Commands::Decode {
            input,
            output,
            lenient,
        } => {
            let text = read_text(input.as_deref())?;
            let words = WordSequence::parse(&text);
            let data = if lenient {
                picturizer.codec().decode(words.tokens())
            } else {
                picturizer.codec().try_decode(words.tokens())?
            };
            write_output(output.as_deref(), &data)?;
        }
        Commands::Picture { input, output } => {
            let text = read_text(input.as_deref())?;
            let picture = picturizer.picturize_text(&text)?;
            if let Picture::TooSmall { len } = &picture {
                tracing::warn!("decoded payload is only {} bytes", len);
            }
            tracing::info!("writing {}", picture.content_type());
            write_output(output.as_deref(), &picture.into_bytes())?;
        }
        Commands::Check => {
            let dictionary = picturizer.codec().dictionary();
            println!(
                "{}: {} words, first {:?}, last {:?}",
                config.dictionary_path.display(),
                dictionary.len(),
                dictionary.word_at(0),
                dictionary.word_at(u16::MAX)
            );
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, LexipixError> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read(p)?),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn read_text(path: Option<&Path>) -> Result<String, LexipixError> {
    let raw = read_input(path)?;
    String::from_utf8(raw).map_err(|e| {
        LexipixError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<(), LexipixError> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::write(p, data)?,
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
