mod process;

use base62::AlphabetRegistry;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use process::{LineProcessor, Mode};

#[derive(Parser)]
#[command(name = "base62")]
#[command(version)]
#[command(about = "Encode and decode whitespace-separated tokens with base62", long_about = None)]
struct Cli {
    /// Decode input instead of encoding it
    #[arg(short = 'D', long)]
    decode: bool,

    /// Report tokens with invalid characters instead of decoding them to nothing
    #[arg(long, requires = "decode")]
    strict: bool,

    /// Input file, repeatable ("-" reads stdin)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// More input files
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Alphabet to use (see --list)
    #[arg(short = 'a', long, value_name = "NAME")]
    alphabet: Option<String>,

    /// List available alphabets
    #[arg(short, long)]
    list: bool,
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabets configuration with user overrides
    let config = AlphabetRegistry::load_with_overrides()?;

    if cli.list {
        list_alphabets(&config);
        return Ok(ExitCode::SUCCESS);
    }

    let name = cli
        .alphabet
        .as_deref()
        .unwrap_or_else(|| config.default_alphabet());
    let encoding = config.build_encoding(name)?;
    log::debug!("using alphabet '{}': {:?}", name, encoding);

    let mode = match (cli.decode, cli.strict) {
        (false, _) => Mode::Encode,
        (true, false) => Mode::Decode,
        (true, true) => Mode::DecodeStrict,
    };
    let processor = LineProcessor::new(&encoding, mode);

    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) if !is_stdio(path) => Box::new(BufWriter::new(File::create(path)?)),
        _ => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut errors = io::stderr().lock();

    let files: Vec<&PathBuf> = cli
        .inputs
        .iter()
        .chain(&cli.files)
        .filter(|path| !is_stdio(path))
        .collect();

    let mut ok = true;
    if files.is_empty() {
        ok &= processor.process(io::stdin().lock(), &mut output, &mut errors)?;
    }
    for path in files {
        log::debug!("processing {:?}", path);
        match File::open(path) {
            Ok(file) => {
                ok &= processor.process(BufReader::new(file), &mut output, &mut errors)?;
            }
            Err(e) => {
                // Keep going with the remaining files
                writeln!(errors, "{}: {}", path.display(), e)?;
                ok = false;
            }
        }
    }
    output.flush()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str().is_empty() || path.as_os_str() == "-"
}

fn list_alphabets(config: &AlphabetRegistry) {
    println!("Available alphabets:\n");
    let default = config.default_alphabet();

    for name in config.names() {
        let Some(alphabet) = config.get_alphabet(&name) else {
            continue;
        };
        let marker = if name == default { "*" } else { " " };
        println!(
            "{} {:<15} {}  {}",
            marker,
            name,
            alphabet.chars,
            alphabet.description.as_deref().unwrap_or("")
        );
    }
}
