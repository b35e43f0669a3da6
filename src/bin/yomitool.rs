use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use lex_furigana::dict::SurfaceDictionary;
use lex_furigana::explain::{explain, format_text};
use lex_furigana::settings::{default_toml, Settings};
use lex_furigana::{init_tracing, ConvertOptions, Mode, TargetScript, Transliterator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "yomitool", about = "Japanese transliteration and furigana tools")]
struct Cli {
    /// Write JSON trace logs to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to a target script
    Convert {
        /// Path to the dictionary (compiled or .tsv)
        dict_file: String,
        /// Text to convert
        text: String,
        /// Target script: hiragana, katakana or romaji
        #[arg(long)]
        to: Option<String>,
        /// Output mode: inline, spaced, okurigana or furigana
        #[arg(long)]
        mode: Option<String>,
        /// Opening delimiter for okurigana and ruby fallback
        #[arg(long)]
        delimiter_start: Option<String>,
        /// Closing delimiter for okurigana and ruby fallback
        #[arg(long)]
        delimiter_end: Option<String>,
        /// Settings TOML file (defaults to the built-in settings)
        #[arg(long)]
        config: Option<String>,
    },

    /// Show tokens and aligned notation runs for a text
    Explain {
        /// Path to the dictionary (compiled or .tsv)
        dict_file: String,
        /// Text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compile a TSV word list into the binary dictionary format
    Compile {
        /// Input TSV (surface, reading[, cost])
        input_tsv: String,
        /// Output dictionary file
        output_file: String,
    },

    /// Print dictionary statistics
    Stats {
        /// Path to the dictionary (compiled or .tsv)
        dict_file: String,
    },

    /// Print the built-in default settings
    DefaultConfig,
}

fn load_settings(config: Option<&str>) -> Settings {
    match config {
        Some(path) => die!(
            Settings::load(Path::new(path)),
            "Failed to load settings from {path}: {}"
        ),
        None => Settings::default(),
    }
}

fn open_transliterator(dict_file: &str, settings: &Settings) -> Transliterator {
    die!(
        Transliterator::open(Path::new(dict_file), &settings.analyzer),
        "Failed to open dictionary at {dict_file}: {}"
    )
}

struct ConvertArgs {
    to: Option<String>,
    mode: Option<String>,
    delimiter_start: Option<String>,
    delimiter_end: Option<String>,
}

fn build_options(base: ConvertOptions, args: ConvertArgs) -> ConvertOptions {
    let mut opts = base;
    if let Some(to) = args.to {
        opts = opts.with_to(die!(to.parse::<TargetScript>(), "Error: {}"));
    }
    if let Some(mode) = args.mode {
        opts = opts.with_mode(die!(mode.parse::<Mode>(), "Error: {}"));
    }
    if let Some(start) = args.delimiter_start {
        opts.delimiter_start = start;
    }
    if let Some(end) = args.delimiter_end {
        opts.delimiter_end = end;
    }
    opts
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        die!(fs::create_dir_all(dir), "Failed to create {}: {}", dir.display());
        match init_tracing(dir) {
            Some(path) => eprintln!("Tracing to {}", path.display()),
            None => eprintln!("Warning: built without the `trace` feature, --trace-dir ignored"),
        }
    }

    match cli.command {
        Command::Convert {
            dict_file,
            text,
            to,
            mode,
            delimiter_start,
            delimiter_end,
            config,
        } => {
            let settings = load_settings(config.as_deref());
            let opts = build_options(
                settings.convert.clone(),
                ConvertArgs {
                    to,
                    mode,
                    delimiter_start,
                    delimiter_end,
                },
            );
            let t = open_transliterator(&dict_file, &settings);
            let out = die!(t.convert(&text, &opts), "Conversion failed: {}");
            println!("{out}");
        }
        Command::Explain {
            dict_file,
            text,
            json,
        } => {
            let t = open_transliterator(&dict_file, &Settings::default());
            let tokens = die!(t.tokens(&text), "Analysis failed: {}");
            let result = explain(&text, &tokens);
            if json {
                let out = die!(
                    serde_json::to_string_pretty(&result),
                    "Failed to serialize: {}"
                );
                println!("{out}");
            } else {
                print!("{}", format_text(&result));
            }
        }
        Command::Compile {
            input_tsv,
            output_file,
        } => {
            let text = die!(
                fs::read_to_string(&input_tsv),
                "Error reading {input_tsv}: {}"
            );
            let dict = die!(SurfaceDictionary::from_tsv(&text), "Error parsing {input_tsv}: {}");
            let (surfaces, entries) = dict.stats();
            eprintln!("Compiling {surfaces} surfaces ({entries} entries)...");
            die!(
                dict.save(Path::new(&output_file)),
                "Error writing dictionary: {}"
            );
            let file_size = fs::metadata(&output_file).map(|m| m.len()).unwrap_or(0);
            eprintln!("Wrote {output_file} ({file_size} bytes)");
        }
        Command::Stats { dict_file } => {
            let dict = die!(
                SurfaceDictionary::open(Path::new(&dict_file)),
                "Failed to open dictionary at {dict_file}: {}"
            );
            let (surfaces, entries) = dict.stats();
            println!("surfaces: {surfaces}");
            println!("entries:  {entries}");
        }
        Command::DefaultConfig => print!("{}", default_toml()),
    }
}
