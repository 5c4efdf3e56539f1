use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;
use servconf::models::{IniDocument, KeyFold};
use servconf::normalize::{self, Normalized};

const SERVER_SECTION: &str = "ServerConfig";

#[derive(Debug, Clone, ValueEnum)]
enum Verbosity {
    Warnings,
    Silent,
    Debug,
}

/// Reads and writes keys in a Project Zomboid dedicated server config file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the server config file
    config_file: PathBuf,

    /// Key to edit or retrieve
    key: String,

    /// New value to assign to the key
    value: Option<String>,

    /// Log filtering
    #[arg(long, value_enum, default_value_t = Verbosity::Warnings)]
    verbosity: Verbosity,
}

/// Reports whether the config file can be opened for reading. A missing file
/// prints a diagnostic and is a soft failure; any other I/O error is fatal.
fn check_config_file(path: &Path) -> io::Result<bool> {
    match fs::File::open(path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            eprintln!("{} not found!", path.display());
            Ok(false)
        }
        Err(error) => Err(error),
    }
}

/// Reads the config file, rewriting it in place first if the required
/// section header is missing from the top, and parses it with
/// case-sensitive keys.
fn load_config(path: &Path) -> anyhow::Result<IniDocument> {
    let contents = fs::read_to_string(path)?;

    let normalized = normalize::ensure_header(&contents, SERVER_SECTION);
    if let Normalized::Repaired(repaired) = &normalized {
        fs::write(path, repaired)?;
    }

    servconf::parse(normalized.as_str(), KeyFold::Preserve)
        .with_context(|| format!("{} is not a valid config file", path.display()))
}

fn save_config(document: &IniDocument, path: &Path) -> io::Result<()> {
    fs::write(path, document.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.verbosity {
        Verbosity::Silent => (),
        Verbosity::Warnings => LoggerBuilder::new().filter(None, LevelFilter::Warn).init(),
        Verbosity::Debug => LoggerBuilder::new().filter(None, LevelFilter::Debug).init(),
    }

    if let Some(extension) = args.config_file.extension() {
        if extension != "ini" {
            log::warn!("Specified file does not have an .ini extension!");
        }
    } else {
        log::warn!("Specified file does not have an .ini extension!");
    };

    if !check_config_file(&args.config_file)? {
        return Ok(());
    }

    let mut document = load_config(&args.config_file)?;

    match args.value {
        None => {
            // A missing section or key reads as nothing, not as an error.
            if let Some(section) = document.section(SERVER_SECTION) {
                if let Some(value) = section.get(&args.key) {
                    println!("{value}");
                }
            }
        }
        Some(value) => {
            let Some(section) = document.section_mut(SERVER_SECTION) else {
                return Err(anyhow!("config file has no [{SERVER_SECTION}] section"))?;
            };

            section.set(&args.key, &value);

            save_config(&document, &args.config_file)?;
        }
    }

    Ok(())
}
