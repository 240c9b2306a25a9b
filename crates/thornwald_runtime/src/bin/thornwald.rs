//! Thornwald CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use thornwald_engine::Game;
use thornwald_parser::{Interpreter, default_commands};
use thornwald_runtime::{RuntimeError, Session};
use thornwald_world::{GameData, Generated, generate};

/// Grid edge length when `--size` is not given.
const DEFAULT_SIZE: usize = 100;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    data: Option<PathBuf>,
    seed: Option<u64>,
    size: Option<usize>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--data" => {
                i += 1;
                if i >= args.len() {
                    return Err("--data requires a path".into());
                }
                config.data = Some(PathBuf::from(&args[i]));
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", args[i]))?,
                );
            }
            "--size" => {
                i += 1;
                if i >= args.len() {
                    return Err("--size requires a value".into());
                }
                config.size = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --size value: {}", args[i]))?,
                );
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("thornwald {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let data = match &config.data {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| RuntimeError::DataFile {
                path: path.clone(),
                source,
            })?;
            GameData::from_json(&text)?
        }
        None => GameData::builtin(),
    };

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let size = config.size.unwrap_or(DEFAULT_SIZE);
    let Generated { world, start } = generate(&data, size, &mut rng)?;
    let game = Game::new(world, start, Interpreter::new(default_commands()?));

    let mut session = Session::new(game, rng)?;
    session.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mThornwald\x1b[0m - Turn-based text exploration game

\x1b[1mUSAGE:\x1b[0m
    thornwald [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    --data <path>    Load the tile name pool from a JSON file
    --seed <u64>     Seed the world generator (runs are reproducible)
    --size <n>       Grid edge length (default {DEFAULT_SIZE})

\x1b[1mEXAMPLES:\x1b[0m
    thornwald                        Start a fresh world
    thornwald --seed 7 --size 20     A small reproducible world
    thornwald --data data/world.json Custom tile names

\x1b[1mCOMMANDS:\x1b[0m
    go north / south / east / west   Travel the map
    look                             Describe your surroundings
    inspect <thing>                  Examine something nearby
    loot <thing>                     Take what something holds
    hit <creature> [with <item>]     Fight
    enter / exit                     Step into or out of buildings
    buy <item> / sell <item>         Trade with a merchant
    Ctrl+D                           Quit"
    );
}
