#![warn(clippy::pedantic)]

mod config;
mod net;
mod session;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use rubik_core::{Cube, DEFAULT_SIZE};

use crate::{
    config::Config,
    session::{load_cube, make_scrambler, parse_moves, save_cube},
};

/// Turn, scramble, save and restore N×N×N cubes
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', default_value = "rubik.toml", value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print facelets as letters instead of colored blocks
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a cube as an unfolded net.
    Show {
        /// Edge length of a fresh cube
        #[arg(long, short)]
        size: Option<usize>,
        /// A saved cube to print instead
        #[arg(long, short, conflicts_with = "size")]
        load: Option<PathBuf>,
    },
    /// Scramble a solved cube and print the sequence used.
    Scramble {
        #[arg(long, short)]
        size: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
        /// Save the scrambled cube to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Apply a sequence of moves, e.g. "R U' 2F2 0M".
    Apply {
        moves: String,
        #[arg(long, short)]
        size: Option<usize>,
        /// Start from a saved cube instead of a solved one
        #[arg(long, short, conflicts_with = "size")]
        load: Option<PathBuf>,
        /// Save the resulting cube to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Play interactively on stdin.
    Play {
        #[arg(long, short)]
        size: Option<usize>,
    },
}

fn starting_cube(
    config: &Config,
    size: Option<usize>,
    load: Option<PathBuf>,
) -> color_eyre::Result<Cube> {
    match load {
        Some(file) => load_cube(&config.save_path(&file)),
        None => Ok(Cube::new(size.unwrap_or(config.default_size))),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = Config::load(&cli.config)?;
    if cli.no_color {
        config.color = false;
    }
    if config.default_size < 2 {
        info!(
            "Configured default size {} is too small, using {DEFAULT_SIZE}",
            config.default_size
        );
        config.default_size = DEFAULT_SIZE;
    }

    match cli.command {
        Commands::Show { size, load } => {
            let cube = starting_cube(&config, size, load)?;
            print!("{}", net::render(&cube, config.color));
        }
        Commands::Scramble { size, seed, save } => {
            let mut cube = Cube::new(size.unwrap_or(config.default_size));
            let scrambler = make_scrambler(cube.size(), seed.or(config.seed));
            cube.scramble(&scrambler)?;

            println!("{scrambler}");
            print!("{}", net::render(&cube, config.color));
            if let Some(file) = save {
                save_cube(&cube, &config.save_path(&file))?;
            }
        }
        Commands::Apply {
            moves,
            size,
            load,
            save,
        } => {
            let mut cube = starting_cube(&config, size, load)?;
            for rotation in parse_moves(&moves)? {
                cube.rotate(&rotation)?;
            }

            print!("{}", net::render(&cube, config.color));
            if cube.is_solved() {
                println!("Solved!");
            }
            if let Some(file) = save {
                save_cube(&cube, &config.save_path(&file))?;
            }
        }
        Commands::Play { size } => {
            session::play(&config, size.unwrap_or(config.default_size))?;
        }
    }

    Ok(())
}
