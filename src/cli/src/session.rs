use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use color_eyre::eyre::{WrapErr, eyre};
use log::{debug, info, warn};
use rubik_core::{Cube, Rotation, Scrambler};

use crate::{config::Config, net};

const HELP: &str = "\
Moves:      rotation names separated by spaces, e.g. `R U' 2F2 0M`
undo        revert the last move
reset       return to the solved state
scramble    reset, then apply a fresh scramble
size N      switch to an N×N×N cube, resuming it if it was used before
save FILE   save the cube as JSON
load FILE   load a cube saved as JSON
show        print the cube
quit        leave";

pub fn save_cube(cube: &Cube, path: &Path) -> color_eyre::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Could not create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cube)?;
    fs::write(path, json).wrap_err_with(|| format!("Error at saving file {}", path.display()))?;
    info!("Successfully saved file {}", path.display());
    Ok(())
}

pub fn load_cube(path: &Path) -> color_eyre::Result<Cube> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("Error at reading from file {}", path.display()))?;
    let cube = serde_json::from_str(&json)
        .wrap_err_with(|| format!("Could not load cube from {}", path.display()))?;
    info!("Successfully read from file {}", path.display());
    Ok(cube)
}

/// Parse a whitespace separated list of rotation names
pub fn parse_moves(moves: &str) -> color_eyre::Result<Vec<Rotation>> {
    let moves = moves
        .split_whitespace()
        .map(str::parse::<Rotation>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(moves)
}

pub fn make_scrambler(size: usize, seed: Option<u64>) -> Scrambler {
    match seed {
        Some(seed) => Scrambler::with_seed(size, seed),
        None => Scrambler::new(size),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// An interactive cube. Every cube size keeps its own slot, so switching sizes back and forth
/// resumes where it left off.
pub struct Session<'a> {
    config: &'a Config,
    cube: Cube,
    history: Vec<Rotation>,
    slots: PathBuf,
    scrambles: u64,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a Config, size: usize, slots: PathBuf) -> Session<'a> {
        Session {
            config,
            cube: Cube::new(size),
            history: Vec::new(),
            slots,
            scrambles: 0,
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    fn slot(&self, size: usize) -> PathBuf {
        self.slots.join(format!("{size}cube.json"))
    }

    fn show(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", net::render(&self.cube, self.config.color))
    }

    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> color_eyre::Result<Outcome> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };
        debug!("Executing {line:?}");

        match command {
            "" => return Ok(Outcome::Continue),
            "quit" | "exit" => return Ok(Outcome::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "show" => self.show(out)?,
            "reset" => {
                self.cube.reset_sides();
                self.history.clear();
                self.show(out)?;
            }
            "scramble" => {
                let seed = self.config.seed.map(|seed| seed.wrapping_add(self.scrambles));
                let scrambler = make_scrambler(self.cube.size(), seed);
                self.scrambles += 1;

                self.cube.reset_sides();
                self.cube.scramble(&scrambler)?;
                self.history.clear();
                writeln!(out, "{scrambler}")?;
                self.show(out)?;
            }
            "undo" => match self.history.pop() {
                Some(rotation) => {
                    self.cube.rotate(&rotation.inverse()?)?;
                    self.show(out)?;
                }
                None => writeln!(out, "Nothing to undo")?,
            },
            "size" => {
                let size = argument
                    .parse::<usize>()
                    .map_err(|_| eyre!("Expected a cube size, got {argument:?}"))?;
                self.switch_size(size)?;
                self.show(out)?;
            }
            "save" | "load" if argument.is_empty() => {
                return Err(eyre!("Usage: {command} FILE"));
            }
            "save" => {
                let path = self.config.save_path(Path::new(argument));
                save_cube(&self.cube, &path)?;
                writeln!(out, "Saved to {}", path.display())?;
            }
            "load" => {
                let path = self.config.save_path(Path::new(argument));
                self.stash()?;
                self.cube = load_cube(&path)?;
                self.history.clear();
                self.show(out)?;
            }
            _ => {
                // Nothing is applied unless every name parses
                for rotation in parse_moves(line)? {
                    self.cube.rotate(&rotation)?;
                    self.history.push(rotation);
                }
                self.show(out)?;
                if self.cube.is_solved() {
                    writeln!(out, "Solved!")?;
                }
            }
        }

        Ok(Outcome::Continue)
    }

    /// Keep the current cube in its size's slot
    fn stash(&self) -> color_eyre::Result<()> {
        let slot = self.slot(self.cube.size());
        info!(
            "Temporarly saving cube {} state to {}",
            self.cube.size(),
            slot.display()
        );
        save_cube(&self.cube, &slot)
    }

    fn switch_size(&mut self, size: usize) -> color_eyre::Result<()> {
        if size < 2 {
            return Err(eyre!("A cube needs at least 2 layers, got {size}"));
        }
        if size == self.cube.size() {
            return Ok(());
        }
        self.stash()?;

        let slot = self.slot(size);
        self.cube = if slot.exists() {
            info!("Found previously started cube for cubesize {size}");
            load_cube(&slot)?
        } else {
            info!("Found no previously started cube for cubesize {size}, creating new one");
            Cube::new(size)
        };
        self.history.clear();
        Ok(())
    }
}

/// Run an interactive session on stdin until `quit` or end of input
pub fn play(config: &Config, size: usize) -> color_eyre::Result<()> {
    let slots = std::env::temp_dir().join(format!("rubikscubeTempData-{}", std::process::id()));
    let mut session = Session::new(config, size, slots.clone());
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Type `help` for the list of commands")?;
    session.show(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        match session.execute(&line?, &mut stdout) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Err(e) => writeln!(stdout, "{e:#}")?,
        }
    }

    if slots.exists() {
        if let Err(e) = fs::remove_dir_all(&slots) {
            warn!("Could not remove {}: {e}", slots.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rubik_core::Face;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rubik-cli-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn config(name: &str) -> Config {
        Config {
            save_directory: scratch_dir(name).join("saves"),
            color: false,
            seed: Some(4),
            ..Config::default()
        }
    }

    fn run(session: &mut Session<'_>, line: &str) -> String {
        let mut out = Vec::new();
        session.execute(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test_log::test]
    fn moves_and_undo() {
        let config = config("moves");
        let mut session = Session::new(&config, 3, scratch_dir("moves").join("slots"));

        run(&mut session, "R U 0M'");
        assert!(!session.cube().is_solved());

        run(&mut session, "undo");
        run(&mut session, "undo");
        let out = run(&mut session, "undo");
        assert!(session.cube().is_solved());
        assert!(!out.contains("Nothing"));
        assert_eq!(run(&mut session, "undo"), "Nothing to undo\n");

        let out = run(&mut session, "R R'");
        assert!(out.ends_with("Solved!\n"));
    }

    #[test_log::test]
    fn bad_moves_apply_nothing() {
        let config = config("bad");
        let mut session = Session::new(&config, 4, scratch_dir("bad").join("slots"));
        let mut out = Vec::new();

        assert!(session.execute("R X", &mut out).is_err());
        assert!(session.cube().is_solved());

        // Slices do not exist on even cubes
        assert!(session.execute("0M", &mut out).is_err());
        assert!(session.cube().is_solved());
    }

    #[test_log::test]
    fn sizes_keep_their_own_cube() {
        let config = config("sizes");
        let mut session = Session::new(&config, 3, scratch_dir("sizes").join("slots"));

        run(&mut session, "F");
        let three = session.cube().clone();

        run(&mut session, "size 5");
        assert_eq!(session.cube().size(), 5);
        assert!(session.cube().is_solved());
        run(&mut session, "2R");
        let five = session.cube().clone();

        run(&mut session, "size 3");
        assert_eq!(session.cube(), &three);
        run(&mut session, "size 5");
        assert_eq!(session.cube(), &five);
    }

    #[test_log::test]
    fn too_small_sizes_keep_the_cube() {
        let config = config("small");
        let mut session = Session::new(&config, 3, scratch_dir("small").join("slots"));
        let mut out = Vec::new();

        run(&mut session, "R U");
        let progress = session.cube().clone();

        for size in ["size 1", "size 0"] {
            assert!(session.execute(size, &mut out).is_err());
            assert_eq!(session.cube(), &progress);
        }
        run(&mut session, "size 3");
        assert_eq!(session.cube(), &progress);
        run(&mut session, "undo");
        run(&mut session, "undo");
        assert!(session.cube().is_solved());
    }

    #[test_log::test]
    fn save_then_load() {
        let config = config("save");
        let mut session = Session::new(&config, 4, scratch_dir("save").join("slots"));

        run(&mut session, "scramble");
        let scrambled = session.cube().clone();
        assert!(!scrambled.is_solved());

        let out = run(&mut session, "save game.json");
        assert!(out.starts_with("Saved to"));
        assert!(config.save_directory.join("game.json").exists());

        run(&mut session, "reset");
        assert!(session.cube().is_solved());
        run(&mut session, "load game.json");
        assert_eq!(session.cube(), &scrambled);
        assert_ne!(
            session.cube().side_at(Face::U),
            Cube::new(4).side_at(Face::U)
        );
    }

    #[test_log::test]
    fn seeded_scrambles_differ_between_calls() {
        let config = config("seeded");
        let mut session = Session::new(&config, 3, scratch_dir("seeded").join("slots"));
        let first = run(&mut session, "scramble");
        let second = run(&mut session, "scramble");
        assert_ne!(first, second);

        let mut again = Session::new(&config, 3, scratch_dir("seeded").join("slots"));
        assert_eq!(run(&mut again, "scramble"), first);
    }

    #[test]
    fn quit_and_usage_errors() {
        let config = config("quit");
        let mut session = Session::new(&config, 3, scratch_dir("quit").join("slots"));
        let mut out = Vec::new();
        assert_eq!(session.execute("  ", &mut out).unwrap(), Outcome::Continue);
        assert!(session.execute("size big", &mut out).is_err());
        assert!(session.execute("save", &mut out).is_err());
        assert_eq!(session.execute("quit", &mut out).unwrap(), Outcome::Quit);
    }

    #[test]
    fn move_lists() {
        let moves = parse_moves("R  2U' 0E2\tL").unwrap();
        assert_eq!(moves.iter().join(" "), "1R 2U' 0E2 1L");
        assert!(parse_moves("R Q").is_err());
    }
}
