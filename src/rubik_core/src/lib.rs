#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! A facelet model of the N×N×N cube: six independently indexed sides, a rotation engine that
//! turns any layer of any size of cube, and a scramble generator.

use thiserror::Error;

mod cube;
mod face;
mod layer_cycle;
mod rotation;
mod scrambler;
mod side;
mod state;

pub use cube::Cube;
pub use face::{Face, StickerColor};
pub use rotation::{BASIC_TOKENS, Rotation, Turn, TurnAmount, TurnLetter};
pub use scrambler::{Scrambler, scramble_length};
pub use side::Side;
pub use state::{CubeState, SideState};

/// Used when a cube is requested with fewer than two layers.
pub const DEFAULT_SIZE: usize = 3;

/// A cube always has exactly this many sides.
pub const NUMBER_OF_SIDES: usize = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Facelet index ({row}, {col}) is out of range for a side of size {size}")]
    FaceletOutOfRange { row: usize, col: usize, size: usize },
    #[error("Invalid rotation type {0:?}")]
    UnknownRotation(String),
    #[error("Layer {layer} does not exist on a cube of size {size}")]
    LayerOutOfRange { layer: usize, size: usize },
    #[error("Slice move {0} needs a cube with an odd size, but the cube has size {1}")]
    SliceOnEvenCube(String, usize),
    #[error("Could not parse {0:?} as a rotation")]
    ParseRotation(String),
    #[error("Invalid cube state: {0}")]
    InvalidState(String),
}
