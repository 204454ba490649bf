use std::fmt;

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::{
    CubeError, CubeState, DEFAULT_SIZE, Face, NUMBER_OF_SIDES, Rotation, Scrambler, Side,
    layer_cycle::{LayerCycle, Spin},
    rotation::TurnAmount,
};

/// An N×N×N cube made of six sides, one for each [`Face`].
///
/// ```
/// use rubik_core::{Cube, Rotation, Scrambler};
///
/// let mut cube = Cube::new(4);
/// cube.rotate(&Rotation::new(2, "R'")).unwrap();
/// assert!(!cube.is_solved());
///
/// cube.reset_sides();
/// cube.scramble(&Scrambler::with_seed(4, 1)).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CubeState", try_from = "CubeState")]
pub struct Cube {
    size: usize,
    /// Always indexed by [`Face::index`]
    sides: [Side; 6],
}

impl Cube {
    /// Create a solved cube. Sizes below 2 fall back to [`DEFAULT_SIZE`].
    pub fn new(size: usize) -> Cube {
        let size = if size >= 2 {
            info!("Cube created with cubesize {size}");
            size
        } else {
            error!("Invalid cubesize {size}, setting to DEFAULT_SIZE {DEFAULT_SIZE}");
            DEFAULT_SIZE
        };

        Cube {
            size,
            sides: solved_sides(size),
        }
    }

    /// Build a cube directly from six sides in any order. Used when restoring saved state.
    pub(crate) fn from_sides(size: usize, sides: Vec<Side>) -> Result<Cube, CubeError> {
        if size < 2 {
            return Err(CubeError::InvalidState(format!("cube size {size} is too small")));
        }

        let mut slots: [Option<Side>; 6] = [const { None }; 6];
        for side in sides {
            if side.size() != size {
                return Err(CubeError::InvalidState(format!(
                    "side {} has size {} on a cube of size {size}",
                    side.position(),
                    side.size()
                )));
            }
            let slot = &mut slots[side.position().index()];
            if slot.is_some() {
                return Err(CubeError::InvalidState(format!(
                    "side {} appears more than once",
                    side.position()
                )));
            }
            *slot = Some(side);
        }

        let mut ordered = Vec::with_capacity(NUMBER_OF_SIDES);
        for face in Face::ALL {
            let side = slots[face.index()]
                .take()
                .ok_or_else(|| CubeError::InvalidState(format!("side {face} is missing")))?;
            ordered.push(side);
        }
        let sides = <[Side; 6]>::try_from(ordered)
            .map_err(|_| CubeError::InvalidState("expected six sides".to_owned()))?;

        Ok(Cube { size, sides })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sides(&self) -> &[Side; 6] {
        &self.sides
    }

    /// Find the side with the given position tag
    pub fn side_at(&self, position: Face) -> Option<&Side> {
        let side = self.sides.iter().find(|side| side.position() == position);
        if side.is_none() {
            debug!("Invalid sideposition {position}");
        }
        side
    }

    /// Return every side to its solid canonical color
    pub fn reset_sides(&mut self) {
        self.sides = solved_sides(self.size);
        info!("Cube's sides reset to default state");
    }

    pub fn is_solved(&self) -> bool {
        self.sides.iter().all(Side::is_solved)
    }

    /// Turn one layer of the cube.
    ///
    /// Outer rotations take layers `1..=size / 2`; deeper layers are reached by turning from
    /// the opposite face. A rotation with an unknown token, a slice rotation on an even cube,
    /// or an outer rotation outside that range leaves the cube untouched and returns an error.
    pub fn rotate(&mut self, rotation: &Rotation) -> Result<(), CubeError> {
        let turn = rotation.turn().inspect_err(|_| {
            error!("Invalid rotation type {}", rotation.token());
        })?;

        let depth = if turn.letter.is_slice() {
            if self.size % 2 == 0 {
                error!("Slice rotation {rotation} on a cube of even size {}", self.size);
                return Err(CubeError::SliceOnEvenCube(rotation.name(), self.size));
            }
            0
        } else {
            if !(1..=self.size / 2).contains(&rotation.layer()) {
                error!("Rotation {rotation} has no layer on a cube of size {}", self.size);
                return Err(CubeError::LayerOutOfRange {
                    layer: rotation.layer(),
                    size: self.size,
                });
            }
            rotation.layer() - 1
        };

        let spin = match turn.amount {
            TurnAmount::Clockwise | TurnAmount::Half => Spin::Clockwise,
            TurnAmount::CounterClockwise => Spin::CounterClockwise,
        };
        let main_side = turn.letter.face().filter(|_| rotation.layer() == 1);
        let cycle = LayerCycle::of(turn.letter);

        for _ in 0..turn.amount.quarter_turns() {
            if let Some(face) = main_side {
                let side = &mut self.sides[face.index()];
                match spin {
                    Spin::Clockwise => side.rotate_clockwise(),
                    Spin::CounterClockwise => side.rotate_counter_clockwise(),
                }
            }

            cycle.apply(&mut self.sides, depth, spin);
        }

        debug!("Cube was rotated with rotation {rotation}");
        Ok(())
    }

    /// Apply every rotation of the scrambler in order, on top of the current state
    pub fn scramble(&mut self, scrambler: &Scrambler) -> Result<(), CubeError> {
        for rotation in scrambler.moves() {
            self.rotate(rotation)?;
        }
        info!("Cube scrambled");
        Ok(())
    }
}

fn solved_sides(size: usize) -> [Side; 6] {
    Face::ALL.map(|face| Side::new(size, face.solved_color(), face))
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in &self.sides {
            writeln!(f, "{side}")?;
        }
        Ok(())
    }
}
