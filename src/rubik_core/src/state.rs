use serde::{Deserialize, Serialize};

use crate::{Cube, CubeError, Face, Side, StickerColor};

/// The saved form of a cube. Restoring it assigns every facelet directly, so no moves are
/// replayed.
///
/// ```json
/// {
///   "cubeSize": 2,
///   "sides": [
///     { "sideSize": 2, "colors": [["RED", "RED"], ["RED", "RED"]], "position": "U" },
///     ...
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeState {
    pub cube_size: usize,
    pub sides: Vec<SideState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideState {
    pub side_size: usize,
    pub colors: Vec<Vec<StickerColor>>,
    pub position: Face,
}

impl From<&Side> for SideState {
    fn from(side: &Side) -> Self {
        SideState {
            side_size: side.size(),
            colors: side.rows().map(<[StickerColor]>::to_vec).collect(),
            position: side.position(),
        }
    }
}

impl TryFrom<SideState> for Side {
    type Error = CubeError;

    fn try_from(state: SideState) -> Result<Self, Self::Error> {
        if state.colors.len() != state.side_size {
            return Err(CubeError::InvalidState(format!(
                "side {} claims size {} but has {} rows",
                state.position,
                state.side_size,
                state.colors.len()
            )));
        }
        Side::from_rows(state.position, state.colors)
    }
}

impl From<&Cube> for CubeState {
    fn from(cube: &Cube) -> Self {
        CubeState {
            cube_size: cube.size(),
            sides: cube.sides().iter().map(SideState::from).collect(),
        }
    }
}

impl From<Cube> for CubeState {
    fn from(cube: Cube) -> Self {
        CubeState::from(&cube)
    }
}

impl TryFrom<CubeState> for Cube {
    type Error = CubeError;

    fn try_from(state: CubeState) -> Result<Self, Self::Error> {
        let sides = state
            .sides
            .into_iter()
            .map(Side::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Cube::from_sides(state.cube_size, sides)
    }
}
