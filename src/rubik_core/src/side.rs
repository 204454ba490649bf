use std::fmt;

use itertools::Itertools;
use log::{error, trace};

use crate::{CubeError, Face, StickerColor};

/// One N×N grid of facelets. Rows are stored top to bottom, each row left to right, in the
/// side's own frame of reference. A side knows nothing about its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    size: usize,
    position: Face,
    colors: Vec<StickerColor>,
}

impl Side {
    /// Create a side where every facelet has the same color
    pub fn new(size: usize, color: StickerColor, position: Face) -> Side {
        trace!("Side created at sideposition {position} with color {color:?}");
        Side {
            size,
            position,
            colors: vec![color; size * size],
        }
    }

    /// Build a side from explicit rows. Every row must have exactly `rows.len()` facelets.
    pub fn from_rows(position: Face, rows: Vec<Vec<StickerColor>>) -> Result<Side, CubeError> {
        let size = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(CubeError::InvalidState(format!(
                "side {position} has a row of length {} but {size} rows",
                row.len()
            )));
        }

        Ok(Side {
            size,
            position,
            colors: rows.into_iter().flatten().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn position(&self) -> Face {
        self.position
    }

    /// Rotate the grid 90° clockwise: transpose, then reverse each row
    pub fn rotate_clockwise(&mut self) {
        self.transpose();
        for row in self.colors.chunks_exact_mut(self.size) {
            row.reverse();
        }
        trace!("Mainside {} rotated clockwise", self.position);
    }

    /// Rotate the grid 90° counterclockwise: transpose, then reverse each column
    pub fn rotate_counter_clockwise(&mut self) {
        self.transpose();
        let n = self.size;
        for i in 0..n / 2 {
            for j in 0..n {
                self.colors.swap(i * n + j, (n - 1 - i) * n + j);
            }
        }
        trace!("Mainside {} rotated counterclockwise", self.position);
    }

    fn transpose(&mut self) {
        let n = self.size;
        for i in 0..n {
            for j in i + 1..n {
                self.colors.swap(i * n + j, j * n + i);
            }
        }
    }

    pub fn color_at(&self, i: usize, j: usize) -> Result<StickerColor, CubeError> {
        self.index_of(i, j).map(|idx| self.colors[idx])
    }

    pub fn set_color_at(
        &mut self,
        i: usize,
        j: usize,
        color: StickerColor,
    ) -> Result<(), CubeError> {
        let idx = self.index_of(i, j)?;
        self.colors[idx] = color;
        Ok(())
    }

    fn index_of(&self, i: usize, j: usize) -> Result<usize, CubeError> {
        if i < self.size && j < self.size {
            Ok(i * self.size + j)
        } else {
            error!("Invalid indices {i} {j} on side {}", self.position);
            Err(CubeError::FaceletOutOfRange {
                row: i,
                col: j,
                size: self.size,
            })
        }
    }

    /// Unchecked access for the rotation engine, which only produces in-range indices
    pub(crate) fn get(&self, i: usize, j: usize) -> StickerColor {
        self.colors[i * self.size + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, color: StickerColor) {
        self.colors[i * self.size + j] = color;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[StickerColor]> {
        self.colors.chunks_exact(self.size.max(1))
    }

    /// Whether every facelet has the same color
    pub fn is_solved(&self) -> bool {
        self.colors.iter().all_equal()
    }

    /// The number of different colors showing on this side
    pub fn distinct_colors(&self) -> usize {
        self.colors.iter().unique().count()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.colors.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(size: usize, i: usize, j: usize) -> Side {
        let mut side = Side::new(size, StickerColor::White, Face::U);
        side.set_color_at(i, j, StickerColor::Yellow).unwrap();
        side
    }

    fn only_marked_at(side: &Side, i: usize, j: usize) {
        for row in 0..side.size() {
            for col in 0..side.size() {
                let expected = if (row, col) == (i, j) {
                    StickerColor::Yellow
                } else {
                    StickerColor::White
                };
                assert_eq!(side.color_at(row, col), Ok(expected), "at ({row}, {col})");
            }
        }
    }

    #[test_log::test]
    fn clockwise_moves_corner() {
        let mut side = marked(3, 0, 0);
        side.rotate_clockwise();
        only_marked_at(&side, 0, 2);
    }

    #[test_log::test]
    fn counter_clockwise_moves_corner() {
        let mut side = marked(3, 0, 0);
        side.rotate_counter_clockwise();
        only_marked_at(&side, 2, 0);
    }

    #[test_log::test]
    fn rotations_on_even_sizes() {
        let mut side = marked(4, 0, 1);
        side.rotate_clockwise();
        only_marked_at(&side, 1, 3);
        side.rotate_clockwise();
        only_marked_at(&side, 3, 2);
        side.rotate_counter_clockwise();
        side.rotate_counter_clockwise();
        only_marked_at(&side, 0, 1);
    }

    #[test_log::test]
    fn four_quarter_turns_are_identity() {
        let rows = vec![
            vec![StickerColor::Red, StickerColor::Green, StickerColor::Blue],
            vec![StickerColor::White, StickerColor::Orange, StickerColor::Yellow],
            vec![StickerColor::Blue, StickerColor::Red, StickerColor::Green],
        ];
        let original = Side::from_rows(Face::F, rows).unwrap();
        let mut side = original.clone();
        for _ in 0..4 {
            side.rotate_clockwise();
        }
        assert_eq!(side, original);
        side.rotate_clockwise();
        side.rotate_counter_clockwise();
        assert_eq!(side, original);
    }

    #[test_log::test]
    fn out_of_range_access() {
        let mut side = Side::new(5, StickerColor::Green, Face::B);
        assert_eq!(side.color_at(2, 2), Ok(StickerColor::Green));
        assert!(matches!(
            side.color_at(5, 5),
            Err(CubeError::FaceletOutOfRange { row: 5, col: 5, size: 5 })
        ));
        assert!(side.set_color_at(0, 7, StickerColor::Red).is_err());
        assert!(side.is_solved());
        side.set_color_at(2, 2, StickerColor::White).unwrap();
        assert_eq!(side.color_at(2, 2), Ok(StickerColor::White));
        assert_eq!(side.distinct_colors(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![StickerColor::Red; 2], vec![StickerColor::Red; 3]];
        assert!(Side::from_rows(Face::L, rows).is_err());
    }

    #[test]
    fn display_uses_letters() {
        let mut side = Side::new(2, StickerColor::Red, Face::U);
        side.set_color_at(1, 1, StickerColor::Blue).unwrap();
        assert_eq!(side.to_string(), "r r r b");
    }
}
