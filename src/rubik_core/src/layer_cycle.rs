//! The adjacency table behind every layer turn.
//!
//! Each side stores its facelets in its own frame, so the ring of facelets around a turned
//! layer is made of strips that run along a row on some sides and along a column on others,
//! sometimes in reverse. A turn moves the colors of each strip onto the previous strip of its
//! cycle, for every position along the strips.

use crate::{Face, Side, TurnLetter};

use Anchor::{Far, Middle, Near};
use Face::{B, D, F, L, R, U};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Line {
    Row,
    Column,
}

/// Where the fixed coordinate of a strip sits, given the depth of the turned layer
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Anchor {
    /// `depth` from the first row or column
    Near,
    /// `depth` from the last row or column
    Far,
    /// The center row or column. Only meaningful on odd sizes.
    Middle,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Strip {
    face: Face,
    line: Line,
    anchor: Anchor,
    reversed: bool,
}

const fn row(face: Face, anchor: Anchor) -> Strip {
    Strip {
        face,
        line: Line::Row,
        anchor,
        reversed: false,
    }
}

const fn col(face: Face, anchor: Anchor) -> Strip {
    Strip {
        face,
        line: Line::Column,
        anchor,
        reversed: false,
    }
}

impl Strip {
    const fn rev(self) -> Strip {
        Strip {
            reversed: true,
            ..self
        }
    }

    #[cfg(test)]
    fn face(self) -> Face {
        self.face
    }

    /// The `(row, col)` of the `i`th facelet of this strip
    fn cell(self, i: usize, depth: usize, size: usize) -> (usize, usize) {
        let last = size - 1;
        let fixed = match self.anchor {
            Anchor::Near => depth,
            Anchor::Far => last - depth,
            Anchor::Middle => size / 2,
        };
        let along = if self.reversed { last - i } else { i };

        match self.line {
            Line::Row => (fixed, along),
            Line::Column => (along, fixed),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Four strips on four different sides. On a clockwise turn, `strips[k]` takes the colors of
/// `strips[k + 1]` and the last strip takes the colors of the first.
#[derive(Debug)]
pub(crate) struct LayerCycle {
    strips: [Strip; 4],
}

const R_CYCLE: LayerCycle = LayerCycle {
    strips: [col(U, Far), col(F, Far), col(D, Far), col(B, Near).rev()],
};
const L_CYCLE: LayerCycle = LayerCycle {
    strips: [col(U, Near), col(B, Far).rev(), col(D, Near), col(F, Near)],
};
const U_CYCLE: LayerCycle = LayerCycle {
    strips: [row(F, Near), row(R, Near), row(B, Near), row(L, Near)],
};
const D_CYCLE: LayerCycle = LayerCycle {
    strips: [row(F, Far), row(L, Far), row(B, Far), row(R, Far)],
};
const F_CYCLE: LayerCycle = LayerCycle {
    strips: [row(U, Far), col(L, Far).rev(), row(D, Near).rev(), col(R, Near)],
};
const B_CYCLE: LayerCycle = LayerCycle {
    strips: [row(U, Near), col(R, Far), row(D, Far).rev(), col(L, Near).rev()],
};
const M_CYCLE: LayerCycle = LayerCycle {
    strips: [col(F, Middle), col(U, Middle), col(B, Middle).rev(), col(D, Middle)],
};
const E_CYCLE: LayerCycle = LayerCycle {
    strips: [row(F, Middle), row(R, Middle), row(B, Middle), row(L, Middle)],
};
const S_CYCLE: LayerCycle = LayerCycle {
    strips: [row(U, Middle), col(L, Middle).rev(), row(D, Middle).rev(), col(R, Middle)],
};

impl LayerCycle {
    pub(crate) fn of(letter: TurnLetter) -> &'static LayerCycle {
        match letter {
            TurnLetter::R => &R_CYCLE,
            TurnLetter::L => &L_CYCLE,
            TurnLetter::U => &U_CYCLE,
            TurnLetter::D => &D_CYCLE,
            TurnLetter::F => &F_CYCLE,
            TurnLetter::B => &B_CYCLE,
            TurnLetter::M => &M_CYCLE,
            TurnLetter::E => &E_CYCLE,
            TurnLetter::S => &S_CYCLE,
        }
    }

    #[cfg(test)]
    fn strips(&self) -> &[Strip; 4] {
        &self.strips
    }

    /// Move one quarter turn's worth of facelets around the ring. `sides` must be indexed by
    /// [`Face::index`] and `depth` must be less than the side size.
    pub(crate) fn apply(&self, sides: &mut [Side; 6], depth: usize, spin: Spin) {
        let size = sides[0].size();

        for i in 0..size {
            let cells = self.strips.map(|strip| strip.cell(i, depth, size));
            let colors: [_; 4] = std::array::from_fn(|k| {
                let (row, col) = cells[k];
                sides[self.strips[k].face.index()].get(row, col)
            });

            for (k, strip) in self.strips.iter().enumerate() {
                let source = match spin {
                    Spin::Clockwise => (k + 1) % 4,
                    Spin::CounterClockwise => (k + 3) % 4,
                };
                let (row, col) = cells[k];
                sides[strip.face.index()].set(row, col, colors[source]);
            }
        }
    }
}
