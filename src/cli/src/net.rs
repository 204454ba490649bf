//! Print a cube as an unfolded net: U on top, then L F R B side by side, then D.

use std::fmt::Write;

use owo_colors::OwoColorize;
use rubik_core::{Cube, Face, Side, StickerColor};

fn rgb(color: StickerColor) -> (u8, u8, u8) {
    match color {
        StickerColor::Red => (196, 30, 58),
        StickerColor::White => (255, 255, 255),
        StickerColor::Green => (0, 158, 96),
        StickerColor::Orange => (255, 88, 0),
        StickerColor::Yellow => (255, 213, 0),
        StickerColor::Blue => (0, 81, 186),
    }
}

fn facelet(out: &mut String, color: StickerColor, colored: bool) {
    if colored {
        let (r, g, b) = rgb(color);
        write!(out, "{}", "  ".on_truecolor(r, g, b)).ok();
    } else {
        write!(out, "{} ", color.letter()).ok();
    }
}

fn side_row(out: &mut String, side: &Side, row: usize, colored: bool) {
    if let Some(row) = side.rows().nth(row) {
        for &color in row {
            facelet(out, color, colored);
        }
    }
}

pub fn render(cube: &Cube, colored: bool) -> String {
    let size = cube.size();
    let indent = " ".repeat(2 * size + 1);
    let side = |face: Face| &cube.sides()[face.index()];
    let mut out = String::new();

    let lone_face = |out: &mut String, face: Face| {
        for row in 0..size {
            out.push_str(&indent);
            side_row(out, side(face), row, colored);
            out.push('\n');
        }
    };

    lone_face(&mut out, Face::U);
    for row in 0..size {
        for (k, face) in [Face::L, Face::F, Face::R, Face::B].into_iter().enumerate() {
            if k > 0 {
                out.push(' ');
            }
            side_row(&mut out, side(face), row, colored);
        }
        out.push('\n');
    }
    lone_face(&mut out, Face::D);

    out
}

#[cfg(test)]
mod tests {
    use rubik_core::Rotation;

    use super::*;

    #[test]
    fn plain_net_of_solved_cube() {
        let net = render(&Cube::new(2), false);
        let expected = [
            "     r r ",
            "     r r ",
            "b b  w w  g g  y y ",
            "b b  w w  g g  y y ",
            "     o o ",
            "     o o ",
        ];
        assert_eq!(net.lines().collect::<Vec<_>>(), expected);
        assert!(net.ends_with('\n'));
    }

    #[test]
    fn net_follows_rotations() {
        let mut cube = Cube::new(3);
        cube.rotate(&Rotation::new(1, "U")).unwrap();
        let net = render(&cube, false);
        let band = net.lines().nth(3).unwrap();
        assert_eq!(band, "w w w  g g g  y y y  b b b ");
    }

    #[test]
    fn colored_net_has_one_line_per_row() {
        let net = render(&Cube::new(4), true);
        assert_eq!(net.lines().count(), 12);
    }
}
