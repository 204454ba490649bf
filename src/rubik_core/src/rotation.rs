use std::{fmt, str::FromStr};

use itertools::Itertools;
use log::trace;

use crate::{CubeError, Face};

/// The tokens of every single-layer outer face turn. Random rotations are drawn from these.
pub const BASIC_TOKENS: [&str; 18] = [
    "R", "R'", "R2", "U", "U'", "U2", "F", "F'", "F2", "L", "L'", "L2", "D", "D'", "D2", "B",
    "B'", "B2",
];

/// The letter of a move token: one of the six faces or one of the three middle slices
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TurnLetter {
    U,
    D,
    F,
    B,
    L,
    R,
    /// The middle slice between L and R
    M,
    /// The middle slice between U and D
    E,
    /// The middle slice between F and B
    S,
}

impl TurnLetter {
    pub const ALL: [Self; 9] = {
        use TurnLetter::*;
        [U, D, F, B, L, R, M, E, S]
    };

    pub fn letter(self) -> char {
        match self {
            TurnLetter::U => 'U',
            TurnLetter::D => 'D',
            TurnLetter::F => 'F',
            TurnLetter::B => 'B',
            TurnLetter::L => 'L',
            TurnLetter::R => 'R',
            TurnLetter::M => 'M',
            TurnLetter::E => 'E',
            TurnLetter::S => 'S',
        }
    }

    pub fn from_letter(c: char) -> Option<TurnLetter> {
        TurnLetter::ALL.into_iter().find(|v| v.letter() == c)
    }

    /// The outer face turned by this letter, or `None` for a middle slice
    pub fn face(self) -> Option<Face> {
        match self {
            TurnLetter::U => Some(Face::U),
            TurnLetter::D => Some(Face::D),
            TurnLetter::F => Some(Face::F),
            TurnLetter::B => Some(Face::B),
            TurnLetter::L => Some(Face::L),
            TurnLetter::R => Some(Face::R),
            TurnLetter::M | TurnLetter::E | TurnLetter::S => None,
        }
    }

    pub fn is_slice(self) -> bool {
        self.face().is_none()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TurnAmount {
    Clockwise,
    CounterClockwise,
    Half,
}

impl TurnAmount {
    /// How many quarter turns of the same handedness make up this amount
    pub fn quarter_turns(self) -> usize {
        match self {
            TurnAmount::Clockwise | TurnAmount::CounterClockwise => 1,
            TurnAmount::Half => 2,
        }
    }

    pub fn inverse(self) -> TurnAmount {
        match self {
            TurnAmount::Clockwise => TurnAmount::CounterClockwise,
            TurnAmount::CounterClockwise => TurnAmount::Clockwise,
            TurnAmount::Half => TurnAmount::Half,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            TurnAmount::Clockwise => "",
            TurnAmount::CounterClockwise => "'",
            TurnAmount::Half => "2",
        }
    }
}

/// A decoded move token
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    pub letter: TurnLetter,
    pub amount: TurnAmount,
}

impl Turn {
    /// Decode a token such as `R`, `U'` or `M2`
    pub fn parse(token: &str) -> Option<Turn> {
        let mut chars = token.chars();
        let letter = TurnLetter::from_letter(chars.next()?)?;
        let amount = match chars.as_str() {
            "" => TurnAmount::Clockwise,
            "'" => TurnAmount::CounterClockwise,
            "2" => TurnAmount::Half,
            _ => return None,
        };
        Some(Turn { letter, amount })
    }

    pub fn token(self) -> String {
        format!("{}{}", self.letter.letter(), self.amount.suffix())
    }
}

/// A single layer turn. The layer counts inwards from the face named by the token, starting
/// at 1 for the outermost layer; middle slices use layer 0.
///
/// The token is kept as given, so a rotation may name a move that does not exist. Such
/// rotations are rejected when they are applied to a cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rotation {
    layer: usize,
    token: String,
}

impl Rotation {
    pub fn new(layer: usize, token: impl Into<String>) -> Rotation {
        Rotation {
            layer,
            token: token.into(),
        }
    }

    /// The 18 outermost-layer face turns
    pub fn basic_rotations() -> impl Iterator<Item = Rotation> {
        BASIC_TOKENS.into_iter().map(|token| Rotation::new(1, token))
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The face or slice letter, which is the first character of the token
    pub fn letter(&self) -> Option<char> {
        self.token.chars().next()
    }

    pub fn name(&self) -> String {
        format!("{}{}", self.layer, self.token)
    }

    pub fn turn(&self) -> Result<Turn, CubeError> {
        Turn::parse(&self.token).ok_or_else(|| CubeError::UnknownRotation(self.token.clone()))
    }

    /// The rotation that undoes this one on the same layer
    pub fn inverse(&self) -> Result<Rotation, CubeError> {
        let turn = self.turn()?;
        let inverse = Turn {
            letter: turn.letter,
            amount: turn.amount.inverse(),
        };
        Ok(Rotation::new(self.layer, inverse.token()))
    }

    /// Pick one of the basic tokens and a layer between 1 and `target_size / 2`, uniformly
    pub fn generate(target_size: usize, rng: &mut fastrand::Rng) -> Rotation {
        let token = BASIC_TOKENS[rng.usize(..BASIC_TOKENS.len())];
        Rotation::with_random_layer(target_size, token, rng)
    }

    /// Like [`Rotation::generate`], but the letter always differs from `previous`'s letter
    pub fn generate_different(
        target_size: usize,
        previous: &Rotation,
        rng: &mut fastrand::Rng,
    ) -> Rotation {
        Rotation::generate_avoiding(target_size, &[previous.letter()], rng)
    }

    /// Draw uniformly among the basic tokens whose letter is not in `avoid`. This has the same
    /// distribution as redrawing until an admissible token comes up, without the retry loop.
    pub(crate) fn generate_avoiding(
        target_size: usize,
        avoid: &[Option<char>],
        rng: &mut fastrand::Rng,
    ) -> Rotation {
        let candidates = BASIC_TOKENS
            .into_iter()
            .filter(|token| !avoid.contains(&token.chars().next()))
            .collect_vec();

        match rng.choice(candidates) {
            Some(token) => Rotation::with_random_layer(target_size, token, rng),
            None => Rotation::generate(target_size, rng),
        }
    }

    fn with_random_layer(target_size: usize, token: &str, rng: &mut fastrand::Rng) -> Rotation {
        let max_layer = (target_size / 2).max(1);
        let rotation = Rotation::new(rng.usize(1..=max_layer), token);
        trace!("Generated rotation {rotation}");
        rotation
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.layer, self.token)
    }
}

impl FromStr for Rotation {
    type Err = CubeError;

    /// Parse a rotation name such as `5R2` or `0M'`. Without a layer number, face turns get
    /// layer 1 and slices get layer 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.chars().take_while(char::is_ascii_digit).count();
        let (layer, token) = s.split_at(digits);

        let turn = Turn::parse(token).ok_or_else(|| CubeError::ParseRotation(s.to_owned()))?;
        let layer = if layer.is_empty() {
            usize::from(!turn.letter.is_slice())
        } else {
            layer
                .parse()
                .map_err(|_| CubeError::ParseRotation(s.to_owned()))?
        };

        Ok(Rotation::new(layer, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let rotation = Rotation::new(4, "D'");
        assert_eq!(rotation.layer(), 4);
        assert_eq!(rotation.token(), "D'");
        assert_eq!(rotation.letter(), Some('D'));
        assert_eq!(rotation.name(), "4D'");
        assert_eq!(Rotation::new(0, "S2").to_string(), "0S2");
        assert_eq!(Rotation::new(11, "R").name(), "11R");
    }

    #[test]
    fn basic_rotations_are_outer_layer() {
        let basics = Rotation::basic_rotations().collect_vec();
        assert_eq!(basics.len(), 18);
        for rotation in basics {
            assert_eq!(rotation.layer(), 1);
            assert_eq!(&rotation.name()[1..], rotation.token());
            let turn = rotation.turn().unwrap();
            assert!(!turn.letter.is_slice());
        }
    }

    #[test]
    fn tokens_decode() {
        assert_eq!(
            Turn::parse("M2"),
            Some(Turn {
                letter: TurnLetter::M,
                amount: TurnAmount::Half
            })
        );
        assert_eq!(
            Turn::parse("F'").map(|turn| turn.amount),
            Some(TurnAmount::CounterClockwise)
        );
        for bad in ["", "X", "R3", "R''", "r", "2R"] {
            assert_eq!(Turn::parse(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn inverses() {
        let inverse = |name: &str| name.parse::<Rotation>().unwrap().inverse().unwrap().name();
        assert_eq!(inverse("3R"), "3R'");
        assert_eq!(inverse("2F'"), "2F");
        assert_eq!(inverse("1B2"), "1B2");
        assert_eq!(inverse("0E"), "0E'");
        assert!(Rotation::new(1, "Q").inverse().is_err());
    }

    #[test]
    fn parse_names() {
        assert_eq!("5R2".parse::<Rotation>(), Ok(Rotation::new(5, "R2")));
        assert_eq!("0M'".parse::<Rotation>(), Ok(Rotation::new(0, "M'")));
        assert_eq!("U'".parse::<Rotation>(), Ok(Rotation::new(1, "U'")));
        assert_eq!("S".parse::<Rotation>(), Ok(Rotation::new(0, "S")));
        assert_eq!("12L".parse::<Rotation>(), Ok(Rotation::new(12, "L")));
        assert!("5".parse::<Rotation>().is_err());
        assert!("1X".parse::<Rotation>().is_err());
        assert!("R 2".parse::<Rotation>().is_err());
    }

    #[test_log::test]
    fn generated_rotations_fit_the_cube() {
        let mut rng = fastrand::Rng::with_seed(7);
        for size in 2..=25 {
            for _ in 0..50 {
                let rotation = Rotation::generate(size, &mut rng);
                assert!((1..=size / 2).contains(&rotation.layer()), "{rotation} on {size}");
                assert!(BASIC_TOKENS.contains(&rotation.token()));
            }
        }
    }

    #[test_log::test]
    fn different_rotations_change_letter() {
        let mut rng = fastrand::Rng::with_seed(11);
        for size in 2..=25 {
            let first = Rotation::generate(size, &mut rng);
            for _ in 0..50 {
                let second = Rotation::generate_different(size, &first, &mut rng);
                assert_ne!(first.letter(), second.letter());
                assert!((1..=size / 2).contains(&second.layer()));
            }
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut a = fastrand::Rng::with_seed(99);
        let mut b = fastrand::Rng::with_seed(99);
        for _ in 0..20 {
            assert_eq!(
                Rotation::generate(9, &mut a),
                Rotation::generate(9, &mut b)
            );
        }
    }
}
