//! Board addressing: files, ranks and the 64 squares.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};

/// Board file (column), a through h
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// Board rank (row), 1 through 8
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// File for a 0-based index, if in range
    pub fn from_index(index: i32) -> Option<File> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];

    /// Rank for a 0-based index (0 = rank 1), if in range
    pub fn from_index(index: i32) -> Option<Rank> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> char {
        (b'1' + self as u8) as char
    }
}

/// One of the 64 board squares
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square {
    file: File,
    rank: Rank,
}

macro_rules! square_consts {
    ($($name:ident = $file:ident $rank:ident),* $(,)?) => {
        impl Square {
            $(pub const $name: Square = Square::new(File::$file, Rank::$rank);)*
        }
    };
}

square_consts! {
    A1 = A First, A2 = A Second, A3 = A Third, A4 = A Fourth,
    A5 = A Fifth, A6 = A Sixth, A7 = A Seventh, A8 = A Eighth,
    B1 = B First, B2 = B Second, B3 = B Third, B4 = B Fourth,
    B5 = B Fifth, B6 = B Sixth, B7 = B Seventh, B8 = B Eighth,
    C1 = C First, C2 = C Second, C3 = C Third, C4 = C Fourth,
    C5 = C Fifth, C6 = C Sixth, C7 = C Seventh, C8 = C Eighth,
    D1 = D First, D2 = D Second, D3 = D Third, D4 = D Fourth,
    D5 = D Fifth, D6 = D Sixth, D7 = D Seventh, D8 = D Eighth,
    E1 = E First, E2 = E Second, E3 = E Third, E4 = E Fourth,
    E5 = E Fifth, E6 = E Sixth, E7 = E Seventh, E8 = E Eighth,
    F1 = F First, F2 = F Second, F3 = F Third, F4 = F Fourth,
    F5 = F Fifth, F6 = F Sixth, F7 = F Seventh, F8 = F Eighth,
    G1 = G First, G2 = G Second, G3 = G Third, G4 = G Fourth,
    G5 = G Fifth, G6 = G Sixth, G7 = G Seventh, G8 = G Eighth,
    H1 = H First, H2 = H Second, H3 = H Third, H4 = H Fourth,
    H5 = H Fifth, H6 = H Sixth, H7 = H Seventh, H8 = H Eighth,
}

impl Square {
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    /// Square from 0-based (file, rank) indices. Returns None outside the board.
    pub fn from_xy(x: i32, y: i32) -> Option<Square> {
        Some(Square::new(File::from_index(x)?, Rank::from_index(y)?))
    }

    pub fn file(self) -> File {
        self.file
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Algebraic name, e.g. "e4"
    pub fn name(self) -> String {
        self.to_string()
    }

    /// All squares, a1, b1, ... h8
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.name(), self.rank.name())
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("square name must be two characters: {s:?}");
        };
        let x = (f as i32) - ('a' as i32);
        let y = r
            .to_digit(10)
            .map(|d| d as i32 - 1)
            .ok_or_else(|| anyhow!("invalid rank digit {r:?}"))?;
        Square::from_xy(x, y).with_context(|| format!("square {s:?} is off the board"))
    }
}

impl From<Square> for shakmaty::Square {
    fn from(square: Square) -> Self {
        shakmaty::Square::from_coords(
            shakmaty::File::new(square.file as u32),
            shakmaty::Rank::new(square.rank as u32),
        )
    }
}

impl From<shakmaty::Square> for Square {
    fn from(square: shakmaty::Square) -> Self {
        Square::new(
            File::ALL[square.file().to_usize()],
            Rank::ALL[square.rank().to_usize()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_xy_round_trip() {
        for x in 0..8 {
            for y in 0..8 {
                let square = Square::from_xy(x, y).unwrap();
                assert_eq!(square.file().index(), x);
                assert_eq!(square.rank().index(), y);
            }
        }
    }

    #[test]
    fn test_from_xy_out_of_range() {
        assert_eq!(Square::from_xy(-1, 0), None);
        assert_eq!(Square::from_xy(0, -1), None);
        assert_eq!(Square::from_xy(8, 3), None);
        assert_eq!(Square::from_xy(3, 8), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Square::A1.name(), "a1");
        assert_eq!(Square::E4.name(), "e4");
        assert_eq!(Square::H8.to_string(), "h8");
        assert_eq!(Square::from_xy(2, 0).unwrap().name(), "c1");
    }

    #[test]
    fn test_parse() {
        assert_eq!("e4".parse::<Square>().unwrap(), Square::E4);
        assert_eq!("h8".parse::<Square>().unwrap(), Square::H8);
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_all_distinct() {
        let all: HashSet<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(Square::all().next(), Some(Square::A1));
        assert_eq!(Square::all().last(), Some(Square::H8));
    }

    #[test]
    fn test_shakmaty_conversion() {
        assert_eq!(shakmaty::Square::from(Square::E4), shakmaty::Square::E4);
        assert_eq!(Square::from(shakmaty::Square::G7), Square::G7);
        for square in Square::all() {
            assert_eq!(Square::from(shakmaty::Square::from(square)), square);
        }
    }
}
