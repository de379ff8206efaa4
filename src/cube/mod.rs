//! The facelet-level cube model: 54 colored facets, nine per face.
//!
//! The state is a flat array of 54 facets, six contiguous faces of nine. Each
//! face is a 3x3 grid stored row-major, read as if looking straight at that
//! face with the adjacent up face pointing away from the viewer. Unfolded:
//!
//! ```text
//!              #3 blue
//!             35 34 33
//!             32 31 30
//!             29 28 27
//!
//!  #4 orange   #0 white   #2 red
//! 42 39 36     0  1  2    20 23 26
//! 43 40 37     3  4  5    19 22 25
//! 44 41 38     6  7  8    18 21 24
//!
//!              #1 green
//!              9 10 11
//!             12 13 14
//!             15 16 17
//!
//!              #5 yellow
//!             45 46 47
//!             48 49 50
//!             51 52 53
//! ```
//!
//! Every permutation table in [`moves`] is defined against this layout. Moves
//! permute facet contents between the 54 fixed slots; the slots themselves,
//! and the adjacency between faces, never change.

pub mod moves;
pub mod solver;

use std::fmt;
use std::str::FromStr;

use crate::error::CubeError;

/// One of the six facet colors. Colors have no ordering, only equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facelet {
    /// `w`
    White,
    /// `g`
    Green,
    /// `r`
    Red,
    /// `b`
    Blue,
    /// `o`
    Orange,
    /// `y`
    Yellow,
}

impl Facelet {
    /// The character used for this color in textual cube layouts.
    pub fn to_char(self) -> char {
        match self {
            Facelet::White => 'w',
            Facelet::Green => 'g',
            Facelet::Red => 'r',
            Facelet::Blue => 'b',
            Facelet::Orange => 'o',
            Facelet::Yellow => 'y',
        }
    }

    /// Parse a single layout character into a color.
    pub fn from_char(c: char) -> Result<Self, CubeError> {
        match c {
            'w' => Ok(Facelet::White),
            'g' => Ok(Facelet::Green),
            'r' => Ok(Facelet::Red),
            'b' => Ok(Facelet::Blue),
            'o' => Ok(Facelet::Orange),
            'y' => Ok(Facelet::Yellow),
            _ => Err(CubeError::InvalidLabel(c)),
        }
    }
}

/// Colors of the six faces of [`FaceletCube::SOLVED`], in face order.
const FACE_COLORS: [Facelet; 6] = [
    Facelet::White,
    Facelet::Green,
    Facelet::Red,
    Facelet::Blue,
    Facelet::Orange,
    Facelet::Yellow,
];

/// A cube state: 54 facets in the fixed layout described at the module level.
///
/// States are plain values. Every move consumes `self` by value and returns a
/// new state; two states never share storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    facelets: [Facelet; 54],
}

impl FaceletCube {
    /// The solved cube, each face monochrome in its canonical color.
    pub const SOLVED: FaceletCube = {
        let mut facelets = [Facelet::White; 54];
        let mut i = 0;
        while i < 54 {
            facelets[i] = FACE_COLORS[i / 9];
            i += 1;
        }
        FaceletCube { facelets }
    };

    /// Build a cube from exactly 54 facets.
    ///
    /// Only the length is checked. A 54-facet input that is not reachable from
    /// the solved cube (wrong color counts, impossible sticker arrangement) is
    /// accepted as-is and flows through every move unharmed.
    pub fn from_facelets(facelets: &[Facelet]) -> Result<Self, CubeError> {
        match facelets.try_into() {
            Ok(facelets) => Ok(FaceletCube { facelets }),
            Err(_) => Err(CubeError::InvalidLength(facelets.len())),
        }
    }

    /// The raw 54 facets, in layout order.
    pub fn facelets(&self) -> &[Facelet; 54] {
        &self.facelets
    }

    /// Returns `true` iff every face is monochrome.
    ///
    /// Solvedness is structural: which color a face ended up with, and how the
    /// six colors map to faces, is not checked. A cube that is uniform per
    /// face under any coloring counts as solved.
    pub fn is_solved(&self) -> bool {
        self.facelets
            .chunks_exact(9)
            .all(|face| face.iter().all(|&f| f == face[0]))
    }
}

impl FromStr for FaceletCube {
    type Err = CubeError;

    /// Parse a textual layout such as
    /// `"wwwwwwwww ggggggggg rrrrrrrrr bbbbbbbbb ooooooooo yyyyyyyyy"`
    /// (the solved cube). Whitespace between faces is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut facelets = [Facelet::White; 54];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_ascii_whitespace()) {
            if count >= 54 {
                // keep counting for the error message
                count += 1;
                continue;
            }
            facelets[count] = Facelet::from_char(c)?;
            count += 1;
        }
        if count != 54 {
            return Err(CubeError::InvalidLength(count));
        }
        Ok(FaceletCube { facelets })
    }
}

impl fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, facelet) in self.facelets.iter().enumerate() {
            if i != 0 && i % 9 == 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", facelet.to_char())?;
        }
        Ok(())
    }
}
