//! Generic move algebra: traits and sequences shared by any twisty puzzle
//! whose moves form a group presentation.

/// Enum for representing the cancellation of two moves.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// The moves cancelled completely.
    ///
    /// e.g. `R R'` cancels completely
    NoMove,
    /// The moves cancelled into one move.
    ///
    /// e.g. `R R` cancels into `R2`
    OneMove(M),
    /// The moves didn't cancel
    ///
    /// e.g. `R U` stays as `R U` when cancelling
    TwoMove(M, M),
}

/// A move, intended as a power of a symbol in some group presentation.
///
/// Two families of relations are assumed: each symbol has finite order (on the
/// 3x3x3, `R` has order 4), encoded by [`cancel`](Move::cancel), and some
/// symbols commute (on the 3x3x3, `R` and `L` do), encoded by
/// [`commutes_with`](Move::commutes_with). Sequence simplification uses only
/// these two relations, so any further coincidences in the group are not
/// exploited.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move, satisfying `X X^{-1} = X^{-1} X = e` where
    /// `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Returns whether the two moves commute, i.e. can be swapped when
    /// adjacent. This relation is required to be transitive.
    fn commutes_with(&self, b: &Self) -> bool;

    /// Return the cancellation of two adjacent moves.
    ///
    /// ```rust
    /// # fn main() {
    /// use facelet_cube::mv;
    /// use facelet_cube::moves::{Cancellation, Move};
    ///
    /// assert!(mv!(R, 1).cancel(mv!(U, 3)) == Cancellation::TwoMove(mv!(R, 1), mv!(U, 3)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 1)) == Cancellation::OneMove(mv!(R, 2)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 3)) == Cancellation::NoMove);
    /// # }
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of
/// move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is the empty (identity) sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate another sequence onto the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Invert a sequence of moves.
    ///
    /// The moves are inverted individually and replayed in reverse order, so
    /// the sequence followed by its inverse is the identity.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel a sequence as far as the order and commutativity relations
    /// allow, e.g. `R U U' R R` reduces to `R'`.
    pub fn cancel(self) -> Self {
        let mut reduced: Vec<M> = Vec::with_capacity(self.0.len());
        for mv in self.0 {
            push_cancelled(&mut reduced, mv);
        }
        Self(reduced)
    }
}

// Push a move onto a fully reduced stack, keeping it fully reduced. We scan
// backwards through moves the new one commutes with, looking for one it
// cancels against. A reduced stack holds at most one move per symbol within
// each run of mutually commuting moves, so a complete cancellation cannot
// expose further cancellations and we can stop after one combination.
fn push_cancelled<M: Move>(reduced: &mut Vec<M>, mv: M) {
    for i in (0..reduced.len()).rev() {
        match reduced[i].clone().cancel(mv.clone()) {
            Cancellation::NoMove => {
                reduced.remove(i);
                return;
            }
            Cancellation::OneMove(combined) => {
                // Everything past position i commutes with the combined move
                // (same symbol as what we cancelled against), so it may be
                // carried to the back.
                reduced.remove(i);
                reduced.push(combined);
                return;
            }
            Cancellation::TwoMove(..) => {
                if !mv.commutes_with(&reduced[i]) {
                    break;
                }
            }
        }
    }
    reduced.push(mv);
}
