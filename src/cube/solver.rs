//! A naive breadth-first solver over the face-turn move graph.
//!
//! The search branches twelve ways per node and keeps no global visited set,
//! so different branches happily re-explore the same state; only cycles within
//! a single branch's own path are eliminated. The practical reach is states
//! three or four quarter turns from solved. Beyond that the frontier grows
//! without bound and the search consumes memory until it fails. A caller
//! wanting bounded execution must impose an external wall-clock or memory
//! limit, as the search itself has no timeout, cancellation or error channel.

use std::collections::VecDeque;

use super::moves::Turn;
use super::FaceletCube;
use crate::moves::MoveSequence;
use crate::mv;

/// The twelve quarter turns the solver searches over, in expansion order.
///
/// The first solution discovered is returned, so among equal-length answers
/// this enumeration order breaks the tie.
pub const SEARCH_MOVES: [Turn; 12] = [
    mv!(U, 1),
    mv!(U, 3),
    mv!(D, 1),
    mv!(D, 3),
    mv!(L, 1),
    mv!(L, 3),
    mv!(R, 1),
    mv!(R, 3),
    mv!(F, 1),
    mv!(F, 3),
    mv!(B, 1),
    mv!(B, 3),
];

/// A candidate solution: the states visited from the start, paired move for
/// move with the turns that produced them.
#[derive(Debug, Clone)]
struct SearchNode {
    path: Vec<FaceletCube>,
    moves: Vec<Turn>,
}

impl SearchNode {
    fn start(cube: FaceletCube) -> Self {
        SearchNode {
            path: vec![cube],
            moves: Vec::new(),
        }
    }

    /// The state this node's move sequence reaches. The path is never empty.
    fn current(&self) -> FaceletCube {
        self.path[self.path.len() - 1]
    }

    fn contains(&self, cube: &FaceletCube) -> bool {
        self.path.iter().any(|c| c == cube)
    }

    fn extend(&self, cube: FaceletCube, mv: Turn) -> Self {
        let mut next = self.clone();
        next.path.push(cube);
        next.moves.push(mv);
        next
    }
}

/// (Attempt to) solve the given cube, returning the shortest sequence of
/// quarter turns from it to a solved state.
///
/// Strict first-in-first-out exploration makes the search breadth-first, so
/// the first solution found uses the fewest turns. Does not return for start
/// states out of the solver's practical reach; see the module docs.
pub fn solve(cube: FaceletCube) -> MoveSequence<Turn> {
    let mut frontier = VecDeque::new();
    frontier.push_back(SearchNode::start(cube));

    loop {
        let Some(node) = frontier.pop_front() else {
            // For well-formed states expansion always enqueues survivors of
            // the twelve candidates. Degenerate states the length-only
            // constructor lets through can cycle every candidate back into
            // the path and drain the frontier.
            unreachable!("search frontier drained without finding a solution")
        };
        let current = node.current();

        for mv in SEARCH_MOVES {
            let next = current.make_move(mv);
            if node.contains(&next) {
                continue;
            }
            if next.is_solved() {
                let mut moves = node.moves;
                moves.push(mv);
                return MoveSequence(moves);
            }
            frontier.push_back(node.extend(next, mv));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    fn scramble(mvs: &[Turn]) -> FaceletCube {
        mvs.iter()
            .fold(FaceletCube::SOLVED, |c, &m| c.make_move(m))
    }

    #[test]
    fn search_moves_are_face_quarter_turns() {
        // The solver explores face turns only: no slices, no wide turns, no
        // rotations, no half turns.
        use crate::cube::moves::TurnType;
        for mv in SEARCH_MOVES {
            assert!(mv.ty.is_generator());
            assert!(!matches!(mv.ty, TurnType::M | TurnType::E | TurnType::S));
            assert!(mv.count == 1 || mv.count == 3);
        }
    }

    #[test]
    fn solves_lightly_scrambled_cubes() {
        let cases: &[(&[Turn], &[Turn])] = &[
            (&[mv!(F, 1)], &[mv!(F, 3)]),
            (&[mv!(F, 3)], &[mv!(F, 1)]),
            (&[mv!(U, 1)], &[mv!(U, 3)]),
            (&[mv!(F, 1), mv!(U, 1)], &[mv!(U, 3), mv!(F, 3)]),
            (&[mv!(U, 1), mv!(U, 1)], &[mv!(U, 1), mv!(U, 1)]),
            (
                &[mv!(F, 1), mv!(U, 1), mv!(R, 1)],
                &[mv!(R, 3), mv!(U, 3), mv!(F, 3)],
            ),
        ];

        for (scramble_moves, want) in cases {
            let solution = solve(scramble(scramble_moves));
            assert_eq!(
                solution.0, *want,
                "solving after scramble {scramble_moves:?}"
            );
        }
    }

    #[test]
    fn solution_actually_solves() {
        let cube = scramble(&[mv!(R, 1), mv!(F, 3), mv!(D, 1)]);
        let solution = solve(cube);
        assert_eq!(solution.len(), 3);
        assert!(cube.make_moves(solution).is_solved());
    }

    #[test]
    fn shortest_solution_wins() {
        // Two turns of the same face: a half-turn scramble has distance 2,
        // never 1, and breadth-first order guarantees length 2 comes back.
        let cube = scramble(&[mv!(R, 1), mv!(R, 1)]);
        let solution = solve(cube);
        assert_eq!(solution.len(), 2);
        assert!(cube.make_moves(solution).is_solved());
    }

    #[test]
    fn solves_label_agnostic_targets() {
        // A rotated-then-turned cube solves to the rotated coloring, not the
        // canonical one.
        let rotated = FaceletCube::SOLVED.make_move(mv!(Y, 1));
        let cube = rotated.make_move(mv!(L, 1));
        let solution = solve(cube);
        assert_eq!(solution.0, vec![mv!(L, 3)]);
        assert!(cube.make_moves(solution).is_solved());
    }

    #[test]
    fn expansion_order_breaks_ties() {
        // A U-turned cube also solves via three more U turns, but breadth
        // first means the single U' wins, and it is found on the first pass
        // through SEARCH_MOVES.
        let solution = solve(FaceletCube::SOLVED.make_move(mv!(U, 1)));
        assert_eq!(solution.0, vec![mv!(U, 1).inverse()]);
    }
}
