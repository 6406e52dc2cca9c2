use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{solver::SolveError, sudoku::Sudoku};

/// Randomized greedy fill with bounded restarts.
///
/// Walks the boxes in row-major box order and fills each empty cell with
/// a digit drawn uniformly from the candidates still legal at that
/// moment. A cell with no candidate left scraps the attempt and starts
/// over from the givens. The method cannot prove a puzzle unsolvable, so
/// spending the whole restart budget is reported as inconclusive rather
/// than as proof.
pub struct StochasticBacktracking {
    max_restarts: u32,
}

impl Default for StochasticBacktracking {
    fn default() -> Self {
        StochasticBacktracking {
            max_restarts: 50_000,
        }
    }
}

impl StochasticBacktracking {
    pub fn with_max_restarts(max_restarts: u32) -> Self {
        StochasticBacktracking { max_restarts }
    }

    pub fn solve<const N: usize, const B: usize>(
        &mut self,
        s: &mut Sudoku<N, B>,
    ) -> Result<(), SolveError> {
        s.reset();
        s.validate()?;

        let mut rng = SmallRng::from_os_rng();
        for _ in 0..self.max_restarts {
            if Self::try_fill(s, &mut rng) {
                return Ok(());
            }
            s.reset();
        }

        Err(SolveError::Inconclusive)
    }

    /// One greedy pass over the grid, box by box. Every placement is
    /// vetted against the oracle, so reaching the end means the grid is
    /// complete and consistent. Returns false at the first cell with no
    /// legal candidate left.
    fn try_fill<const N: usize, const B: usize>(s: &mut Sudoku<N, B>, rng: &mut SmallRng) -> bool {
        let mut cands: Vec<u8> = Vec::with_capacity(N);

        for t in 0..B * B {
            let (box_row, box_col) = (t / B * B, t % B * B);
            for r in box_row..box_row + B {
                for c in box_col..box_col + B {
                    if s.solution[r][c] != 0 {
                        continue;
                    }

                    cands.clear();
                    cands.extend((1..=N as u8).filter(|&d| s.is_valid(d, (r, c))));
                    if cands.is_empty() {
                        return false;
                    }

                    s.solution[r][c] = cands[rng.random_range(0..cands.len())];
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::Sudoku9;

    const SOLVED: [[u8; 9]; 9] = [
        [1, 2, 3, 4, 5, 6, 7, 8, 9],
        [4, 5, 6, 7, 8, 9, 1, 2, 3],
        [7, 8, 9, 1, 2, 3, 4, 5, 6],
        [2, 1, 4, 3, 6, 5, 8, 9, 7],
        [3, 6, 5, 8, 9, 7, 2, 1, 4],
        [8, 9, 7, 2, 1, 4, 3, 6, 5],
        [5, 3, 1, 6, 4, 2, 9, 7, 8],
        [6, 4, 2, 9, 7, 8, 5, 3, 1],
        [9, 7, 8, 5, 3, 1, 6, 4, 2],
    ];

    #[test]
    fn fills_the_single_missing_cell() {
        let mut init = SOLVED;
        init[7][3] = 0;
        let mut s = Sudoku9::new(init);

        StochasticBacktracking::default().solve(&mut s).unwrap();

        assert_eq!(*s.solution(), SOLVED);
    }

    #[test]
    fn solves_when_each_empty_cell_is_forced() {
        // Emptying one box row leaves a single candidate per cell, so the
        // first pass already lands on the solution.
        let mut init = SOLVED;
        init[0][0] = 0;
        init[0][1] = 0;
        init[0][2] = 0;
        let mut s = Sudoku9::new(init);

        StochasticBacktracking::default().solve(&mut s).unwrap();

        assert_eq!(*s.solution(), SOLVED);
    }

    #[test]
    fn complete_grid_passes_through_unchanged() {
        let mut s = Sudoku9::new(SOLVED);

        StochasticBacktracking::default().solve(&mut s).unwrap();

        assert_eq!(*s.solution(), SOLVED);
    }

    #[test]
    fn rejects_a_duplicated_given_before_searching() {
        let mut init = [[0u8; 9]; 9];
        init[5][0] = 7;
        init[5][8] = 7;
        let mut s = Sudoku9::new(init);

        assert_eq!(
            StochasticBacktracking::default().solve(&mut s),
            Err(SolveError::ConflictingGiven { row: 5, col: 0 })
        );
    }

    #[test]
    fn gives_up_on_a_dead_cell_as_inconclusive() {
        // Same dead cell the exhaustive search proves unsolvable; the
        // randomized fill can only report that its budget ran out.
        let mut init = [[0u8; 9]; 9];
        init[0] = [0, 2, 3, 4, 5, 6, 7, 8, 9];
        init[1][0] = 1;
        let mut s = Sudoku9::new(init);

        assert_eq!(
            StochasticBacktracking::with_max_restarts(16).solve(&mut s),
            Err(SolveError::Inconclusive)
        );
        assert_eq!(*s.solution(), init);
    }
}
