use thiserror::Error;

use crate::{dfs::DfsBacktracking, stochastic::StochasticBacktracking, sudoku::Sudoku};

/// Ways a solve attempt can end without a solution. Absence of a
/// solution is an expected outcome and stays separate from input that
/// was broken before the search began.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("cell ({row}, {col}) holds {value}, which is outside the digit range of this grid")]
    ValueOutOfRange { row: usize, col: usize, value: u8 },
    #[error("the given at ({row}, {col}) conflicts with another given in its row, column, or box")]
    ConflictingGiven { row: usize, col: usize },
    #[error("the puzzle has no solution")]
    Unsolvable,
    #[error("the search budget was exhausted before a solution was found")]
    Inconclusive,
}

pub enum Kind {
    Stoch,
    Dfs,
}

// Concrete strategies
enum SolverEnum {
    Stoch(StochasticBacktracking),
    Dfs(DfsBacktracking),
}

// Abstract strategy
impl SolverEnum {
    fn solve<const N: usize, const B: usize>(
        &mut self,
        s: &mut Sudoku<N, B>,
    ) -> Result<(), SolveError> {
        match self {
            SolverEnum::Stoch(a) => a.solve(s),
            SolverEnum::Dfs(a) => a.solve(s),
        }
    }
}

// Strategy context
pub struct SolverEngine {
    alg: SolverEnum,
}

impl SolverEngine {
    pub fn new(kind: Kind) -> Self {
        Self {
            alg: match kind {
                Kind::Stoch => SolverEnum::Stoch(StochasticBacktracking::default()),
                Kind::Dfs => SolverEnum::Dfs(DfsBacktracking::default()),
            },
        }
    }

    pub fn solve<const N: usize, const B: usize>(
        &mut self,
        s: &mut Sudoku<N, B>,
    ) -> Result<(), SolveError> {
        self.alg.solve(s)
    }
}
