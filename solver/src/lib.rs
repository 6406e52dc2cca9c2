//! Solvers for classic sudoku-style grids.
//!
//! [`sudoku::Sudoku`] holds the grid state; [`solver::SolverEngine`]
//! dispatches to one of the strategies in [`dfs`] and [`stochastic`].

pub mod dfs;
pub mod solver;
pub mod stochastic;
pub mod sudoku;
