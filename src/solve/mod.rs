pub mod astar;

pub use astar::{misplaced_facelets, SearchNode, SolveError, Solver};
