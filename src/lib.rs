//! A 2x2 pocket cube simulator and solver.
//!
//! ```
//! use pocketcube::prelude::*;
//!
//! let mut cube = FaceletCube::new();
//! cube.apply_turns(&parse_turns("F U R'").unwrap());
//!
//! let solution = Solver::new().solve(&cube).unwrap();
//! cube.apply_turns(&solution);
//!
//! assert!(cube.is_solved());
//! ```
//!
//! The solver is an A* search over the six quarter turns, guided by the
//! misplaced-facelet count. That estimate can overshoot the true distance,
//! so solutions are short but not guaranteed minimal.

pub mod cube;
pub mod session;
pub mod solve;

pub mod prelude {
	pub use crate::cube::{facelet::*, turn::*, *};
	pub use crate::session::{CommandError, Session};
	pub use crate::solve::{misplaced_facelets, SolveError, Solver};
}
