use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::{Hash, Hasher};

use strum::IntoEnumIterator;

use crate::cube::facelet::{FaceletCube, CUBEDATA_LEN};
use crate::cube::turn::*;

/// The canonical byte key of a cube configuration.
/// Two nodes with the same key are the same node for dedup purposes,
/// regardless of the path that reached them.
type StateKey = [u8; CUBEDATA_LEN];

/// Count the facelets whose color differs from the goal layout.
///
/// Zero iff the cube is solved, at most 24. Note that this is not an
/// admissible estimate for the quarter-turn metric: a single turn relocates
/// twelve facelets, so the count can exceed the true remaining distance and
/// the solver may return a non-minimal sequence. That behavior is kept
/// as-is instead of swapping in a stronger heuristic.
pub fn misplaced_facelets(cube: &FaceletCube) -> u32 {
	let goal = FaceletCube::default();

	cube.data
		.iter()
		.zip(goal.data.iter())
		.filter(|(a, b)| a != b)
		.count() as u32
}

/// One snapshot in the search tree.
///
/// The parent is an index into the solver's node arena, never a pointer,
/// so backtracking cannot outlive or alias the nodes it walks.
#[derive(Clone, Debug)]
pub struct SearchNode {
	pub cube: FaceletCube,
	pub parent: Option<usize>,
	pub action: Option<Turn>,
	pub cost: u32,
}

impl SearchNode {
	pub fn key(&self) -> StateKey {
		self.cube.data
	}
}

// Node identity is the configuration alone, not the path that produced it.
impl PartialEq for SearchNode {
	fn eq(&self, other: &Self) -> bool {
		self.cube == other.cube
	}
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.cube.data.hash(state);
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SolveError {
	#[error("search aborted after expanding the node budget of {0}")]
	LimitExceeded(usize),
	#[error("search frontier exhausted without reaching the solved state")]
	Exhausted,
}

/// A* driver over the six-turn move set.
#[derive(Default, Debug, Clone)]
pub struct Solver {
	max_nodes: Option<usize>,
}

impl Solver {
	/// A solver without a node budget.
	pub fn new() -> Self {
		Self { max_nodes: None }
	}

	/// A solver that gives up after expanding `limit` nodes.
	pub fn with_node_limit(limit: usize) -> Self {
		Self {
			max_nodes: Some(limit),
		}
	}

	/// Search for a sequence of turns from `initial` to the solved cube.
	///
	/// The frontier is ordered by path cost plus [`misplaced_facelets`],
	/// with a monotone insertion tick as tie-break, so the search is
	/// deterministic. Stale frontier entries are skipped lazily via the
	/// closed set instead of being re-prioritized in place.
	pub fn solve(&self, initial: &FaceletCube) -> Result<Vec<Turn>, SolveError> {
		let mut arena = vec![SearchNode {
			cube: initial.clone(),
			parent: None,
			action: None,
			cost: 0,
		}];

		// (estimated total cost, insertion tick, arena index)
		let mut frontier = BinaryHeap::new();
		let mut closed: HashSet<StateKey> = HashSet::new();
		let mut best_cost: HashMap<StateKey, u32> = HashMap::new();

		let mut tick: u64 = 0;
		let mut expanded: usize = 0;

		best_cost.insert(initial.data, 0);
		frontier.push(Reverse((misplaced_facelets(initial), tick, 0usize)));

		while let Some(Reverse((_, _, idx))) = frontier.pop() {
			// Lazy deletion: the frontier may hold several entries per
			// configuration, only the first popped one is expanded.
			if !closed.insert(arena[idx].key()) {
				continue;
			}

			expanded += 1;
			if let Some(limit) = self.max_nodes {
				if limit < expanded {
					return Err(SolveError::LimitExceeded(limit));
				}
			}

			if arena[idx].cube.is_solved() {
				return Ok(backtrack(&arena, idx));
			}

			let cost = arena[idx].cost + 1;
			for side in TurnType::iter() {
				for wise in TurnWise::iter() {
					let turn = Turn { side, wise };

					let mut cube = arena[idx].cube.clone();
					cube.apply_turn(turn);

					let improved = match best_cost.get(&cube.data) {
						Some(&seen) => cost < seen,
						None => true,
					};
					if !improved {
						continue;
					}
					best_cost.insert(cube.data, cost);

					let estimate = cost + misplaced_facelets(&cube);
					tick += 1;
					arena.push(SearchNode {
						cube,
						parent: Some(idx),
						action: Some(turn),
						cost,
					});
					frontier.push(Reverse((estimate, tick, arena.len() - 1)));
				}
			}
		}

		Err(SolveError::Exhausted)
	}
}

/// Walk the parent links from the goal node back to the root and return
/// the actions in root-to-goal order. The root contributes no action.
fn backtrack(arena: &[SearchNode], goal: usize) -> Vec<Turn> {
	let mut out = Vec::new();
	let mut idx = goal;

	while let Some(parent) = arena[idx].parent {
		if let Some(turn) = arena[idx].action {
			out.push(turn);
		}
		idx = parent;
	}

	out.reverse();
	out
}

/// Solve the cube with an unbounded node budget.
pub fn solve(cube: &FaceletCube) -> Result<Vec<Turn>, SolveError> {
	Solver::new().solve(cube)
}
