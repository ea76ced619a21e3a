use std::fmt;
use std::str::FromStr;

use const_for::const_for;

use crate::cube::turn::*;
use crate::cube::*;

/// The number of facelets of the whole cube
pub const CUBEDATA_LEN: usize = CUBE_AREA * NUM_SIDES;

/// The facelet state: one color label (a Side discriminant) per position.
type CubeData = [u8; CUBEDATA_LEN];

/// A facelet permutation.
/// Let t be the transformation, s the old state and n the new state:
/// n[i] = s[ t[i] ] holds true
type Transform = [u8; CUBEDATA_LEN];

/// A pocket cube representation, using a single facelet array.
///
/// The faces are stored in the order Up, Down, Back, Front, Left, Right,
/// each as a row-major 2x2 block. The byte array doubles as the canonical
/// state key during search.
#[derive(Clone, PartialEq, Eq, Hash, std::fmt::Debug)]
pub struct FaceletCube {
	pub data: CubeData,
}

impl Default for FaceletCube {
	/// Creates a *solved* pocket cube!
	fn default() -> Self {
		Self { data: SOLVED }
	}
}

/// Chain 2 transformations (t1 and t2) to one transformation.
/// It returns a new transformation, in which first t1 is applied, then t2.
pub const fn chain_transform(t1: Transform, t2: Transform) -> Transform {
	let mut out = [0; CUBEDATA_LEN];

	const_for!(i in 0..CUBEDATA_LEN => {
		out[i] = t1[ t2[i] as usize ];
	});

	out
}

const fn generate_solved() -> CubeData {
	let mut out = [0; CUBEDATA_LEN];

	const_for!(i in 0..CUBEDATA_LEN => {
		out[i] = (i / CUBE_AREA) as u8;
	});

	out
}

/// The goal layout: every face uniformly carries its own color.
const SOLVED: CubeData = generate_solved();

// ==== TRANSFORMATION TABLES =====

/*
 * The facelet positions, with each face stored row-major:
 *
 *            0  1
 *            2  3          (up)
 *  16 17 | 12 13 | 20 21 | 8  9
 *  18 19 | 14 15 | 22 23 | 10 11    (left | front | right | back)
 *            4  5
 *            6  7          (down)
 *
 * The following tables are carefully constructed.
 * A quarter turn cycles the four facelets of its own face and drags
 * two facelets of each of the four adjacent faces along.
 */

// Neutral Transformation: Does nothing
const T_IDENT: Transform = [
	0, 1, 2, 3, // up
	4, 5, 6, 7, // down
	8, 9, 10, 11, // back
	12, 13, 14, 15, // front
	16, 17, 18, 19, // left
	20, 21, 22, 23, // right
];

const T_UP: Transform = [
	2, 0, 3, 1, // up (totally changed)
	4, 5, 6, 7, // down (unchanged)
	16, 17, 10, 11, // back
	20, 21, 14, 15, // front
	12, 13, 18, 19, // left
	8, 9, 22, 23, // right
];

const T_FRONT: Transform = [
	0, 1, 19, 17, // up
	22, 20, 6, 7, // down
	8, 9, 10, 11, // back (unchanged)
	14, 12, 15, 13, // front (totally changed)
	16, 4, 18, 5, // left
	2, 21, 3, 23, // right
];

const T_RIGHT: Transform = [
	0, 13, 2, 15, // up
	4, 10, 6, 8, // down
	3, 9, 1, 11, // back
	12, 5, 14, 7, // front
	16, 17, 18, 19, // left (unchanged)
	22, 20, 23, 21, // right (totally changed)
];

const fn generate_transformation_table() -> [[Transform; NUM_TURNWISES]; NUM_TURNTYPES] {
	const BASE: [Transform; NUM_TURNTYPES] = [T_UP, T_FRONT, T_RIGHT];

	let mut out = [[T_IDENT; NUM_TURNWISES]; NUM_TURNTYPES];

	const_for!(i in 0..NUM_TURNTYPES => {
		out[i][0] = BASE[i];
		// A counterclockwise quarter is three clockwise quarters
		out[i][1] = chain_transform(chain_transform(BASE[i], BASE[i]), BASE[i]);
	});

	out
}

// The transformation tables, indexed by [TurnType][TurnWise]
const TRANSFORM: [[Transform; NUM_TURNWISES]; NUM_TURNTYPES] = generate_transformation_table();

// =========

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FromStrError {
	#[error("the given string does not have length {}", CUBEDATA_LEN)]
	Length,
	#[error("the character {0:?} at position {1} is not a side color (a-f)")]
	Color(char, usize),
}

impl FromStr for FaceletCube {
	type Err = FromStrError;

	/// Parse a cube from its 24-character color string.
	/// The facelet count is validated, the color multiset deliberately is not:
	/// this is a layout parser, not a scramble-legality check.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() != CUBEDATA_LEN {
			return Err(FromStrError::Length);
		}

		let mut data = [0; CUBEDATA_LEN];
		for (i, c) in s.bytes().enumerate() {
			if !(b'a'..b'a' + NUM_SIDES as u8).contains(&c) {
				return Err(FromStrError::Color(c as char, i));
			}
			data[i] = c - b'a';
		}

		Ok(Self { data })
	}
}

impl From<FaceletCube> for String {
	fn from(val: FaceletCube) -> Self {
		val.data.iter().map(|c| (c + b'a') as char).collect()
	}
}

// Return the index of (x/y) at the given side
const fn facelet_index(side: Side, x: usize, y: usize) -> usize {
	side as usize * CUBE_AREA + x + y * CUBE_DIM
}

// The four side faces of the middle band, in print order
const BAND: [Side; 4] = [Side::Left, Side::Front, Side::Right, Side::Back];

impl FaceletCube {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the state with the solved layout.
	pub fn reset(&mut self) {
		self.data = SOLVED;
	}

	pub fn is_solved(&self) -> bool {
		self.data == SOLVED
	}

	pub fn apply_transform(&mut self, trans: Transform) {
		let bef = self.data;
		for i in 0..CUBEDATA_LEN {
			self.data[i] = bef[trans[i] as usize];
		}
	}

	/// Apply a single turn via its transformation table.
	pub fn apply_turn(&mut self, turn: Turn) {
		let transform = TRANSFORM[turn.side as usize][turn.wise as usize];
		self.apply_transform(transform);
	}

	/// Apply the given sequence of turns, left to right.
	pub fn apply_turns(&mut self, turns: &[Turn]) {
		for turn in turns {
			self.apply_turn(*turn);
		}
	}

	/// Scramble with n uniformly random turns and return the applied sequence.
	///
	/// With a seed, the scramble is reproducible across runs: the sequence is
	/// drawn from an StdRng seeded via seed_from_u64, so a fixed (n, seed)
	/// always produces the same turns. Without a seed, thread_rng is used.
	pub fn shuffle(&mut self, n: usize, seed: Option<u64>) -> Vec<Turn> {
		let seq = match seed {
			Some(seed) => seeded_sequence(n, seed),
			None => random_sequence(n),
		};
		self.apply_turns(&seq);
		seq
	}

	fn ansii_color_at(&self, idx: usize) -> &'static str {
		// Constructors guarantee every label is a valid Side discriminant
		match Side::from_repr(self.data[idx]) {
			Some(side) => get_ansii_color(side),
			None => "\x1b[00m",
		}
	}

	/// Print the cube in the *standard output* with ANSI-colors
	pub fn print(&self) {
		// Generate a space depending on the size of CUBE_DIM
		let space: String = " ".repeat(2 * CUBE_DIM + 1);

		// Print Up-side
		for y in 0..CUBE_DIM {
			print!("{}", space);
			for x in 0..CUBE_DIM {
				print!("{}▀ ", self.ansii_color_at(facelet_index(Side::Up, x, y)));
			}
			println!();
		}

		// Print Left, Front, Right, Back
		for y in 0..CUBE_DIM {
			for side in BAND {
				for x in 0..CUBE_DIM {
					print!("{}▄ ", self.ansii_color_at(facelet_index(side, x, y)));
				}
				print!(" ");
			}
			println!();
		}
		println!();

		// Print Down-side
		for y in 0..CUBE_DIM {
			print!("{}", space);
			for x in 0..CUBE_DIM {
				print!("{}▀ ", self.ansii_color_at(facelet_index(Side::Down, x, y)));
			}
			println!();
		}
		// Reset ansii color
		println!("\x1b[00m");
	}
}

impl fmt::Display for FaceletCube {
	/// The plain six-line net: two Up rows, two middle-band rows and two
	/// Down rows, one color letter per facelet.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let letter = |idx: usize| (self.data[idx] + b'a') as char;
		let space = " ".repeat(2 * CUBE_DIM + 1);

		for y in 0..CUBE_DIM {
			write!(f, "{}", space)?;
			for x in 0..CUBE_DIM {
				write!(f, "{} ", letter(facelet_index(Side::Up, x, y)))?;
			}
			writeln!(f)?;
		}

		for y in 0..CUBE_DIM {
			for side in BAND {
				for x in 0..CUBE_DIM {
					write!(f, "{} ", letter(facelet_index(side, x, y)))?;
				}
				write!(f, " ")?;
			}
			writeln!(f)?;
		}

		for y in 0..CUBE_DIM {
			write!(f, "{}", space)?;
			for x in 0..CUBE_DIM {
				write!(f, "{} ", letter(facelet_index(Side::Down, x, y)))?;
			}
			writeln!(f)?;
		}

		Ok(())
	}
}

impl From<CubeData> for FaceletCube {
	fn from(item: CubeData) -> Self {
		Self { data: item }
	}
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;
	use strum::IntoEnumIterator;

	fn all_turns() -> Vec<Turn> {
		TurnType::iter()
			.flat_map(|side| TurnWise::iter().map(move |wise| Turn { side, wise }))
			.collect()
	}

	/// Check whether given transformation is a permutation
	fn check_permutation(perm: Transform) -> bool {
		let mut has_num = [false; CUBEDATA_LEN];

		for i in 0..CUBEDATA_LEN {
			let t = perm[i] as usize;
			if has_num[t] {
				return false;
			}
			has_num[t] = true;
		}

		true
	}

	#[test]
	/// Every transformation table must be a permutation of the 24 positions
	fn permutation_test() {
		for i in 0..NUM_TURNTYPES {
			for j in 0..NUM_TURNWISES {
				assert!(check_permutation(TRANSFORM[i][j]));
			}
		}
	}

	#[test]
	/// A turn followed by its inverse restores any state
	fn turn_then_inverse_is_identity() {
		let mut cube = FaceletCube::default();
		// Little scramble
		cube.apply_turns(&seeded_sequence(20, 99));

		for turn in all_turns() {
			let bef = cube.clone();
			cube.apply_turn(turn);
			cube.apply_turn(turn.inverse());
			assert_eq!(cube, bef);
		}
	}

	#[test]
	/// Four quarter turns of the same side restore any state
	fn quarter_turn_has_order_four() {
		let mut cube = FaceletCube::default();
		cube.apply_turns(&seeded_sequence(20, 100));

		for turn in all_turns() {
			let bef = cube.clone();
			for _ in 0..4 {
				cube.apply_turn(turn);
			}
			assert_eq!(cube, bef);
		}
	}

	#[test]
	/// Clockwise and counterclockwise of the same side are distinct turns
	fn wises_are_distinct() {
		for side in TurnType::iter() {
			let mut cw = FaceletCube::default();
			let mut ccw = FaceletCube::default();
			cw.apply_turn(Turn { side, wise: TurnWise::Clockwise });
			ccw.apply_turn(Turn { side, wise: TurnWise::CounterClockwise });
			assert_ne!(cw, ccw);
		}
	}

	#[test]
	/// Turns permute facelets, so every color keeps exactly four occurrences
	fn color_multiset_is_invariant() {
		let mut cube = FaceletCube::default();
		cube.apply_turns(&seeded_sequence(50, 4711));

		let mut count = [0usize; NUM_SIDES];
		for c in cube.data {
			count[c as usize] += 1;
		}
		assert_eq!(count, [CUBE_AREA; NUM_SIDES]);
	}

	#[test]
	/// Shuffling zero times leaves the cube unchanged
	fn shuffle_zero_is_noop() {
		let mut cube = FaceletCube::default();
		let seq = cube.shuffle(0, Some(1));
		assert!(seq.is_empty());
		assert!(cube.is_solved());
	}

	#[test]
	/// Two cubes shuffled with the same seed end up in the same state
	fn shuffle_is_deterministic_per_seed() {
		let mut a = FaceletCube::default();
		let mut b = FaceletCube::default();

		let seq_a = a.shuffle(25, Some(42));
		let seq_b = b.shuffle(25, Some(42));

		assert_eq!(seq_a, seq_b);
		assert_eq!(a, b);
	}

	#[test]
	/// Reset brings any scramble back to the solved layout
	fn reset_restores_solved_layout() {
		let mut cube = FaceletCube::default();
		cube.shuffle(30, Some(3));
		assert!(!cube.is_solved());

		cube.reset();
		assert!(cube.is_solved());
	}

	#[test]
	/// Check the conversion between FaceletCube and Strings
	fn facelet_string_conversion() {
		let mut cube = FaceletCube::new();

		for turn in seeded_sequence(40, 8) {
			cube.apply_turn(turn);

			let s: String = cube.clone().into();
			match FaceletCube::from_str(&s) {
				Ok(c) => assert_eq!(c, cube),
				Err(e) => panic!("FaceletCube conversion failed: {}", e),
			}
		}
	}

	#[test]
	/// Bad cube strings are rejected with the right error
	fn facelet_string_errors() {
		assert_eq!(FaceletCube::from_str("abc"), Err(FromStrError::Length));

		let mut s: String = FaceletCube::new().into();
		s.replace_range(5..6, "z");
		assert_eq!(FaceletCube::from_str(&s), Err(FromStrError::Color('z', 5)));
	}

	#[test]
	/// The plain net rendering has the fixed six-line shape
	fn display_is_a_six_line_net() {
		let cube = FaceletCube::default();
		let net = cube.to_string();
		let lines: Vec<&str> = net.lines().collect();

		assert_eq!(lines.len(), 6);
		// Cap faces are uniform on the solved cube
		assert_eq!(lines[0].trim(), "a a");
		assert_eq!(lines[5].trim(), "b b");
		// The band row shows left, front, right and back in order
		assert_eq!(lines[2].trim(), "e e  d d  f f  c c");
	}
}
