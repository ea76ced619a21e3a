use std::str::FromStr;

use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::{EnumCount, IntoEnumIterator};

/// Total number of turnable sides
pub const NUM_TURNTYPES: usize = TurnType::COUNT;
/// Total number of ways to adjust your turn
pub const NUM_TURNWISES: usize = TurnWise::COUNT;

/// The sides you can turn on a pocket cube.
///
/// Turning the three remaining sides only re-orients the whole cube in space,
/// so Up, Front and Right generate every reachable configuration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount, strum::FromRepr)]
#[repr(u8)]
pub enum TurnType {
	Up,
	Front,
	Right,
}

/// You can turn a side either Clockwise or CounterClockwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[repr(u8)]
pub enum TurnWise {
	Clockwise,
	CounterClockwise,
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
		}
	}
}

/// An entire turn
///
/// side: The side to turn
/// wise: See the definition of TurnWise
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub side: TurnType,
	pub wise: TurnWise,
}

impl Turn {
	/// Turn itself into the turn which negates itself.
	/// In terms of group theory, convert itself to the inverse of the current one.
	pub fn invert(&mut self) {
		self.wise = match self.wise {
			TurnWise::Clockwise => TurnWise::CounterClockwise,
			TurnWise::CounterClockwise => TurnWise::Clockwise,
		};
	}

	/// Return the inverse turn, leaving self untouched.
	pub fn inverse(&self) -> Self {
		let mut out = *self;
		out.invert();
		out
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self.side {
			TurnType::Up => write!(f, "U"),
			TurnType::Front => write!(f, "F"),
			TurnType::Right => write!(f, "R"),
		}?;
		self.wise.fmt(f)
	}
}

/// The given token is not one of the six recognized move symbols.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("the move {0:?} is not one of U, F, R, U', F', R'")]
pub struct UnknownMoveError(pub String);

impl FromStr for Turn {
	type Err = UnknownMoveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let token = s.trim().to_lowercase();

		let (side, wise) = match token.as_str() {
			"u" => (TurnType::Up, TurnWise::Clockwise),
			"f" => (TurnType::Front, TurnWise::Clockwise),
			"r" => (TurnType::Right, TurnWise::Clockwise),
			"u'" => (TurnType::Up, TurnWise::CounterClockwise),
			"f'" => (TurnType::Front, TurnWise::CounterClockwise),
			"r'" => (TurnType::Right, TurnWise::CounterClockwise),
			_ => return Err(UnknownMoveError(s.trim().to_string())),
		};

		Ok(Self { side, wise })
	}
}

/// Parse a whitespace-separated sequence of turns.
pub fn parse_turns<T: AsRef<str>>(string: T) -> Result<Vec<Turn>, UnknownMoveError> {
	string.as_ref().split_whitespace().map(Turn::from_str).collect()
}

fn sequence_with<R: Rng>(rng: &mut R, n: usize) -> Vec<Turn> {
	let moves: Vec<Turn> = TurnType::iter()
		.flat_map(|side| TurnWise::iter().map(move |wise| Turn { side, wise }))
		.collect();

	(0..n).map(|_| moves[rng.gen_range(0..moves.len())]).collect()
}

/// Generate n uniformly random turns from entropy.
pub fn random_sequence(n: usize) -> Vec<Turn> {
	sequence_with(&mut rand::thread_rng(), n)
}

/// Generate n uniformly random turns from a fixed seed.
/// The same (n, seed) always yields the same sequence.
pub fn seeded_sequence(n: usize, seed: u64) -> Vec<Turn> {
	sequence_with(&mut StdRng::seed_from_u64(seed), n)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	/// Parsing is case-insensitive and ignores surrounding whitespace
	fn parse_tolerates_case_and_whitespace() {
		let reference = Turn::from_str("f'").unwrap();
		for token in ["F'", " f' ", "\tF'\n"] {
			assert_eq!(Turn::from_str(token).unwrap(), reference);
		}
	}

	#[test]
	/// Every turn survives a Display -> FromStr round trip
	fn display_roundtrip() {
		for side in TurnType::iter() {
			for wise in TurnWise::iter() {
				let turn = Turn { side, wise };
				assert_eq!(Turn::from_str(&turn.to_string()).unwrap(), turn);
			}
		}
	}

	#[test]
	/// Unrecognized tokens are rejected with the offending token attached
	fn unknown_tokens_are_rejected() {
		for token in ["b", "x'", "ff", "u2", ""] {
			assert!(Turn::from_str(token).is_err());
		}
		assert_eq!(
			Turn::from_str(" q "),
			Err(UnknownMoveError("q".to_string()))
		);
	}

	#[test]
	/// Inverting twice gives back the original turn
	fn invert_is_an_involution() {
		for side in TurnType::iter() {
			for wise in TurnWise::iter() {
				let turn = Turn { side, wise };
				assert_ne!(turn.inverse(), turn);
				assert_eq!(turn.inverse().inverse(), turn);
			}
		}
	}

	#[test]
	/// A sequence parses completely or reports the first bad token
	fn parse_turns_sequences() {
		let seq = parse_turns("f u' R").unwrap();
		assert_eq!(seq.len(), 3);
		assert_eq!(seq[1], Turn::from_str("u'").unwrap());

		assert!(parse_turns("f z u").is_err());
		assert!(parse_turns("").unwrap().is_empty());
	}

	#[test]
	/// A fixed seed reproduces the exact same scramble sequence
	fn seeded_sequences_are_deterministic() {
		assert_eq!(seeded_sequence(30, 1234), seeded_sequence(30, 1234));
		assert!(seeded_sequence(0, 7).is_empty());
	}
}
