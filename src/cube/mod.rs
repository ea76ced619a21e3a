pub mod facelet;
pub mod turn;

use strum::EnumCount;

/// The edge dimension of the pocket cube
pub const CUBE_DIM: usize = 2;

/// The number of facelets per side
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of sides of a cube
pub const NUM_SIDES: usize = Side::COUNT;

/// The sides of the cube. The discriminant doubles as the color label
/// stored in the facelet state.
#[derive(Eq, PartialEq, Copy, Clone, Debug, strum::EnumCount, strum::EnumIter, strum::FromRepr)]
#[repr(u8)]
pub enum Side {
	Up,
	Down,
	Back,
	Front,
	Left,
	Right,
}

/// Returns the ANSI-colorcode for the given side.
pub fn get_ansii_color(side: Side) -> &'static str {
	match side {
		Side::Up => "\x1b[00m",    // White
		Side::Down => "\x1b[93m",  // Yellow
		Side::Back => "\x1b[32m",  // Green
		Side::Front => "\x1b[34m", // Blue
		Side::Left => "\x1b[31m",  // Red
		Side::Right => "\x1b[33m", // Orange
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	/// The color labels must round-trip through their numeric representation
	fn side_repr_roundtrip() {
		for side in Side::iter() {
			assert_eq!(Side::from_repr(side as u8), Some(side));
		}
	}
}
