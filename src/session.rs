use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::cube::facelet::FaceletCube;
use crate::cube::turn::{Turn, UnknownMoveError};
use crate::solve::{SolveError, Solver};

/// Everything that can go wrong while running one command line.
/// None of these abort the surrounding command stream.
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
	#[error("the command {0:?} is not recognized")]
	UnknownCommand(String),
	#[error(transparent)]
	UnknownMove(#[from] UnknownMoveError),
	#[error("the command {0:?} is missing an argument")]
	MissingArgument(&'static str),
	#[error("invalid number: {0}")]
	BadNumber(#[from] std::num::ParseIntError),
	#[error(transparent)]
	Solve(#[from] SolveError),
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// A command-file session: one working cube plus the writer that command
/// output goes to. Commands mutate the cube through the session, there is
/// no global state.
pub struct Session<W: Write> {
	cube: FaceletCube,
	out: W,
}

impl<W: Write> Session<W> {
	pub fn new(out: W) -> Self {
		Self::with_cube(FaceletCube::new(), out)
	}

	pub fn with_cube(cube: FaceletCube, out: W) -> Self {
		Self { cube, out }
	}

	pub fn cube(&self) -> &FaceletCube {
		&self.cube
	}

	pub fn into_cube(self) -> FaceletCube {
		self.cube
	}

	/// Run a single command line.
	///
	/// Lines are whitespace-split and case-insensitive. Recognized verbs:
	/// `shuffle <n> [seed]`, `rotate <m1> <m2> ...`, `reset`, `printstate`
	/// and `solve [node-limit]`. Blank lines are no-ops.
	///
	/// `rotate` applies its tokens one at a time and stops at the first
	/// unknown move, leaving the earlier moves applied. There is no rollback.
	pub fn run_line(&mut self, line: &str) -> Result<(), CommandError> {
		let line = line.to_lowercase();
		let mut tokens = line.split_whitespace();

		let verb = match tokens.next() {
			Some(v) => v,
			None => return Ok(()),
		};

		match verb {
			"shuffle" => {
				let n: usize = tokens
					.next()
					.ok_or(CommandError::MissingArgument("shuffle"))?
					.parse()?;
				let seed = tokens.next().map(|t| t.parse::<u64>()).transpose()?;
				self.cube.shuffle(n, seed);
			}
			"rotate" => {
				for token in tokens {
					let turn = Turn::from_str(token)?;
					self.cube.apply_turn(turn);
				}
			}
			"reset" => self.cube.reset(),
			"printstate" => write!(self.out, "{}", self.cube)?,
			"solve" => {
				let solver = match tokens.next() {
					Some(limit) => Solver::with_node_limit(limit.parse()?),
					None => Solver::new(),
				};
				let solution = solver.solve(&self.cube)?;

				for turn in &solution {
					write!(self.out, "{} ", turn)?;
				}
				writeln!(self.out, "(len={})", solution.len())?;
			}
			_ => return Err(CommandError::UnknownCommand(verb.to_string())),
		}

		Ok(())
	}

	/// Run a whole command file, one command per line.
	///
	/// Command failures are reported on stderr and the next line is
	/// processed; only I/O errors on the input itself end the loop.
	pub fn run_script<R: BufRead>(&mut self, input: R) -> std::io::Result<()> {
		for line in input.lines() {
			let line = line?;
			if let Err(e) = self.run_line(&line) {
				eprintln!("{}", e);
			}
		}

		Ok(())
	}
}
