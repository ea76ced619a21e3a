use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use pocketcube::prelude::*;

/// 2x2 Pocket Cube simulator and solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Run the commands from this file, one per line
	command_file: Option<PathBuf>,

	/// Use a sequence to apply on the solved cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a string (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Scramble the cube with this many random turns
	#[arg(long, default_value_t = 0)]
	shuffle: usize,

	/// Seed for --shuffle, for reproducible scrambles
	#[arg(long)]
	seed: Option<u64>,

	/// Solve the cube (the output is a sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Abort the search after expanding this many nodes
	#[arg(long)]
	limit: Option<usize>,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(File::create(&args.output)?)
	};

	let mut cube = FaceletCube::default();

	// Parses a cube out of the cube string
	if !args.set.is_empty() {
		cube = FaceletCube::from_str(&args.set)?;
	}

	// Applies turns from args
	cube.apply_turns(&parse_turns(&args.sequence)?);

	if args.shuffle > 0 {
		cube.shuffle(args.shuffle, args.seed);
	}

	// Run the command file, reporting per-line errors without aborting
	if let Some(path) = &args.command_file {
		let file = BufReader::new(File::open(path)?);
		let mut session = Session::with_cube(cube, out.as_mut());
		session.run_script(file)?;
		cube = session.into_cube();

		// The script output is the result; only fall through on request
		if !args.solve && !args.char_print {
			return Ok(());
		}
	}

	// Solve the cube and only output the sequence
	if args.solve {
		let solver = match args.limit {
			Some(limit) => Solver::with_node_limit(limit),
			None => Solver::new(),
		};

		let turns = solver.solve(&cube)?;
		let len = turns.len();
		for turn in &turns {
			write!(out.as_mut(), "{} ", turn)?;
		}
		if args.length {
			writeln!(out.as_mut(), "(len={})", len)?;
		} else {
			writeln!(out.as_mut())?;
		}
		return Ok(());
	}

	// Print the resulting cube (either as a string or with colors)
	if args.char_print {
		let s: String = cube.into();
		writeln!(out.as_mut(), "{}", s)?;
	} else {
		cube.print();
	}

	Ok(())
}
