//! markov-gen - create similar texts using Markov processes
//!
//! Reads a text from a file or stdin, builds an order-n word chain from it and
//! either prints the transition table or a randomly generated text.
//!
//! Examples:
//!   markov-gen -n 2 -l 50 book.txt
//!   markov-gen -i "It was" -c book.txt
//!   cat book.txt | markov-gen -s --format json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use markov_gen_core::io::{read_source, tokenize, wrap};
use markov_gen_core::model::generation_input::DEFAULT_LENGTH;
use markov_gen_core::{GenerationInput, Generator, StartSeed, TransitionTable};

/// Create similar texts using Markov processes.
#[derive(Parser, Debug)]
#[command(name = "markov-gen")]
#[command(version, about, long_about = None)]
struct Cli {
	/// Input file (stdin if omitted)
	#[arg(value_name = "FILE")]
	file: Option<PathBuf>,

	/// Initial words of the generated text
	#[arg(short, long, value_name = "WORDS")]
	initial: Option<String>,

	/// Length of the produced text in words
	#[arg(short, long, value_name = "NUMBER", default_value_t = DEFAULT_LENGTH,
		value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
	length: usize,

	/// Order of the Markov chain
	#[arg(short = 'n', long, value_name = "NUMBER", default_value_t = 2,
		value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
	order: usize,

	/// Show the transition table and exit
	#[arg(short, long)]
	show_table: bool,

	/// Read the source as a cyclic sequence
	#[arg(short, long)]
	cyclic: bool,

	/// Transition table format
	#[arg(long, value_enum, default_value_t = TableFormat::Text)]
	format: TableFormat,

	/// Seed of the random source, for reproducible output
	#[arg(long, value_name = "U64")]
	seed: Option<u64>,

	/// Wrap width of the generated text (0 disables wrapping)
	#[arg(short, long, value_name = "COLUMNS", default_value_t = 79)]
	width: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TableFormat {
	/// One line per window with its raw successors
	Text,
	/// One line per window with normalized successor probabilities
	Probabilities,
	/// Pretty-printed JSON
	Json,
}

/// Renders the transition table in the requested format.
fn render_table(table: &TransitionTable, format: TableFormat) -> Result<String> {
	Ok(match format {
		TableFormat::Text => table.to_string(),
		TableFormat::Probabilities => table
			.iter()
			.map(|state| {
				let frequencies = state
					.frequencies()
					.into_iter()
					.map(|(token, probability)| format!("{token}: {probability:.3}"))
					.collect::<Vec<_>>()
					.join(", ");
				format!("{} => {{{}}}\n", state.key(), frequencies)
			})
			.collect(),
		TableFormat::Json => {
			let mut json = serde_json::to_string_pretty(table)?;
			json.push('\n');
			json
		}
	})
}

/// Builds the chain from `source` and produces the text to print.
fn run(cli: &Cli, source: &str) -> Result<String> {
	let tokens = tokenize(source);
	info!("read {} token(s)", tokens.len());

	let generator = Generator::new(&tokens, cli.order, cli.cyclic)?;

	if cli.show_table {
		return render_table(generator.table(), cli.format);
	}

	let start_seed = cli.initial.as_deref().map(StartSeed::from_words).unwrap_or_default();
	let input = GenerationInput::new(cli.length, start_seed)?;

	let mut rng = match cli.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	let output = generator.predict(&input, &mut rng);
	if output.len() < input.length() {
		info!("reached a dead end after {} of {} word(s)", output.len(), input.length());
	}

	let mut text = wrap(&output.join(" "), cli.width).join("\n");
	text.push('\n');
	Ok(text)
}

fn main() -> Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	let source = match &cli.file {
		Some(path) => read_source(Some(path)).with_context(|| format!("failed to read {}", path.display()))?,
		None => read_source(None::<PathBuf>).context("failed to read stdin")?,
	};

	print!("{}", run(&cli, &source)?);
	Ok(())
}
