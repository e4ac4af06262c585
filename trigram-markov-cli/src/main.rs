use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use trigram_markov_core::io::write_output;
use trigram_markov_core::model::random::{seeded, wall_clock_seed};
use trigram_markov_core::trigram::parse_file_to_normalised_trigrams;
use trigram_markov_core::Model;

/// Generates pseudo-random text learnt from an input corpus.
#[derive(Parser, Debug)]
#[command(name = "trigram-markov")]
#[command(version)]
struct Args {
	/// Desired length in words of the output
	#[arg(short, long, default_value_t = 100)]
	num_words: usize,

	/// Text file the model is built from
	#[arg(short, long, default_value = "text/input.txt")]
	input: PathBuf,

	/// File in which to persist the output
	#[arg(short, long, default_value = "out.txt")]
	output: PathBuf,

	/// Random seed, defaults to the current time
	#[arg(short, long)]
	seed: Option<u64>,

	/// Also print the generated text
	#[arg(long)]
	stdout: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
	// Log the seed so a run can be replayed with --seed
	let seed = args.seed.unwrap_or_else(wall_clock_seed);
	info!("Random seed: {}", seed);

	let trigrams = parse_file_to_normalised_trigrams(&args.input)?;

	let mut model = Model::new(seeded(seed));
	model.add_all(&trigrams);
	info!("Model built from {} trigrams ({} prefixes)", trigrams.len(), model.len());

	let result = model.generate(args.num_words)?;

	let bytes_written = write_output(&args.output, &result)?;
	println!("{} bytes written to output file: {}", bytes_written, args.output.display());

	if args.stdout {
		println!("{}", result);
	}

	Ok(())
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	if let Err(e) = run(&args) {
		error!("{}", e);
		std::process::exit(1);
	}
}
