use clap::{Parser, Subcommand};
use needletail::parse_fastx_file;
use readscreen_rs::{
    DEFAULT_ERROR_RATE, DEFAULT_SUBSET_SIZE, ScreenFilter,
    build_reference_filter, count_reads, sampling_stride, scan,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a reference Bloom filter from a FASTA/FASTQ file
    Build {
        /// Reference sequence file
        #[arg(short, long)]
        reference: PathBuf,

        /// Output filter path
        #[arg(short, long)]
        output: PathBuf,

        /// Target false positive rate (between 0 and 1)
        #[arg(short, long, default_value_t = DEFAULT_ERROR_RATE)]
        error_rate: f64,
    },

    /// Screen a query file against one or more reference filters
    Screen {
        /// Query sequence file
        #[arg(short, long)]
        query: PathBuf,

        /// Filter file(s) to screen against
        #[arg(short, long, required = true, num_args = 1..)]
        filter: Vec<PathBuf>,

        /// Number of reads to sample from the query file
        #[arg(short, long, default_value_t = DEFAULT_SUBSET_SIZE)]
        subset_size: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Build {
            reference,
            output,
            error_rate,
        } => {
            let summary = build_reference_filter(reference, *error_rate, output)?;
            println!("Built filter at {}", output.display());
            println!("  Capacity: {}", summary.capacity);
            println!("  False positive rate: {error_rate}");
            println!("  Bit vector size: {}", summary.bit_vector_size);
            println!("  Number of hash functions: {}", summary.num_hashes);
        }
        Commands::Screen {
            query,
            filter,
            subset_size,
        } => {
            let mut reader = parse_fastx_file(query)?;
            let total = count_reads(reader.as_mut())?;
            let stride = sampling_stride(total, *subset_size)?;
            info!(total, stride, query = %query.display(), "screening");

            // Any filter that fails to open aborts the whole scan; a result
            // missing an expected filter is worse than an explicit failure.
            let filters = filter
                .iter()
                .map(|path| ScreenFilter::open(path))
                .collect::<Result<Vec<_>, _>>()?;

            let mut reader = parse_fastx_file(query)?;
            let result = scan(reader.as_mut(), &filters, stride)?;

            let mut labels: Vec<&String> = result.keys().collect();
            labels.sort();
            for label in labels {
                let counts = &result[label];
                println!(
                    "{label}\tchecked={}\tobserved={}",
                    counts.checked, counts.observed
                );
            }
        }
    }

    Ok(())
}
