use std::path::PathBuf;
use std::process;

use anyhow::bail;
use clap::Parser;
use env_logger::Env;

use qst::dual_pivot::Thresholds;
use qst::method::{Method, MethodType};
use qst::report::{self, PassThrough};
use qst::run::Benchmark;

#[derive(Parser)]
#[command(name = "qst", version, about = "Time sorting methods on integer data and emit CSV")]
struct Cli {
    /// Column to pass through to the CSV
    #[arg(short = 'c', long = "col", value_name = "COL")]
    cols: Vec<String>,

    /// Value to pass through to the CSV, one per --col
    #[arg(short = 'v', long = "val", value_name = "VAL")]
    vals: Vec<String>,

    /// Sorting method
    #[arg(short, long, value_enum, default_value_t = Method::DualPivotQuicksort)]
    method: Method,

    /// Append results to FILE instead of writing to stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of times to sort the same data
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    runs: usize,

    /// Print the supported methods of type TYPE and exit
    #[arg(long, value_name = "TYPE", value_enum)]
    show_methods: Option<MethodType>,

    /// Size below which partitions are insertion sorted
    #[arg(short, long, value_name = "N", default_value_t = 4)]
    threshold: usize,

    /// Size below which inner partitions are mixed insertion sorted [default: --threshold]
    #[arg(long, value_name = "N")]
    mixed_threshold: Option<usize>,

    /// Verify that every run left the data sorted
    #[arg(long)]
    check: bool,

    /// Input data file, one integer per line, optionally gzip compressed
    #[arg(required_unless_present = "show_methods")]
    input: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("QST_LOG", "warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("qst: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(method_type) = cli.show_methods {
        for method in method_type.methods() {
            println!("{method}");
        }
        return Ok(());
    }

    // Rejected before any data is loaded.
    let pass_through = PassThrough::new(cli.cols, cli.vals)?;

    let Some(input) = cli.input else {
        bail!("missing input file");
    };

    let benchmark = Benchmark {
        method: cli.method,
        thresholds: Thresholds::new(
            cli.threshold,
            cli.mixed_threshold.unwrap_or(cli.threshold),
        ),
        runs: cli.runs,
        check: cli.check,
    };

    let results = benchmark.run(&input)?;
    report::write_results(cli.output.as_deref(), &results, &pass_through)?;

    Ok(())
}
