use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;

use qst::datagen::DataGen;

#[derive(Parser)]
#[command(name = "qst-gen", version, about = "Generate gzip compressed benchmark inputs")]
struct Cli {
    /// Directory to create the pattern directories in
    #[arg(short, long, value_name = "DIR", default_value = "./data")]
    output: PathBuf,

    /// Smallest number of elements
    #[arg(long, value_name = "N", default_value_t = 100_000)]
    min: usize,

    /// Largest number of elements
    #[arg(long, value_name = "N", default_value_t = 1_000_000)]
    max: usize,

    /// Step between sizes
    #[arg(long, value_name = "N", default_value_t = 100_000)]
    increment: usize,

    /// Overwrite an existing output directory
    #[arg(short, long)]
    force: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("QST_LOG", "warn")).init();

    let cli = Cli::parse();
    let datagen = DataGen {
        output: cli.output,
        min: cli.min,
        max: cli.max,
        increment: cli.increment,
        force: cli.force,
    };

    eprintln!("Minimum: {}", datagen.min);
    eprintln!("Maximum: {}", datagen.max);
    eprintln!("Increment: {}", datagen.increment);

    if let Err(e) = datagen.generate() {
        eprintln!("qst-gen: {e}");
        process::exit(1);
    }
}
