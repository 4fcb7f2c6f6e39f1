mod cli;
mod shared;
mod stitch_cmd;
mod validate_cmd;

use clap::Parser;
use cli::Cli;
use linestitch_core::StitchOptions;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Stitch {
            ref file,
            max_x_dist,
            min_y_overlap_ratio,
            any_overlap,
            ref format,
            members,
        } => {
            let options = StitchOptions {
                max_x_dist,
                min_y_overlap_ratio: (!any_overlap).then_some(min_y_overlap_ratio),
            };
            stitch_cmd::run(file, &options, format, members)
        }
        cli::Commands::Validate {
            ref file,
            ref format,
        } => validate_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

/// Send logs to stderr. `RUST_LOG` wins over the `-v` count when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
