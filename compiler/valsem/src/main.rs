//! `valsem` command-line entry point.

use std::process::ExitCode;

use valsem::commands::{render_reports, run_bits, run_probes};
use valsem::{init_tracing, pool_config_from_env, CliError, ProbeConfig};
use valsem_intern::InternPool;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, CliError::Usage(_)) {
                eprintln!();
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "bits" => {
            let Some(number) = args.get(2) else {
                return Err(CliError::Usage("bits requires a number".to_string()));
            };
            println!("{}", run_bits(number)?);
            Ok(())
        }
        "probes" => {
            let config = ProbeConfig::from_args(&args[2..])?;
            let pool = InternPool::with_config(pool_config_from_env()?);
            let reports = run_probes(&config, &pool)?;
            print!("{}", render_reports(&reports, config.verbose));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

fn print_usage() {
    println!("valsem: value identity and equality probes");
    println!();
    println!("Usage: valsem <command> [options]");
    println!();
    println!("Commands:");
    println!("  bits <number>                       Show double/single bit patterns of a number");
    println!("  probes [--filter=<name>] [-v]       Run the probe catalogue");
    println!("  help                                Show this help message");
    println!();
    println!("Environment:");
    println!("  VALSEM_INT_CACHE_HIGH   Upper bound of the small-integer cache (min 127)");
    println!("  RUST_LOG                Enable tracing output, e.g. RUST_LOG=valsem_alias=debug");
}
