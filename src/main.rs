// Order-to-Cash Event Log Generator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/order-to-cash-event-log
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/order-to-cash-event-log --case-count 20000 --seed 7 --output-format jsonl --verbose
// ```

use anyhow::Context;
use clap::Parser;
use order_to_cash_event_log::output::sink_for_config;
use order_to_cash_event_log::reference::ReferenceData;
use order_to_cash_event_log::simulation::{LogAssembler, LogStatistics, LoggingConfig};
use order_to_cash_event_log::types::config::CliArgs;
use order_to_cash_event_log::types::GeneratorConfig;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match GeneratorConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    if args.print_reference_data {
        match ReferenceData::built_in().to_json_pretty() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize reference data: {}", e);
                process::exit(1);
            }
        }
    }

    // Held until exit so file logs are flushed
    let _logging_guard =
        match LoggingConfig::from_flags(args.verbose, args.debug, args.log_dir.as_deref()).init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {}", e);
                process::exit(1);
            }
        };

    info!("Starting Order-to-Cash Event Log Generator");

    let dry_run = args.dry_run;

    // Load configuration from CLI arguments and optional config file
    let config = match GeneratorConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if dry_run {
        if let Err(e) = LogAssembler::from_config(config.clone()) {
            error!("Reference data validation failed: {}", e);
            process::exit(1);
        }
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no data will be generated.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run_generation(config) {
        error!("Generation failed: {:#}", e);
        process::exit(1);
    }

    info!("Order-to-Cash Event Log Generator completed successfully");
}

/// Generate the event log and write both datasets
fn run_generation(config: GeneratorConfig) -> anyhow::Result<()> {
    let assembler =
        LogAssembler::from_config(config).context("Failed to initialize the log assembler")?;

    let mut sink = sink_for_config(assembler.config()).context("Failed to open output")?;

    eprintln!("Generating {} cases...", assembler.config().case_count);
    let statistics = assembler.run(&mut sink).context("Event log generation failed")?;

    print_final_statistics(&statistics);
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &GeneratorConfig) {
    eprintln!("Order-to-Cash Event Log Generator");
    eprintln!("=================================");
    eprintln!("Synthetic process-mining data for the order-to-cash process");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &GeneratorConfig) {
    eprintln!("Configuration:");
    eprintln!("  Case Count: {}", config.case_count);
    eprintln!(
        "  Start Dates: {} to {} ({} days)",
        config.start_date,
        config.end_date,
        config.start_window_days() + 1
    );
    eprintln!("  Random Seed: {}", config.seed);
    eprintln!("  Base SLA: {} days", config.base_sla_days);
    match config.get_output_format() {
        Ok(format) => eprintln!("  Output Format: {}", format),
        Err(_) => eprintln!("  Output Format: {}", config.output_format),
    }
    eprintln!("  Event Log Output: {}", config.event_log_output);
    eprintln!("  Case Attributes Output: {}", config.case_attributes_output);
    match &config.reference_data {
        Some(path) => eprintln!("  Reference Data: {}", path),
        None => eprintln!("  Reference Data: built-in"),
    }
    eprintln!();
}

/// Print the final run summary
fn print_final_statistics(statistics: &LogStatistics) {
    eprintln!("{}", statistics.generate_summary_output());
}
