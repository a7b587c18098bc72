use anyhow::Context;
use clap::Parser;
use std::process;
use trade_atlas::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.get_command() else {
        show_help_and_commands();
        process::exit(0);
    };

    let name = command_name(&command);
    let result = commands::run(command).with_context(|| format!("{} command failed", name));

    match result {
        Ok(_stats) => {
            // Success - output has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn command_name(command: &trade_atlas::cli::args::Commands) -> &'static str {
    use trade_atlas::cli::args::Commands;
    match command {
        Commands::View(_) => "view",
        Commands::Explore(_) => "explore",
        Commands::Options(_) => "options",
        Commands::Describe(_) => "describe",
        Commands::Resolve(_) => "resolve",
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Trade Atlas - UN COMTRADE Partner Views");
    println!("=======================================");
    println!();
    println!("Load a COMTRADE trade-flow extract, resolve partner countries to ISO3");
    println!("codes and show per-partner trade values for a reporter, commodity and");
    println!("period or year.");
    println!();
    println!("USAGE:");
    println!("    trade-atlas <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    view        Show the per-partner view for one selection");
    println!("    explore     Pick selections interactively");
    println!("    options     List reporters, commodities, periods and years");
    println!("    describe    Show HS commodity descriptions");
    println!("    resolve     Resolve country names to ISO3 codes");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Monthly view from a local extract:");
    println!("    trade-atlas view -i dataset_filtered_80.csv -r Japan -k 283691 -p 2010-01");
    println!();
    println!("    # Annual view, log colors, exported to Parquet and a choropleth series:");
    println!("    trade-atlas view --source remote -r Japan -k 283691 -y 2010 \\");
    println!("                     --transform log10 -o japan.parquet --choropleth japan.json");
    println!();
    println!("    # Interactive explorer:");
    println!("    trade-atlas explore -i dataset_filtered_80.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    trade-atlas <COMMAND> --help");
}
