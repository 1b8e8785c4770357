use cell_amounts::cli::Args;
use cell_amounts::commands;
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = commands::setup_logging(args.verbose, args.quiet) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Cell Amounts - Locale-Aware Amount Parser");
    println!("=========================================");
    println!();
    println!("Recover numbers from table cells written as $32,234.00, 1.234,56 €,");
    println!("32 234.00 or MXN 720 749.86, then total, sort or export them.");
    println!();
    println!("USAGE:");
    println!("    cell-amounts <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse values and print the numbers they represent");
    println!("    total       Sum one column of a CSV table");
    println!("    purchase    Compute quantity × unit price");
    println!("    export      Re-export a CSV table with numeric columns normalized");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    cell-amounts parse '$32,234.00' '€1.234,56' '1,234'");
    println!("    cell-amounts total gastos.csv --column 3 --has-headers");
    println!("    cell-amounts purchase --quantity 4 --unit-price 6.25");
    println!("    cell-amounts export compras.csv --numeric-columns 2,3 --output-dir out");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cell-amounts <COMMAND> --help");
}
