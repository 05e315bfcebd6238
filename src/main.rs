use clap::Parser;

use pep8_guard::cli::{Cli, Commands};
use pep8_guard::commands::{run_check, run_list};
use pep8_guard::logging::init_logging;
use pep8_guard::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors must not collide with "checker not found" (2).
            let exit_code = if err.use_stderr() {
                EXIT_RUNTIME_ERROR
            } else {
                EXIT_SUCCESS
            };
            let _ = err.print();
            std::process::exit(exit_code);
        }
    };

    init_logging(cli.verbose, cli.color);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::List(args) => run_list(args, &cli),
    };

    std::process::exit(exit_code);
}
