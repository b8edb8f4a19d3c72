use clap::Parser;

use rollback_guard::cli::{Cli, Commands};
use rollback_guard::commands::{run_check, run_config, run_init};
use rollback_guard::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
