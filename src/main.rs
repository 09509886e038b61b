use svctab::cli::commands::{CliArgs, Commands};
use svctab::cli::handlers::handle_generate;
use svctab::util::logging;
use svctab::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    logging::init_from_args(args.log_level.as_deref(), args.verbose, args.quiet);

    debug!("svctab v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Generate(generate_args) => handle_generate(generate_args, args.quiet),
    };

    std::process::exit(exit_code);
}
