// trurl - traceable, reproducible data science helpers
// Main CLI entry point

use clap::Parser;
use std::process;
use trurl::cli::{Cli, CliDispatcher};
use trurl::utils::error::UserError;
use trurl::utils::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = CliDispatcher::execute(cli);

    if let Err(err) = result {
        tracing::debug!(error = ?err, "command failed");
        let user_error = UserError::from_trurl_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
