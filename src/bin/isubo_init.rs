use clap::Parser;
use isubo_init::cli::{run, Cli};
use isubo_init::shared::hinter;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        hinter::error(&err.to_string());
        std::process::exit(1);
    }
}
