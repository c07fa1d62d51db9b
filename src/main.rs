mod cli;

use clap::Parser;
use env_logger::Env;
use opctl::host::System;
use opctl::session::SessionManager;
use opctl::{Error, ErrorKind};

fn main() {
    let args = cli::Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let session = SessionManager::new(args.opts(), System);
    if let Err(err) = cli::run(&args, &session) {
        eprintln!("Error: {:#}", err);
        if let Some(ErrorKind::UserInput | ErrorKind::Constraint) = err.downcast_ref::<Error>().map(Error::kind) {
            eprintln!("run `opctl --list-events` to see the events of this CPU");
        }
        std::process::exit(1);
    }
}
