use std::io;
use std::process::ExitCode;

use clap::Parser;
use lorem::{Args, Config, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = lorem::run(
        &args,
        || Config::from_lookup(|name| std::env::var(name).ok()),
        io::stdin().lock(),
        io::stdout().lock(),
    )
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
