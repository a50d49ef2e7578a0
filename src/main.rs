use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use app_id_filter::{diagnostics::Diagnostics, filter, InputSource, RegistrationInput};

/// Extracts the appId from an application registration JSON document.
///
/// The bare identifier goes to stdout; diagnostics go to stderr.
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Path to a json file containing the registration; read from stdin when omitted
    #[clap(short, long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    let input = RegistrationInput::read(&InputSource::from(opts.input))?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    filter::run(
        &input,
        &Diagnostics::for_stderr(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    Ok(())
}
