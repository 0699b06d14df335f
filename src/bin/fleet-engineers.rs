use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use fleet::solver::run;

#[derive(Parser)]
#[command(
    name = "fleet-engineers",
    about = "Compute number of engineers to maintain scooters park.",
    version
)]
struct Cli {
    /// Specify the input file
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run::init_tracing_and_env()?;

    // colored only looks at stdout; diagnostics go to stderr.
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run::run(&cli.file, &mut stdout) {
        tracing::debug!("Run failed: {:?}", err);
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }

    Ok(())
}
