use gt4500::cli::args;
use gt4500::io::TerminalIO;
use gt4500::models::errors::ConsoleResult;
use gt4500::services::console::Console;
use gt4500::ShipConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ConsoleResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = args::parse();
    let config = args.apply(ShipConfig::from_env()?)?;

    let mut console = Console::new(&config);
    console.run(&mut TerminalIO, &mut TerminalIO)
}
