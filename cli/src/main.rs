use clap::Parser;
use infrastructure::config::Config;
use presentation::cli::{Cli, CliApp};
use shared::types::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    shared::logging::init(cli.verbose);

    let config = Config::load(|key| cli.override_for(key))?;
    let mut app = CliApp::new(&config)?;
    app.run(&cli).await?;
    Ok(())
}
