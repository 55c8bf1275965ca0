use pokedex::app::App;
use pokedex::cli::{parse_args, run_cli_command, run_command, CliCommand, USAGE};
use pokedex::config::AppConfig;
use pokedex::logging;

use color_eyre::Result;
use std::io;

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    // Version and help need neither logging nor a runtime
    if let Some(text) = run_cli_command(&command) {
        println!("{}", text);
        return Ok(());
    }

    color_eyre::install()?;
    logging::init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(command))
}

async fn run(command: CliCommand) -> Result<()> {
    let app = App::from_config(AppConfig::from_env()).await?;
    let mut stdout = io::stdout();
    let result = run_command(&app, command, &mut stdout).await;
    // Let the last favorites write land before the process exits
    app.favorites.flush().await;
    result
}
