use anyhow::Context;
use game_console::{load_map, Console, ConsoleConfig, CsvResultLog};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::load_or_default(ConsoleConfig::FILE_NAME)
        .with_context(|| format!("loading {}", ConsoleConfig::FILE_NAME))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let map = load_map(&config.map_path)?;
    let mut results = CsvResultLog::create(&config.result_path)
        .with_context(|| format!("creating {}", config.result_path.display()))?;

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    console.run(&map, &config.rules, &mut results)?;

    tracing::info!(results = %results.path().display(), "Game closed");
    Ok(())
}
