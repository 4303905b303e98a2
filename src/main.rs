use anyhow::Result;
use tracing::{error, info, Level};

use vigil::api::ReviewApi;
use vigil::config::Config;
use vigil::monitor::PollLoop;
use vigil::telegram::TelegramBot;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    // Configuration is checked before any client exists, so a missing token
    // terminates the process without a single network call.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("fatal: {e}");
            std::process::exit(1);
        }
    };

    let source = ReviewApi::new(&config)?;
    let messenger = TelegramBot::new(&config)?;

    info!(
        interval_secs = config.poll_interval.as_secs(),
        "starting homework status watcher"
    );
    PollLoop::new(&config, &source, &messenger).run()
}
