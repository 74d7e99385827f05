use clap::Parser;
use taxpanel_demo::cli::{Cli, Commands};
use taxpanel_demo::scenario::{Scenario, SAMPLE_SCENARIO};
use taxpanel_rules::EngineConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario,
            config,
            mode,
            pretty,
            verbose,
        } => {
            init_logging(verbose);

            let mut loaded = Scenario::from_file(&scenario)?;
            info!(path = %scenario.display(), steps = loaded.steps.len(), "Scenario loaded");

            if let Some(path) = config {
                loaded.config = EngineConfig::load(&path)?;
                info!(path = %path.display(), "Engine configuration loaded");
            }

            if let Some(mode) = mode {
                loaded.screen_mode = mode;
            }

            let declaration = loaded.run()?;

            let output = if pretty {
                serde_json::to_string_pretty(&declaration)?
            } else {
                serde_json::to_string(&declaration)?
            };
            println!("{}", output);
        }

        Commands::Sample => {
            print!("{}", SAMPLE_SCENARIO);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("taxpanel=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taxpanel=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
