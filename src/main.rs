use clap::Parser;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{
    CliConfig, DrawRunner, LocalStorage, SantaPipeline, Settings, ThreadRngSource,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting secret-santa CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load settings: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = SantaPipeline::new(storage, settings, ThreadRngSource::new());
    let mut runner = DrawRunner::new(pipeline);

    match runner.run() {
        Ok(assignment) => {
            tracing::info!("✅ Draw completed: {} secret santas", assignment.len());
            println!("✅ Draw completed: {} secret santas", assignment.len());
        }
        Err(e) => {
            tracing::error!("❌ Draw failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
