use clap::Parser;
use rigpair::adapters::console::StdConsole;
use rigpair::config::{CliCommand, Settings};
use rigpair::core::report::Report;
use rigpair::utils::error::{ErrorSeverity, RigError};
use rigpair::utils::{logger, validation::Validate};
use rigpair::{CliConfig, Session, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Logging needs the config file, so setup errors go straight to stderr.
    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if let Err(e) = file_config.validate() {
        exit_with(&e);
    }

    let settings = Settings::resolve(&cli, &file_config);

    if settings.json_logs {
        logger::init_json_logger(cli.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::debug!("Resolved settings: {:?}", settings);

    let result = match &cli.command {
        Some(command) => run_once(command, &settings),
        None => {
            let mut session = Session::new(StdConsole::stdio(), settings.session);
            session.run().map(|_| ())
        }
    };

    if let Err(e) = result {
        fail(&e);
    }

    Ok(())
}

fn run_once(command: &CliCommand, settings: &Settings) -> rigpair::Result<()> {
    let report = match command {
        CliCommand::Cpu { brand, series } => {
            Report::for_cpu(brand, series, settings.session.series_digits)
        }
        CliCommand::Gpu { words } => Report::for_gpu(&words.join(" ")),
    };
    print!("{}", report.render(settings.session.format)?);
    Ok(())
}

fn fail(e: &RigError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    exit_with(e)
}

fn exit_with(e: &RigError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
