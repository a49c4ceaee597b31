pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliCommand, CliConfig, Settings};

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::core::report::OutputFormat;
    use crate::core::session::SessionOptions;
    use crate::domain::model::SeriesDigits;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "rigpair")]
    #[command(about = "Recommend a matching GPU for a CPU, or a CPU for a GPU")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Read the whole digit run of a CPU series (i15 -> 15)
        #[arg(long)]
        pub multi_digit_series: bool,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub json_logs: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Option<CliCommand>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
    pub enum CliCommand {
        /// Classify a CPU without prompting, e.g. `rigpair cpu intel i5`
        Cpu { brand: String, series: String },
        /// Classify a GPU without prompting, e.g. `rigpair gpu RTX 4070 Ti`
        Gpu { words: Vec<String> },
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            Ok(())
        }
    }

    /// Effective settings after layering CLI flags over the config file.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Settings {
        pub session: SessionOptions,
        pub json_logs: bool,
        pub log_level: Option<String>,
    }

    impl Settings {
        pub fn resolve(cli: &CliConfig, file: &TomlConfig) -> Self {
            let series_digits = if cli.multi_digit_series {
                SeriesDigits::Multi
            } else {
                file.series_digits()
            };

            Self {
                session: SessionOptions {
                    series_digits,
                    format: cli.format.unwrap_or_else(|| file.output_format()),
                },
                json_logs: cli.json_logs || file.json_logs(),
                log_level: file.log_level().map(str::to_string),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_subcommands() {
            let cli = CliConfig::parse_from(["rigpair", "gpu", "RTX", "4070", "Ti"]);
            assert_eq!(
                cli.command,
                Some(CliCommand::Gpu {
                    words: vec!["RTX".into(), "4070".into(), "Ti".into()]
                })
            );

            let cli =
                CliConfig::parse_from(["rigpair", "--format", "json", "cpu", "AMD", "Ryzen7"]);
            assert_eq!(cli.format, Some(OutputFormat::Json));
            assert_eq!(
                cli.command,
                Some(CliCommand::Cpu {
                    brand: "AMD".into(),
                    series: "Ryzen7".into()
                })
            );
        }

        #[test]
        fn test_cli_flags_override_file() {
            let file = TomlConfig::from_toml_str(
                "[output]\nformat = \"json\"\n[logging]\nlevel = \"info\"\n",
            )
            .unwrap();

            let cli =
                CliConfig::parse_from(["rigpair", "--format", "text", "--multi-digit-series"]);
            let settings = Settings::resolve(&cli, &file);
            assert_eq!(settings.session.format, OutputFormat::Text);
            assert_eq!(settings.session.series_digits, SeriesDigits::Multi);
            assert_eq!(settings.log_level.as_deref(), Some("info"));

            let cli = CliConfig::parse_from(["rigpair"]);
            let settings = Settings::resolve(&cli, &file);
            assert_eq!(settings.session.format, OutputFormat::Json);
            assert_eq!(settings.session.series_digits, SeriesDigits::Single);
            assert!(cli.command.is_none());
        }
    }
}
