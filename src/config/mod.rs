pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Commands, FrankCommand, MailArgs};

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::mail::{DeliveryMode, Format};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::{Args, Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "townhall")]
    #[command(about = "Property taxes and mail franking for a small town")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        /// Print reports as JSON
        #[arg(long, global = true)]
        pub json: bool,

        /// Emit log lines as JSON
        #[arg(long, global = true)]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Commands,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Commands {
        /// Taxes of a single house
        House {
            #[arg(long)]
            living_area: u32,

            #[arg(long, default_value = "0")]
            garden_area: u32,
        },
        /// Taxes of a single appartment building
        Appartments {
            /// Living area of each appartment, comma separated
            #[arg(long, value_delimiter = ',', required = true)]
            areas: Vec<u32>,
        },
        /// Franking of a single mail
        #[command(subcommand)]
        Frank(FrankCommand),
        /// Run a small sample town and mailbox
        Demo,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum FrankCommand {
        Letter {
            #[command(flatten)]
            mail: MailArgs,

            #[arg(long, value_enum, ignore_case = true)]
            format: Format,
        },
        Parcel {
            #[command(flatten)]
            mail: MailArgs,

            /// Volume in liters
            #[arg(long)]
            volume: u32,
        },
        Advertisement {
            #[command(flatten)]
            mail: MailArgs,
        },
    }

    #[derive(Debug, Clone, Args)]
    pub struct MailArgs {
        /// Weight in grams
        #[arg(long)]
        pub weight: u32,

        #[arg(long, value_enum, default_value = "normal")]
        pub mode: DeliveryMode,

        #[arg(long, default_value = "")]
        pub address: String,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            Ok(())
        }
    }

}
