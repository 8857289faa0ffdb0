use crate::config::SettingsOverrides;
use crate::core::AgreementFields;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "realty-hub")]
#[command(about = "Land value, property tax, broker contacts and rental agreements")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the contact file
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Contact file name inside the data directory
    #[arg(long, global = true)]
    pub contacts_file: Option<String>,

    /// Currency symbol used in results and agreements
    #[arg(long, global = true)]
    pub currency: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Land value: area multiplied by price per unit area
    Calc {
        #[arg(long, allow_hyphen_values = true)]
        area: String,
        #[arg(long, allow_hyphen_values = true)]
        price: String,
    },
    /// Annual property tax after rebate
    Tax {
        #[arg(long, allow_hyphen_values = true)]
        annual_value: String,
        /// Tax rate in percent
        #[arg(long, default_value = "12", allow_hyphen_values = true)]
        tax_rate: String,
        /// Rebate in percent of the gross tax
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        rebate: String,
    },
    /// Manage saved broker contacts
    #[command(subcommand)]
    Broker(BrokerCommand),
    /// Generate a rental agreement
    Agreement(AgreementArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum BrokerCommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        locality: String,
    },
    List,
    /// Delete by the 1-based position shown in `broker list`
    Delete { position: usize },
    /// Append brokers from a legacy brokers.json file
    Import { path: PathBuf },
}

#[derive(Debug, Clone, Args)]
pub struct AgreementArgs {
    #[arg(long, default_value = "")]
    pub tenant: String,
    #[arg(long, default_value = "")]
    pub landlord: String,
    #[arg(long, default_value = "")]
    pub address: String,
    /// Monthly rent
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub rent: String,
    /// Security deposit
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub deposit: String,
    /// Start date, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub start_date: String,
    /// Term in months
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub term: String,
    /// Also copy the agreement to the system clipboard. On Linux the command
    /// keeps running until another program takes over the clipboard
    #[arg(long)]
    pub copy: bool,
    /// Write the agreement to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            config_path: self.config.clone(),
            data_dir: self.data_dir.clone(),
            contacts_file: self.contacts_file.clone(),
            currency_symbol: self.currency.clone(),
        }
    }
}

impl AgreementArgs {
    pub fn fields(&self) -> AgreementFields {
        AgreementFields {
            tenant_name: self.tenant.clone(),
            landlord_name: self.landlord.clone(),
            property_address: self.address.clone(),
            rent_amount: self.rent.clone(),
            security_deposit: self.deposit.clone(),
            start_date: self.start_date.clone(),
            duration_months: self.term.clone(),
        }
    }
}
