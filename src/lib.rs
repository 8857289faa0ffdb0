pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{
    clipboard::{MemoryClipboard, SystemClipboard},
    storage::LocalStorage,
};
pub use config::{Settings, SettingsOverrides};
pub use core::{
    agreement::AgreementGenerator, contacts::ContactBook, hub::RealtyHub, AgreementFields,
    BrokerContact, NewContact,
};
pub use utils::error::{RealtyError, Result};
