pub mod agreement;
pub mod calculator;
pub mod contacts;
pub mod hub;

pub use crate::domain::model::{
    AgreementFields, BrokerContact, CalculationInput, CalculationResult, ImportSummary,
    NewContact, PropertyTaxInput, PropertyTaxResult,
};
pub use crate::domain::ports::{Clipboard, Storage};
pub use crate::utils::error::Result;
