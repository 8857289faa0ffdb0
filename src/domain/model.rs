use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored broker. Identity is its position in the contact list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerContact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub added_on: Option<NaiveDateTime>,
}

/// Contact fields exactly as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub locality: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        locality: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            locality: locality.into(),
        }
    }
}

/// Outcome of importing a legacy broker file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Rental agreement inputs, kept as raw text until generation validates them.
#[derive(Debug, Clone, Default)]
pub struct AgreementFields {
    pub tenant_name: String,
    pub landlord_name: String,
    pub property_address: String,
    pub rent_amount: String,
    pub security_deposit: String,
    pub start_date: String,
    pub duration_months: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub area: f64,
    pub price_per_unit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub total_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTaxInput {
    pub annual_value: f64,
    pub tax_rate_percent: f64,
    pub rebate_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTaxResult {
    pub gross_tax: f64,
    pub rebate_percent: f64,
    pub rebate_amount: f64,
    pub net_tax: f64,
}
