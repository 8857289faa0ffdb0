use crate::core::{CalculationInput, CalculationResult, PropertyTaxInput, PropertyTaxResult};
use crate::utils::error::{RealtyError, Result};
use crate::utils::format::format_currency;
use crate::utils::validation::{parse_non_negative, validate_range};

impl CalculationInput {
    pub fn parse(area: &str, price_per_unit: &str) -> Result<Self> {
        Ok(Self {
            area: parse_non_negative("area", area)?,
            price_per_unit: parse_non_negative("price_per_unit", price_per_unit)?,
        })
    }

    pub fn evaluate(&self) -> Result<CalculationResult> {
        Ok(CalculationResult {
            total_value: finite("total_value", self.area * self.price_per_unit)?,
        })
    }
}

impl CalculationResult {
    pub fn display(&self, currency_symbol: &str) -> String {
        format!(
            "Total Land Value: {}",
            format_currency(currency_symbol, self.total_value)
        )
    }
}

impl PropertyTaxInput {
    pub fn parse(annual_value: &str, tax_rate: &str, rebate: &str) -> Result<Self> {
        let annual_value = parse_non_negative("annual_value", annual_value)?;
        let tax_rate_percent = parse_non_negative("tax_rate", tax_rate)?;
        let rebate_percent = parse_non_negative("rebate", rebate)?;
        validate_range("rebate", rebate_percent, 0.0, 100.0)?;

        Ok(Self {
            annual_value,
            tax_rate_percent,
            rebate_percent,
        })
    }

    pub fn evaluate(&self) -> Result<PropertyTaxResult> {
        let gross_tax = finite(
            "gross_tax",
            self.annual_value * (self.tax_rate_percent / 100.0),
        )?;
        let rebate_amount = gross_tax * (self.rebate_percent / 100.0);

        Ok(PropertyTaxResult {
            gross_tax,
            rebate_percent: self.rebate_percent,
            rebate_amount,
            net_tax: gross_tax - rebate_amount,
        })
    }
}

impl PropertyTaxResult {
    pub fn display(&self, currency_symbol: &str) -> String {
        format!(
            "Gross Annual Tax: {}\nRebate Applied ({}%): {}\nNet Payable Tax: {}",
            format_currency(currency_symbol, self.gross_tax),
            self.rebate_percent,
            format_currency(currency_symbol, self.rebate_amount),
            format_currency(currency_symbol, self.net_tax)
        )
    }
}

// Finite inputs can still overflow to infinity when multiplied.
fn finite(field_name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RealtyError::validation(field_name, "Result is too large"))
    }
}

/// Land value from raw form input: `area * price_per_unit`.
pub fn calculate_land_value(area: &str, price_per_unit: &str) -> Result<CalculationResult> {
    let input = CalculationInput::parse(area, price_per_unit)?;
    let result = input.evaluate()?;
    tracing::debug!(
        "Land value: {} x {} = {}",
        input.area,
        input.price_per_unit,
        result.total_value
    );
    Ok(result)
}

pub fn calculate_property_tax(
    annual_value: &str,
    tax_rate: &str,
    rebate: &str,
) -> Result<PropertyTaxResult> {
    let input = PropertyTaxInput::parse(annual_value, tax_rate, rebate)?;
    input.evaluate()
}
