use crate::core::AgreementFields;
use crate::utils::error::{RealtyError, Result};
use crate::utils::format::format_months;
use crate::utils::validation::{
    blank_fields, parse_iso_date, parse_non_negative, parse_positive, parse_positive_int,
};
use chrono::{Local, Months, NaiveDate};

/// Agreement inputs after validation. Text fields keep the user's (trimmed) spelling.
#[derive(Debug)]
struct RentalTerms<'a> {
    tenant_name: &'a str,
    landlord_name: &'a str,
    property_address: &'a str,
    rent_amount: &'a str,
    security_deposit: &'a str,
    start_text: &'a str,
    months_text: &'a str,
    months: u32,
    end_date: NaiveDate,
}

impl AgreementFields {
    fn required(&self) -> [(&'static str, &str); 7] {
        [
            ("tenant_name", self.tenant_name.as_str()),
            ("landlord_name", self.landlord_name.as_str()),
            ("property_address", self.property_address.as_str()),
            ("rent_amount", self.rent_amount.as_str()),
            ("security_deposit", self.security_deposit.as_str()),
            ("start_date", self.start_date.as_str()),
            ("duration_months", self.duration_months.as_str()),
        ]
    }

    fn terms(&self) -> Result<RentalTerms<'_>> {
        let missing = blank_fields(&self.required());
        if !missing.is_empty() {
            return Err(RealtyError::validation(
                missing.join(", "),
                "All agreement fields must be filled",
            ));
        }

        parse_positive("rent_amount", &self.rent_amount)?;
        parse_non_negative("security_deposit", &self.security_deposit)?;
        let months = parse_positive_int("duration_months", &self.duration_months)?;
        let start_date = parse_iso_date("start_date", &self.start_date)?;

        let end_date = start_date
            .checked_add_months(Months::new(months))
            .ok_or_else(|| {
                RealtyError::validation("duration_months", "Term runs past the supported calendar")
            })?;

        Ok(RentalTerms {
            tenant_name: self.tenant_name.trim(),
            landlord_name: self.landlord_name.trim(),
            property_address: self.property_address.trim(),
            rent_amount: self.rent_amount.trim(),
            security_deposit: self.security_deposit.trim(),
            start_text: self.start_date.trim(),
            months_text: self.duration_months.trim(),
            months,
            end_date,
        })
    }
}

/// Renders the fixed rental agreement template.
#[derive(Debug, Clone)]
pub struct AgreementGenerator {
    currency_symbol: String,
}

impl AgreementGenerator {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn generate(&self, fields: &AgreementFields) -> Result<String> {
        self.generate_on(fields, Local::now().date_naive())
    }

    /// Same as [`generate`](Self::generate) with an explicit execution date.
    pub fn generate_on(&self, fields: &AgreementFields, today: NaiveDate) -> Result<String> {
        let terms = fields.terms()?;
        tracing::debug!(
            "Rendering agreement for {} month(s) from {}",
            terms.months,
            terms.start_text
        );
        Ok(self.render(&terms, today))
    }

    fn render(&self, t: &RentalTerms<'_>, today: NaiveDate) -> String {
        let symbol = &self.currency_symbol;
        let landlord_sig = format!("(Name: {})", t.landlord_name);

        format!(
            r#"RENTAL AGREEMENT

This Rental Agreement (the "Agreement") is made on {today} by and between:

1. LANDLORD: {landlord}
2. TENANT: {tenant}

PROPERTY DETAILS:
The Landlord agrees to let, and the Tenant agrees to take, the premises located at:
{address}

TERM:
This Agreement shall run for {term}, commencing on {start} and ending on {end}.

RENT:
The monthly rent shall be {symbol}{rent}, payable in advance on the first day of each calendar month.

SECURITY DEPOSIT:
The Tenant shall pay the Landlord a refundable Security Deposit of {symbol}{deposit} upon signing this Agreement.

TERMINATION:
Either party may terminate this Agreement by giving one calendar month's written notice.

IN WITNESS WHEREOF, the parties have executed this Agreement on the date first written above:

_________________________          _________________________
LANDLORD SIGNATURE                 TENANT SIGNATURE
{landlord_sig:<35}(Name: {tenant})"#,
            today = today.format("%d %B %Y"),
            landlord = t.landlord_name,
            tenant = t.tenant_name,
            address = t.property_address,
            term = format_months(t.months_text, t.months),
            start = t.start_text,
            end = t.end_date.format("%Y-%m-%d"),
            symbol = symbol,
            rent = t.rent_amount,
            deposit = t.security_deposit,
            landlord_sig = landlord_sig,
        )
    }
}
