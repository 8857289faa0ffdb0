use crate::core::agreement::AgreementGenerator;
use crate::core::calculator::{calculate_land_value, calculate_property_tax};
use crate::core::contacts::ContactBook;
use crate::core::{
    AgreementFields, BrokerContact, CalculationResult, Clipboard, ImportSummary, NewContact,
    PropertyTaxResult, Storage,
};
use crate::utils::error::{RealtyError, Result};
use std::path::Path;

/// One user session: the contact book, a clipboard and the last agreement generated.
///
/// The contact file is read on the first contact operation, so the calculator
/// and the agreement generator never depend on it.
pub struct RealtyHub<S: Storage + Clone, C: Clipboard> {
    storage: S,
    contacts_file: String,
    contacts: Option<ContactBook<S>>,
    clipboard: C,
    generator: AgreementGenerator,
    currency_symbol: String,
    last_agreement: Option<String>,
}

impl<S: Storage + Clone, C: Clipboard> RealtyHub<S, C> {
    pub fn new(
        storage: S,
        contacts_file: impl Into<String>,
        clipboard: C,
        currency_symbol: impl Into<String>,
    ) -> Self {
        let currency_symbol = currency_symbol.into();
        Self {
            storage,
            contacts_file: contacts_file.into(),
            contacts: None,
            clipboard,
            generator: AgreementGenerator::new(currency_symbol.clone()),
            currency_symbol,
            last_agreement: None,
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn calculate(&self, area: &str, price_per_unit: &str) -> Result<CalculationResult> {
        calculate_land_value(area, price_per_unit).inspect_err(|e| {
            tracing::warn!("Land value rejected: {}", e);
        })
    }

    pub fn calculate_property_tax(
        &self,
        annual_value: &str,
        tax_rate: &str,
        rebate: &str,
    ) -> Result<PropertyTaxResult> {
        calculate_property_tax(annual_value, tax_rate, rebate).inspect_err(|e| {
            tracing::warn!("Property tax rejected: {}", e);
        })
    }

    // A failed load leaves nothing cached; the next contact operation retries.
    fn contacts(&mut self) -> Result<&mut ContactBook<S>> {
        let book = match self.contacts.take() {
            Some(book) => book,
            None => ContactBook::open(self.storage.clone(), self.contacts_file.as_str())?,
        };
        Ok(self.contacts.insert(book))
    }

    pub fn add_contact(&mut self, contact: NewContact) -> Result<&BrokerContact> {
        self.contacts()?.add(contact)
    }

    pub fn list_contacts(&mut self) -> Result<&[BrokerContact]> {
        Ok(self.contacts()?.list())
    }

    /// Removes the contact at the zero-based `index`.
    pub fn delete_contact(&mut self, index: usize) -> Result<BrokerContact> {
        self.contacts()?.delete(index)
    }

    pub fn import_legacy_contacts(&mut self, json: &[u8]) -> Result<ImportSummary> {
        self.contacts()?.import_legacy_json(json)
    }

    /// Reads a legacy `brokers.json` from disk and imports it.
    pub fn import_legacy_file(&mut self, path: &Path) -> Result<ImportSummary> {
        let data = std::fs::read(path).map_err(|source| RealtyError::ImportFileError {
            path: path.display().to_string(),
            source,
        })?;
        self.import_legacy_contacts(&data)
    }

    /// Renders the agreement and remembers it for [`copy_last_agreement`](Self::copy_last_agreement).
    /// A failed generation clears the remembered text.
    pub fn generate_agreement(&mut self, fields: &AgreementFields) -> Result<&str> {
        self.last_agreement = None;
        let text = self.generator.generate(fields)?;
        tracing::info!("Generated rental agreement ({} bytes)", text.len());
        Ok(self.last_agreement.insert(text).as_str())
    }

    pub fn last_agreement(&self) -> Option<&str> {
        self.last_agreement.as_deref()
    }

    pub fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text)?;
        tracing::info!("Copied {} bytes to the clipboard", text.len());
        Ok(())
    }

    pub fn copy_last_agreement(&mut self) -> Result<()> {
        let text = self.last_agreement.as_deref().ok_or_else(|| {
            RealtyError::validation("agreement", "Nothing to copy; generate an agreement first")
        })?;
        self.clipboard.set_text(text)?;
        tracing::info!("Copied rental agreement to the clipboard");
        Ok(())
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}
