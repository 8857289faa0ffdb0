use crate::core::{BrokerContact, ImportSummary, NewContact, Storage};
use crate::utils::error::{RealtyError, Result};
use crate::utils::validation::require_text;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;

const HEADER: [&str; 4] = ["name", "phone", "locality", "added_on"];
const LEGACY_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

impl NewContact {
    /// Trims every field and rejects a blank name or phone.
    pub fn into_contact(self, added_on: Option<NaiveDateTime>) -> Result<BrokerContact> {
        let name = require_text("name", &self.name)?.to_string();
        let phone = require_text("phone", &self.phone)?.to_string();

        Ok(BrokerContact {
            name,
            phone,
            locality: self.locality.trim().to_string(),
            added_on,
        })
    }
}

/// Broker record as written by the earlier desktop tool's `brokers.json`.
#[derive(Debug, Deserialize)]
struct LegacyBroker {
    #[serde(default)]
    name: String,
    #[serde(default)]
    contact: String,
    #[serde(default)]
    added_on: Option<String>,
}

/// Ordered broker list backed by a single CSV file.
///
/// Every mutation rewrites the whole file. A mutation whose write fails is
/// rolled back, so the in-memory list always matches the last successful write.
pub struct ContactBook<S: Storage> {
    storage: S,
    file: String,
    contacts: Vec<BrokerContact>,
}

impl<S: Storage> ContactBook<S> {
    /// Loads `file` from `storage`. A missing file opens an empty book.
    pub fn open(storage: S, file: impl Into<String>) -> Result<Self> {
        let file = file.into();
        let contacts = match storage.read_file(&file) {
            Ok(bytes) => decode(&bytes)?,
            Err(e) if e.is_not_found() => {
                tracing::debug!("Contact file '{}' not found, starting empty", file);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        tracing::debug!("Loaded {} contacts from '{}'", contacts.len(), file);
        Ok(Self {
            storage,
            file,
            contacts,
        })
    }

    pub fn list(&self) -> &[BrokerContact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add(&mut self, draft: NewContact) -> Result<&BrokerContact> {
        let contact = draft.into_contact(Some(Local::now().naive_local()))?;
        let position = self.contacts.len();
        self.contacts.push(contact);

        if let Err(e) = self.persist() {
            self.contacts.pop();
            return Err(e);
        }

        let added = &self.contacts[position];
        tracing::info!("Added broker '{}' at position {}", added.name, position + 1);
        Ok(added)
    }

    /// Removes the contact at the zero-based `index`.
    pub fn delete(&mut self, index: usize) -> Result<BrokerContact> {
        if self.contacts.is_empty() {
            return Err(RealtyError::validation("index", "No brokers saved yet"));
        }
        if index >= self.contacts.len() {
            return Err(RealtyError::validation(
                "index",
                format!(
                    "Index {} is out of range for {} saved brokers",
                    index,
                    self.contacts.len()
                ),
            ));
        }

        let removed = self.contacts.remove(index);
        if let Err(e) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(e);
        }

        tracing::info!("Deleted broker '{}' from index {}", removed.name, index);
        Ok(removed)
    }

    /// Appends every valid broker from a legacy JSON broker file, then writes once.
    pub fn import_legacy_json(&mut self, bytes: &[u8]) -> Result<ImportSummary> {
        let legacy: Vec<LegacyBroker> = serde_json::from_slice(bytes)?;
        let before = self.contacts.len();
        let mut skipped = 0;

        for entry in legacy {
            let added_on = entry
                .added_on
                .as_deref()
                .and_then(|ts| NaiveDateTime::parse_from_str(ts, LEGACY_TIMESTAMP).ok());

            match NewContact::new(entry.name, entry.contact, "").into_contact(added_on) {
                Ok(contact) => self.contacts.push(contact),
                Err(e) => {
                    tracing::warn!("Skipping legacy broker entry: {}", e);
                    skipped += 1;
                }
            }
        }

        let imported = self.contacts.len() - before;
        if imported > 0 {
            if let Err(e) = self.persist() {
                self.contacts.truncate(before);
                return Err(e);
            }
        }

        tracing::info!("Imported {} legacy brokers ({} skipped)", imported, skipped);
        Ok(ImportSummary { imported, skipped })
    }

    fn persist(&self) -> Result<()> {
        let data = encode(&self.contacts)?;
        self.storage.write_file(&self.file, &data)?;
        tracing::debug!("Wrote {} contacts to '{}'", self.contacts.len(), self.file);
        Ok(())
    }
}

fn encode(contacts: &[BrokerContact]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // Written explicitly so an empty book still produces a header row.
    writer.write_record(HEADER)?;
    for contact in contacts {
        writer.serialize(contact)?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| RealtyError::IoError(std::io::Error::other(e.to_string())))
}

fn decode(bytes: &[u8]) -> Result<Vec<BrokerContact>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let mut contacts = Vec::new();
    for record in reader.deserialize::<BrokerContact>() {
        contacts.push(record?);
    }
    Ok(contacts)
}
