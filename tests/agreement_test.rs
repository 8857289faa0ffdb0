use realty_hub::utils::error::ErrorCategory;
use realty_hub::{AgreementFields, LocalStorage, MemoryClipboard, RealtyHub};
use tempfile::TempDir;

fn complete_fields() -> AgreementFields {
    AgreementFields {
        tenant_name: "Priya Nair".to_string(),
        landlord_name: "Suresh Rao".to_string(),
        property_address: "No. 42, 3rd Cross, Malleshwaram, Bengaluru 560003".to_string(),
        rent_amount: "18500.50".to_string(),
        security_deposit: "55000".to_string(),
        start_date: "2025-06-01".to_string(),
        duration_months: "11".to_string(),
    }
}

fn open_hub(dir: &TempDir) -> RealtyHub<LocalStorage, MemoryClipboard> {
    RealtyHub::new(
        LocalStorage::new(dir.path()),
        "brokers.csv",
        MemoryClipboard::new(),
        "₹",
    )
}

#[test]
fn test_agreement_contains_every_value_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);
    let fields = complete_fields();

    let text = hub.generate_agreement(&fields).unwrap().to_string();

    for value in [
        &fields.tenant_name,
        &fields.landlord_name,
        &fields.property_address,
        &fields.rent_amount,
        &fields.security_deposit,
        &fields.start_date,
        &fields.duration_months,
    ] {
        assert!(text.contains(value.as_str()), "missing {value:?} in agreement");
    }
    assert!(text.contains("ending on 2026-05-01"));
}

#[test]
fn test_term_is_kept_as_typed() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);

    for (term, rendered) in [("+3", "+3 months"), ("011", "011 months"), ("01", "01 month")] {
        let mut fields = complete_fields();
        fields.duration_months = term.to_string();

        let text = hub.generate_agreement(&fields).unwrap().to_string();
        assert!(text.contains(&format!("run for {rendered}, commencing")), "term {term:?}");
    }
}

#[test]
fn test_corrupt_contact_file_does_not_block_agreements() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("brokers.csv"), "name,phone\n\"unterminated\n").unwrap();
    let mut hub = open_hub(&temp_dir);

    assert!(hub.generate_agreement(&complete_fields()).is_ok());
    hub.copy_last_agreement().unwrap();
    assert!(hub.clipboard().contents().is_some());
}

#[test]
fn test_any_blank_field_yields_no_text() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);

    let blanks: [fn(&mut AgreementFields); 7] = [
        |f| f.tenant_name.clear(),
        |f| f.landlord_name.clear(),
        |f| f.property_address = "   ".to_string(),
        |f| f.rent_amount.clear(),
        |f| f.security_deposit.clear(),
        |f| f.start_date.clear(),
        |f| f.duration_months.clear(),
    ];

    for blank in blanks {
        let mut fields = complete_fields();
        blank(&mut fields);

        let err = hub.generate_agreement(&fields).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(hub.last_agreement(), None);
    }
}

#[test]
fn test_copy_places_last_agreement_on_clipboard() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);

    let text = hub.generate_agreement(&complete_fields()).unwrap().to_string();
    hub.copy_last_agreement().unwrap();

    assert_eq!(hub.clipboard().contents(), Some(text.as_str()));
}

#[test]
fn test_copy_without_agreement_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);

    let err = hub.copy_last_agreement().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(hub.clipboard().contents(), None);
}

#[test]
fn test_failed_generation_forgets_previous_agreement() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);

    hub.generate_agreement(&complete_fields()).unwrap();
    let mut broken = complete_fields();
    broken.start_date = "June 1st".to_string();

    assert!(hub.generate_agreement(&broken).is_err());
    assert!(hub.copy_last_agreement().is_err());
}

#[test]
fn test_copy_arbitrary_text_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);

    hub.copy_to_clipboard("  line one\nline two ₹  ").unwrap();
    assert_eq!(hub.clipboard().contents(), Some("  line one\nline two ₹  "));
}
