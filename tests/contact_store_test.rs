use realty_hub::{ContactBook, LocalStorage, MemoryClipboard, NewContact, RealtyError, RealtyHub};
use tempfile::TempDir;

fn open_hub(dir: &TempDir) -> RealtyHub<LocalStorage, MemoryClipboard> {
    RealtyHub::new(
        LocalStorage::new(dir.path()),
        "brokers.csv",
        MemoryClipboard::new(),
        "₹",
    )
}

fn names(hub: &mut RealtyHub<LocalStorage, MemoryClipboard>) -> Vec<String> {
    hub.list_contacts()
        .unwrap()
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

#[test]
fn test_contacts_survive_restart_in_order() {
    let temp_dir = TempDir::new().unwrap();

    let saved = {
        let mut hub = open_hub(&temp_dir);
        hub.add_contact(NewContact::new("Asha Kulkarni", "+91 98450 11111", "Indiranagar"))
            .unwrap();
        hub.add_contact(NewContact::new("Ravi, Jr.", "080-2222", "HSR Layout, Sector 2"))
            .unwrap();
        hub.add_contact(NewContact::new("Meena \"Mini\" Shah", "98450 33333", ""))
            .unwrap();
        hub.list_contacts().unwrap().to_vec()
    };

    // Simulated restart: a fresh session reading the same file.
    let mut hub = open_hub(&temp_dir);
    assert_eq!(hub.list_contacts().unwrap(), saved.as_slice());
    assert_eq!(
        names(&mut hub),
        vec!["Asha Kulkarni", "Ravi, Jr.", "Meena \"Mini\" Shah"]
    );
}

#[test]
fn test_delete_persists_and_omits_exactly_one() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);
    for (name, phone) in [("A", "1"), ("B", "2"), ("C", "3"), ("D", "4")] {
        hub.add_contact(NewContact::new(name, phone, "")).unwrap();
    }

    let removed = hub.delete_contact(2).unwrap();
    assert_eq!(removed.name, "C");
    assert_eq!(hub.list_contacts().unwrap().len(), 3);

    let mut reopened = open_hub(&temp_dir);
    assert_eq!(names(&mut reopened), vec!["A", "B", "D"]);
}

#[test]
fn test_invalid_operations_leave_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);

    assert!(hub.delete_contact(0).is_err());
    assert!(!temp_dir.path().join("brokers.csv").exists());

    hub.add_contact(NewContact::new("A", "1", "")).unwrap();
    let before = std::fs::read(temp_dir.path().join("brokers.csv")).unwrap();

    assert!(hub.add_contact(NewContact::new("", "2", "")).is_err());
    assert!(hub.add_contact(NewContact::new("B", "", "")).is_err());
    assert!(hub.delete_contact(5).is_err());

    let after = std::fs::read(temp_dir.path().join("brokers.csv")).unwrap();
    assert_eq!(before, after);
    assert_eq!(names(&mut hub), vec!["A"]);
}

#[test]
fn test_contact_file_is_plain_csv() {
    let temp_dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(LocalStorage::new(temp_dir.path()), "brokers.csv").unwrap();
    book.add(NewContact::new("Asha", "98450", "Jayanagar")).unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("brokers.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("name,phone,locality,added_on"));
    assert!(lines.next().unwrap().starts_with("Asha,98450,Jayanagar,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_hand_written_file_loads() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("brokers.csv"),
        "name,phone,locality,added_on\nAsha,111,Indiranagar,\nRavi,222,,2024-05-01T10:30:00\n",
    )
    .unwrap();

    let mut hub = open_hub(&temp_dir);
    let contacts = hub.list_contacts().unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].added_on, None);
    assert_eq!(contacts[1].locality, "");
    assert!(contacts[1].added_on.is_some());
}

#[test]
fn test_import_legacy_broker_file() {
    let temp_dir = TempDir::new().unwrap();
    let legacy = r#"[
    {
        "id": "5b0c8a2e-1111-4c3e-9d59-7f5a1f0e9a01",
        "name": "Asha",
        "contact": "98450 11111",
        "added_on": "2024-05-01 10:30:00"
    },
    {
        "id": "5b0c8a2e-2222-4c3e-9d59-7f5a1f0e9a02",
        "name": "Ravi",
        "contact": ""
    }
]"#;

    let mut hub = open_hub(&temp_dir);
    let summary = hub.import_legacy_contacts(legacy.as_bytes()).unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.skipped, 1);

    let mut reopened = open_hub(&temp_dir);
    assert_eq!(names(&mut reopened), vec!["Asha"]);
    assert_eq!(reopened.list_contacts().unwrap()[0].phone, "98450 11111");
}

#[test]
fn test_import_from_missing_file_names_the_legacy_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut hub = open_hub(&temp_dir);
    let missing = temp_dir.path().join("old-brokers.json");

    let err = hub.import_legacy_file(&missing).unwrap_err();
    assert!(matches!(err, RealtyError::ImportFileError { .. }));
    assert!(err.user_friendly_message().contains("legacy broker file"));
    assert!(hub.list_contacts().unwrap().is_empty());
}

#[test]
fn test_import_from_file_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let legacy_path = temp_dir.path().join("brokers.json");
    std::fs::write(&legacy_path, r#"[{"id": "1", "name": "Asha", "contact": "111"}]"#).unwrap();

    let mut hub = open_hub(&temp_dir);
    let summary = hub.import_legacy_file(&legacy_path).unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(names(&mut hub), vec!["Asha"]);
}
