use contacts_core::{reference_directory, Contact, ContactDetail, Directory, Group};

#[test]
fn contact_serialization_uses_expected_wire_fields() {
    let contact = Contact::new("4", "Ali", "03001234570", "Friends");

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], "4");
    assert_eq!(json["name"], "Ali");
    assert_eq!(json["phone"], "03001234570");
    assert_eq!(json["group"], "Friends");

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}

#[test]
fn directory_serializes_as_section_array() {
    let directory = Directory::new(vec![Group::new(
        "Work",
        vec![Contact::new("10", "HR", "03001234576", "Work")],
    )]);

    let json = serde_json::to_value(&directory).unwrap();
    let sections = json.as_array().expect("directory should be an array");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["title"], "Work");
    assert_eq!(sections[0]["data"][0]["id"], "10");

    let decoded: Directory = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, directory);
}

#[test]
fn empty_directory_serializes_as_empty_array() {
    let json = serde_json::to_string(&Directory::empty()).unwrap();
    assert_eq!(json, "[]");
}

#[test]
fn detail_projection_copies_display_fields() {
    let contact = reference_directory().find_contact("3").unwrap();
    let detail = ContactDetail::from(contact);
    assert_eq!(detail.name, "Sister");
    assert_eq!(detail.phone, "03001234569");
    assert_eq!(detail.group, "Family");
}
