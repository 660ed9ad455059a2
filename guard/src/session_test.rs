use super::*;

fn sample_json() -> serde_json::Value {
    serde_json::json!({
        "userId": "0b7c2c7e-5a0e-4c1e-9d7a-6b1f0c3e2a11",
        "email": "ada@example.com",
        "name": "Ada Lovelace",
        "roles": ["ADMIN", "MEMBER"],
        "companyId": "4f2d9a60-1c3b-4e8f-8d2a-9e7b6c5d4a30"
    })
}

#[test]
fn deserializes_wire_names() {
    let session: Session = serde_json::from_value(sample_json()).unwrap();
    assert_eq!(session.user_id, "0b7c2c7e-5a0e-4c1e-9d7a-6b1f0c3e2a11");
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(session.display_name, "Ada Lovelace");
    assert_eq!(session.organization_id, "4f2d9a60-1c3b-4e8f-8d2a-9e7b6c5d4a30");
    assert!(session.roles.contains("ADMIN"));
    assert!(session.roles.contains("MEMBER"));
    assert!(!session.roles.contains("OWNER"));
}

#[test]
fn serializes_back_to_wire_names() {
    let session: Session = serde_json::from_value(sample_json()).unwrap();
    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["userId"], "0b7c2c7e-5a0e-4c1e-9d7a-6b1f0c3e2a11");
    assert_eq!(value["name"], "Ada Lovelace");
    assert_eq!(value["companyId"], "4f2d9a60-1c3b-4e8f-8d2a-9e7b6c5d4a30");
    assert!(value.get("display_name").is_none());
}

#[test]
fn duplicate_roles_collapse() {
    let mut json = sample_json();
    json["roles"] = serde_json::json!(["MEMBER", "MEMBER"]);
    let session: Session = serde_json::from_value(json).unwrap();
    assert_eq!(session.roles.len(), 1);
}

#[test]
fn missing_field_is_rejected() {
    let mut json = sample_json();
    json.as_object_mut().unwrap().remove("companyId");
    assert!(serde_json::from_value::<Session>(json).is_err());
}

#[test]
fn blank_identity_is_not_a_session() {
    let mut json = sample_json();
    json["userId"] = serde_json::json!("  ");
    let session: Session = serde_json::from_value(json).unwrap();
    assert!(!session.has_identity());
}
