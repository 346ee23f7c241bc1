use crmkit_types::{AttributeValue, Entity, EntityReference, OptionValue};
use pretty_assertions::assert_eq;
use uuid::Uuid;

// ── EntityReference ──────────────────────────────────────────────

#[test]
fn reference_display() {
    let id = Uuid::new_v4();
    let reference = EntityReference::new("contact", id);
    assert_eq!(reference.to_string(), format!("contact / {id}"));
}

#[test]
fn reference_serde_roundtrip() {
    let reference = EntityReference::new("account", Uuid::new_v4());
    let json = serde_json::to_string(&reference).unwrap();
    let parsed: EntityReference = serde_json::from_str(&json).unwrap();
    assert_eq!(reference, parsed);
}

#[test]
fn reference_hash_eq() {
    use std::collections::HashSet;
    let reference = EntityReference::new("contact", Uuid::new_v4());
    let mut set = HashSet::new();
    set.insert(reference.clone());
    set.insert(reference);
    assert_eq!(set.len(), 1);
}

// ── Entity accessors ─────────────────────────────────────────────

#[test]
fn entity_get_str() {
    let entity = Entity::new("contact", Uuid::new_v4()).with_attribute("firstname", "Jane");
    assert_eq!(entity.get_str("firstname"), Some("Jane"));
}

#[test]
fn entity_get_str_wrong_shape() {
    let entity = Entity::new("contact", Uuid::new_v4()).with_attribute("age", 42i64);
    assert_eq!(entity.get_str("age"), None);
}

#[test]
fn entity_get_str_absent() {
    let entity = Entity::new("contact", Uuid::new_v4());
    assert_eq!(entity.get_str("firstname"), None);
}

#[test]
fn entity_get_bool() {
    let entity = Entity::new("contact", Uuid::new_v4()).with_attribute("donotemail", true);
    assert_eq!(entity.get_bool("donotemail"), Some(true));
    assert_eq!(entity.get_bool("firstname"), None);
}

#[test]
fn entity_get_option() {
    let entity =
        Entity::new("lead", Uuid::new_v4()).with_attribute("statuscode", OptionValue::new(3));
    assert_eq!(entity.get_option("statuscode"), Some(OptionValue::new(3)));
    assert_eq!(entity.get_option("missing"), None);
}

#[test]
fn entity_get_reference() {
    let owner = EntityReference::new("systemuser", Uuid::new_v4());
    let entity = Entity::new("lead", Uuid::new_v4()).with_attribute("ownerid", owner.clone());
    assert_eq!(entity.get_reference("ownerid"), Some(&owner));
    assert_eq!(entity.get_reference("statuscode"), None);
}

#[test]
fn entity_set_replaces() {
    let mut entity = Entity::new("contact", Uuid::new_v4());
    entity.set("firstname", "Jane");
    entity.set("firstname", "Joan");
    assert_eq!(entity.get_str("firstname"), Some("Joan"));
    assert_eq!(entity.attributes.len(), 1);
}

#[test]
fn entity_to_reference_preserves_identity() {
    let id = Uuid::new_v4();
    let entity = Entity::new("opportunity", id).with_attribute("name", "Big deal");
    let reference = entity.to_reference();
    assert_eq!(reference.logical_name, "opportunity");
    assert_eq!(reference.id, id);
}

// ── Entity serde ─────────────────────────────────────────────────

#[test]
fn entity_serde_roundtrip() {
    let entity = Entity::new("contact", Uuid::new_v4())
        .with_attribute("firstname", "Jane")
        .with_attribute("statuscode", OptionValue::new(1))
        .with_attribute("ownerid", EntityReference::new("systemuser", Uuid::new_v4()));
    let json = serde_json::to_string(&entity).unwrap();
    let parsed: Entity = serde_json::from_str(&json).unwrap();
    assert_eq!(entity, parsed);
}

#[test]
fn entity_deserialize_without_attributes_field() {
    let entity = Entity::new("contact", Uuid::new_v4());
    let mut json: serde_json::Value = serde_json::to_value(&entity).unwrap();
    json.as_object_mut().unwrap().remove("attributes");
    let parsed: Entity = serde_json::from_value(json).unwrap();
    assert!(parsed.attributes.is_empty());
}

// ── AttributeValue display ───────────────────────────────────────

#[test]
fn attribute_display_null() {
    assert_eq!(AttributeValue::Null.to_string(), "(null)");
}

#[test]
fn attribute_display_option_is_numeric() {
    assert_eq!(AttributeValue::Option(OptionValue::new(100_000_001)).to_string(), "100000001");
}

#[test]
fn attribute_display_money_is_amount() {
    assert_eq!(AttributeValue::Money(12.5).to_string(), "12.5");
}

#[test]
fn attribute_display_reference() {
    let id = Uuid::new_v4();
    let value = AttributeValue::Reference(EntityReference::new("queue", id));
    assert_eq!(value.to_string(), format!("queue / {id}"));
}

#[test]
fn attribute_display_collection_counts_records() {
    let value = AttributeValue::Collection(vec![
        Entity::new("activityparty", Uuid::nil()),
        Entity::new("activityparty", Uuid::nil()),
    ]);
    assert_eq!(value.to_string(), "(2 records)");
}

#[test]
fn attribute_serde_tagged_roundtrip() {
    let values = vec![
        AttributeValue::Null,
        AttributeValue::Boolean(true),
        AttributeValue::Integer(-7),
        AttributeValue::String("hello".into()),
        AttributeValue::Option(OptionValue::new(2)),
        AttributeValue::Raw(serde_json::json!({"custom": [1, 2]})),
    ];
    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let parsed: AttributeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, parsed);
    }
}
