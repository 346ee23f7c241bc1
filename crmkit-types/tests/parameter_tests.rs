use crmkit_types::{
    AttributeValue, ColumnSet, Entity, EntityReference, OptionValue, ParameterBag, ParameterValue,
    QueryByAttribute,
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

// ── Shape-filtered lookup ────────────────────────────────────────

#[test]
fn bag_get_entity() {
    let entity = Entity::new("contact", Uuid::new_v4());
    let bag = ParameterBag::new().with("Target", ParameterValue::Entity(entity.clone()));
    assert_eq!(bag.get_entity("Target"), Some(&entity));
}

#[test]
fn bag_get_entity_wrong_shape() {
    let reference = EntityReference::new("contact", Uuid::new_v4());
    let bag = ParameterBag::new().with("Target", ParameterValue::Reference(reference.clone()));
    assert_eq!(bag.get_entity("Target"), None);
    assert_eq!(bag.get_reference("Target"), Some(&reference));
}

#[test]
fn bag_get_option() {
    let bag = ParameterBag::new().with("State", ParameterValue::Option(OptionValue::new(1)));
    assert_eq!(bag.get_option("State"), Some(OptionValue::new(1)));
    assert_eq!(bag.get_option("Status"), None);
}

#[test]
fn bag_get_id() {
    let id = Uuid::new_v4();
    let bag = ParameterBag::new().with("EmailId", ParameterValue::Id(id));
    assert_eq!(bag.get_id("EmailId"), Some(id));
    assert_eq!(bag.get_reference("EmailId"), None);
}

#[test]
fn bag_raw_reads_as_absent_under_every_typed_shape() {
    let bag = ParameterBag::new().with("Target", ParameterValue::Raw(serde_json::json!("oops")));
    assert!(bag.contains("Target"));
    assert_eq!(bag.get_entity("Target"), None);
    assert_eq!(bag.get_reference("Target"), None);
    assert_eq!(bag.get_option("Target"), None);
    assert_eq!(bag.get_id("Target"), None);
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn bag_preserves_insertion_order() {
    let bag = ParameterBag::new()
        .with("State", ParameterValue::Option(OptionValue::new(1)))
        .with("Status", ParameterValue::Option(OptionValue::new(2)));
    let names: Vec<&str> = bag.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["State", "Status"]);
}

#[test]
fn bag_duplicate_name_first_match_wins() {
    let bag = ParameterBag::new()
        .with("State", ParameterValue::Option(OptionValue::new(1)))
        .with("State", ParameterValue::Option(OptionValue::new(9)));
    assert_eq!(bag.get_option("State"), Some(OptionValue::new(1)));
    assert_eq!(bag.len(), 2);
}

#[test]
fn bag_empty() {
    let bag = ParameterBag::new();
    assert!(bag.is_empty());
    assert!(!bag.contains("Target"));
    assert_eq!(bag.get("Target"), None);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn bag_serde_roundtrip() {
    let bag = ParameterBag::new()
        .with(
            "Target",
            ParameterValue::Entity(Entity::new("contact", Uuid::new_v4())),
        )
        .with("EmailId", ParameterValue::Id(Uuid::new_v4()))
        .with("State", ParameterValue::Option(OptionValue::new(0)));
    let json = serde_json::to_string(&bag).unwrap();
    let parsed: ParameterBag = serde_json::from_str(&json).unwrap();
    assert_eq!(bag, parsed);
}

// ── Query shapes ─────────────────────────────────────────────────

#[test]
fn query_collects_filters_in_order() {
    let mut query = QueryByAttribute::new("account", ColumnSet::All);
    query.add_attribute_value("name", "Acme");
    query.add_attribute_value("statecode", OptionValue::new(0));
    assert_eq!(query.attributes.len(), 2);
    assert_eq!(query.attributes[0].0, "name");
    assert_eq!(
        query.attributes[1].1,
        AttributeValue::Option(OptionValue::new(0))
    );
}

#[test]
fn column_set_from_names() {
    let set = ColumnSet::columns(["name", "accountnumber"]);
    assert_eq!(
        set,
        ColumnSet::Columns(vec!["name".into(), "accountnumber".into()])
    );
}

#[test]
fn query_serde_roundtrip() {
    let mut query = QueryByAttribute::new("contact", ColumnSet::columns(["fullname"]));
    query.add_attribute_value("emailaddress1", "jane@example.test");
    let json = serde_json::to_string(&query).unwrap();
    let parsed: QueryByAttribute = serde_json::from_str(&json).unwrap();
    assert_eq!(query, parsed);
}
