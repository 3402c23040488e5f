use super::*;

#[test]
fn item_normal_usage() {
    let item = Item::new(1, "Redux").unwrap();
    assert_eq!(item.id, ItemId::Number(1));
    assert_eq!(item.name(), "Redux");
}

#[test]
fn item_rejects_empty_name() {
    let err = Item::new(7, "").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidItemName { ref id, .. } if id == "7"));
}

#[test]
fn item_keeps_name_verbatim() {
    let item = Item::new(1, "  padded  ").unwrap();
    assert_eq!(item.name(), "  padded  ");
}

#[test]
fn text_id_is_trimmed() {
    let id = ItemId::text("  abc ").unwrap();
    assert_eq!(id.to_string(), "abc");
}

#[test]
fn text_id_rejects_whitespace() {
    let err = ItemId::text("   ").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidItemId(_)));
}

#[test]
fn item_serde_shapes() {
    let numeric = Item::new(2, "React Query").unwrap();
    let json = serde_json::to_string(&numeric).unwrap();
    assert_eq!(json, r#"{"id":2,"name":"React Query"}"#);

    let textual: Item = serde_json::from_str(r#"{"id":"recoil","name":"Recoil"}"#).unwrap();
    assert_eq!(textual.id, ItemId::text("recoil").unwrap());
}

#[test]
fn item_deserialize_rejects_missing_id() {
    let result: Result<Item, _> = serde_json::from_str(r#"{"name":"Recoil"}"#);
    result.unwrap_err();
}

#[test]
fn item_deserialize_rejects_empty_name() {
    let result: Result<Item, _> = serde_json::from_str(r#"{"id":1,"name":""}"#);
    result.unwrap_err();
}
