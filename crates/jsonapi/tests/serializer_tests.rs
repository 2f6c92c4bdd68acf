//! End-to-end tests for the record-to-document transform.

use meridian_jsonapi::{DocumentError, TypeDescriptor, TypeMap, serialize};
use serde_json::json;

fn root_types() -> TypeMap {
    TypeMap::with_root(TypeDescriptor::new("test", "/test"))
}

#[test]
fn test_self_link_and_data_type() {
    let document = serialize(&json!({ "id": "123" }), &root_types()).unwrap();
    let json = document.to_json().unwrap();

    assert_eq!(json["links"]["self"], "/test/123");
    assert_eq!(json["data"]["id"], "123");
    assert_eq!(json["data"]["type"], "test");
}

#[test]
fn test_untyped_values_are_attributes() {
    let record = json!({
        "id": "123",
        "string": "test",
        "array": ["test"],
        "obj": { "id": "test" },
        "number": 123,
        "boolean": true
    });

    let document = serialize(&record, &root_types()).unwrap();
    let attributes = &document.resource().unwrap().attributes;

    assert!(attributes.get("id").is_none());
    assert_eq!(attributes["string"], json!("test"));
    assert_eq!(attributes["array"], json!(["test"]));
    assert_eq!(attributes["obj"], json!({ "id": "test" }));
    assert_eq!(attributes["number"], json!(123));
    assert_eq!(attributes["boolean"], json!(true));
}

#[test]
fn test_null_values_are_dropped() {
    let record = json!({
        "id": "123",
        "name": "bob",
        "missing": null
    });

    let document = serialize(&record, &root_types()).unwrap();
    let attributes = &document.resource().unwrap().attributes;

    assert_eq!(attributes["name"], json!("bob"));
    assert!(attributes.get("missing").is_none());
}

#[test]
fn test_null_typed_key_is_dropped_not_related() {
    let record = json!({ "id": "123", "nested": null });
    let types = root_types().with("nested", TypeDescriptor::new("nested", "/nested"));

    let document = serialize(&record, &types).unwrap();
    let resource = document.resource().unwrap();

    assert!(resource.relationships.is_empty());
    assert!(resource.attributes.is_empty());
}

#[test]
fn test_singular_relationship_is_recursed() {
    let record = json!({
        "id": "123",
        "nested": { "id": "234" }
    });
    let types = root_types().with("nested", TypeDescriptor::new("nested", "/nested"));

    let document = serialize(&record, &types).unwrap();
    let json = document.to_json().unwrap();

    assert_eq!(
        json["data"]["relationships"]["nested"]["links"]["self"],
        "/nested/234"
    );
    assert_eq!(json["data"]["relationships"]["nested"]["data"]["id"], "234");
    assert_eq!(
        json["data"]["relationships"]["nested"]["data"]["type"],
        "nested"
    );
}

#[test]
fn test_list_relationship_wraps_collection() {
    let record = json!({
        "id": "123",
        "nested": [{ "id": "234" }]
    });
    let types = root_types().with("nested", TypeDescriptor::new("nested", "/nested"));

    let document = serialize(&record, &types).unwrap();
    let json = document.to_json().unwrap();

    // The wrapper carries the bare collection URL; each element carries its
    // own item link.
    assert_eq!(
        json["data"]["relationships"]["nested"]["links"]["self"],
        "/nested"
    );
    assert!(json["data"]["relationships"]["nested"]["data"].is_array());
    assert_eq!(
        json["data"]["relationships"]["nested"]["data"][0]["links"]["self"],
        "/nested/234"
    );
}

#[test]
fn test_empty_array_is_attribute_even_when_typed() {
    let record = json!({ "id": "123", "nested": [] });
    let types = root_types().with("nested", TypeDescriptor::new("nested", "/nested"));

    let document = serialize(&record, &types).unwrap();
    let resource = document.resource().unwrap();

    assert!(resource.relationships.is_empty());
    assert_eq!(resource.attributes["nested"], json!([]));
}

#[test]
fn test_untyped_nested_object_is_not_recursed() {
    let record = json!({
        "id": "123",
        "color": { "r": 10, "g": 10, "b": 10 }
    });

    let document = serialize(&record, &root_types()).unwrap();
    let resource = document.resource().unwrap();

    assert!(resource.relationships.is_empty());
    assert_eq!(
        resource.attributes["color"],
        json!({ "r": 10, "g": 10, "b": 10 })
    );
}

#[test]
fn test_relationships_nest_through_multiple_levels() {
    let record = json!({
        "id": "1",
        "town": {
            "id": "2",
            "prefecture": { "id": "3", "name": "Shinyland" }
        }
    });
    let types = root_types()
        .with("town", TypeDescriptor::new("towns", "/towns"))
        .with("prefecture", TypeDescriptor::new("prefectures", "/prefectures"));

    let document = serialize(&record, &types).unwrap();
    let json = document.to_json().unwrap();

    let town = &json["data"]["relationships"]["town"];
    assert_eq!(town["links"]["self"], "/towns/2");
    assert_eq!(
        town["data"]["relationships"]["prefecture"]["links"]["self"],
        "/prefectures/3"
    );
    assert_eq!(
        town["data"]["relationships"]["prefecture"]["data"]["attributes"]["name"],
        "Shinyland"
    );
}

#[test]
fn test_missing_id_anywhere_fails() {
    assert_eq!(
        serialize(&json!({}), &root_types()),
        Err(DocumentError::MissingId)
    );

    let record = json!({
        "id": "123",
        "nested": [{ "id": "234" }, { "species": "cat" }]
    });
    let types = root_types().with("nested", TypeDescriptor::new("nested", "/nested"));
    assert_eq!(serialize(&record, &types), Err(DocumentError::MissingId));
}

#[test]
fn test_missing_root_descriptor_fails() {
    assert_eq!(
        serialize(&json!({ "id": "1" }), &TypeMap::new()),
        Err(DocumentError::MissingRootDescriptor)
    );
}

#[test]
fn test_reserializing_output_yields_only_attributes() {
    // A document's own output, fed back in as plain data with no nested
    // type entries, must not grow new relationships: the nested documents
    // it contains are untyped objects by then.
    let record = json!({
        "id": "123",
        "name": "Alice",
        "town": { "id": "456", "name": "Funville" }
    });
    let types = root_types().with("town", TypeDescriptor::new("towns", "/towns"));

    let first = serialize(&record, &types).unwrap();
    let first_json = first.to_json().unwrap();

    // Rebuild a record from the serialized output and run it through again
    // with only a root descriptor.
    let mut reserialized = serde_json::Map::new();
    reserialized.insert("id".to_string(), first_json["data"]["id"].clone());
    reserialized.insert(
        "attributes".to_string(),
        first_json["data"]["attributes"].clone(),
    );
    reserialized.insert(
        "relationships".to_string(),
        first_json["data"]["relationships"].clone(),
    );

    let second = serialize(&serde_json::Value::Object(reserialized), &root_types()).unwrap();
    let resource = second.resource().unwrap();

    assert!(resource.relationships.is_empty());
    assert!(resource.attributes.contains_key("attributes"));
    assert!(resource.attributes.contains_key("relationships"));
}
