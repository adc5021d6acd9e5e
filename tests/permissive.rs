//! Payloads with keys the schema does not declare still validate, and the
//! declared part comes through untouched.

use coursework::resource::{Course, Resource, Validation};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn declared(key: &str) -> bool {
    Course::fields().iter().any(|f| f.name == key)
}

fn extra_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[ -~]{0,16}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(|v| json!(v)),
    ]
}

proptest! {
    #[test]
    fn undeclared_keys_never_invalidate(
        title in "[ -~]{0,24}",
        rating in 0.0f64..5.0,
        extras in prop::collection::btree_map("[a-zA-Z_]{1,12}", extra_value(), 0..6),
    ) {
        let mut payload = Map::new();
        for (key, value) in extras {
            if !declared(&key) {
                payload.insert(key, value);
            }
        }
        payload.insert("title".into(), Value::String(title.clone()));
        payload.insert("rating".into(), json!(rating));

        let expected = Course { title: Some(title), rating: Some(rating), ..Course::default() };
        prop_assert_eq!(Course::validate(&Value::Object(payload)), Validation::Valid(expected));
    }
}
