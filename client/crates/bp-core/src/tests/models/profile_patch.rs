use crate::ProfilePatch;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn test_new_patch_is_empty() {
    assert!(ProfilePatch::new().is_empty());
    assert!(!ProfilePatch::new().income(1.0).is_empty());
}

#[test]
fn test_serialize_skips_absent_fields() {
    let json = serde_json::to_value(ProfilePatch::new().name("Asha").income(42000.0)).unwrap();

    assert_eq!(json, serde_json::json!({ "name": "Asha", "income": 42000.0 }));
}

#[test]
fn test_avatar_clear_serializes_as_null() {
    let json = serde_json::to_value(ProfilePatch::new().avatar(None)).unwrap();

    assert!(json["avatar"].is_null());
    assert!(json.as_object().unwrap().contains_key("avatar"));
}

#[test]
fn test_deserialize_distinguishes_null_from_missing_avatar() {
    let cleared: ProfilePatch = serde_json::from_str(r#"{"avatar":null}"#).unwrap();
    let untouched: ProfilePatch = serde_json::from_str(r#"{"name":"x"}"#).unwrap();

    assert_eq!(cleared.avatar, Some(None));
    assert_eq!(untouched.avatar, None);
}

#[test]
fn test_validate_rejects_negative_amounts() {
    assert_that!(ProfilePatch::new().income(-5.0).validate(), err(anything()));
    assert_that!(
        ProfilePatch::new().monthly_spend(f64::INFINITY).validate(),
        err(anything())
    );
    assert_that!(ProfilePatch::new().income(0.0).validate(), ok(anything()));
}
