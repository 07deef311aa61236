use crate::{CoreError, ProfilePatch, UserProfile};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

fn sample_profile() -> UserProfile {
    UserProfile {
        id: "u1".into(),
        name: "A".into(),
        email: "a@example.com".into(),
        phone: Some("555-0100".into()),
        avatar: None,
        is_active: true,
        last_login_at: None,
        income: 0.0,
        monthly_spend: 120.0,
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn given_backend_json_when_deserialize_then_maps_camel_case_and_underscore_id() {
    let json = r#"{
        "_id": "65f0c0ffee",
        "name": "Asha",
        "email": "asha@example.com",
        "phone": "9876543210",
        "avatar": null,
        "isActive": true,
        "lastLoginAt": "2025-01-05T10:00:00.000Z",
        "income": 50000,
        "monthlySpend": 12000.5,
        "__v": 0
    }"#;

    let profile: UserProfile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.id, "65f0c0ffee");
    assert_eq!(profile.name, "Asha");
    assert_eq!(profile.phone.as_deref(), Some("9876543210"));
    assert!(profile.avatar.is_none());
    assert!(profile.is_active);
    assert!(profile.last_login_at.is_some());
    assert_eq!(profile.income, 50000.0);
    assert_eq!(profile.monthly_spend, 12000.5);
}

#[test]
fn given_nulls_and_missing_fields_when_deserialize_then_defaults_apply() {
    let json = r#"{"_id":"u2","email":"b@example.com","income":null,"name":null}"#;

    let profile: UserProfile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.name, "");
    assert_eq!(profile.income, 0.0);
    assert_eq!(profile.monthly_spend, 0.0);
    assert!(!profile.is_active);
    assert!(profile.phone.is_none());
}

#[test]
fn given_profile_when_serialize_then_uses_backend_field_names() {
    let json = serde_json::to_value(sample_profile()).unwrap();

    assert_eq!(json["_id"], "u1");
    assert_eq!(json["isActive"], true);
    assert_eq!(json["monthlySpend"], 120.0);
    assert!(json.get("avatar").unwrap().is_null());
    assert!(json.get("id").is_none());
    assert!(json.get("lastLoginAt").is_none());
}

#[test]
fn given_missing_id_when_deserialize_then_profile_fails_validation() {
    let profile: UserProfile = serde_json::from_str(r#"{"email":"c@example.com"}"#).unwrap();

    assert_that!(profile.validate(), err(anything()));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn given_complete_profile_when_validate_then_ok() {
    assert_that!(sample_profile().validate(), ok(anything()));
}

#[test]
fn given_blank_id_when_validate_then_invalid_profile() {
    let mut profile = sample_profile();
    profile.id = "   ".into();

    match profile.validate() {
        Err(CoreError::InvalidProfile { message, .. }) => {
            assert!(message.contains("identifier"));
        }
        other => panic!("Expected InvalidProfile, got {other:?}"),
    }
}

#[test]
fn given_negative_income_when_validate_then_invalid_profile() {
    let mut profile = sample_profile();
    profile.income = -1.0;

    assert_that!(profile.validate(), err(anything()));
}

#[test]
fn given_nan_spend_when_validate_then_invalid_profile() {
    let mut profile = sample_profile();
    profile.monthly_spend = f64::NAN;

    assert_that!(profile.validate(), err(anything()));
}

// =============================================================================
// Onboarding and display
// =============================================================================

#[test]
fn given_zero_income_when_needs_onboarding_then_true() {
    assert!(sample_profile().needs_onboarding());
}

#[test]
fn given_positive_income_when_needs_onboarding_then_false() {
    let mut profile = sample_profile();
    profile.income = 50000.0;

    assert!(!profile.needs_onboarding());
}

#[test]
fn given_blank_name_when_display_name_then_falls_back() {
    let mut profile = sample_profile();
    profile.name = "  ".into();

    assert_eq!(profile.display_name(), "User");
}

// =============================================================================
// Merge
// =============================================================================

#[test]
fn given_patch_when_merged_then_only_patched_fields_change() {
    let before = sample_profile();
    let patch = ProfilePatch::new().income(50000.0).name("A2");

    let after = before.merged(&patch);

    assert_eq!(after.id, "u1");
    assert_eq!(after.name, "A2");
    assert_eq!(after.income, 50000.0);
    assert_eq!(after.email, before.email);
    assert_eq!(after.phone, before.phone);
    assert_eq!(after.monthly_spend, before.monthly_spend);
    assert_eq!(after.is_active, before.is_active);
}

#[test]
fn given_empty_patch_when_merged_then_profile_unchanged() {
    let before = sample_profile();

    assert_eq!(before.merged(&ProfilePatch::new()), before);
}

#[test]
fn given_avatar_clear_when_merged_then_avatar_removed() {
    let mut before = sample_profile();
    before.avatar = Some("avatars/1.png".into());

    let after = before.merged(&ProfilePatch::new().avatar(None));

    assert!(after.avatar.is_none());
}
