
use bp_core::UserProfile;

pub(crate) fn profile(income: f64) -> UserProfile {
    UserProfile {
        name: "Asha".into(),
        income,
        monthly_spend: 12_000.0,
        ..UserProfile::new("u1", "asha@example.com")
    }
}
