/// What [`SessionStore::hydrate`](crate::SessionStore::hydrate) found.
///
/// Hydration never fails: every problem below leaves the session empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrateOutcome {
    /// A persisted user was loaded into memory.
    pub restored: bool,
    /// Present if a record exists but could not be used.
    pub corruption_error: Option<String>,
    /// Present if storage could not be read at all.
    pub read_error: Option<String>,
}

impl HydrateOutcome {
    pub(crate) fn restored() -> Self {
        Self {
            restored: true,
            ..Self::default()
        }
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn corrupted(message: String) -> Self {
        Self {
            corruption_error: Some(message),
            ..Self::default()
        }
    }

    pub(crate) fn unreadable(message: String) -> Self {
        Self {
            read_error: Some(message),
            ..Self::default()
        }
    }
}
