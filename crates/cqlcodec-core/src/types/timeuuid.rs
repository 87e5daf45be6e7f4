use std::fmt::{self, Display};
use uuid::Uuid;

///
/// TimeUuid
///
/// A UUID known to carry the time-based version nibble.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct TimeUuid(Uuid);

impl TimeUuid {
    pub const VERSION: usize = 1;

    /// Wrap a UUID, or return the version it actually carries.
    pub fn try_from_uuid(uuid: Uuid) -> Result<Self, usize> {
        match uuid.get_version_num() {
            Self::VERSION => Ok(Self(uuid)),
            found => Err(found),
        }
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Display for TimeUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl From<TimeUuid> for Uuid {
    fn from(value: TimeUuid) -> Self {
        value.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_one_is_accepted() {
        let uuid = Uuid::parse_str("50554d6e-29bb-11e5-b345-feff819cdc9f").unwrap();
        let timeuuid = TimeUuid::try_from_uuid(uuid).expect("v1 uuid");
        assert_eq!(timeuuid.to_string(), "50554d6e-29bb-11e5-b345-feff819cdc9f");
        assert_eq!(Uuid::from(timeuuid), uuid);
    }

    #[test]
    fn other_versions_report_what_they_carry() {
        let v4 = Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();
        assert_eq!(TimeUuid::try_from_uuid(v4), Err(4));
        assert_eq!(TimeUuid::try_from_uuid(Uuid::nil()), Err(0));
    }
}
