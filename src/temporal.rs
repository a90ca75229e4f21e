// Temporal Model - creation and update dates
//
// Two distinct times:
// 1. Creation Time: When the entity came into existence
// 2. Update Time: When its values last changed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// MIXIN TRAITS
// ============================================================================

/// Entity which records when it was created.
pub trait WithCreationDate {
    fn creation_date(&self) -> Option<DateTime<Utc>>;

    fn set_creation_date(&mut self, creation_date: Option<DateTime<Utc>>);
}

/// Entity which records when it was created and last updated.
pub trait WithUpdateDate: WithCreationDate {
    fn update_date(&self) -> Option<DateTime<Utc>>;

    fn set_update_date(&mut self, update_date: Option<DateTime<Utc>>);

    /// Mark as updated now
    fn touch(&mut self) {
        self.set_update_date(Some(Utc::now()));
    }
}

// ============================================================================
// TIMESTAMPS
// ============================================================================

/// Creation / update dates, embeddable in any entity.
///
/// Both dates are absent until set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub creation_date: Option<DateTime<Utc>>,
    pub update_date: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Timestamps for an entity created right now
    pub fn now() -> Self {
        let now = Utc::now();
        Timestamps {
            creation_date: Some(now),
            update_date: Some(now),
        }
    }

    /// Mark as updated
    pub fn touch(&mut self) {
        self.update_date = Some(Utc::now());
    }

    /// Check if the entity changed after it was created
    pub fn is_modified(&self) -> bool {
        match (self.creation_date, self.update_date) {
            (Some(created), Some(updated)) => updated > created,
            (None, Some(_)) => true,
            _ => false,
        }
    }
}

impl WithCreationDate for Timestamps {
    fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    fn set_creation_date(&mut self, creation_date: Option<DateTime<Utc>>) {
        self.creation_date = creation_date;
    }
}

impl WithUpdateDate for Timestamps {
    fn update_date(&self) -> Option<DateTime<Utc>> {
        self.update_date
    }

    fn set_update_date(&mut self, update_date: Option<DateTime<Utc>>) {
        self.update_date = update_date;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_default_absent() {
        let time = Timestamps::default();

        assert!(time.creation_date().is_none());
        assert!(time.update_date().is_none());
        assert!(!time.is_modified());
    }

    #[test]
    fn test_timestamps_now() {
        let time = Timestamps::now();

        assert!(time.creation_date.is_some());
        assert_eq!(time.creation_date, time.update_date);
        assert!(!time.is_modified());
    }

    #[test]
    fn test_timestamps_touch() {
        let mut time = Timestamps::now();

        std::thread::sleep(std::time::Duration::from_millis(10));
        time.touch();

        assert!(time.is_modified());
        assert!(time.update_date > time.creation_date);
    }

    #[test]
    fn test_explicit_dates() {
        let mut time = Timestamps::default();
        let creation_date = Utc::now();
        let update_date = Utc::now();

        time.set_creation_date(Some(creation_date));
        time.set_update_date(Some(update_date));

        assert_eq!(time.creation_date(), Some(creation_date));
        assert_eq!(time.update_date(), Some(update_date));
    }
}
