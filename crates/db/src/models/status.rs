//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

use serde::Serialize;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Course lifecycle status (`course_statuses`).
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Draft = 1,
    Published = 2,
    Archived = 3,
}

impl CourseStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Map a database status ID back to the enum. Unknown IDs yield `None`.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Draft),
            2 => Some(Self::Published),
            3 => Some(Self::Archived),
            _ => None,
        }
    }

    /// Name as stored in `course_statuses.name`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl From<CourseStatus> for StatusId {
    fn from(value: CourseStatus) -> Self {
        value as StatusId
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_status_ids_match_seed_data() {
        assert_eq!(CourseStatus::Draft.id(), 1);
        assert_eq!(CourseStatus::Published.id(), 2);
        assert_eq!(CourseStatus::Archived.id(), 3);
    }

    #[test]
    fn course_status_round_trips_through_id() {
        for status in [
            CourseStatus::Draft,
            CourseStatus::Published,
            CourseStatus::Archived,
        ] {
            assert_eq!(CourseStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(CourseStatus::from_id(0), None);
        assert_eq!(CourseStatus::from_id(4), None);
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = CourseStatus::Published.into();
        assert_eq!(id, 2);
        assert_eq!(CourseStatus::Archived.as_str(), "archived");
    }
}
