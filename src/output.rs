use crate::roster::Student;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON document produced by `hostelman list -F json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterListing {
    pub timestamp: DateTime<Utc>,
    pub student_count: usize,
    pub paid_count: usize,
    pub students: Vec<Student>,
}

impl RosterListing {
    pub fn new(students: Vec<Student>) -> Self {
        let paid_count = students.iter().filter(|s| s.fees_paid).count();
        Self {
            timestamp: Utc::now(),
            student_count: students.len(),
            paid_count,
            students,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_roster;

    #[test]
    fn test_listing_counts_paid_students() {
        let students = demo_roster();
        let expected = students.iter().filter(|s| s.fees_paid).count();

        let listing = RosterListing::new(students);
        assert_eq!(listing.paid_count, expected);
        assert_eq!(listing.student_count, listing.students.len());
    }

    #[test]
    fn test_listing_round_trips_through_json() {
        let listing = RosterListing::new(demo_roster());
        let json = serde_json::to_string_pretty(&listing).unwrap();
        let back: RosterListing = serde_json::from_str(&json).unwrap();
        assert_eq!(back.student_count, listing.student_count);
    }
}
