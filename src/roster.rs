use chrono::{DateTime, TimeZone, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One resident of the hostel. `username` is unique and serves as the
/// stable identity for rows while the table is resorted or filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub fees_paid: bool,
    #[serde(default = "Utc::now")]
    pub joined: DateTime<Utc>,
}

impl Student {
    pub fn cell_text(&self, column: Column) -> String {
        match column {
            Column::Name => self.name.clone(),
            Column::Room => self.room.clone(),
            Column::Phone => self.phone.clone(),
            Column::Joined => self.joined.format("%Y-%m-%d").to_string(),
            Column::Fees => self.fees_label().to_string(),
        }
    }

    pub fn fees_label(&self) -> &'static str {
        if self.fees_paid {
            "Paid"
        } else {
            "Due"
        }
    }
}

/// Sortable table columns. Every data row has a textual cell for every
/// column, so a `Column` is always a valid cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Column {
    Name,
    Room,
    Phone,
    Joined,
    Fees,
}

pub const COLUMNS: [Column; 5] = [
    Column::Name,
    Column::Room,
    Column::Phone,
    Column::Joined,
    Column::Fees,
];

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Room => "Room",
            Column::Phone => "Phone",
            Column::Joined => "Joined",
            Column::Fees => "Fees",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("roster file contains no students")]
    Empty,
}

/// Loads a roster from a JSON array of students.
pub fn load_roster(path: &Path) -> Result<Vec<Student>, RosterError> {
    let content = fs::read_to_string(path)?;
    let students: Vec<Student> = serde_json::from_str(&content)?;
    if students.is_empty() {
        return Err(RosterError::Empty);
    }
    Ok(students)
}

/// Built-in roster used when no `--roster` file is given.
pub fn demo_roster() -> Vec<Student> {
    vec![
        demo_student("Divya Nair", "divya", "B-202", "98100-22334", true, 2025, 5, 30),
        demo_student("Aarav Sharma", "aarav", "A-101", "98100-11223", false, 2025, 7, 2),
        demo_student("Farhan Ali", "farhan", "C-301", "98100-88990", false, 2025, 6, 5),
        demo_student("Bilal Khan", "bilal", "A-102", "98100-44556", true, 2025, 6, 18),
        demo_student("Gauri Iyer", "gauri", "C-302", "98100-33445", true, 2025, 4, 12),
        demo_student("Esha Patel", "esha", "B-203", "98100-55667", false, 2025, 7, 21),
        demo_student("Chitra Rao", "chitra", "B-201", "98100-77889", false, 2025, 7, 9),
    ]
}

fn demo_student(
    name: &str,
    username: &str,
    room: &str,
    phone: &str,
    fees_paid: bool,
    year: i32,
    month: u32,
    day: u32,
) -> Student {
    Student {
        name: name.to_string(),
        username: username.to_string(),
        room: room.to_string(),
        phone: phone.to_string(),
        fees_paid,
        joined: Utc
            .with_ymd_and_hms(year, month, day, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cell_text_covers_every_column() {
        let student = demo_student("Test", "test", "A-1", "555", true, 2025, 1, 1);
        assert_eq!(student.cell_text(Column::Name), "Test");
        assert_eq!(student.cell_text(Column::Room), "A-1");
        assert_eq!(student.cell_text(Column::Phone), "555");
        assert_eq!(student.cell_text(Column::Joined), "2025-01-01");
        assert_eq!(student.cell_text(Column::Fees), "Paid");
    }

    #[test]
    fn test_demo_roster_has_unique_usernames() {
        let students = demo_roster();
        assert!(!students.is_empty());
        let mut usernames: Vec<_> = students.iter().map(|s| s.username.clone()).collect();
        usernames.sort();
        usernames.dedup();
        assert_eq!(usernames.len(), students.len());
    }

    #[test]
    fn test_load_roster_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Test", "username": "test", "room": "A-1", "phone": "555", "fees_paid": false, "joined": "2025-01-01T09:00:00Z"}}]"#
        )
        .unwrap();

        let students = load_roster(file.path()).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Test");
        assert!(!students[0].fees_paid);
    }

    #[test]
    fn test_load_roster_rejects_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        assert!(matches!(load_roster(file.path()), Err(RosterError::Empty)));
    }

    #[test]
    fn test_load_roster_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(load_roster(file.path()), Err(RosterError::Parse(_))));
    }
}
