use crate::roster::{Student, COLUMNS};

/// True when any cell of the row contains the filter text,
/// case-insensitively. An empty filter matches every row.
pub fn row_matches(student: &Student, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    COLUMNS
        .iter()
        .any(|&column| student.cell_text(column).to_lowercase().contains(&needle))
}

/// Indices of the roster rows the current filter leaves visible, in roster
/// order. Hidden rows stay in the roster; only the rendering skips them.
pub fn visible_rows(students: &[Student], filter: &str) -> Vec<usize> {
    students
        .iter()
        .enumerate()
        .filter(|(_, student)| row_matches(student, filter))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_roster;

    #[test]
    fn test_empty_filter_shows_all_rows() {
        let students = demo_roster();
        assert_eq!(visible_rows(&students, "").len(), students.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let students = demo_roster();
        let lower = visible_rows(&students, "aarav");
        let upper = visible_rows(&students, "AARAV");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_filter_matches_any_cell() {
        let students = demo_roster();
        // Room numbers are cells too.
        let by_room = visible_rows(&students, "b-2");
        assert_eq!(by_room.len(), 3);
    }

    #[test]
    fn test_filter_hides_rows_without_the_substring() {
        let students = demo_roster();
        for &i in &visible_rows(&students, "khan") {
            assert!(students[i].name.to_lowercase().contains("khan"));
        }
        assert!(visible_rows(&students, "no such student").is_empty());
    }
}
