use crate::models::{GpaRequirement, UniversityRecord};

/// Check if the record lists the requested major
///
/// Unanchored, case-insensitive substring containment. An empty major
/// matches every record and "art" matches "Pharmacy".
#[inline]
pub fn matches_major(record: &UniversityRecord, major: &str) -> bool {
    record
        .majors
        .to_lowercase()
        .contains(&major.to_lowercase())
}

/// Check if the user's GPA satisfies the record's requirement
#[inline]
pub fn meets_gpa_requirement(record: &UniversityRecord, gpa: f64) -> bool {
    match record.gpa_requirement {
        GpaRequirement::Any => true,
        GpaRequirement::Minimum(required) => required <= gpa,
        GpaRequirement::Unparsed(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(majors: &str, gpa: GpaRequirement) -> UniversityRecord {
        UniversityRecord {
            name: "Test University".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            majors: majors.to_string(),
            gpa_display: "3.0".to_string(),
            gpa_requirement: gpa,
            sat_requirement: "1200".to_string(),
            english_proficiency: "IELTS 6.5".to_string(),
            institution_type: "Public".to_string(),
        }
    }

    #[test]
    fn test_major_case_insensitive() {
        let record = create_test_record("computer science, engineering", GpaRequirement::Any);
        assert!(matches_major(&record, "Computer Science"));
        assert!(matches_major(&record, "ENGINEERING"));
        assert!(!matches_major(&record, "Biology"));
    }

    #[test]
    fn test_major_substring_quirks() {
        let record = create_test_record("Pharmacy, Nursing", GpaRequirement::Any);
        assert!(matches_major(&record, "arm"));
        assert!(matches_major(&record, ""));
    }

    #[test]
    fn test_gpa_minimum() {
        let record = create_test_record("Biology", GpaRequirement::Minimum(3.5));
        assert!(meets_gpa_requirement(&record, 3.6));
        assert!(meets_gpa_requirement(&record, 3.5));
        assert!(!meets_gpa_requirement(&record, 3.4));
    }

    #[test]
    fn test_gpa_wildcard_and_unparsed() {
        let any = create_test_record("Biology", GpaRequirement::Any);
        assert!(meets_gpa_requirement(&any, 0.0));

        let unparsed = create_test_record("Biology", GpaRequirement::Unparsed("high".to_string()));
        assert!(!meets_gpa_requirement(&unparsed, 4.0));
    }
}
