use crate::core::matcher::MatchResult;
use crate::models::UniversityRecord;

pub const NO_MATCHES: &str = "❗ No matching universities found. Try another major.";

const HEADER: &str = "🎓 *Suggested Universities:*\n\n";

const DIVIDER: &str = "──────────────";

const FOOTER: &str = "\nMaintained by KUSHAL, empowering students 💙";

/// Render a lookup result as a single Markdown message
pub fn format_matches(result: &MatchResult) -> String {
    if result.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut reply = String::from(HEADER);
    for record in &result.matches {
        reply.push_str(&format_record(record));
    }
    reply.push_str(FOOTER);
    reply
}

fn format_record(record: &UniversityRecord) -> String {
    format!(
        "🏫 {name}\n\
         📍 Location: {city}, {state}\n\
         📘 Major: {majors}\n\
         📊 GPA: {gpa} | 🧠 SAT: {sat}\n\
         🗣️ English: {english} | 🏛️ Type: {kind}\n\
         {DIVIDER}\n",
        name = bold(&record.name),
        city = escape_markdown(&record.city),
        state = escape_markdown(&record.state),
        majors = escape_markdown(&record.majors),
        gpa = escape_markdown(&record.gpa_display),
        sat = escape_markdown(&record.sat_requirement),
        english = escape_markdown(&record.english_proficiency),
        kind = escape_markdown(&record.institution_type),
    )
}

fn is_entity_char(c: char) -> bool {
    matches!(c, '_' | '*' | '`' | '[')
}

/// Escape the legacy Markdown entity characters
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if is_entity_char(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Bold `text` in legacy Markdown
///
/// Escapes are not allowed inside an entity, so the bold span is closed
/// before each escaped character and reopened after it.
pub fn bold(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut run = String::new();

    for c in text.chars() {
        if is_entity_char(c) {
            if !run.is_empty() {
                out.push('*');
                out.push_str(&run);
                out.push('*');
                run.clear();
            }
            out.push('\\');
            out.push(c);
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() {
        out.push('*');
        out.push_str(&run);
        out.push('*');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GpaRequirement;

    fn create_record(name: &str) -> UniversityRecord {
        UniversityRecord {
            name: name.to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            majors: "Biology, Chemistry".to_string(),
            gpa_display: "3.5".to_string(),
            gpa_requirement: GpaRequirement::Minimum(3.5),
            sat_requirement: "1250".to_string(),
            english_proficiency: "IELTS 6.5".to_string(),
            institution_type: "Public".to_string(),
        }
    }

    #[test]
    fn test_empty_result() {
        let result = MatchResult { matches: vec![], total_candidates: 10 };
        assert_eq!(format_matches(&result), NO_MATCHES);
    }

    #[test]
    fn test_record_block() {
        let result = MatchResult {
            matches: vec![create_record("Lone Star University")],
            total_candidates: 1,
        };

        let text = format_matches(&result);
        assert!(text.starts_with(HEADER));
        assert!(text.contains("🏫 *Lone Star University*\n"));
        assert!(text.contains("📍 Location: Austin, TX\n"));
        assert!(text.contains("📘 Major: Biology, Chemistry\n"));
        assert!(text.contains("📊 GPA: 3.5 | 🧠 SAT: 1250\n"));
        assert!(text.contains("🗣️ English: IELTS 6.5 | 🏛️ Type: Public\n"));
        assert!(text.ends_with(FOOTER));
    }

    #[test]
    fn test_one_divider_per_record() {
        let result = MatchResult {
            matches: vec![create_record("A"), create_record("B"), create_record("C")],
            total_candidates: 3,
        };
        assert_eq!(format_matches(&result).matches(DIVIDER).count(), 3);
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("St_Mary's *College*"), "St\\_Mary's \\*College\\*");
        assert_eq!(escape_markdown("[Main]"), "\\[Main]");
    }

    #[test]
    fn test_bold_reopens_around_escapes() {
        assert_eq!(bold("Lone Star"), "*Lone Star*");
        assert_eq!(bold("St_Mary's"), "*St*\\_*Mary's*");
        assert_eq!(bold("_A*"), "\\_*A*\\*");
        assert_eq!(bold(""), "");
    }

    #[test]
    fn test_entity_chars_in_name_stay_outside_bold() {
        let result = MatchResult {
            matches: vec![create_record("St_John's *Tech*")],
            total_candidates: 1,
        };

        let text = format_matches(&result);
        assert!(text.contains("🏫 *St*\\_*John's *\\**Tech*\\*\n"));
    }
}
