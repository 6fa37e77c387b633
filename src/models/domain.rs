use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Telegram user id of the person filling in the form
pub type UserId = i64;

/// Minimum GPA a university asks for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum GpaRequirement {
    /// No GPA threshold applies
    Any,
    Minimum(f64),
    /// Neither a number nor the wildcard marker. Never matches.
    Unparsed(String),
}

/// One row of the university dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    /// Free text, usually a comma separated list
    pub majors: String,
    pub gpa_requirement: GpaRequirement,
    /// Raw column text, shown to the user as-is
    pub gpa_display: String,
    pub sat_requirement: String,
    pub english_proficiency: String,
    pub institution_type: String,
}

/// SAT answer; display only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SatScore {
    Score(String),
    NotAvailable,
}

impl SatScore {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case("na") || text.eq_ignore_ascii_case("n/a") {
            SatScore::NotAvailable
        } else {
            SatScore::Score(text.to_string())
        }
    }
}

/// Conversation position of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Grade10,
    Grade11,
    Grade12,
    Ielts,
    Sat,
    Major,
    /// No active conversation; only a start command leaves this state
    End,
}

/// A validated answer for one step of the form
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Grade10(String),
    Grade11(String),
    Grade12(String),
    Ielts(f64),
    Sat(SatScore),
    Major(String),
}

/// Answers collected so far for one user
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeSession {
    pub user_id: UserId,
    pub state: ConversationState,
    pub grade_10: Option<String>,
    pub grade_11: Option<String>,
    pub grade_12: Option<String>,
    pub ielts: Option<f64>,
    pub sat: Option<SatScore>,
    pub major: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl IntakeSession {
    /// Empty session waiting for the grade 10 answer
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            state: ConversationState::Grade10,
            grade_10: None,
            grade_11: None,
            grade_12: None,
            ielts: None,
            sat: None,
            major: None,
            started_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, answer: Answer) {
        match answer {
            Answer::Grade10(v) => self.grade_10 = Some(v),
            Answer::Grade11(v) => self.grade_11 = Some(v),
            Answer::Grade12(v) => self.grade_12 = Some(v),
            Answer::Ielts(v) => self.ielts = Some(v),
            Answer::Sat(v) => self.sat = Some(v),
            Answer::Major(v) => self.major = Some(v),
        }
    }
}

/// Inputs the matcher needs from a finished session
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    pub major: String,
    pub grade_12_gpa: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sat_not_available() {
        assert_eq!(SatScore::parse("NA"), SatScore::NotAvailable);
        assert_eq!(SatScore::parse(" na "), SatScore::NotAvailable);
        assert_eq!(SatScore::parse("1350"), SatScore::Score("1350".to_string()));
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = IntakeSession::new(42);
        assert_eq!(session.state, ConversationState::Grade10);
        assert!(session.grade_10.is_none());
        assert!(session.ielts.is_none());
        assert!(session.major.is_none());
    }

    #[test]
    fn test_apply_answers() {
        let mut session = IntakeSession::new(1);
        session.apply(Answer::Grade12("3.6".to_string()));
        session.apply(Answer::Ielts(7.0));
        session.apply(Answer::Sat(SatScore::NotAvailable));

        assert_eq!(session.grade_12.as_deref(), Some("3.6"));
        assert_eq!(session.ielts, Some(7.0));
        assert_eq!(session.sat, Some(SatScore::NotAvailable));
    }
}
