// Bot replies. All texts use Telegram's legacy Markdown.

pub const WELCOME: &str = "🎓 Welcome to the *UNIVERSITY FINDER*, a tool built to help students find suitable U.S. universities based on their academic profile.\n\nLet's get started with a few quick questions to help guide your future!\n\nPlease enter your *Grade 10 GPA* (out of 4.0):";

pub const ASK_GRADE_11: &str = "✅ Now enter your *Grade 11 GPA*:";

pub const ASK_GRADE_12: &str = "✅ Now enter your *Grade 12 GPA*:";

pub const ASK_IELTS: &str = "✅ Enter your *IELTS score* (5.0 to 9.0):";

pub const INVALID_IELTS: &str = "❗ Please enter a valid IELTS score between 5.0 and 9.0.";

pub const ASK_SAT: &str = "✅ SAT is optional. Enter your SAT score or type 'NA':";

pub const ASK_MAJOR: &str = "✅ Select your intended *major* or choose 'Other' to type manually:";

pub const CANCELLED: &str = "❌ Cancelled. Type /start to begin again.";

pub const LOOKUP_FAILED: &str = "⚠️ Something went wrong. Please try again later.";

/// Label of the free-text keyboard button
pub const OTHER_MAJOR: &str = "Other";

/// Only the first ten are offered on the keyboard
pub const COMMON_MAJORS: [&str; 20] = [
    "Computer Science",
    "Engineering",
    "Business",
    "Finance",
    "Psychology",
    "Biology",
    "Nursing",
    "Education",
    "Marketing",
    "Economics",
    "Sociology",
    "Political Science",
    "Environmental Science",
    "Mathematics",
    "Chemistry",
    "Physics",
    "Public Health",
    "Accounting",
    "Hospitality",
    "Architecture",
];

const KEYBOARD_MAJORS: usize = 10;

/// Button labels for the major step
pub fn major_keyboard_labels() -> Vec<&'static str> {
    COMMON_MAJORS
        .iter()
        .take(KEYBOARD_MAJORS)
        .copied()
        .chain(std::iter::once(OTHER_MAJOR))
        .collect()
}
