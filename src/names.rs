pub const GET_QUESTIONS_URL: &str = "/get_questions";
pub const UPLOAD_QUESTIONS_URL: &str = "/upload_questions";
pub const CHECK_ANSWER_URL: &str = "/check_answer";
pub const CLEAR_QUESTIONS_URL: &str = "/clear_questions";

pub const UPLOAD_FILE_FIELD: &str = "file";

pub const DEFAULT_DATABASE_PATH: &str = "questions.db";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// Import headers: localized first, canonical second.
pub const QUESTION_COLUMNS: &[&str] = &["題目", "question"];
pub const CORRECT_ANSWER_COLUMNS: &[&str] = &["正確答案", "correct_answer"];
pub const EXPLANATION_COLUMNS: &[&str] = &["解釋", "explanation"];
pub const OPTION_COLUMNS: [&[&str]; 4] = [
    &["選項A", "option_a"],
    &["選項B", "option_b"],
    &["選項C", "option_c"],
    &["選項D", "option_d"],
];
pub const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];
