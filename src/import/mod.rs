//! Turns an uploaded CSV or XLSX question sheet into [`NewQuestion`]s.
//!
//! Headers may use the localized names (`題目`, `選項A`, `正確答案`, ...) or
//! their canonical equivalents (`question`, `option_a`, `correct_answer`, ...).
//! The correct-answer column holds a letter which is replaced by the text of
//! the option it points at.

mod delimited;
mod workbook;

use std::fmt;
use std::path::Path;

use crate::models::{NewQuestion, Options};
use crate::names;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
}

impl FileFormat {
    /// Pick the format from a file name's extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self, ImportError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(FileFormat::Csv),
            Some("xlsx") => Ok(FileFormat::Xlsx),
            _ => Err(ImportError::UnsupportedFormat),
        }
    }
}

/// What to do when the correct-answer cell isn't one of `A`..`D`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerPolicy {
    /// Reject the whole batch.
    #[default]
    Strict,
    /// Fall back to the first option.
    FirstOption,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ImportError {
    UnsupportedFormat,
    Unreadable(String),
    MissingColumn(&'static str),
    EmptyQuestion { row: usize },
    InvalidAnswer { row: usize, value: String },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::UnsupportedFormat => write!(f, "Invalid file format"),
            ImportError::Unreadable(e) => write!(f, "Failed to read file: {e}"),
            ImportError::MissingColumn(column) => write!(f, "Missing column: {column}"),
            ImportError::EmptyQuestion { row } => {
                write!(f, "Row {row}: question text is empty")
            }
            ImportError::InvalidAnswer { row, value } => write!(
                f,
                "Row {row}: correct answer {value:?} is not one of A, B, C, D"
            ),
        }
    }
}

impl std::error::Error for ImportError {}

/// Parsed sheet: header names plus raw cell text.
#[derive(Debug, Default)]
pub(crate) struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Positions of the recognized columns within a [`Table`].
struct Columns {
    question: usize,
    correct_answer: Option<usize>,
    explanation: Option<usize>,
    options: [Option<usize>; 4],
}

impl Columns {
    fn locate(headers: &[String]) -> Result<Self, ImportError> {
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|h| aliases.iter().any(|alias| *alias == h.trim()))
        };

        Ok(Columns {
            question: find(names::QUESTION_COLUMNS)
                .ok_or(ImportError::MissingColumn("question"))?,
            correct_answer: find(names::CORRECT_ANSWER_COLUMNS),
            explanation: find(names::EXPLANATION_COLUMNS),
            options: names::OPTION_COLUMNS.map(find),
        })
    }
}

pub fn parse_questions(
    file_name: &str,
    bytes: &[u8],
    policy: AnswerPolicy,
) -> Result<Vec<NewQuestion>, ImportError> {
    let table = match FileFormat::from_file_name(file_name)? {
        FileFormat::Csv => delimited::read_table(bytes)?,
        FileFormat::Xlsx => workbook::read_table(bytes)?,
    };
    tracing::debug!(
        file_name,
        columns = ?table.headers,
        rows = table.rows.len(),
        "parsed upload"
    );

    normalize(&table, policy)
}

pub(crate) fn normalize(
    table: &Table,
    policy: AnswerPolicy,
) -> Result<Vec<NewQuestion>, ImportError> {
    let columns = Columns::locate(&table.headers)?;

    let mut questions = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        // 1-based, counting the header line, so it matches what a spreadsheet shows.
        let line = idx + 2;
        let cell = move |col: Option<usize>| {
            col.and_then(|i| row.get(i))
                .map(String::as_str)
                .unwrap_or_default()
        };

        let question = cell(Some(columns.question)).trim();
        if question.is_empty() {
            return Err(ImportError::EmptyQuestion { row: line });
        }

        let options: Options = columns.options.map(|col| cell(col).to_string());
        let letter = cell(columns.correct_answer);
        let answer_idx = match (answer_index(letter), policy) {
            (Some(i), _) => i,
            (None, AnswerPolicy::FirstOption) => 0,
            (None, AnswerPolicy::Strict) => {
                return Err(ImportError::InvalidAnswer {
                    row: line,
                    value: letter.to_string(),
                })
            }
        };

        questions.push(NewQuestion {
            question: question.to_string(),
            correct_answer: options[answer_idx].clone(),
            options,
            explanation: cell(columns.explanation).to_string(),
        });
    }

    Ok(questions)
}

fn answer_index(letter: &str) -> Option<usize> {
    let letter = letter.trim().to_ascii_uppercase();
    names::OPTION_LETTERS.iter().position(|l| *l == letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    const LOCALIZED: &[&str] = &[
        "題目", "選項A", "選項B", "選項C", "選項D", "正確答案", "解釋",
    ];

    #[test]
    fn maps_localized_headers_and_resolves_letter() {
        let t = table(LOCALIZED, &[&["2+2?", "3", "4", "5", "6", "B", "basic math"]]);
        let questions = normalize(&t, AnswerPolicy::Strict).unwrap();

        assert_eq!(
            questions,
            vec![NewQuestion {
                question: "2+2?".to_string(),
                options: ["3", "4", "5", "6"].map(String::from),
                correct_answer: "4".to_string(),
                explanation: "basic math".to_string(),
            }]
        );
    }

    #[test]
    fn accepts_canonical_headers_in_any_order() {
        let t = table(
            &[
                "explanation",
                "correct_answer",
                "option_d",
                "option_c",
                "option_b",
                "option_a",
                "question",
            ],
            &[&["", "d", "Rome", "Paris", "Berlin", "Madrid", "Capital of Italy?"]],
        );
        let questions = normalize(&t, AnswerPolicy::Strict).unwrap();

        assert_eq!(
            questions[0].options,
            ["Madrid", "Berlin", "Paris", "Rome"].map(String::from)
        );
        assert_eq!(questions[0].correct_answer, "Rome");
        assert_eq!(questions[0].explanation, "");
    }

    #[test]
    fn missing_question_column_is_rejected() {
        let t = table(&["選項A", "正確答案"], &[&["x", "A"]]);
        assert_eq!(
            normalize(&t, AnswerPolicy::Strict).unwrap_err(),
            ImportError::MissingColumn("question")
        );
        assert_eq!(
            ImportError::MissingColumn("question").to_string(),
            "Missing column: question"
        );
    }

    #[test]
    fn missing_option_columns_become_empty_strings() {
        let t = table(
            &["題目", "選項A", "選項B", "正確答案"],
            &[&["Yes or no?", "yes", "no", "A"]],
        );
        let questions = normalize(&t, AnswerPolicy::Strict).unwrap();

        assert_eq!(questions[0].options, ["yes", "no", "", ""].map(String::from));
        assert_eq!(questions[0].correct_answer, "yes");
    }

    #[test]
    fn unknown_letter_is_rejected_when_strict() {
        let t = table(LOCALIZED, &[&["Q", "a", "b", "c", "d", "E", ""]]);
        assert_eq!(
            normalize(&t, AnswerPolicy::Strict).unwrap_err(),
            ImportError::InvalidAnswer {
                row: 2,
                value: "E".to_string()
            }
        );
    }

    #[test]
    fn unknown_or_missing_letter_falls_back_to_first_option_when_lenient() {
        let t = table(
            LOCALIZED,
            &[
                &["Q1", "a", "b", "c", "d", "E", ""],
                &["Q2", "w", "x", "y", "z", "", ""],
            ],
        );
        let questions = normalize(&t, AnswerPolicy::FirstOption).unwrap();

        assert_eq!(questions[0].correct_answer, "a");
        assert_eq!(questions[1].correct_answer, "w");
    }

    #[test]
    fn letter_is_trimmed_and_case_insensitive() {
        assert_eq!(answer_index(" c "), Some(2));
        assert_eq!(answer_index("a"), Some(0));
        assert_eq!(answer_index("AB"), None);
        assert_eq!(answer_index(""), None);
    }

    #[test]
    fn blank_rows_are_skipped() {
        let t = table(
            LOCALIZED,
            &[
                &["", "", "", "", "", "", ""],
                &["Q", "a", "b", "c", "d", "A", ""],
            ],
        );
        let questions = normalize(&t, AnswerPolicy::Strict).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn empty_question_text_is_rejected() {
        let t = table(
            LOCALIZED,
            &[
                &["Q", "a", "b", "c", "d", "A", ""],
                &["  ", "a", "b", "c", "d", "A", ""],
            ],
        );
        assert_eq!(
            normalize(&t, AnswerPolicy::Strict).unwrap_err(),
            ImportError::EmptyQuestion { row: 3 }
        );
    }

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(FileFormat::from_file_name("bank.csv"), Ok(FileFormat::Csv));
        assert_eq!(FileFormat::from_file_name("Bank.XLSX"), Ok(FileFormat::Xlsx));
        assert_eq!(
            FileFormat::from_file_name("notes.txt"),
            Err(ImportError::UnsupportedFormat)
        );
        assert_eq!(
            FileFormat::from_file_name("csv"),
            Err(ImportError::UnsupportedFormat)
        );
    }

    #[test]
    fn parses_csv_end_to_end() {
        let csv = "題目,選項A,選項B,選項C,選項D,正確答案,解釋\n2+2?,3,4,5,6,B,basic math\n";
        let questions =
            parse_questions("bank.csv", csv.as_bytes(), AnswerPolicy::Strict).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "4");
    }

    #[test]
    fn unsupported_extension_is_rejected_before_parsing() {
        let err = parse_questions("bank.txt", b"\xff\xff", AnswerPolicy::Strict).unwrap_err();
        assert_eq!(err, ImportError::UnsupportedFormat);
    }
}
