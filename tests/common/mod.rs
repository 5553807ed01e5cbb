#![allow(dead_code)]

use quizbank::db::Db;
use quizbank::models::NewQuestion;

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quizbank_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    Db::new(&path).await.expect("failed to create test database")
}

pub fn question(text: &str, options: [&str; 4], correct: usize, explanation: &str) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        options: options.map(String::from),
        correct_answer: options[correct].to_string(),
        explanation: explanation.to_string(),
    }
}

/// A workbook holding `rows` under the localized headers, numbers written as numeric cells.
pub fn workbook(rows: &[[&str; 7]]) -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    let headers = ["題目", "選項A", "選項B", "選項C", "選項D", "正確答案", "解釋"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let (row, col) = (row as u32 + 1, col as u16);
            match cell.parse::<f64>() {
                Ok(n) => sheet.write_number(row, col, n).unwrap(),
                Err(_) => sheet.write_string(row, col, *cell).unwrap(),
            };
        }
    }
    workbook.save_to_buffer().unwrap()
}
