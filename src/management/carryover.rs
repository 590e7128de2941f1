use std::{io::Error, path::PathBuf};

use crate::matching;

#[derive(Debug)]
pub enum CarryOverError {
    IoError(Error),
    CriticalError(String),
}

impl From<Error> for CarryOverError {
    fn from(err: Error) -> Self {
        CarryOverError::IoError(err)
    }
}

pub fn encode_records(records: &[String]) -> String {
    let mut content = String::new();
    for record in records {
        content.push_str(record);
        content.push('\n');
    }
    content
}

pub fn decode_records(content: &str) -> Vec<String> {
    let mut records: Vec<String> = content
        .split('\n')
        .map(|line| line.trim_end().to_string())
        .collect();
    // the writer terminates every record with a newline, so the final
    // split element is an artifact and never a record
    records.pop();
    records
}

pub struct CarryOverManager {
    records: Vec<String>,
}

impl CarryOverManager {
    pub fn new(records: Vec<String>) -> Self {
        CarryOverManager { records }
    }

    pub async fn load() -> Result<Self, CarryOverError> {
        let path = Self::carry_over_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| CarryOverError::IoError(e))?;
        Ok(Self {
            records: decode_records(&content),
        })
    }

    pub async fn persist(&self) -> Result<(), CarryOverError> {
        let path = Self::carry_over_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| CarryOverError::IoError(e))?;
        }

        async_fs::write(path, encode_records(&self.records))
            .await
            .map_err(|e| CarryOverError::IoError(e))
    }

    pub fn records(&self) -> &Vec<String> {
        &self.records
    }

    pub fn parsed(&self) -> Result<Vec<(String, String)>, CarryOverError> {
        self.records
            .iter()
            .map(|record| {
                matching::parse_record(record).ok_or_else(|| {
                    CarryOverError::CriticalError(format!(
                        "malformed carry-over record: {}",
                        record
                    ))
                })
            })
            .collect()
    }

    fn carry_over_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("scroplcli/state/last_week.txt");
        path
    }
}
