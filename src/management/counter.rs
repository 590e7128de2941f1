use std::{io::Error, path::PathBuf};

#[derive(Debug)]
pub enum CounterError {
    IoError(Error),
    CriticalError(String),
}

impl From<Error> for CounterError {
    fn from(err: Error) -> Self {
        CounterError::IoError(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunParity {
    Odd,
    Even,
}

impl RunParity {
    pub fn from_counter(counter: u64) -> RunParity {
        if counter % 2 == 0 {
            RunParity::Even
        } else {
            RunParity::Odd
        }
    }
}

pub fn encode_counter(counter: u64) -> String {
    counter.to_string()
}

pub fn decode_counter(content: &str) -> Result<u64, CounterError> {
    content
        .trim()
        .parse()
        .map_err(|e| CounterError::CriticalError(format!("invalid counter file: {}", e)))
}

pub struct RunCounterManager {
    counter: u64,
}

impl RunCounterManager {
    pub fn new(counter: u64) -> Self {
        RunCounterManager { counter }
    }

    pub async fn load() -> Result<Self, CounterError> {
        let path = Self::counter_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| CounterError::IoError(e))?;
        Ok(Self {
            counter: decode_counter(&content)?,
        })
    }

    pub async fn persist(&self) -> Result<(), CounterError> {
        let path = Self::counter_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| CounterError::IoError(e))?;
        }

        async_fs::write(path, encode_counter(self.counter))
            .await
            .map_err(|e| CounterError::IoError(e))
    }

    pub fn increment(&mut self) {
        self.counter += 1;
    }

    pub fn current(&self) -> u64 {
        self.counter
    }

    pub fn parity(&self) -> RunParity {
        RunParity::from_counter(self.counter)
    }

    fn counter_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("scroplcli/state/counter.txt");
        path
    }
}
