use crate::core::{Sink, Storage};
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    async fn emit(&self, lines: &[String]) -> Result<usize> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(lines.len())
    }
}
