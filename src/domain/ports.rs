use crate::domain::model::{AddressBook, PrintResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
}

/// Destination for rendered contact lines. Stdout in production, an
/// in-memory buffer in tests.
pub trait Sink: Send + Sync {
    fn emit(&self, lines: &[String]) -> impl std::future::Future<Output = Result<usize>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<AddressBook>;
    async fn transform(&self, book: AddressBook) -> Result<PrintResult>;
    async fn load(&self, result: PrintResult) -> Result<usize>;
}
