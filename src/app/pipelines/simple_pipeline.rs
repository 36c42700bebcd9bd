use crate::core::{AddressBook, ConfigProvider, Pipeline, PrintResult, Sink, Storage};
use crate::utils::error::Result;

pub struct SimplePipeline<S: Storage, C: ConfigProvider, K: Sink> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) sink: K,
}

impl<S: Storage, C: ConfigProvider, K: Sink> SimplePipeline<S, C, K> {
    pub fn new(storage: S, config: C, sink: K) -> Self {
        Self {
            storage,
            config,
            sink,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Sink> Pipeline for SimplePipeline<S, C, K> {
    async fn extract(&self) -> Result<AddressBook> {
        tracing::debug!("Reading address book from: {}", self.config.source_path());
        let raw = self.storage.read_file(self.config.source_path()).await?;

        let book: AddressBook = serde_json::from_slice(&raw)?;
        tracing::debug!("Deserialized {} contacts", book.contact_count());

        Ok(book)
    }

    async fn transform(&self, book: AddressBook) -> Result<PrintResult> {
        let mut lines = Vec::with_capacity(book.contact_count());

        // One line per contact, identifier then record, in document order
        for (id, record) in &book.contacts {
            lines.push(format!("{} {}", id, serde_json::to_string(record)?));
        }

        let contact_count = lines.len();
        Ok(PrintResult {
            lines,
            contact_count,
        })
    }

    async fn load(&self, result: PrintResult) -> Result<usize> {
        self.sink.emit(&result.lines).await
    }
}
