use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct PrintEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PrintEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs load-then-print: extract the address book, render one line per
    /// contact, emit the lines. Returns the number of contacts printed.
    /// Nothing is emitted if extraction fails.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("Starting print run");

        let book = self.pipeline.extract().await?;
        tracing::info!("Loaded {} contacts", book.contact_count());
        self.monitor.log_stats("extract");

        let result = self.pipeline.transform(book).await?;
        tracing::debug!("Rendered {} lines", result.contact_count);
        self.monitor.log_stats("transform");

        let printed = self.pipeline.load(result).await?;
        tracing::info!("Printed {} contacts", printed);

        self.monitor.log_final_stats();

        Ok(printed)
    }
}
