use contact_printer::domain::ports::Sink;
use contact_printer::utils::error::{PrintError, Result};
use contact_printer::{CliConfig, LocalStorage, PrintEngine, SimplePipeline};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;

#[derive(Clone)]
struct CollectingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CollectingSink {
    fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn lines(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }
}

impl Sink for CollectingSink {
    async fn emit(&self, lines: &[String]) -> Result<usize> {
        let mut buffer = self.lines.lock().await;
        buffer.extend_from_slice(lines);
        Ok(lines.len())
    }
}

fn cli_config(source: &str) -> CliConfig {
    CliConfig {
        source: source.to_string(),
        verbose: false,
        monitor: false,
    }
}

fn engine_for(
    temp_dir: &TempDir,
    source: &str,
    sink: CollectingSink,
) -> PrintEngine<SimplePipeline<LocalStorage, CliConfig, CollectingSink>> {
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let pipeline = SimplePipeline::new(storage, cli_config(source), sink);
    PrintEngine::new(pipeline)
}

#[tokio::test]
async fn test_end_to_end_print_with_real_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("addressbook.json"),
        r#"{"contacts":{"alice":{"phone":"123"},"bob":{"phone":"456"}}}"#,
    )
    .unwrap();

    let sink = CollectingSink::new();
    let engine = engine_for(&temp_dir, "addressbook.json", sink.clone());

    let printed = engine.run().await.unwrap();
    assert_eq!(printed, 2);

    let lines = sink.lines().await;
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("alice "));
    assert!(lines[0].contains("123"));
    assert!(lines[1].starts_with("bob "));
    assert!(lines[1].contains("456"));
}

#[tokio::test]
async fn test_empty_contacts_is_a_successful_empty_run() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("addressbook.json"),
        r#"{"contacts":{}}"#,
    )
    .unwrap();

    let sink = CollectingSink::new();
    let engine = engine_for(&temp_dir, "addressbook.json", sink.clone());

    let printed = engine.run().await.unwrap();
    assert_eq!(printed, 0);
    assert!(sink.lines().await.is_empty());
}

#[tokio::test]
async fn test_missing_file_prints_nothing_and_fails() {
    let temp_dir = TempDir::new().unwrap();

    let sink = CollectingSink::new();
    let engine = engine_for(&temp_dir, "addressbook.json", sink.clone());

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, PrintError::IoError(_)));
    assert!(sink.lines().await.is_empty());
}

#[tokio::test]
async fn test_malformed_json_prints_nothing_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("addressbook.json"),
        "{\"contacts\": {\"alice\": }",
    )
    .unwrap();

    let sink = CollectingSink::new();
    let engine = engine_for(&temp_dir, "addressbook.json", sink.clone());

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, PrintError::SerializationError(_)));
    assert!(sink.lines().await.is_empty());
}

#[tokio::test]
async fn test_output_is_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("addressbook.json"),
        r#"{"contacts":{"zeta":{"phone":"9"},"alpha":{"phone":"1"},"mid":{"phone":"5"}}}"#,
    )
    .unwrap();

    let first_sink = CollectingSink::new();
    let first = engine_for(&temp_dir, "addressbook.json", first_sink.clone());
    first.run().await.unwrap();

    let second_sink = CollectingSink::new();
    let second = engine_for(&temp_dir, "addressbook.json", second_sink.clone());
    second.run().await.unwrap();

    let first_lines = first_sink.lines().await;
    assert_eq!(first_lines, second_sink.lines().await);

    // Document order, not alphabetical order
    assert!(first_lines[0].starts_with("zeta "));
    assert!(first_lines[1].starts_with("alpha "));
    assert!(first_lines[2].starts_with("mid "));
}

#[tokio::test]
async fn test_unicode_identifiers_and_records() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("addressbook.json"),
        r#"{"contacts":{"Олена":{"phones":["0931112233"]},"Петро":"без телефону"}}"#,
    )
    .unwrap();

    let sink = CollectingSink::new();
    let engine = engine_for(&temp_dir, "addressbook.json", sink.clone());

    let printed = engine.run().await.unwrap();
    assert_eq!(printed, 2);

    let lines = sink.lines().await;
    assert!(lines[0].starts_with("Олена "));
    assert!(lines[0].contains("0931112233"));
    assert!(lines[1].starts_with("Петро "));
}
