//! Integration tests for logging and tracing

use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use vacancy_salary_stats::fetcher::parser::VacancyParser;
use vacancy_salary_stats::fetcher::{FetchedVacancies, FetcherError, FetcherResult, VacancyFetcher};
use vacancy_salary_stats::pipeline::{collect_statistics, ErrorPolicy};
use vacancy_salary_stats::{Provider, Vacancy};

/// Writer that collects formatted log lines in memory
#[derive(Clone, Default)]
struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Fetcher that serves one fixed vacancy, failing for "Broken"
struct FixedFetcher;

#[async_trait]
impl VacancyFetcher for FixedFetcher {
    async fn fetch(&self, query: &str) -> FetcherResult<FetchedVacancies> {
        if query == "Broken" {
            return Err(FetcherError::Network("connection reset".to_string()));
        }
        Ok(FetchedVacancies {
            vacancies: vec![Vacancy::with_salary(Some(100.0), Some(300.0))],
            found: 1,
        })
    }

    fn provider(&self) -> Provider {
        Provider::HeadHunter
    }

    fn location(&self) -> &str {
        "Moscow"
    }
}

fn queries(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn test_pipeline_logs_query_summary() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("vacancy_salary_stats=info"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    collect_statistics(&FixedFetcher, &queries(&["Rust"]), ErrorPolicy::Abort)
        .await
        .unwrap();

    let output = logs.contents();
    assert!(output.contains("INFO"), "got: {output}");
    assert!(output.contains("HeadHunter 'Rust': found=1 processed=1"), "got: {output}");
}

#[tokio::test]
async fn test_skipped_query_logs_warning() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("vacancy_salary_stats=warn"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let report = collect_statistics(&FixedFetcher, &queries(&["Broken", "Rust"]), ErrorPolicy::Skip)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
    let output = logs.contents();
    assert!(output.contains("WARN"), "got: {output}");
    assert!(output.contains("Skipping HeadHunter query 'Broken'"), "got: {output}");
    assert!(!output.contains("found=1"), "info lines are filtered out at warn level");
}

#[tokio::test]
async fn test_json_log_format() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new("vacancy_salary_stats=info"))
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    collect_statistics(&FixedFetcher, &queries(&["Rust"]), ErrorPolicy::Abort)
        .await
        .unwrap();

    let output = logs.contents();
    let line = output.lines().next().expect("at least one log line");
    let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(parsed["level"], "INFO");
    assert!(parsed["fields"]["message"]
        .as_str()
        .unwrap()
        .contains("found=1"));
}

#[test]
fn test_ignored_salary_logs_vacancy_identity() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("vacancy_salary_stats=debug"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let item = serde_json::json!({
            "id": 77,
            "profession": "Go developer",
            "payment_from": 4000,
            "payment_to": 0,
            "currency": "usd"
        });
        VacancyParser::parse_superjob_vacancy(&item, "rub").unwrap();
    });

    let output = logs.contents();
    assert!(output.contains("DEBUG"), "got: {output}");
    assert!(
        output.contains("Ignoring salary of vacancy 77 (Go developer) in usd (expected rub)"),
        "got: {output}"
    );
}

#[test]
fn test_env_filter_parsing() {
    for directive in [
        "info",
        "vacancy_salary_stats=debug",
        "warn,vacancy_salary_stats=trace",
    ] {
        assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
    }
}
