//! Contract tests for the SuperJob vacancy search API

use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use vacancy_salary_stats::config::ProviderSettings;
use vacancy_salary_stats::fetcher::superjob::SuperJobFetcher;
use vacancy_salary_stats::fetcher::{FetcherError, VacancyFetcher};
use vacancy_salary_stats::{Provider, SalaryBounds};

const TOKEN: &str = "v3.r.test.secret";
const ENDPOINT: &str = "/2.0/vacancies/";

fn fetcher_for(server: &Server) -> SuperJobFetcher {
    let settings = ProviderSettings::defaults(Provider::SuperJob)
        .with_base_url(server.url())
        .with_api_token(TOKEN);
    SuperJobFetcher::with_client(Arc::new(Client::new()), settings).unwrap()
}

fn page_body(ids: &[u64], total: u64, more: bool) -> String {
    let objects: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "profession": "Developer", "payment_from": 100000, "payment_to": 150000, "currency": "rub"}))
        .collect();
    json!({"objects": objects, "total": total, "more": more}).to_string()
}

/// Every request carries the credential header and constant filters
#[tokio::test]
async fn test_requests_carry_token_and_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", ENDPOINT)
        .match_header("X-Api-App-Id", TOKEN)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("keyword".into(), "Программист Java".into()),
            Matcher::UrlEncoded("town".into(), "Moscow".into()),
            Matcher::UrlEncoded("count".into(), "100".into()),
            Matcher::UrlEncoded("page".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(&[1, 2], 2, false))
        .expect(1)
        .create_async()
        .await;

    let fetched = fetcher_for(&server).fetch("Java").await.unwrap();

    mock.assert_async().await;
    assert_eq!(fetched.vacancies.len(), 2);
    assert_eq!(fetched.found, 2);
}

/// Pagination follows `more` and stops at the first false flag
#[tokio::test]
async fn test_stops_when_more_is_false() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", ENDPOINT)
        .match_query(Matcher::UrlEncoded("page".into(), "0".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(&[1, 2], 3, true))
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", ENDPOINT)
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(&[3], 3, false))
        .expect(1)
        .create_async()
        .await;
    let third = server
        .mock("GET", ENDPOINT)
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let fetched = fetcher_for(&server).fetch("Python").await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
    let ids: Vec<_> = fetched
        .vacancies
        .iter()
        .map(|v| v.id.clone().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(fetched.found, 3);
}

/// The flag wins even if `total` suggests more pages
#[tokio::test]
async fn test_flag_wins_over_total() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(&[1], 900, false))
        .expect(1)
        .create_async()
        .await;

    let fetched = fetcher_for(&server).fetch("Python").await.unwrap();

    mock.assert_async().await;
    assert_eq!(fetched.vacancies.len(), 1);
    assert_eq!(fetched.found, 900);
}

/// A provider that never clears the flag is cut off at the configured page cap
#[tokio::test]
async fn test_endless_more_flag_hits_page_cap() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(&[1], 10, true))
        .expect(3)
        .create_async()
        .await;

    let mut settings = ProviderSettings::defaults(Provider::SuperJob)
        .with_base_url(server.url())
        .with_api_token(TOKEN);
    settings.max_pages = 3;
    let fetcher = SuperJobFetcher::with_client(Arc::new(Client::new()), settings).unwrap();

    let result = fetcher.fetch("Python").await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(FetcherError::PaginationLimit {
            provider: Provider::SuperJob,
            limit: 3
        })
    ));
}

/// A rejected credential surfaces as a transport error
#[tokio::test]
async fn test_forbidden_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error":{"code":403,"message":"Invalid app_key"}}"#)
        .create_async()
        .await;

    let result = fetcher_for(&server).fetch("Python").await;

    assert!(matches!(result, Err(FetcherError::Transport { status: 403, .. })));
}

/// Zero payments mean "not specified"; other currencies are not converted
#[tokio::test]
async fn test_salary_mapping() {
    let mut server = Server::new_async().await;
    let body = json!({
        "objects": [
            {"id": 1, "payment_from": 0, "payment_to": 90000, "currency": "rub"},
            {"id": 2, "payment_from": 0, "payment_to": 0, "currency": "rub"},
            {"id": 3, "payment_from": 2000, "payment_to": 0, "currency": "usd"}
        ],
        "total": 3,
        "more": false
    });
    let _mock = server
        .mock("GET", ENDPOINT)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let fetched = fetcher_for(&server).fetch("Go").await.unwrap();

    assert_eq!(fetched.vacancies[0].salary, SalaryBounds::new(Some(0.0), Some(90000.0)));
    assert_eq!(fetched.vacancies[1].salary, SalaryBounds::new(Some(0.0), Some(0.0)));
    assert_eq!(fetched.vacancies[2].salary, SalaryBounds::unspecified());
}

/// Live API check
#[tokio::test]
#[ignore] // Requires network access and SUPERJOB_TOKEN
async fn test_live_superjob_search() {
    let token = std::env::var("SUPERJOB_TOKEN").expect("SUPERJOB_TOKEN must be set");
    let fetcher =
        SuperJobFetcher::new(ProviderSettings::defaults(Provider::SuperJob).with_api_token(token))
            .unwrap();

    let fetched = fetcher.fetch("Python").await.expect("live search should succeed");

    assert!(fetched.vacancies.len() as u64 <= fetched.found.max(500));
}
