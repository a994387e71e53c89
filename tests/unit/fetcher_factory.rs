use vacancy_salary_stats::config::ProviderSettings;
use vacancy_salary_stats::fetcher::{create_fetcher, FetcherError};
use vacancy_salary_stats::Provider;

#[test]
fn test_fetcher_factory_headhunter() {
    let settings = ProviderSettings::defaults(Provider::HeadHunter);
    let fetcher = create_fetcher(&settings).unwrap();
    assert_eq!(fetcher.provider(), Provider::HeadHunter);
    assert_eq!(fetcher.location(), "Moscow");
}

#[test]
fn test_fetcher_factory_superjob() {
    let settings = ProviderSettings::defaults(Provider::SuperJob).with_api_token("secret");
    let fetcher = create_fetcher(&settings).unwrap();
    assert_eq!(fetcher.provider(), Provider::SuperJob);
    assert_eq!(fetcher.location(), "Moscow");
}

#[test]
fn test_fetcher_factory_superjob_custom_town() {
    let mut settings = ProviderSettings::defaults(Provider::SuperJob).with_api_token("secret");
    settings.location = "Saint Petersburg".to_string();
    let fetcher = create_fetcher(&settings).unwrap();
    assert_eq!(fetcher.location(), "Saint Petersburg");
}

#[test]
fn test_fetcher_factory_superjob_without_token() {
    let settings = ProviderSettings::defaults(Provider::SuperJob);
    let result = create_fetcher(&settings);
    assert!(matches!(result, Err(FetcherError::MissingCredential(_))));
}

#[test]
fn test_fetcher_factory_superjob_blank_token() {
    let settings = ProviderSettings::defaults(Provider::SuperJob).with_api_token("   ");
    let result = create_fetcher(&settings);
    assert!(matches!(result, Err(FetcherError::MissingCredential(_))));
}

#[test]
fn test_fetcher_factory_superjob_malformed_token() {
    let settings = ProviderSettings::defaults(Provider::SuperJob).with_api_token("line\nbreak");
    let result = create_fetcher(&settings);
    match result {
        Err(e) => assert!(e.to_string().starts_with("invalid credential"), "got: {e}"),
        Ok(_) => panic!("malformed token should be rejected"),
    }
}
