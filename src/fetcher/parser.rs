//! Job-board response parser
//!
//! Stateless functions converting provider JSON pages into [`Vacancy`] batches
//! plus pagination indicators. Field names differ per provider; the salary
//! bounds they produce have the same meaning everywhere.

use crate::fetcher::pagination::{CountedPage, FlaggedPage};
use crate::fetcher::provider_config::ProviderConfig;
use crate::fetcher::{FetcherError, FetcherResult};
use crate::{SalaryBounds, Vacancy};
use serde_json::Value;
use tracing::debug;

/// Stateless parser for job-board API responses
pub struct VacancyParser;

impl VacancyParser {
    /// Parse a HeadHunter search page
    ///
    /// # Format
    /// `{"items": [...], "found": 1234, "pages": 13, "page": 0, "per_page": 100}`
    ///
    /// Item and total field names come from `config`.
    ///
    /// # Errors
    /// Returns [`FetcherError::MalformedResponse`] if the total or `pages` is missing,
    /// or the item array is missing while matches were reported
    pub fn parse_headhunter_page(
        body: &Value,
        config: &ProviderConfig,
    ) -> FetcherResult<CountedPage> {
        let found = Self::required_u64(body, config.total_field)?;
        let pages = Self::required_u64(body, "pages")?;
        let pages = u32::try_from(pages).map_err(|_| {
            FetcherError::MalformedResponse(format!("Page count out of range: {pages}"))
        })?;

        let vacancies = Self::items(body, config.items_field, found)?
            .iter()
            .map(|item| Self::parse_headhunter_vacancy(item, config.currency))
            .collect::<FetcherResult<Vec<_>>>()?;

        Ok(CountedPage {
            vacancies,
            found,
            pages,
        })
    }

    /// Parse a SuperJob search page
    ///
    /// # Format
    /// `{"objects": [...], "total": 321, "more": true}`
    ///
    /// # Errors
    /// Returns [`FetcherError::MalformedResponse`] if the total or `more` is missing,
    /// or the item array is missing while matches were reported
    pub fn parse_superjob_page(
        body: &Value,
        config: &ProviderConfig,
    ) -> FetcherResult<FlaggedPage> {
        let total = Self::required_u64(body, config.total_field)?;
        let more = body.get("more").and_then(|v| v.as_bool()).ok_or_else(|| {
            FetcherError::MalformedResponse("Missing or invalid more flag".to_string())
        })?;

        let vacancies = Self::items(body, config.items_field, total)?
            .iter()
            .map(|item| Self::parse_superjob_vacancy(item, config.currency))
            .collect::<FetcherResult<Vec<_>>>()?;

        Ok(FlaggedPage {
            vacancies,
            total,
            more,
        })
    }

    /// Parse one HeadHunter vacancy
    ///
    /// `salary` is either `null` or `{"from": .., "to": .., "currency": "RUR", "gross": ..}`.
    pub fn parse_headhunter_vacancy(item: &Value, currency: &str) -> FetcherResult<Vacancy> {
        let object = item.as_object().ok_or_else(|| {
            FetcherError::MalformedResponse("Vacancy item is not an object".to_string())
        })?;

        let mut vacancy = Vacancy {
            id: Self::parse_id(object.get("id")),
            title: object.get("name").and_then(|v| v.as_str()).map(str::to_string),
            salary: SalaryBounds::unspecified(),
        };

        if let Some(salary) = object.get("salary").filter(|salary| salary.is_object()) {
            if Self::currency_matches(salary.get("currency"), currency) {
                vacancy.salary = SalaryBounds::new(
                    Self::parse_bound(salary.get("from")),
                    Self::parse_bound(salary.get("to")),
                );
            } else {
                Self::log_ignored_currency(&vacancy, salary.get("currency"), currency);
            }
        }

        Ok(vacancy)
    }

    /// Parse one SuperJob vacancy
    ///
    /// Salary lives in flat `payment_from` / `payment_to` fields; `0` means unspecified.
    pub fn parse_superjob_vacancy(item: &Value, currency: &str) -> FetcherResult<Vacancy> {
        let object = item.as_object().ok_or_else(|| {
            FetcherError::MalformedResponse("Vacancy item is not an object".to_string())
        })?;

        let mut vacancy = Vacancy {
            id: Self::parse_id(object.get("id")),
            title: object
                .get("profession")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            salary: SalaryBounds::unspecified(),
        };

        if Self::currency_matches(object.get("currency"), currency) {
            vacancy.salary = SalaryBounds::new(
                Self::parse_bound(object.get("payment_from")),
                Self::parse_bound(object.get("payment_to")),
            );
        } else {
            Self::log_ignored_currency(&vacancy, object.get("currency"), currency);
        }

        Ok(vacancy)
    }

    fn log_ignored_currency(vacancy: &Vacancy, actual: Option<&Value>, expected: &str) {
        debug!(
            "Ignoring salary of vacancy {} ({}) in {} (expected {})",
            vacancy.id.as_deref().unwrap_or("<no id>"),
            vacancy.title.as_deref().unwrap_or("untitled"),
            actual.and_then(|v| v.as_str()).unwrap_or("<invalid currency>"),
            expected
        );
    }

    /// Read a salary bound; `null`, missing and non-numeric values are absent
    fn parse_bound(value: Option<&Value>) -> Option<f64> {
        match value? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Providers report ids as strings (HeadHunter) or numbers (SuperJob)
    fn parse_id(value: Option<&Value>) -> Option<String> {
        match value? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// A missing currency is taken to be the filter currency
    fn currency_matches(value: Option<&Value>, expected: &str) -> bool {
        match value.and_then(|v| v.as_str()) {
            Some(actual) => actual.eq_ignore_ascii_case(expected),
            None => true,
        }
    }

    fn required_u64(body: &Value, field: &str) -> FetcherResult<u64> {
        body.get(field).and_then(|v| v.as_u64()).ok_or_else(|| {
            FetcherError::MalformedResponse(format!("Missing or invalid {field}"))
        })
    }

    /// Item array of a page; may be omitted only when nothing matched
    fn items<'a>(body: &'a Value, field: &str, total: u64) -> FetcherResult<&'a [Value]> {
        match body.get(field) {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            None | Some(Value::Null) if total == 0 => Ok(&[]),
            _ => Err(FetcherError::MalformedResponse(format!(
                "Missing or invalid {field}"
            ))),
        }
    }
}
