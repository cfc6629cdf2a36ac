use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::AppError;
use crate::salary::estimate_salary;
use crate::sources::{SearchPage, VacancySource};

const API_URL: &str = "https://api.hh.ru/vacancies";

/// Moscow.
const AREA_ID: u32 = 1;
/// "IT" specialization, "programmer" professional role.
const SPECIALIZATION_ID: u32 = 1;
const PROFESSIONAL_ROLE_ID: u32 = 96;
/// Only listings published within the last N days.
const PERIOD_DAYS: u32 = 30;
/// hh.ru refuses deep paging; never walk further than this.
const PAGE_CEILING: u32 = 199;

const LOCAL_CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

/// Nested salary block; every field is independently nullable.
#[derive(Debug, Deserialize)]
pub struct HhSalary {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhSearchResponse {
    items: Vec<HhVacancy>,
    pages: u32,
    found: u64,
}

pub struct HeadHunter {
    user_agent: String,
    per_page: u32,
}

impl HeadHunter {
    pub fn new(user_agent: String, per_page: u32) -> Self {
        Self {
            user_agent,
            per_page,
        }
    }
}

impl VacancySource for HeadHunter {
    type Listing = HhVacancy;

    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    fn fetch_page(
        &self,
        client: &Client,
        keyword: &str,
        page: u32,
    ) -> Result<SearchPage<HhVacancy>, AppError> {
        let resp = client
            .get(API_URL)
            .header("User-Agent", &self.user_agent)
            .query(&[
                ("specialization", SPECIALIZATION_ID.to_string()),
                ("professional_role", PROFESSIONAL_ROLE_ID.to_string()),
                ("area", AREA_ID.to_string()),
                ("period", PERIOD_DAYS.to_string()),
                ("per_page", self.per_page.to_string()),
                ("page", page.to_string()),
                ("text", keyword.to_string()),
            ])
            .send()?;

        if !resp.status().is_success() {
            return Err(AppError::BadResponse(format!(
                "hh.ru returned {} for page {page}",
                resp.status()
            )));
        }

        let data: HhSearchResponse = resp.json()?;
        Ok(SearchPage {
            is_last: is_last_page(page, data.pages),
            total_found: data.found,
            listings: data.items,
        })
    }

    fn salary_estimate(&self, listing: &HhVacancy) -> Option<i64> {
        let salary = listing.salary.as_ref()?;
        if salary.currency.as_deref() != Some(LOCAL_CURRENCY) {
            return None;
        }
        estimate_salary(salary.from, salary.to)
    }
}

/// hh.ru declares its own page count; trust it, up to the hard ceiling.
fn is_last_page(page: u32, declared_pages: u32) -> bool {
    page + 1 >= declared_pages || page + 1 >= PAGE_CEILING
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn board() -> HeadHunter {
        HeadHunter::new("test-agent".to_string(), 10)
    }

    fn vacancy(value: serde_json::Value) -> HhVacancy {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn estimates_rouble_salaries() {
        let v = vacancy(json!({
            "salary": { "from": 100_000, "to": 200_000, "currency": "RUR" }
        }));
        assert_eq!(board().salary_estimate(&v), Some(150_000));
    }

    #[test]
    fn rejects_foreign_currencies() {
        let v = vacancy(json!({
            "salary": { "from": 1000, "to": 2000, "currency": "USD" }
        }));
        assert_eq!(board().salary_estimate(&v), None);
    }

    #[test]
    fn missing_salary_block_yields_no_estimate() {
        let v = vacancy(json!({ "name": "Rust developer" }));
        assert_eq!(board().salary_estimate(&v), None);
    }

    #[test]
    fn null_bound_is_absent_not_zero() {
        let v = vacancy(json!({
            "salary": { "from": null, "to": 80_000, "currency": "RUR" }
        }));
        assert_eq!(board().salary_estimate(&v), Some(64_000));
    }

    #[test]
    fn null_currency_is_not_local() {
        let v = vacancy(json!({
            "salary": { "from": 100_000, "to": null, "currency": null }
        }));
        assert_eq!(board().salary_estimate(&v), None);
    }

    #[test]
    fn stops_at_the_declared_page_count() {
        assert!(!is_last_page(0, 2));
        assert!(is_last_page(1, 2));
        assert!(is_last_page(0, 1));
        assert!(is_last_page(0, 0));
    }

    #[test]
    fn deep_result_sets_hit_the_ceiling() {
        assert!(!is_last_page(197, 10_000));
        assert!(is_last_page(198, 10_000));
    }
}
