use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::AppError;
use crate::salary::estimate_salary;
use crate::sources::{SearchPage, VacancySource};

const API_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

/// Moscow.
const TOWN_ID: u32 = 4;
/// "Development, programming" catalogue section.
const CATALOGUE_ID: u32 = 48;
/// Only listings published within the last N days.
const PERIOD_DAYS: u32 = 7;
/// superjob.ru caps result-set paging; never walk further than this.
const PAGE_CEILING: u32 = 49;

const LOCAL_CURRENCY: &str = "rub";

/// Flat listing record; superjob encodes an unset payment bound as 0.
#[derive(Debug, Deserialize)]
pub struct SjVacancy {
    pub payment_from: Option<i64>,
    pub payment_to: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SjSearchResponse {
    objects: Vec<SjVacancy>,
    total: u64,
}

pub struct SuperJob {
    api_key: String,
    per_page: u32,
}

impl SuperJob {
    pub fn new(api_key: String, per_page: u32) -> Self {
        Self { api_key, per_page }
    }
}

impl VacancySource for SuperJob {
    type Listing = SjVacancy;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    fn fetch_page(
        &self,
        client: &Client,
        keyword: &str,
        page: u32,
    ) -> Result<SearchPage<SjVacancy>, AppError> {
        let resp = client
            .get(API_URL)
            .header("X-Api-App-Id", &self.api_key)
            .query(&[
                ("town", TOWN_ID.to_string()),
                ("catalogues", CATALOGUE_ID.to_string()),
                ("period", PERIOD_DAYS.to_string()),
                ("count", self.per_page.to_string()),
                ("page", page.to_string()),
                ("keyword", keyword.to_string()),
            ])
            .send()?;

        if !resp.status().is_success() {
            return Err(AppError::BadResponse(format!(
                "superjob.ru returned {} for page {page}",
                resp.status()
            )));
        }

        let data: SjSearchResponse = resp.json()?;
        Ok(SearchPage {
            is_last: is_last_page(page, self.per_page, data.total),
            total_found: data.total,
            listings: data.objects,
        })
    }

    fn salary_estimate(&self, listing: &SjVacancy) -> Option<i64> {
        if listing.currency.as_deref() != Some(LOCAL_CURRENCY) {
            return None;
        }
        // 0 is superjob's "not specified" sentinel, not a real bound
        let from = listing.payment_from.filter(|&v| v != 0);
        let to = listing.payment_to.filter(|&v| v != 0);
        estimate_salary(from, to)
    }
}

/// superjob reports no page count, only the total match count; the last
/// page is the one that covers it, up to the hard ceiling.
fn is_last_page(page: u32, per_page: u32, total: u64) -> bool {
    let covered = (page as u64 + 1) * per_page as u64;
    covered >= total || page + 1 >= PAGE_CEILING
}
