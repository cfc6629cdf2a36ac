use reqwest::blocking::Client;

use crate::error::AppError;
use crate::sources::{VacancyPages, VacancySource};

/// Per-language summary over one board's matching listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStat {
    pub language: String,
    pub total_found: u64,
    pub processed: u64,
    pub average_salary: i64,
}

/// Crawl one board once per language, in input order, and fold each
/// language's listings into a summary row. Listings without a usable
/// salary estimate count toward `total_found` only. A transport error on
/// any page aborts the whole crawl.
pub fn collect_stats<S: VacancySource>(
    client: &Client,
    source: &S,
    languages: &[String],
) -> Result<Vec<LanguageStat>, AppError> {
    let mut stats = Vec::with_capacity(languages.len());

    for language in languages {
        tracing::info!("{}: crawling \"{language}\" vacancies", source.name());

        let mut total_found = 0;
        let mut processed = 0u64;
        let mut salaries_sum = 0i64;

        for item in VacancyPages::new(source, client, language) {
            let (listing, found) = item?;
            total_found = found;
            if let Some(salary) = source.salary_estimate(&listing) {
                processed += 1;
                salaries_sum += salary;
            }
        }

        let average_salary = if processed == 0 {
            0
        } else {
            salaries_sum / processed as i64
        };

        tracing::info!(
            "{}: \"{language}\" done, {total_found} found, {processed} with a usable salary",
            source.name()
        );

        stats.push(LanguageStat {
            language: language.clone(),
            total_found,
            processed,
            average_salary,
        });
    }

    Ok(stats)
}
