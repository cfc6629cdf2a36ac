// Source module.
// Defines the trait and page cursor for the vacancy boards we crawl.

pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

use reqwest::blocking::Client;

use crate::error::AppError;

/// One page of search results from a job board.
pub struct SearchPage<L> {
    pub listings: Vec<L>,
    /// Total matches the board reported for this query. Re-read on every
    /// page; boards may revise it mid-crawl.
    pub total_found: u64,
    /// No further pages may be requested after this one.
    pub is_last: bool,
}

/// A job board that can be crawled page by page for one search keyword.
///
/// Each implementation owns its query configuration, decides its own
/// pagination-termination policy, and knows how to pull a salary estimate
/// out of its listing format.
pub trait VacancySource {
    type Listing;

    /// Name used in log messages.
    fn name(&self) -> &'static str;

    /// Fetch one page of listings for the keyword. A non-success status
    /// is fatal; callers do not retry.
    fn fetch_page(
        &self,
        client: &Client,
        keyword: &str,
        page: u32,
    ) -> Result<SearchPage<Self::Listing>, AppError>;

    /// Estimated salary for a listing, if it carries usable bounds in the
    /// board's local currency.
    fn salary_estimate(&self, listing: &Self::Listing) -> Option<i64>;
}

/// Lazy walk over a board's result pages for one keyword.
///
/// Yields each listing together with the total-match count reported by
/// the page it came from. Always starts at page 0, fetches pages on
/// demand, and issues no request once the board has signalled its last
/// page. Build a fresh cursor to crawl again from the start.
pub struct VacancyPages<'a, S: VacancySource> {
    source: &'a S,
    client: &'a Client,
    keyword: &'a str,
    next_page: u32,
    buffered: std::vec::IntoIter<S::Listing>,
    total_found: u64,
    finished: bool,
}

impl<'a, S: VacancySource> VacancyPages<'a, S> {
    pub fn new(source: &'a S, client: &'a Client, keyword: &'a str) -> Self {
        Self {
            source,
            client,
            keyword,
            next_page: 0,
            buffered: Vec::new().into_iter(),
            total_found: 0,
            finished: false,
        }
    }
}

impl<S: VacancySource> Iterator for VacancyPages<'_, S> {
    type Item = Result<(S::Listing, u64), AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(listing) = self.buffered.next() {
                return Some(Ok((listing, self.total_found)));
            }
            if self.finished {
                return None;
            }

            let page = match self.source.fetch_page(self.client, self.keyword, self.next_page) {
                Ok(page) => page,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };

            self.total_found = page.total_found;
            self.finished = page.is_last;
            self.next_page += 1;
            self.buffered = page.listings.into_iter();
        }
    }
}
