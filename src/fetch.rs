use crate::api::{Page, Subject};
use crate::errors::{Result, SyllabusError};
use crate::utils::{build_url, count_matches, requests_to_make};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Something that can GET a URL and hand back the response body.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP transport. No retries and no timeout beyond reqwest's own.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(SyllabusError::Client)?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let network = |source| SyllabusError::Network {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyllabusError::Status {
                url: url.to_string(),
                status,
            });
        }
        response.text().map_err(network)
    }
}

pub fn fetch_page(transport: &impl Transport, url: &str) -> Result<Page> {
    let body = transport.get(url)?;
    serde_json::from_str(&body).map_err(|source| SyllabusError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Read every page of the search endpoint in order.
///
/// The page count declared by the first page is trusted; later pages are
/// requested one at a time and the first failure aborts the whole fetch.
pub fn fetch_all(transport: &impl Transport, origin: &str, sort: &str) -> Result<Vec<Subject>> {
    let first_url = build_url(origin, sort, 1);
    debug!("fetching {}", first_url);
    let mut first = fetch_page(transport, &first_url)?;

    let total_pages = requests_to_make(&first);
    let progress = progress_bar(total_pages);
    progress.inc(1);

    let mut subjects = std::mem::take(&mut first.subjects);
    for page in 2..=total_pages {
        let url = build_url(origin, sort, page);
        debug!("fetching {}", url);
        let next = fetch_page(transport, &url)?;
        subjects.extend(next.subjects);
        progress.inc(1);
    }
    progress.finish_and_clear();

    if !count_matches(&first, subjects.len()) {
        warn!(
            "API declared {} subjects but {} pages returned {}",
            first.total_count,
            total_pages,
            subjects.len()
        );
    }
    info!("fetched {} subjects from {} pages", subjects.len(), total_pages);
    Ok(subjects)
}

fn progress_bar(total_pages: u32) -> ProgressBar {
    let progress = ProgressBar::new(u64::from(total_pages));
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} pages") {
        progress.set_style(style);
    }
    progress
}
