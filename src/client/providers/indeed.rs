use super::helpers::{parse_attribute_defaults, parse_location, string_attribute};
use super::traits::{JobProvider, RawRecord};
use crate::client::SearchParams;
use crate::config::{IndeedConfig, DEFAULT_INDEED_BASE_URL};
use crate::job::Job;
use tracing::debug;
use url::form_urlencoded;

/// Keys every Indeed result record is normalized to carry
pub const JOB_DEFAULTS: [&str; 8] = [
    "jobtitle",
    "company",
    "formattedLocation",
    "source",
    "date",
    "snippet",
    "url",
    "jobkey",
];

/// Indeed publisher API provider.
///
/// Holds read-only search settings. The query string is rebuilt from
/// scratch on every call, so one provider can serve concurrent searches.
#[derive(Debug, Clone)]
pub struct IndeedProvider {
    base_url: String,
    publisher_id: Option<String>,
    version: Option<String>,
    highlight: Option<bool>,
    keyword: Option<String>,
    page: Option<u32>,
    count: Option<u32>,
    city: Option<String>,
    state: Option<String>,
}

impl Default for IndeedProvider {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INDEED_BASE_URL.to_string(),
            publisher_id: None,
            version: None,
            highlight: None,
            keyword: None,
            page: None,
            count: None,
            city: None,
            state: None,
        }
    }
}

impl IndeedProvider {
    /// Provider with no parameters set, pointed at the public endpoint
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider seeded from the `indeed` config section
    #[must_use]
    pub fn from_config(config: &IndeedConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            publisher_id: config.publisher_id.clone(),
            version: config.version.clone(),
            highlight: config.highlight,
            ..Self::default()
        }
    }

    /// Copy the per-search parameters onto this provider
    #[must_use]
    pub fn with_search(mut self, params: &SearchParams) -> Self {
        self.keyword.clone_from(&params.keyword);
        self.city.clone_from(&params.city);
        self.state.clone_from(&params.state);
        self.page = params.page;
        self.count = params.count;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_publisher_id(mut self, publisher_id: impl Into<String>) -> Self {
        self.publisher_id = Some(publisher_id.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub const fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn publisher_id(&self) -> Option<&str> {
        self.publisher_id.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Highlight flag in the `1`/`0` form the API expects
    pub fn highlight(&self) -> Option<String> {
        self.highlight.map(|on| if on { "1" } else { "0" }.to_string())
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub const fn page(&self) -> Option<u32> {
        self.page
    }

    pub const fn count(&self) -> Option<u32> {
        self.count
    }

    /// Combined location sent as `l`.
    ///
    /// City alone renders as `"<city>, "` with the separator left dangling;
    /// downstream consumers see exactly this string.
    pub fn location(&self) -> Option<String> {
        let city = self.city.as_deref().filter(|city| !city.is_empty());
        let state = self.state.as_deref().filter(|state| !state.is_empty());

        match (city, state) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            (Some(city), None) => Some(format!("{city}, ")),
            (None, Some(state)) => Some(state.to_string()),
            (None, None) => None,
        }
    }

    /// Query parameters in request order, unset ones left out
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        [
            ("publisher", self.publisher_id().map(str::to_string)),
            ("v", self.version().map(str::to_string)),
            ("highlight", self.highlight()),
            ("format", Some(self.format().to_string())),
            ("q", self.keyword().map(str::to_string)),
            ("l", self.location()),
            ("start", self.page().map(|page| page.to_string())),
            ("limit", self.count().map(|count| count.to_string())),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
    }

    /// Form-encoded query string
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_params())
            .finish()
    }

    fn create_job_from_record(record: &RawRecord) -> Job {
        let title = string_attribute(record, "jobtitle");

        Job {
            name: title.clone(),
            title,
            description: string_attribute(record, "snippet"),
            url: string_attribute(record, "url"),
            source_id: string_attribute(record, "jobkey"),
            location: string_attribute(record, "formattedLocation"),
            ..Job::default()
        }
    }

    /// Blank tokens leave the matching field unset
    fn set_job_location(job: &mut Job, location: &str) {
        let mut parts = parse_location(location)
            .into_iter()
            .map(|part| Some(part).filter(|part| !part.is_empty()));

        if let Some(city) = parts.next().flatten() {
            job.set_city(city);
        }
        if let Some(state) = parts.next().flatten() {
            job.set_state(state);
        }
    }
}

impl JobProvider for IndeedProvider {
    fn name(&self) -> &'static str {
        "indeed"
    }

    fn url(&self) -> String {
        let url = format!("{}?{}", self.base_url, self.query_string());
        debug!("Indeed search URL: {}", url);
        url
    }

    fn format(&self) -> &'static str {
        "json"
    }

    fn listings_path(&self) -> &'static str {
        "results"
    }

    fn create_job(&self, record: RawRecord) -> Job {
        let record = parse_attribute_defaults(record, &JOB_DEFAULTS);

        let mut job = Self::create_job_from_record(&record);
        Self::set_job_location(&mut job, &string_attribute(&record, "formattedLocation"));

        job.set_company(string_attribute(&record, "company"))
            .set_date_posted_as_string(string_attribute(&record, "date"));
        job
    }
}
