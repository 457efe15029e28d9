mod parse;

use std::future::Future;
use std::time::Duration;

use eyre::WrapErr;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};

use models::{ResultType, SearchItem};

const SEARCH_URL: &str = "https://music.youtube.com/youtubei/v1/search";
const ORIGIN: &str = "https://music.youtube.com";
const CLIENT_NAME: &str = "WEB_REMIX";
const CLIENT_VERSION: &str = "1.20241127.01.00";

// Pre-encoded search filter params, as the web client sends them.
const SONGS_PARAMS: &str = "EgWKAQIIAWoMEA4QChADEAQQCRAF";
const VIDEOS_PARAMS: &str = "EgWKAQIQAWoMEA4QChADEAQQCRAF";

/// Upstream search index the karaoke pipeline queries.
pub trait SearchProvider: Send + Sync {
    fn search(
        &self,
        query: &str,
        filter: ResultType,
        limit: usize,
    ) -> impl Future<Output = eyre::Result<Vec<SearchItem>>> + Send;
}

#[derive(Debug, Clone)]
pub struct YtMusicConfig {
    pub language: String,
    pub location: String,
    pub timeout: Duration,
}

impl Default for YtMusicConfig {
    fn default() -> Self {
        Self {
            language: "ja".to_string(),
            location: "JP".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct YtMusicClient {
    config: YtMusicConfig,
    client: reqwest::Client,
}

impl YtMusicClient {
    pub fn new(config: YtMusicConfig) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(default_headers()?)
            .timeout(config.timeout)
            .build()
            .wrap_err("build reqwest client")?;

        Ok(Self { config, client })
    }

    fn request_body(&self, query: &str, filter: ResultType) -> Value {
        json!({
            "context": {
                "client": {
                    "clientName": CLIENT_NAME,
                    "clientVersion": CLIENT_VERSION,
                    "hl": self.config.language,
                    "gl": self.config.location,
                },
                "user": {},
            },
            "query": query,
            "params": filter_params(filter),
        })
    }

    async fn post(&self, body: &Value, continuation: Option<&str>) -> eyre::Result<Value> {
        let mut request = self.client.post(SEARCH_URL).query(&[("alt", "json")]);
        if let Some(token) = continuation {
            request = request.query(&[("ctoken", token), ("continuation", token), ("type", "next")]);
        }

        let response = request
            .json(body)
            .send()
            .await
            .wrap_err("POST ytmusic search")?;
        response
            .error_for_status()
            .wrap_err("ytmusic search status")?
            .json::<Value>()
            .await
            .wrap_err("parse ytmusic search json")
    }
}

impl SearchProvider for YtMusicClient {
    async fn search(
        &self,
        query: &str,
        filter: ResultType,
        limit: usize,
    ) -> eyre::Result<Vec<SearchItem>> {
        let body = self.request_body(query, filter);

        let first = self.post(&body, None).await?;
        let (mut items, mut continuation) = parse::parse_search_page(&first);

        while items.len() < limit {
            let Some(token) = continuation.take() else {
                break;
            };
            let page = self.post(&body, Some(&token)).await?;
            let (more, next) = parse::parse_continuation_page(&page);
            if more.is_empty() {
                break;
            }
            items.extend(more);
            continuation = next;
        }

        items.truncate(limit);
        tracing::debug!(
            filter = filter.as_filter(),
            count = items.len(),
            "ytmusic search complete"
        );
        Ok(items)
    }
}

fn filter_params(filter: ResultType) -> &'static str {
    match filter {
        ResultType::Song => SONGS_PARAMS,
        ResultType::Video => VIDEOS_PARAMS,
    }
}

fn default_headers() -> eyre::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:88.0) Gecko/20100101 Firefox/88.0",
        ),
    );
    headers.insert(
        reqwest::header::ACCEPT,
        HeaderValue::from_static("*/*"),
    );
    headers.insert(reqwest::header::ORIGIN, HeaderValue::from_static(ORIGIN));
    headers.insert(
        reqwest::header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("ja,en-US;q=0.9,en;q=0.8"),
    );
    Ok(headers)
}
