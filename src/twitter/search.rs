use anyhow::{Context, Result};
use std::collections::BTreeMap;
use url::Url;

/// Query parameters appended to a search request.
pub(crate) type QueryParams = BTreeMap<String, String>;

/// Used when no `max_results` is configured.
pub(crate) const DEFAULT_MAX_RESULTS: u32 = 100;

const SEARCH_RECENT_PATH: &str = "tweets/search/recent";

/// Builds the recent search endpoint URL for tweets posted by `username`.
///
/// Neither `username` nor `max_results` is validated here; the API rejects bad values itself.
pub(crate) fn search_url(base: &Url, username: &str, max_results: u32) -> Result<Url> {
    let mut url = Url::options()
        .base_url(Some(base))
        .parse(SEARCH_RECENT_PATH)
        .with_context(|| "Failed to parse recent search endpoint")?;
    // Set the raw query so the `from:` operator is sent as is.
    url.set_query(Some(
        format!("query=from:{}&max_results={}", username, max_results).as_str(),
    ));
    Ok(url)
}

/// Returns the `tweet.fields` parameter holding the comma separated field names.
pub(crate) fn tweet_fields_params<S: AsRef<str>>(tweet_fields: &[S]) -> QueryParams {
    let value = tweet_fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    QueryParams::from([("tweet.fields".to_string(), value)])
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{search_url, tweet_fields_params, QueryParams};
    use crate::twitter::API_ENDPOINT_BASE;

    #[test]
    fn build_url() {
        let base = Url::parse(API_ENDPOINT_BASE).unwrap();
        let url = search_url(&base, "alice", 50).unwrap();
        assert_eq!(
            "https://api.twitter.com/2/tweets/search/recent?query=from:alice&max_results=50",
            url.as_str()
        );
        assert!(Url::parse(url.as_str()).is_ok());
    }

    #[test]
    fn url_passes_values_through() {
        let base = Url::parse(API_ENDPOINT_BASE).unwrap();
        let url = search_url(&base, "TwitterDev", 500).unwrap();
        assert_eq!(Some("query=from:TwitterDev&max_results=500"), url.query());
    }

    #[test]
    fn url_with_custom_base() {
        let base = Url::parse("http://127.0.0.1:8080/2/").unwrap();
        let url = search_url(&base, "bob", 10).unwrap();
        assert_eq!(
            "http://127.0.0.1:8080/2/tweets/search/recent?query=from:bob&max_results=10",
            url.as_str()
        );
    }

    #[test]
    fn tweet_fields() {
        let params = tweet_fields_params(&["id", "text", "created_at"]);
        assert_eq!(
            QueryParams::from([("tweet.fields".into(), "id,text,created_at".into())]),
            params
        );
    }

    #[test]
    fn empty_tweet_fields() {
        let params = tweet_fields_params::<&str>(&[]);
        assert_eq!(1, params.len());
        assert_eq!(Some(""), params.get("tweet.fields").map(String::as_str));
    }
}
