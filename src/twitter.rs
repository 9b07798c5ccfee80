mod search;

pub(crate) use search::{search_url, tweet_fields_params, QueryParams, DEFAULT_MAX_RESULTS};

pub(crate) const API_ENDPOINT_BASE: &str = "https://api.twitter.com/2/";
