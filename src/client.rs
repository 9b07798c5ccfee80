use reqwest::{
    header::{self, HeaderValue, InvalidHeaderValue},
    Client, Request, StatusCode,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, trace, warn};
use url::Url;

use crate::twitter::QueryParams;

/// Fixed `User-Agent` sent with every request.
pub(crate) const USER_AGENT: &str = "v2UserTweetsRust";

/// Errors raised while talking to the Twitter API.
#[derive(Debug, Error)]
pub enum Error {
    /// Any response other than 200 OK. Client and server errors are not told apart.
    #[error("Request returned an error: {status} {body}")]
    Api { status: u16, body: String },

    #[error("Bearer token is not a valid header value")]
    InvalidToken(#[from] InvalidHeaderValue),

    #[error("Failed to request recent tweets")]
    Request(#[source] reqwest::Error),

    #[error("Failed to deserialize json response")]
    Decode(#[source] reqwest::Error),
}

/// Sets the bearer `Authorization` and `User-Agent` headers on `request`.
/// Everything else on the request is left as it is.
pub(crate) fn authorize(mut request: Request, bearer_token: &str) -> Result<Request, Error> {
    let mut authorization = HeaderValue::from_str(format!("Bearer {}", bearer_token).as_str())?;
    authorization.set_sensitive(true);

    let headers = request.headers_mut();
    headers.insert(header::AUTHORIZATION, authorization);
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    Ok(request)
}

/// Sends an authorized GET to `url` with `params` appended to its query
/// and returns the JSON body of a 200 response.
pub(crate) async fn connect(
    client: &Client,
    url: Url,
    params: &QueryParams,
    bearer_token: &str,
) -> Result<Value, Error> {
    let request = client
        .get(url)
        .query(params)
        .build()
        .map_err(Error::Request)?;
    let request = authorize(request, bearer_token)?;
    debug!("Requesting {}", request.url());

    let response = client.execute(request).await.map_err(Error::Request)?;
    let status = response.status();
    println!("{}", status.as_u16());

    // Check response status.
    match status {
        StatusCode::OK => {
            let body: Value = response.json().await.map_err(Error::Decode)?;
            trace!("got response: {:?}", body);
            Ok(body)
        }
        x => {
            let body = response.text().await.map_err(Error::Request)?;
            warn!(
                "request not successful, got response status: {} and body: {}",
                x, body
            );
            Err(Error::Api {
                status: x.as_u16(),
                body,
            })
        }
    }
}
