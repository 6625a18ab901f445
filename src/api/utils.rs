use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AnalyzerError, Result};

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<Value> {
    let url = format!("{}/{}", base_url, endpoint);
    debug!("GET {} {:?}", url, params);

    let res = client
        .get(&url)
        .query(params)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    let status = res.status();
    let text = res.text().await?;

    // The chart endpoint answers unknown symbols with 404 and an error body worth keeping.
    match serde_json::from_str::<Value>(&text) {
        Ok(data) => Ok(data),
        Err(_) if !status.is_success() => {
            Err(AnalyzerError::Fetch(format!("Request failed: {}", status)))
        }
        Err(e) => Err(AnalyzerError::Fetch(format!(
            "Unexpected API response: {}",
            e
        ))),
    }
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|e| AnalyzerError::Fetch(format!("{}: {}", error_msg, e))),
        _ => Err(AnalyzerError::Fetch(
            "Unexpected API response format: not an object".to_string(),
        )),
    }
}
