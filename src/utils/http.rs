// src/utils/http.rs

//! HTTP utilities for fetching wiki content.
//!
//! Two fetch modes: a direct page fetch returning full HTML, and a
//! MediaWiki parse-API query returning an HTML fragment wrapped in JSON.
//! Every request carries an identifying contact header; no retries.

use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::blocking::Client;
use reqwest::header::{FROM, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::{BROWSER_USER_AGENTS, CONTACT_ADDRESS, CONTACT_USER_AGENT, Config};
use crate::error::{AppError, Result};

/// Create a configured HTTP client.
pub fn create_client(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(FROM, HeaderValue::from_static(CONTACT_ADDRESS));

    Ok(Client::builder()
        .user_agent(CONTACT_USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?)
}

/// Fetch a page and return its raw HTML.
///
/// With `add_user_agent` set, the User-Agent rotates through a pool of
/// browser-like strings; the `From` contact header is sent either way.
pub fn fetch_html(client: &Client, url: &str, add_user_agent: bool) -> Result<String> {
    let mut request = client.get(url);
    if add_user_agent {
        request = request.header(USER_AGENT, random_browser_agent());
    }

    Ok(request.send()?.error_for_status()?.text()?)
}

/// Fetch page content through the MediaWiki parse API.
pub fn fetch_parse_api(client: &Client, api_url: &str, page_title: &str) -> Result<String> {
    let body = client
        .get(api_url)
        .query(&[
            ("action", "parse"),
            ("page", page_title),
            ("format", "json"),
            ("prop", "text"),
        ])
        .send()?
        .error_for_status()?
        .text()?;

    extract_parse_payload(&body)
}

/// Unwrap the HTML fragment at `parse.text.*` of an API response.
pub fn extract_parse_payload(body: &str) -> Result<String> {
    let payload: serde_json::Value = serde_json::from_str(body)?;

    payload
        .get("parse")
        .and_then(|parse| parse.get("text"))
        .and_then(|text| text.get("*"))
        .and_then(|fragment| fragment.as_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::page_structure("parse API response is missing the parse.text payload"))
}

fn random_browser_agent() -> &'static str {
    BROWSER_USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CONTACT_USER_AGENT)
}
