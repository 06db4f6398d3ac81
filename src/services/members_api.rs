//! Members API - One-Shot Member List Fetch

use snafu::ResultExt;

use crate::domain::member::Member;
use crate::error::{HttpSnafu, Result, StatusSnafu};

/// Build the HTTP client used for the member fetch
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("member-admin/", env!("CARGO_PKG_VERSION")))
        .build()
        .context(HttpSnafu { url: String::new() })
}

/// GET the member list from `url`.
///
/// Non-success statuses and bodies that are not a JSON array of members are errors.
pub async fn fetch_members(client: &reqwest::Client, url: &str) -> Result<Vec<Member>> {
    tracing::debug!(url, "Fetching members");

    let response = client.get(url).send().await.context(HttpSnafu { url })?;

    let status = response.status();
    if !status.is_success() {
        return StatusSnafu { url, status }.fail();
    }

    let body = response.bytes().await.context(HttpSnafu { url })?;
    let members: Vec<Member> = serde_json::from_slice(&body)?;

    tracing::info!(url, count = members.len(), "Fetched members");
    Ok(members)
}
