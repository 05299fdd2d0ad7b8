// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use vitrina_app::{Category, Project};

/// Blocking client for the projects showcase API.
///
/// One endpoint: `GET {base_url}/projects?category={ID}` returning
/// `{"projects": [{"id", "name", "image_url"}, ...]}`.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("api.base_url must not be empty");
        }
        let parsed = Url::parse(&base_url)
            .with_context(|| format!("api.base_url {base_url:?} is not a valid URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "api.base_url {base_url:?} must use http or https, got {:?}",
                parsed.scheme()
            );
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches the project list filtered to `category`, preserving the
    /// server's row order.
    pub fn fetch_projects(&self, category: Category) -> Result<Vec<Project>> {
        let response = self
            .http
            .get(format!("{}/projects", self.base_url))
            .query(&[("category", category.as_str())])
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: ProjectsEnvelope = response.json().context("decode project list")?;
        Ok(parsed
            .projects
            .into_iter()
            .map(|record| Project {
                id: record.id,
                name: record.name,
                image_url: record.image_url,
            })
            .collect())
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!("cannot reach {} -- check network and api.base_url ({})", base_url, error)
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(message) = parsed.error_msg.or(parsed.message)
        && !message.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), message);
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct ProjectsEnvelope {
    projects: Vec<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: String,
    name: String,
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error_msg: Option<String>,
    message: Option<String>,
}
