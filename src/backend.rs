// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigData;
use crate::model::{Campaign, NewTeam, Team};
use miette::Diagnostic;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum ApiError {
	#[error("`{0}` is not usable as a backend base URL")]
	InvalidBaseUrl(String),
	#[error("request to the team backend failed")]
	Transport(#[from] reqwest::Error),
	#[error("team backend responded with HTTP status {status}")]
	Status {
		status: u16,
		body: Option<serde_json::Value>,
	},
	#[error("team backend sent a response that couldn't be decoded")]
	Decode(#[from] serde_json::Error),
}

/// HTTP client for the team and campaign REST API.
#[derive(Clone, Debug)]
pub struct BackendClient {
	client: Client,
	base_url: Url,
}

impl BackendClient {
	pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, ApiError> {
		let parsed_url = Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_owned()))?;
		if parsed_url.cannot_be_a_base() {
			return Err(ApiError::InvalidBaseUrl(base_url.to_owned()));
		}

		let client = Client::builder().timeout(request_timeout).build()?;
		Ok(Self {
			client,
			base_url: parsed_url,
		})
	}

	pub fn from_config(config: &ConfigData) -> Result<Self, ApiError> {
		Self::new(&config.api_url, config.request_timeout)
	}

	pub async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
		let response = self.client.get(self.endpoint(&["api", "teams"])).send().await?;
		read_json(response).await
	}

	pub async fn get_team(&self, id: &str) -> Result<Team, ApiError> {
		let response = self.client.get(self.endpoint(&["api", "teams", id])).send().await?;
		read_json(response).await
	}

	pub async fn create_team(&self, team: &NewTeam) -> Result<Team, ApiError> {
		let response = self
			.client
			.post(self.endpoint(&["api", "teams"]))
			.json(team)
			.send()
			.await?;
		read_json(response).await
	}

	pub async fn update_team(&self, id: &str, team: &NewTeam) -> Result<Team, ApiError> {
		let response = self
			.client
			.put(self.endpoint(&["api", "teams", id]))
			.json(team)
			.send()
			.await?;
		read_json(response).await
	}

	pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
		let response = self.client.get(self.endpoint(&["api", "campaigns"])).send().await?;
		read_json(response).await
	}

	fn endpoint(&self, segments: &[&str]) -> Url {
		let mut url = self.base_url.clone();
		// Base URLs that can't carry a path are rejected in `new`.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}
		url
	}
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
	let status = response.status();
	let url = response.url().clone();
	let body = response.bytes().await?;

	if !status.is_success() {
		let body: Option<serde_json::Value> = serde_json::from_slice(&body).ok();
		tracing::error!(%status, %url, ?body, "Team backend returned an error response");
		return Err(ApiError::Status {
			status: status.as_u16(),
			body,
		});
	}

	Ok(serde_json::from_slice(&body)?)
}
