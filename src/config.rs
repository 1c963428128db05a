// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlValue};
use miette::{IntoDiagnostic, Result, miette};
use std::time::Duration;
use tokio::fs::read_to_string;

/// Backend URL baked in at build time, used when the config file doesn't name one.
const BUILD_API_URL: Option<&str> = option_env!("CAMPAIGN_TEAMS_SERVER_URL");

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents, BUILD_API_URL)
}

/// Parses the contents of a config file.
///
/// `default_api_url` is used when the document has no `api-url` entry.
pub fn parse_config_document(contents: &str, default_api_url: Option<&str>) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let api_url = match document.get_arg("api-url") {
		Some(value) => string_value(value, "api-url")?,
		None => default_api_url
			.map(String::from)
			.ok_or_else(|| miette!("`api-url` is not configured and no build-time default is set"))?,
	};

	let request_timeout = match document.get_arg("request-timeout") {
		Some(value) => {
			let seconds = value
				.as_integer()
				.and_then(|seconds| u64::try_from(seconds).ok())
				.ok_or_else(|| miette!("`request-timeout` must be a non-negative number of seconds"))?;
			Duration::from_secs(seconds)
		}
		None => DEFAULT_REQUEST_TIMEOUT,
	};

	let web_document = document
		.get("web")
		.and_then(|node| node.children())
		.ok_or_else(|| miette!("Config is missing the `web` block"))?;
	let bind_addr = web_document
		.get_arg("bind-addr")
		.ok_or_else(|| miette!("`web` block is missing `bind-addr`"))?;
	let bind_addr = string_value(bind_addr, "bind-addr")?;

	Ok(ConfigData {
		api_url,
		request_timeout,
		web: WebConfig { bind_addr },
	})
}

fn string_value(value: &KdlValue, name: &str) -> Result<String> {
	value
		.as_string()
		.map(String::from)
		.ok_or_else(|| miette!("`{}` must be a string", name))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigData {
	pub api_url: String,
	pub request_timeout: Duration,
	pub web: WebConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebConfig {
	pub bind_addr: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_full_config() {
		let config = parse_config_document(
			r#"
			api-url "http://crm.internal:3000"
			request-timeout 4
			web {
				bind-addr "0.0.0.0:8080"
			}
			"#,
			None,
		)
		.unwrap();

		assert_eq!(config.api_url, "http://crm.internal:3000");
		assert_eq!(config.request_timeout, Duration::from_secs(4));
		assert_eq!(config.web.bind_addr, "0.0.0.0:8080");
	}

	#[test]
	fn falls_back_to_build_time_url() {
		let config = parse_config_document(
			r#"
			web {
				bind-addr "127.0.0.1:8080"
			}
			"#,
			Some("http://localhost:5000"),
		)
		.unwrap();

		assert_eq!(config.api_url, "http://localhost:5000");
		assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
	}

	#[test]
	fn missing_url_is_an_error() {
		let result = parse_config_document(
			r#"
			web {
				bind-addr "127.0.0.1:8080"
			}
			"#,
			None,
		);
		assert!(result.is_err());
	}

	#[test]
	fn missing_web_block_is_an_error() {
		let result = parse_config_document(r#"api-url "http://localhost:3000""#, None);
		assert!(result.is_err());
	}

	#[test]
	fn rejects_non_string_url() {
		let result = parse_config_document(
			r#"
			api-url 3000
			web {
				bind-addr "127.0.0.1:8080"
			}
			"#,
			None,
		);
		assert!(result.is_err());
	}
}
