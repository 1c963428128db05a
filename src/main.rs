// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use campaign_teams::backend::BackendClient;
	use campaign_teams::config::parse_config;
	use campaign_teams::web::server::run_server;
	use std::sync::Arc;

	tracing_subscriber::fmt::init();

	let config = Arc::new(parse_config("config.kdl").await?);
	let backend = BackendClient::from_config(&config)?;
	tracing::info!(api_url = %config.api_url, "Using team backend");

	run_server(config, backend).await
}

#[cfg(not(feature = "ssr"))]
fn main() {
	// The client side is started through `hydrate` in the library.
}
