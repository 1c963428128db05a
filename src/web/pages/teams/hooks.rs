// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{NewTeam, Team};
use leptos::logging::error;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What a team fetch returned: the whole collection, or the one team that was asked for.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TeamListing {
	All(Vec<Team>),
	One(Team),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamsState {
	pub teams: Vec<Team>,
	pub team: Option<Team>,
	pub loading: bool,
}

impl TeamsState {
	pub fn new() -> Self {
		Self {
			loading: true,
			..Self::default()
		}
	}

	/// Records the outcome of a fetch.
	///
	/// A single team never replaces the collection. Failures are logged and leave
	/// both untouched; loading ends either way.
	pub fn apply<E: Display>(&mut self, result: Result<TeamListing, E>) {
		match result {
			Ok(TeamListing::All(teams)) => self.teams = teams,
			Ok(TeamListing::One(team)) => self.team = Some(team),
			Err(fetch_error) => error!("Failed to fetch teams: {}", fetch_error),
		}
		self.loading = false;
	}
}

#[derive(Clone, Copy)]
pub struct UseTeams {
	pub teams: Signal<Vec<Team>>,
	pub team: Signal<Option<Team>>,
	pub loading: Signal<bool>,
	listing: Resource<Result<TeamListing, ServerFnError>>,
}

impl UseTeams {
	/// Subscribes the surrounding `Suspense`/`Transition` to the fetch.
	pub fn track(&self) {
		self.listing.with(|_| ());
	}

	pub async fn add_team(&self, team: NewTeam) -> Result<Team, ServerFnError> {
		create_team(team)
			.await
			.inspect_err(|add_error| error!("Error adding team: {}", add_error))
	}

	pub async fn update_team(&self, id: String, team: NewTeam) -> Result<Team, ServerFnError> {
		update_team(id, team)
			.await
			.inspect_err(|update_error| error!("Error updating team: {}", update_error))
	}
}

/// Loads every team, or just the team with the given ID.
pub fn use_teams(id: Option<String>) -> UseTeams {
	let listing = Resource::new(move || id.clone(), fetch_team_listing);
	let state = RwSignal::new(TeamsState::new());

	Effect::new_isomorphic(move |_| {
		if let Some(result) = listing.get() {
			state.try_update(|state| state.apply(result));
		}
	});

	UseTeams {
		teams: Signal::derive(move || state.with(|state| state.teams.clone())),
		team: Signal::derive(move || state.with(|state| state.team.clone())),
		loading: Signal::derive(move || state.with(|state| state.loading)),
		listing,
	}
}

async fn fetch_team_listing(id: Option<String>) -> Result<TeamListing, ServerFnError> {
	match id {
		Some(id) => get_team(id).await.map(TeamListing::One),
		None => get_teams().await.map(TeamListing::All),
	}
}

#[server]
async fn get_teams() -> Result<Vec<Team>, ServerFnError> {
	use crate::web::pages::server_utils::backend_client;

	let teams = backend_client().list_teams().await?;
	Ok(teams)
}

#[server]
async fn get_team(id: String) -> Result<Team, ServerFnError> {
	use crate::web::pages::server_utils::backend_client;

	let team = backend_client().get_team(&id).await?;
	Ok(team)
}

#[server]
async fn create_team(team: NewTeam) -> Result<Team, ServerFnError> {
	use crate::web::pages::server_utils::backend_client;

	let created = backend_client()
		.create_team(&team)
		.await
		.inspect_err(|error| tracing::error!(source = ?error, "Failed to add team"))?;
	tracing::info!(id = %created.id, campaign = %created.campaign_id, "Team added");
	Ok(created)
}

#[server]
async fn update_team(id: String, team: NewTeam) -> Result<Team, ServerFnError> {
	use crate::web::pages::server_utils::backend_client;

	let updated = backend_client()
		.update_team(&id, &team)
		.await
		.inspect_err(|error| tracing::error!(source = ?error, team = %id, "Failed to update team"))?;
	Ok(updated)
}
