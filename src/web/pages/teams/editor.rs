// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::form::{TeamForm, TeamFormField};
use super::hooks::use_teams;
use crate::model::{Campaign, NewTeam, Team};
use crate::web::pages::errors::not_found::NotFound;
use crate::web::pages::toast::{ToastKind, use_toasts};
use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq)]
struct TeamParams {
	id: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EditorMode {
	Create,
	Edit(String),
}

impl EditorMode {
	fn team_id(&self) -> Option<String> {
		match self {
			Self::Create => None,
			Self::Edit(id) => Some(id.clone()),
		}
	}

	fn loads_team(&self) -> bool {
		matches!(self, Self::Edit(_))
	}

	fn heading(&self) -> &'static str {
		match self {
			Self::Create => "Create Team",
			Self::Edit(_) => "Edit Team",
		}
	}

	fn submit_label(&self) -> &'static str {
		match self {
			Self::Create => "Add Team",
			Self::Edit(_) => "Save Team",
		}
	}

	fn success_message(&self) -> &'static str {
		match self {
			Self::Create => "Team added successfully",
			Self::Edit(_) => "Team updated successfully",
		}
	}

	fn failure_message(&self) -> &'static str {
		match self {
			Self::Create => "Error creating team!",
			Self::Edit(_) => "Error updating team!",
		}
	}
}

#[component]
pub fn AddTeam() -> impl IntoView {
	view! { <TeamEditor mode=EditorMode::Create /> }
}

#[component]
pub fn EditTeam() -> impl IntoView {
	let params = use_params::<TeamParams>();
	let team_id = team_id_memo(move || params.read().as_ref().ok().and_then(|params| params.id.clone()));

	// Rebuilt when the route moves to another team without leaving this view.
	move || match team_id.get() {
		Some(id) => view! { <TeamEditor mode=EditorMode::Edit(id) /> }.into_any(),
		None => view! { <NotFound /> }.into_any(),
	}
}

fn team_id_memo(route_id: impl Fn() -> Option<String> + Send + Sync + 'static) -> Memo<Option<String>> {
	Memo::new(move |_| route_id())
}

#[component]
pub fn TeamEditor(mode: EditorMode) -> impl IntoView {
	let loads_team = mode.loads_team();
	let teams = use_teams(mode.team_id());
	let campaigns = OnceResource::new(get_campaigns());
	let toasts = use_toasts();

	let state = RwSignal::new(EditorState::default());

	if loads_team {
		Effect::new_isomorphic(move |_| {
			if let Some(team) = teams.team.get() {
				state.update(|state| state.form = TeamForm::from_team(&team));
			}
		});
	}

	Effect::new(move |_| {
		if let Some(Err(fetch_error)) = campaigns.get() {
			error!("Failed to fetch campaigns: {}", fetch_error);
		}
	});

	let heading = mode.heading();
	let submit_label = mode.submit_label();
	let mode = StoredValue::new(mode);

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();
		let Some(payload) = state.try_update(EditorState::begin_submit).flatten() else {
			return;
		};

		let mode = mode.get_value();
		spawn_local(async move {
			let result = match &mode {
				EditorMode::Create => teams.add_team(payload).await,
				EditorMode::Edit(id) => teams.update_team(id.clone(), payload).await,
			};

			// The editor may have been unmounted while the request was out.
			if let Some((kind, message)) = state.try_update(|state| state.finish_submit(&mode, result)) {
				toasts.notify(kind, message);
			}
		});
	};

	view! {
		<div class="team_editor">
			<h2>{heading}</h2>
			<Transition fallback=|| view! { <div class="team_editor_loading">"Loading..."</div> }>
				{
					move || if loads_team {
						teams.track();
					}
				}
				<form class="team_editor_form" on:submit=form_submit>
					<label for="team-name" class="team_editor_field">
						<span class="team_editor_label_text">"Team Name"</span>
						<input
							type="text"
							id="team-name"
							name="teamName"
							placeholder="Team Name"
							required
							prop:value=move || state.with(|state| state.form.get(TeamFormField::Name).to_owned())
							on:input=move |event| {
								state.update(|state| state.form.set(TeamFormField::Name, event_target_value(&event)))
							}
						/>
					</label>
					<label for="user-campaign" class="team_editor_field">
						<span class="team_editor_label_text">"User Campaign"</span>
						<select
							id="user-campaign"
							name="campaignId"
							required
							prop:value=move || {
								campaigns.with(|_| ());
								state.with(|state| state.form.get(TeamFormField::CampaignId).to_owned())
							}
							on:change=move |event| {
								state.update(|state| state.form.set(TeamFormField::CampaignId, event_target_value(&event)))
							}
						>
							<option
								value=""
								disabled=true
								selected=move || state.with(|state| state.form.selects_campaign(""))
							>
								"Select User Campaign"
							</option>
							{
								move || campaign_options(campaigns.get())
									.into_iter()
									.map(|campaign| {
										let campaign_id = campaign.id.clone();
										view! {
											<option
												value={campaign.id}
												selected=move || state.with(|state| state.form.selects_campaign(&campaign_id))
											>
												{campaign.name}
											</option>
										}
									})
									.collect_view()
							}
						</select>
					</label>
					<div class="team_editor_submit">
						<button type="submit" disabled=move || state.with(|state| state.submitting)>
							{submit_label}
						</button>
					</div>
				</form>
			</Transition>
		</div>
	}
}

/// Form values plus whether a submission is waiting on the backend.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct EditorState {
	form: TeamForm,
	submitting: bool,
}

impl EditorState {
	/// Marks a submission as in flight and returns its body.
	///
	/// Returns `None` without changing anything while another submission is out or
	/// a required field is empty.
	fn begin_submit(&mut self) -> Option<NewTeam> {
		if self.submitting {
			return None;
		}
		let payload = self.form.payload()?;
		self.submitting = true;
		Some(payload)
	}

	/// Applies a finished submission and picks the toast to show for it.
	///
	/// New teams clear the form; edits keep what the backend returned. Failures leave
	/// the form as the user entered it.
	fn finish_submit(&mut self, mode: &EditorMode, result: Result<Team, ServerFnError>) -> (ToastKind, &'static str) {
		self.submitting = false;
		match result {
			Ok(team) => {
				match mode {
					EditorMode::Create => self.form.reset(),
					EditorMode::Edit(_) => self.form = TeamForm::from_team(&team),
				}
				(ToastKind::Success, mode.success_message())
			}
			Err(_) => (ToastKind::Error, mode.failure_message()),
		}
	}
}

fn campaign_options(campaigns: Option<Result<Vec<Campaign>, ServerFnError>>) -> Vec<Campaign> {
	match campaigns {
		Some(Ok(campaigns)) => campaigns,
		_ => Vec::new(),
	}
}

#[server]
async fn get_campaigns() -> Result<Vec<Campaign>, ServerFnError> {
	use crate::web::pages::server_utils::backend_client;

	let campaigns = backend_client()
		.list_campaigns()
		.await
		.inspect_err(|error| tracing::error!(source = ?error, "Failed to fetch campaigns"))?;
	Ok(campaigns)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::web::pages::toast::ToastQueue;

	fn filled_state() -> EditorState {
		EditorState {
			form: TeamForm {
				name: String::from("Closers"),
				campaign_id: String::from("c-3"),
			},
			submitting: false,
		}
	}

	fn saved_team() -> Team {
		Team {
			id: String::from("t-1"),
			name: String::from("Closers"),
			campaign_id: String::from("c-3"),
		}
	}

	#[test]
	fn begin_submit_marks_pending_and_returns_payload() {
		let mut state = filled_state();

		assert_eq!(
			state.begin_submit(),
			Some(NewTeam {
				name: String::from("Closers"),
				campaign_id: String::from("c-3"),
			})
		);
		assert!(state.submitting);
	}

	#[test]
	fn second_submit_is_rejected_while_pending() {
		let mut state = filled_state();
		assert!(state.begin_submit().is_some());

		assert_eq!(state.begin_submit(), None);
		assert!(state.submitting);
	}

	#[test]
	fn incomplete_form_does_not_start_submitting() {
		let mut state = filled_state();
		state.form.set(TeamFormField::CampaignId, String::new());

		assert_eq!(state.begin_submit(), None);
		assert!(!state.submitting);
	}

	#[test]
	fn created_team_clears_form() {
		let mut state = filled_state();
		state.begin_submit();
		let notice = state.finish_submit(&EditorMode::Create, Ok(saved_team()));

		assert_eq!(notice, (ToastKind::Success, "Team added successfully"));
		assert_eq!(state, EditorState::default());
	}

	#[test]
	fn rejected_create_clears_pending_and_keeps_form() {
		let mut state = filled_state();
		state.begin_submit();
		let (kind, message) = state.finish_submit(
			&EditorMode::Create,
			Err(ServerFnError::new("team backend responded with HTTP status 400")),
		);

		let mut toasts = ToastQueue::default();
		toasts.push(kind, String::from(message));

		assert!(!state.submitting);
		assert_eq!(state.form, filled_state().form);
		assert_eq!(toasts.toasts().len(), 1);
		assert_eq!(toasts.toasts()[0].kind, ToastKind::Error);
		assert_eq!(toasts.toasts()[0].message, "Error creating team!");

		// The user can try again straight away.
		assert!(state.begin_submit().is_some());
	}

	#[test]
	fn updated_team_shows_saved_values() {
		let mut state = filled_state();
		state.begin_submit();
		let mut renamed = saved_team();
		renamed.name = String::from("Closers East");
		let notice = state.finish_submit(&EditorMode::Edit(String::from("t-1")), Ok(renamed));

		assert_eq!(notice, (ToastKind::Success, "Team updated successfully"));
		assert_eq!(state.form.name, "Closers East");
		assert!(!state.submitting);
	}

	#[test]
	fn failed_update_reports_update_error() {
		let mut state = filled_state();
		state.begin_submit();
		let notice = state.finish_submit(
			&EditorMode::Edit(String::from("t-1")),
			Err(ServerFnError::new("request to the team backend failed")),
		);

		assert_eq!(notice, (ToastKind::Error, "Error updating team!"));
		assert_eq!(state.form, filled_state().form);
		assert!(!state.submitting);
	}

	#[test]
	fn only_edit_mode_waits_on_a_team() {
		assert!(!EditorMode::Create.loads_team());
		assert!(EditorMode::Edit(String::from("t-1")).loads_team());
	}

	#[test]
	fn team_key_follows_route_changes() {
		let owner = Owner::new();
		owner.set();

		let route_id = RwSignal::new(Some(String::from("t-1")));
		let team_id = team_id_memo(move || route_id.get());
		assert_eq!(team_id.get_untracked(), Some(String::from("t-1")));

		route_id.set(Some(String::from("t-2")));
		assert_eq!(team_id.get_untracked(), Some(String::from("t-2")));

		route_id.set(None);
		assert_eq!(team_id.get_untracked(), None);
	}

	#[test]
	fn campaign_options_keep_received_order() {
		let campaigns = vec![
			Campaign {
				id: String::from("z"),
				name: String::from("Zeta"),
			},
			Campaign {
				id: String::from("a"),
				name: String::from("Alpha"),
			},
		];

		assert_eq!(campaign_options(Some(Ok(campaigns.clone()))), campaigns);
	}

	#[test]
	fn campaign_options_empty_until_loaded_or_on_failure() {
		assert!(campaign_options(None).is_empty());
		assert!(campaign_options(Some(Err(ServerFnError::new("offline")))).is_empty());
	}
}
