// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::hooks::use_teams;
use leptos::prelude::*;

#[component]
pub fn TeamList() -> impl IntoView {
	let teams = use_teams(None);

	view! {
		<h2>"Teams"</h2>
		<Transition fallback=|| view! { <div class="team_list_loading">"Loading teams..."</div> }>
			{move || teams.track()}
			{
				move || {
					let team_list = teams.teams.get();
					if teams.loading.get() {
						view! { <div class="team_list_loading">"Loading teams..."</div> }.into_any()
					} else if team_list.is_empty() {
						view! { <div class="team_list_none">"No teams have been created."</div> }.into_any()
					} else {
						view! {
							<ul class="team_list">
								{
									team_list.into_iter().map(|team|
										view! {
											<li>
												<a href={team_edit_url(&team.id)}>
													{team.name}
												</a>
											</li>
										}
									).collect_view()
								}
							</ul>
						}.into_any()
					}
				}
			}
		</Transition>
		<div class="team_list_create_link">
			<a href="/teams/new">"Create new team"</a>
		</div>
	}
}

/// Makes the edit URL for a team
fn team_edit_url(team_id: &str) -> String {
	format!("/teams/{}/edit", team_id)
}
