// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div id="not_found_page">
			<h2>"Not found!"</h2>
			<p>"The team or page you were looking for is not here."</p>
			<a href="/">"Back to teams"</a>
		</div>
	}
}
