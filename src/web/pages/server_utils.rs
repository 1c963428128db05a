// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::BackendClient;
use crate::web::state::AppState;
use leptos::prelude::*;

/// Gets the client for the team backend.
/// Must be used from a server function; relies on the server context.
pub fn backend_client() -> BackendClient {
	let state: AppState = expect_context();
	state.backend
}
