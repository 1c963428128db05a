// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use std::time::Duration;

/// How long a toast stays on screen unless it's clicked away first.
pub const AUTO_CLOSE: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
	Success,
	Error,
}

impl ToastKind {
	fn class(self) -> &'static str {
		match self {
			Self::Success => "toast toast_success",
			Self::Error => "toast toast_error",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
	pub id: u64,
	pub kind: ToastKind,
	pub message: String,
}

/// The toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
	next_id: u64,
	toasts: Vec<Toast>,
}

impl ToastQueue {
	pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.toasts.push(Toast { id, kind, message });
		id
	}

	/// Removes a toast, returning whether it was still showing.
	pub fn dismiss(&mut self, id: u64) -> bool {
		let count_before = self.toasts.len();
		self.toasts.retain(|toast| toast.id != id);
		self.toasts.len() != count_before
	}

	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}
}

#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
	pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
		let queue = self.0;
		let Some(id) = queue.try_update(|queue| queue.push(kind, message.into())) else {
			return;
		};

		set_timeout(
			move || {
				queue.try_update(|queue| queue.dismiss(id));
			},
			AUTO_CLOSE,
		);
	}

	pub fn dismiss(&self, id: u64) {
		self.0.try_update(|queue| queue.dismiss(id));
	}
}

pub fn provide_toasts() -> Toasts {
	let toasts = Toasts(RwSignal::new(ToastQueue::default()));
	provide_context(toasts);
	toasts
}

pub fn use_toasts() -> Toasts {
	expect_context()
}

#[component]
pub fn ToastContainer() -> impl IntoView {
	let toasts = use_toasts();

	view! {
		<div id="toast_container" aria-live="polite">
			<For
				each=move || toasts.0.with(|queue| queue.toasts().to_vec())
				key=|toast| toast.id
				children=move |toast: Toast| {
					let id = toast.id;
					view! {
						<div
							class=toast.kind.class()
							role="alert"
							on:click=move |_| toasts.dismiss(id)
						>
							{toast.message}
						</div>
					}
				}
			/>
		</div>
	}
}
