// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{NewTeam, Team};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TeamFormField {
	Name,
	CampaignId,
}

/// Values entered into the team form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TeamForm {
	pub name: String,
	pub campaign_id: String,
}

impl TeamForm {
	pub fn from_team(team: &Team) -> Self {
		Self {
			name: team.name.clone(),
			campaign_id: team.campaign_id.clone(),
		}
	}

	pub fn get(&self, field: TeamFormField) -> &str {
		match field {
			TeamFormField::Name => &self.name,
			TeamFormField::CampaignId => &self.campaign_id,
		}
	}

	pub fn set(&mut self, field: TeamFormField, value: String) {
		match field {
			TeamFormField::Name => self.name = value,
			TeamFormField::CampaignId => self.campaign_id = value,
		}
	}

	/// Whether the campaign option with this value is the current choice.
	/// The empty value is the placeholder option.
	pub fn selects_campaign(&self, campaign_id: &str) -> bool {
		self.campaign_id == campaign_id
	}

	/// Builds the request body, or `None` while a required field is still empty.
	pub fn payload(&self) -> Option<NewTeam> {
		if self.name.trim().is_empty() || self.campaign_id.is_empty() {
			return None;
		}
		Some(NewTeam {
			name: self.name.clone(),
			campaign_id: self.campaign_id.clone(),
		})
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> TeamForm {
		let mut form = TeamForm::default();
		form.set(TeamFormField::Name, String::from("Closers"));
		form.set(TeamFormField::CampaignId, String::from("c-9"));
		form
	}

	#[test]
	fn filled_form_produces_payload() {
		assert_eq!(
			filled().payload(),
			Some(NewTeam {
				name: String::from("Closers"),
				campaign_id: String::from("c-9"),
			})
		);
	}

	#[test]
	fn both_fields_are_required() {
		let mut no_campaign = filled();
		no_campaign.set(TeamFormField::CampaignId, String::new());
		assert_eq!(no_campaign.payload(), None);

		let mut blank_name = filled();
		blank_name.set(TeamFormField::Name, String::from("   "));
		assert_eq!(blank_name.payload(), None);
	}

	#[test]
	fn reset_clears_every_field() {
		let mut form = filled();
		form.reset();
		assert_eq!(form.get(TeamFormField::Name), "");
		assert_eq!(form.get(TeamFormField::CampaignId), "");
	}

	#[test]
	fn placeholder_is_selected_until_a_campaign_is_chosen() {
		let mut form = TeamForm::default();
		assert!(form.selects_campaign(""));
		assert!(!form.selects_campaign("c-9"));

		form.set(TeamFormField::CampaignId, String::from("c-9"));
		assert!(!form.selects_campaign(""));
		assert!(form.selects_campaign("c-9"));
	}

	#[test]
	fn prefills_from_existing_team() {
		let team = Team {
			id: String::from("t-1"),
			name: String::from("Openers"),
			campaign_id: String::from("c-2"),
		};
		let form = TeamForm::from_team(&team);
		assert_eq!(form.get(TeamFormField::Name), "Openers");
		assert_eq!(form.get(TeamFormField::CampaignId), "c-2");
	}
}
