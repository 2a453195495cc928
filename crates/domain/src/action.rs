//! Action — the closed set of operations a request can ask for.

use std::fmt;

use crate::error::ValidationError;

/// One store operation, carrying exactly the inputs it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List every tag.
    GetTags,
    /// Look up the id of the tag called `name`.
    FindTagByName { name: String },
    /// Insert the tag `name`, or point it at `new_id` if it already exists.
    UpdateTag { name: String, new_id: String },
    /// Look up the base id of entry `id`.
    FindEntry { id: String },
    /// Record that entry `id` derives from `base_id`.
    AddEntry { id: String, base_id: String },
}

impl Action {
    /// Build an action from its wire name and a parameter lookup.
    ///
    /// The name must match exactly (case-sensitive). An unrecognised name yields
    /// `Ok(None)`: the caller answers such requests with an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingParameter`] when a recognised action
    /// lacks one of its inputs.
    pub fn from_params<F>(name: &str, mut param: F) -> Result<Option<Self>, ValidationError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut require = |action: &'static str, parameter: &'static str| {
            param(parameter).ok_or(ValidationError::MissingParameter { action, parameter })
        };

        let action = match name {
            "get_tags" => Self::GetTags,
            "find_tag_by_name" => Self::FindTagByName {
                name: require("find_tag_by_name", "name")?,
            },
            "update_tag" => Self::UpdateTag {
                name: require("update_tag", "name")?,
                new_id: require("update_tag", "new_id")?,
            },
            "find_entry" => Self::FindEntry {
                id: require("find_entry", "id")?,
            },
            "add_entry" => Self::AddEntry {
                id: require("add_entry", "id")?,
                base_id: require("add_entry", "base_id")?,
            },
            _ => return Ok(None),
        };
        Ok(Some(action))
    }

    /// The wire name of this action, as used in the `action` query parameter.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetTags => "get_tags",
            Self::FindTagByName { .. } => "find_tag_by_name",
            Self::UpdateTag { .. } => "update_tag",
            Self::FindEntry { .. } => "find_entry",
            Self::AddEntry { .. } => "add_entry",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(name: &str, pairs: &[(&str, &str)]) -> Result<Option<Action>, ValidationError> {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Action::from_params(name, |key| params.get(key).cloned())
    }

    #[test]
    fn should_parse_get_tags_without_parameters() {
        assert_eq!(parse("get_tags", &[]).unwrap(), Some(Action::GetTags));
    }

    #[test]
    fn should_parse_update_tag_with_both_parameters() {
        let action = parse("update_tag", &[("name", "release"), ("new_id", "7")]).unwrap();
        assert_eq!(
            action,
            Some(Action::UpdateTag {
                name: "release".to_string(),
                new_id: "7".to_string(),
            })
        );
    }

    #[test]
    fn should_parse_add_entry_and_ignore_unrelated_parameters() {
        let action = parse(
            "add_entry",
            &[("id", "e1"), ("base_id", "e0"), ("name", "ignored")],
        )
        .unwrap();
        assert_eq!(
            action,
            Some(Action::AddEntry {
                id: "e1".to_string(),
                base_id: "e0".to_string(),
            })
        );
    }

    #[test]
    fn should_accept_empty_parameter_values() {
        let action = parse("find_entry", &[("id", "")]).unwrap();
        assert_eq!(action, Some(Action::FindEntry { id: String::new() }));
    }

    #[test]
    fn should_return_none_when_action_is_unknown() {
        assert_eq!(parse("delete_tag", &[("name", "x")]).unwrap(), None);
        assert_eq!(parse("", &[]).unwrap(), None);
    }

    #[test]
    fn should_match_action_name_case_sensitively() {
        assert_eq!(parse("GET_TAGS", &[]).unwrap(), None);
        assert_eq!(parse("Get_Tags", &[]).unwrap(), None);
    }

    #[test]
    fn should_report_missing_parameter_when_required_input_absent() {
        let err = parse("update_tag", &[("name", "release")]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingParameter {
                action: "update_tag",
                parameter: "new_id",
            }
        );
    }

    #[test]
    fn should_report_name_of_every_action() {
        let actions = [
            (Action::GetTags, "get_tags"),
            (
                Action::FindTagByName {
                    name: String::new(),
                },
                "find_tag_by_name",
            ),
            (
                Action::UpdateTag {
                    name: String::new(),
                    new_id: String::new(),
                },
                "update_tag",
            ),
            (Action::FindEntry { id: String::new() }, "find_entry"),
            (
                Action::AddEntry {
                    id: String::new(),
                    base_id: String::new(),
                },
                "add_entry",
            ),
        ];
        for (action, name) in actions {
            assert_eq!(action.name(), name);
            assert_eq!(action.to_string(), name);
        }
    }
}
