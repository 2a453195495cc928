//! The action-dispatch endpoint.
//!
//! `GET /api?action=<name>&...` maps one query string onto one
//! [`Action`], runs it, and writes the result:
//!
//! | action             | success body                              |
//! |--------------------|-------------------------------------------|
//! | `get_tags`         | JSON array of `{"Name": .., "Id": ..}`    |
//! | `find_tag_by_name` | the tag id as plain text, or empty        |
//! | `update_tag`       | empty                                     |
//! | `find_entry`       | the base id as plain text, or empty       |
//! | `add_entry`        | empty                                     |
//!
//! Unknown or absent actions get an empty `200`.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use metahive_app::ports::{EntryRepository, TagRepository};
use metahive_domain::action::Action;
use metahive_domain::error::MetaHiveError;
use metahive_domain::tag::Tag;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the dispatch endpoint.
pub enum ActionResponse {
    /// All tags, as a JSON array.
    Tags(Json<Vec<Tag>>),
    /// A single looked-up value, unquoted.
    Text(String),
    /// Nothing found, nothing to report, or an unknown action.
    Empty,
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Tags(json) => json.into_response(),
            Self::Text(value) => value.into_response(),
            Self::Empty => ().into_response(),
        }
    }
}

/// `GET /api?action=...`
#[allow(clippy::missing_errors_doc)]
pub async fn dispatch<TR, ER>(
    State(state): State<AppState<TR, ER>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ActionResponse, ApiError>
where
    TR: TagRepository + Send + Sync + 'static,
    ER: EntryRepository + Send + Sync + 'static,
{
    let name = params.get("action").map_or("", String::as_str);
    let Some(action) =
        Action::from_params(name, |key| params.get(key).cloned()).map_err(MetaHiveError::from)?
    else {
        tracing::debug!(action = name, "ignoring unknown action");
        return Ok(ActionResponse::Empty);
    };

    tracing::debug!(%action, "dispatching action");
    let response = match action {
        Action::GetTags => ActionResponse::Tags(Json(state.tag_service.list_tags().await?)),
        Action::FindTagByName { name } => state
            .tag_service
            .find_tag(&name)
            .await?
            .map_or(ActionResponse::Empty, |tag| ActionResponse::Text(tag.id)),
        Action::UpdateTag { name, new_id } => {
            state.tag_service.update_tag(&name, &new_id).await?;
            ActionResponse::Empty
        }
        Action::FindEntry { id } => state
            .entry_service
            .find_entry(&id)
            .await?
            .map_or(ActionResponse::Empty, |entry| {
                ActionResponse::Text(entry.base_id)
            }),
        Action::AddEntry { id, base_id } => {
            state.entry_service.add_entry(&id, &base_id).await?;
            ActionResponse::Empty
        }
    };
    Ok(response)
}
