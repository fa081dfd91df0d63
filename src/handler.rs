use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use juniper::{
    InputValue,
    http::{GraphQLRequest, GraphQLResponse},
};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::RequestError,
    state::{AppData, AppState},
};

/// The only body shape `POST /` accepts. Unknown top-level keys are refused.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphqlBody {
    pub query: String,
    /// May be omitted, but when present it must be an object; `null` is refused.
    #[serde(default, deserialize_with = "variables_object")]
    pub variables: Option<Map<String, Value>>,
}

fn variables_object<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Map::deserialize(deserializer).map(Some)
}

impl GraphqlBody {
    pub fn into_request(self) -> Result<GraphQLRequest, RequestError> {
        let variables = self
            .variables
            .map(|vars| serde_json::from_value::<InputValue>(Value::Object(vars)))
            .transpose()?;
        Ok(GraphQLRequest::new(self.query, None, variables))
    }
}

/// Runs one query per request. GraphQL-level failures still answer 200 with
/// an `errors` array; only a malformed body is turned away.
pub async fn graphql(
    State(state): State<AppState>,
    payload: Result<Json<GraphqlBody>, JsonRejection>,
) -> Result<Json<GraphQLResponse>, RequestError> {
    let Json(body) = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Rejected GraphQL request body");
        RequestError::Body(rejection.body_text())
    })?;
    let request = body.into_request()?;

    let app_data = AppData::new(state.db.clone());
    let response = request.execute(&state.schema, &app_data).await;
    if !response.is_ok() {
        debug!("GraphQL response carries errors");
    }
    Ok(Json(response))
}

pub async fn sdl(State(state): State<AppState>) -> String {
    state.schema.as_sdl()
}
