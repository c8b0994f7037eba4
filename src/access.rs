use std::collections::HashSet;
use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::structs::api;

pub const GROUPS_CLAIM: &str = "cognito:groups";
pub const PRIVILEGED_GROUP: &str = "admins";

/// Header in which the fronting authorizer forwards already verified claims, as a JSON object.
pub const CLAIMS_HEADER: &str = "x-authorizer-claims";

pub type Claims = Map<String, Value>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("{}", api::NOT_AUTHORIZED)]
    NotAuthorized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessGate {
    groups_claim: String,
    privileged_group: String,
}

impl Default for AccessGate {
    fn default() -> Self {
        AccessGate::new(GROUPS_CLAIM, PRIVILEGED_GROUP)
    }
}

impl AccessGate {
    pub fn new(groups_claim: &str, privileged_group: &str) -> Self {
        AccessGate {
            groups_claim: groups_claim.to_owned(),
            privileged_group: privileged_group.to_owned(),
        }
    }

    pub fn is_privileged(&self, claims: Option<&Claims>) -> bool {
        claims
            .and_then(|claims| claims.get(&self.groups_claim))
            .map(group_memberships)
            .is_some_and(|groups| groups.contains(self.privileged_group.as_str()))
    }

    pub fn authorize(&self, claims: Option<&Claims>) -> Result<(), AccessError> {
        if self.is_privileged(claims) {
            Ok(())
        } else {
            Err(AccessError::NotAuthorized)
        }
    }
}

/// Normalizes a groups claim into a set of names.
///
/// Authorizers hand the claim over either as a list or as one string such as
/// `admins,editors` or `[admins editors]`.
pub fn group_memberships(claim: &Value) -> HashSet<&str> {
    match claim {
        Value::String(groups) => groups
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|group| !group.is_empty())
            .collect(),
        Value::Array(groups) => groups
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|group| !group.is_empty())
            .collect(),
        _ => HashSet::new(),
    }
}

/// Reads forwarded claims. A missing or malformed header means no claims.
pub fn claims_from_headers(headers: &HeaderMap) -> Option<Claims> {
    let raw = headers.get(CLAIMS_HEADER)?.to_str().ok()?;
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(claims)) => Some(claims),
        _ => {
            tracing::debug!("ignoring undecodable authorizer claims");
            None
        }
    }
}

/// Extractor for the claims attached to a request by the transport layer.
#[derive(Debug, Default)]
pub struct AuthorizerClaims(pub Option<Claims>);

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizerClaims
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(AuthorizerClaims(claims_from_headers(&parts.headers)))
    }
}
