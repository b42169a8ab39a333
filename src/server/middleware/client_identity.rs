//! Pseudonymous caller identity.
//!
//! Raw IPs are never stored. Every handler that needs to tell clients apart works
//! with the salted hash produced here.

use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

use crate::server::{
    state::AppState,
    util::hash::{client_ip, ip_hash},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub ip_hash: String,
}

impl ClientIdentity {
    pub fn from_parts(parts: &Parts, salt: &str) -> Self {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        let ip = client_ip(&parts.headers, peer);

        Self {
            ip_hash: ip_hash(salt, &ip),
        }
    }
}

impl FromRequestParts<AppState> for ClientIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts, &state.ip_hash_salt))
    }
}
