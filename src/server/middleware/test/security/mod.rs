use crate::server::{
    error::AppError,
    middleware::{client_identity::ClientIdentity, security::SecurityGuard},
    model::security::{CreateBanParams, RateAction},
    service::security::SecurityService,
};
use chrono::Utc;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod check;

fn identity(ip_hash: &str) -> ClientIdentity {
    ClientIdentity {
        ip_hash: ip_hash.to_string(),
    }
}
