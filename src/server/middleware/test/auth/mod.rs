use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
};
use test_utils::{builder::TestBuilder, factory::admin_user::AdminUserFactory};

mod require;
