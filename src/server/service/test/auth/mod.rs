use crate::server::{
    error::{auth::AuthError, AppError},
    service::{
        admin::setup_code::SetupCodeService,
        auth::{hash_password, AuthService},
    },
};
use entity::prelude::AdminUser;
use test_utils::{builder::TestBuilder, factory::admin_user::AdminUserFactory};

mod setup;
