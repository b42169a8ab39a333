use crate::server::{
    error::AppError, model::contact::CreateContactParams, service::contact::ContactService,
};
use entity::prelude::ContactMessage;
use test_utils::builder::TestBuilder;


fn params(name: &str, email: &str, message: &str) -> CreateContactParams {
    CreateContactParams {
        name: name.to_string(),
        email: email.to_string(),
        subject: "Góp ý".to_string(),
        message: message.to_string(),
        ip_hash: "iphash-contact".to_string(),
    }
}
