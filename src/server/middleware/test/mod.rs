mod auth;
mod security;
