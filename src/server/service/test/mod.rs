mod admin;
mod auth;
mod comment;
mod contact;
mod gamification;
mod newsletter;
mod post;
mod reaction;
mod visitor;
