use axum::{
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        admin, auth, comment, contact, gamification, leaderboard, newsletter, poll, post as posts,
        reaction, visitor,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bơ Review API", description = "Blog, reader gamification and back-office API"),
    paths(
        posts::list_posts,
        posts::featured_posts,
        posts::categories,
        posts::get_post,
        posts::related_posts,
        posts::admin_list_posts,
        posts::admin_get_post,
        posts::create_post,
        posts::update_post,
        posts::delete_post,
        comment::list_comments,
        comment::create_comment,
        comment::admin_list_comments,
        comment::set_comment_approval,
        comment::delete_comment,
        reaction::get_reactions,
        reaction::toggle_reaction,
        poll::list_polls,
        poll::get_poll,
        poll::vote,
        poll::admin_list_polls,
        poll::create_poll,
        poll::update_poll,
        poll::delete_poll,
        visitor::create_profile,
        visitor::get_profile,
        visitor::update_profile,
        visitor::delete_profile,
        visitor::check_in,
        visitor::today_tasks,
        visitor::claim_task,
        visitor::record_read,
        visitor::reading_history,
        visitor::visitor_badges,
        leaderboard::get_leaderboard,
        gamification::list_badges,
        gamification::create_badge,
        gamification::update_badge,
        gamification::delete_badge,
        gamification::list_tasks,
        gamification::create_task,
        gamification::update_task,
        gamification::delete_task,
        contact::submit_contact,
        newsletter::subscribe,
        newsletter::unsubscribe,
        auth::setup,
        auth::login,
        auth::logout,
        auth::get_me,
        admin::get_stats,
        admin::list_bans,
        admin::create_ban,
        admin::delete_ban,
        admin::list_contacts,
        admin::mark_contact_read,
        admin::delete_contact,
        admin::list_subscribers,
    ),
    tags(
        (name = "post", description = "Blog posts"),
        (name = "comment", description = "Comments and moderation"),
        (name = "reaction", description = "Post reactions"),
        (name = "poll", description = "Polls and voting"),
        (name = "visitor", description = "Anonymous reader profiles and progress"),
        (name = "leaderboard", description = "XP rankings"),
        (name = "gamification", description = "Badge and daily task administration"),
        (name = "contact", description = "Contact form"),
        (name = "newsletter", description = "Newsletter subscriptions"),
        (name = "auth", description = "Admin authentication"),
        (name = "admin", description = "Back-office")
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(openapi))
        .merge(public_routes())
        .merge(auth_routes())
        .merge(admin_routes())
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(posts::list_posts))
        .route("/api/posts/featured", get(posts::featured_posts))
        .route("/api/posts/categories", get(posts::categories))
        .route("/api/posts/{slug}", get(posts::get_post))
        .route("/api/posts/{slug}/related", get(posts::related_posts))
        .route(
            "/api/comments",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route(
            "/api/reactions",
            get(reaction::get_reactions).post(reaction::toggle_reaction),
        )
        .route("/api/polls", get(poll::list_polls))
        .route("/api/polls/vote", post(poll::vote))
        .route("/api/polls/{id}", get(poll::get_poll))
        .route("/api/visitor/profile", post(visitor::create_profile))
        .route(
            "/api/visitor/{visitor_id}",
            get(visitor::get_profile)
                .patch(visitor::update_profile)
                .delete(visitor::delete_profile),
        )
        .route("/api/visitor/{visitor_id}/check-in", post(visitor::check_in))
        .route("/api/visitor/{visitor_id}/tasks", get(visitor::today_tasks))
        .route(
            "/api/visitor/{visitor_id}/tasks/{task_id}/claim",
            post(visitor::claim_task),
        )
        .route("/api/visitor/{visitor_id}/read", post(visitor::record_read))
        .route(
            "/api/visitor/{visitor_id}/history",
            get(visitor::reading_history),
        )
        .route(
            "/api/visitor/{visitor_id}/badges",
            get(visitor::visitor_badges),
        )
        .route("/api/leaderboard", get(leaderboard::get_leaderboard))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/newsletter/subscribe", post(newsletter::subscribe))
        .route("/api/newsletter/unsubscribe", post(newsletter::unsubscribe))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/setup", post(auth::setup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::get_me))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/stats", get(admin::get_stats))
        .route(
            "/api/admin/posts",
            get(posts::admin_list_posts).post(posts::create_post),
        )
        .route(
            "/api/admin/posts/{id}",
            get(posts::admin_get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/admin/comments", get(comment::admin_list_comments))
        .route(
            "/api/admin/comments/{id}",
            put(comment::set_comment_approval)
                .patch(comment::set_comment_approval)
                .delete(comment::delete_comment),
        )
        .route(
            "/api/admin/polls",
            get(poll::admin_list_polls).post(poll::create_poll),
        )
        .route(
            "/api/admin/polls/{id}",
            put(poll::update_poll)
                .patch(poll::update_poll)
                .delete(poll::delete_poll),
        )
        .route(
            "/api/admin/bans",
            get(admin::list_bans).post(admin::create_ban),
        )
        .route("/api/admin/bans/{id}", delete(admin::delete_ban))
        .route("/api/admin/contacts", get(admin::list_contacts))
        .route(
            "/api/admin/contacts/{id}",
            patch(admin::mark_contact_read).delete(admin::delete_contact),
        )
        .route("/api/admin/newsletter", get(admin::list_subscribers))
        .route(
            "/api/admin/badges",
            get(gamification::list_badges).post(gamification::create_badge),
        )
        .route(
            "/api/admin/badges/{id}",
            put(gamification::update_badge).delete(gamification::delete_badge),
        )
        .route(
            "/api/admin/tasks",
            get(gamification::list_tasks).post(gamification::create_task),
        )
        .route(
            "/api/admin/tasks/{id}",
            put(gamification::update_task).delete(gamification::delete_task),
        )
}
