mod banned_ip;
mod comment;
mod daily_task;
mod newsletter;
mod poll;
mod post;
mod rate_limit;
mod reading_history;
