mod common;
mod concurrency;
mod logging;
mod responses;
mod update_user;
