//! Browser glue and guard helpers shared by pages.

pub mod auth;
pub mod storage;
