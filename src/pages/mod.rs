//! Route components, one module per screen.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod payments;
pub mod profile;
pub mod register;
pub mod reviews;
pub mod settings;
pub mod task_create;
pub mod task_detail;
pub mod tasks;
