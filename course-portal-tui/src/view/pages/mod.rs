//! 页面

pub mod dashboard;
pub mod login;
pub mod settings;
