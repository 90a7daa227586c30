//! Concrete collaborators: SMTP transport, message catalogs and configuration

pub mod config;
pub mod email;
pub mod i18n;
