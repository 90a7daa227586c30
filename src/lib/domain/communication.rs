//! Outbound e-mail: addresses, messages and the mailer abstraction.

mod email_address;
pub mod mailer;

pub use email_address::{EmailAddress, EmailAddressError};
