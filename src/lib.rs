//! webtools — core logic behind the portfolio's developer tools.
//!
//! This library crate exposes the password generator, the URL builder,
//! and their persistence layer for use by the site and integration tests.

pub mod managers;
pub mod services;
pub mod storage;
pub mod types;
