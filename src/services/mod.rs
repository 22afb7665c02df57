// webtools services
// Each submodule implements one tool behind a small, testable interface.

pub mod config_store;
pub mod password_generator;
pub mod random_source;
pub mod url_composer;
