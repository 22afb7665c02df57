// webtools shared type definitions
// Each submodule defines types used across the library.

pub mod errors;
pub mod password;
pub mod url;
