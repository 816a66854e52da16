//! Tower middleware used by the router.

pub mod cors;
pub mod logging;
