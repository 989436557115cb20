//! Types shared between the remote task resource wire format and its clients.

pub mod domain;
pub mod protocol;
