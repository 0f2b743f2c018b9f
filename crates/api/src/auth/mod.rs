//! Credential service: password hashing and bearer-token issue/verify.

pub mod jwt;
pub mod password;
