//! Conversions between IP addresses and integers.
//!
//! IPv4 addresses map to a single `u32`, IPv6 addresses to a `(high, low)`
//! pair of `u64` or to an arbitrary-precision [`BigUint`]. All conversions
//! use network byte order.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use num_bigint::BigUint;
use std::net::IpAddr;
use thiserror::Error;

pub mod bigint;
pub mod config;
pub mod util;
pub mod v4;
pub mod v6;

pub use bigint::{big_int_to_ipv6, big_int_to_ipv6_addr, ip_to_big_int, ipv6_to_big_int};
pub use v4::{int_to_ipv4, int_to_ipv4_addr, ip_to_int, ipv4_to_int};
pub use v6::{int_to_ipv6, int_to_ipv6_addr, ip_to_int_pair, ipv6_to_int};

/// Routes exposing every conversion over HTTP.
pub fn app() -> Router {
    Router::new()
        .route("/v4/address/:addr", get(v4::to_int))
        .route("/v4/integer/:n", get(v4::from_int))
        .route("/v6/address/:addr", get(v6::to_int))
        .route("/v6/integer/:high/:low", get(v6::from_int))
        .route("/v6/big/address/:addr", get(bigint::to_int))
        .route("/v6/big/integer/:n", get(bigint::from_int))
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("expected {expected} address bytes, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("{0} is not an IPv4 address")]
    Family(IpAddr),
    #[error("{0} does not fit in 128 bits")]
    Overflow(BigUint),
    #[error("invalid integer {0:?}")]
    Parse(String),
    #[error("invalid {name} value {value:?}")]
    Config { name: &'static str, value: String },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
