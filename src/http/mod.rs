//! HTTP plumbing: header construction and the pluggable transport.

pub mod headers;
pub mod transport;

pub use headers::{HttpHeaderBuilder, basic_auth_value};
pub use transport::{
    HttpMethod, HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport,
};
