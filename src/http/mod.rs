//! HTTP request execution: one attempt in, one observable outcome out.
mod client;
mod issuer;
mod outcome;

#[cfg(test)]
pub(crate) mod test_support;

pub use issuer::{HttpIssuer, RequestIssuer};
pub use outcome::RequestOutcome;
