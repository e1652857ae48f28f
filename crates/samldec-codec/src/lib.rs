//! Decode pipeline for SAML HTTP-Redirect binding requests.
//!
//! The HTTP-Redirect binding carries an authentication request as a URL
//! query parameter: raw-DEFLATE-compressed, base64-encoded, then
//! percent-encoded. This crate undoes those layers for offline inspection.
//!
//! # Architecture
//!
//! - `extract.rs` - `SAMLRequest` query parameter lookup
//! - `codec.rs` - base64 decoding and raw DEFLATE decompression
//! - `pretty.rs` - XML re-indenting for readability
//! - `error.rs` - Shared error types

pub use codec::{base64_decode, inflate_raw};
pub use error::{Error, Result};
pub use extract::{SAML_REQUEST_PARAM, saml_request_param};
pub use pretty::reindent;

use tracing::debug;

pub mod codec;
mod error;
pub mod extract;
pub mod pretty;

/// Runs the full pipeline: URL → parameter → base64 → raw inflate → UTF-8.
///
/// Returns the request XML exactly as the service provider produced it.
/// Every stage failure propagates unchanged; there is no fallback path.
pub fn decode_request_url(url: &str) -> Result<String> {
    let encoded = extract::saml_request_param(url)?;
    debug!(len = encoded.len(), "extracted SAMLRequest parameter");

    let compressed = codec::base64_decode(&encoded)?;
    debug!(len = compressed.len(), "base64 decoded");

    let xml_bytes = codec::inflate_raw(&compressed)?;
    debug!(len = xml_bytes.len(), "raw DEFLATE stream inflated");

    Ok(String::from_utf8(xml_bytes)?)
}
