use url::Url;

use crate::error::{Error, Result};

/// Query parameter carrying the request in the HTTP-Redirect binding.
///
/// Case-sensitive, per the SAML 2.0 bindings specification.
pub const SAML_REQUEST_PARAM: &str = "SAMLRequest";

/// Extracts the `SAMLRequest` value from a redirect URL.
///
/// Returns the first value bound to the parameter. `query_pairs` undoes the
/// percent-encoding layer, so the result is the bare base64 text.
pub fn saml_request_param(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;
    parsed
        .query_pairs()
        .find(|(key, _)| *key == SAML_REQUEST_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or(Error::MissingParam {
            name: SAML_REQUEST_PARAM,
        })
}
