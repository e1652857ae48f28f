use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("query parameter '{name}' not found in URL")]
    MissingParam { name: &'static str },

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("raw DEFLATE stream is truncated or corrupt: {0}")]
    Inflate(#[source] io::Error),

    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("no XML element found in payload")]
    MissingRoot,

    #[error("XML document ends with {0} unclosed element(s)")]
    UnclosedElements(usize),

    #[error("content after the document root element")]
    TrailingContent,
}

pub type Result<T> = std::result::Result<T, Error>;
