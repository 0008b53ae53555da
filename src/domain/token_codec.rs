//! Reversible mapping between record ids and public short tokens.
//!
//! A token is the URL-safe base64 encoding of the id's decimal text with
//! padding stripped. Encoding the store-assigned integer directly (rather
//! than generating a random code) keeps tokens short and collision-free by
//! construction; ids become guessable, which is an accepted tradeoff for a
//! minimal shortener, not a security boundary.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Errors produced when a token cannot be reversed to an id.
///
/// Never surfaced to HTTP clients directly — the service layer folds every
/// variant into a 404 response.
#[derive(Debug, thiserror::Error)]
pub enum TokenDecodeError {
    #[error("token is not valid base64url: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("decoded token is not valid UTF-8")]
    InvalidUtf8,

    #[error("decoded token is not a decimal id: {0}")]
    InvalidId(String),
}

/// Codec converting between a positive integer id and its public token.
///
/// Stateless and cheap to copy. Constructed once at startup and owned by the
/// service layer; there is no process-wide instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCodec;

impl TokenCodec {
    pub fn new() -> Self {
        Self
    }

    /// Encodes an id into a URL-safe token.
    ///
    /// The output contains only characters from the base64url alphabet
    /// (`A-Z a-z 0-9 - _`); padding is stripped and reconstructed from the
    /// token length at decode time.
    pub fn encode(&self, id: i64) -> String {
        URL_SAFE_NO_PAD.encode(id.to_string().as_bytes())
    }

    /// Decodes a token back into the id it was encoded from.
    ///
    /// Purely syntactic: whether a record with that id exists is a separate
    /// lookup, never part of decoding.
    ///
    /// # Errors
    ///
    /// Returns [`TokenDecodeError`] when the token contains characters
    /// outside the base64url alphabet, decodes to non-UTF-8 bytes, or the
    /// decoded text is not a plain decimal integer.
    pub fn decode(&self, token: &str) -> Result<i64, TokenDecodeError> {
        let bytes = URL_SAFE_NO_PAD.decode(token)?;
        let text = String::from_utf8(bytes).map_err(|_| TokenDecodeError::InvalidUtf8)?;

        text.parse::<i64>()
            .map_err(|_| TokenDecodeError::InvalidId(text))
    }
}
