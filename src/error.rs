use std::{error::Error, fmt};

/// Error returned when the input does not conform to the JSON number grammar
/// ([RFC 7159], section 6).
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159#section-6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MalformedNumber;

impl fmt::Display for MalformedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("malformed JSON number")
    }
}

impl Error for MalformedNumber {}
