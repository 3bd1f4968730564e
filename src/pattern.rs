//! Splitting route patterns into literal runs and named parameters.

use smallvec::SmallVec;

use crate::error::PatternDefect;
use crate::partials::key::PATH_SEPARATOR;

/// Marker that opens a named parameter at the start of a path component.
pub const PARAM_MARKER: u8 = b':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    /// Literal bytes matched as-is.
    Static(&'a [u8]),
    /// A named parameter occupying one whole path component.
    Param(&'a str),
}

pub(crate) type Pieces<'a> = SmallVec<[Piece<'a>; 8]>;

fn is_param_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Splits `pattern` into pieces.
///
/// A parameter starts where `:` opens a component (the very start of the pattern, or
/// right after `/`) and runs to the next `/` or the end. A `:` anywhere else is literal.
pub(crate) fn parse_pattern(pattern: &str) -> Result<Pieces<'_>, PatternDefect> {
    let bytes = pattern.as_bytes();
    let mut pieces = Pieces::new();
    let mut static_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let opens_component = pos == 0 || bytes[pos - 1] == PATH_SEPARATOR;
        if !(opens_component && bytes[pos] == PARAM_MARKER) {
            pos += 1;
            continue;
        }

        if static_start < pos {
            pieces.push(Piece::Static(&bytes[static_start..pos]));
        }
        let name_start = pos + 1;
        let name_end = bytes[name_start..]
            .iter()
            .position(|&b| b == PATH_SEPARATOR)
            .map_or(bytes.len(), |i| name_start + i);
        let name = &pattern[name_start..name_end];
        if name.is_empty() {
            return Err(PatternDefect::EmptyParameterName);
        }
        if !name.bytes().all(is_param_name_byte) {
            return Err(PatternDefect::InvalidParameterName);
        }
        let seen = pieces
            .iter()
            .any(|p| matches!(p, Piece::Param(existing) if *existing == name));
        if seen {
            return Err(PatternDefect::DuplicateParameterName);
        }
        pieces.push(Piece::Param(name));
        pos = name_end;
        static_start = name_end;
    }

    if static_start < bytes.len() {
        pieces.push(Piece::Static(&bytes[static_start..]));
    }
    Ok(pieces)
}

/// Checks `method` is an HTTP token (RFC 9110 `tchar`s).
pub(crate) fn validate_method(method: &str) -> Result<(), PatternDefect> {
    let is_tchar = |b: u8| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b);
    if method.is_empty() || !method.bytes().all(is_tchar) {
        return Err(PatternDefect::InvalidMethod);
    }
    Ok(())
}

/// Checks the path half of a route pattern, before it is composed into a tree key.
pub(crate) fn validate_path(path: &str) -> Result<(), PatternDefect> {
    if path.as_bytes().first() != Some(&PATH_SEPARATOR) {
        return Err(PatternDefect::MissingLeadingSeparator);
    }
    parse_pattern(path).map(|_| ())
}
