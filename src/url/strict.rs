//! Strict character legality check.
//!
//! The structural split accepts any character. This pass rejects what a strict
//! URI would not allow in each component: spaces, backslashes, control
//! characters, unbalanced escapes and the like. Non-ASCII characters that are
//! neither control nor whitespace characters are allowed everywhere except in
//! the scheme.

use crate::error_handling::UrlError;
use crate::url::structure::StructuralFields;

const UNRESERVED_MARKS: &str = "-_.!~*'()";
/// Extra characters allowed in an authority (user-info, registry name, port).
/// Brackets are only allowed around an IPv6 literal host.
const AUTHORITY_EXTRA: &str = "$,;:@&=+";
/// Extra characters allowed in a path segment, '/' included.
const PATH_EXTRA: &str = ":@&=+$,;/";
/// Reserved characters, all allowed in queries and fragments.
const RESERVED: &str = ";/?:@&=+$,[]";

/// Checks every component of `normalized` against its allowed character set.
///
/// # Errors
///
/// - `IllegalCharacter` for the first disallowed character, with its character
///   index in `normalized`
/// - `UrlSyntaxError` for a `%` not followed by two hex digits
pub(crate) fn check(
    normalized: &str,
    fields: &StructuralFields<'_>,
    input: &str,
) -> Result<(), UrlError> {
    let brackets = ipv6_brackets(fields);
    let mut components = vec![
        ("authority", fields.authority_start, fields.authority, AUTHORITY_EXTRA),
        ("path", fields.path_start, fields.path, PATH_EXTRA),
    ];
    if let (Some(start), Some(query)) = (fields.query_start, fields.query) {
        components.push(("query", start, query, RESERVED));
    }
    if let (Some(start), Some(fragment)) = (fields.fragment_start, fields.fragment) {
        components.push(("fragment", start, fragment, RESERVED));
    }

    for (component, start, text, extra) in components {
        let allowed_at: &[usize] = if component == "authority" { &brackets } else { &[] };
        check_component(normalized, component, start, text, extra, allowed_at, input)?;
    }
    Ok(())
}

/// Byte offsets in the normalized string of the brackets enclosing an IPv6
/// literal host, if the host is one.
fn ipv6_brackets(fields: &StructuralFields<'_>) -> Vec<usize> {
    if !(fields.host.starts_with('[') && fields.host.ends_with(']')) {
        return Vec::new();
    }
    let host_start = fields.authority_start + fields.user_info.map_or(0, |u| u.len() + 1);
    vec![host_start, host_start + fields.host.len() - 1]
}

fn check_component(
    normalized: &str,
    component: &'static str,
    start: usize,
    text: &str,
    extra: &str,
    allowed_at: &[usize],
    input: &str,
) -> Result<(), UrlError> {
    let mut chars = text.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        if c == '%' {
            let hex_pair = chars.next_if(|(_, h)| h.is_ascii_hexdigit()).is_some()
                && chars.next_if(|(_, h)| h.is_ascii_hexdigit()).is_some();
            if !hex_pair {
                return Err(UrlError::UrlSyntaxError {
                    message: format!(
                        "Malformed escape pair at index {}: {normalized}",
                        char_index(normalized, start + offset)
                    ),
                    input: input.to_string(),
                });
            }
            continue;
        }
        if !is_allowed(c, extra) && !allowed_at.contains(&(start + offset)) {
            return Err(UrlError::IllegalCharacter {
                component,
                index: char_index(normalized, start + offset),
                normalized: normalized.to_string(),
            });
        }
    }
    Ok(())
}

fn is_allowed(c: char, extra: &str) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(c) || extra.contains(c)
    } else {
        !c.is_control() && !c.is_whitespace()
    }
}

/// Converts a byte offset into a character index.
fn char_index(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}
