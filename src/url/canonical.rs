//! Canonical URL reconstruction.

use std::fmt::Write;

use crate::url::Protocol;

/// Re-serializes validated components.
///
/// Components are concatenated as they are, without re-encoding:
/// `protocol://host[:port][path][?query][#anchor]`.
pub(crate) fn reconstruct(
    protocol: Protocol,
    host: &str,
    port: Option<u16>,
    path: &str,
    query: Option<&str>,
    anchor: Option<&str>,
) -> String {
    let mut url = format!("{protocol}://{host}");
    if let Some(port) = port {
        // Writing into a String cannot fail
        let _ = write!(url, ":{port}");
    }
    url.push_str(path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    if let Some(anchor) = anchor {
        url.push('#');
        url.push_str(anchor);
    }
    url
}
