//! Management API path construction.
//!
//! Paths have the shape
//! `/management/v4/{tenantId}/{resource}[/{id}][/{subresource}]`.
//! Caller-supplied values (tenant IDs, resource IDs, template names) are
//! percent-encoded exactly once here; literal segments are `'static`
//! strings and are appended untouched. Transports send the result as-is.

use std::fmt;

use crate::Error;

/// Prefix shared by every management API path.
pub const API_PREFIX: &str = "/management/v4";

/// A percent-encoded management API path.
///
/// ```rust
/// use appid::management::ManagementPath;
///
/// let path = ManagementPath::tenant("abc123")?
///     .segment("applications")
///     .id("client id", "a/b?c#d")?
///     .segment("scopes");
/// assert_eq!(path.as_str(), "/management/v4/abc123/applications/a%2Fb%3Fc%23d/scopes");
/// # Ok::<(), appid::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagementPath {
    path: String,
}

impl ManagementPath {
    /// Starts a path for the given tenant.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Validation`](crate::ErrorKind::Validation) if
    /// `tenant_id` is empty, `.` or `..`.
    pub fn tenant(tenant_id: &str) -> Result<Self, Error> {
        require("tenant id", tenant_id)?;
        Ok(Self {
            path: format!("{}/{}", API_PREFIX, encode_segment(tenant_id)),
        })
    }

    /// Appends a literal segment.
    #[must_use]
    pub fn segment(mut self, literal: &'static str) -> Self {
        self.path.push('/');
        self.path.push_str(literal);
        self
    }

    /// Appends several literal segments.
    #[must_use]
    pub fn segments(self, literals: &[&'static str]) -> Self {
        literals.iter().fold(self, |path, literal| path.segment(literal))
    }

    /// Appends a caller-supplied value, percent-encoded.
    ///
    /// `label` names the value in the error returned when it is empty or a
    /// dot segment (`.` or `..`). URL parsers resolve dot segments even when
    /// percent-encoded, so such values cannot be addressed safely.
    pub fn id(mut self, label: &'static str, value: &str) -> Result<Self, Error> {
        require(label, value)?;
        self.path.push('/');
        self.path.push_str(&encode_segment(value));
        Ok(self)
    }

    /// Returns the encoded path.
    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ManagementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<ManagementPath> for String {
    fn from(path: ManagementPath) -> Self {
        path.path
    }
}

/// Percent-encodes one path segment.
///
/// RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through;
/// everything else, including `/`, `?`, `#`, space and `%`, is encoded.
pub fn encode_segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

/// Rejects identifiers that cannot form a path segment before any request
/// is made.
fn require(label: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::validation(format!("{} must not be empty", label)));
    }
    if value == "." || value == ".." {
        return Err(Error::validation(format!(
            "{} must not be \"{}\"",
            label, value
        )));
    }
    Ok(())
}
