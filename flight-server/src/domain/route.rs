//! Route pair keys.

use std::fmt;

/// Canonical unordered pair of airport codes.
///
/// `{A, B}` and `{B, A}` produce the same key, so an outbound leg and its
/// return leg group together. The codes are stored in lexicographic order.
///
/// # Examples
///
/// ```
/// use flight_server::domain::RoutePairKey;
///
/// let out = RoutePairKey::new("CDG", "TNR");
/// let back = RoutePairKey::new("TNR", "CDG");
/// assert_eq!(out, back);
/// assert_eq!(out.airports(), ("CDG", "TNR"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePairKey {
    low: String,
    high: String,
}

impl RoutePairKey {
    /// Build the key for a leg between two airports, in either direction.
    pub fn new(a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    /// Returns both airport codes in canonical order.
    pub fn airports(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }
}

impl fmt::Debug for RoutePairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoutePairKey({}/{})", self.low, self.high)
    }
}

impl fmt::Display for RoutePairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.low, self.high)
    }
}
