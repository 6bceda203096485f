use std::fmt;

use gridpath_core::Coord;

/// Which end of a search request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointReason {
    OutOfBounds,
    Blocked,
}

/// Errors returned by the search engine.
///
/// "No path" is not an error: it is an `Ok` with an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal is outside the grid or on a blocked cell.
    InvalidEndpoint {
        endpoint: Endpoint,
        coord: Coord,
        reason: EndpointReason,
    },
    /// `pop_min` on an empty frontier.
    EmptyFrontier,
    /// The distance table offered no strictly closer neighbour while
    /// walking back from the goal. This is a defect, not a user error.
    UnreachableState { at: Coord },
    /// The expansion cap was hit before the goal was found.
    SearchAborted { expansions: usize },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint {
                endpoint,
                coord,
                reason: EndpointReason::OutOfBounds,
            } => write!(f, "{endpoint} {coord} is outside the grid"),
            Self::InvalidEndpoint {
                endpoint,
                coord,
                reason: EndpointReason::Blocked,
            } => write!(f, "{endpoint} {coord} is on a blocked cell"),
            Self::EmptyFrontier => write!(f, "frontier is empty"),
            Self::UnreachableState { at } => write!(
                f,
                "inconsistent distance table: no closer neighbour of {at} during path reconstruction"
            ),
            Self::SearchAborted { expansions } => {
                write!(f, "search aborted after {expansions} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_messages() {
        let e = SearchError::InvalidEndpoint {
            endpoint: Endpoint::Goal,
            coord: Coord::new(1, 1),
            reason: EndpointReason::Blocked,
        };
        assert_eq!(e.to_string(), "goal (1, 1) is on a blocked cell");

        let e = SearchError::InvalidEndpoint {
            endpoint: Endpoint::Start,
            coord: Coord::new(-1, 0),
            reason: EndpointReason::OutOfBounds,
        };
        assert_eq!(e.to_string(), "start (-1, 0) is outside the grid");
        assert_eq!(
            SearchError::SearchAborted { expansions: 3 }.to_string(),
            "search aborted after 3 expansions"
        );
    }
}
