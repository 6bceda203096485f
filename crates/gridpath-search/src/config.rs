use crate::strategy::Strategy;

/// Per-call search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Frontier ordering. Defaults to A*.
    pub strategy: Strategy,
    /// Stop with [`SearchError::SearchAborted`](crate::SearchError::SearchAborted)
    /// after this many frontier pops. `None` searches until the frontier
    /// drains.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_expansions(mut self, cap: usize) -> Self {
        self.max_expansions = Some(cap);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SearchConfig::default());

        let c: SearchConfig =
            serde_json::from_str(r#"{"strategy":"heuristic-only","max_expansions":50}"#).unwrap();
        assert_eq!(c.strategy, Strategy::HeuristicOnly);
        assert_eq!(c.max_expansions, Some(50));
    }
}
