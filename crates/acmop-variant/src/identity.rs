//! Variant naming.

use acmop_core::constants::INITIAL_DESIGN_NAME;
use acmop_core::models::SpecInput;
use serde::{Deserialize, Serialize};

/// Counter and attempt number of a build.
///
/// `counter` is `None` for the reference design. `attempt` starts at 1
/// and grows each time the same counter is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantIdentity {
    pub counter: Option<u64>,
    pub attempt: u32,
}

impl Default for VariantIdentity {
    fn default() -> Self {
        Self::initial()
    }
}

impl VariantIdentity {
    pub fn initial() -> Self {
        Self {
            counter: None,
            attempt: 1,
        }
    }

    pub fn numbered(counter: u64) -> Self {
        Self {
            counter: Some(counter),
            attempt: 1,
        }
    }

    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    /// Numeric id; the reference design is 0.
    pub fn id(&self) -> u64 {
        self.counter.unwrap_or(0)
    }

    /// `p{p}ps{ps}-Q{qs}y{y}-{counter}`, with `-redo{attempt}` after the
    /// first attempt.
    pub fn name(&self, spec: &SpecInput) -> String {
        match self.counter {
            None => INITIAL_DESIGN_NAME.to_string(),
            Some(counter) if self.attempt > 1 => {
                format!("{}-{}-redo{}", spec.design_prefix(), counter, self.attempt)
            }
            Some(counter) => format!("{}-{}", spec.design_prefix(), counter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let spec = test_fixtures::spec_input();
        assert_eq!(VariantIdentity::initial().name(&spec), "SPMSM_InitialDesign");
        assert_eq!(VariantIdentity::numbered(7).name(&spec), "p2ps1-Q24y5-7");
        assert_eq!(
            VariantIdentity::numbered(7).with_attempt(3).name(&spec),
            "p2ps1-Q24y5-7-redo3"
        );
    }
}
