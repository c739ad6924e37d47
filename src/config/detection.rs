use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::NamePolicy;
use crate::Result;

/// Detection-side configuration.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DetectionConfig {
    /// Name-eligibility policy used when compiling the automaton
    #[serde(default)]
    pub policy: NamePolicy,
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.policy.min_chars == 0 {
            return Err(Error::InvalidConfig(
                "detection.policy.min_chars must be at least 1".into(),
            ));
        }
        if self.policy.kana_only_min_chars < self.policy.min_chars {
            return Err(Error::InvalidConfig(format!(
                "detection.policy.kana_only_min_chars ({}) cannot be below min_chars ({})",
                self.policy.kana_only_min_chars, self.policy.min_chars
            )));
        }
        Ok(())
    }
}
