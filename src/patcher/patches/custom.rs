use crate::config::CustomRuleConfig;
use crate::patcher::{Patch, PatchRule};
use anyhow::Result;

pub struct CustomPatch {
    name: String,
    target: String,
    rule: PatchRule,
}

impl CustomPatch {
    pub fn from_config(config: &CustomRuleConfig) -> Result<Self> {
        let rule = PatchRule::compile(&config.pattern, config.replacement.as_str())?
            .retain(config.retention)
            .occurrence(config.occurrence);
        Ok(Self {
            name: config.name.clone(),
            target: config.target.clone(),
            rule,
        })
    }
}

impl Patch for CustomPatch {
    fn name(&self) -> &str { &self.name }

    fn target(&self) -> &str { &self.target }

    fn rules(&self) -> Vec<PatchRule> {
        vec![self.rule.clone()]
    }
}
