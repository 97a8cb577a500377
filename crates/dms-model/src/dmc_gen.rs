//! Data module code generation from configured defaults.
//!
//! The code is a hyphen-joined sequence of the standard's identification
//! fields. The information variant is deliberately NOT part of the code: the
//! `00` and `01` records of a module share one DMC and differ only in their
//! `info_variant` field, which is what keeps the variant pair resolvable from
//! the code alone.

use serde::{Deserialize, Serialize};

use crate::Dmc;

/// Default values for every DMC field, persisted with the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmcDefaults {
    pub model_ident: String,
    pub system_diff: String,
    pub system_code: String,
    pub sub_system_code: String,
    pub sub_sub_system_code: String,
    pub assy_code: String,
    pub disassy_code: String,
    pub disassy_code_variant: String,
    pub info_code: String,
    pub info_code_variant: String,
    pub item_location_code: String,
    pub learn_code: String,
    pub learn_event_code: String,
}

impl Default for DmcDefaults {
    fn default() -> Self {
        Self {
            model_ident: "DMS".to_string(),
            system_diff: "00".to_string(),
            system_code: "000".to_string(),
            sub_system_code: "00".to_string(),
            sub_sub_system_code: "00".to_string(),
            assy_code: "00".to_string(),
            disassy_code: "00".to_string(),
            disassy_code_variant: "00".to_string(),
            info_code: "000".to_string(),
            info_code_variant: "A".to_string(),
            item_location_code: "A".to_string(),
            learn_code: "00".to_string(),
            learn_event_code: "00".to_string(),
        }
    }
}

/// Build a DMC from the configured defaults.
pub fn generate_dmc(defaults: &DmcDefaults) -> Dmc {
    let code = format!(
        "DMC-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}",
        defaults.model_ident,
        defaults.system_diff,
        defaults.system_code,
        defaults.sub_system_code,
        defaults.sub_sub_system_code,
        defaults.assy_code,
        defaults.disassy_code,
        defaults.disassy_code_variant,
        defaults.info_code,
        defaults.info_code_variant,
        defaults.item_location_code,
        defaults.learn_code,
        defaults.learn_event_code,
    );
    Dmc::from_trusted(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_code_uses_every_field_in_order() {
        let dmc = generate_dmc(&DmcDefaults::default());
        assert_eq!(dmc.as_str(), "DMC-DMS-00-000-00-00-00-00-00-000-A-A-00-00");
    }

    #[test]
    fn overridden_fields_appear_in_the_code() {
        let defaults = DmcDefaults {
            model_ident: "FALCON".to_string(),
            system_code: "720".to_string(),
            ..DmcDefaults::default()
        };
        let dmc = generate_dmc(&defaults);
        assert!(dmc.as_str().starts_with("DMC-FALCON-00-720-"));
    }

    #[test]
    fn defaults_round_trip_through_json() {
        let defaults = DmcDefaults::default();
        let json = serde_json::to_string(&defaults).expect("serialize defaults");
        let round: DmcDefaults = serde_json::from_str(&json).expect("deserialize defaults");
        assert_eq!(round, defaults);
        // Partial settings fall back field by field.
        let partial: DmcDefaults =
            serde_json::from_str(r#"{"model_ident":"HAWK"}"#).expect("partial defaults");
        assert_eq!(partial.model_ident, "HAWK");
        assert_eq!(partial.info_code, "000");
    }
}
