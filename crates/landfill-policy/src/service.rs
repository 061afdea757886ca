//! Disposal recommendation rules

use std::collections::BTreeMap;

use landfill_types::{
    normalize_region, DisposalMethod, DisposalRecommendation, MaterialRecord, MaterialType,
    DEFAULT_REGION,
};
use tracing::{debug, info};

use crate::policy::{RegionalPolicy, SpecialDisposalCategory};
use crate::regions::{builtin_policies, general_policy};

/// Advice attached to every landfill recommendation
pub const REDUCTION_TIP: &str = "Consider reducing use of this item type";

/// Maps a material and a region to a disposal method.
///
/// Policies are loaded once at construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct DisposalPolicyService {
    policies: BTreeMap<String, RegionalPolicy>,
    fallback: RegionalPolicy,
}

impl DisposalPolicyService {
    /// Service with the built-in regional policies
    pub fn new() -> Self {
        let mut policies = BTreeMap::new();
        let mut fallback = general_policy();
        for policy in builtin_policies() {
            if policy.code == DEFAULT_REGION {
                fallback = policy;
            } else {
                policies.insert(policy.code.clone(), policy);
            }
        }
        Self { policies, fallback }
    }

    /// Add or replace a regional policy. A policy coded `default` replaces
    /// the fallback.
    pub fn with_policy(mut self, mut policy: RegionalPolicy) -> Self {
        match normalize_region(Some(&policy.code)) {
            Some(code) if code != DEFAULT_REGION.to_ascii_uppercase() => {
                policy.code = code.clone();
                self.policies.insert(code, policy);
            }
            _ => {
                policy.code = DEFAULT_REGION.into();
                self.fallback = policy;
            }
        }
        self
    }

    /// Policy for a region code, matched case-insensitively.
    ///
    /// Absent, blank and unknown codes get the generic policy.
    pub fn regional_policy(&self, region: Option<&str>) -> &RegionalPolicy {
        let Some(code) = normalize_region(region) else {
            return &self.fallback;
        };
        match self.policies.get(&code) {
            Some(policy) => policy,
            None => {
                debug!(region = %code, "no policy for region; using general guidelines");
                &self.fallback
            }
        }
    }

    /// Configured region codes, excluding the generic fallback
    pub fn available_regions(&self) -> Vec<String> {
        self.policies.keys().cloned().collect()
    }

    /// Decide how `material` should be disposed of in `region`.
    pub fn disposal_recommendation(
        &self,
        material: &MaterialRecord,
        region: Option<&str>,
    ) -> DisposalRecommendation {
        let policy = self.regional_policy(region);
        let recommendation = recommend(material, policy);
        info!(
            item = %material.item,
            region = %policy.code,
            method = %recommendation.method,
            curbside = recommendation.curbside_accepted,
            "disposal recommendation"
        );
        recommendation
    }
}

impl Default for DisposalPolicyService {
    fn default() -> Self {
        Self::new()
    }
}

fn recommend(material: &MaterialRecord, policy: &RegionalPolicy) -> DisposalRecommendation {
    if material.special_disposal {
        let category = SpecialDisposalCategory::for_material(material.material_type);
        let rule = policy.special_disposal.rule(category);
        let mut rec = DisposalRecommendation::new(
            DisposalMethod::SpecialDisposal,
            false,
            rule.notes.clone(),
            policy.name.clone(),
        );
        rec.required = Some(rule.required);
        rec.drop_off_method = Some(rule.method.clone());
        return rec;
    }

    if material.compostable && policy.organics.composting_available {
        let curbside = policy.organics.curbside_pickup;
        let notes = if curbside {
            "Place in green/organic waste bin"
        } else {
            "Take to composting facility or use home composting"
        };
        let mut rec =
            DisposalRecommendation::new(DisposalMethod::Composting, curbside, notes, &policy.name);
        rec.accepted_items = Some(policy.organics.accepted_items.clone());
        return rec;
    }

    if material.recyclable.is_definite() {
        if let (MaterialType::Plastic, Some(code)) = (material.material_type, material.resin_code) {
            let accepted = policy.curbside_recycling.accepts_resin(code);
            return if accepted {
                DisposalRecommendation::new(
                    DisposalMethod::CurbsideRecycling,
                    true,
                    format!("Resin code #{} accepted in recycling bin", code),
                    &policy.name,
                )
            } else {
                DisposalRecommendation::new(
                    DisposalMethod::DropOffRecycling,
                    false,
                    format!(
                        "Resin code #{} not accepted curbside. Find drop-off location.",
                        code
                    ),
                    &policy.name,
                )
            };
        }

        let accepted = policy.curbside_recycling.accepts_type(material.material_type);
        let notes = if accepted {
            "Place in recycling bin"
        } else {
            "Check with local recycling center"
        };
        return DisposalRecommendation::new(
            DisposalMethod::CurbsideRecycling,
            accepted,
            notes,
            &policy.name,
        );
    }

    let mut rec = DisposalRecommendation::new(
        DisposalMethod::Landfill,
        true,
        "Place in regular trash bin",
        &policy.name,
    );
    rec.recommendation = Some(REDUCTION_TIP.into());
    rec
}
