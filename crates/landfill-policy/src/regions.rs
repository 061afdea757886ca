use crate::policy::{
    CurbsideRecycling, OrganicsProgram, RegionalPolicy, SpecialDisposalRule, SpecialDisposalRules,
};
use landfill_types::DEFAULT_REGION;

fn all_streams(plastic: &[u8]) -> CurbsideRecycling {
    CurbsideRecycling {
        plastic: plastic.iter().copied().collect(),
        paper: true,
        cardboard: true,
        metal: true,
        glass: true,
    }
}

fn no_organics() -> OrganicsProgram {
    OrganicsProgram {
        composting_available: false,
        curbside_pickup: false,
        accepted_items: Vec::new(),
    }
}

/// California policy.
///
/// - Curbside plastics #1, #2, #5
/// - Green-bin organics pickup
/// - All special categories must be dropped off
pub fn california_policy() -> RegionalPolicy {
    RegionalPolicy {
        code: "US-CA".into(),
        name: "California".into(),
        country: "United States".into(),
        curbside_recycling: all_streams(&[1, 2, 5]),
        organics: OrganicsProgram {
            composting_available: true,
            curbside_pickup: true,
            accepted_items: vec![
                "food waste".into(),
                "yard waste".into(),
                "paper products".into(),
            ],
        },
        special_disposal: SpecialDisposalRules {
            electronics: SpecialDisposalRule::drop_off(true, "E-waste recycling centers"),
            hazardous: SpecialDisposalRule::drop_off(true, "Household hazardous waste facilities"),
            batteries: SpecialDisposalRule::drop_off(true, "Battery recycling programs"),
        },
        notes: "California has strict recycling requirements. Many items banned from landfills."
            .into(),
    }
}

/// New York policy.
///
/// - Curbside plastics #1, #2, #4, #5
/// - Composting exists but has no curbside pickup
pub fn new_york_policy() -> RegionalPolicy {
    RegionalPolicy {
        code: "US-NY".into(),
        name: "New York".into(),
        country: "United States".into(),
        curbside_recycling: all_streams(&[1, 2, 4, 5]),
        organics: OrganicsProgram {
            composting_available: true,
            curbside_pickup: false,
            accepted_items: vec!["food waste".into(), "yard waste".into()],
        },
        special_disposal: SpecialDisposalRules {
            electronics: SpecialDisposalRule::drop_off(true, "Electronics recycling centers"),
            hazardous: SpecialDisposalRule::drop_off(true, "SAFE disposal events"),
            batteries: SpecialDisposalRule::drop_off(true, "Call2Recycle locations"),
        },
        notes: "NYC requires separate bins for recyclables. Check local guidelines.".into(),
    }
}

/// Texas policy.
///
/// - Curbside plastics #1, #2
/// - No composting program
/// - Electronics and batteries drop-off is optional
pub fn texas_policy() -> RegionalPolicy {
    RegionalPolicy {
        code: "US-TX".into(),
        name: "Texas".into(),
        country: "United States".into(),
        curbside_recycling: all_streams(&[1, 2]),
        organics: no_organics(),
        special_disposal: SpecialDisposalRules {
            electronics: SpecialDisposalRule::drop_off(
                false,
                "Optional recycling centers available",
            ),
            hazardous: SpecialDisposalRule::drop_off(true, "Environmental service centers"),
            batteries: SpecialDisposalRule::drop_off(false, "Retail take-back programs"),
        },
        notes: "Recycling varies by city. Check with local waste management.".into(),
    }
}

/// Generic guidance for regions without a dedicated policy.
pub fn general_policy() -> RegionalPolicy {
    RegionalPolicy {
        code: DEFAULT_REGION.into(),
        name: "General Guidelines".into(),
        country: "Various".into(),
        curbside_recycling: all_streams(&[1, 2]),
        organics: no_organics(),
        special_disposal: SpecialDisposalRules {
            electronics: SpecialDisposalRule::drop_off(true, "Check local e-waste programs"),
            hazardous: SpecialDisposalRule::drop_off(true, "Contact local waste management"),
            batteries: SpecialDisposalRule::drop_off(true, "Retail or municipal collection"),
        },
        notes: "These are general guidelines. Please check with your local waste management authority."
            .into(),
    }
}

/// Every built-in policy, the generic one last
pub fn builtin_policies() -> Vec<RegionalPolicy> {
    vec![
        california_policy(),
        new_york_policy(),
        texas_policy(),
        general_policy(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn california_table() {
        let ca = california_policy();
        assert_eq!(ca.name, "California");
        assert_eq!(ca.country, "United States");
        assert!(ca.curbside_recycling.accepts_resin(1));
        assert!(ca.curbside_recycling.accepts_resin(5));
        assert!(!ca.curbside_recycling.accepts_resin(4));
        assert!(ca.organics.composting_available);
        assert!(ca.organics.curbside_pickup);
    }

    #[test]
    fn new_york_takes_resin_four() {
        assert!(new_york_policy().curbside_recycling.accepts_resin(4));
    }

    #[test]
    fn texas_has_no_composting() {
        let tx = texas_policy();
        assert!(!tx.organics.composting_available);
        assert!(tx.organics.accepted_items.is_empty());
        assert!(!tx.special_disposal.electronics.required);
        assert!(tx.special_disposal.hazardous.required);
    }

    #[test]
    fn codes_are_unique_and_uppercase_except_default() {
        let policies = builtin_policies();
        let mut codes: Vec<_> = policies.iter().map(|p| p.code.as_str()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), policies.len());
        for policy in &policies {
            if policy.code != DEFAULT_REGION {
                assert_eq!(policy.code, policy.code.to_ascii_uppercase());
            }
        }
    }
}
