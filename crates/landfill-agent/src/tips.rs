//! Handling tips attached to every report

use landfill_types::{DisposalMethod, DisposalRecommendation, MaterialRecord, MaterialType};

/// Closing tip on every report
pub const SINGLE_USE_TIP: &str = "Consider reducing use of single-use items";

/// Tips for preparing an item, in display order.
///
/// Always non-empty; the last entry is [`SINGLE_USE_TIP`].
pub fn disposal_tips(material: &MaterialRecord, rec: &DisposalRecommendation) -> Vec<String> {
    let mut tips: Vec<&str> = Vec::new();

    if rec.method == DisposalMethod::CurbsideRecycling {
        tips.push("Rinse containers before recycling to prevent contamination");
        tips.push("Remove caps and lids if they're a different material");
        if material.material_type == MaterialType::Paper {
            tips.push("Keep paper dry and free from food waste");
        }
    }

    if material.compostable {
        tips.push("Remove any non-compostable materials like stickers or ties");
        tips.push("Smaller pieces compost faster");
    }

    if material.special_disposal {
        tips.push("Do not throw in regular trash - can harm environment");
        match material.material_type {
            MaterialType::Electronics => {
                tips.push("Remove personal data before disposal");
                tips.push("Consider donating if still functional");
            }
            MaterialType::Hazardous => {
                tips.push("Keep in original container when possible");
                tips.push("Never mix different chemicals");
            }
            _ => {}
        }
    }

    tips.push(SINGLE_USE_TIP);
    tips.into_iter().map(String::from).collect()
}
