//! Answer-driven blueprint additions for the garden interview.

use crate::domain::interview::Condition;
use crate::domain::styling::{AdditionRule, AssemblyRules, CareBlock};

/// Builds the garden assembly rules.
pub fn assembly_rules() -> AssemblyRules {
    AssemblyRules {
        palette_additions: vec![
            AdditionRule::new(
                Condition::selected("sunExposure", "full-sun"),
                &["Lavandula angustifolia", "Pennisetum alopecuroides"],
            ),
            AdditionRule::new(
                Condition::any_of("sunExposure", &["full-shade", "dappled"]),
                &["Hakonechloa macra", "Hosta 'Halcyon'"],
            ),
            AdditionRule::new(
                Condition::selected("maintenance", "low"),
                &["Evergreen structural shrubs", "Drip-irrigated natives"],
            ),
            AdditionRule::new(
                Condition::selected("colorPalette", "citrus"),
                &["Crocosmia 'Fire King'", "Coreopsis verticillata"],
            ),
        ],
        feature_label_source: Some("featureFocus".into()),
        feature_bonuses: vec![
            AdditionRule::new(
                Condition::selected("usage", "grow-food"),
                &["Vertically layered edible wall"],
            ),
            AdditionRule::new(
                Condition::selected("usage", "wildlife"),
                &["Native meadow corridor"],
            ),
        ],
        care_rhythm: vec![
            CareBlock::new(
                "maintenance",
                &[
                    (
                        "low",
                        &[
                            "Seasonal editing twice a year",
                            "Mulch and auto-irrigation keep daily care minimal",
                        ],
                    ),
                    (
                        "medium",
                        &[
                            "Bi-weekly garden walk to deadhead and adjust irrigation",
                            "Seasonal compost top-dress",
                        ],
                    ),
                    (
                        "high",
                        &[
                            "Weekly pruning choreography",
                            "Room for experimental plant trials and succession sowing",
                        ],
                    ),
                ],
            ),
            CareBlock::new(
                "waterTone",
                &[
                    (
                        "rain-catcher",
                        &["Install bioswale and rain chain to harvest roof runoff."],
                    ),
                    (
                        "drought-tuned",
                        &["Group planting by hydrozone and incorporate deep mulch to preserve moisture."],
                    ),
                    (
                        "balanced",
                        &["Use moisture sensors to tune irrigation only when soil levels dip below target range."],
                    ),
                ],
            )
            .otherwise(&[
                "Use moisture sensors to tune irrigation only when soil levels dip below target range.",
            ]),
        ],
        vignettes: vec![
            AdditionRule::new(
                Condition::selected("usage", "entertaining"),
                &["Twinkle-lit dining platform framed by aromatic herbs."],
            ),
            AdditionRule::new(
                Condition::selected("usage", "quiet-retreat"),
                &["Low lounge bench tucked beside a water element for morning rituals."],
            ),
            AdditionRule::new(
                Condition::selected("usage", "creative"),
                &["Shaded studio deck with power access and movable planters for mood shifts."],
            ),
            AdditionRule::new(
                Condition::selected("usage", "family-hub"),
                &["Adventure loop connecting play zones with resilient groundcover."],
            ),
        ],
    }
}
