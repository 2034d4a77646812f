//! Advisory note rules for the garden interview.

use crate::domain::interview::Condition;
use crate::domain::styling::{InsightGenerator, NoteGenerator, NoteRule};

/// Builds the garden note rules in display order.
pub fn insight_generator() -> InsightGenerator {
    InsightGenerator::new(vec![
        NoteRule::new(
            "sunlight",
            "Light Strategy",
            NoteGenerator::by_choice(
                "sunExposure",
                &[
                    ("full-sun", "Prioritize heat-loving perennials with reflective mulches to keep roots balanced."),
                    ("partial", "Design patchwork planting so morning and afternoon light catch different bloom sequences."),
                    ("dappled", "Lean on layered understory planting with pops of variegation to brighten shaded pockets."),
                    ("full-shade", "Integrate uplighting and mossy textures to create luminous shade theatrics."),
                ],
            ),
        ),
        NoteRule::new(
            "maintenance",
            "Maintenance Cadence",
            NoteGenerator::by_choice(
                "maintenance",
                &[
                    ("low", "Agent recommends establishing irrigation automation and evergreen bones for cruise-control care."),
                    ("medium", "Schedule fortnightly tuning sessions: light pruning, soil checks, and sensory recalibration."),
                    ("high", "Lean into horticultural play—seasonal cut-flower beds and bespoke pruning rituals will shine."),
                ],
            ),
        ),
        NoteRule::new(
            "scent",
            "Fragrance Playbook",
            NoteGenerator::by_scale_threshold(
                "scentPriority",
                &[
                    (7, "Stack aromatic layers: base of rosemary, mid of night-blooming jasmine, high of citrus blossom."),
                    (3, "Integrate seasonal scent hits near seating—think daphne and sweet box along paths."),
                ],
            ),
        ),
        NoteRule::new(
            "edibles",
            "Edible Integration",
            NoteGenerator::ListingSelections {
                gate: Condition::selected("usage", "grow-food"),
                answer_key: "edibleFocus".into(),
                template: "Blend edible {} into ornamental borders for year-round harvest moments."
                    .to_string(),
                fallback: "Agent suggests raised corten beds tied into architectural rhythms for productive beauty."
                    .to_string(),
            },
        ),
    ])
}
