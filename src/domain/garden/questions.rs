//! The garden interview questions, in candidate order.

use crate::domain::interview::{
    Condition, InputType, QuestionCatalog, QuestionDefinition, QuestionOption, ScaleConfig,
};

/// Candidate order of the garden interview.
pub const QUESTION_ORDER: [&str; 15] = [
    "gardenFeel",
    "usage",
    "stylePreference",
    "sunExposure",
    "maintenance",
    "colorPalette",
    "featureFocus",
    "wildlifeSupport",
    "edibleFocus",
    "kidSafety",
    "scentPriority",
    "waterTone",
    "comfortLevel",
    "favoritePlants",
    "notes",
];

fn options(entries: &[(&str, &str, &str)]) -> Vec<QuestionOption> {
    entries
        .iter()
        .map(|(value, label, description)| QuestionOption::new(value, label, description))
        .collect()
}

/// Builds the garden question catalog.
pub fn question_catalog() -> QuestionCatalog {
    let questions = vec![
        QuestionDefinition::new(
            "gardenFeel",
            "Emotion Palette",
            "When you imagine stepping outside, what feeling should the garden give you within the first few seconds?",
            InputType::Single,
        )
        .with_helper("Pick the dominant vibe that fits. We’ll layer nuance later.")
        .with_options(options(&[
            ("serene", "Serene & Restorative", "Soft greens, flowing lines, decompression first."),
            ("vibrant", "Energetic & Social", "Bold gestures, color pops, ready for gatherings."),
            ("enchanted", "Dreamy & Enchanted", "Storybook textures, romantic lighting, discovery."),
            ("wild", "Wild & Naturalistic", "Immersive planting, layered habitats, organic edges."),
            ("productive", "Grounded & Productive", "Edible abundance, purpose-driven spaces."),
        ])),
        QuestionDefinition::new(
            "usage",
            "Lifestyle Mapping",
            "How will this garden actually serve you and the people who use it week to week?",
            InputType::Multi,
        )
        .with_helper("Pick everything that applies. The agent will adapt follow-up questions based on this mix.")
        .with_options(options(&[
            ("quiet-retreat", "Quiet retreat", "Reading nook, meditative corner, restorative rituals."),
            ("entertaining", "Entertaining & dining", "Evening dinners, friends over, cocktails under lights."),
            ("family-hub", "Family hub / kid play", "Safe exploration, open lawn moments, playful features."),
            ("grow-food", "Grow fresh food", "Raised beds, kitchen garden, culinary herbs."),
            ("wildlife", "Thrive with wildlife", "Pollinators, birds, butterflies, ecological focus."),
            ("creative", "Creative studio energy", "Outdoor office, art, yoga, making space."),
        ])),
        QuestionDefinition::new(
            "stylePreference",
            "Visual Compass",
            "Which visual language feels closest to what you love seeing in gardens?",
            InputType::Multi,
        )
        .with_options(options(&[
            ("architectural", "Architectural lines", "Crisp edges, strong geometry, contrast planting."),
            ("cottagecore", "Cottage abundance", "Layered flowers, romantic textures, winding paths."),
            ("tropical", "Lush tropical", "Large leaves, saturated color, resort atmosphere."),
            ("xeric", "Modern dry garden", "Grasses, sculptural succulents, gravelled calm."),
            ("woodland", "Woodland understory", "Dappled shade, ferns, mossy softness."),
        ])),
        QuestionDefinition::new(
            "sunExposure",
            "Sun + Microclimate",
            "Across an average day, how does sunlight move through the garden footprint?",
            InputType::Single,
        )
        .with_options(options(&[
            ("full-sun", "Full sun (6+ hours)", "Bright, open exposures, heat tolerant species."),
            ("partial", "Partial sun (3-6 hours)", "Mixed light, flexible planting palette."),
            ("dappled", "Dappled shade", "Filtered light, woodland or understory feel."),
            ("full-shade", "Dense shade", "North-facing walls, large canopy trees, cool zones."),
        ])),
        QuestionDefinition::new(
            "maintenance",
            "Care Energy",
            "How much weekly attention can you realistically offer?",
            InputType::Single,
        )
        .with_options(options(&[
            ("low", "Low effort (under 1 hr)", "Automated irrigation, resilient planting."),
            ("medium", "Moderate (1-3 hrs)", "Seasonal edits, light grooming."),
            ("high", "Hands-on (3+ hrs)", "Happy to prune, deadhead, and tend regularly."),
        ])),
        QuestionDefinition::new(
            "colorPalette",
            "Color Priorities",
            "What color moods feel essential to weave through the planting?",
            InputType::Multi,
        )
        .with_options(options(&[
            ("soft-neutrals", "Soft neutrals", "Creams, sages, muted palettes."),
            ("jewel", "Jewel tones", "Deep purples, reds, dramatic contrasts."),
            ("citrus", "Citrus brights", "Sunlit yellows, oranges, vibrant energy."),
            ("blues", "Coastal blues", "Blues, lavenders, breezy calm."),
            ("lush-green", "Texture-driven greens", "Foliage diversity, tonal layering."),
        ])),
        QuestionDefinition::new(
            "featureFocus",
            "Experience Anchors",
            "Which hero moments or features are you curious about building into the space?",
            InputType::Multi,
        )
        .with_options(options(&[
            ("water", "Water element", "Reflective basin, rill, wildlife pond, or fountain."),
            ("fire", "Fire or warmth", "Fire bowl, chiminea, built-in fireplace."),
            ("dining", "Outdoor dining", "Pergola, kitchen node, harvest table."),
            ("lounge", "Lounge platforms", "Daybeds, hammock zone, conversation pit."),
            ("path", "Immersive pathways", "Stepping stones, boardwalk, discovery loops."),
            ("art", "Sculpture / art moment", "Feature wall, plinth, handmade element."),
        ])),
        QuestionDefinition::new(
            "wildlifeSupport",
            "Habitat Emphasis",
            "What kind of wildlife partnership matters most to you?",
            InputType::Multi,
        )
        .applies_when(Condition::selected("usage", "wildlife"))
        .with_options(options(&[
            ("pollinators", "Pollinators", "Bees, butterflies, nectar corridors."),
            ("birds", "Songbirds", "Berries, shelter, nesting structures."),
            ("nightlife", "Night pollinators", "Evening bloomers, moon garden moments."),
            ("biodiversity", "Overall biodiversity", "Layered habitat, micro ecosystems."),
        ])),
        QuestionDefinition::new(
            "edibleFocus",
            "Edible Intentions",
            "What edible harvest feels most exciting to you?",
            InputType::Multi,
        )
        .applies_when(Condition::selected("usage", "grow-food"))
        .with_options(options(&[
            ("culinary-herbs", "Culinary herbs", "Mediterranean mix, tea blends, aromatics."),
            ("seasonal-veg", "Seasonal vegetables", "Raised beds, succession planting."),
            ("fruit", "Fruit trees & shrubs", "Espalier, dwarf rootstock, berry guilds."),
            ("edible-flowers", "Edible flowers", "Calendula, nasturtium, borage accents."),
        ])),
        QuestionDefinition::new(
            "kidSafety",
            "Play & Safety Lens",
            "Any kid-friendly considerations the garden should respect?",
            InputType::Multi,
        )
        .applies_when(Condition::selected("usage", "family-hub"))
        .with_options(options(&[
            ("soft-ground", "Soft landing surfaces", "Clover lawn, cushioned mulch, rubber insets."),
            ("sightlines", "Clear sightlines", "Parents can keep watch from indoors or patios."),
            ("sensory-play", "Discovery / sensory play", "Mud kitchens, sound elements, nature labs."),
            ("edible-safe", "Only kid-safe edible plants", "No toxic species near play zones."),
        ])),
        QuestionDefinition::new(
            "scentPriority",
            "Fragrance Threshold",
            "How important are aromatics or fragrant plants for you?",
            InputType::Scale,
        )
        .applies_when(Condition::choice_in(
            "gardenFeel",
            &["serene", "enchanted", "productive"],
        ))
        .with_scale(ScaleConfig {
            min: 0,
            max: 10,
            step: 1,
            labels: [
                "Not needed",
                "",
                "",
                "Layered fragrance",
                "",
                "",
                "",
                "",
                "",
                "Signature scent",
            ]
            .iter()
            .map(|l| l.to_string())
            .collect(),
        }),
        QuestionDefinition::new(
            "waterTone",
            "Water Relationship",
            "What describes the water relationship you want this garden to have?",
            InputType::Single,
        )
        .with_options(options(&[
            ("rain-catcher", "Harvest & reuse", "Rain gardens, cisterns, closed loops."),
            ("balanced", "Balanced irrigation", "Efficient smart irrigation, mindful use."),
            ("drought-tuned", "Drought expressive", "Xeric planting, no irrigation once established."),
        ])),
        QuestionDefinition::new(
            "comfortLevel",
            "Comfort Priorities",
            "What creature comforts feel essential for the people spending time out there?",
            InputType::Multi,
        )
        .with_options(options(&[
            ("shade-structure", "Shade solutions", "Pergolas, retractable sails, mature canopy."),
            ("heating", "Heating elements", "Fire, patio heaters, radiant warmth."),
            ("lighting", "Immersive lighting", "Layered low-voltage glow, festoon rhythm."),
            ("sound", "Soundscaping", "Speakers, water sounds, quiet buffers."),
            ("seating", "Comfort seating", "Lounge sets, swings, ergonomic dining."),
        ])),
        QuestionDefinition::new(
            "favoritePlants",
            "Plant Crushes",
            "Are there any plants you’re already in love with (or ones you never want to see again)?",
            InputType::FreeText,
        )
        .with_placeholder(
            "List plant loves, dislikes, or any must-include species. Feel free to include memories (\"the lilacs from my grandmother’s garden\").",
        ),
        QuestionDefinition::new(
            "notes",
            "Context & Story",
            "Anything else the agent should know? Access points, pets, HOA rules, renovation plans?",
            InputType::FreeText,
        )
        .with_placeholder("Share constraints, big ideas, or links to inspiration boards."),
    ];

    QuestionCatalog::with_order(
        QUESTION_ORDER.iter().map(|id| (*id).into()).collect(),
        questions,
    )
}
