//! The six garden styles.
//!
//! Declaration order is the tie-break order:
//! modern-zen, cottage-romance, tropical-lounge, edible-oasis, playgarden,
//! rewilded-sanctuary.

use crate::domain::styling::{CategoryCatalog, CategoryDefinition, TriggerRule};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the garden style catalog.
pub fn style_catalog() -> CategoryCatalog {
    CategoryCatalog::new(vec![
        CategoryDefinition {
            id: "modern-zen".into(),
            label: "Modern Zen Refuge".to_string(),
            base_score: 1,
            narrative: "Liquid geometry, calming water sounds, and evergreen structure create a restorative sanctuary tuned for decompression.".to_string(),
            sensory_notes: strings(&["Low rustling grasses", "Reflective water plane", "Warm stone underfoot"]),
            default_plants: strings(&["Japanese forest grass", "Dwarf conifers", "White hellebores", "Cloud-pruned evergreens"]),
            default_features: strings(&["Floating deck with meditation mat", "Linear rill with black pebbles", "Minimalist lantern lighting"]),
            triggers: vec![
                TriggerRule::new("gardenFeel", &["serene"], 3),
                TriggerRule::new("stylePreference", &["architectural"], 2),
                TriggerRule::new("colorPalette", &["soft-neutrals", "lush-green"], 1),
            ],
        },
        CategoryDefinition {
            id: "cottage-romance".into(),
            label: "Cottage Romance Tapestry".to_string(),
            base_score: 1,
            narrative: "Layered blooms, winding gravel paths, and perfumed evenings craft a storybook escape that feels lived-in and loved.".to_string(),
            sensory_notes: strings(&["Perfumed twilight air", "Crunch of gravel paths", "Flowering hedges as walls"]),
            default_plants: strings(&["David Austin roses", "Nepeta 'Walker's Low'", "Peonies", "Foxgloves", "Climbing clematis"]),
            default_features: strings(&["Bistro breakfast nook", "Trellised entry arch", "Lantern-lit evening spine"]),
            triggers: vec![
                TriggerRule::new("gardenFeel", &["enchanted"], 3),
                TriggerRule::new("stylePreference", &["cottagecore"], 2),
                TriggerRule::new("colorPalette", &["jewel", "blues"], 1),
            ],
        },
        CategoryDefinition {
            id: "tropical-lounge".into(),
            label: "Tropical Lounge Hideaway".to_string(),
            base_score: 1,
            narrative: "Large-leaf drama, saturated foliage, and cinematic lighting turn the garden into a resort-grade lounge.".to_string(),
            sensory_notes: strings(&["Mist-cooled air", "Fragrant gingers", "Dappled palm light"]),
            default_plants: strings(&["Bird of paradise", "Elephant ears", "Red cordyline", "Variegated ginger", "Philodendron Xanadu"]),
            default_features: strings(&["Daybed platform with canopy", "Rain curtain water wall", "Integrated cocktail bar ledge"]),
            triggers: vec![
                TriggerRule::new("gardenFeel", &["vibrant"], 3),
                TriggerRule::new("stylePreference", &["tropical"], 2),
                TriggerRule::new("colorPalette", &["citrus", "jewel"], 1),
            ],
        },
        CategoryDefinition {
            id: "edible-oasis".into(),
            label: "Edible Oasis Atelier".to_string(),
            base_score: 1,
            narrative: "Kitchen garden theatrics meet design-forward structure, balancing productivity with beauty and culinary storytelling.".to_string(),
            sensory_notes: strings(&["Crush of herb oils", "Bee buzz in the beds", "Wood raised-bed warmth"]),
            default_plants: strings(&["Espaliered apple", "Perennial kale", "Thai basil", "Calendula", "Ever-bearing strawberries"]),
            default_features: strings(&["Chef's harvest table", "Self-watering raised beds", "Drying rack pergola"]),
            triggers: vec![
                TriggerRule::new("gardenFeel", &["productive"], 3),
                TriggerRule::new("usage", &["grow-food"], 3),
                TriggerRule::new("stylePreference", &["architectural", "cottagecore"], 1),
            ],
        },
        CategoryDefinition {
            id: "playgarden".into(),
            label: "Family Playgarden Circuit".to_string(),
            base_score: 1,
            narrative: "Layered play zones and durable planting invite exploration, with choreographed sightlines that keep everyone connected.".to_string(),
            sensory_notes: strings(&["Giggle-friendly clearings", "Tactile planting edges", "Adventure micro-zones"]),
            default_plants: strings(&["Low-mow fescue mix", "Lavender cotton", "Serviceberry", "Blue fescue", "Pollinator strips"]),
            default_features: strings(&["Loose-parts play deck", "Tree swing or climbing boulder", "Evening glow string-light spine"]),
            triggers: vec![
                TriggerRule::new("usage", &["family-hub"], 3),
                TriggerRule::new("gardenFeel", &["vibrant"], 1),
                TriggerRule::new("kidSafety", &["soft-ground", "sensory-play"], 2),
            ],
        },
        CategoryDefinition {
            id: "rewilded-sanctuary".into(),
            label: "Rewilded Sanctuary".to_string(),
            base_score: 1,
            narrative: "Regenerative planting layers, micro-habitats, and seasonal rhythms center ecological joy and cohabitation.".to_string(),
            sensory_notes: strings(&["Birdsong corridors", "Seed-head silhouettes", "Dynamic meadow breezes"]),
            default_plants: strings(&["Little bluestem", "Echinacea", "Milkweed", "Serviceberry", "Prairie dropseed"]),
            default_features: strings(&["Rain-fed wildlife pond", "Deadwood habitat sculpture", "Meadow walk with seating boulder"]),
            triggers: vec![
                TriggerRule::new("gardenFeel", &["wild"], 3),
                TriggerRule::new("usage", &["wildlife"], 3),
                TriggerRule::new("wildlifeSupport", &["pollinators", "biodiversity"], 2),
            ],
        },
    ])
}
