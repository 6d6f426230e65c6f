//! Display metadata for the waste categories reported by the classifier.
//!
//! The table is a fixed literal: nine known category keys, each mapped to a
//! display name, icon, accent color and disposal tip. Unknown keys resolve to
//! the "miscellaneous trash" entry.

use egui::Color32;

/// Key used for any category the table does not recognize.
pub const FALLBACK_KEY: &str = "miscellaneous trash";

/// Display metadata for a single waste category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WasteInfo {
    /// Human-readable category name.
    pub name: &'static str,
    /// Emoji shown next to the category.
    pub icon: &'static str,
    /// Accent color for result cards and probability bars.
    pub color: Color32,
    /// Short disposal guidance.
    pub tip: &'static str,
}

/// Known category keys and their descriptors, ordered as the service lists them.
pub const WASTE_TYPES: [(&str, WasteInfo); 9] = [
    (
        "cardboard",
        WasteInfo {
            name: "Cardboard",
            icon: "📦",
            color: Color32::from_rgb(0x8B, 0x45, 0x13),
            tip: "Flatten boxes and remove tape before recycling.",
        },
    ),
    (
        "food organics",
        WasteInfo {
            name: "Food Organics",
            icon: "🥬",
            color: Color32::from_rgb(0x6B, 0x44, 0x23),
            tip: "Compost food scraps to reduce landfill waste.",
        },
    ),
    (
        "glass",
        WasteInfo {
            name: "Glass",
            icon: "🫙",
            color: Color32::from_rgb(0x8B, 0x73, 0x55),
            tip: "Rinse containers and recycle with glass.",
        },
    ),
    (
        "metal",
        WasteInfo {
            name: "Metal",
            icon: "🥫",
            color: Color32::from_rgb(0x5C, 0x40, 0x33),
            tip: "Clean cans and foil before recycling.",
        },
    ),
    (
        FALLBACK_KEY,
        WasteInfo {
            name: "Miscellaneous Trash",
            icon: "🗑",
            color: Color32::from_rgb(0x65, 0x43, 0x21),
            tip: "Dispose in general waste bin.",
        },
    ),
    (
        "paper",
        WasteInfo {
            name: "Paper",
            icon: "📄",
            color: Color32::from_rgb(0xA0, 0x82, 0x6D),
            tip: "Keep paper dry and clean for recycling.",
        },
    ),
    (
        "plastic",
        WasteInfo {
            name: "Plastic",
            icon: "♻",
            color: Color32::from_rgb(0x8B, 0x6F, 0x47),
            tip: "Check the recycling number and clean before recycling.",
        },
    ),
    (
        "textile trash",
        WasteInfo {
            name: "Textile",
            icon: "👕",
            color: Color32::from_rgb(0x70, 0x42, 0x14),
            tip: "Donate wearable clothes or recycle fabric.",
        },
    ),
    (
        "vegetation",
        WasteInfo {
            name: "Vegetation",
            icon: "🌿",
            color: Color32::from_rgb(0x5C, 0x40, 0x33),
            tip: "Compost yard waste and plant material.",
        },
    ),
];

/// Look up the descriptor for a category key, ignoring case and surrounding whitespace.
///
/// Unrecognized keys return the "miscellaneous trash" descriptor.
pub fn get_waste_info(key: &str) -> &'static WasteInfo {
    let normalized = key.trim().to_lowercase();
    lookup(&normalized).unwrap_or_else(fallback)
}

/// Iterate over the known category keys.
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    WASTE_TYPES.iter().map(|(key, _)| *key)
}

fn lookup(normalized: &str) -> Option<&'static WasteInfo> {
    WASTE_TYPES
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, info)| info)
}

fn fallback() -> &'static WasteInfo {
    &WASTE_TYPES[4].1
}
