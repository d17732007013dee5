/// Nominal lumber size with its actual (dressed) dimensions in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardSize {
    pub label: &'static str,
    pub width_in: f64,
    pub thickness_in: f64,
}

pub const STANDARD_SIZES: [StandardSize; 5] = [
    StandardSize {
        label: "2x4",
        width_in: 3.5,
        thickness_in: 1.5,
    },
    StandardSize {
        label: "2x6",
        width_in: 5.5,
        thickness_in: 1.5,
    },
    StandardSize {
        label: "4x4",
        width_in: 3.5,
        thickness_in: 3.5,
    },
    StandardSize {
        label: "1x6",
        width_in: 5.5,
        thickness_in: 0.75,
    },
    StandardSize {
        label: "1x12",
        width_in: 11.25,
        thickness_in: 0.75,
    },
];

impl StandardSize {
    /// Looks up a preset by its nominal label, e.g. `"2x4"`. Also accepts `×` as separator.
    pub fn by_label(label: &str) -> Option<StandardSize> {
        let normalized = label.trim().replace('×', "x").to_lowercase();
        STANDARD_SIZES.iter().find(|s| s.label == normalized).copied()
    }
}
