//! Per-card variant selection.

/// Cosmetic size/style choice, local to one card and never persisted.
///
/// The option set is closed: the selector renders exactly these labels and
/// parses back through [`Variant::from_label`], so an out-of-range value is
/// unrepresentable.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    Small,
    Medium,
    Large,
}

impl Variant {
    /// Options offered by the selector, in display order.
    pub const ALL: [Variant; 4] = [
        Variant::Default,
        Variant::Small,
        Variant::Medium,
        Variant::Large,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Default => "Default",
            Variant::Small => "Small",
            Variant::Medium => "Medium",
            Variant::Large => "Large",
        }
    }

    /// Inverse of [`Variant::label`]. The select control can only produce
    /// values from the closed set, so `None` does not occur in practice.
    pub fn from_label(label: &str) -> Option<Variant> {
        Variant::ALL.into_iter().find(|v| v.label() == label)
    }
}
