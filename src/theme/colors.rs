//! Color constants for the field-guide palette.
//!
//! Mirrors the custom properties at the top of `GLOBAL_STYLES`; components
//! that build inline styles read from here.

#![allow(dead_code)]

// === PARCHMENT (Backgrounds) ===
pub const PARCHMENT: &str = "#F5F5DC";
pub const PARCHMENT_BORDER: &str = "#E8DCC0";
pub const CARD_WHITE: &str = "#ffffff";

// === LEAF GREEN (Flora, Primary Actions) ===
pub const LEAF: &str = "#4CAF50";
pub const FOREST: &str = "#2E7D32";
pub const MINT: &str = "#ecfdf5";

// === SKY (Fauna) ===
pub const SKY: &str = "#3b82f6";
pub const SKY_SOFT: &str = "#dbeafe";

// === AMBER (Experience, Reflection) ===
pub const AMBER: &str = "#f59e0b";
pub const AMBER_SOFT: &str = "#fef3c7";
pub const SUNSET: &str = "#FF9800";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#111827";
pub const TEXT_SECONDARY: &str = "#4b5563";
pub const TEXT_MUTED: &str = "#9ca3af";

// === SEMANTIC ===
pub const HEART: &str = "#ef4444";
pub const CRITICAL: &str = "#dc2626";
pub const ENDANGERED: &str = "#ea580c";
pub const VULNERABLE: &str = "#ca8a04";

/// Gradient stops for a level badge, by tier
pub fn level_gradient(tier: ecoquest_core::LevelTier) -> &'static str {
    use ecoquest_core::LevelTier;
    match tier {
        LevelTier::Legendary => "#9333ea, #ec4899",
        LevelTier::Epic => "#f97316, #ef4444",
        LevelTier::Rare => "#3b82f6, #06b6d4",
        LevelTier::Common => "#22c55e, #14b8a6",
    }
}
