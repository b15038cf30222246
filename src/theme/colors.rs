//! Color constants for the QuoteVerse glassmorphism aesthetic.

#![allow(dead_code)]

// === ACCENTS ===
pub const PINK: &str = "#ec4899";
pub const PINK_BRIGHT: &str = "#ff2e63";
pub const PURPLE: &str = "#a855f7";
pub const BLUE: &str = "#60a5fa";

// === GLASS SURFACES ===
pub const GLASS_BG: &str = "rgba(255, 255, 255, 0.1)";
pub const GLASS_BG_HOVER: &str = "rgba(255, 255, 255, 0.2)";
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.1)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.7)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.5)";

// === ORBS (decorative background blobs) ===
pub const ORB_PINK: &str = "rgba(255, 0, 150, 0.35)";
pub const ORB_CYAN: &str = "rgba(0, 200, 255, 0.35)";
