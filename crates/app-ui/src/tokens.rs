//! Design tokens for Portico
//!
//! Spacing, sizing, radius and border tokens shared by the components.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 24px - 2x large
    pub const SPACE_2XL: f32 = 24.0;
    /// 32px - 3x large
    pub const SPACE_3XL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "2xl" => Some(SPACE_2XL),
            "3xl" => Some(SPACE_3XL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Small icon (16px)
        pub const SM: f32 = 16.0;
        /// Medium icon (20px)
        pub const MD: f32 = 20.0;
        /// Large icon (24px)
        pub const LG: f32 = 24.0;
        /// Tab bar icon (28px)
        pub const TAB: f32 = 28.0;
    }

    /// Button sizes
    pub mod button {
        /// Small button height (32px)
        pub const SM_HEIGHT: f32 = 32.0;
        /// Large button height (48px)
        pub const LG_HEIGHT: f32 = 48.0;
    }

    /// Main-section tab bar
    pub mod tab_bar {
        /// Bar height (60px)
        pub const HEIGHT: f32 = 60.0;
        /// Raised centre button diameter (64px)
        pub const CENTER_BUTTON: f32 = 64.0;
        /// How far the centre button rises above the bar (10px)
        pub const CENTER_LIFT: f32 = 10.0;
    }

    /// Input field sizes
    pub mod input {
        /// Input height (48px)
        pub const HEIGHT: f32 = 48.0;
        /// Horizontal padding inside the outline
        pub const PADDING_X: f32 = 12.0;
        /// Gap between glyphs and text
        pub const ICON_GAP: f32 = 8.0;
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
    /// Fully rounded
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// Hairline border
    pub const HAIRLINE: f32 = 0.5;
    /// Thin border (1px)
    pub const THIN: f32 = 1.0;
    /// Medium border (2px), used for focused and errored fields
    pub const MEDIUM: f32 = 2.0;
}
