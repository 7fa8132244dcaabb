// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the page and toast views.
//!
//! ```
//! use flash_cues::ui::design_tokens::{accent, toast};
//! use iced::Color;
//!
//! let half_faded = Color { a: 0.5, ..accent::SUCCESS };
//! assert!(toast::SLOT_MARGIN > 0.0);
//! # let _ = half_faded;
//! ```

/// Accent colors, one per flash category.
pub mod accent {
    use iced::Color;

    pub const SUCCESS: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const WARNING: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const DANGER: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

/// Spacing scale on a 4 px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod typography {
    /// Page headings (`h1`-`h3`).
    pub const HEADING: f32 = 20.0;
    pub const BODY: f32 = 14.0;
}

/// Toast card geometry.
pub mod toast {
    use iced::{Color, Shadow, Vector};

    pub const WIDTH: f32 = 320.0;
    /// Space above and below a card. A fading card moves inside it, so the
    /// largest configurable shift must fit.
    pub const SLOT_MARGIN: f32 = 8.0;
    pub const BORDER_WIDTH: f32 = 2.0;
    pub const RADIUS: f32 = 8.0;
    pub const SHADOW: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(typography::HEADING > typography::BODY);
    assert!(crate::config::MAX_SHIFT_PX <= toast::SLOT_MARGIN);
};
