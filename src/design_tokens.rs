// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the crate's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Timing**: Animation phase lengths and tick cadence

## Examples

```
use iced_toast::design_tokens::{opacity, palette};
use iced::Color;

// The toast card at peak visibility
let card_bg = Color {
    a: opacity::TOAST_PEAK,
    ..palette::BLACK
};
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on the widget and the animation timeline
2. Maintain the typography ordering (small < normal < large)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Peak opacity a toast reaches at the end of its fade-in.
    pub const TOAST_PEAK: f32 = 0.7;

    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    /// Inner padding of the toast card.
    pub const SM: f32 = 12.0; // 1.5 units

    /// Surface margin the toast respects on its leading, trailing, and
    /// bottom edges.
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Large title - the `Large` toast size
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - the `Normal` toast size
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - the `Small` toast size
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Corner rounding of the toast card.
    pub const TOAST: f32 = 10.0;
}

// ============================================================================
// Timing
// ============================================================================

pub mod timing {
    use std::time::Duration;

    /// Fade-in length. Fixed regardless of the configured hold.
    pub const FADE_IN: Duration = Duration::from_millis(100);

    /// Fade-out length. Fixed regardless of the configured hold.
    pub const FADE_OUT: Duration = Duration::from_millis(1200);

    /// Cadence of the presenter's tick subscription while a toast is live.
    pub const TICK: Duration = Duration::from_millis(50);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TOAST_PEAK > 0.0 && opacity::TOAST_PEAK < 1.0);

    // Spacing validation
    assert!(spacing::SM > 0.0);
    assert!(spacing::MD > spacing::SM);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);

    // Radius validation
    assert!(radius::TOAST > 0.0);

    // Timing validation
    assert!(timing::FADE_IN.as_millis() > 0);
    assert!(timing::FADE_OUT.as_millis() > timing::FADE_IN.as_millis());
    assert!(timing::TICK.as_millis() <= timing::FADE_IN.as_millis());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_fine_grained_enough_for_the_fade_in() {
        // The fade-in lasts a single tenth of a second; the tick cadence has
        // to land at least one frame inside it.
        assert!(timing::TICK < timing::FADE_IN);
    }

    #[test]
    fn toast_colors_are_fully_saturated() {
        assert_eq!(palette::BLACK.a, 1.0);
        assert_eq!(palette::WHITE.a, 1.0);
    }
}
