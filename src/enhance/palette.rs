//! Labels for the colour palette switcher.

use crate::enhance::{EnhanceContext, Enhancement};

/// Names the palette switcher form
#[derive(Debug, Default, Clone, Copy)]
pub struct PaletteSwitcherLabel;

impl Enhancement for PaletteSwitcherLabel {
    fn name(&self) -> &str {
        "palette_switcher"
    }

    fn description(&self) -> &str {
        "Name the colour theme switcher"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        if let Some(switcher) = ctx.doc().select_first(&ctx.selectors().palette_switcher) {
            ctx.set_attribute_if_missing(switcher, "aria-label", "Color theme switcher");
        }
    }
}

/// Names each palette radio after the scheme it switches to
#[derive(Debug, Default, Clone, Copy)]
pub struct PaletteOptionLabels;

impl Enhancement for PaletteOptionLabels {
    fn name(&self) -> &str {
        "palette_options"
    }

    fn description(&self) -> &str {
        "Label palette options with the theme they switch to"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        let options = ctx.doc().select_all(&ctx.selectors().palette_options);

        for (index, option) in options.into_iter().enumerate() {
            if ctx.doc().has_attribute(option, "aria-label") {
                continue;
            }

            let theme = ctx
                .doc()
                .attribute(option, "data-md-color-scheme")
                .filter(|scheme| !scheme.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("theme-{}", index));

            ctx.set_attribute(option, "aria-label", &format!("Switch to {} theme", theme));
        }
    }
}
