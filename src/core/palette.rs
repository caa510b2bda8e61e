use crate::constants::{FALLBACK_PALETTE, THEME_COLOR_SLOTS};
use rand::Rng;
use smallvec::SmallVec;

/// Ordered, never-empty list of CSS color strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: SmallVec<[String; 6]>,
}

impl Palette {
    /// Read the theme slots through `lookup`, in slot order.
    ///
    /// Values are trimmed and empty ones dropped. When nothing survives the
    /// built-in fallback palette is returned instead, so the result always
    /// holds at least one color. Reading has no side effects and gives the
    /// same answer for an unchanged theme.
    pub fn from_theme<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let colors: SmallVec<[String; 6]> = THEME_COLOR_SLOTS
            .iter()
            .filter_map(|slot| lookup(slot))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();
        if colors.is_empty() {
            Self::fallback()
        } else {
            Self { colors }
        }
    }

    pub fn fallback() -> Self {
        Self {
            colors: FALLBACK_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[inline]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Uniformly random color from the palette.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let i = rng.gen_range(0..self.colors.len());
        &self.colors[i]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::fallback()
    }
}
