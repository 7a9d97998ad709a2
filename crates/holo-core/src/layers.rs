//! Editor-side model of the overlay layers: their stacking order and blend
//! modes. The front-end owns the list widget; this only decides the order and
//! the resulting z-indices.

use crate::constants::LAYER_Z_STEP;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Shine + glare overlays.
    Holo,
    Pattern,
    Mask,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Holo, Layer::Pattern, Layer::Mask];

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Holo => "holo",
            Layer::Pattern => "pattern",
            Layer::Mask => "mask",
        }
    }

    pub fn default_blend(self) -> BlendMode {
        match self {
            Layer::Holo | Layer::Pattern => BlendMode::ColorDodge,
            Layer::Mask => BlendMode::Overlay,
        }
    }
}

impl FromStr for Layer {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name {:?}", self.0)
    }
}

impl std::error::Error for UnknownName {}

/// CSS `mix-blend-mode` keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    pub const ALL: [BlendMode; 16] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];

    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }
}

impl FromStr for BlendMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BlendMode::ALL
            .into_iter()
            .find(|m| m.as_css().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Where a dragged item lands relative to the item under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropSide {
    Before,
    After,
}

impl DropSide {
    /// Above the hovered item's vertical midpoint drops before it.
    pub fn from_pointer(pointer_y: f32, item_top: f32, item_height: f32) -> Self {
        if pointer_y < item_top + item_height / 2.0 {
            DropSide::Before
        } else {
            DropSide::After
        }
    }
}

/// Top-to-bottom layer order plus per-layer blend modes.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStack {
    order: SmallVec<[Layer; 3]>,
    blends: [BlendMode; 3],
}

impl Default for LayerStack {
    fn default() -> Self {
        Self {
            order: SmallVec::from_buf(Layer::ALL),
            blends: Layer::ALL.map(Layer::default_blend),
        }
    }
}

impl LayerStack {
    /// Build from a top-to-bottom list; missing layers are appended in
    /// default order and duplicates are dropped.
    pub fn from_order(layers: &[Layer]) -> Self {
        let mut order: SmallVec<[Layer; 3]> = SmallVec::new();
        for &l in layers.iter().chain(Layer::ALL.iter()) {
            if !order.contains(&l) {
                order.push(l);
            }
        }
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn order(&self) -> &[Layer] {
        &self.order
    }

    pub fn position(&self, layer: Layer) -> Option<usize> {
        self.order.iter().position(|&l| l == layer)
    }

    /// Topmost layer gets the highest z-index: `(total - i) * step`.
    pub fn z_index(&self, layer: Layer) -> Option<i32> {
        let total = self.order.len() as i32;
        self.position(layer).map(|i| (total - i as i32) * LAYER_Z_STEP)
    }

    pub fn z_indices(&self) -> SmallVec<[(Layer, i32); 3]> {
        let total = self.order.len() as i32;
        self.order
            .iter()
            .enumerate()
            .map(|(i, &l)| (l, (total - i as i32) * LAYER_Z_STEP))
            .collect()
    }

    /// Move `dragged` next to `over`. Returns true if the order changed.
    pub fn move_relative(&mut self, dragged: Layer, over: Layer, side: DropSide) -> bool {
        if dragged == over {
            return false;
        }
        let before = self.order.clone();
        let Some(from) = self.position(dragged) else {
            return false;
        };
        self.order.remove(from);
        let Some(anchor) = self.position(over) else {
            self.order.insert(from, dragged);
            return false;
        };
        let at = match side {
            DropSide::Before => anchor,
            DropSide::After => anchor + 1,
        };
        self.order.insert(at, dragged);
        self.order != before
    }

    pub fn blend(&self, layer: Layer) -> BlendMode {
        self.blends[slot(layer)]
    }

    pub fn set_blend(&mut self, layer: Layer, mode: BlendMode) {
        self.blends[slot(layer)] = mode;
    }
}

#[inline]
fn slot(layer: Layer) -> usize {
    match layer {
        Layer::Holo => 0,
        Layer::Pattern => 1,
        Layer::Mask => 2,
    }
}
