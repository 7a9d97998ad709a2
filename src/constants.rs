// DOM hooks and CSS custom property names shared by the web front-end.

// Element ids
pub const CARD_ID: &str = "card";
pub const CARD_ROTATOR_ID: &str = "cardRotator";
pub const CARD_PATTERN_ID: &str = "cardPattern";
pub const CARD_BACK_PATTERN_ID: &str = "cardBackPattern"; // optional
pub const CARD_SHINE_ID: &str = "cardShine";
pub const CARD_GLARE_ID: &str = "cardGlare";
pub const CARD_MASK_ID: &str = "cardMaskOverlay";
pub const CARD_BACK_MASK_ID: &str = "cardBackMask"; // optional
pub const EDITOR_ID: &str = "editor";
pub const TILT_TOGGLE_ID: &str = "tiltToggle";
pub const LAYER_LIST_ID: &str = "layerList";

// Blend selects: (select id, layer name)
pub const BLEND_SELECTS: [(&str, &str); 3] = [
    ("blendMask", "mask"),
    ("blendPattern", "pattern"),
    ("blendHolo", "holo"),
];

// z-index readouts next to each layer in the editor list
pub const LAYER_Z_LABEL_IDS: [(&str, &str); 3] = [
    ("holo", "zHolo"),
    ("pattern", "zPattern"),
    ("mask", "zMask"),
];

// Classes
pub const FLIPPED_CLASS: &str = "flipped";
pub const ACTIVE_CLASS: &str = "active";
pub const DRAGGING_CLASS: &str = "dragging";
pub const LAYER_ITEM_SELECTOR: &str = ".layer-item";
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const MASKED_CLASS: &str = "masked";
pub const EDITOR_HEADER_SELECTOR: &str = ".editor-header";
pub const HOLO_BUTTON_SELECTOR: &str = ".holo-btn";

// Holo type buttons carry their rarity; the card mirrors the active one
pub const DATA_RARITY: &str = "data-rarity";

// Default mask artwork, overridable per card
pub const DEFAULT_MASK_URL: &str = "./mask-front.png";
pub const DEFAULT_BACK_MASK_URL: &str = "./mask-back.png";
pub const DATA_MASK: &str = "data-mask";
pub const DATA_BACK_MASK: &str = "data-back-mask";

// Card config attributes
pub const DATA_MAX_ROTATION: &str = "data-max-rotation";
pub const DATA_IDLE_TIMEOUT: &str = "data-idle-timeout"; // milliseconds
pub const DATA_SMOOTHING: &str = "data-smoothing";
pub const DATA_SPRING_BACK: &str = "data-spring-back";
pub const DATA_GYRO_SCALE: &str = "data-gyro-scale";
pub const DATA_STRATEGY: &str = "data-strategy"; // "direct" | "interpolate"

// CSS custom properties written every frame
pub const VAR_ROTATE_X: &str = "--rotate-x";
pub const VAR_ROTATE_Y: &str = "--rotate-y";
pub const VAR_POINTER_X: &str = "--pointer-x";
pub const VAR_POINTER_Y: &str = "--pointer-y";
pub const VAR_FROM_LEFT: &str = "--pointer-from-left";
pub const VAR_FROM_TOP: &str = "--pointer-from-top";
pub const VAR_FROM_CENTER: &str = "--pointer-from-center";
pub const VAR_BACKGROUND_X: &str = "--background-x";
pub const VAR_BACKGROUND_Y: &str = "--background-y";
pub const VAR_CARD_OPACITY: &str = "--card-opacity";
pub const VAR_GLARE_OPACITY: &str = "--glare-opacity";
pub const VAR_HOLO_OPACITY: &str = "--holo-opacity";
pub const VAR_SPARKLE_OPACITY: &str = "--sparkle-opacity";
pub const VAR_RAINBOW_ANGLE: &str = "--rainbow-angle";
pub const VAR_RAINBOW_POS: &str = "--rainbow-pos";

pub const STYLE_VAR_COUNT: usize = 15;

// Set once at startup
pub const VAR_MASK: &str = "--mask";
pub const VAR_BACK_MASK: &str = "--back-mask";
