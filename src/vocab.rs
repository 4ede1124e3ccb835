//! Site-specific tuning vocabulary.
//!
//! Everything in this module is a named constant set so the boundary between
//! structural parsing and per-site tuning stays explicit. The engine is tuned
//! to one template family (an outdoor-cooking store); retargeting it means
//! editing these sets, not the extractors.

/// Canonical origin used to resolve relative media paths.
pub const SITE_ORIGIN: &str = "https://www.exampleoutdoors.com";

/// Recipe imagery must live under this path on the site CDN.
pub const MEDIA_PATH_PREFIX: &str = "/media/";

/// Product-information-management asset host. Images served from here are
/// product shots, never recipe photography.
pub const PIM_HOST_MARKER: &str = "pim.";

/// Container id substrings that mark page chrome rather than content.
pub const BOILERPLATE_ID_MARKERS: &[&str] = &[
    "nav", "menu", "header", "footer", "cookie", "consent", "login", "modal", "popup", "banner",
];

/// Word pairs that fingerprint a cross-category store menu. A container whose
/// leading text contains both halves of a pair is a navigation block even when
/// its id looks harmless.
pub const NAV_FINGERPRINT_PAIRS: &[(&str, &str)] = &[
    ("jackets", "pants"),
    ("tents", "sleeping"),
    ("men", "women"),
];

/// Page titles that belong to overlays, not recipes.
pub const NON_CONTENT_TITLES: &[&str] = &[
    "log in",
    "login",
    "sign in",
    "we use cookies",
    "cookie consent",
    "accept cookies",
];

/// Site-name suffix separators in `<title>` and `og:title`.
pub const TITLE_SEPARATORS: &[&str] = &["|", " - ", " \u{2013} "];

/// Sub-section labels that precede ingredient groups. A fragment starting with
/// one of these is a group heading, not an ingredient.
pub const INGREDIENT_GROUP_LABELS: &[&str] = &[
    "dough",
    "filling",
    "sauce",
    "marinade",
    "topping",
    "for the",
    "ingredients",
];

/// Heading stems that open instruction capture.
pub const INSTRUCTION_OPENERS: &[&str] = &["procedure", "preparation", "method", "how to"];

/// Exact sub-section labels inside an instruction block. These update the
/// current section name without ending capture.
pub const INSTRUCTION_SECTION_LABELS: &[&str] = &["preparation", "cooking"];

/// Store category vocabulary. Instruction candidates mentioning gear are
/// leaked navigation, not cooking steps.
pub const STORE_CATEGORY_WORDS: &[&str] = &[
    "jackets",
    "pants",
    "tents",
    "sleeping bags",
    "footwear",
    "backpacks",
    "apparel",
];

/// Cookie-banner and login-wall vocabulary.
pub const COOKIE_LOGIN_WORDS: &[&str] = &[
    "cookie",
    "consent",
    "log in",
    "login",
    "password",
    "sign in",
    "accept all",
];

/// FAQ-section vocabulary.
pub const FAQ_WORDS: &[&str] = &["frequently asked", "faq"];

/// Host substrings that identify an embedded video player.
pub const VIDEO_HOST_MARKERS: &[&str] = &["youtube", "youtu.be"];

/// Tags appended when the title or path mentions matching equipment or
/// technique vocabulary.
pub const EQUIPMENT_TAGS: &[(&[&str], &str)] = &[
    (&["cast iron", "cast-iron", "dutch oven"], "dutch oven"),
    (&["campfire", "open fire", "open-fire"], "campfire cooking"),
    (&["grill"], "grilling"),
];

/// Site-wide tags appended to every keyword list.
pub const FIXED_KEYWORDS: &[&str] = &["outdoor recipe", "camp cooking"];
