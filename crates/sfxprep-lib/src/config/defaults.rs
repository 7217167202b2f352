use super::model::{AssetDescriptor, ManualSource};

pub const DEFAULT_OUTPUT_PATH: &str = "public/sfx";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_ACCEPT: &str = "*/*";
pub const DEFAULT_REFERER: &str = "https://mixkit.co/";

struct BuiltinAsset {
    name: &'static str,
    description: &'static str,
    urls: &'static [&'static str],
    search_keywords: &'static [&'static str],
}

// Declaration order is download order.
const BUILTIN_ASSETS: &[BuiltinAsset] = &[
    BuiltinAsset {
        name: "spinning.mp3",
        description: "Wheel spinning sound",
        urls: &["https://assets.mixkit.co/sfx/download/mixkit-slot-machine-spin-1109.mp3"],
        search_keywords: &["slot machine", "wheel spin", "rolling"],
    },
    BuiltinAsset {
        name: "win.mp3",
        description: "Winning sound",
        urls: &["https://assets.mixkit.co/sfx/download/mixkit-winning-chimes-2015.mp3"],
        search_keywords: &["win sound", "victory", "fanfare", "celebration"],
    },
    BuiltinAsset {
        name: "confetti.mp3",
        description: "Fireworks and confetti sound",
        urls: &["https://assets.mixkit.co/sfx/download/mixkit-party-pop-confetti-3017.mp3"],
        search_keywords: &["fireworks", "party popper", "celebration"],
    },
    BuiltinAsset {
        name: "drumroll.mp3",
        description: "Drum roll sound (optional)",
        urls: &["https://assets.mixkit.co/sfx/download/mixkit-drum-roll-566.mp3"],
        search_keywords: &["drum roll", "suspense"],
    },
];

const BUILTIN_MANUAL_SOURCES: &[(&str, &str)] = &[
    ("Mixkit", "https://mixkit.co/free-sound-effects/"),
    ("Pixabay", "https://pixabay.com/sound-effects/"),
    ("Freesound", "https://freesound.org/"),
];

fn to_owned_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn builtin_assets() -> Vec<AssetDescriptor> {
    BUILTIN_ASSETS
        .iter()
        .map(|asset| AssetDescriptor {
            name: asset.name.to_string(),
            description: asset.description.to_string(),
            urls: to_owned_strings(asset.urls),
            search_keywords: to_owned_strings(asset.search_keywords),
        })
        .collect()
}

pub fn builtin_manual_sources() -> Vec<ManualSource> {
    BUILTIN_MANUAL_SOURCES
        .iter()
        .map(|(label, url)| ManualSource {
            label: label.to_string(),
            url: url.to_string(),
        })
        .collect()
}
