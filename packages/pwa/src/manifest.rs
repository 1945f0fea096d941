use serde::{Deserialize, Serialize};

/// Square icon edge lengths listed in the manifest
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Web app manifest, field order matches the emitted JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub orientation: String,
    pub icons: Vec<Icon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl Icon {
    fn png(size: u32) -> Self {
        Self {
            src: format!("icons/icon-{size}x{size}.png"),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: "Web Builder App".to_string(),
            short_name: "WB App".to_string(),
            description: "A web application built with the Web Builder".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: "#ffffff".to_string(),
            theme_color: "#3b82f6".to_string(),
            orientation: "any".to_string(),
            icons: ICON_SIZES.iter().copied().map(Icon::png).collect(),
        }
    }
}

/// Pretty-printed `manifest.json` contents
pub fn generate_manifest() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Manifest::default())
}
