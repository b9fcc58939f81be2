use serde::Serialize;

pub const APP_NAME: &str = "Gait Daily";
pub const APP_SHORT_NAME: &str = "Gait";
pub const APP_DESCRIPTION: &str = "A beautiful launch experience";
pub const THEME_COLOR: &str = "#000000";
pub const BACKGROUND_COLOR: &str = "#000000";

/// Sizes advertised for the generated icon and the static PNG assets.
const ICON_SIZES: [u32; 2] = [192, 512];

#[derive(Debug, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
    pub purpose: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub scope: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestIcon>,
}

impl Default for WebManifest {
    fn default() -> Self {
        Self::new()
    }
}

impl WebManifest {
    pub fn new() -> Self {
        let mut icons = Vec::new();
        for size in ICON_SIZES {
            icons.push(ManifestIcon {
                src: format!("/api/icon?size={}", size),
                sizes: format!("{}x{}", size, size),
                mime_type: "image/svg+xml",
                purpose: "any",
            });
        }
        for size in ICON_SIZES {
            icons.push(ManifestIcon {
                src: format!("/icons/icon-{}x{}.png", size, size),
                sizes: format!("{}x{}", size, size),
                mime_type: "image/png",
                purpose: "any maskable",
            });
        }

        Self {
            name: APP_NAME,
            short_name: APP_SHORT_NAME,
            description: APP_DESCRIPTION,
            start_url: "/",
            scope: "/",
            display: "standalone",
            background_color: BACKGROUND_COLOR,
            theme_color: THEME_COLOR,
            icons,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_generated_and_static_icons() {
        let manifest = WebManifest::new();
        let json: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();

        assert_eq!(json["name"], "Gait Daily");
        assert_eq!(json["display"], "standalone");
        assert_eq!(json["theme_color"], "#000000");

        let icons = json["icons"].as_array().unwrap();
        assert_eq!(icons.len(), 4);
        assert_eq!(icons[0]["src"], "/api/icon?size=192");
        assert_eq!(icons[0]["type"], "image/svg+xml");
        assert_eq!(icons[1]["sizes"], "512x512");
        assert_eq!(icons[3]["src"], "/icons/icon-512x512.png");
    }
}
