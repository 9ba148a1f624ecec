use crate::manifest::ManifestIcon;

/// Fixed values shared by every rendered artifact.
///
/// The `Default` implementation carries the production OrgHub values; tests
/// substitute their own so behavior is pinned without relying on product
/// constants. Renderers take the config explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Namespace prefix for stable manifest application ids.
    pub app_id_prefix: String,
    /// Product name woven into titles and descriptions.
    pub product_name: String,
    /// Base URL printed as the no-install deep link.
    pub deep_link_base: String,
    /// Site path under which manifests are served.
    pub manifests_url_path: String,
    /// Site path under which installer pages are served.
    pub install_url_path: String,
    /// Icons declared by every manifest.
    pub icons: Vec<ManifestIcon>,
    /// Language tag for manifests and pages.
    pub lang: String,
    /// Text direction for manifests.
    pub dir: String,
    /// Manifest navigation scope.
    pub scope: String,
    /// Manifest display mode.
    pub display: String,
    /// Manifest orientation.
    pub orientation: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            app_id_prefix: "orghub-".to_string(),
            product_name: "OrgHub".to_string(),
            deep_link_base: "https://orghub-systems.github.io".to_string(),
            manifests_url_path: "/manifests".to_string(),
            install_url_path: "/install".to_string(),
            icons: vec![
                ManifestIcon {
                    src: "/icon-192.png".to_string(),
                    sizes: "192x192".to_string(),
                    icon_type: "image/png".to_string(),
                    purpose: "any maskable".to_string(),
                },
                ManifestIcon {
                    src: "/icon-512.png".to_string(),
                    sizes: "512x512".to_string(),
                    icon_type: "image/png".to_string(),
                    purpose: "any maskable".to_string(),
                },
            ],
            lang: "pl".to_string(),
            dir: "ltr".to_string(),
            scope: "/".to_string(),
            display: "standalone".to_string(),
            orientation: "portrait".to_string(),
        }
    }
}
