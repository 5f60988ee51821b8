//! Static provider lookup tables.
//!
//! TMDB reports the same service under several names depending on the
//! storefront ("Disney Plus" vs "Disney+", channel resellers, ...), so each
//! family of aliases maps to one icon and one LG webOS app.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Provider name → icon filename under `icons/`
static PROVIDER_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Netflix", "netflix.png"),
        ("Hulu", "hulu.png"),
        ("Disney Plus", "disneyplus.png"),
        ("Disney+", "disneyplus.png"),
        ("Amazon Prime Video", "primevideo.png"),
        // Apple family
        ("Apple TV Plus", "appletv.png"),
        ("Apple TV+", "appletv.png"),
        ("Apple TV", "appletv.png"),
        ("Apple TV App", "appletv.png"),
        ("Apple TV Amazon Channel", "appletv.png"),
        ("Apple iTunes", "appletv.png"),
        // Max family
        ("Max", "max.png"),
        ("HBO Max", "max.png"),
        // AMC family
        ("AMC", "amc.png"),
        ("AMC+", "amc.png"),
        ("AMC Plus", "amc.png"),
        ("AMC Premiere", "amc.png"),
        // Starz family
        ("Starz", "starz.png"),
        ("Starz Play", "starz.png"),
        ("Starz Amazon Channel", "starz.png"),
        ("Starz Apple TV Channel", "starz.png"),
        // Spectrum family
        ("Spectrum", "spectrum.png"),
        ("Spectrum TV", "spectrum.png"),
        ("Spectrum On Demand", "spectrum.png"),
    ])
});

/// Provider name → LG webOS app id. `None` marks a known provider with no app.
static LAUNCH_APPS: Lazy<HashMap<&'static str, Option<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        ("Netflix", Some("com.webos.app.netflix")),
        ("Hulu", Some("com.webos.app.hulu")),
        ("Disney Plus", Some("com.webos.app.disneyplus")),
        ("Disney+", Some("com.webos.app.disneyplus")),
        ("Amazon Prime Video", Some("com.webos.app.primevideo")),
        // Apple family
        ("Apple TV Plus", Some("com.webos.app.appletv")),
        ("Apple TV+", Some("com.webos.app.appletv")),
        ("Apple TV", Some("com.webos.app.appletv")),
        ("Apple TV App", Some("com.webos.app.appletv")),
        ("Apple TV Amazon Channel", Some("com.webos.app.appletv")),
        ("Apple iTunes", Some("com.webos.app.appletv")),
        // Max family
        ("Max", Some("com.webos.app.hbomax")),
        ("HBO Max", Some("com.webos.app.hbomax")),
        // AMC family has no dedicated LG app
        ("AMC", None),
        ("AMC+", None),
        ("AMC Plus", None),
        ("AMC Premiere", None),
        // Starz family
        ("Starz", Some("com.starz.starzplay")),
        ("Starz Play", Some("com.starz.starzplay")),
        ("Starz Amazon Channel", Some("com.starz.starzplay")),
        ("Starz Apple TV Channel", Some("com.starz.starzplay")),
        // Spectrum family
        ("Spectrum", Some("com.lge.app.spectrum")),
        ("Spectrum TV", Some("com.lge.app.spectrum")),
        ("Spectrum On Demand", Some("com.lge.app.spectrum")),
    ])
});

/// Icon filename for a provider, if one is shipped
pub fn icon_for(provider: &str) -> Option<&'static str> {
    PROVIDER_ICONS.get(provider).copied()
}

/// Deep-link app id for a provider
pub fn launch_app_for(provider: &str) -> Option<&'static str> {
    LAUNCH_APPS.get(provider).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_icon() {
        assert_eq!(icon_for("Disney Plus"), Some("disneyplus.png"));
        assert_eq!(icon_for("Disney+"), Some("disneyplus.png"));
        assert_eq!(icon_for("HBO Max"), icon_for("Max"));
    }

    #[test]
    fn test_unknown_provider_has_no_icon() {
        assert_eq!(icon_for("Peacock"), None);
        assert_eq!(icon_for("netflix"), None);
    }

    #[test]
    fn test_launch_app_lookup() {
        assert_eq!(launch_app_for("Netflix"), Some("com.webos.app.netflix"));
        assert_eq!(launch_app_for("Starz Play"), Some("com.starz.starzplay"));
    }

    #[test]
    fn test_amc_family_has_no_app() {
        for name in ["AMC", "AMC+", "AMC Plus", "AMC Premiere"] {
            assert!(LAUNCH_APPS.contains_key(name));
            assert_eq!(launch_app_for(name), None);
        }
    }

    #[test]
    fn test_every_app_provider_has_icon() {
        for name in LAUNCH_APPS.keys() {
            assert!(icon_for(name).is_some(), "missing icon for {}", name);
        }
    }
}
