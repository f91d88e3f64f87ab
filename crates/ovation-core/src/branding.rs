//! Prompt branding resolution
//!
//! Explicit policy overrides win; the fetched manifest fills the gaps. Theme
//! colors derive from the manifest `theme_color`, with the foreground picked
//! by perceived luminance so text stays readable on any background.

use ovation_api::ThemeColors;
use ovation_config::PromptPolicy;
use ovation_host::FetchedManifest;
use tracing::debug;
use url::Url;

/// Perceived-luminance cutoff above which black text reads better than white
const LUMINANCE_CUTOFF: f64 = 186.0;

/// Branding before the missing-icon decision is made
pub(crate) struct Branding {
    pub display_name: Option<String>,
    pub icon: Option<String>,
    pub theme: Option<ThemeColors>,
}

/// Resolve branding from the policy overrides and the fetched manifest.
pub(crate) fn resolve(policy: &PromptPolicy, fetched: Option<&FetchedManifest>) -> Branding {
    let manifest = fetched.map(|f| &f.manifest);

    let display_name = policy
        .display_name
        .clone()
        .or_else(|| manifest.and_then(|m| m.name.clone()));

    let icon = policy
        .icon
        .clone()
        .or_else(|| fetched.and_then(first_icon_url));

    let theme = manifest
        .and_then(|m| m.theme_color.as_deref())
        .and_then(theme_colors);

    Branding {
        display_name,
        icon,
        theme,
    }
}

/// First manifest icon, absolutized against the manifest URL when relative.
fn first_icon_url(fetched: &FetchedManifest) -> Option<String> {
    let icon = fetched.manifest.icons.first()?;

    if let Ok(url) = Url::parse(&icon.src) {
        return Some(url.to_string());
    }

    match Url::parse(&fetched.url).and_then(|base| base.join(&icon.src)) {
        Ok(url) => Some(url.to_string()),
        Err(err) => {
            debug!(src = %icon.src, error = %err, "Could not absolutize icon URL");
            Some(icon.src.clone())
        }
    }
}

/// Theme colors for a manifest color. Unparseable input yields no theme.
pub(crate) fn theme_colors(color: &str) -> Option<ThemeColors> {
    let (r, g, b) = parse_hex_color(color)?;

    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    let foreground = if luminance > LUMINANCE_CUTOFF {
        "#000000"
    } else {
        "#ffffff"
    };

    Some(ThemeColors {
        background: format!("#{r:02x}{g:02x}{b:02x}"),
        foreground: foreground.to_string(),
    })
}

/// Parse `#rgb` or `#rrggbb`; the leading `#` is optional.
fn parse_hex_color(input: &str) -> Option<(u8, u8, u8)> {
    let hex = input.trim().trim_start_matches('#');
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}
