//! Bundled static vector assets: the logo variants and social icons.
//!
//! The logo marks themselves are supplied by the design side; this module
//! only selects among the bundled variants and packages them for embedding.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Mitosis logo variant stamped on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logo {
    #[default]
    Purple,
    Mint,
    White,
    Black,
}

impl Logo {
    pub const ALL: [Logo; 4] = [Logo::Purple, Logo::Mint, Logo::White, Logo::Black];

    /// Wire identifier used by submissions.
    pub fn id(self) -> &'static str {
        match self {
            Logo::Purple => "purple",
            Logo::Mint => "mint",
            Logo::White => "white",
            Logo::Black => "black",
        }
    }

    /// Parse a wire identifier; anything unrecognized maps to the default
    /// purple mark, matching the selection fallback.
    pub fn parse(id: &str) -> Logo {
        match id {
            "mint" => Logo::Mint,
            "white" => Logo::White,
            "black" => Logo::Black,
            _ => Logo::Purple,
        }
    }

    /// The bundled SVG markup for this variant.
    pub fn svg(self) -> &'static str {
        match self {
            Logo::Purple => include_str!("../assets/logos/mitosis_logo_symbol_purple.svg"),
            Logo::Mint => include_str!("../assets/logos/mitosis_logo_symbol_mint.svg"),
            Logo::White => include_str!("../assets/logos/mitosis_logo_symbol_lightpurple.svg"),
            Logo::Black => include_str!("../assets/logos/mitosis_logo_symbol_black.svg"),
        }
    }

    /// The asset as a `data:` URL suitable for an `<image>` href.
    pub fn data_url(self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            BASE64_STANDARD.encode(self.svg())
        )
    }
}

impl std::fmt::Display for Logo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Twitter bird, 24x24 path data, drawn with `fill`.
pub const ICON_TWITTER: &str = "M22.46 5.924c-.793.352-1.645.59-2.54.697a4.482 4.482 0 0 0 1.965-2.475 8.93 8.93 0 0 1-2.828 1.082A4.466 4.466 0 0 0 16.11 4c-2.466 0-4.466 2-4.466 4.466 0 .35.04.692.116 1.02C7.728 9.34 4.1 7.466 1.671 4.797c-.384.66-.604 1.427-.604 2.245 0 1.549.788 2.917 1.984 3.721a4.44 4.44 0 0 1-2.024-.56v.057c0 2.165 1.541 3.972 3.587 4.382-.375.102-.77.157-1.177.157-.288 0-.566-.028-.837-.08.567 1.77 2.211 3.06 4.162 3.094A8.95 8.95 0 0 1 0 19.54a12.64 12.64 0 0 0 6.84 2.006c8.208 0 12.704-6.8 12.704-12.704 0-.194-.004-.389-.013-.58A9.07 9.07 0 0 0 24 4.59a8.94 8.94 0 0 1-2.54.697z";

/// Discord mark, 24x24 path data, drawn with `fill`.
pub const ICON_DISCORD: &str = "M20.317 4.369A19.791 19.791 0 0 0 16.885 3.2a.117.117 0 0 0-.124.06c-.531.96-1.124 2.21-1.541 3.195a17.963 17.963 0 0 0-5.06 0c-.417-.985-1.01-2.235-1.54-3.195a.117.117 0 0 0-.124-.06A19.736 19.736 0 0 0 3.684 4.369a.105.105 0 0 0-.049.043C.533 9.045-.319 13.58.099 18.057a.12.12 0 0 0 .045.082c2.022 1.482 3.983 2.382 5.915 2.986a.117.117 0 0 0 .127-.043c.456-.62.863-1.27 1.217-1.946a.112.112 0 0 0-.062-.157c-.652-.247-1.273-.548-1.872-.892a.117.117 0 0 1-.012-.195c.126-.094.252-.192.372-.291a.113.113 0 0 1 .114-.016c3.927 1.793 8.18 1.793 12.062 0a.112.112 0 0 1 .115.016c.12.099.246.197.372.291a.117.117 0 0 1-.011.195 12.298 12.298 0 0 1-1.873.892.112.112 0 0 0-.061.157c.36.676.767 1.326 1.217 1.946a.115.115 0 0 0 .127.043c1.932-.604 3.893-1.504 5.916-2.986a.12.12 0 0 0 .045-.082c.5-5.177-.838-9.673-3.633-13.645a.104.104 0 0 0-.048-.043zM8.02 15.331c-1.183 0-2.156-1.085-2.156-2.419 0-1.333.955-2.418 2.156-2.418 1.21 0 2.174 1.095 2.156 2.418 0 1.334-.955 2.419-2.156 2.419zm7.974 0c-1.183 0-2.156-1.085-2.156-2.419 0-1.333.955-2.418 2.156-2.418 1.21 0 2.174 1.095 2.156 2.418 0 1.334-.946 2.419-2.156 2.419z";

/// Globe icon, 24x24, drawn with `stroke`. Emitted as ready markup because it
/// is built from several primitives rather than one path.
pub fn globe_icon_markup(stroke: &str) -> String {
    format!(
        r##"<circle cx="12" cy="12" r="10" stroke="{stroke}" stroke-width="2" fill="none"/>
<ellipse cx="12" cy="12" rx="10" ry="4" stroke="{stroke}" stroke-width="2" fill="none"/>
<ellipse cx="12" cy="12" rx="4" ry="10" stroke="{stroke}" stroke-width="2" fill="none"/>
<line x1="2" y1="12" x2="22" y2="12" stroke="{stroke}" stroke-width="2"/>"##
    )
}
