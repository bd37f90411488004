//! Decorative background templates.
//!
//! Each template is a fixed, hand-authored vector composition over the
//! 450x250 card canvas, parametrized only by which of the two derived colors
//! it uses. There is no randomness and no per-user variation: the same
//! submission always produces the same decoration.

use crate::color::{Background, Rgb};

/// Canvas the decorations are authored against, in card units.
pub const DECOR_WIDTH: u32 = 450;
/// See [`DECOR_WIDTH`].
pub const DECOR_HEIGHT: u32 = 250;

/// The two colors a decoration may draw with.
///
/// `wave` fills band and blob shapes; `pattern` strokes line work. On white
/// cards both collapse to the deep pattern purple so the decoration stays
/// visible against the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorColors {
    pub wave: Rgb,
    pub pattern: Rgb,
}

impl DecorColors {
    pub fn for_background(background: Background) -> Self {
        let pattern = background.pattern_color();
        let wave = match background {
            Background::White => pattern,
            _ => background.pastel(),
        };
        Self { wave, pattern }
    }
}

/// The fixed template set. `GlassmorphismBlobs` is reachable
/// programmatically but not offered in the selectable listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    BlueWaves,
    CleanLines,
    RadiateTopLeft,
    DiagonalWaves,
    FlowingMesh,
    ConcentricLines,
    CircularEchoes,
    OverlappingCircles,
    GlassmorphismBlobs,
}

impl Template {
    /// Templates offered for selection, in presentation order.
    pub const SELECTABLE: [Template; 8] = [
        Template::BlueWaves,
        Template::CleanLines,
        Template::RadiateTopLeft,
        Template::DiagonalWaves,
        Template::FlowingMesh,
        Template::ConcentricLines,
        Template::CircularEchoes,
        Template::OverlappingCircles,
    ];

    /// Wire identifier, fixed for compatibility with existing submissions.
    pub fn id(self) -> &'static str {
        match self {
            Template::BlueWaves => "blue-waves",
            Template::CleanLines => "clean-lines",
            Template::RadiateTopLeft => "radiate-top-left",
            Template::DiagonalWaves => "diagonal-waves",
            Template::FlowingMesh => "flowing-mesh",
            Template::ConcentricLines => "concentric-lines",
            Template::CircularEchoes => "circular-echoes",
            Template::OverlappingCircles => "overlapping-circles",
            Template::GlassmorphismBlobs => "glassmorphism-blobs",
        }
    }

    /// Human-readable name for listings.
    pub fn label(self) -> &'static str {
        match self {
            Template::BlueWaves => "Blue Waves",
            Template::CleanLines => "Clean Lines",
            Template::RadiateTopLeft => "Radiate Top-Left",
            Template::DiagonalWaves => "Diagonal Waves",
            Template::FlowingMesh => "Flowing Mesh",
            Template::ConcentricLines => "Concentric Lines",
            Template::CircularEchoes => "Circular Echoes",
            Template::OverlappingCircles => "Overlapping Circles",
            Template::GlassmorphismBlobs => "Glassmorphism Blobs",
        }
    }

    /// Parse a wire identifier. Returns `None` for anything outside the
    /// fixed set; callers decide whether that means "no decoration".
    pub fn parse(id: &str) -> Option<Template> {
        match id {
            "blue-waves" => Some(Template::BlueWaves),
            "clean-lines" => Some(Template::CleanLines),
            "radiate-top-left" => Some(Template::RadiateTopLeft),
            "diagonal-waves" => Some(Template::DiagonalWaves),
            "flowing-mesh" => Some(Template::FlowingMesh),
            "concentric-lines" => Some(Template::ConcentricLines),
            "circular-echoes" => Some(Template::CircularEchoes),
            "overlapping-circles" => Some(Template::OverlappingCircles),
            "glassmorphism-blobs" => Some(Template::GlassmorphismBlobs),
            _ => None,
        }
    }

    /// Emit the decoration as an SVG fragment sized to the decoration canvas.
    pub fn decoration(self, colors: &DecorColors) -> String {
        let wave = colors.wave;
        let pattern = colors.pattern;
        match self {
            Template::CleanLines => format!(
                r##"<path d="M0 180 C90 140, 180 200, 270 160 S360 100, 450 140 L450 250 L0 250 Z" fill="{wave}" fill-opacity="0.6"/>
<path d="M0 200 C90 170, 180 220, 270 180 S360 130, 450 170 L450 250 L0 250 Z" fill="{wave}" fill-opacity="0.4"/>
<path d="M0 220 C90 200, 180 240, 270 210 S360 170, 450 200 L450 250 L0 250 Z" fill="{wave}" fill-opacity="0.2"/>"##
            ),
            Template::BlueWaves => format!(
                r##"<path d="M0 200 Q120 150 240 220 T450 200 L450 250 L0 250 Z" fill="{wave}" fill-opacity="0.6"/>
<path d="M0 220 Q140 170 280 230 T450 220 L450 250 L0 250 Z" fill="{wave}" fill-opacity="0.4"/>"##
            ),
            Template::FlowingMesh => format!(
                r##"<defs>
<linearGradient id="meshGradient" x1="0%" y1="0%" x2="100%" y2="100%">
<stop offset="0%" stop-color="{wave}" stop-opacity="0.1"/>
<stop offset="50%" stop-color="{wave}" stop-opacity="0.2"/>
<stop offset="100%" stop-color="{wave}" stop-opacity="0.1"/>
</linearGradient>
</defs>
<path d="M0 250 C50 220 100 230 150 210 S200 180 250 190 S300 210 350 200 S400 180 450 190 L450 250 Z" fill="url(#meshGradient)"/>
<path d="M0 250 C60 230 120 240 180 220 S240 190 300 200 S360 220 450 200 L450 250 Z" fill="{wave}" fill-opacity="0.15"/>
<path d="M0 250 C70 240 140 250 210 230 S280 200 350 210 S420 230 450 210 L450 250 Z" fill="{wave}" fill-opacity="0.1"/>
<path d="M-30 180 C40 150 110 170 180 150 S250 120 320 140 S390 170 480 140" stroke="{wave}" stroke-width="1.5" stroke-opacity="0.2" fill="none"/>
<path d="M-20 210 C50 180 120 200 190 180 S260 150 330 170 S400 200 490 170" stroke="{wave}" stroke-width="1.5" stroke-opacity="0.15" fill="none"/>
<path d="M-10 240 C60 210 130 230 200 210 S270 180 340 200 S410 230 500 200" stroke="{wave}" stroke-width="1.5" stroke-opacity="0.1" fill="none"/>"##
            ),
            Template::ConcentricLines => format!(
                r##"<g stroke="{pattern}" stroke-width="2" opacity="0.18" fill="none">
<path d="M0 250 Q 80 170 250 170 Q 420 170 450 30"/>
<path d="M0 250 Q 100 150 250 150 Q 400 150 450 60"/>
<path d="M0 250 Q 120 130 250 130 Q 380 130 450 90"/>
<path d="M0 250 Q 140 110 250 110 Q 360 110 450 120"/>
<path d="M0 250 Q 160 90 250 90 Q 340 90 450 150"/>
<path d="M0 250 Q 180 70 250 70 Q 320 70 450 180"/>
</g>"##
            ),
            Template::RadiateTopLeft => format!(
                r##"<g stroke="{pattern}" stroke-width="2" opacity="0.16" fill="none">
<path d="M0 0 Q 70 70 250 70 Q 430 70 450 200"/>
<path d="M0 0 Q 100 100 250 100 Q 400 100 450 230"/>
<path d="M0 0 Q 130 130 250 130 Q 370 130 450 250"/>
<path d="M0 0 Q 160 160 250 160 Q 340 160 450 270"/>
</g>"##
            ),
            Template::DiagonalWaves => format!(
                r##"<g stroke="{pattern}" stroke-width="2" opacity="0.18" fill="none">
<path d="M-10 210 Q 60 170 120 200 T 250 170 T 400 210 T 470 160"/>
<path d="M-20 230 Q 40 190 110 220 T 230 180 T 350 230 T 480 200"/>
<path d="M-30 250 Q 30 210 90 240 T 210 210 T 320 250 T 490 240"/>
<path d="M0 180 Q 80 150 170 170 T 320 180 T 450 140"/>
<path d="M0 200 Q 100 180 200 190 T 350 200 T 450 180"/>
</g>"##
            ),
            Template::CircularEchoes => format!(
                r##"<g stroke="{pattern}" stroke-width="2" opacity="0.16" fill="none">
<path d="M-40 250 Q 60 100 300 120 Q 520 140 520 250"/>
<path d="M-60 250 Q 80 120 320 150 Q 540 180 540 250"/>
<path d="M-80 250 Q 100 140 340 180 Q 560 220 560 250"/>
<path d="M-100 250 Q 120 160 360 210 Q 580 260 580 250"/>
<path d="M-120 250 Q 140 180 380 240 Q 600 300 600 250"/>
</g>"##
            ),
            Template::GlassmorphismBlobs => format!(
                r##"<defs>
<radialGradient id="blob1" cx="50%" cy="50%" r="50%">
<stop offset="0%" stop-color="{pattern}" stop-opacity="0.8"/>
<stop offset="100%" stop-color="{pattern}" stop-opacity="0.2"/>
</radialGradient>
<radialGradient id="blob2" cx="50%" cy="50%" r="50%">
<stop offset="0%" stop-color="{pattern}" stop-opacity="0.7"/>
<stop offset="100%" stop-color="{pattern}" stop-opacity="0.1"/>
</radialGradient>
<radialGradient id="blob3" cx="50%" cy="50%" r="50%">
<stop offset="0%" stop-color="{pattern}" stop-opacity="0.6"/>
<stop offset="100%" stop-color="{pattern}" stop-opacity="0.1"/>
</radialGradient>
<filter id="blur1"><feGaussianBlur stdDeviation="18"/></filter>
<filter id="blur2"><feGaussianBlur stdDeviation="12"/></filter>
<filter id="blur3"><feGaussianBlur stdDeviation="8"/></filter>
</defs>
<ellipse cx="120" cy="180" rx="80" ry="50" fill="url(#blob1)" filter="url(#blur1)"/>
<ellipse cx="340" cy="80" rx="60" ry="36" fill="url(#blob2)" filter="url(#blur2)"/>
<ellipse cx="260" cy="180" rx="40" ry="28" fill="url(#blob3)" filter="url(#blur3)"/>
<path d="M40 200 Q 150 120 320 180 Q 410 210 430 120" stroke="{pattern}" stroke-width="2" stroke-opacity="0.18" fill="none"/>
<path d="M80 230 Q 200 170 380 200 Q 430 210 440 180" stroke="{pattern}" stroke-width="2" stroke-opacity="0.13" fill="none"/>"##
            ),
            Template::OverlappingCircles => format!(
                r##"<circle cx="100" cy="90" r="70" fill="{wave}" fill-opacity="0.23"/>
<circle cx="230" cy="120" r="90" fill="{pattern}" fill-opacity="0.18"/>
<circle cx="340" cy="70" r="60" fill="{wave}" fill-opacity="0.15"/>
<circle cx="170" cy="180" r="60" fill="{pattern}" fill-opacity="0.12"/>
<circle cx="320" cy="170" r="50" fill="{wave}" fill-opacity="0.10"/>"##
            ),
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Decoration for a submitted identifier. Unrecognized identifiers yield no
/// decoration; that is a fallback, not an error.
pub fn decoration_for(id: &str, colors: &DecorColors) -> Option<String> {
    match Template::parse(id) {
        Some(template) => Some(template.decoration(colors)),
        None => {
            if !id.is_empty() {
                log::warn!("unknown card template {id:?}, rendering without decoration");
            }
            None
        }
    }
}
