//! Composition of the full card document.
//!
//! The card is a fixed layered layout over a 450x250 canvas: background
//! fill, template decoration, circular profile picture, name and role lines,
//! logo mark, and the social footer. Text placement uses rough per-character
//! advance estimates; the footer is the only run whose width matters and the
//! slots are sized generously.

use crate::assets::{globe_icon_markup, ICON_DISCORD, ICON_TWITTER};
use crate::card::CardData;
use crate::color::Background;
use crate::template::{decoration_for, DecorColors, DECOR_HEIGHT, DECOR_WIDTH};
use crate::RendererConfig;

/// Corner radius of the card.
const CARD_RX: f32 = 18.0;

// Profile picture ring
const PFP_CX: f32 = 78.0;
const PFP_CY: f32 = 118.0;
const PFP_R: f32 = 46.0;
const PFP_STROKE: f32 = 4.0;

// Name / role block
const CONTENT_X: f32 = 148.0;
const NAME_Y: f32 = 112.0;
const NAME_SIZE: f32 = 21.0;
const ROLE_Y: f32 = 140.0;
const ROLE_SIZE: f32 = 13.0;

// Logo mark, top-right
const LOGO_X: f32 = 394.0;
const LOGO_Y: f32 = 20.0;
const LOGO_SIZE: f32 = 36.0;

// Social footer
const FOOTER_X: f32 = 24.0;
const FOOTER_Y: f32 = 222.0;
const FOOTER_SIZE: f32 = 12.0;
const FOOTER_ICON: f32 = 14.0;
/// Rough glyph advance at the footer size; same estimation approach as the
/// role line wrapping in the original preview.
const FOOTER_CHAR_W: f32 = 6.5;
const FOOTER_GAP: f32 = 18.0;

/// At most this many roles are drawn, regardless of how many were submitted.
const MAX_DRAWN_ROLES: usize = 3;

/// Compose the card as a standalone SVG document.
///
/// Pure over its inputs: the same card and configuration always produce the
/// same document.
pub fn compose_svg(card: &CardData, config: &RendererConfig) -> String {
    let background = Background::resolve(&card.card_color);
    let bg = background.color().to_hex();
    let text = background.text_color().to_hex();
    let border = background.pfp_border_color().to_hex();
    let decoration = decoration_for(&card.card_template, &DecorColors::for_background(background));

    let w = config.size.width;
    let h = config.size.height;
    let sx = w as f32 / DECOR_WIDTH as f32;
    let sy = h as f32 / DECOR_HEIGHT as f32;
    let font = xml_escape(&config.font_family);

    log::debug!(
        "composing card for {:?}: background {bg}, template {:?}",
        card.name,
        card.card_template
    );

    let mut svg = String::with_capacity(8 * 1024);
    svg.push_str(&format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="http://www.w3.org/2000/svg">"#
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r##"<defs>
<clipPath id="cardClip"><rect width="{w}" height="{h}" rx="{CARD_RX}"/></clipPath>
<clipPath id="pfpClip"><circle cx="{PFP_CX}" cy="{PFP_CY}" r="{PFP_R}"/></clipPath>
</defs>
"##
    ));

    // Background and decoration, clipped to the rounded card.
    svg.push_str(r##"<g clip-path="url(#cardClip)">"##);
    svg.push('\n');
    svg.push_str(&format!(r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#));
    svg.push('\n');
    if let Some(markup) = decoration {
        svg.push_str(&format!(r#"<g fill="none" transform="scale({sx} {sy})">"#));
        svg.push('\n');
        svg.push_str(&markup);
        svg.push_str("\n</g>\n");
    }
    svg.push_str("</g>\n");

    // Profile picture: clipped image (when present) inside a stroked ring.
    match &card.profile_picture {
        Some(data_url) => {
            let x = PFP_CX - PFP_R;
            let y = PFP_CY - PFP_R;
            let d = PFP_R * 2.0;
            svg.push_str(&format!(
                r##"<image x="{x}" y="{y}" width="{d}" height="{d}" preserveAspectRatio="xMidYMid slice" clip-path="url(#pfpClip)" href="{}"/>"##,
                xml_escape(data_url)
            ));
            svg.push('\n');
        }
        None => {
            svg.push_str(&format!(
                r#"<circle cx="{PFP_CX}" cy="{PFP_CY}" r="{PFP_R}" fill="{text}" fill-opacity="0.08"/>"#
            ));
            svg.push('\n');
        }
    }
    svg.push_str(&format!(
        r#"<circle cx="{PFP_CX}" cy="{PFP_CY}" r="{PFP_R}" fill="none" stroke="{border}" stroke-width="{PFP_STROKE}"/>"#
    ));
    svg.push('\n');

    // Name line: "<name> | Mitosis".
    svg.push_str(&format!(
        r#"<text x="{CONTENT_X}" y="{NAME_Y}" font-family="{font}" font-size="{NAME_SIZE}" font-weight="700" fill="{text}">{}<tspan font-weight="400" opacity="0.8"> | Mitosis</tspan></text>"#,
        xml_escape(&card.name)
    ));
    svg.push('\n');

    // Role line, at most three entries.
    let roles = card
        .roles
        .iter()
        .take(MAX_DRAWN_ROLES)
        .map(|r| xml_escape(r))
        .collect::<Vec<_>>()
        .join(" \u{2022} ");
    if !roles.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{CONTENT_X}" y="{ROLE_Y}" font-family="{font}" font-size="{ROLE_SIZE}" fill="{text}" opacity="0.9">{roles}</text>"#
        ));
        svg.push('\n');
    }

    // Logo mark.
    svg.push_str(&format!(
        r##"<image x="{LOGO_X}" y="{LOGO_Y}" width="{LOGO_SIZE}" height="{LOGO_SIZE}" href="{}"/>"##,
        card.logo.data_url()
    ));
    svg.push('\n');

    svg.push_str(&footer_markup(card, &text, &font));
    svg.push_str("</svg>\n");
    svg
}

/// The social footer: Twitter handle, Discord username, and the site, each
/// with its icon, advanced left-to-right with estimated text widths.
fn footer_markup(card: &CardData, fill: &str, font: &str) -> String {
    let mut out = String::new();
    let mut x = FOOTER_X;

    let twitter = card.twitter_display();
    if !twitter.is_empty() {
        push_footer_item(&mut out, &mut x, path_icon(ICON_TWITTER, fill), &twitter, fill, font);
    }
    if !card.username.is_empty() {
        push_footer_item(
            &mut out,
            &mut x,
            path_icon(ICON_DISCORD, fill),
            &card.username,
            fill,
            font,
        );
    }
    push_footer_item(&mut out, &mut x, globe_icon_markup(fill), "mitosis.org", fill, font);
    out
}

fn push_footer_item(out: &mut String, x: &mut f32, icon: String, label: &str, fill: &str, font: &str) {
    let scale = FOOTER_ICON / 24.0;
    out.push_str(&format!(
        r#"<g transform="translate({x} {FOOTER_Y}) scale({scale})">{icon}</g>"#
    ));
    out.push('\n');
    let text_x = *x + FOOTER_ICON + 4.0;
    let text_y = FOOTER_Y + 11.0;
    out.push_str(&format!(
        r#"<text x="{text_x}" y="{text_y}" font-family="{font}" font-size="{FOOTER_SIZE}" fill="{fill}">{}</text>"#,
        xml_escape(label)
    ));
    out.push('\n');
    *x = text_x + label.chars().count() as f32 * FOOTER_CHAR_W + FOOTER_GAP;
}

fn path_icon(d: &str, fill: &str) -> String {
    format!(r#"<path d="{d}" fill="{fill}"/>"#)
}

/// Escape a string for use in SVG text content and attribute values.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
