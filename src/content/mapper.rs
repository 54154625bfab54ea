//! Maps the raw content document into render-ready values.
//!
//! Pure functions only: color parsing with per-slot defaults, stable card
//! ids from source position, title trimming, and timing derivation.

use crate::color::{Color, palette};
use crate::flow::model::{CardModel, CtaModel, Timing};

use super::model::ContentDocument;

/// Render-ready values produced from one content document.
#[derive(Debug, Clone)]
pub struct MappedContent {
    pub toolbar_title: String,
    pub toolbar_icon: Option<String>,
    pub intro_title: String,
    pub intro_subtitle: String,
    pub intro_subtitle_icon: Option<String>,
    pub cards: Vec<CardModel>,
    pub timing: Timing,
    pub cta: CtaModel,
    pub cta_animation: Option<String>,
}

/// Convert a content document into render-ready card, CTA, and timing
/// values. Cards keep their 0-based source position as id.
pub fn map_document(document: &ContentDocument) -> MappedContent {
    let cards = document
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| CardModel {
            id: index,
            image_url: card.image.clone(),
            collapsed_title: card.collapsed_text.trim().to_string(),
            expanded_title: card.expanded_text.trim().to_string(),
            background: Color::parse_or(card.background_color.as_deref(), palette::CARD_BACKGROUND),
            stroke_start: Color::parse_or(card.stroke_start_color.as_deref(), palette::STROKE_START),
            stroke_end: Color::parse_or(card.stroke_end_color.as_deref(), palette::STROKE_END),
            gradient_start: Color::parse_or(
                card.gradient_start_color.as_deref(),
                palette::GRADIENT_START,
            ),
            gradient_end: Color::parse_or(card.gradient_end_color.as_deref(), palette::GRADIENT_END),
        })
        .collect();

    let cta = CtaModel {
        label: document.cta.text.clone(),
        deeplink: document.cta.deeplink.clone(),
        background: Color::parse_or(
            document.cta.background_color.as_deref(),
            palette::CARD_BACKGROUND,
        ),
        text_color: Color::parse_or(document.cta.text_color.as_deref(), palette::CTA_TEXT),
        stroke: Color::parse_or(document.cta.stroke_color.as_deref(), palette::STROKE_START),
        icon: document.cta.icon.clone(),
        order: document.cta.order.clone(),
    };

    MappedContent {
        toolbar_title: document.tool_bar_text.clone(),
        toolbar_icon: document.tool_bar_icon.clone(),
        intro_title: document.intro_title.clone(),
        intro_subtitle: document.intro_subtitle.clone(),
        intro_subtitle_icon: document.intro_subtitle_icon.clone(),
        cards,
        timing: derive_timing(document),
        cta,
        cta_animation: document.cta_animation.clone(),
    }
}

/// Derive the animation timing from the raw millisecond knobs.
///
/// Negative raw values clamp to zero. The overlap keeps the collapse of one
/// card running while the next one enters: 35% of the collapse length,
/// floored at 120 ms, never exceeding the collapse itself.
pub fn derive_timing(document: &ContentDocument) -> Timing {
    let collapse = document.collapse_card_tilt_interval.max(0) as u64;
    let overlap = if collapse == 0 {
        0
    } else {
        ((collapse as f64 * 0.35).round() as u64).max(120).min(collapse)
    };

    Timing {
        intro: document.collapse_expand_intro_interval.max(0) as u64,
        enter: document.bottom_to_center_translation_interval.max(0) as u64,
        hold: document.expand_card_stay_interval.max(0) as u64,
        collapse,
        overlap,
    }
}

#[cfg(test)]
mod tests {
    use crate::content::model::ContentResponse;

    use super::*;

    fn document(value: serde_json::Value) -> ContentDocument {
        let response: ContentResponse = serde_json::from_value(serde_json::json!({
            "success": true,
            "data": { "onboardingContent": value }
        }))
        .unwrap();
        response.data.onboarding_content
    }

    fn document_with_collapse(collapse: i64) -> ContentDocument {
        document(serde_json::json!({
            "toolBarText": "t",
            "introTitle": "i",
            "introSubtitle": "s",
            "cards": [],
            "cta": { "text": "go" },
            "collapseCardTiltInterval": collapse
        }))
    }

    #[test]
    fn overlap_is_proportional() {
        assert_eq!(derive_timing(&document_with_collapse(1000)).overlap, 350);
    }

    #[test]
    fn overlap_is_zero_without_collapse() {
        assert_eq!(derive_timing(&document_with_collapse(0)).overlap, 0);
    }

    #[test]
    fn overlap_floor_caps_at_collapse() {
        // 200 * 0.35 = 70 < 120 floor, then capped at the collapse length.
        assert_eq!(derive_timing(&document_with_collapse(200)).overlap, 120);
        assert_eq!(derive_timing(&document_with_collapse(100)).overlap, 100);
    }

    #[test]
    fn negative_intervals_clamp_to_zero() {
        let doc = document(serde_json::json!({
            "toolBarText": "t",
            "introTitle": "i",
            "introSubtitle": "s",
            "cards": [],
            "cta": { "text": "go" },
            "collapseCardTiltInterval": -5,
            "collapseExpandIntroInterval": -1,
            "bottomToCenterTranslationInterval": -100,
            "expandCardStayInterval": -1
        }));
        let timing = derive_timing(&doc);
        assert_eq!(timing.intro, 0);
        assert_eq!(timing.enter, 0);
        assert_eq!(timing.hold, 0);
        assert_eq!(timing.collapse, 0);
        assert_eq!(timing.overlap, 0);
    }

    #[test]
    fn cards_get_positional_ids_and_trimmed_titles() {
        let doc = document(serde_json::json!({
            "toolBarText": "t",
            "introTitle": "i",
            "introSubtitle": "s",
            "cards": [
                {
                    "image": "a.png",
                    "collapsedText": "  First  ",
                    "expandedText": "First, expanded\n",
                    "gradientStartColor": "#FF00FF",
                    "gradientEndColor": "#00FF00"
                },
                {
                    "image": "b.png",
                    "collapsedText": "Second",
                    "expandedText": "Second, expanded"
                }
            ],
            "cta": { "text": "go" }
        }));

        let mapped = map_document(&doc);
        assert_eq!(mapped.cards.len(), 2);
        assert_eq!(mapped.cards[0].id, 0);
        assert_eq!(mapped.cards[1].id, 1);
        assert_eq!(mapped.cards[0].collapsed_title, "First");
        assert_eq!(mapped.cards[0].expanded_title, "First, expanded");
        assert_eq!(mapped.cards[0].gradient_start.value(), 0xFFFF_00FF);
        assert_eq!(mapped.cards[0].gradient_end.value(), 0xFF00_FF00);
    }

    #[test]
    fn missing_and_invalid_colors_fall_back_per_slot() {
        let doc = document(serde_json::json!({
            "toolBarText": "t",
            "introTitle": "i",
            "introSubtitle": "s",
            "cards": [
                {
                    "image": "a.png",
                    "collapsedText": "c",
                    "expandedText": "e",
                    "backgroundColor": "not-a-color",
                    "strokeStartColor": ""
                }
            ],
            "cta": { "text": "go" }
        }));

        let card = &map_document(&doc).cards[0];
        assert_eq!(card.background, palette::CARD_BACKGROUND);
        assert_eq!(card.stroke_start, palette::STROKE_START);
        assert_eq!(card.stroke_end, palette::STROKE_END);
        assert_eq!(card.gradient_start, palette::GRADIENT_START);
        assert_eq!(card.gradient_end, palette::GRADIENT_END);
    }

    #[test]
    fn cta_maps_label_and_colors() {
        let doc = document(serde_json::json!({
            "toolBarText": "t",
            "introTitle": "i",
            "introSubtitle": "s",
            "cards": [],
            "cta": {
                "text": "Start saving",
                "deeplink": "app://save",
                "textColor": "#1B1727"
            }
        }));

        let cta = map_document(&doc).cta;
        assert_eq!(cta.label, "Start saving");
        assert_eq!(cta.deeplink.as_deref(), Some("app://save"));
        assert_eq!(cta.text_color.value(), 0xFF1B_1727);
        assert_eq!(cta.background, palette::CARD_BACKGROUND);
    }
}
