//! Wire model for the remote content document.
//!
//! The content service returns an envelope with a `success` flag wrapping
//! the onboarding document. Decoding is tolerant: color strings and icons
//! may be absent, the timing knobs default when omitted, and unknown fields
//! (cohort/experiment bookkeeping) are ignored.

use serde::Deserialize;

/// Top-level response envelope from the content service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub success: bool,
    pub data: ContentData,
}

/// Payload wrapper inside the envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentData {
    pub onboarding_content: ContentDocument,
}

/// The onboarding content document: copy, cards, CTA, and timing knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub tool_bar_text: String,
    #[serde(default)]
    pub tool_bar_icon: Option<String>,
    pub intro_title: String,
    pub intro_subtitle: String,
    #[serde(default)]
    pub intro_subtitle_icon: Option<String>,
    pub cards: Vec<ContentCard>,
    pub cta: CtaBlock,
    #[serde(default)]
    pub cta_animation: Option<String>,
    #[serde(default)]
    pub screen_type: Option<String>,
    /// Collapse animation length in milliseconds.
    #[serde(default = "default_collapse_interval")]
    pub collapse_card_tilt_interval: i64,
    /// Delay before the first card appears, in milliseconds.
    #[serde(default = "default_intro_interval")]
    pub collapse_expand_intro_interval: i64,
    /// Card entrance translation length in milliseconds.
    #[serde(default = "default_enter_interval")]
    pub bottom_to_center_translation_interval: i64,
    /// How long an expanded card stays on screen, in milliseconds.
    #[serde(default = "default_hold_interval")]
    pub expand_card_stay_interval: i64,
}

/// A single education card as delivered by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCard {
    pub image: String,
    pub collapsed_text: String,
    pub expanded_text: String,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub stroke_start_color: Option<String>,
    #[serde(default)]
    pub stroke_end_color: Option<String>,
    #[serde(default)]
    pub gradient_start_color: Option<String>,
    #[serde(default)]
    pub gradient_end_color: Option<String>,
}

/// Call-to-action block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaBlock {
    pub text: String,
    #[serde(default)]
    pub deeplink: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub stroke_color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

fn default_collapse_interval() -> i64 {
    1000
}

fn default_intro_interval() -> i64 {
    500
}

fn default_enter_interval() -> i64 {
    1500
}

fn default_hold_interval() -> i64 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_document() {
        let json = serde_json::json!({
            "success": true,
            "data": {
                "onboardingContent": {
                    "toolBarText": "Gold savings",
                    "toolBarIcon": "https://cdn.example/toolbar.png",
                    "introTitle": "Buy gold your way",
                    "introSubtitle": "Three things to know",
                    "cards": [
                        {
                            "image": "https://cdn.example/card0.png",
                            "collapsedText": "Start small",
                            "expandedText": "Start with as little as you like",
                            "backgroundColor": "#311B4B",
                            "strokeStartColor": "#66FFFFFF",
                            "strokeEndColor": "#66FFFFFF",
                            "gradientStartColor": "#6A1B9A",
                            "gradientEndColor": "#AD1457"
                        }
                    ],
                    "cta": {
                        "text": "Continue",
                        "deeplink": "app://savings",
                        "backgroundColor": "#FFFFFF",
                        "textColor": "#1B1727",
                        "strokeColor": "#66FFFFFF"
                    },
                    "collapseCardTiltInterval": 800,
                    "collapseExpandIntroInterval": 300,
                    "bottomToCenterTranslationInterval": 1200,
                    "expandCardStayInterval": 2500
                }
            }
        });

        let response: ContentResponse = serde_json::from_value(json).unwrap();
        assert!(response.success);
        let document = response.data.onboarding_content;
        assert_eq!(document.tool_bar_text, "Gold savings");
        assert_eq!(document.cards.len(), 1);
        assert_eq!(document.cta.text, "Continue");
        assert_eq!(document.collapse_card_tilt_interval, 800);
    }

    #[test]
    fn timing_knobs_default_when_absent() {
        let json = serde_json::json!({
            "success": true,
            "data": {
                "onboardingContent": {
                    "toolBarText": "",
                    "introTitle": "",
                    "introSubtitle": "",
                    "cards": [],
                    "cta": { "text": "" }
                }
            }
        });

        let response: ContentResponse = serde_json::from_value(json).unwrap();
        let document = response.data.onboarding_content;
        assert_eq!(document.collapse_card_tilt_interval, 1000);
        assert_eq!(document.collapse_expand_intro_interval, 500);
        assert_eq!(document.bottom_to_center_translation_interval, 1500);
        assert_eq!(document.expand_card_stay_interval, 3000);
    }

    #[test]
    fn ignores_experiment_fields() {
        let json = serde_json::json!({
            "success": true,
            "data": {
                "onboardingContent": {
                    "toolBarText": "t",
                    "introTitle": "i",
                    "introSubtitle": "s",
                    "cards": [],
                    "cta": { "text": "go" },
                    "cohort": "A",
                    "combination": "x/y",
                    "seenCount": "3",
                    "actionText": "later",
                    "shouldShowOnLandingPage": true
                }
            }
        });

        assert!(serde_json::from_value::<ContentResponse>(json).is_ok());
    }
}
