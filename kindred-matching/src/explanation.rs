//! Prose explanations for scored matches.

use kindred_scorer::FactorBreakdown;

/// Points above which the personality factor is called out.
const PERSONALITY_POINTS: f32 = 30.0;
/// Points above which the interests factor is called out.
const INTEREST_POINTS: f32 = 20.0;
/// Points above which the geography factor is called out.
const GEOGRAPHY_POINTS: f32 = 15.0;

const PERSONALITY_SENTENCE: &str =
    "You have complementary personalities that could create great chemistry";
const INTEREST_SENTENCE: &str = "You share several interests and hobbies";
const GEOGRAPHY_SENTENCE: &str = "You're in the same area, making it easy to meet up";
const FALLBACK_SENTENCE: &str = "You might discover new things about each other";

/// Render a short prose explanation from a factor breakdown.
///
/// Thresholds assume the default factor weights; with rescaled weights the
/// sentences simply fire for proportionally stronger factors. When no
/// factor stands out, a neutral fallback sentence is returned instead of
/// an empty string.
///
/// # Examples
/// ```
/// use kindred_matching::explain;
/// use kindred_scorer::FactorBreakdown;
///
/// let breakdown = FactorBreakdown {
///     personality: 34.0,
///     interests: 12.0,
///     geography: 20.0,
///     demographics: 7.5,
///     activity: 5.0,
/// };
/// let text = explain(breakdown);
/// assert!(text.contains("complementary personalities"));
/// assert!(text.ends_with('.'));
/// ```
#[must_use]
pub fn explain(breakdown: FactorBreakdown) -> String {
    let mut sentences: Vec<&str> = Vec::new();
    if breakdown.personality > PERSONALITY_POINTS {
        sentences.push(PERSONALITY_SENTENCE);
    }
    if breakdown.interests > INTEREST_POINTS {
        sentences.push(INTEREST_SENTENCE);
    }
    if breakdown.geography > GEOGRAPHY_POINTS {
        sentences.push(GEOGRAPHY_SENTENCE);
    }
    if sentences.is_empty() {
        sentences.push(FALLBACK_SENTENCE);
    }

    let mut text = sentences.join(". ");
    text.push('.');
    text
}
