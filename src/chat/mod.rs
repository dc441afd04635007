pub mod replies;

use crate::error::ApiError;
use crate::models::channel::ChannelContext;
use crate::models::chat::ChatHistory;
use crate::render::{render, Skeleton};

// ── Intent Categories ─────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    VideoIdeas,
    Growth,
    Seo,
    Monetization,
    Equipment,
    Schedule,
    Thumbnails,
    Engagement,
    Script,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VideoIdeas => "video-ideas",
            Self::Growth => "growth",
            Self::Seo => "seo",
            Self::Monetization => "monetization",
            Self::Equipment => "equipment",
            Self::Schedule => "schedule",
            Self::Thumbnails => "thumbnails",
            Self::Engagement => "engagement",
            Self::Script => "script",
            Self::General => "general",
        }
    }

    fn skeleton(&self) -> Skeleton {
        match self {
            Self::VideoIdeas => replies::video_ideas,
            Self::Growth => replies::growth,
            Self::Seo => replies::seo,
            Self::Monetization => replies::monetization,
            Self::Equipment => replies::equipment,
            Self::Schedule => replies::schedule,
            Self::Thumbnails => replies::thumbnails,
            Self::Engagement => replies::engagement,
            Self::Script => replies::script,
            Self::General => replies::general,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger substrings per category, in priority order. The first category
/// with any trigger contained in the utterance wins; `General` is the
/// fallback and has no row.
///
/// Matching is plain substring containment, so short triggers fire inside
/// longer words ("view" matches "interview", "post" matches "postpone").
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::VideoIdeas,
        &["video idea", "what should i make", "content idea"],
    ),
    (Intent::Growth, &["grow", "subscriber", "view", "analytics"]),
    (Intent::Seo, &["seo", "rank", "search", "optimize"]),
    (Intent::Monetization, &["money", "monetize", "earn", "income"]),
    (
        Intent::Equipment,
        &["equipment", "camera", "microphone", "lighting", "editing"],
    ),
    (Intent::Schedule, &["when", "schedule", "post", "upload"]),
    (Intent::Thumbnails, &["thumbnail", "design", "clickable"]),
    (
        Intent::Engagement,
        &["engage", "community", "comment", "audience"],
    ),
    (Intent::Script, &["script", "structure", "write", "outline"]),
];

// ── Classification ────────────────────────────────────

/// Pick the intent for one utterance. Case-insensitive, first match wins.
pub fn classify(utterance: &str) -> Intent {
    let query = utterance.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| query.contains(t)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::General)
}

/// Canned reply for an intent, personalized with the channel context.
pub fn respond(intent: Intent, ctx: &ChannelContext) -> String {
    render(intent.skeleton(), ctx, None)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub intent: Intent,
    pub message: String,
}

/// Answer the latest user turn. Earlier turns are only checked for shape;
/// they never influence which reply is chosen.
pub fn classify_and_respond(
    history: &ChatHistory,
    ctx: &ChannelContext,
) -> Result<ChatReply, ApiError> {
    let turn = history.latest_user_turn()?;
    let intent = classify(&turn.content);
    log::debug!(
        "chat intent {} selected from {} turn(s)",
        intent,
        history.len()
    );
    Ok(ChatReply {
        intent,
        message: respond(intent, ctx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_lowercase_and_unique() {
        let mut seen = Vec::new();
        for (intent, triggers) in INTENT_RULES {
            assert!(!triggers.is_empty(), "{} has no triggers", intent);
            assert!(!seen.contains(intent), "{} listed twice", intent);
            for t in *triggers {
                assert_eq!(*t, t.to_lowercase());
            }
            seen.push(*intent);
        }
        assert!(!seen.contains(&Intent::General));
    }

    #[test]
    fn test_substring_not_word_match() {
        assert_eq!(classify("my viewpoint on cats"), Intent::Growth);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("Best CAMERA for vlogs?"), Intent::Equipment);
    }
}
