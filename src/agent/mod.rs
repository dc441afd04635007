pub mod templates;

use crate::models::channel::ChannelContext;
use crate::render::{render, Skeleton};

// ── Task Types ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    VideoIdeas,
    Title,
    Description,
    Tags,
    Script,
    Thumbnail,
    Other,
}

impl TaskType {
    /// Every task type, in the order they are offered to callers.
    pub const ALL: [TaskType; 7] = [
        TaskType::VideoIdeas,
        TaskType::Title,
        TaskType::Description,
        TaskType::Tags,
        TaskType::Script,
        TaskType::Thumbnail,
        TaskType::Other,
    ];

    /// Unrecognized and empty values land on `Other`; that is a fallback, not an error.
    pub fn parse(s: &str) -> Self {
        match s {
            "video-ideas" => Self::VideoIdeas,
            "title" => Self::Title,
            "description" => Self::Description,
            "tags" => Self::Tags,
            "script" => Self::Script,
            "thumbnail" => Self::Thumbnail,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VideoIdeas => "video-ideas",
            Self::Title => "title",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::Script => "script",
            Self::Thumbnail => "thumbnail",
            Self::Other => "other",
        }
    }

    fn skeleton(&self) -> Skeleton {
        match self {
            Self::VideoIdeas => templates::video_ideas,
            Self::Title => templates::title,
            Self::Description => templates::description,
            Self::Tags => templates::tags,
            Self::Script => templates::script,
            Self::Thumbnail => templates::thumbnail,
            Self::Other => templates::other,
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Public API ────────────────────────────────────────

/// Render the canned block for a task. Total: every task type yields non-empty text.
pub fn dispatch(task: TaskType, ctx: &ChannelContext, extra: Option<&str>) -> String {
    render(task.skeleton(), ctx, extra)
}

/// Natural-language summary of what a task asks for. Never part of the result;
/// kept for request logs.
pub fn brief(task: TaskType, ctx: &ChannelContext, extra: Option<&str>) -> String {
    let channel_info = if ctx.has_name() && ctx.has_topic() {
        format!(
            "for the YouTube channel \"{}\" which focuses on {}",
            ctx.channel(),
            ctx.topic()
        )
    } else {
        "for a YouTube channel".to_string()
    };
    let extra = crate::models::channel::non_blank(extra);
    let topic_note = |label: &str| {
        extra
            .map(|text| format!(" {}: {}.", label, text))
            .unwrap_or_default()
    };

    match task {
        TaskType::VideoIdeas => format!(
            "Generate 5 creative and engaging video ideas {}.{} Make each idea specific, unique, and likely to attract viewers.",
            channel_info,
            topic_note("Additional context")
        ),
        TaskType::Title => format!(
            "Create 3 compelling YouTube video titles {}.{} Make them attention-grabbing, SEO-friendly, and under 60 characters.",
            channel_info,
            topic_note("Video topic")
        ),
        TaskType::Description => format!(
            "Write a complete YouTube video description {}.{} Include: an engaging intro, timestamps outline, relevant hashtags, and call-to-action.",
            channel_info,
            topic_note("Video topic")
        ),
        TaskType::Tags => format!(
            "Suggest 15-20 relevant tags {}.{} Include a mix of broad and specific tags for optimal discoverability.",
            channel_info,
            topic_note("Video topic")
        ),
        TaskType::Script => format!(
            "Write a complete video script {}.{} Include: hook (first 15 seconds), main content with clear sections, and strong call-to-action.",
            channel_info,
            topic_note("Video topic")
        ),
        TaskType::Thumbnail => format!(
            "Suggest 3 creative thumbnail concepts {}.{} Describe the visual elements, text overlay, colors, and emotions to convey.",
            channel_info,
            topic_note("Video topic")
        ),
        TaskType::Other => match extra {
            Some(text) => format!("Help with YouTube content creation {}. {}", channel_info, text),
            None => format!("Help with YouTube content creation {}.", channel_info),
        },
    }
}
