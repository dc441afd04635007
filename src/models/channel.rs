use serde::{Deserialize, Serialize};

pub const DEFAULT_CHANNEL_NAME: &str = "Your Channel";
pub const DEFAULT_CHANNEL_TOPIC: &str = "your niche";
pub const DEFAULT_HANDLE: &str = "yourchannel";

/// The creator-supplied name/topic pair used to personalize generated text.
/// Immutable for the lifetime of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelContext {
    pub name: Option<String>,
    pub topic: Option<String>,
}

impl ChannelContext {
    pub fn new(name: Option<String>, topic: Option<String>) -> Self {
        ChannelContext { name, topic }
    }

    /// Channel name, or "Your Channel" when missing or blank.
    pub fn channel(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or(DEFAULT_CHANNEL_NAME)
    }

    /// Channel topic, or "your niche" when missing or blank.
    pub fn topic(&self) -> &str {
        non_blank(self.topic.as_deref()).unwrap_or(DEFAULT_CHANNEL_TOPIC)
    }

    pub fn has_name(&self) -> bool {
        non_blank(self.name.as_deref()).is_some()
    }

    pub fn has_topic(&self) -> bool {
        non_blank(self.topic.as_deref()).is_some()
    }

    /// Social handle: lower-cased channel name with every whitespace char removed.
    pub fn handle(&self) -> String {
        let handle: String = self
            .name
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if handle.is_empty() {
            DEFAULT_HANDLE.to_string()
        } else {
            handle
        }
    }

    /// Topic hashtag body (no leading '#'), whitespace stripped.
    pub fn hashtag(&self) -> String {
        self.topic().chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// Returns the value only if it has something besides whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_and_blank() {
        let missing = ChannelContext::default();
        assert_eq!(missing.channel(), "Your Channel");
        assert_eq!(missing.topic(), "your niche");

        let blank = ChannelContext::new(Some("   ".into()), Some(String::new()));
        assert_eq!(blank.channel(), "Your Channel");
        assert_eq!(blank.topic(), "your niche");
        assert!(!blank.has_name());
        assert!(!blank.has_topic());
    }

    #[test]
    fn test_handle_strips_whitespace_and_lowercases() {
        let ctx = ChannelContext::new(Some("Tech Review\tDaily".into()), None);
        assert_eq!(ctx.handle(), "techreviewdaily");
    }

    #[test]
    fn test_handle_defaults_when_name_empty() {
        assert_eq!(ChannelContext::default().handle(), "yourchannel");
        let spaces = ChannelContext::new(Some("  \n ".into()), None);
        assert_eq!(spaces.handle(), "yourchannel");
    }

    #[test]
    fn test_hashtag_uses_default_topic() {
        assert_eq!(ChannelContext::default().hashtag(), "yourniche");
        let ctx = ChannelContext::new(None, Some("home cooking".into()));
        assert_eq!(ctx.hashtag(), "homecooking");
    }
}
