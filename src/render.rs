use crate::models::channel::{non_blank, ChannelContext};

/// Interpolation points available to every template, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots<'a> {
    pub channel: &'a str,
    pub topic: &'a str,
    /// Creator-supplied extra text. `None` when absent or blank, so
    /// templates can drop the sentences that depend on it.
    pub extra: Option<&'a str>,
    pub has_topic: bool,
}

impl<'a> Slots<'a> {
    pub fn new(ctx: &'a ChannelContext, extra: Option<&'a str>) -> Self {
        Slots {
            channel: ctx.channel(),
            topic: ctx.topic(),
            extra: non_blank(extra),
            has_topic: ctx.has_topic(),
        }
    }

    /// Extra input, or the given fallback text.
    pub fn extra_or(&self, fallback: &'a str) -> &'a str {
        self.extra.unwrap_or(fallback)
    }
}

/// A fixed text skeleton: a pure function of the interpolation slots.
/// `ctx` is passed alongside for the derived strings (handles, hashtags).
pub type Skeleton = fn(&Slots<'_>, &ChannelContext) -> String;

/// Renders a skeleton against a channel context and optional extra input.
/// Deterministic: no clock, no randomness, no I/O.
pub fn render(skeleton: Skeleton, ctx: &ChannelContext, extra: Option<&str>) -> String {
    let slots = Slots::new(ctx, extra);
    skeleton(&slots, ctx)
}

/// Appends `block` after a blank line when `extra` is present.
pub fn optional_block(extra: Option<&str>, block: impl FnOnce(&str) -> String) -> String {
    match extra {
        Some(text) => format!("\n\n{}", block(text)),
        None => String::new(),
    }
}
