//! One-shot generation templates, one per task type.
//!
//! Each function is a [`Skeleton`](crate::render::Skeleton): a fixed text
//! block with the channel slots interpolated at designated points.

use crate::models::channel::ChannelContext;
use crate::render::{optional_block, Slots};

pub fn video_ideas(s: &Slots<'_>, _ctx: &ChannelContext) -> String {
    let (channel, topic) = (s.channel, s.topic);
    let note = optional_block(s.extra, |input| {
        format!(
            "\n💡 Based on your input: \"{input}\"\n\
             Consider adding personal stories and behind-the-scenes content to make these more relatable!"
        )
    });
    format!(
        r#"📹 Video Ideas for {channel}:

1. "The Ultimate {topic} Guide for Beginners in 2024"
   - Comprehensive overview perfect for newcomers

2. "{topic}: 5 Mistakes Everyone Makes (And How to Avoid Them)"
   - Common pitfalls with practical solutions

3. "I Tried {topic} for 30 Days - Here's What Happened"
   - Personal journey format with transformation story

4. "{topic} vs [Alternative]: Which is Actually Better?"
   - Comparison content with data-driven insights

5. "The Secret to {topic} That Nobody Talks About"
   - Unique perspective on overlooked aspects{note}"#
    )
}

pub fn title(s: &Slots<'_>, _ctx: &ChannelContext) -> String {
    let (channel, topic) = (s.channel, s.topic);
    let focus = optional_block(s.extra, |input| format!("🎬 Video focus: \"{input}\""));
    format!(
        r#"🎯 Compelling Titles for {channel}:

1. "This {topic} Trick Changed Everything (You Need to Try It)"
2. "{topic} in 2024: What They Don't Tell You"
3. "I Spent $1000 on {topic} - Was It Worth It?"{focus}

✨ Pro tips:
- Use numbers and brackets for higher CTR
- Create curiosity without clickbait
- Include keywords early in the title"#
    )
}

pub fn description(s: &Slots<'_>, ctx: &ChannelContext) -> String {
    let (channel, topic) = (s.channel, s.topic);
    let opening = match s.extra {
        Some(input) => input.to_string(),
        None => format!("Master {topic} with this comprehensive guide!"),
    };
    let handle = ctx.handle();
    let hashtag = ctx.hashtag();
    format!(
        r#"📝 Video Description for {channel}:

{opening}

In this video, we dive deep into everything you need to know about {topic}. Whether you're a beginner or looking to level up your skills, this video has something for everyone!

⏱️ TIMESTAMPS:
0:00 - Introduction
0:45 - Getting Started
3:20 - Main Content
8:15 - Pro Tips & Tricks
11:30 - Common Mistakes to Avoid
14:00 - Conclusion & Next Steps

🔗 RESOURCES:
[Add your links here]

📱 CONNECT WITH ME:
Instagram: @{handle}
Twitter: @{handle}

💬 Let me know in the comments what you'd like to see next!

🔔 Don't forget to SUBSCRIBE and hit the notification bell so you never miss an upload!

#{hashtag} #YouTube #ContentCreator #Tutorial"#
    )
}

/// Tag tiers: topic prefixed/suffixed with common search modifiers.
const PRIMARY_TAGS: &[(&str, &str)] = &[
    ("", ""),
    ("", " tutorial"),
    ("", " guide"),
    ("", " tips"),
    ("", " 2024"),
];
const SECONDARY_TAGS: &[(&str, &str)] = &[
    ("how to ", ""),
    ("", " for beginners"),
    ("", " explained"),
    ("best ", ""),
    ("", " review"),
];
const LONG_TAIL_TAGS: &[(&str, &str)] = &[
    ("", " step by step"),
    ("", " ultimate guide"),
    ("learn ", ""),
    ("", " mistakes"),
    ("", " secrets"),
];
const GENERAL_TAGS: &[&str] = &[
    "tutorial",
    "howto",
    "tips and tricks",
    "educational",
    "content creator",
];

fn tag_tier(topic: &str, variants: &[(&str, &str)]) -> String {
    variants
        .iter()
        .map(|(prefix, suffix)| format!("• {prefix}{topic}{suffix}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tags(s: &Slots<'_>, _ctx: &ChannelContext) -> String {
    let (channel, topic) = (s.channel, s.topic);
    let primary = tag_tier(topic, PRIMARY_TAGS);
    let secondary = tag_tier(topic, SECONDARY_TAGS);
    let long_tail = tag_tier(topic, LONG_TAIL_TAGS);
    let general = GENERAL_TAGS
        .iter()
        .map(|t| format!("• {t}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"🏷️ Recommended Tags for {channel}:

Primary Tags (High Priority):
{primary}

Secondary Tags:
{secondary}

Long-tail Tags:
{long_tail}

General Tags:
{general}

💡 Use 15-20 tags total, mixing these based on your specific video content!"#
    )
}

pub fn script(s: &Slots<'_>, _ctx: &ChannelContext) -> String {
    let (channel, topic) = (s.channel, s.topic);
    let hook = match s.extra {
        Some(input) => input.to_string(),
        None => format!("everything you know about {topic} is wrong"),
    };
    format!(
        r#"🎬 Video Script for {channel}:

[HOOK - First 15 Seconds]
"What if I told you that {hook}? In the next [X] minutes, I'm going to show you exactly how to {topic} the right way. Let's dive in!"

[INTRODUCTION - 15-45 Seconds]
"Hey everyone, welcome back to {channel}! If you're new here, I'm [Your Name] and I help people master {topic}. Today's video is special because [unique value proposition].

Before we start, make sure to SUBSCRIBE and hit that notification bell - I post new videos every [schedule]."

[MAIN CONTENT - Section 1]
"First, let's talk about [Topic Point 1]...

[Explain with examples, stories, or demonstrations]

[MAIN CONTENT - Section 2]
"Now, here's where it gets interesting. [Topic Point 2]...

[Continue with valuable content]

[MAIN CONTENT - Section 3]
"And finally, the most important thing: [Topic Point 3]...

[Deliver key insights]

[COMMON MISTAKES]
"Before we wrap up, let me quickly share the top 3 mistakes I see people make with {topic}..."

[CONCLUSION & CTA]
"So there you have it! If you found this helpful, give this video a thumbs up and let me know in the comments what you'd like to see next.

Don't forget to check out [related video/playlist] and I'll see you in the next one!"

[END SCREEN]
[Point to subscription button and other videos]"#
    )
}

pub fn thumbnail(s: &Slots<'_>, _ctx: &ChannelContext) -> String {
    let channel = s.channel;
    let headline = s.extra_or("GAME CHANGER");
    let shout = s.topic.to_uppercase();
    format!(
        r#"🖼️ Thumbnail Concepts for {channel}:

CONCEPT 1: "Before/After Split"
• Left side: "before" state (darker, problem)
• Right side: "after" state (brighter, solution)
• Bold text: "{headline}"
• Your face showing excitement on the right side
• Colors: Contrasting (red/blue or orange/purple)

CONCEPT 2: "Dramatic Close-Up"
• Close-up of your face with exaggerated expression (shocked/excited)
• Main subject in background (slightly blurred)
• Large text overlay: "THIS {shout}..."
• Arrow pointing to subject
• High contrast colors with drop shadows

CONCEPT 3: "Visual Comparison"
• Three panels showing progression or comparison
• Numbered circles (1, 2, 3)
• Your face in bottom corner
• Bold headline across top
• Bright background (yellow/blue gradient)

🎨 Design Tips:
• Use 3-4 colors maximum
• Text should be readable on mobile
• 40% of thumbnail = face (if showing face)
• High contrast for visibility
• Test thumbnail at small size before finalizing

📱 Recommended Tools:
• Canva (easiest)
• Photoshop (professional)
• Photopea (free alternative)"#
    )
}

pub fn other(s: &Slots<'_>, _ctx: &ChannelContext) -> String {
    let topic = s.topic;
    format!(
        r#"I'm your YouTube Channel Agent, ready to help with {topic}!

I can assist you with:
✅ Video ideas and brainstorming
✅ Title and description optimization
✅ Script writing
✅ Tag suggestions
✅ Thumbnail concepts
✅ Content strategy

What would you like help with today?"#
    )
}
