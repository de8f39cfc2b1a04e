use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Plain-text teaser for a note card: the first block of body text,
/// headings skipped, whitespace collapsed, cut to `max_chars`.
pub fn note_preview(content: &str, max_chars: usize) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut text = String::new();
    let mut heading_depth = 0usize;
    let mut in_block = false;

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::Heading { .. }) => heading_depth += 1,
            Event::End(TagEnd::Heading(_)) => heading_depth = heading_depth.saturating_sub(1),
            Event::Start(Tag::Paragraph | Tag::Item | Tag::CodeBlock(_)) => in_block = true,
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::CodeBlock) => {
                in_block = false;
                if !text.trim().is_empty() {
                    break;
                }
            }
            Event::Text(t) | Event::Code(t) if heading_depth == 0 && in_block => {
                text.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if heading_depth == 0 && in_block => {
                text.push(' ');
            }
            _ => {}
        }
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, max_chars)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out = out.trim_end().to_string();
    out.push('…');
    out
}
