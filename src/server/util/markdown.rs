use pulldown_cmark::{html, Event, Options, Parser, Tag};

const WORDS_PER_MINUTE: usize = 200;
const EXCERPT_CHARS: usize = 160;

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Renders post markdown to HTML.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Extracts the readable text of a markdown document, whitespace collapsed.
pub fn plain_text(markdown: &str) -> String {
    let mut text = String::with_capacity(markdown.len());

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(
                Tag::Paragraph
                | Tag::Heading(..)
                | Tag::Item
                | Tag::BlockQuote
                | Tag::CodeBlock(_)
                | Tag::TableCell,
            ) => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Minutes needed to read the post, `ceil(words / 200)` and at least 1.
pub fn reading_time(markdown: &str) -> i32 {
    let words = plain_text(markdown).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as i32
}

/// First 160 characters of the plain text.
pub fn default_excerpt(markdown: &str) -> String {
    plain_text(markdown).chars().take(EXCERPT_CHARS).collect()
}
