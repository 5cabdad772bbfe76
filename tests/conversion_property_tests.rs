//! Property tests: both converters are total, and the documented
//! guarantees hold for generated inputs.

use blogmark::{html_to_markdown, markdown_to_html, preview};
use proptest::prelude::*;

proptest! {
    /// The renderer accepts anything without panicking.
    #[test]
    fn render_is_total(input in ".{0,400}") {
        let _ = markdown_to_html(&input);
    }

    /// The reverse converter accepts anything without panicking.
    #[test]
    fn reverse_is_total(input in ".{0,400}") {
        let _ = html_to_markdown(&input);
    }

    /// Rendering then reverting leaves no tag in the output, because the
    /// renderer only emits well-formed tags and the final strip removes
    /// every remaining one.
    #[test]
    fn no_tags_survive_a_round_trip(input in "[a-zA-Z0-9 *_#`\\[\\]()\n-]{0,300}") {
        let back = html_to_markdown(&markdown_to_html(&input));
        prop_assert!(!back.contains('<') || input.contains('<'));
        prop_assert!(!back.contains("</"));
    }

    /// Syntax-free lines always come back paragraph-wrapped and otherwise
    /// untouched.
    #[test]
    fn syntax_free_lines_become_paragraphs(lines in prop::collection::vec("[a-zA-Z][a-zA-Z ,]{0,40}[a-zA-Z]", 1..6)) {
        let input = lines.join("\n");
        let html = markdown_to_html(&input);
        for line in &lines {
            prop_assert!(html.contains(&format!("<p>{line}</p>")), "missing paragraph for {line:?} in {html:?}");
        }
    }

    /// Rendering is idempotent on syntax-free input.
    #[test]
    fn render_is_idempotent_on_plain_text(input in "[a-zA-Z ,.\n]{0,200}") {
        let once = markdown_to_html(&input);
        prop_assert_eq!(&markdown_to_html(&once), &once);
    }

    /// A preview never exceeds its word budget (the ellipsis rides on the
    /// last word, so the token count stays at the limit).
    #[test]
    fn preview_respects_word_budget(input in ".{0,400}", limit in 1usize..40) {
        let out = preview(&input, limit);
        prop_assert!(out.split_whitespace().count() <= limit);
    }
}
