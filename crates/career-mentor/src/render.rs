//! Terminal rendering of the conversation.

use std::fmt::Write as _;

use career_mentor_core::WARNING_PREFIX;
use career_mentor_core::quick_questions::QuickQuestion;
use career_mentor_core::transcript::{ChatTurn, Role};
use owo_colors::OwoColorize;

const BAR_CHAR: &str = "▎";
const INPUT_HINT: &str = "Type your career question, /history to review \
                          the chat, /reset to clear it, /quit to leave.";

/// Renders the page header.
pub fn render_banner() -> String {
    format!(
        "{}\n{}\n",
        "🧑‍💼 Career Mentor AI Bot".bright_white().bold(),
        "Get professional career guidance instantly!".dimmed()
    )
}

/// Renders the numbered list of canned questions and the input hints.
pub fn render_quick_questions(quick_questions: &[QuickQuestion]) -> String {
    let mut output = format!("{}\n", "Quick Questions".bold());
    for (idx, quick_question) in quick_questions.iter().enumerate() {
        let shortcut = format!("/{}", idx + 1);
        // Writing into a `String` never fails.
        writeln!(
            output,
            "  {} {}",
            shortcut.bright_green(),
            quick_question.question
        )
        .ok();
    }
    writeln!(output, "{}", INPUT_HINT.dimmed()).ok();
    output
}

/// Renders a single turn as one labelled line.
pub fn render_turn(turn: &ChatTurn) -> String {
    match turn.role() {
        Role::User => format!(
            "{}{} {}",
            BAR_CHAR.bright_blue(),
            "You:".bold(),
            turn.content()
        ),
        Role::Assistant if turn.content().starts_with(WARNING_PREFIX) => {
            format!(
                "{}{} {}",
                BAR_CHAR.bright_yellow(),
                "Mentor:".bold(),
                turn.content().yellow()
            )
        }
        Role::Assistant => format!(
            "{}{} {}",
            BAR_CHAR.bright_cyan(),
            "Mentor:".bold(),
            turn.content().bright_white()
        ),
    }
}

/// Renders every turn of the transcript, oldest first.
pub fn render_transcript(turns: &[ChatTurn]) -> String {
    turns
        .iter()
        .map(render_turn)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use career_mentor_core::quick_questions::QUICK_QUESTIONS;

    use super::*;

    #[test]
    fn test_render_turns() {
        let user = render_turn(&ChatTurn::user("How can I improve my resume?"));
        assert!(user.contains("You:"));
        assert!(user.contains("How can I improve my resume?"));

        let mentor = render_turn(&ChatTurn::assistant("Add metrics."));
        assert!(mentor.contains("Mentor:"));
        assert!(mentor.contains("Add metrics."));
    }

    #[test]
    fn test_render_warning_turn() {
        let turn = ChatTurn::assistant("⚠️ API Error: model loading");
        let rendered = render_turn(&turn);
        assert!(rendered.contains("Mentor:"));
        assert!(rendered.contains("API Error: model loading"));
        assert!(rendered.contains("\x1b[33m"));

        let plain = render_turn(&ChatTurn::assistant("API Error: none"));
        assert!(!plain.contains("\x1b[33m"));
    }

    #[test]
    fn test_render_quick_questions() {
        let rendered = render_quick_questions(&QUICK_QUESTIONS);
        for (idx, quick_question) in QUICK_QUESTIONS.iter().enumerate() {
            assert!(rendered.contains(&format!("/{}", idx + 1)));
            assert!(rendered.contains(quick_question.question));
        }
    }

    #[test]
    fn test_render_transcript() {
        assert_eq!(render_transcript(&[]), "");
        let rendered = render_transcript(&[
            ChatTurn::user("Hi"),
            ChatTurn::assistant("Hello"),
        ]);
        assert_eq!(rendered.lines().count(), 2);
        let you = rendered.find("You:").unwrap();
        let mentor = rendered.find("Mentor:").unwrap();
        assert!(you < mentor);
    }
}
