//! Approach view: banner, numbered step cards, complexity, pattern.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::text::wrap;
use super::Theme;
use crate::content::{Approach, Step};

const INDENT: &str = "    ";
const CARD_INDENT: &str = "        ";

pub const BANNER: &str = "How to approach it";

/// Lines for an [`Approach`]. Pure function of its input.
pub fn approach_lines(approach: &Approach, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let text_width = usize::from(width).saturating_sub(CARD_INDENT.len());
    let mut lines = vec![Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("▸ {}", BANNER), theme.header),
    ])];

    for (i, step) in approach.steps.iter().enumerate() {
        lines.push(Line::from(""));
        step_card(&mut lines, i + 1, step, theme, text_width);
    }

    if let Some(ref complexity) = approach.complexity {
        let label = Style::default().add_modifier(Modifier::BOLD);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("Complexity", theme.header),
            Span::raw("  "),
            Span::styled("Time: ", label),
            Span::raw(complexity.time.clone()),
            Span::raw("  "),
            Span::styled("Space: ", label),
            Span::raw(complexity.space.clone()),
        ]));
    }

    if let Some(ref pattern) = approach.pattern {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("Pattern", theme.header),
            Span::raw("  "),
            Span::styled(
                format!("★ {}", pattern),
                Style::default().fg(theme.highlight).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines
}

fn step_card(lines: &mut Vec<Line<'static>>, number: usize, step: &Step, theme: &Theme, width: usize) {
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!("{}. {}", number, step.title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    for row in wrap(&step.description, width) {
        lines.push(Line::from(vec![Span::raw(CARD_INDENT), Span::raw(row)]));
    }

    for detail in &step.details {
        for (j, row) in wrap(detail, width.saturating_sub(2)).into_iter().enumerate() {
            let bullet = if j == 0 { "• " } else { "  " };
            lines.push(Line::from(vec![
                Span::raw(CARD_INDENT),
                Span::raw(bullet),
                Span::raw(row),
            ]));
        }
    }

    if !step.keywords.is_empty() {
        let mut spans = vec![Span::raw(CARD_INDENT)];
        for (j, keyword) in step.keywords.iter().enumerate() {
            if j > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", keyword), theme.keyword));
        }
        lines.push(Line::from(spans));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ComplexityInfo;
    use crate::ui::line_text;

    fn texts(approach: &Approach) -> Vec<String> {
        approach_lines(approach, &Theme::dark(), 80).iter().map(line_text).collect()
    }

    fn step(title: &str) -> Step {
        Step {
            title: title.into(),
            description: format!("{} description", title),
            details: vec![],
            keywords: vec![],
        }
    }

    #[test]
    fn test_renders_in_order() {
        let approach = Approach {
            steps: vec![
                Step {
                    details: vec!["first detail".into()],
                    keywords: vec!["dfs".into(), "stack".into()],
                    ..step("Walk")
                },
                step("Return"),
            ],
            pattern: Some("Depth-first search".into()),
            complexity: Some(ComplexityInfo {
                time: "O(n)".into(),
                space: "O(h)".into(),
            }),
        };

        assert_eq!(
            texts(&approach),
            vec![
                "    ▸ How to approach it",
                "",
                "    1. Walk",
                "        Walk description",
                "        • first detail",
                "         dfs   stack ",
                "",
                "    2. Return",
                "        Return description",
                "",
                "    Complexity  Time: O(n)  Space: O(h)",
                "",
                "    Pattern  ★ Depth-first search",
            ]
        );
    }

    #[test]
    fn test_empty_steps_render_only_banner() {
        let approach = Approach {
            steps: vec![],
            pattern: None,
            complexity: None,
        };
        assert_eq!(texts(&approach), vec!["    ▸ How to approach it"]);
    }

    #[test]
    fn test_optional_blocks_are_independent() {
        let approach = Approach {
            steps: vec![step("Only")],
            pattern: Some("Greedy".into()),
            complexity: None,
        };
        let lines = texts(&approach);
        assert!(lines.iter().any(|l| l.contains("Greedy")));
        assert!(!lines.iter().any(|l| l.contains("Complexity")));
    }
}
