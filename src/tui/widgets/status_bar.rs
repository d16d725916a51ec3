//! One-line status bar summarizing the draft being edited.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Position;

/// Data passed to the status bar widget; decoupled from the draft itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The selected position.
    pub position: Position,
    /// Number of selected skills.
    pub skill_count: usize,
    /// Failing fields from the last validation pass.
    pub error_count: usize,
    /// Whether a snapshot has been submitted this session.
    pub submitted: bool,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - `Developer  2 skills`
/// - `Designer  1 skill  3 errors` (errors in Red)
/// - `Manager  2 skills  SUBMITTED` (SUBMITTED in Green)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let red = Style::default().fg(Color::Red);
    let green = Style::default().fg(Color::Green);

    let plural = if ctx.skill_count == 1 { "" } else { "s" };
    let mut spans = vec![
        Span::styled(ctx.position.to_string(), cyan),
        Span::styled(format!("  {} skill{plural}", ctx.skill_count), cyan),
    ];

    if ctx.error_count > 0 {
        let plural = if ctx.error_count == 1 { "" } else { "s" };
        spans.push(Span::styled(
            format!("  {} error{plural}", ctx.error_count),
            red,
        ));
    }
    if ctx.submitted {
        spans.push(Span::styled("  SUBMITTED", green));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_position_and_skills() {
        let ctx = StatusBarContext {
            position: Position::Developer,
            skill_count: 2,
            ..Default::default()
        };
        let output = render_status_bar(&ctx, 50);
        assert!(output.contains("Developer"), "should show position");
        assert!(output.contains("2 skills"), "should show skill count");
        assert!(!output.contains("error"), "no errors yet");
    }

    #[test]
    fn renders_unset_position() {
        let output = render_status_bar(&StatusBarContext::default(), 50);
        assert!(output.contains("(not selected)"));
        assert!(output.contains("0 skills"));
    }

    #[test]
    fn renders_singular_counts() {
        let ctx = StatusBarContext {
            position: Position::Designer,
            skill_count: 1,
            error_count: 1,
            submitted: false,
        };
        let output = render_status_bar(&ctx, 50);
        assert!(output.contains("1 skill "), "singular skill");
        assert!(output.contains("1 error "), "singular error");
    }

    #[test]
    fn renders_submitted_flag() {
        let ctx = StatusBarContext {
            position: Position::Manager,
            skill_count: 3,
            error_count: 0,
            submitted: true,
        };
        let output = render_status_bar(&ctx, 50);
        assert!(output.contains("SUBMITTED"));
    }
}
