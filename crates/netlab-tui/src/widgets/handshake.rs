//! Three-way handshake walkthrough page.
//!
//! Draws the control row, the client/server track with the travelling
//! segment indicator, the connection state line and the status banner.

use netlab_core::handshake::{
    Handshake, HandshakeAction, HandshakeStep, TRACK_CLIENT_POS, TRACK_SERVER_POS,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::theme::{styles, Palette};

const EXPLAINER: &str = "Walk through TCP connection setup one segment at a time. \
    Each control is accepted only in protocol order; the connection state advances \
    when the segment lands on the far side.";

pub struct HandshakePage<'a> {
    state: &'a Handshake,
    palette: &'a Palette,
}

impl<'a> HandshakePage<'a> {
    pub fn new(state: &'a Handshake, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    /// TCP state name for the current walkthrough step.
    fn step_name(&self) -> &'static str {
        match self.state.step() {
            HandshakeStep::Init => "CLOSED",
            HandshakeStep::SynSent => "SYN-SENT",
            HandshakeStep::SynAckSent => "SYN-RECEIVED",
            HandshakeStep::Established => "ESTABLISHED",
        }
    }

    fn actions_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, action) in HandshakeAction::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if self.state.is_enabled(action) && !self.state.is_animating() {
                styles::keybinding(self.palette)
            } else {
                styles::text_muted(self.palette)
            };
            spans.push(Span::styled(format!("[{}] {}", i + 1, action.label()), style));
        }
        spans.push(Span::raw("   "));
        spans.push(Span::styled("[r] Reset", styles::keybinding(self.palette)));
        Line::from(spans)
    }

    fn render_track(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 3 {
            return;
        }
        let track_x = |pct: f64| -> u16 {
            let span = f64::from(area.width - 1);
            area.x + ((pct / 100.0) * span).round() as u16
        };
        let client_x = track_x(TRACK_CLIENT_POS);
        let server_x = track_x(TRACK_SERVER_POS);

        // Endpoint labels and their sequence numbers.
        let endpoint = styles::text_primary(self.palette).add_modifier(Modifier::BOLD);
        set_centered(buf, area, client_x, area.y, "Client", endpoint);
        set_centered(buf, area, server_x, area.y, "Server", endpoint);

        let isn = styles::text_muted(self.palette);
        let client_isn = format!("ISN {}", self.state.client_isn());
        let server_isn = format!("ISN {}", self.state.server_isn());
        set_centered(buf, area, client_x, area.y + 1, &client_isn, isn);
        set_centered(buf, area, server_x, area.y + 1, &server_isn, isn);

        // The wire between the two endpoints.
        let track_y = area.y + 2;
        let wire = styles::border_inactive(self.palette);
        for x in client_x..=server_x {
            if let Some(cell) = buf.cell_mut((x, track_y)) {
                cell.set_char('─').set_style(wire);
            }
        }
        for (x, ch) in [(client_x, '┠'), (server_x, '┨')] {
            if let Some(cell) = buf.cell_mut((x, track_y)) {
                cell.set_char(ch).set_style(wire);
            }
        }

        // Segment indicator plus its label underneath.
        if let Some(label) = self.state.packet_label() {
            let packet_x = track_x(self.state.packet_pos());
            if let Some(cell) = buf.cell_mut((packet_x, track_y)) {
                cell.set_char('●').set_style(styles::accent_bold(self.palette));
            }
            if area.height > 3 {
                set_centered(
                    buf,
                    area,
                    packet_x,
                    track_y + 1,
                    label,
                    styles::accent(self.palette),
                );
            }
        }
    }

    fn step_line(&self) -> Line<'static> {
        let name_style = match self.state.step() {
            HandshakeStep::Established => {
                styles::status_green(self.palette).add_modifier(Modifier::BOLD)
            }
            _ => styles::text_secondary(self.palette),
        };
        Line::from(vec![
            Span::styled("State: ", styles::text_muted(self.palette)),
            Span::styled(self.step_name(), name_style),
        ])
    }
}

impl Widget for HandshakePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, "Three-Way Handshake", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 20 || inner.height < 9 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1), // controls
            Constraint::Length(1),
            Constraint::Length(4), // track
            Constraint::Length(1), // state
            Constraint::Length(1),
            Constraint::Length(1), // banner
            Constraint::Min(0),    // explainer
        ])
        .split(inner);

        buf.set_line(rows[0].x, rows[0].y, &self.actions_line(), rows[0].width);
        self.render_track(rows[2], buf);
        buf.set_line(rows[3].x, rows[3].y, &self.step_line(), rows[3].width);

        if let Some(banner) = self.state.banner() {
            let line = Line::styled(
                banner.text.clone(),
                styles::banner_style(self.palette, banner.kind),
            );
            buf.set_line(rows[5].x, rows[5].y, &line, rows[5].width);
        }

        if rows[6].height > 0 {
            Paragraph::new(EXPLAINER)
                .style(styles::text_muted(self.palette))
                .wrap(Wrap { trim: true })
                .render(rows[6], buf);
        }
    }
}

/// Write `text` centered on `center_x`, clamped to stay inside `area`.
fn set_centered(buf: &mut Buffer, area: Rect, center_x: u16, y: u16, text: &str, style: Style) {
    let width = (text.len() as u16).min(area.width);
    let half = width / 2;
    let x = center_x
        .saturating_sub(half)
        .clamp(area.x, area.right().saturating_sub(width));
    let line = Line::styled(text.to_string(), style);
    buf.set_line(x, y, &line, width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlab_core::handshake::PACKET_FLIGHT_TICKS;
    use netlab_core::theme::ThemeMode;

    fn render(state: &Handshake) -> String {
        let area = Rect::new(0, 0, 80, 18);
        let mut buf = Buffer::empty(area);
        HandshakePage::new(state, Palette::for_mode(ThemeMode::Light)).render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn settle(handshake: &mut Handshake) {
        for _ in 0..PACKET_FLIGHT_TICKS {
            handshake.tick();
        }
    }

    #[test]
    fn test_initial_render_shows_controls_and_endpoints() {
        let handshake = Handshake::new();
        let content = render(&handshake);
        assert!(content.contains("Send SYN"));
        assert!(content.contains("Send SYN-ACK"));
        assert!(content.contains("Send ACK"));
        assert!(content.contains("Reset"));
        assert!(content.contains("Client"));
        assert!(content.contains("Server"));
        assert!(content.contains("ISN 5000"));
        assert!(content.contains("CLOSED"));
        assert!(!content.contains("SYN sent"));
    }

    #[test]
    fn test_in_flight_segment_shows_its_label() {
        let mut handshake = Handshake::new();
        let isn = handshake.client_isn();
        handshake.trigger(HandshakeAction::SendSyn);
        handshake.tick();

        let content = render(&handshake);
        assert!(content.contains(&format!("SYN (Seq={isn})")));
        assert!(content.contains("●"));
    }

    #[test]
    fn test_completed_walkthrough_shows_established_banner() {
        let mut handshake = Handshake::new();
        for action in HandshakeAction::ALL {
            handshake.trigger(action);
            settle(&mut handshake);
        }

        let content = render(&handshake);
        assert!(content.contains("ESTABLISHED"));
        assert!(content.contains("Connection ESTABLISHED. Handshake complete."));
    }

    #[test]
    fn test_tiny_area_renders_without_panic() {
        let handshake = Handshake::new();
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        HandshakePage::new(&handshake, Palette::for_mode(ThemeMode::Dark)).render(area, &mut buf);
    }
}
