//! TCP three-way-handshake walkthrough.
//!
//! A four-step machine (Init → SynSent → SynAckSent → Established) driven by
//! three user actions, with an animated packet indicator travelling between
//! the client and server edges of a track. The step only advances when the
//! packet lands; new actions are dropped while one is in flight.

use rand::Rng;

use crate::tween::Tween;

/// Packet indicator position at the client edge of the track (percent).
pub const TRACK_CLIENT_POS: f64 = 10.0;
/// Packet indicator position at the server edge of the track (percent).
pub const TRACK_SERVER_POS: f64 = 85.0;
/// Ticks for one packet crossing.
pub const PACKET_FLIGHT_TICKS: u32 = 15;
/// The server's fixed initial sequence number.
pub const SERVER_ISN: u32 = 5000;

/// Handshake walkthrough step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandshakeStep {
    #[default]
    Init,
    SynSent,
    SynAckSent,
    Established,
}

/// The three user-triggered packet sends, in protocol order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeAction {
    SendSyn,
    SendSynAck,
    SendAck,
}

impl HandshakeAction {
    pub const ALL: [HandshakeAction; 3] = [
        HandshakeAction::SendSyn,
        HandshakeAction::SendSynAck,
        HandshakeAction::SendAck,
    ];

    /// The step this action is accepted in.
    pub fn source_step(self) -> HandshakeStep {
        match self {
            HandshakeAction::SendSyn => HandshakeStep::Init,
            HandshakeAction::SendSynAck => HandshakeStep::SynSent,
            HandshakeAction::SendAck => HandshakeStep::SynAckSent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandshakeAction::SendSyn => "Send SYN",
            HandshakeAction::SendSynAck => "Send SYN-ACK",
            HandshakeAction::SendAck => "Send ACK",
        }
    }
}

/// Severity of the status banner shown after each packet lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Warning,
    Success,
}

/// Status banner text plus its severity styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// An in-flight packet: the animation and the transition it completes.
#[derive(Debug, Clone, PartialEq)]
struct Flight {
    tween: Tween,
    next: HandshakeStep,
    banner: Banner,
}

/// The handshake walkthrough state.
#[derive(Debug, Clone, PartialEq)]
pub struct Handshake {
    step: HandshakeStep,
    client_isn: u32,
    server_isn: u32,
    packet_label: Option<String>,
    packet_pos: f64,
    flight: Option<Flight>,
    banner: Option<Banner>,
}

impl Handshake {
    pub fn new() -> Self {
        let mut handshake = Self {
            step: HandshakeStep::Init,
            client_isn: 0,
            server_isn: SERVER_ISN,
            packet_label: None,
            packet_pos: TRACK_CLIENT_POS,
            flight: None,
            banner: None,
        };
        handshake.reset();
        handshake
    }

    /// Return to Init from any step: fresh client ISN, packet and banner
    /// hidden, indicator parked at the client edge.
    pub fn reset(&mut self) {
        self.step = HandshakeStep::Init;
        self.client_isn = rand::thread_rng().gen_range(1000..2000);
        self.server_isn = SERVER_ISN;
        self.packet_label = None;
        self.packet_pos = TRACK_CLIENT_POS;
        self.flight = None;
        self.banner = None;
    }

    pub fn step(&self) -> HandshakeStep {
        self.step
    }

    pub fn client_isn(&self) -> u32 {
        self.client_isn
    }

    pub fn server_isn(&self) -> u32 {
        self.server_isn
    }

    pub fn is_animating(&self) -> bool {
        self.flight.is_some()
    }

    /// The single action accepted in the current step, if any.
    ///
    /// Enablement is a pure function of the step. While a packet is in
    /// flight the source action still reads as enabled; `trigger` drops it.
    pub fn enabled_action(&self) -> Option<HandshakeAction> {
        match self.step {
            HandshakeStep::Init => Some(HandshakeAction::SendSyn),
            HandshakeStep::SynSent => Some(HandshakeAction::SendSynAck),
            HandshakeStep::SynAckSent => Some(HandshakeAction::SendAck),
            HandshakeStep::Established => None,
        }
    }

    pub fn is_enabled(&self, action: HandshakeAction) -> bool {
        self.enabled_action() == Some(action)
    }

    /// Launch a packet. Out-of-turn actions and actions during an in-flight
    /// animation are dropped.
    pub fn trigger(&mut self, action: HandshakeAction) {
        if self.is_animating() || !self.is_enabled(action) {
            return;
        }

        let (label, from, to, next, kind, text) = match action {
            HandshakeAction::SendSyn => (
                format!("SYN (Seq={})", self.client_isn),
                TRACK_CLIENT_POS,
                TRACK_SERVER_POS,
                HandshakeStep::SynSent,
                BannerKind::Info,
                "SYN sent. The client sets the ISN.",
            ),
            HandshakeAction::SendSynAck => (
                format!("SYN+ACK / Ack={}", self.client_isn + 1),
                TRACK_SERVER_POS,
                TRACK_CLIENT_POS,
                HandshakeStep::SynAckSent,
                BannerKind::Warning,
                "SYN-ACK received. Server acknowledges Seq+1.",
            ),
            HandshakeAction::SendAck => (
                format!("ACK / Ack={}", self.server_isn + 1),
                TRACK_CLIENT_POS,
                TRACK_SERVER_POS,
                HandshakeStep::Established,
                BannerKind::Success,
                "Connection ESTABLISHED. Handshake complete.",
            ),
        };

        self.packet_label = Some(label);
        self.packet_pos = from;
        self.flight = Some(Flight {
            tween: Tween::new(from, to, PACKET_FLIGHT_TICKS),
            next,
            banner: Banner {
                kind,
                text: text.to_string(),
            },
        });
    }

    /// Advance the in-flight packet one tick. When it lands, the step
    /// transition completes and the banner appears. No-op when idle.
    pub fn tick(&mut self) {
        let Some(flight) = self.flight.as_mut() else {
            return;
        };
        let landed = flight.tween.tick();
        self.packet_pos = flight.tween.value();
        if landed {
            if let Some(flight) = self.flight.take() {
                self.step = flight.next;
                self.banner = Some(flight.banner);
            }
        }
    }

    /// Visible packet label (`None` until the first send after a reset).
    pub fn packet_label(&self) -> Option<&str> {
        self.packet_label.as_deref()
    }

    /// Packet indicator position along the track, in percent.
    pub fn packet_pos(&self) -> f64 {
        self.packet_pos
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }
}

impl Default for Handshake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(handshake: &mut Handshake) {
        for _ in 0..PACKET_FLIGHT_TICKS {
            handshake.tick();
        }
    }

    fn enabled_set(handshake: &Handshake) -> Vec<HandshakeAction> {
        HandshakeAction::ALL
            .into_iter()
            .filter(|a| handshake.is_enabled(*a))
            .collect()
    }

    #[test]
    fn test_enabled_sets_follow_protocol_order() {
        let mut handshake = Handshake::new();
        assert_eq!(enabled_set(&handshake), vec![HandshakeAction::SendSyn]);

        handshake.trigger(HandshakeAction::SendSyn);
        settle(&mut handshake);
        assert_eq!(enabled_set(&handshake), vec![HandshakeAction::SendSynAck]);

        handshake.trigger(HandshakeAction::SendSynAck);
        settle(&mut handshake);
        assert_eq!(enabled_set(&handshake), vec![HandshakeAction::SendAck]);

        handshake.trigger(HandshakeAction::SendAck);
        settle(&mut handshake);
        assert!(enabled_set(&handshake).is_empty());
        assert_eq!(handshake.step(), HandshakeStep::Established);
    }

    #[test]
    fn test_out_of_turn_action_is_dropped() {
        let mut handshake = Handshake::new();
        handshake.trigger(HandshakeAction::SendAck);
        assert_eq!(handshake.step(), HandshakeStep::Init);
        assert!(!handshake.is_animating());
        assert!(handshake.packet_label().is_none());
    }

    #[test]
    fn test_action_during_flight_is_dropped_not_queued() {
        let mut handshake = Handshake::new();
        handshake.trigger(HandshakeAction::SendSyn);
        assert!(handshake.is_animating());

        handshake.tick();
        // Step has not advanced yet, so the same action is still "enabled"
        // but must be refused while the packet is in flight.
        handshake.trigger(HandshakeAction::SendSyn);
        settle(&mut handshake);
        assert_eq!(handshake.step(), HandshakeStep::SynSent);
        assert!(!handshake.is_animating());

        // A single transition happened; the dropped trigger left no trace.
        handshake.tick();
        assert_eq!(handshake.step(), HandshakeStep::SynSent);
    }

    #[test]
    fn test_step_advances_only_when_packet_lands() {
        let mut handshake = Handshake::new();
        handshake.trigger(HandshakeAction::SendSyn);
        for _ in 0..(PACKET_FLIGHT_TICKS - 1) {
            handshake.tick();
            assert_eq!(handshake.step(), HandshakeStep::Init);
            assert!(handshake.banner().is_none());
        }
        handshake.tick();
        assert_eq!(handshake.step(), HandshakeStep::SynSent);
    }

    #[test]
    fn test_packet_travels_between_track_edges() {
        let mut handshake = Handshake::new();
        handshake.trigger(HandshakeAction::SendSyn);
        assert_eq!(handshake.packet_pos(), TRACK_CLIENT_POS);
        settle(&mut handshake);
        assert_eq!(handshake.packet_pos(), TRACK_SERVER_POS);

        handshake.trigger(HandshakeAction::SendSynAck);
        assert_eq!(handshake.packet_pos(), TRACK_SERVER_POS);
        settle(&mut handshake);
        assert_eq!(handshake.packet_pos(), TRACK_CLIENT_POS);
    }

    #[test]
    fn test_packet_labels_use_sequence_numbers() {
        let mut handshake = Handshake::new();
        let isn = handshake.client_isn();

        handshake.trigger(HandshakeAction::SendSyn);
        assert_eq!(
            handshake.packet_label(),
            Some(format!("SYN (Seq={isn})").as_str())
        );
        settle(&mut handshake);

        handshake.trigger(HandshakeAction::SendSynAck);
        assert_eq!(
            handshake.packet_label(),
            Some(format!("SYN+ACK / Ack={}", isn + 1).as_str())
        );
        settle(&mut handshake);

        handshake.trigger(HandshakeAction::SendAck);
        assert_eq!(handshake.packet_label(), Some("ACK / Ack=5001"));
    }

    #[test]
    fn test_banner_kinds_per_step() {
        let mut handshake = Handshake::new();

        handshake.trigger(HandshakeAction::SendSyn);
        settle(&mut handshake);
        let banner = handshake.banner().cloned();
        assert_eq!(banner.map(|b| b.kind), Some(BannerKind::Info));

        handshake.trigger(HandshakeAction::SendSynAck);
        settle(&mut handshake);
        let banner = handshake.banner().cloned();
        assert_eq!(banner.map(|b| b.kind), Some(BannerKind::Warning));

        handshake.trigger(HandshakeAction::SendAck);
        settle(&mut handshake);
        let banner = handshake.banner().cloned();
        assert!(banner
            .map(|b| b.kind == BannerKind::Success
                && b.text == "Connection ESTABLISHED. Handshake complete.")
            .unwrap_or(false));
    }

    #[test]
    fn test_reset_rerandomizes_client_isn_in_range() {
        let mut handshake = Handshake::new();
        for _ in 0..50 {
            handshake.reset();
            let isn = handshake.client_isn();
            assert!((1000..2000).contains(&isn), "ISN out of range: {isn}");
            assert_eq!(handshake.server_isn(), SERVER_ISN);
        }
    }

    #[test]
    fn test_reset_from_any_state_returns_to_init() {
        let mut handshake = Handshake::new();
        handshake.trigger(HandshakeAction::SendSyn);
        settle(&mut handshake);
        handshake.trigger(HandshakeAction::SendSynAck);
        // Reset mid-flight: the pending transition is discarded.
        handshake.reset();
        assert_eq!(handshake.step(), HandshakeStep::Init);
        assert!(!handshake.is_animating());
        assert!(handshake.packet_label().is_none());
        assert!(handshake.banner().is_none());
        assert_eq!(handshake.packet_pos(), TRACK_CLIENT_POS);

        settle(&mut handshake);
        assert_eq!(handshake.step(), HandshakeStep::Init);
    }
}
