//! Simulated port scan: target validation and the scripted progress run.
//!
//! The "scan" is a fixed script, not a probe: progress climbs by a constant
//! step per tick and the status line changes at hard-coded milestones. None
//! of it reflects real scan timing.

use std::sync::LazyLock;

use regex::Regex;

/// Target used when the input field is left empty.
pub const DEFAULT_TARGET: &str = "192.168.1.1";
/// Progress gained per tick.
pub const PROGRESS_STEP: u8 = 2;

/// Literal shown when the target fails validation.
pub const MSG_INVALID_TARGET: &str = "Error: invalid IP address (e.g. 192.168.1.1).";
/// Milestone text at progress 30.
pub const MSG_AWAITING: &str = "Awaiting responses (RST/ACK)...";
/// Milestone text at progress 70.
pub const MSG_ANALYZING: &str = "Analyzing response times...";
/// Final text once the script stops.
pub const MSG_COMPLETE: &str = "Scan complete. Filtered ports detected.";

/// Dotted-quad address with every octet in 0-255.
static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("Invalid address regex")
});

/// Check a dotted-quad target address.
pub fn is_valid_target(addr: &str) -> bool {
    ADDRESS_REGEX.is_match(addr)
}

/// Resolve the free-text input to a scan target.
///
/// Empty input (after trimming) falls back to [`DEFAULT_TARGET`]; anything
/// else must be a valid dotted quad or the scan must not start.
pub fn resolve_target(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Some(DEFAULT_TARGET.to_string())
    } else if is_valid_target(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// The four probing techniques the page compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanTechnique {
    #[default]
    TcpSyn,
    Udp,
    NullStealth,
    Ack,
}

impl ScanTechnique {
    pub const ALL: [ScanTechnique; 4] = [
        ScanTechnique::TcpSyn,
        ScanTechnique::Udp,
        ScanTechnique::NullStealth,
        ScanTechnique::Ack,
    ];

    /// nmap-style flag echoed in the command line and status messages.
    pub fn flag(self) -> &'static str {
        match self {
            ScanTechnique::TcpSyn => "-sS",
            ScanTechnique::Udp => "-sU",
            ScanTechnique::NullStealth => "-sN",
            ScanTechnique::Ack => "-sA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScanTechnique::TcpSyn => "TCP SYN",
            ScanTechnique::Udp => "UDP Scan",
            ScanTechnique::NullStealth => "NULL/Stealth",
            ScanTechnique::Ack => "ACK Scan",
        }
    }

    /// The next technique in the selector cycle.
    pub fn next(self) -> Self {
        match self {
            ScanTechnique::TcpSyn => ScanTechnique::Udp,
            ScanTechnique::Udp => ScanTechnique::NullStealth,
            ScanTechnique::NullStealth => ScanTechnique::Ack,
            ScanTechnique::Ack => ScanTechnique::TcpSyn,
        }
    }
}

/// One scripted scan, from submit to completion.
///
/// Starting a new run replaces the old one wholesale, which is how "cancel
/// any previous timer" is expressed in the tick model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRun {
    technique: ScanTechnique,
    target: String,
    progress: u8,
    running: bool,
    status: String,
}

impl ScanRun {
    /// Begin the script: progress 0, start message showing.
    pub fn start(technique: ScanTechnique, target: impl Into<String>) -> Self {
        Self {
            technique,
            target: target.into(),
            progress: 0,
            running: true,
            status: format!("Starting {}... Sending probes...", technique.flag()),
        }
    }

    /// The echoed command line.
    pub fn command(&self) -> String {
        format!("nmap {} -T3 {}", self.technique.flag(), self.target)
    }

    /// Advance the script one tick.
    ///
    /// Milestone texts land exactly at 30 and 70; the tick after progress
    /// reaches 100 stops the run and shows the completion text. Finished
    /// runs stay inert until replaced. Returns the status text newly
    /// applied this tick, so a display that was overwritten (for example
    /// by a validation error) only refreshes at the next milestone.
    pub fn tick(&mut self) -> Option<&'static str> {
        if !self.running {
            return None;
        }
        if self.progress >= 100 {
            self.running = false;
            self.status = MSG_COMPLETE.to_string();
            return Some(MSG_COMPLETE);
        }
        self.progress += PROGRESS_STEP;
        let milestone = match self.progress {
            30 => Some(MSG_AWAITING),
            70 => Some(MSG_ANALYZING),
            _ => None,
        };
        if let Some(text) = milestone {
            self.status = text.to_string();
        }
        milestone
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn technique(&self) -> ScanTechnique {
        self.technique
    }
}
