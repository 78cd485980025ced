//! Quiz engine: a fixed question list walked by exact-match answers.
//!
//! Correct answers advance the index immediately but the next question is
//! only shown after a short countdown, so the feedback stays readable for
//! about a second. Answers submitted during the countdown are dropped.

/// Ticks between a correct answer and showing the next question.
pub const ADVANCE_DELAY_TICKS: u8 = 20;

pub const MSG_CORRECT: &str = "Correct!";
pub const MSG_INCORRECT: &str = "Incorrect.";
pub const MSG_COMPLETE: &str = "Congratulations! Quiz complete.";

/// One prompt with four options, exactly one of them correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "How large is the Sequence Number field in the TCP header?",
        options: ["16 bits", "64 bits", "32 bits", "128 bits"],
        answer: "32 bits",
    },
    QuizQuestion {
        prompt: "What happens when a CLOSED port receives a SYN?",
        options: ["Sends RST", "Drops the packet", "Sends SYN-ACK", "Sends FIN"],
        answer: "Sends RST",
    },
    QuizQuestion {
        prompt: "Which of these scans is known as 'Half-open'?",
        options: ["TCP Connect", "UDP Scan", "XMAS Scan", "SYN Scan"],
        answer: "SYN Scan",
    },
    QuizQuestion {
        prompt: "In ICMP (RFC 792), which Type/Code means 'Port Unreachable'?",
        options: [
            "Type 3, Code 0",
            "Type 3, Code 3",
            "Type 8, Code 0",
            "Type 0, Code 0",
        ],
        answer: "Type 3, Code 3",
    },
    QuizQuestion {
        prompt: "An ACK scan is mainly used to...",
        options: [
            "See if the port is open",
            "Tear down the connection",
            "Map firewall rules (Stateful vs Stateless)",
            "Spoof the source IP",
        ],
        answer: "Map firewall rules (Stateful vs Stateless)",
    },
    QuizQuestion {
        prompt: "Which vulnerability is tracked as CVE-2023-45237?",
        options: [
            "Predictable ISN in UEFI firmware",
            "Kernel buffer overflow",
            "SQL injection",
            "Broken SSL handshake",
        ],
        answer: "Predictable ISN in UEFI firmware",
    },
    QuizQuestion {
        prompt: "Why is UDP scanning usually slower?",
        options: [
            "The protocol is heavyweight",
            "It requires a 3-way handshake",
            "UDP is encrypted",
            "ICMP rate limiting on the target OS",
        ],
        answer: "ICMP rate limiting on the target OS",
    },
    QuizQuestion {
        prompt: "If you send a NULL packet (no flags) to an OPEN port, what happens?",
        options: [
            "Replies with RST",
            "Packet dropped (no response)",
            "Replies with ACK",
            "Replies with SYN",
        ],
        answer: "Packet dropped (no response)",
    },
    QuizQuestion {
        prompt: "How many sequence units (SEQ) does the SYN flag consume?",
        options: [
            "1 logical unit",
            "0 bytes",
            "20 bytes",
            "Depends on the packet size",
        ],
        answer: "1 logical unit",
    },
    QuizQuestion {
        prompt: "What is the minimum TCP header size (no options)?",
        options: ["8 bytes", "40 bytes", "60 bytes", "20 bytes"],
        answer: "20 bytes",
    },
];

/// Feedback shown after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFeedback {
    Correct,
    Incorrect,
}

impl QuizFeedback {
    pub fn text(self) -> &'static str {
        match self {
            QuizFeedback::Correct => MSG_CORRECT,
            QuizFeedback::Incorrect => MSG_INCORRECT,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Nothing started yet, only the start affordance shows.
    #[default]
    Idle,
    Active,
    /// All questions answered, only the restart affordance shows.
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Quiz {
    phase: QuizPhase,
    index: usize,
    feedback: Option<QuizFeedback>,
    advance_in: Option<u8>,
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or restart the session at question 0.
    pub fn start(&mut self) {
        self.phase = QuizPhase::Active;
        self.index = 0;
        self.feedback = None;
        self.advance_in = None;
    }

    /// Submit an answer for the displayed question.
    ///
    /// A match advances the index at once and arms the countdown; a mismatch
    /// leaves the index alone and the question re-answerable. Submissions
    /// while the countdown runs are dropped.
    pub fn answer(&mut self, selected: &str) {
        if self.phase != QuizPhase::Active || self.advance_in.is_some() {
            return;
        }
        let Some(question) = QUESTIONS.get(self.index) else {
            return;
        };
        if selected == question.answer {
            self.feedback = Some(QuizFeedback::Correct);
            self.index += 1;
            self.advance_in = Some(ADVANCE_DELAY_TICKS);
        } else {
            self.feedback = Some(QuizFeedback::Incorrect);
        }
    }

    /// Run the pending-advance countdown.
    ///
    /// When it expires the next question replaces the answered one (clearing
    /// the feedback), or the session completes with the feedback left up.
    pub fn tick(&mut self) {
        let Some(remaining) = self.advance_in.as_mut() else {
            return;
        };
        *remaining -= 1;
        if *remaining == 0 {
            self.advance_in = None;
            if self.index >= QUESTIONS.len() {
                self.phase = QuizPhase::Complete;
            } else {
                self.feedback = None;
            }
        }
    }

    /// The question to display, with its 1-based number.
    ///
    /// While the countdown runs this is still the question just answered;
    /// the index has already moved on.
    pub fn current(&self) -> Option<(usize, &'static QuizQuestion)> {
        if self.phase != QuizPhase::Active {
            return None;
        }
        let shown = if self.advance_in.is_some() {
            self.index - 1
        } else {
            self.index
        };
        QUESTIONS.get(shown).map(|q| (shown + 1, q))
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn feedback(&self) -> Option<QuizFeedback> {
        self.feedback
    }

    pub fn is_advancing(&self) -> bool {
        self.advance_in.is_some()
    }

    pub fn total() -> usize {
        QUESTIONS.len()
    }
}
