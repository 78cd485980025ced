//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::Page;
use netlab_core::handshake::HandshakeAction;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (animations, scan script, clock)
    Tick,

    /// Quit the application (key press or signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation & Theme
    // ─────────────────────────────────────────────────────────
    /// Switch to the next page tab
    NextPage,
    /// Switch to the previous page tab
    PreviousPage,
    /// Jump straight to a page
    GoToPage(Page),
    /// Flip between light and dark mode
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Handshake Page
    // ─────────────────────────────────────────────────────────
    /// Fire one of the three handshake steps
    HandshakeTrigger(HandshakeAction),
    /// Reset the handshake to its initial state
    HandshakeReset,

    // ─────────────────────────────────────────────────────────
    // Scan Page
    // ─────────────────────────────────────────────────────────
    /// Enter target-editing mode
    ScanBeginEdit,
    /// Leave target-editing mode (keeps the buffer)
    ScanEndEdit,
    /// Replace the target input buffer
    ScanInput { text: String },
    /// Cycle the selected scan technique
    ScanCycleTechnique,
    /// Validate the target and start the scripted scan
    ScanSubmit,

    // ─────────────────────────────────────────────────────────
    // Quiz Page
    // ─────────────────────────────────────────────────────────
    /// Start or restart the quiz session
    QuizStart,
    /// Move the option cursor up
    QuizCursorUp,
    /// Move the option cursor down
    QuizCursorDown,
    /// Submit the option under the cursor
    QuizAnswer,

    // ─────────────────────────────────────────────────────────
    // Calculator Page
    // ─────────────────────────────────────────────────────────
    /// Replace the payload input buffer
    CalcInput { text: String },
    /// Compute payload + header overhead
    CalcCompute,

    // ─────────────────────────────────────────────────────────
    // Charts Page
    // ─────────────────────────────────────────────────────────
    /// Move focus to the other chart
    ChartsFocusNext,
    /// Move focus to the other chart (reverse)
    ChartsFocusPrevious,
    /// Cycle the focused chart's kind (pie/doughnut, column/bar)
    ChartsCycleKind,

    // ─────────────────────────────────────────────────────────
    // Campus Map Page
    // ─────────────────────────────────────────────────────────
    /// Move the author-row cursor up
    MapCursorUp,
    /// Move the author-row cursor down
    MapCursorDown,
    /// Fly to the department and open its popup
    MapFlyToAuthor,
    /// Close the open popup
    MapClosePopup,
}
