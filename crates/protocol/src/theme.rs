use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Sky,
    Ground,
    PanelBackground,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    // Per-building facade palettes
    BurjPrimary,
    BurjAccent,
    BurjGlass,
    EiffelPrimary,
    EiffelAccent,
    EmpirePrimary,
    EmpireAccent,

    // Construction dressing
    Scaffold,
    Crane,

    // Progress indicators
    ProgressBackground,
    FastTrackFill,
    SlowTrackFill,

    SelectionHighlight,
    FooterText,
}
