use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each frame of the comparison.
/// Renderers consume the list sequentially — each command carries all the
/// data it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally with a border and a text label.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        label: Option<String>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
    },

    /// Begin a logical group (e.g. one track's panel). Renderers may use
    /// this for batching or layer separation.
    BeginGroup {
        id: String,
        label: Option<String>,
    },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_round_trip_through_json() {
        let cmds = vec![
            RenderCommand::BeginGroup {
                id: "fast".into(),
                label: Some("Flashblocks".into()),
            },
            RenderCommand::DrawRect {
                rect: Rect::new(1.0, 2.0, 3.0, 4.0),
                color: ThemeToken::EiffelPrimary,
                border_color: Some(ThemeToken::Border),
                label: None,
            },
            RenderCommand::DrawText {
                position: Point::new(5.0, 6.0),
                text: "2.0s".into(),
                color: ThemeToken::TextSecondary,
                align: TextAlign::Right,
            },
            RenderCommand::EndGroup,
        ];

        let json = serde_json::to_string(&cmds).unwrap();
        let back: Vec<RenderCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), cmds.len());
        match &back[1] {
            RenderCommand::DrawRect { rect, color, .. } => {
                assert_eq!(*rect, Rect::new(1.0, 2.0, 3.0, 4.0));
                assert_eq!(*color, ThemeToken::EiffelPrimary);
            }
            other => panic!("expected DrawRect, got {other:?}"),
        }
    }
}
