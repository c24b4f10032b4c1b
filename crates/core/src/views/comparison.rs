//! The side-by-side comparison view.
//!
//! Composes the picker row, the two racing panels (one per track), the
//! static real-world summary, and the footer into one command list per
//! frame. Layout is in logical units against the viewport; the renderer
//! maps those to cells or pixels.

use flashblocks_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::catalog::BuildingId;
use crate::engine::{ConstructionEngine, Track};
use crate::summary;

const PICKER_H: f64 = 3.0;
const CAPTION_H: f64 = 1.0;
const PROGRESS_H: f64 = 1.0;
const SUMMARY_H: f64 = 6.0;
const FOOTER_H: f64 = 1.0;
const PANEL_GAP: f64 = 2.0;

const FOOTER_TEXT: &str = "Built by Navigate - the data marketplace for AI Agents built on Base";

/// Render one frame of the comparison.
pub fn render_comparison(engine: &ConstructionEngine, viewport: &Viewport) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(128);

    let title_y = 1.0;
    commands.push(RenderCommand::DrawText {
        position: Point::new(viewport.width / 2.0, title_y),
        text: "Flashblocks vs Blocks".to_string(),
        color: ThemeToken::TextPrimary,
        align: TextAlign::Center,
    });

    picker_row(engine.building(), viewport, title_y + 1.0, &mut commands);

    let panels_y = title_y + 1.0 + PICKER_H;
    let panels_h =
        (viewport.height - panels_y - SUMMARY_H - FOOTER_H).max(CAPTION_H + PROGRESS_H + 4.0);
    let panel_w = (viewport.width - PANEL_GAP) / 2.0;

    track_panel(
        engine,
        Track::Fast,
        "Flashblocks",
        Rect::new(0.0, panels_y, panel_w, panels_h),
        &mut commands,
    );
    track_panel(
        engine,
        Track::Slow,
        "Traditional Blocks",
        Rect::new(panel_w + PANEL_GAP, panels_y, panel_w, panels_h),
        &mut commands,
    );

    summary_panel(
        engine,
        Rect::new(0.0, panels_y + panels_h, viewport.width, SUMMARY_H),
        &mut commands,
    );

    commands.push(RenderCommand::DrawText {
        position: Point::new(viewport.width / 2.0, viewport.height - FOOTER_H),
        text: FOOTER_TEXT.to_string(),
        color: ThemeToken::FooterText,
        align: TextAlign::Center,
    });

    commands
}

/// One selectable chip per catalog building, the active one highlighted.
fn picker_row(selected: BuildingId, viewport: &Viewport, y: f64, commands: &mut Vec<RenderCommand>) {
    commands.push(RenderCommand::BeginGroup {
        id: "picker".to_string(),
        label: None,
    });

    let chip_w = viewport.width / BuildingId::ALL.len() as f64;
    for (i, id) in BuildingId::ALL.into_iter().enumerate() {
        let spec = id.spec();
        let border = if id == selected {
            ThemeToken::SelectionHighlight
        } else {
            ThemeToken::Border
        };
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(i as f64 * chip_w, y, chip_w - 1.0, PICKER_H - 1.0),
            color: ThemeToken::PanelBackground,
            border_color: Some(border),
            label: Some(format!("{} [{}]", spec.name, i + 1)),
        });
    }

    commands.push(RenderCommand::EndGroup);
}

/// One track's panel: sky, building illustration, progress bar with the
/// step-function timer readout, and the caption.
fn track_panel(
    engine: &ConstructionEngine,
    track: Track,
    caption: &str,
    area: Rect,
    commands: &mut Vec<RenderCommand>,
) {
    let id = match track {
        Track::Fast => "fast",
        Track::Slow => "slow",
    };
    commands.push(RenderCommand::BeginGroup {
        id: id.to_string(),
        label: Some(caption.to_string()),
    });

    let scene = Rect::new(
        area.x,
        area.y,
        area.w,
        area.h - PROGRESS_H - CAPTION_H,
    );
    commands.push(RenderCommand::DrawRect {
        rect: scene,
        color: ThemeToken::Sky,
        border_color: Some(ThemeToken::Border),
        label: None,
    });

    let inset = Rect::new(
        scene.x + 2.0,
        scene.y + 1.0,
        scene.w - 4.0,
        scene.h - 2.0,
    );
    commands.extend(render_building_for(engine, track, inset));

    progress_bar(engine, track, Rect::new(area.x, scene.bottom(), area.w, PROGRESS_H), commands);

    commands.push(RenderCommand::DrawText {
        position: Point::new(area.center_x(), scene.bottom() + PROGRESS_H),
        text: caption.to_string(),
        color: ThemeToken::TextPrimary,
        align: TextAlign::Center,
    });

    commands.push(RenderCommand::EndGroup);
}

fn render_building_for(engine: &ConstructionEngine, track: Track, area: Rect) -> Vec<RenderCommand> {
    super::building::render_building(engine.building(), engine.floors(track), area)
}

/// Progress bar filled by `progress_percent`, with the elapsed readout at
/// its right edge.
fn progress_bar(
    engine: &ConstructionEngine,
    track: Track,
    area: Rect,
    commands: &mut Vec<RenderCommand>,
) {
    let label_w = 7.0;
    let bar_w = (area.w - label_w).max(1.0);

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(area.x, area.y, bar_w, area.h),
        color: ThemeToken::ProgressBackground,
        border_color: None,
        label: None,
    });

    let fill_w = bar_w * engine.progress_percent(track) / 100.0;
    if fill_w > 0.0 {
        let fill = match track {
            Track::Fast => ThemeToken::FastTrackFill,
            Track::Slow => ThemeToken::SlowTrackFill,
        };
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(area.x, area.y, fill_w, area.h),
            color: fill,
            border_color: None,
            label: None,
        });
    }

    commands.push(RenderCommand::DrawText {
        position: Point::new(area.x + area.w, area.y),
        text: engine.elapsed_label(track),
        color: ThemeToken::TextSecondary,
        align: TextAlign::Right,
    });
}

/// The real-world panel. Pure catalog arithmetic: it states the 10× fact
/// whatever the animation is doing.
fn summary_panel(engine: &ConstructionEngine, area: Rect, commands: &mut Vec<RenderCommand>) {
    let spec = engine.spec();
    let cmp = summary::compare(spec);

    commands.push(RenderCommand::BeginGroup {
        id: "summary".to_string(),
        label: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(area.x, area.y, area.w, area.h),
        color: ThemeToken::PanelBackground,
        border_color: Some(ThemeToken::Border),
        label: None,
    });

    let cx = area.center_x();
    let lines = [
        (
            "Real-World Construction Comparison".to_string(),
            ThemeToken::TextPrimary,
        ),
        (
            format!(
                "With Flashblocks it would have only taken {} to build",
                cmp.flashblocks
            ),
            ThemeToken::TextSecondary,
        ),
        (
            format!("The {} took {} to build", spec.name, cmp.traditional),
            ThemeToken::TextSecondary,
        ),
        (
            "That's a 10x improvement in speed! Each task that takes 2 seconds \
             with Traditional Blocks takes only 200ms with Flashblocks"
                .to_string(),
            ThemeToken::TextMuted,
        ),
    ];
    for (i, (text, color)) in lines.into_iter().enumerate() {
        commands.push(RenderCommand::DrawText {
            position: Point::new(cx, area.y + 1.0 + i as f64),
            text,
            color,
            align: TextAlign::Center,
        });
    }

    commands.push(RenderCommand::EndGroup);
}
