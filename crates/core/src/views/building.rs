//! The three building illustrations.
//!
//! Each routine is a pure function from (building, completed floors, area)
//! to render commands, drawing finished floors bottom-up. They share one
//! contract and differ only in silhouette: the Burj's tapering tiers, the
//! Eiffel Tower's latticed sweep, the Empire State's setbacks.

use flashblocks_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::catalog::{BuildingId, BuildingSpec};

/// Fraction of the area height reserved above the roof for crane and spire.
const HEADROOM: f64 = 0.12;
/// Ground strip height in logical units.
const GROUND_H: f64 = 1.0;

/// Render `building` with `completed_floors` finished, inside `area`.
///
/// `completed_floors` beyond the building's total is clamped; the engine
/// already bounds it, but the contract tolerates any value.
pub fn render_building(
    building: BuildingId,
    completed_floors: u32,
    area: Rect,
) -> Vec<RenderCommand> {
    let spec = building.spec();
    let floors = completed_floors.min(spec.floors);

    let mut commands = Vec::with_capacity(floors as usize + 8);
    commands.push(RenderCommand::BeginGroup {
        id: building.key().to_string(),
        label: Some(spec.name.to_string()),
    });

    // Ground line the construction rises from.
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(area.x, area.bottom() - GROUND_H, area.w, GROUND_H),
        color: ThemeToken::Ground,
        border_color: None,
        label: None,
    });

    // Nominal height scales the drawing so the three buildings keep their
    // relative stature; it plays no part in timing.
    let tallest = BuildingId::ALL
        .iter()
        .map(|id| id.spec().height)
        .fold(f64::MIN, f64::max);
    let built = (area.h * (1.0 - HEADROOM) - GROUND_H) * (spec.height / tallest);
    let floor_h = built / f64::from(spec.floors);
    let base_y = area.bottom() - GROUND_H;

    for floor in 0..floors {
        let frac = f64::from(floor) / f64::from(spec.floors);
        let w = area.w * width_at(building, frac);
        let rect = Rect::new(
            area.center_x() - w / 2.0,
            base_y - f64::from(floor + 1) * floor_h,
            w,
            floor_h,
        );
        commands.push(RenderCommand::DrawRect {
            rect,
            color: facade_color(spec, floor),
            border_color: None,
            label: None,
        });
    }

    let roof_y = base_y - f64::from(floors) * floor_h;
    if floors > 0 {
        dress(building, spec, floors, roof_y, area, &mut commands);
    }

    if floors < spec.floors {
        // Scaffold platform across the working floor, crane above it.
        let frac = f64::from(floors) / f64::from(spec.floors);
        let w = area.w * width_at(building, frac) + 2.0;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(area.center_x() - w / 2.0, roof_y),
            to: Point::new(area.center_x() + w / 2.0, roof_y),
            color: ThemeToken::Scaffold,
        });
        crane(roof_y, area, &mut commands);
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Silhouette: width of the facade (as a fraction of the area width) at a
/// given height fraction up the building.
fn width_at(building: BuildingId, frac: f64) -> f64 {
    match building {
        // Three stepped tiers narrowing toward the spire.
        BuildingId::BurjKhalifa => {
            if frac < 0.35 {
                0.62
            } else if frac < 0.7 {
                0.42
            } else {
                0.24
            }
        }
        // Smooth concave sweep from a wide base to the mast.
        BuildingId::EiffelTower => {
            let taper = (1.0 - frac).powi(2);
            0.12 + 0.78 * taper
        }
        // Broad base, one major setback, narrow crown.
        BuildingId::EmpireState => {
            if frac < 0.25 {
                0.7
            } else if frac < 0.85 {
                0.5
            } else {
                0.3
            }
        }
    }
}

/// Facade color for one floor. Glass buildings alternate bands of glazing;
/// the others accent every fifth floor.
fn facade_color(spec: &BuildingSpec, floor: u32) -> ThemeToken {
    if let Some(glass) = spec.glass {
        if floor % 3 == 1 {
            return glass;
        }
    }
    if floor % 5 == 4 {
        spec.accent
    } else {
        spec.primary
    }
}

/// Building-specific trim above the topmost completed floor: the Burj and
/// Empire State get their masts once topped out, the Eiffel Tower its
/// cross-braced legs throughout.
fn dress(
    building: BuildingId,
    spec: &BuildingSpec,
    floors: u32,
    roof_y: f64,
    area: Rect,
    commands: &mut Vec<RenderCommand>,
) {
    let topped_out = floors == spec.floors;
    let cx = area.center_x();

    match building {
        BuildingId::BurjKhalifa | BuildingId::EmpireState => {
            if topped_out {
                commands.push(RenderCommand::DrawLine {
                    from: Point::new(cx, roof_y),
                    to: Point::new(cx, (roof_y - area.h * 0.08).max(area.y)),
                    color: spec.accent,
                });
            }
        }
        BuildingId::EiffelTower => {
            // Legs splaying from the current roofline to the base corners.
            let base_w = area.w * width_at(building, 0.0);
            let base_y = area.bottom() - GROUND_H;
            for side in [-1.0, 1.0] {
                commands.push(RenderCommand::DrawLine {
                    from: Point::new(cx, roof_y),
                    to: Point::new(cx + side * base_w / 2.0, base_y),
                    color: spec.accent,
                });
            }
            if topped_out {
                commands.push(RenderCommand::DrawText {
                    position: Point::new(cx, (roof_y - 1.0).max(area.y)),
                    text: "▲".to_string(),
                    color: spec.accent,
                    align: TextAlign::Center,
                });
            }
        }
    }
}

/// Tower crane perched above the roofline while floors remain.
fn crane(roof_y: f64, area: Rect, commands: &mut Vec<RenderCommand>) {
    let mast_x = area.center_x() + area.w * 0.28;
    let jib_y = (roof_y - area.h * 0.06).max(area.y);
    commands.push(RenderCommand::DrawLine {
        from: Point::new(mast_x, roof_y),
        to: Point::new(mast_x, jib_y),
        color: ThemeToken::Crane,
    });
    commands.push(RenderCommand::DrawLine {
        from: Point::new(mast_x - area.w * 0.3, jib_y),
        to: Point::new(mast_x + area.w * 0.1, jib_y),
        color: ThemeToken::Crane,
    });
}
