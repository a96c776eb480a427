//! Terminal drawing of a composed frame: play area, HUD and overlays.
//!
//! World coordinates are scaled onto the play area cell grid. A cell shows
//! whatever world object overlaps it, with the flyer drawn over pipes and
//! pipes over the background.

use crate::core::config::FieldSize;
use crate::core::geometry::{rectangles_overlap, Rect as WorldRect};
use crate::managers::ScoreSummary;
use crate::ui::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar,
};
use crate::ui::renderer::GameplayView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Horizontal period of the cloud pattern, in world units.
const CLOUD_PERIOD: f64 = 260.0;

/// Cloud bands as (top, bottom, length along the period).
const CLOUD_BANDS: [(f64, f64, f64); 2] = [(60.0, 90.0, 90.0), (140.0, 160.0, 60.0)];

const CONTROLS: &[(&str, &str)] = &[
    ("[Space]", "Flap"),
    ("[P]", "Pause"),
    ("[M]", "Mute"),
    ("[Esc]", "Quit"),
];

/// Owned copy of a gameplay view, kept until the frame is presented.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub field: FieldSize,
    pub flyer: WorldRect,
    pub flyer_velocity: f64,
    pub flyer_rotation: f64,
    pub pipes: Vec<[WorldRect; 2]>,
    pub score: u32,
    pub best: u32,
    pub muted: bool,
    pub debug: bool,
}

impl SceneSnapshot {
    pub fn from_view(view: &GameplayView<'_>) -> Self {
        Self {
            field: view.field,
            flyer: view.flyer.bounds(),
            flyer_velocity: view.flyer.velocity,
            flyer_rotation: view.flyer.rotation,
            pipes: view.obstacles.iter().map(|o| o.bounds()).collect(),
            score: view.score,
            best: view.best,
            muted: view.muted,
            debug: view.debug,
        }
    }
}

/// Modal drawn over the play area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    Menu { best: u32 },
    GameOver(ScoreSummary),
    Paused,
}

/// Layers collected between `clear` and `present`.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub field: FieldSize,
    pub cloud_offset: f64,
    pub scene: Option<SceneSnapshot>,
    pub overlay: Overlay,
}

impl Composition {
    pub fn new(field: FieldSize, cloud_offset: f64) -> Self {
        Self {
            field,
            cloud_offset,
            scene: None,
            overlay: Overlay::None,
        }
    }
}

/// What a single play area cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Cloud,
    Pipe,
    /// Gap between pipe segments, only marked in debug mode
    Gap,
    Flyer,
}

/// Classify the play area cell at (`col`, `row`) on a `cols` x `rows` grid.
pub fn cell_at(composition: &Composition, col: u16, row: u16, cols: u16, rows: u16) -> CellKind {
    if cols == 0 || rows == 0 {
        return CellKind::Sky;
    }
    let field = composition
        .scene
        .as_ref()
        .map(|s| s.field)
        .unwrap_or(composition.field);
    let cell_w = field.width / cols as f64;
    let cell_h = field.height / rows as f64;
    let cell = WorldRect::new(col as f64 * cell_w, row as f64 * cell_h, cell_w, cell_h);

    if let Some(scene) = &composition.scene {
        if rectangles_overlap(&cell, &scene.flyer) {
            return CellKind::Flyer;
        }
        for [top, bottom] in &scene.pipes {
            if rectangles_overlap(&cell, top) || rectangles_overlap(&cell, bottom) {
                return CellKind::Pipe;
            }
            if scene.debug && cell.x < top.right() && cell.right() > top.x {
                return CellKind::Gap;
            }
        }
    }

    let center_y = cell.y + cell_h / 2.0;
    let phase = (cell.center_x() + composition.cloud_offset).rem_euclid(CLOUD_PERIOD);
    let in_cloud = CLOUD_BANDS
        .iter()
        .any(|&(top, bottom, length)| center_y >= top && center_y < bottom && phase < length);
    if in_cloud {
        CellKind::Cloud
    } else {
        CellKind::Sky
    }
}

fn flyer_glyph(rotation: f64) -> &'static str {
    if rotation < -0.2 {
        "▲"
    } else if rotation > 0.2 {
        "▼"
    } else {
        "►"
    }
}

/// Draw the whole composition into `area`.
pub fn render_composition(frame: &mut Frame, area: Rect, composition: &Composition) {
    let layout = create_game_layout(frame, area, " Flappy Pigeon ", Color::Cyan);

    render_play_area(frame, layout.content, composition);
    render_status_bar_content(frame, layout.status_bar, composition);
    render_info_panel(frame, layout.info_panel, composition);

    match composition.overlay {
        Overlay::None => {}
        Overlay::Menu { best } => render_menu(frame, layout.content, best),
        Overlay::GameOver(summary) => render_game_over(frame, layout.content, &summary),
        Overlay::Paused => render_modal(
            frame,
            layout.content,
            Color::Yellow,
            "PAUSED",
            vec![Line::from(Span::styled(
                "[P] Resume",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, composition: &Composition) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let flyer = composition
        .scene
        .as_ref()
        .map(|s| flyer_glyph(s.flyer_rotation))
        .unwrap_or("►");

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let span = match cell_at(composition, col, row, area.width, area.height) {
                CellKind::Sky => Span::raw(" "),
                CellKind::Cloud => Span::styled("░", Style::default().fg(Color::White)),
                CellKind::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                CellKind::Gap => Span::styled("·", Style::default().fg(Color::DarkGray)),
                CellKind::Flyer => Span::styled(
                    flyer,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, composition: &Composition) {
    let score = composition.scene.as_ref().map(|s| s.score).unwrap_or(0);
    let (text, color) = match composition.overlay {
        Overlay::Menu { .. } => ("Press Space to start!".to_string(), Color::Yellow),
        Overlay::Paused => ("Paused".to_string(), Color::Yellow),
        Overlay::GameOver(_) => ("Crashed! Press Space".to_string(), Color::Red),
        Overlay::None => (format!("Score: {}", score), Color::Green),
    };
    render_status_bar(frame, area, &text, color, CONTROLS);
}

fn render_info_panel(frame: &mut Frame, area: Rect, composition: &Composition) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from("")];

    if let Some(scene) = &composition.scene {
        lines.push(Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                scene.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(scene.best.to_string(), Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Sound: ", label),
            if scene.muted {
                Span::styled("off", Style::default().fg(Color::Red))
            } else {
                Span::styled("on", Style::default().fg(Color::Green))
            },
        ]));

        if scene.debug {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" Debug", label)));
            lines.push(Line::from(format!(" vel: {:+.2}", scene.flyer_velocity)));
            lines.push(Line::from(format!(" rot: {:+.2}", scene.flyer_rotation)));
            lines.push(Line::from(format!(" y:   {:.0}", scene.flyer.y)));
            lines.push(Line::from(format!(" pipes: {}", scene.pipes.len())));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_menu(frame: &mut Frame, area: Rect, best: u32) {
    let mut body = vec![
        Line::from(Span::styled(
            "Press Space, Up or Enter to flap",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];
    if best > 0 {
        body.push(Line::from(Span::styled(
            format!("Best: {}", best),
            Style::default().fg(Color::Yellow),
        )));
    }
    render_modal(frame, area, Color::Cyan, "FLAPPY PIGEON", body);
}

fn render_game_over(frame: &mut Frame, area: Rect, summary: &ScoreSummary) {
    let mut body = vec![
        Line::from(Span::styled(
            format!("Score: {}", summary.current),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Best: {}", summary.best),
            Style::default().fg(Color::Cyan),
        )),
    ];
    if summary.is_new_best {
        body.push(Line::from(Span::styled(
            "New best!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        "[Space] Menu",
        Style::default().fg(Color::DarkGray),
    )));
    render_modal(frame, area, Color::Red, "CRASH!", body);
}
