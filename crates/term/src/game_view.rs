//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure, no I/O. Layout, back to front: border, burned cells, ghost, active piece,
//! side panel, then the game-over banner.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Color, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

const BORDER: Style = Style::fg(Rgb::new(200, 200, 200));
const EMPTY: Style = Style::fg(Rgb::new(90, 90, 100)).on(PLAY_BG).dim();
const GHOST: Style = Style::fg(Rgb::new(140, 140, 140)).on(PLAY_BG).dim();
const LABEL: Style = Style::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: Style = Style::fg(Rgb::new(200, 200, 200));
const BANNER: Style = Style::fg(Rgb::new(255, 255, 255)).bold();

/// Panel needs room for the widest label plus a 4-wide preview.
const PANEL_MIN_WIDTH: u16 = 10;
const PANEL_GAP: u16 = 2;

/// Renders the playfield, the side panel and the game-over banner.
pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
    /// Terminal rows per grid cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in common fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the framed board sits in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into `fb`, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::BLANK);

        let frame = self.frame(viewport);
        draw_border(fb, frame);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let (ch, style) = match Color::from_code(code) {
                    Some(color) => ('█', block_style(color)),
                    None => ('·', EMPTY),
                };
                self.paint_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        if snap.game_ended {
            self.draw_panel(fb, snap, viewport, frame);
            draw_banner(fb, frame, "GAME OVER");
            return;
        }

        for (x, y) in snap.ghost_cells() {
            if let Some((cx, cy)) = on_grid(x, y) {
                self.paint_cell(fb, frame, cx, cy, '░', GHOST);
            }
        }
        let active = block_style(snap.active.color);
        for &(x, y) in &snap.active.cells {
            if let Some((cx, cy)) = on_grid(x, y) {
                self.paint_cell(fb, frame, cx, cy, '█', active);
            }
        }

        self.draw_panel(fb, snap, viewport, frame);
    }

    /// Allocating variant of [`render_into`](Self::render_into).
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = GRID_WIDTH as u16 * self.cell_w + 2;
        let h = GRID_HEIGHT as u16 * self.cell_h + 2;
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: Style) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let x = frame.x.saturating_add(frame.w).saturating_add(PANEL_GAP);
        if viewport.width.saturating_sub(x) < PANEL_MIN_WIDTH {
            return;
        }

        let mut y = frame.y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("HIGH", snap.high_score),
        ] {
            fb.text(x, y, label, LABEL);
            fb.number(x, y + 1, value, VALUE);
            y += 3;
        }

        let end = fb.text(x, y, "NEXT", LABEL);
        fb.put(end + 1, y, piece_letter(snap.next.kind), VALUE);

        let preview = block_style(snap.next.color);
        for &(dx, dy) in &snap.next.cells {
            let px = x + dx.max(0) as u16 * 2;
            let py = y + 1 + dy.max(0) as u16;
            fb.fill(px, py, 2, 1, '█', preview);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame) {
    let Frame { x, y, w, h } = frame;
    let (right, bottom) = (x + w - 1, y + h - 1);

    for dx in x + 1..right {
        fb.put(dx, y, '─', BORDER);
        fb.put(dx, bottom, '─', BORDER);
    }
    for dy in y + 1..bottom {
        fb.put(x, dy, '│', BORDER);
        fb.put(right, dy, '│', BORDER);
    }
    fb.put(x, y, '┌', BORDER);
    fb.put(right, y, '┐', BORDER);
    fb.put(x, bottom, '└', BORDER);
    fb.put(right, bottom, '┘', BORDER);
}

fn draw_banner(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let width = text.chars().count() as u16;
    let x = frame.x + frame.w.saturating_sub(width) / 2;
    fb.text(x, frame.y + frame.h / 2, text, BANNER);
}

fn on_grid(x: i32, y: i32) -> Option<(u16, u16)> {
    let x = u16::try_from(x).ok().filter(|&x| usize::from(x) < GRID_WIDTH)?;
    let y = u16::try_from(y).ok().filter(|&y| usize::from(y) < GRID_HEIGHT)?;
    Some((x, y))
}

fn block_style(color: Color) -> Style {
    Style::fg(color_rgb(color)).on(PLAY_BG).bold()
}

fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Red => Rgb::new(220, 80, 80),
    }
}

fn piece_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::I => 'I',
        PieceKind::O => 'O',
        PieceKind::T => 'T',
        PieceKind::J => 'J',
        PieceKind::L => 'L',
        PieceKind::S => 'S',
        PieceKind::Z => 'Z',
    }
}
