//! Presentation: turns a [`Snapshot`] into colored quads and a caption.
//!
//! Pixel art is laid out on a 32 × 32 grid per tile and scaled to the
//! configured tile size. Nothing here mutates game state.

use crate::engine::Color;
use crate::entity::{Npc, PlayerState};
use crate::game::Snapshot;
use crate::geometry::{Direction, Position};
use crate::grid::ObstacleGrid;
use crate::phase::Phase;
use crate::renderer::Quad;

/// Art units per tile edge.
const ART: f32 = 32.0;

// ── Palette ─────────────────────────────────────────────────────────────────
const GRASS_LIGHT: Color = Color::rgb8(0x6d, 0xb3, 0x3f);
const GRASS_DARK:  Color = Color::rgb8(0x5a, 0x9c, 0x32);
const GRASS_TUFT:  Color = Color::rgb8(0x7e, 0xc8, 0x50);
const ROAD:        Color = Color::rgb8(0xc9, 0xa8, 0x7c);
const WOOD:        Color = Color::rgb8(0x8b, 0x6f, 0x47);
const WALL:        Color = Color::rgb8(0xd4, 0xa5, 0x74);
const ROOF:        Color = Color::rgb8(0x8b, 0x45, 0x13);
const WINDOW:      Color = Color::rgb8(0x4a, 0x9e, 0xff);
const DOOR:        Color = Color::rgb8(0x65, 0x43, 0x21);
const LEAVES:      Color = Color::rgb8(0x2d, 0x50, 0x16);
const LEAVES_LIT:  Color = Color::rgb8(0x3d, 0x6e, 0x1f);
const ROCK:        Color = Color::rgb8(0x80, 0x80, 0x80);
const ROCK_LIT:    Color = Color::rgb8(0xa0, 0xa0, 0xa0);
const SHADOW:      Color = Color([0.0, 0.0, 0.0, 0.3]);
const SKIN:        Color = Color::rgb8(0xff, 0xdb, 0xac);
const HERO_BODY:   Color = Color::rgb8(0xe6, 0x39, 0x46);
const HERO_CAPE:   Color = Color::rgb8(0xc1, 0x12, 0x1f);
const HAIR:        Color = Color::rgb8(0x8b, 0x45, 0x13);
const BOX_FILL:    Color = Color::rgb8(0x0a, 0x19, 0x29);
const NPC_FALLBACK: Color = Color::GRAY;

/// Row and column drawn as road.
const ROAD_ROW: i32 = 6;
const ROAD_COL: i32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Fence,
    House,
    Tree,
    Rock,
}

/// How an impassable cell is drawn: the outer ring is fence, the two
/// building rows are houses, the lone boulder is a rock, anything else a tree.
pub fn obstacle_kind(grid: &ObstacleGrid, pos: Position) -> ObstacleKind {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    if pos.x == 0 || pos.y == 0 || pos.x == w - 1 || pos.y == h - 1 {
        ObstacleKind::Fence
    } else if pos.y == 2 || pos.y == 3 {
        ObstacleKind::House
    } else if pos == Position::new(9, 9) {
        ObstacleKind::Rock
    } else {
        ObstacleKind::Tree
    }
}

/// Accumulates quads in tile-local art coordinates.
struct Painter {
    quads: Vec<Quad>,
    scale: f32,
    tile_px: f32,
}

impl Painter {
    fn new(tile_px: f32) -> Self {
        Self { quads: Vec::new(), scale: tile_px / ART, tile_px }
    }

    /// Rectangle at art offset `(ax, ay)` inside tile `pos`.
    fn art(&mut self, pos: Position, ax: f32, ay: f32, w: f32, h: f32, color: Color) {
        let x = pos.x as f32 * self.tile_px + ax * self.scale;
        let y = pos.y as f32 * self.tile_px + ay * self.scale;
        self.quads.push(Quad::new(x, y, w * self.scale, h * self.scale, color));
    }

    /// Rectangle in logical pixels.
    fn px(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.quads.push(Quad::new(x, y, w, h, color));
    }
}

/// Quads for one frame, back to front. Non-play phases are a plain black
/// screen; their text goes to [`caption`].
pub fn build_scene(snap: &Snapshot<'_>, tile_px: f32) -> Vec<Quad> {
    if snap.phase != Phase::Play {
        return Vec::new();
    }
    let mut p = Painter::new(tile_px);

    draw_ground(&mut p, snap.grid);
    for npc in snap.npcs {
        draw_npc(&mut p, npc);
    }
    draw_hero(&mut p, snap.player);
    if snap.dialogue.is_some() {
        draw_message_box(&mut p, snap.grid);
    }
    p.quads
}

fn draw_ground(p: &mut Painter, grid: &ObstacleGrid) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Position::new(x, y);
            let light = (x + y) % 2 == 0;
            p.art(pos, 0.0, 0.0, ART, ART, if light { GRASS_LIGHT } else { GRASS_DARK });
            if (x * 7 + y * 13) % 10 > 7 {
                p.art(pos, 8.0, 8.0, 2.0, 2.0, GRASS_TUFT);
                p.art(pos, 20.0, 16.0, 2.0, 2.0, GRASS_TUFT);
            }
        }
    }
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Position::new(x, y);
            if (y == ROAD_ROW || x == ROAD_COL) && grid.is_passable(pos) {
                p.art(pos, 0.0, 0.0, ART, ART, ROAD);
            }
            if grid.is_blocked(pos) {
                match obstacle_kind(grid, pos) {
                    ObstacleKind::Fence => draw_fence(p, pos),
                    ObstacleKind::House => draw_house(p, pos),
                    ObstacleKind::Tree => draw_tree(p, pos),
                    ObstacleKind::Rock => draw_rock(p, pos),
                }
            }
        }
    }
}

fn draw_fence(p: &mut Painter, pos: Position) {
    for i in 0..4 {
        let x = i as f32 * 8.0;
        p.art(pos, x, 10.0, 4.0, 16.0, WOOD);
    }
    p.art(pos, 0.0, 12.0, ART, 2.0, WOOD);
    p.art(pos, 0.0, 20.0, ART, 2.0, WOOD);
}

fn draw_house(p: &mut Painter, pos: Position) {
    p.art(pos, 4.0, 12.0, 24.0, 16.0, WALL);
    p.art(pos, 2.0, 8.0, 28.0, 4.0, ROOF);
    p.art(pos, 4.0, 4.0, 24.0, 4.0, ROOF);
    p.art(pos, 8.0, 2.0, 16.0, 2.0, ROOF);
    p.art(pos, 10.0, 16.0, 4.0, 4.0, WINDOW);
    p.art(pos, 18.0, 16.0, 4.0, 4.0, WINDOW);
    p.art(pos, 13.0, 22.0, 6.0, 6.0, DOOR);
}

fn draw_tree(p: &mut Painter, pos: Position) {
    p.art(pos, 12.0, 16.0, 8.0, 12.0, WOOD);
    p.art(pos, 6.0, 8.0, 20.0, 12.0, LEAVES);
    p.art(pos, 8.0, 4.0, 16.0, 8.0, LEAVES);
    p.art(pos, 8.0, 10.0, 6.0, 6.0, LEAVES_LIT);
    p.art(pos, 18.0, 12.0, 4.0, 4.0, LEAVES_LIT);
}

fn draw_rock(p: &mut Painter, pos: Position) {
    p.art(pos, 8.0, 14.0, 16.0, 12.0, ROCK);
    p.art(pos, 10.0, 12.0, 12.0, 2.0, ROCK);
    p.art(pos, 10.0, 14.0, 4.0, 4.0, ROCK_LIT);
}

/// Eyes sit on the side the character faces; none when facing away.
fn draw_eyes(p: &mut Painter, pos: Position, facing: Direction) {
    match facing {
        Direction::Up => {}
        Direction::Down => {
            p.art(pos, 13.0, 11.0, 2.0, 2.0, Color::BLACK);
            p.art(pos, 17.0, 11.0, 2.0, 2.0, Color::BLACK);
        }
        Direction::Left => p.art(pos, 12.0, 11.0, 2.0, 2.0, Color::BLACK),
        Direction::Right => p.art(pos, 18.0, 11.0, 2.0, 2.0, Color::BLACK),
    }
}

fn draw_feet(p: &mut Painter, pos: Position, frame: u8) {
    let offset = if frame == 1 { 1.0 } else { 0.0 };
    p.art(pos, 11.0 + offset, 26.0, 4.0, 4.0, WOOD);
    p.art(pos, 17.0 - offset, 26.0, 4.0, 4.0, WOOD);
}

fn draw_npc(p: &mut Painter, npc: &Npc) {
    let pos = npc.position;
    let body = Color::from_hex(&npc.color).unwrap_or(NPC_FALLBACK);
    p.art(pos, 8.0, 28.0, 16.0, 3.0, SHADOW);
    p.art(pos, 10.0, 14.0, 12.0, 12.0, body);
    p.art(pos, 11.0, 8.0, 10.0, 8.0, SKIN);
    draw_eyes(p, pos, npc.facing);
    draw_feet(p, pos, 0);
}

fn draw_hero(p: &mut Painter, hero: &PlayerState) {
    let pos = hero.position;
    p.art(pos, 8.0, 28.0, 16.0, 3.0, SHADOW);
    p.art(pos, 10.0, 14.0, 12.0, 12.0, HERO_BODY);
    p.art(pos, 9.0, 14.0, 3.0, 4.0, HERO_CAPE);
    p.art(pos, 20.0, 14.0, 3.0, 4.0, HERO_CAPE);
    p.art(pos, 11.0, 8.0, 10.0, 8.0, SKIN);

    // Hair covers the whole head from behind.
    p.art(pos, 10.0, 6.0, 12.0, 4.0, HAIR);
    let hair_len = if hero.facing == Direction::Up { 10.0 } else { 8.0 };
    p.art(pos, 9.0, 10.0, 2.0, hair_len, HAIR);
    p.art(pos, 21.0, 10.0, 2.0, hair_len, HAIR);

    draw_eyes(p, pos, hero.facing);
    draw_feet(p, pos, hero.frame);
}

/// Framed box across the bottom quarter of the map.
fn draw_message_box(p: &mut Painter, grid: &ObstacleGrid) {
    let w = grid.width() as f32 * p.tile_px;
    let h = grid.height() as f32 * p.tile_px;
    let box_h = h * 0.28;
    let top = h - box_h;
    let border = (p.tile_px / 8.0).max(1.0);

    p.px(0.0, top, w, box_h, Color::WHITE);
    p.px(border, top + border, w - 2.0 * border, box_h - 2.0 * border, BOX_FILL);
    // Inner rule, like the classic double frame.
    p.px(2.0 * border, top + 2.0 * border, w - 4.0 * border, border * 0.5, Color::WHITE);
    // "More" cursor in the bottom-right corner.
    let c = p.tile_px * 0.25;
    p.px(w - 3.0 * border - c, h - 3.0 * border - c, c, c * 0.5, Color::WHITE);
}

/// Window caption for the current frame: intro text, dialogue text or the
/// editor draft. Line breaks are shown as " / ".
pub fn caption(snap: &Snapshot<'_>, title: &str) -> String {
    if let Some(draft) = snap.editor.draft() {
        let name = snap
            .npcs
            .iter()
            .find(|n| n.id == draft.npc_id)
            .map_or("?", |n| n.name.as_str());
        return format!("[edit {name}] {}_  (F5 save, Esc cancel, Tab next)", flatten(&draft.text));
    }
    if snap.editor.is_visible() {
        return format!("{title} | NPC editor: Tab to pick an NPC, F2 to close");
    }
    match snap.phase {
        Phase::Title => format!("{title} | Press Enter to start"),
        Phase::Intro1 => format!("{title} | ...ugh... | Enter"),
        Phase::Intro2 => format!("{title} | ...I feel sick... | Enter"),
        Phase::Play => match snap.dialogue {
            Some(session) => format!("{}: {}  (Enter to close)", session.speaker, flatten(&session.text)),
            None => format!("{title} | Arrows: move  Space: talk  Enter: close"),
        },
    }
}

fn flatten(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" / ")
}
