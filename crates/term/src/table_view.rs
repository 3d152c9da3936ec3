//! TableView: maps a playback snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). Seats are drawn top to bottom in seat order,
//! each as a block of header, hand with melds, and river:
//!
//! ```text
//! East 1  honba 0  kyotaku 1  dora 3p
//! event 42/120  PAUSED
//!
//! E seat 0  25000  RIICHI
//!   1m 2m 3m 5p 5p 7s 8s 9s E  E      [5m 5m 5m <2]
//!   9p 1s N  4m*
//! ...
//! ```
//!
//! Hands of other seats are masked unless reveal-all is on or no seat is
//! played by a human.

use crate::core::{Gate, Meld, MeldKind, PlaybackController, TableState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::tile::Suit;
use crate::types::{Event, Seat, Tile, SEAT_COUNT};

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

/// Everything the view needs from one frame of playback.
#[derive(Debug, Clone)]
pub struct PlaybackView<'a> {
    pub state: &'a TableState,
    pub gate: Gate,
    pub human_seat: Option<Seat>,
    pub paused: bool,
    pub reveal_all: bool,
    pub last_event: Option<&'a Event>,
    /// Discard cursor within the human hand
    pub cursor: Option<usize>,
    /// Applied events and total events
    pub progress: (usize, usize),
}

impl<'a> PlaybackView<'a> {
    pub fn from_controller(ctl: &'a PlaybackController, cursor: Option<usize>) -> Self {
        Self {
            state: ctl.state(),
            gate: ctl.gate(),
            human_seat: ctl.human_seat(),
            paused: ctl.is_paused(),
            reveal_all: ctl.reveal_all(),
            last_event: ctl.last_event(),
            cursor,
            progress: (ctl.cursor(), ctl.len()),
        }
    }

    /// Whether `seat`'s concealed tiles are drawn face up.
    pub fn shows_hand(&self, seat: Seat) -> bool {
        self.reveal_all || self.human_seat.map_or(true, |h| h == seat)
    }

    fn is_finished(&self) -> bool {
        self.progress.0 >= self.progress.1
    }
}

/// Columns taken by one tile, including the trailing gap.
const TILE_W: u16 = 3;
/// River tiles per row before wrapping.
const RIVER_ROW: usize = 12;

const LABEL: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160));
const VALUE: CellStyle = CellStyle::fg(Rgb::new(240, 240, 240));
const ALERT: CellStyle = CellStyle::fg(Rgb::new(255, 200, 80)).bold();
const HIDDEN: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100));
const CURSOR_BG: Rgb = Rgb::new(70, 70, 130);

#[derive(Debug, Default)]
pub struct TableView;

impl TableView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, view: &PlaybackView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let state = view.state;
        let mut y = 0;
        self.draw_round_line(fb, y, state);
        y += 1;
        self.draw_progress_line(fb, y, view);
        y += 2;

        for seat in 0..SEAT_COUNT as Seat {
            y = self.draw_seat(fb, y, view, seat) + 1;
        }

        let status = status_line(view);
        fb.put_str(0, y, &status, if view.gate.awaiting { ALERT } else { VALUE });
        y += 1;
        if let Some(Event::Hora {
            hora_tehais: Some(tiles),
            ..
        }) = view.last_event
        {
            let x = fb.put_str(2, y, "hand ", LABEL);
            self.draw_tiles(fb, x, y, tiles, None);
            y += 1;
        }

        let help = "p pause  v reveal  <-/-> select  enter discard  n/b round  q quit";
        fb.put_str(0, y.max(viewport.height.saturating_sub(1)), help, LABEL.dim());
    }

    pub fn render(&self, view: &PlaybackView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, viewport, &mut fb);
        fb
    }

    fn draw_round_line(&self, fb: &mut FrameBuffer, y: u16, state: &TableState) {
        let round = format!("{} {}", wind_name(state.bakaze().as_str()), state.kyoku());
        let mut x = fb.put_str(0, y, &round, VALUE.bold());
        x = fb.put_str(x, y, "  honba ", LABEL);
        x = fb.put_str(x, y, &state.honba().to_string(), VALUE);
        x = fb.put_str(x, y, "  kyotaku ", LABEL);
        x = fb.put_str(x, y, &state.kyotaku().to_string(), VALUE);
        x = fb.put_str(x, y, "  dora ", LABEL);
        self.draw_tiles(fb, x, y, state.dora_markers(), None);
    }

    fn draw_progress_line(&self, fb: &mut FrameBuffer, y: u16, view: &PlaybackView<'_>) {
        let (done, total) = view.progress;
        let mut x = fb.put_str(0, y, &format!("event {done}/{total}"), LABEL);
        if view.paused {
            x = fb.put_str(x + 2, y, "PAUSED", ALERT);
        }
        if view.reveal_all {
            fb.put_str(x + 2, y, "REVEAL", LABEL.bold());
        }
    }

    /// Draw one seat block and return the row after it.
    fn draw_seat(&self, fb: &mut FrameBuffer, y: u16, view: &PlaybackView<'_>, seat: Seat) -> u16 {
        let state = view.state;
        let wind = crate::core::seat_wind(seat, state.oya());
        let header = format!("{} seat {}", wind.as_str(), seat);
        let mut x = fb.put_str(0, y, &header, VALUE.bold());
        let score = state.score(seat).unwrap_or_default();
        x = fb.put_str(x + 2, y, &score.to_string(), VALUE);
        if state.riichi(seat) {
            x = fb.put_str(x + 2, y, "RIICHI", ALERT);
        }
        if view.human_seat == Some(seat) {
            x = fb.put_str(x + 2, y, "(you)", LABEL);
        }
        if view.gate.awaiting && view.gate.seat == Some(seat) {
            fb.put_str(x + 2, y, "<- to discard", ALERT);
        }

        let hand_y = y + 1;
        let hand = state.hand(seat);
        let mut x = if view.shows_hand(seat) {
            let cursor = view.cursor.filter(|_| view.human_seat == Some(seat));
            self.draw_tiles(fb, 2, hand_y, hand, cursor)
        } else {
            let mut x = 2;
            for _ in hand {
                x = fb.put_str(x, hand_y, "## ", HIDDEN);
            }
            x
        };
        for meld in state.melds(seat) {
            x = self.draw_meld(fb, x + 2, hand_y, meld);
        }

        let discards = state.discards(seat);
        let mut row = hand_y + 1;
        if discards.is_empty() {
            return row + 1;
        }
        for chunk in discards.chunks(RIVER_ROW) {
            let mut x = 2;
            for d in chunk {
                let mut style = tile_style(&d.tile);
                if d.tsumogiri {
                    style = style.dim();
                }
                let text = if d.sideways {
                    format!("{}*", tile_label(&d.tile))
                } else {
                    tile_label(&d.tile).to_string()
                };
                fb.put_str(x, row, &text, style);
                x += TILE_W;
            }
            row += 1;
        }
        row
    }

    fn draw_meld(&self, fb: &mut FrameBuffer, x: u16, y: u16, meld: &Meld) -> u16 {
        let mut x = fb.put_str(x, y, "[", LABEL);
        x = self.draw_tiles(fb, x, y, &meld.tiles, None);
        match (meld.kind, meld.from) {
            (MeldKind::Ankan, _) | (_, None) => fb.put_str(x.saturating_sub(1), y, "]", LABEL),
            (_, Some(from)) => fb.put_str(x, y, &format!("<{from}]"), LABEL),
        }
    }

    /// Draw tiles left to right, highlighting `cursor`; returns the next free column.
    fn draw_tiles(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        tiles: &[Tile],
        cursor: Option<usize>,
    ) -> u16 {
        let mut x = x;
        for (i, tile) in tiles.iter().enumerate() {
            let mut style = tile_style(tile);
            if cursor == Some(i) {
                style = style.on(CURSOR_BG).bold();
            }
            fb.put_str(x, y, tile_label(tile), style);
            x += TILE_W;
        }
        x
    }
}

/// Two-column label for a tile; red fives drop their marker and are coloured instead.
fn tile_label(tile: &Tile) -> &str {
    let id = tile.as_str();
    if tile.is_red() {
        &id[..2]
    } else if tile.is_known() {
        id
    } else {
        "??"
    }
}

fn tile_style(tile: &Tile) -> CellStyle {
    if tile.is_red() {
        return CellStyle::fg(Rgb::new(255, 70, 70)).bold();
    }
    match tile.suit_rank() {
        Some((Suit::Manzu, _)) => CellStyle::fg(Rgb::new(230, 140, 140)),
        Some((Suit::Pinzu, _)) => CellStyle::fg(Rgb::new(130, 180, 240)),
        Some((Suit::Souzu, _)) => CellStyle::fg(Rgb::new(130, 220, 150)),
        Some((Suit::Wind | Suit::Dragon, _)) => VALUE,
        None => HIDDEN,
    }
}

fn wind_name(code: &str) -> &'static str {
    match code {
        "E" => "East",
        "S" => "South",
        "W" => "West",
        _ => "North",
    }
}

/// One-line summary of what the viewer is waiting on or just saw.
pub fn status_line(view: &PlaybackView<'_>) -> String {
    if view.gate.awaiting {
        let tile = view
            .gate
            .expected_tile
            .as_ref()
            .map(Tile::as_str)
            .unwrap_or("?");
        return format!("your turn: discard {tile}");
    }
    if view.is_finished() {
        return "end of log".to_string();
    }
    view.last_event.map(describe).unwrap_or_default()
}

/// Human-readable description of an event.
pub fn describe(event: &Event) -> String {
    match event {
        Event::StartGame { .. } => "game start".to_string(),
        Event::StartKyoku {
            bakaze, kyoku, honba, ..
        } => format!("{} {} ({} honba)", wind_name(bakaze.as_str()), kyoku, honba),
        Event::Tsumo { actor, pai } => format!("seat {actor} draws {pai}"),
        Event::Dahai {
            actor,
            pai,
            tsumogiri,
        } => {
            let how = if *tsumogiri { " (tsumogiri)" } else { "" };
            format!("seat {actor} discards {pai}{how}")
        }
        Event::Reach { actor } => format!("seat {actor} declares riichi"),
        Event::ReachAccepted { actor } => format!("seat {actor} riichi accepted"),
        Event::Chi { actor, target, pai, .. } => format!("seat {actor} chi {pai} from seat {target}"),
        Event::Pon { actor, target, pai, .. } => format!("seat {actor} pon {pai} from seat {target}"),
        Event::Daiminkan { actor, target, pai, .. } => {
            format!("seat {actor} kan {pai} from seat {target}")
        }
        Event::Ankan { actor, .. } => format!("seat {actor} closed kan"),
        Event::Kakan { actor, pai, .. } => format!("seat {actor} added kan {pai}"),
        Event::Dora { dora_marker } => format!("new dora indicator {dora_marker}"),
        Event::Hora {
            actor,
            target,
            fan,
            fu,
            ..
        } => {
            let how = if actor == target {
                "tsumo".to_string()
            } else {
                format!("ron from seat {target}")
            };
            let mut text = format!("seat {actor} wins by {how}");
            if let Some(fan) = fan {
                text.push_str(&format!(": {fan} han"));
                if let Some(fu) = fu {
                    text.push_str(&format!(" {fu} fu"));
                }
            }
            text
        }
        Event::Ryukyoku { .. } => "draw".to_string(),
        Event::EndKyoku => "round over".to_string(),
        Event::EndGame { .. } => "game over".to_string(),
        Event::Unknown => "unrecognized event".to_string(),
    }
}
