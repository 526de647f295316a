//! SupplyView: maps supply snapshots and action outcomes into styled frames.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SupplyEvent, SupplySnapshot, SupplySummary};
use crate::input::menu_entries;
use crate::input::valid_keys_hint;
use crate::text::{piece_color, Frame, Line, Rgb, SpanStyle};
use crate::types::{Piece, SupplyAction, SupplyError, Variant};

const RULE: &str = "=======================================";

const HEADER: SpanStyle = SpanStyle::PLAIN.bold();
const ERROR: SpanStyle = SpanStyle::fg(Rgb::new(220, 80, 80)).bold();
const NOTICE: SpanStyle = SpanStyle::fg(Rgb::new(100, 220, 120));
const HINT: SpanStyle = SpanStyle::PLAIN.dim();

/// Console layout for the supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyView {
    /// Repeat the head of the queue / top of the stack on its own line.
    pub show_heads: bool,
}

impl Default for SupplyView {
    fn default() -> Self {
        Self { show_heads: true }
    }
}

fn piece_style(piece: Piece) -> SpanStyle {
    SpanStyle::fg(piece_color(piece.kind)).bold()
}

/// `label` followed by the pieces, space separated, each in its kind color.
fn piece_row<'a>(label: &str, pieces: impl IntoIterator<Item = &'a Piece>) -> Line {
    let mut line = Line::plain(label);
    for piece in pieces {
        line = line
            .push(piece.to_string(), piece_style(*piece))
            .push(" ", SpanStyle::PLAIN);
    }
    line
}

fn piece_line(label: &str, piece: Piece) -> Line {
    Line::plain(label).push(piece.to_string(), piece_style(piece))
}

fn boxed_title(frame: &mut Frame, title: &str) {
    frame
        .line(Line::styled(RULE, HEADER))
        .line(Line::styled(title, HEADER))
        .line(Line::styled(RULE, HEADER));
}

impl SupplyView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startup banner.
    pub fn banner<const Q: usize, const R: usize>(&self, snap: &SupplySnapshot<Q, R>) -> Frame {
        let mut frame = Frame::new();
        frame.line(Line::styled(RULE, HEADER));
        match snap.variant {
            Variant::Basic => {
                frame
                    .line(Line::styled("   WELCOME TO TETRIS SUPPLY!", HEADER))
                    .line(Line::styled("   Piece queue control", HEADER));
            }
            Variant::Advanced => {
                frame
                    .line(Line::styled("   TETRIS SUPPLY - ADVANCED CONTROL", HEADER))
                    .line(Line::styled("   Queue + reserve stack", HEADER));
            }
        }
        frame.line(Line::styled(RULE, HEADER)).blank();
        frame
            .line(Line::styled("Supply ready!", NOTICE))
            .line(Line::plain(format!("- Piece queue: {Q} slots")));
        if snap.reserve_enabled {
            frame.line(Line::plain(format!("- Reserve stack: {R} slots")));
        }
        frame
    }

    /// Current queue and (advanced) reserve stack.
    pub fn state<const Q: usize, const R: usize>(&self, snap: &SupplySnapshot<Q, R>) -> Frame {
        let mut frame = Frame::new();
        frame.blank();
        boxed_title(&mut frame, "      TETRIS SUPPLY - CURRENT STATE");

        frame
            .blank()
            .line(Line::styled("--- UPCOMING PIECES ---", HEADER))
            .line(Line::plain(format!(
                "Pieces in queue: {}/{}",
                snap.queue.len(),
                Q
            )));
        if snap.queue.is_empty() {
            frame.line(Line::styled("Queue empty", HINT));
        } else {
            frame.line(piece_row("Order: ", snap.queue.iter()));
            if let (true, Some(next)) = (self.show_heads, snap.next_piece()) {
                frame.line(piece_line("Next piece: ", next));
            }
        }

        if snap.reserve_enabled {
            frame
                .blank()
                .line(Line::styled("--- RESERVE STACK ---", HEADER))
                .line(Line::plain(format!(
                    "Pieces in stack: {}/{}",
                    snap.reserve.len(),
                    R
                )));
            if snap.reserve.is_empty() {
                frame.line(Line::styled("Stack empty", HINT));
            } else {
                frame.line(piece_row("Top -> Base: ", snap.reserve.iter()));
                if let (true, Some(top)) = (self.show_heads, snap.top_reserved()) {
                    frame.line(piece_line("Top piece: ", top));
                }
            }
        }

        frame.line(Line::styled(RULE, HEADER));
        frame
    }

    /// Action menu for the variant. The prompt itself is [`Self::prompt`].
    pub fn menu(&self, variant: Variant) -> Frame {
        let mut frame = Frame::new();
        frame.blank();
        boxed_title(&mut frame, "          ACTION MENU");
        for entry in menu_entries(variant) {
            frame.line(Line::plain(format!("{}. {}", entry.key, entry.label)));
        }
        frame.line(Line::styled(RULE, HEADER));
        frame
    }

    pub fn prompt(&self) -> Line {
        Line::styled("Enter your choice: ", HEADER)
    }

    /// Report on one action.
    pub fn outcome<const Q: usize, const R: usize>(
        &self,
        action: SupplyAction,
        result: &Result<SupplyEvent, SupplyError>,
        snap: &SupplySnapshot<Q, R>,
    ) -> Frame {
        match result {
            Ok(event) => self.event(event),
            Err(err) => self.error(action, err, snap),
        }
    }

    fn event(&self, event: &SupplyEvent) -> Frame {
        let mut frame = Frame::new();
        frame.blank();
        let (headline, done) = match event {
            SupplyEvent::Played { .. } => (">>> PLAYING PIECE: ", "Piece played."),
            SupplyEvent::Reserved { .. } => {
                (">>> RESERVING PIECE: ", "Piece moved to the reserve stack.")
            }
            SupplyEvent::UsedReserved { .. } => {
                (">>> USING RESERVED PIECE: ", "Reserved piece used.")
            }
            SupplyEvent::Inserted { .. } => (
                ">>> NEW PIECE ADDED: ",
                "Piece appended to the back of the queue.",
            ),
        };
        let piece = event.piece();
        frame
            .line(
                Line::styled(headline, HEADER)
                    .push(piece.to_string(), piece_style(piece))
                    .push(" <<<", HEADER),
            )
            .line(Line::styled(done, NOTICE));
        if let Some(refill) = event.refill() {
            frame.line(piece_line("New piece generated: ", refill));
        }
        frame
    }

    fn error<const Q: usize, const R: usize>(
        &self,
        action: SupplyAction,
        err: &SupplyError,
        snap: &SupplySnapshot<Q, R>,
    ) -> Frame {
        let mut frame = Frame::new();
        frame.blank();
        match err {
            SupplyError::QueueEmpty => {
                let verb = match action {
                    SupplyAction::Reserve => "reserve",
                    _ => "play",
                };
                frame.line(Line::styled(
                    format!("ERROR: the queue is empty! There are no pieces to {verb}."),
                    ERROR,
                ));
            }
            SupplyError::QueueFull => {
                frame
                    .line(Line::styled(
                        "ERROR: the queue is full! No more pieces can be added.",
                        ERROR,
                    ))
                    .line(Line::styled("Play a piece to free a slot.", HINT));
            }
            SupplyError::StackFull => {
                frame
                    .line(Line::styled(
                        format!(
                            "ERROR: the reserve stack is full ({}/{})!",
                            snap.reserve.len(),
                            R
                        ),
                        ERROR,
                    ))
                    .line(Line::styled(
                        "Use a reserved piece or play a piece first.",
                        HINT,
                    ));
            }
            SupplyError::StackEmpty => {
                frame
                    .line(Line::styled("ERROR: the reserve stack is empty!", ERROR))
                    .line(Line::styled("Reserve a piece first.", HINT));
            }
            SupplyError::Unavailable { .. } | SupplyError::EmptyShapeSet => {
                frame.line(Line::styled(format!("ERROR: {err}."), ERROR));
            }
        }
        frame
    }

    /// Rejection for input that is not a menu key.
    pub fn invalid_entry(&self, variant: Variant) -> Frame {
        let mut frame = Frame::new();
        frame.blank().line(Line::styled(
            format!("Invalid entry! Enter {}.", valid_keys_hint(variant)),
            ERROR,
        ));
        frame
    }

    /// Quit-time report.
    pub fn summary(&self, summary: &SupplySummary) -> Frame {
        let mut frame = Frame::new();
        frame.blank();
        boxed_title(&mut frame, "   THANKS FOR PLAYING TETRIS SUPPLY!");
        frame
            .line(Line::plain("   Final score:"))
            .line(Line::plain(format!(
                "   - Pieces taken from the queue: {}",
                summary.pieces_drawn
            )))
            .line(Line::plain(format!("   - Pieces played: {}", summary.played)));
        match summary.variant {
            Variant::Basic => {
                frame.line(Line::plain(format!(
                    "   - Pieces inserted: {}",
                    summary.inserted
                )));
            }
            Variant::Advanced => {
                frame
                    .line(Line::plain(format!(
                        "   - Pieces reserved: {}",
                        summary.reserved
                    )))
                    .line(Line::plain(format!(
                        "   - Reserved pieces used: {}",
                        summary.used_reserved
                    )))
                    .line(Line::plain(format!(
                        "   - Pieces left in reserve: {}",
                        summary.held_in_reserve
                    )));
            }
        }
        frame.line(Line::styled(RULE, HEADER));
        frame
    }
}
