use core::fmt::{self, Display, Write};

use crate::*;

/// What a single cell looks like to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Hidden,
    Flagged,
    Empty,
    Count(u8),
    /// The bomb that was actually revealed.
    Exploded,
    /// Unflagged bomb shown once the game is lost.
    Mine,
    /// Flagged bomb shown once the game is lost.
    FlaggedMine,
}

impl Glyph {
    pub fn of(cell: &Cell, state: GameState) -> Self {
        use Glyph::*;

        let lost = matches!(state, GameState::Lost);
        match *cell {
            Cell {
                revealed: false,
                is_bomb: true,
                flagged: false,
                ..
            } if lost => Mine,
            Cell {
                revealed: false,
                is_bomb: true,
                flagged: true,
                ..
            } if lost => FlaggedMine,
            Cell {
                revealed: false,
                flagged: true,
                ..
            } => Flagged,
            Cell {
                revealed: false, ..
            } => Hidden,
            Cell { is_bomb: true, .. } => Exploded,
            Cell {
                adjacent_bomb_count: 0,
                ..
            } => Empty,
            Cell {
                adjacent_bomb_count,
                ..
            } => Count(adjacent_bomb_count),
        }
    }

    /// Counts outside `0..=9` cannot come from play and render as hidden.
    pub fn as_char(self) -> char {
        use Glyph::*;
        match self {
            Hidden => '?',
            Flagged => 'F',
            Empty => '.',
            Count(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            Exploded => 'X',
            Mine => 'Q',
            FlaggedMine => 'B',
        }
    }
}

impl Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

impl GameState {
    /// Status line printed above the board.
    pub const fn status_line(self) -> &'static str {
        match self {
            GameState::Running => "",
            GameState::Won => "You Won",
            GameState::Lost => "You Lost",
        }
    }
}

impl Board {
    pub fn glyph_at(&self, coords: Coord2) -> Option<Glyph> {
        self.cell_at(coords)
            .map(|cell| Glyph::of(cell, self.state()))
    }

    /// Writes the status line, the column header and one line per row, top row first.
    ///
    /// The last line (row `0`) has no line terminator.
    pub fn render(&self, w: &mut impl Write) -> fmt::Result {
        let (width, height) = self.size();

        writeln!(w, "{}", self.state().status_line())?;

        w.write_str("__")?;
        for x in 0..width {
            write!(w, "{}", x)?;
        }
        w.write_char('\n')?;

        for y in (0..height).rev() {
            write!(w, "{} ", y)?;
            for x in 0..width {
                if let Some(glyph) = self.glyph_at((x, y)) {
                    write!(w, "{}", glyph)?;
                }
            }
            if y != 0 {
                w.write_char('\n')?;
            }
        }

        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    fn play(size: Coord2, mines: &[Coord2], moves: &[Move]) -> String {
        let mut board = Board::new(size.0, size.1, mines.iter().copied()).unwrap();
        for &mv in moves {
            board.make_move(mv);
        }
        board.to_string()
    }

    fn lines(lines: &[&str]) -> String {
        lines.join("\n")
    }

    #[test]
    fn fresh_board_is_all_hidden() {
        let board = Board::new(8, 10, []).unwrap();

        let mut expected = Vec::from(["", "__01234567"]);
        let rows: Vec<String> = (0..10).rev().map(|y| alloc::format!("{y} ????????")).collect();
        expected.extend(rows.iter().map(String::as_str));

        assert_eq!(board.to_string(), lines(&expected));
    }

    #[test]
    fn render_into_string_matches_display() {
        let board = Board::new(2, 1, [(0, 0)]).unwrap();
        let mut out = String::new();

        board.render(&mut out).unwrap();

        assert_eq!(out, board.to_string());
        assert_eq!(out, "\n__01\n0 ??");
    }

    #[test]
    fn empty_board_opens_completely() {
        let actual = play((3, 3), &[], &[Move::Reveal((0, 0))]);

        assert_eq!(actual, lines(&["You Won", "__012", "2 ...", "1 ...", "0 ..."]));
    }

    #[test]
    fn surrounded_safe_cell_wins() {
        let mines = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];

        let actual = play((3, 3), &mines, &[Move::Reveal((1, 1))]);

        assert_eq!(actual, lines(&["You Won", "__012", "2 ???", "1 ?8?", "0 ???"]));
    }

    #[test]
    fn all_mine_board_shows_every_mine_on_loss() {
        let mines: Vec<_> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();

        let actual = play((3, 3), &mines, &[Move::Reveal((1, 1))]);

        assert_eq!(actual, lines(&["You Lost", "__012", "2 QQQ", "1 QXQ", "0 QQQ"]));
    }

    #[test]
    fn numbered_row_halts_flood_fill() {
        let actual = play((3, 4), &[(0, 2), (1, 2), (2, 2)], &[Move::Reveal((0, 0))]);

        assert_eq!(actual, lines(&["", "__012", "3 ???", "2 ???", "1 232", "0 ..."]));
    }

    #[test]
    fn numbered_row_below_mine_row_wins() {
        let actual = play((3, 4), &[(0, 3), (1, 3), (2, 3)], &[Move::Reveal((0, 0))]);

        assert_eq!(
            actual,
            lines(&["You Won", "__012", "3 ???", "2 232", "1 ...", "0 ..."])
        );
    }

    #[test]
    fn flagged_single_mine_wins() {
        let actual = play((1, 1), &[(0, 0)], &[Move::Flag((0, 0))]);

        assert_eq!(actual, lines(&["You Won", "__0", "0 F"]));
    }

    #[test]
    fn flag_renders_on_hidden_cell() {
        let actual = play((4, 4), &[(2, 3), (1, 2), (3, 3)], &[Move::Flag((1, 1))]);

        assert_eq!(
            actual,
            lines(&["", "__0123", "3 ????", "2 ????", "1 ?F??", "0 ????"])
        );
    }

    #[test]
    fn double_flag_restores_hidden_glyph() {
        let moves = [Move::Flag((1, 1)), Move::Flag((1, 1))];

        let actual = play((4, 4), &[(2, 3), (1, 2), (3, 3)], &moves);

        assert_eq!(actual, play((4, 4), &[(2, 3), (1, 2), (3, 3)], &[]));
    }

    #[test]
    fn reveal_then_explode() {
        let mines = [(2, 3), (1, 2), (3, 3)];

        let opened = play((4, 4), &mines, &[Move::Reveal((0, 0))]);
        assert_eq!(
            opened,
            lines(&["", "__0123", "3 ????", "2 ??32", "1 111.", "0 ...."])
        );

        let lost = play((4, 4), &mines, &[Move::Reveal((0, 0)), Move::Reveal((3, 3))]);
        assert_eq!(
            lost,
            lines(&["You Lost", "__0123", "3 ??QX", "2 ?Q32", "1 111.", "0 ...."])
        );

        let lost = play((4, 4), &mines, &[Move::Reveal((0, 0)), Move::Reveal((2, 3))]);
        assert_eq!(
            lost,
            lines(&["You Lost", "__0123", "3 ??XQ", "2 ?Q32", "1 111.", "0 ...."])
        );
    }

    #[test]
    fn lone_exploded_mine() {
        let actual = play((3, 3), &[(1, 1)], &[Move::Reveal((1, 1))]);

        assert_eq!(actual, lines(&["You Lost", "__012", "2 ???", "1 ?X?", "0 ???"]));
    }

    #[test]
    fn flagged_mines_are_marked_on_loss() {
        let moves = [
            Move::Flag((0, 0)),
            Move::Flag((1, 0)),
            Move::Reveal((2, 0)),
        ];

        let actual = play((4, 1), &[(0, 0), (2, 0), (3, 0)], &moves);

        assert_eq!(actual, lines(&["You Lost", "__0123", "0 BFXQ"]));
    }

    #[test]
    fn glyph_table() {
        use Glyph::*;

        let chars: String = [
            Hidden,
            Flagged,
            Empty,
            Count(1),
            Count(8),
            Exploded,
            Mine,
            FlaggedMine,
        ]
        .iter()
        .map(|glyph| glyph.as_char())
        .collect();

        assert_eq!(chars, "?F.18XQB");
    }

    #[test]
    fn out_of_range_count_does_not_overflow() {
        assert_eq!(Glyph::Count(9).as_char(), '9');
        assert_eq!(Glyph::Count(10).as_char(), '?');
        assert_eq!(Glyph::Count(u8::MAX).as_char(), '?');
    }

    #[test]
    fn glyph_at_out_of_bounds_is_none() {
        let board = Board::new(2, 2, []).unwrap();

        assert_eq!(board.glyph_at((0, 0)), Some(Glyph::Hidden));
        assert_eq!(board.glyph_at((2, 0)), None);
        assert_eq!(board.glyph_at((0, -1)), None);
    }

    #[test]
    fn wide_board_header_concatenates_indices() {
        let board = Board::new(12, 1, []).unwrap();

        assert_eq!(board.to_string(), "\n__01234567891011\n0 ????????????");
    }
}
