//! Output formatting and progress spinners for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Labels, Position};

/// Create a spinner for long-running tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

/// Render a board for a human, showing each empty cell's position number.
///
/// ```text
///  x | 2 | 3
/// ---+---+---
///  4 | o | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
pub fn render_board(board: &Board, labels: Labels) -> String {
    let rows: Vec<String> = board
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, cell)| match cell.player() {
                    Some(player) => labels.of(player).to_string(),
                    None => Position::ALL[r * 3 + c].to_string(),
                })
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn render_numbers_empty_cells() {
        let board = Board::from_string("B...O....").unwrap();
        let rendered = render_board(&board, Labels::for_first_player(Player::Bot));
        assert_eq!(
            rendered,
            " x | 2 | 3 \n---+---+---\n 4 | o | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn labels_follow_first_player() {
        let board = Board::from_string("B........").unwrap();
        let rendered = render_board(&board, Labels::for_first_player(Player::Opponent));
        assert!(rendered.starts_with(" o |"));
    }
}
