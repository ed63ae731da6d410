//! Plain-text rendering of tournament and match results

use std::fmt::Write;

use arena_core::{HeadToHead, MatchResult, Move, Standing};

pub fn render_standings(standings: &[Standing]) -> String {
    let mut out = String::new();
    for standing in standings {
        let _ = writeln!(out, "{}: {}", standing.name, standing.average);
    }
    out
}

pub fn render_head_to_head(table: &HeadToHead) -> String {
    let mut out = String::new();
    for (name, cells) in table.rows() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} results:", name);
        for (opponent, average) in cells {
            let _ = writeln!(out, "    {} vs {}", average, opponent);
        }
    }
    out
}

fn moves(history: &[Move]) -> String {
    history
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

pub fn render_match(result: &MatchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "player 1 ({}): {}", result.name_a, moves(&result.history_a()));
    let _ = writeln!(out, "player 2 ({}): {}", result.name_b, moves(&result.history_b()));
    let _ = writeln!(
        out,
        "Score player1={}, player2={}",
        result.total_score_a, result.total_score_b
    );
    out
}
