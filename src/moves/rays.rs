//! Ray tracing shared by the sliding pieces and the path-mask builder.
//!
//! Rays step in (file, rank) space, so leaving the board through the a- or
//! h-file ends the ray instead of wrapping onto the neighbouring rank.

use crate::game_state::chess_types::{file_of, rank_of, BoardMask, PieceKind, Square};

pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Walk from `square` (exclusive) along one direction until the board edge or
/// the first occupied square (inclusive).
pub fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: BoardMask) -> BoardMask {
    let mut file = file_of(square) as i8 + file_step;
    let mut rank = rank_of(square) as i8 + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[inline]
pub fn trace_rays(square: Square, steps: &[(i8, i8)], occupancy: BoardMask) -> BoardMask {
    steps
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

/// Unit step leading from `from` to `to` when both share a rank, file or
/// diagonal.
pub fn line_step(from: Square, to: Square) -> Option<(i8, i8)> {
    if from == to {
        return None;
    }

    let df = file_of(to) as i8 - file_of(from) as i8;
    let dr = rank_of(to) as i8 - rank_of(from) as i8;

    if df == 0 || dr == 0 || df.abs() == dr.abs() {
        Some((df.signum(), dr.signum()))
    } else {
        None
    }
}

/// Squares an attacker of `kind` on `source` must cross to reach `target`.
///
/// Sliders yield every square strictly between the two plus `target` itself;
/// pawns, knights and kings attack without crossing anything, so only
/// `target` is returned. Unaligned slider pairs produce an empty mask.
pub fn path_mask(kind: PieceKind, source: Square, target: Square) -> BoardMask {
    if !kind.is_slider() {
        return 1u64 << target;
    }

    let Some((df, dr)) = line_step(source, target) else {
        return 0;
    };

    let mut mask = 0u64;
    let mut file = file_of(source) as i8;
    let mut rank = rank_of(source) as i8;
    loop {
        file += df;
        rank += dr;
        let sq = (rank * 8 + file) as Square;
        mask |= 1u64 << sq;
        if sq == target {
            break;
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::squares::*;
    use crate::game_state::chess_types::square_mask;

    #[test]
    fn ray_stops_on_first_blocker_inclusive() {
        let ray = trace_ray(A1, 0, 1, square_mask(A4));
        assert_eq!(ray, square_mask(A2) | square_mask(A3) | square_mask(A4));
    }

    #[test]
    fn horizontal_ray_does_not_wrap_to_next_rank() {
        let ray = trace_ray(G1, 1, 0, 0);
        assert_eq!(ray, square_mask(H1));
        assert_eq!(trace_ray(A2, -1, 0, 0), 0);
    }

    #[test]
    fn slider_path_covers_between_and_target() {
        assert_eq!(
            path_mask(PieceKind::Queen, A1, H1),
            0xFEu64,
            "rank path from a1 to h1 is b1..h1"
        );
        assert_eq!(
            path_mask(PieceKind::Rook, A8, A1),
            square_mask(A1)
                | square_mask(A2)
                | square_mask(A3)
                | square_mask(A4)
                | square_mask(A5)
                | square_mask(A6)
                | square_mask(A7)
        );
        assert_eq!(
            path_mask(PieceKind::Bishop, H5, E8),
            square_mask(G6) | square_mask(F7) | square_mask(E8)
        );
    }

    #[test]
    fn leapers_path_is_target_only() {
        assert_eq!(path_mask(PieceKind::Knight, G1, F3), square_mask(F3));
        assert_eq!(path_mask(PieceKind::Pawn, D4, E5), square_mask(E5));
    }

    #[test]
    fn unaligned_slider_has_no_path() {
        assert_eq!(path_mask(PieceKind::Rook, A1, B3), 0);
        assert_eq!(line_step(A1, B3), None);
    }
}
