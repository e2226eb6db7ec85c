//! Pawn movement: forward pushes and diagonal captures.

use super::Probe;

pub(super) fn pawn(p: &Probe<'_>) -> bool {
    let team = p.mover.team();
    if p.row_delta().signum() != team.forward() {
        return false;
    }

    match p.target {
        None => {
            let double = p.dr() == 2 && p.origin.row() == team.home_rank();
            p.dc() == 0 && (p.dr() == 1 || double) && p.path_is_clear()
        }
        Some(_) => p.dc() == 1 && p.dr() == 1,
    }
}
