//! Rook, bishop, and queen movement.

use super::Probe;

fn straight(p: &Probe<'_>) -> bool {
    (p.dc() > 0 && p.dr() == 0) || (p.dc() == 0 && p.dr() > 0)
}

fn diagonal(p: &Probe<'_>) -> bool {
    p.dc() == p.dr() && p.dc() > 0
}

pub(super) fn rook(p: &Probe<'_>) -> bool {
    straight(p) && p.path_is_clear()
}

pub(super) fn bishop(p: &Probe<'_>) -> bool {
    diagonal(p) && p.path_is_clear()
}

pub(super) fn queen(p: &Probe<'_>) -> bool {
    (straight(p) || diagonal(p)) && p.path_is_clear()
}
