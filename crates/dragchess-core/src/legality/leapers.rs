//! Knight and king movement.

use super::Probe;

/// L-shaped jump. Intervening squares are never inspected.
pub(super) fn knight(p: &Probe<'_>) -> bool {
    matches!((p.dc(), p.dr()), (1, 2) | (2, 1))
}

/// One step in any direction.
pub(super) fn king(p: &Probe<'_>) -> bool {
    p.dc() <= 1 && p.dr() <= 1 && p.path_is_clear()
}
