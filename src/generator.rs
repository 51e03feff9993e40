use crate::piece::{Piece, PieceKind};

/// Deterministic piece source: a monotonically increasing id counter plus
/// the fixed kind cycle.
///
/// Ids are never reset and never reused, so a piece id identifies one piece
/// for the lifetime of the controller that owns this generator. Counter
/// overflow is not handled; `u64` outlives any realistic session.
#[derive(Debug)]
pub struct PieceGenerator {
    next_id: u64,
}

impl PieceGenerator {
    /// Creates a generator starting from id 0.
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Produces the next piece and advances the counter.
    ///
    /// The kind is taken from the cycle at the pre-increment id, so ids
    /// 0, 1, 2, 3, 4 come out as T, O, L, I, T.
    pub fn generate(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(PieceKind::for_id(id), id)
    }

    /// The id the next call to [`generate`](Self::generate) will assign.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = PieceGenerator::new();
        assert_eq!(gen.generate().id(), 0);
        assert_eq!(gen.generate().id(), 1);
        assert_eq!(gen.generate().id(), 2);
        assert_eq!(gen.peek_next_id(), 3);
    }

    #[test]
    fn test_kinds_follow_cycle() {
        let mut gen = PieceGenerator::new();
        let kinds: Vec<PieceKind> = (0..6).map(|_| gen.generate().kind()).collect();
        assert_eq!(
            kinds,
            vec![
                PieceKind::T,
                PieceKind::O,
                PieceKind::L,
                PieceKind::I,
                PieceKind::T,
                PieceKind::O,
            ]
        );
    }

    #[test]
    fn test_ids_never_reused() {
        let mut gen = PieceGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(gen.generate().id()));
        }
    }
}
