/// Paint layer. Higher layers are drawn over lower ones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const fn new(layer: i32) -> Self {
        Self(layer)
    }
}

/// Position of an item in paint order: layer first, then recording order.
///
/// Field order matters, the derived `Ord` compares `z` before `seq`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PaintKey {
    pub z: ZIndex,
    pub seq: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_dominates_sequence() {
        let back = PaintKey { z: ZIndex::new(0), seq: 9 };
        let front = PaintKey { z: ZIndex::new(1), seq: 0 };
        assert!(back < front);
    }

    #[test]
    fn sequence_breaks_ties() {
        let a = PaintKey { z: ZIndex::new(2), seq: 1 };
        let b = PaintKey { z: ZIndex::new(2), seq: 2 };
        assert!(a < b);
    }
}
