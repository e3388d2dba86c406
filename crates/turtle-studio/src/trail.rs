//! Append-only store of drawn segments.

use std::fmt;

use turtle_engine::coords::Vec2;

use crate::palette::Rgb;

/// One straight piece of trail. The color is a snapshot taken when the
/// segment was recorded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgb,
}

/// Failure to grow the trail.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TrailError {
    /// The allocator refused room for `requested` segments.
    OutOfMemory { requested: usize },
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailError::OutOfMemory { requested } => {
                write!(f, "out of memory growing trail to {requested} segments")
            }
        }
    }
}

impl std::error::Error for TrailError {}

/// Ordered, append-only collection of segments.
///
/// Insertion order is render order. Storage starts at the configured
/// capacity and doubles whenever it fills up; allocation failure is reported
/// instead of aborting.
#[derive(Debug, Clone)]
pub struct Trail {
    segments: Vec<Segment>,
    initial_capacity: usize,
}

impl Trail {
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            segments: Vec::new(),
            initial_capacity: initial_capacity.max(1),
        }
    }

    /// Appends a segment, growing storage first when it is full.
    pub fn append(&mut self, segment: Segment) -> Result<(), TrailError> {
        if self.segments.len() == self.segments.capacity() {
            let additional = match self.segments.capacity() {
                0 => self.initial_capacity,
                cap => cap,
            };
            self.segments
                .try_reserve_exact(additional)
                .map_err(|_| TrailError::OutOfMemory {
                    requested: self.segments.len() + additional,
                })?;
            log::debug!("trail storage grown to {}", self.capacity());
        }

        self.segments.push(segment);
        Ok(())
    }

    /// Segments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn capacity(&self) -> usize {
        self.segments.capacity()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;

    fn seg(i: usize) -> Segment {
        let x = i as f32;
        Segment {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x + 1.0, 0.0),
            color: PaletteColor::Black.rgb(),
        }
    }

    #[test]
    fn first_append_reserves_initial_capacity() {
        let mut trail = Trail::new(50);
        assert_eq!(trail.capacity(), 0);
        trail.append(seg(0)).unwrap();
        assert!(trail.capacity() >= 50);
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut trail = Trail::new(4);
        for i in 0..4 {
            trail.append(seg(i)).unwrap();
        }
        let full = trail.capacity();
        assert_eq!(trail.len(), full);

        trail.append(seg(4)).unwrap();
        assert!(trail.capacity() >= full * 2);
    }

    #[test]
    fn iteration_follows_insertion_order_and_restarts() {
        let mut trail = Trail::new(2);
        for i in 0..5 {
            trail.append(seg(i)).unwrap();
        }

        let first: Vec<f32> = trail.iter().map(|s| s.from.x).collect();
        let second: Vec<f32> = (&trail).into_iter().map(|s| s.from.x).collect();
        assert_eq!(first, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_capacity_still_grows() {
        let mut trail = Trail::new(0);
        trail.append(seg(0)).unwrap();
        trail.append(seg(1)).unwrap();
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn error_message_names_requested_size() {
        let err = TrailError::OutOfMemory { requested: 100 };
        assert_eq!(err.to_string(), "out of memory growing trail to 100 segments");
    }
}
