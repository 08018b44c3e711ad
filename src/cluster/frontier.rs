use std::{cmp::Ordering, collections::BinaryHeap};

/// A proposal to add `unit` to `district`, ranked by `distance`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Candidate {
    pub distance: f64,
    pub district: usize,
    pub unit: usize,
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    distance: f64,
    district: u32,
    unit: u32,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so the smallest distance pops first; ties go to the lower
        // district id, then the lower unit index. NaN distances sort last.
        other.distance.total_cmp(&self.distance)
            .then_with(|| other.district.cmp(&self.district))
            .then_with(|| other.unit.cmp(&self.unit))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Entry {}

/// Global min-priority queue of candidates shared by all districts.
///
/// Entries are never removed when their unit is assigned elsewhere; callers
/// skip stale entries on pop.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub(crate) fn new() -> Self { Self::default() }

    #[inline]
    pub(crate) fn push(&mut self, distance: f64, district: usize, unit: usize) {
        self.heap.push(Entry { distance, district: district as u32, unit: unit as u32 });
    }

    /// Remove and return the lowest-distance candidate.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Entry { distance, district, unit }| {
            Candidate { distance, district: district as usize, unit: unit as usize }
        })
    }

    #[inline] pub(crate) fn len(&self) -> usize { self.heap.len() }
}
