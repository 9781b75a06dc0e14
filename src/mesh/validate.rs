use itertools::Itertools;
use std::collections::HashMap;

/// Edge usage counts of a triangle list. A closed, consistently oriented surface uses every
/// undirected edge exactly twice and every directed edge exactly once (its twin runs the other
/// way in the neighboring triangle).
pub struct EdgeReport {
    undirected: HashMap<(usize, usize), usize>,
    directed: HashMap<(usize, usize), usize>,
}

impl EdgeReport {
    pub fn from_triangles(triangles: &[[usize; 3]]) -> EdgeReport {
        let directed = triangles
            .iter()
            .flat_map(|t| t.iter().copied().circular_tuple_windows::<(usize, usize)>())
            .counts();

        let mut undirected = HashMap::with_capacity(directed.len() / 2 + 1);
        for (&(a, b), &count) in directed.iter() {
            *undirected.entry((a.min(b), a.max(b))).or_insert(0) += count;
        }

        EdgeReport {
            undirected,
            directed,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.undirected.len()
    }

    /// Undirected edges not shared by exactly two triangles, sorted
    pub fn open_edges(&self) -> Vec<(usize, usize)> {
        self.undirected
            .iter()
            .filter(|(_, &c)| c != 2)
            .map(|(&e, _)| e)
            .sorted()
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        self.undirected.values().all(|&c| c == 2)
    }

    pub fn is_consistently_oriented(&self) -> bool {
        self.directed.values().all(|&c| c == 1)
    }
}
