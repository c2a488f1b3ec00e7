//! Covering a bag with hyperedges.
use crate::error::SetCoverError;
use crate::hypergraph::{Hyperedge, Vertex};
use crate::sorted;

/// Finds a small subset of `available` hyperedges whose vertices include every `target` vertex.
pub trait SetCoverAlgorithm: Send + Sync {
    /// `target` is sorted and duplicate-free. The returned edges must cover it.
    fn compute_set_cover(
        &self,
        target: &[Vertex],
        available: &[Hyperedge],
    ) -> Result<Vec<Hyperedge>, SetCoverError>;
}

/// Greedy set cover followed by redundancy pruning.
///
/// Repeatedly picks the hyperedge covering the most still-uncovered vertices (the earliest on
/// ties), then drops every chosen edge the others already make unnecessary. The result is
/// inclusion-minimal, though not necessarily of minimum size.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySetCover;

impl SetCoverAlgorithm for GreedySetCover {
    fn compute_set_cover(
        &self,
        target: &[Vertex],
        available: &[Hyperedge],
    ) -> Result<Vec<Hyperedge>, SetCoverError> {
        if target.is_empty() {
            return Ok(Vec::new());
        }

        let edges: Vec<Vec<Vertex>> = available.iter().map(Hyperedge::sorted_vertices).collect();
        let mut uncovered = target.to_vec();
        let mut chosen: Vec<usize> = Vec::new();

        while let Some(&first_uncovered) = uncovered.first() {
            let mut best: Option<(usize, usize)> = None;
            for (i, edge) in edges.iter().enumerate() {
                let gain = sorted::intersection_size(&uncovered, edge);
                if gain > best.map_or(0, |(_, g)| g) {
                    best = Some((i, gain));
                }
            }
            let Some((i, _)) = best else {
                return Err(SetCoverError::Uncoverable {
                    vertex: first_uncovered,
                });
            };
            uncovered = sorted::difference(&uncovered, &edges[i]);
            chosen.push(i);
        }

        let mut k = 0;
        while k < chosen.len() {
            let others = chosen
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != k)
                .fold(Vec::new(), |acc, (_, &i)| sorted::union(&acc, &edges[i]));
            if sorted::is_subset(target, &others) {
                chosen.remove(k);
            } else {
                k += 1;
            }
        }

        chosen.sort_unstable();
        Ok(chosen.into_iter().map(|i| available[i].clone()).collect())
    }
}

/// The first vertex of `target` that `cover` misses, if any.
pub(crate) fn first_uncovered(target: &[Vertex], cover: &[Hyperedge]) -> Option<Vertex> {
    let covered = cover
        .iter()
        .fold(Vec::new(), |acc, edge| sorted::union(&acc, &edge.sorted_vertices()));
    sorted::difference(target, &covered).first().copied()
}
