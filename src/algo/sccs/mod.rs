/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components.

mod tarjan;
pub use tarjan::*;

/// The strongly connected components of a graph.
///
/// Components are numbered from zero in the order in which they have been
/// emitted by the algorithm that computed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    component: Box<[usize]>,
    members: Vec<Vec<usize>>,
}

impl Sccs {
    /// Creates a new instance from the component of each node and the list of
    /// members of each component.
    ///
    /// # Panics
    ///
    /// Panics if the number of member lists differs from `num_components`.
    pub fn new(num_components: usize, component: Box<[usize]>, members: Vec<Vec<usize>>) -> Self {
        assert_eq!(num_components, members.len());
        Sccs {
            num_components,
            component,
            members,
        }
    }

    /// The number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// The component index of each node.
    pub fn component(&self) -> &[usize] {
        &self.component
    }

    /// The nodes of each component, in the order in which they were assigned.
    pub fn members(&self) -> &[Vec<usize>] {
        &self.members
    }

    /// Returns the size array for this set of strongly connected components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.component() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }
}
