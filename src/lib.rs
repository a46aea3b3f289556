//! Dependency-ordered strongly connected components.
//!
//! A directed graph is supplied as a vertex collection plus [`Edge`] records,
//! where an edge means its `from` vertex depends on its `to` vertex.
//! [`find_and_sort_components`] collapses every cycle into a single component
//! and returns the components dependencies-first; [`topological_sort`]
//! instead insists the graph is acyclic and returns a flat ordering. The
//! `_by_key` variants sort arbitrary objects by projecting them to comparable
//! vertex keys.

pub mod errors;
pub mod graph;
pub mod sort;

mod topology;

pub use errors::Error;
pub use graph::Edge;
pub use sort::{
    find_and_sort_components, find_and_sort_components_by_key, topological_sort,
    topological_sort_by_key,
};
