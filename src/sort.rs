use std::collections::BTreeMap;

use log::debug;

use crate::errors::Error;
use crate::graph::{successors, Edge};
use crate::topology;

/// Find every strongly connected component reachable from `vertices` and
/// return them dependencies-first: for every edge whose endpoints land in
/// different components, the depended-upon component comes no later than the
/// depending one. A vertex mentioned only by an edge is included in the
/// result even when absent from `vertices`.
///
/// The order of vertices within a single component is unspecified.
pub fn find_and_sort_components<T>(vertices: &[T], edges: &[Edge<T>]) -> Vec<Vec<T>>
where
    T: Eq + Ord + Clone,
{
    debug!("sorting components of {} vertices and {} edges", vertices.len(), edges.len());

    let graph = successors(edges);
    let components = topology::find(vertices, &graph);

    components.into_iter().map(|component| component.into_iter().cloned().collect()).collect()
}

/// Like [`find_and_sort_components`], but over arbitrary source objects
/// projected to comparable vertex keys. The returned components hold the
/// source objects themselves, in the same order their keys were emitted.
///
/// Fails with [`Error::DuplicateKey`] if two source objects project to equal
/// keys. A key reachable via edges that no source object projects to is
/// dropped when mapping back; a component emptied this way is omitted.
pub fn find_and_sort_components_by_key<S, T, F>(
    sources: &[S],
    key: F,
    edges: &[Edge<T>],
) -> Result<Vec<Vec<S>>, Error>
where
    S: Clone,
    T: Eq + Ord + Clone,
    F: Fn(&S) -> T,
{
    let (vertices, backrefs) = project(sources, key)?;
    let components = find_and_sort_components(&vertices, edges);

    Ok(components
        .into_iter()
        .filter_map(|component| {
            let component: Vec<S> = component
                .iter()
                .filter_map(|vertex| backrefs.get(vertex).map(|&source| source.clone()))
                .collect();
            (!component.is_empty()).then_some(component)
        })
        .collect())
}

/// Sort `vertices` so that every vertex comes after all of its dependencies,
/// failing with [`Error::Cycles`] if the graph has any component of more
/// than one vertex.
pub fn topological_sort<T>(vertices: &[T], edges: &[Edge<T>]) -> Result<Vec<T>, Error>
where
    T: Eq + Ord + Clone,
{
    flatten(find_and_sort_components(vertices, edges))
}

/// Like [`topological_sort`], but over arbitrary source objects projected to
/// comparable vertex keys, with the same duplicate-key and unprojected-key
/// behavior as [`find_and_sort_components_by_key`]. Cycles are detected on
/// the projected keys, so a cycle passing through an unprojected key still
/// fails.
pub fn topological_sort_by_key<S, T, F>(
    sources: &[S],
    key: F,
    edges: &[Edge<T>],
) -> Result<Vec<S>, Error>
where
    S: Clone,
    T: Eq + Ord + Clone,
    F: Fn(&S) -> T,
{
    let (vertices, backrefs) = project(sources, key)?;
    let order = topological_sort(&vertices, edges)?;

    Ok(order
        .iter()
        .filter_map(|vertex| backrefs.get(vertex).map(|&source| source.clone()))
        .collect())
}

/// Project every source object to its vertex key, keeping a backreference
/// from each key to the object it came from. Fails if two objects project to
/// equal keys, since mapping sorted keys back would then be ambiguous.
fn project<S, T, F>(sources: &[S], key: F) -> Result<(Vec<T>, BTreeMap<T, &S>), Error>
where
    T: Eq + Ord + Clone,
    F: Fn(&S) -> T,
{
    let mut vertices = Vec::with_capacity(sources.len());
    let mut backrefs = BTreeMap::new();

    for source in sources {
        let vertex = key(source);
        if backrefs.insert(vertex.clone(), source).is_some() {
            return Err(Error::DuplicateKey);
        }

        vertices.push(vertex);
    }

    Ok((vertices, backrefs))
}

/// Flatten a component list into a plain vertex sequence, failing if any
/// component holds more than one vertex.
fn flatten<T>(components: Vec<Vec<T>>) -> Result<Vec<T>, Error> {
    let mut order = Vec::with_capacity(components.len());
    for mut component in components {
        if component.len() > 1 {
            return Err(Error::Cycles);
        }

        order.extend(component.pop());
    }

    Ok(order)
}
