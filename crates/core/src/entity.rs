//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Nodes of an offer tree are entities: two options with the same id are the
/// same option even when their other attributes differ, which is what the
/// direct-child add/update/remove operations key on.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Position of the entity with `id` in `items`, if any.
pub fn position_of<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Ids occurring more than once in `ids`, sorted and deduplicated.
pub fn duplicated_ids<I>(ids: impl IntoIterator<Item = I>) -> Vec<I>
where
    I: Copy + Ord,
{
    let mut sorted: Vec<I> = ids.into_iter().collect();
    sorted.sort_unstable();

    let mut duplicated: Vec<I> = sorted
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect();
    duplicated.dedup();
    duplicated
}
