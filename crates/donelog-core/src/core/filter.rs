/// Keep the items matching `predicate`, preserving their relative order.
///
/// Pure; applying it twice yields the same sequence as applying it once.
pub fn retain_matching<T, P>(items: Vec<T>, mut predicate: P) -> Vec<T>
where
    P: FnMut(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}
