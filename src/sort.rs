use crate::store::TermStore;

/// Terms in ascending ordinal order (codepoint order, so `"Apple" < "apple"`).
pub fn sorted_terms(store: &TermStore) -> Vec<&str> {
    sort_terms(store.terms())
}

pub fn sort_terms<'a, I>(terms: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<&str> = terms.into_iter().collect();
    // Terms are unique, so an unstable sort is still deterministic.
    sorted.sort_unstable();
    sorted
}
