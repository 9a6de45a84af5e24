/// Returns `terms` in display order.
///
/// Without sorting the input order is kept. With sorting, terms are compared
/// by their lowercase form and equal keys keep their relative input order.
pub fn ordered_terms<'a, I>(terms: I, sort_alphabetically: bool) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ordered: Vec<&str> = terms.into_iter().collect();
    if sort_alphabetically {
        ordered.sort_by_cached_key(|term| term.to_lowercase());
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(ordered_terms(Vec::<&str>::new(), true).is_empty());
    }

    #[test]
    fn unsorted_keeps_insertion_order() {
        assert_eq!(
            ordered_terms(["Ohio", "Cleveland"], false),
            vec!["Ohio", "Cleveland"]
        );
    }

    #[test]
    fn sorted_is_alphabetical() {
        assert_eq!(
            ordered_terms(["Ohio", "Cleveland"], true),
            vec!["Cleveland", "Ohio"]
        );
    }

    #[test]
    fn sorting_ignores_case() {
        assert_eq!(
            ordered_terms(["banana", "Cherry", "apple"], true),
            vec!["apple", "banana", "Cherry"]
        );
    }

    #[test]
    fn case_ties_keep_insertion_order() {
        assert_eq!(
            ordered_terms(["ohio", "OHIO", "Ohio"], true),
            vec!["ohio", "OHIO", "Ohio"]
        );
        assert_eq!(ordered_terms(["Ohio", "ohio"], true), vec!["Ohio", "ohio"]);
    }
}
