//! Row selection and its reconciliation against the visible view.

use std::collections::HashSet;

use crate::model::Contact;

/// The set of selected rows in the contacts table.
///
/// Selection is either the `All` sentinel (interpreted by the caller as
/// "every record currently visible", not a fixed snapshot) or an
/// explicit set of record identifiers. Modelling the sentinel as its
/// own variant keeps the short-circuit in [`reconcile`](Self::reconcile)
/// explicit and exhaustively checked.
///
/// # Example
///
/// ```
/// use carebook_lib::view::Selection;
///
/// let selection: Selection = ["1", "2"].into_iter().collect();
/// assert!(selection.contains("1"));
/// assert_eq!(selection.count(), Some(2));
/// assert_eq!(Selection::All.count(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every currently visible record is selected.
    All,
    /// An explicit set of selected record identifiers.
    Ids(HashSet<String>),
}

impl Selection {
    /// Creates an empty explicit selection.
    pub fn none() -> Self {
        Selection::Ids(HashSet::new())
    }

    /// Returns `true` if the given identifier is selected.
    ///
    /// `All` reports every identifier as selected; whether that
    /// identifier is actually visible is the caller's context.
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Ids(ids) => ids.contains(id),
        }
    }

    /// Returns the number of explicitly selected identifiers, or `None`
    /// for the `All` sentinel (whose size depends on the visible view).
    pub fn count(&self) -> Option<usize> {
        match self {
            Selection::All => None,
            Selection::Ids(ids) => Some(ids.len()),
        }
    }

    /// Prunes this selection against the currently visible rows.
    ///
    /// `All` passes through unchanged, whatever the view contains. An
    /// explicit set is intersected with the identifiers present in
    /// `visible`: rows a filter removed from view drop out of the
    /// derived selection, and rows that re-enter visibility are not
    /// re-added. This is read-only pruning of a derived value; the
    /// caller's underlying selection store is untouched and must be
    /// reconciled again whenever the view changes.
    pub fn reconcile(&self, visible: &[Contact]) -> Selection {
        match self {
            Selection::All => Selection::All,
            Selection::Ids(ids) => {
                let visible_ids: HashSet<&str> = visible.iter().map(Contact::id).collect();
                Selection::Ids(
                    ids.iter()
                        .filter(|id| visible_ids.contains(id.as_str()))
                        .cloned()
                        .collect(),
                )
            }
        }
    }
}

impl FromIterator<String> for Selection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Selection::Ids(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for Selection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Selection::Ids(iter.into_iter().map(str::to_string).collect())
    }
}

impl From<HashSet<String>> for Selection {
    fn from(ids: HashSet<String>) -> Self {
        Selection::Ids(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: &[&str]) -> Vec<Contact> {
        ids.iter().map(|id| Contact::new(*id)).collect()
    }

    #[test]
    fn test_prunes_to_visible_ids() {
        let selection: Selection = ["1", "2", "3"].into_iter().collect();
        let visible = rows(&["2", "3", "4"]);
        let pruned = selection.reconcile(&visible);
        assert_eq!(pruned, ["2", "3"].into_iter().collect());
    }

    #[test]
    fn test_result_is_subset_of_both_inputs() {
        let selection: Selection = ["1", "5"].into_iter().collect();
        let visible = rows(&["2", "3"]);
        let pruned = selection.reconcile(&visible);
        assert_eq!(pruned.count(), Some(0));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let selection: Selection = ["1", "2", "3"].into_iter().collect();
        let visible = rows(&["1", "3"]);
        let once = selection.reconcile(&visible);
        let twice = once.reconcile(&visible);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_all_sentinel_passes_through() {
        let visible = rows(&["1", "2"]);
        assert_eq!(Selection::All.reconcile(&visible), Selection::All);
        assert_eq!(Selection::All.reconcile(&[]), Selection::All);
    }

    #[test]
    fn test_pruned_ids_are_not_restored() {
        let selection: Selection = ["1", "2"].into_iter().collect();
        let narrowed = selection.reconcile(&rows(&["1"]));
        // "2" left the view and was pruned; when it comes back it is
        // not re-added to the derived selection.
        let restored = narrowed.reconcile(&rows(&["1", "2"]));
        assert_eq!(restored, ["1"].into_iter().collect());
    }

    #[test]
    fn test_contains_and_count() {
        let selection: Selection = ["1"].into_iter().collect();
        assert!(selection.contains("1"));
        assert!(!selection.contains("2"));
        assert!(Selection::All.contains("anything"));
        assert_eq!(Selection::none().count(), Some(0));
    }
}
