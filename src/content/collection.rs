//! Collections of content objects owned by the application.
//!
//! A source only holds a shared handle to its collection. Every page is
//! sliced from the collection's current state, so an application that
//! mutates a [`SharedCollection`] sees the change on the next render.

use super::ContentObject;
use parking_lot::RwLock;
use std::ops::Range;
use std::sync::Arc;

/// Live collection of content objects for a source.
pub type SharedCollection = RwLock<Vec<Arc<dyn ContentObject>>>;

/// Read access to an ordered set of content objects.
pub trait ContentCollection: Send + Sync {
    /// Total number of objects.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Objects in `range`, in collection order. Out-of-bounds parts are cut.
    fn slice(&self, range: Range<usize>) -> Vec<Arc<dyn ContentObject>>;
}

impl ContentCollection for Vec<Arc<dyn ContentObject>> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn slice(&self, range: Range<usize>) -> Vec<Arc<dyn ContentObject>> {
        clamp(range, Vec::len(self))
            .map(|r| self[r].to_vec())
            .unwrap_or_default()
    }
}

impl ContentCollection for SharedCollection {
    fn len(&self) -> usize {
        self.read().len()
    }

    fn slice(&self, range: Range<usize>) -> Vec<Arc<dyn ContentObject>> {
        let items = self.read();
        clamp(range, items.len())
            .map(|r| items[r].to_vec())
            .unwrap_or_default()
    }
}

#[inline]
fn clamp(range: Range<usize>, len: usize) -> Option<Range<usize>> {
    let end = range.end.min(len);
    (range.start < end).then_some(range.start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::Record;

    fn records(n: usize) -> Vec<Arc<dyn ContentObject>> {
        (0..n)
            .map(|i| Arc::new(Record::at(&format!("/{i}/"))) as Arc<dyn ContentObject>)
            .collect()
    }

    #[test]
    fn test_vec_slice_in_order() {
        let items = records(5);
        let page = items.slice(1..3);
        let paths: Vec<_> = page.iter().filter_map(|o| o.absolute_path()).collect();
        assert_eq!(paths, vec!["/1/", "/2/"]);
    }

    #[test]
    fn test_vec_slice_clamps() {
        let items = records(3);
        assert_eq!(items.slice(2..10).len(), 1);
        assert!(items.slice(5..10).is_empty());
        assert!(ContentCollection::is_empty(&records(0)));
    }

    #[test]
    fn test_shared_collection_reflects_mutation() {
        let shared: SharedCollection = RwLock::new(records(2));
        assert_eq!(ContentCollection::len(&shared), 2);

        shared.write().push(Arc::new(Record::at("/new/")));
        let page = shared.slice(0..10);
        assert_eq!(page.len(), 3);
        assert_eq!(page[2].absolute_path().as_deref(), Some("/new/"));
    }
}
