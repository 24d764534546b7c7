use super::*;
use crate::ClusterId;
use std::collections::BTreeMap;

/// Classified records grouped by cluster id, in record order within a group.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Partition(BTreeMap<ClusterId, Vec<Classified>>);

impl Partition {
    pub fn get(&self, cluster: ClusterId) -> &[Classified] {
        self.0.get(&cluster).map(Vec::as_slice).unwrap_or(&[])
    }
    pub fn ids(&self) -> impl Iterator<Item = &ClusterId> {
        self.0.keys()
    }
    /// total records across all clusters
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn insert(&mut self, record: Classified) {
        let (cluster, record): (ClusterId, Classified) = record.into();
        self.0.entry(cluster).or_default().push(record);
    }
}

impl FromIterator<Classified> for Partition {
    fn from_iter<I: IntoIterator<Item = Classified>>(iter: I) -> Self {
        let mut partition = Self::default();
        iter.into_iter().for_each(|r| partition.insert(r));
        partition
    }
}

impl From<Vec<Classified>> for Partition {
    fn from(records: Vec<Classified>) -> Self {
        records.into_iter().collect()
    }
}
