//! Party size to table count lookup.

use crate::reservation::PartySize;

/// One row of the bucket table: parties of `min..=max` people take `tables` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBucket {
    /// Smallest party in the bucket.
    pub min: u16,
    /// Largest party in the bucket.
    pub max: u16,
    /// Whole tables a party of this size occupies.
    pub tables: u16,
}

impl TableBucket {
    /// Returns `true` if a party of `people` falls in this bucket.
    #[must_use]
    pub const fn contains(&self, people: u16) -> bool {
        people >= self.min && people <= self.max
    }
}

/// Lookup table mapping party sizes to the whole tables they occupy.
///
/// A reservation never shares a table with another one, so a party takes
/// `ceil(people / table_capacity)` tables.
///
/// # Examples
///
/// ```
/// use tablebook::availability::TableBuckets;
/// use tablebook::PartySize;
///
/// let buckets = TableBuckets::new(4, 4);
/// assert_eq!(buckets.tables_for(PartySize::try_from(4).unwrap()), 1);
/// assert_eq!(buckets.tables_for(PartySize::try_from(5).unwrap()), 2);
/// assert_eq!(buckets.tables_for(PartySize::try_from(16).unwrap()), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBuckets {
    buckets: Vec<TableBucket>,
}

impl TableBuckets {
    /// Builds the table for `tables` tables of `table_capacity` seats.
    ///
    /// For the default restaurant this yields 1-4 -> 1, 5-8 -> 2,
    /// 9-12 -> 3 and 13-16 -> 4.
    #[must_use]
    pub fn new(tables: u16, table_capacity: u16) -> Self {
        let buckets = (1..=tables)
            .map(|k| TableBucket {
                min: (k - 1).saturating_mul(table_capacity).saturating_add(1),
                max: k.saturating_mul(table_capacity),
                tables: k,
            })
            .collect();
        Self { buckets }
    }

    /// Builds a table from explicit rows.
    #[must_use]
    pub fn from_buckets(buckets: Vec<TableBucket>) -> Self {
        Self { buckets }
    }

    /// Returns the rows of the table.
    #[must_use]
    pub fn buckets(&self) -> &[TableBucket] {
        &self.buckets
    }

    /// Tables occupied by a party; 0 for a size no bucket covers.
    #[must_use]
    pub fn tables_for(&self, people: PartySize) -> u16 {
        self.buckets
            .iter()
            .find(|bucket| bucket.contains(people.value()))
            .map_or(0, |bucket| bucket.tables)
    }
}
