//! Registry of literal punctuation symbols with longest-match lookup.
//!
//! Entries keep their registration order. Lookup goes through a
//! first-byte index so only candidates that can possibly match are
//! compared, then picks the longest full match. Ties (identical literals)
//! go to the entry registered first, which makes later duplicates
//! unreachable; [`PunctuationTable::shadowed`] lists them.

use std::collections::TryReserveError;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Errors returned while building a [`PunctuationTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A punctuation literal must contain at least one byte.
    #[error("punctuation literal for id {id} is empty")]
    EmptyLiteral { id: i32 },
    /// Storage for the new entry could not be allocated.
    #[error("punctuation table cannot grow: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

/// A registered punctuation literal and its caller-chosen ID.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PunctuationEntry {
    literal: Box<[u8]>,
    id: i32,
}

impl PunctuationEntry {
    /// The literal bytes (never empty).
    #[inline]
    pub fn literal(&self) -> &[u8] {
        &self.literal
    }

    /// The ID passed to [`PunctuationTable::add`].
    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Length of the literal in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.literal.len()
    }
}

/// An entry that can never be matched because an identical literal was
/// registered before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shadowed {
    /// Registration index of the unreachable entry.
    pub index: usize,
    /// Registration index of the earlier entry that always wins.
    pub shadowed_by: usize,
}

/// Ordered set of punctuation literals, reusable across many scans.
#[derive(Clone, Debug)]
pub struct PunctuationTable {
    entries: Vec<PunctuationEntry>,
    /// `by_first[b]` holds indices of entries whose literal starts with `b`,
    /// in registration order.
    by_first: Vec<SmallVec<[usize; 2]>>,
}

impl Default for PunctuationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PunctuationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        PunctuationTable {
            entries: Vec::new(),
            by_first: vec![SmallVec::new(); 256],
        }
    }

    /// Build a table from `(literal, id)` pairs in order.
    pub fn with_entries<I, L>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (L, i32)>,
        L: AsRef<[u8]>,
    {
        let mut table = Self::new();
        for (literal, id) in entries {
            table.add(literal, id)?;
        }
        Ok(table)
    }

    /// Append a literal with its ID.
    ///
    /// Duplicate literals are accepted; the first one registered wins every
    /// match.
    pub fn add(&mut self, literal: impl AsRef<[u8]>, id: i32) -> Result<(), TableError> {
        let literal = literal.as_ref();
        let Some(&first) = literal.first() else {
            return Err(TableError::EmptyLiteral { id });
        };

        let mut owned = Vec::new();
        owned.try_reserve_exact(literal.len())?;
        owned.extend_from_slice(literal);
        self.entries.try_reserve(1)?;

        let index = self.entries.len();
        self.entries.push(PunctuationEntry {
            literal: owned.into_boxed_slice(),
            id,
        });
        self.by_first[usize::from(first)].push(index);
        Ok(())
    }

    /// Number of registered entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at registration index `index`.
    pub fn get(&self, index: usize) -> Option<&PunctuationEntry> {
        self.entries.get(index)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PunctuationEntry> {
        self.entries.iter()
    }

    /// First registered entry whose literal equals `literal`.
    pub fn find(&self, literal: impl AsRef<[u8]>) -> Option<&PunctuationEntry> {
        let literal = literal.as_ref();
        let first = *literal.first()?;
        self.by_first[usize::from(first)]
            .iter()
            .map(|&index| &self.entries[index])
            .find(|entry| entry.literal() == literal)
    }

    /// Returns `true` if any registered literal starts with `byte`.
    #[inline]
    pub fn starts_with_byte(&self, byte: u8) -> bool {
        !self.by_first[usize::from(byte)].is_empty()
    }

    /// Longest entry whose literal matches `buffer` at `offset`.
    ///
    /// Among entries of equal length the first registered wins. Returns
    /// `None` at or past the end of `buffer`.
    pub fn match_longest(&self, buffer: &[u8], offset: usize) -> Option<&PunctuationEntry> {
        let rest = buffer.get(offset..)?;
        let &first = rest.first()?;

        let mut best: Option<&PunctuationEntry> = None;
        for &index in &self.by_first[usize::from(first)] {
            let entry = &self.entries[index];
            if !rest.starts_with(entry.literal()) {
                continue;
            }
            match best {
                Some(current) if current.byte_len() >= entry.byte_len() => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// Entries that can never match, with the entry that shadows each.
    pub fn shadowed(&self) -> Vec<Shadowed> {
        let mut first_seen: FxHashMap<&[u8], usize> = FxHashMap::default();
        let mut shadowed = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            match first_seen.get(entry.literal()) {
                Some(&shadowed_by) => shadowed.push(Shadowed { index, shadowed_by }),
                None => {
                    first_seen.insert(entry.literal(), index);
                }
            }
        }
        shadowed
    }
}

impl<'a> IntoIterator for &'a PunctuationTable {
    type Item = &'a PunctuationEntry;
    type IntoIter = std::slice::Iter<'a, PunctuationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
