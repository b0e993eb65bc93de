//! Edit scripts between successive garden lists.
//!
//! Items are matched by planting id. Matched items keep their place when
//! possible: the kept set is the longest common subsequence of ids, so the
//! script holds as few inserts and removes as the two orders allow. An item
//! that changed position shows up as a remove followed by an insert.

use crate::domain::AggregatedPlanting;
use crate::error::EditError;
use serde::Serialize;

/// One step of an edit script. Steps are applied in order, and each index
/// refers to the list as left by the previous step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ListEdit {
    Insert {
        index: usize,
        item: AggregatedPlanting,
    },
    Remove {
        index: usize,
    },
    Update {
        index: usize,
        item: AggregatedPlanting,
    },
}

/// What counts as a content change for a matched item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentEquality {
    /// Every field, including dates and derived care state. Watering a plant
    /// produces an update for its row.
    #[default]
    Structural,

    /// Only the catalog fields shown on a card: name, description and image.
    /// Watering changes produce no update, so rows applied from this script
    /// keep their old care state.
    CatalogFields,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListDiffer {
    equality: ContentEquality,
}

impl ListDiffer {
    pub fn new(equality: ContentEquality) -> Self {
        Self { equality }
    }

    pub fn same_item(&self, old: &AggregatedPlanting, new: &AggregatedPlanting) -> bool {
        old.planting_id() == new.planting_id()
    }

    pub fn same_content(&self, old: &AggregatedPlanting, new: &AggregatedPlanting) -> bool {
        match self.equality {
            ContentEquality::Structural => old == new,
            ContentEquality::CatalogFields => {
                old.plant.name == new.plant.name
                    && old.plant.description == new.plant.description
                    && old.plant.image_url == new.plant.image_url
            }
        }
    }

    /// Edits turning `old` into `new`: removals from the back first, then
    /// inserts and updates from the front.
    pub fn diff(&self, old: &[AggregatedPlanting], new: &[AggregatedPlanting]) -> Vec<ListEdit> {
        let matches = self.matching(old, new);

        let mut kept_old = vec![false; old.len()];
        let mut source_of = vec![None; new.len()];
        for &(i, j) in &matches {
            kept_old[i] = true;
            source_of[j] = Some(i);
        }

        let mut edits = Vec::new();
        for index in (0..old.len()).rev().filter(|&i| !kept_old[i]) {
            edits.push(ListEdit::Remove { index });
        }

        // From here on the working list is new[..index] followed by the
        // remaining matched old items, so every index lines up with `new`.
        for (index, item) in new.iter().enumerate() {
            match source_of[index] {
                Some(i) if self.same_content(&old[i], item) => {}
                Some(_) => edits.push(ListEdit::Update {
                    index,
                    item: item.clone(),
                }),
                None => edits.push(ListEdit::Insert {
                    index,
                    item: item.clone(),
                }),
            }
        }
        edits
    }

    /// Index pairs of the longest common subsequence of ids, in order.
    fn matching(&self, old: &[AggregatedPlanting], new: &[AggregatedPlanting]) -> Vec<(usize, usize)> {
        let (n, m) = (old.len(), new.len());
        let width = m + 1;
        // lengths[i * width + j] = LCS length of old[i..] and new[j..]
        let mut lengths = vec![0u32; (n + 1) * width];
        for i in (0..n).rev() {
            for j in (0..m).rev() {
                lengths[i * width + j] = if self.same_item(&old[i], &new[j]) {
                    lengths[(i + 1) * width + j + 1] + 1
                } else {
                    lengths[(i + 1) * width + j].max(lengths[i * width + j + 1])
                };
            }
        }

        let mut pairs = Vec::with_capacity(lengths[0] as usize);
        let (mut i, mut j) = (0, 0);
        while i < n && j < m {
            if self.same_item(&old[i], &new[j]) {
                pairs.push((i, j));
                i += 1;
                j += 1;
            } else if lengths[(i + 1) * width + j] >= lengths[i * width + j + 1] {
                i += 1;
            } else {
                j += 1;
            }
        }
        pairs
    }
}

/// Apply `edits` to a copy of `old`.
pub fn apply(
    old: &[AggregatedPlanting],
    edits: &[ListEdit],
) -> Result<Vec<AggregatedPlanting>, EditError> {
    let mut items = old.to_vec();
    for edit in edits {
        match edit {
            ListEdit::Insert { index, item } => {
                if *index > items.len() {
                    return Err(out_of_range("insert", *index, items.len()));
                }
                items.insert(*index, item.clone());
            }
            ListEdit::Remove { index } => {
                if *index >= items.len() {
                    return Err(out_of_range("remove", *index, items.len()));
                }
                items.remove(*index);
            }
            ListEdit::Update { index, item } => {
                let len = items.len();
                let slot = items
                    .get_mut(*index)
                    .ok_or_else(|| out_of_range("update", *index, len))?;
                *slot = item.clone();
            }
        }
    }
    Ok(items)
}

fn out_of_range(op: &'static str, index: usize, len: usize) -> EditError {
    EditError::OutOfRange { op, index, len }
}
