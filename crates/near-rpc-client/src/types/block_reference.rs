//! Block reference types for RPC queries.

use serde::{Deserialize, Serialize};

/// Reference to a specific block for RPC queries.
///
/// Every NEAR RPC query operates on state at a specific block. A reference
/// has two wire forms:
///
/// - as a selector object merged into the request params, used by `block`
///   and `query` (`{"finality": "final"}` or `{"block_id": 123}`),
/// - as a single positional scalar, used by `gas_price` and `validators`
///   (see [`BlockReference::to_block_id`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BlockSelector", from = "BlockSelector")]
pub enum BlockReference {
    /// Query at latest block with specified finality.
    Finality(Finality),
    /// Query at specific block height.
    Height(u64),
    /// Query at specific block hash.
    Hash(String),
}

impl Default for BlockReference {
    fn default() -> Self {
        Self::Finality(Finality::Final)
    }
}

impl BlockReference {
    /// Query at final block.
    pub fn final_() -> Self {
        Self::Finality(Finality::Final)
    }

    /// Query at optimistic (latest) block.
    pub fn optimistic() -> Self {
        Self::Finality(Finality::Optimistic)
    }

    /// Query at specific height.
    pub fn at_height(height: u64) -> Self {
        Self::Height(height)
    }

    /// Query at specific hash.
    pub fn at_hash(hash: impl Into<String>) -> Self {
        Self::Hash(hash.into())
    }

    /// The positional `block_id` scalar for this reference.
    ///
    /// Finality references have no positional encoding and map to `None`,
    /// which the node resolves to its latest block.
    pub fn to_block_id(&self) -> Option<BlockId> {
        match self {
            BlockReference::Finality(_) => None,
            BlockReference::Height(h) => Some(BlockId::Height(*h)),
            BlockReference::Hash(h) => Some(BlockId::Hash(h.clone())),
        }
    }
}

impl From<Finality> for BlockReference {
    fn from(f: Finality) -> Self {
        Self::Finality(f)
    }
}

impl From<u64> for BlockReference {
    fn from(height: u64) -> Self {
        Self::Height(height)
    }
}

impl From<BlockId> for BlockReference {
    fn from(id: BlockId) -> Self {
        match id {
            BlockId::Height(h) => Self::Height(h),
            BlockId::Hash(h) => Self::Hash(h),
        }
    }
}

/// A block height or block hash as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockId {
    /// Block height.
    Height(u64),
    /// Base58 block hash.
    Hash(String),
}

/// Selector object form of a [`BlockReference`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
enum BlockSelector {
    Finality { finality: Finality },
    BlockId { block_id: BlockId },
}

impl From<BlockReference> for BlockSelector {
    fn from(block: BlockReference) -> Self {
        match block {
            BlockReference::Finality(finality) => BlockSelector::Finality { finality },
            BlockReference::Height(h) => BlockSelector::BlockId {
                block_id: BlockId::Height(h),
            },
            BlockReference::Hash(h) => BlockSelector::BlockId {
                block_id: BlockId::Hash(h),
            },
        }
    }
}

impl From<BlockSelector> for BlockReference {
    fn from(selector: BlockSelector) -> Self {
        match selector {
            BlockSelector::Finality { finality } => BlockReference::Finality(finality),
            BlockSelector::BlockId { block_id } => block_id.into(),
        }
    }
}

/// Finality level for queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finality {
    /// Latest optimistic block. Fastest, but may be reorged.
    Optimistic,
    /// Fully finalized and irreversible.
    #[default]
    Final,
}

impl Finality {
    /// Get the string representation for RPC.
    pub fn as_str(&self) -> &'static str {
        match self {
            Finality::Optimistic => "optimistic",
            Finality::Final => "final",
        }
    }
}

impl std::fmt::Display for Finality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
