//! RPC response types.
//!
//! Every view serializes its fields as `camelCase`; the transport renames
//! the node's `snake_case` keys before decoding. Balances, stakes and gas
//! prices stay decimal strings because they exceed 64 bits.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::shape::{ShapeAttempt, first_match};

/// Code hash of an account without a deployed contract.
pub const EMPTY_CODE_HASH: &str = "11111111111111111111111111111111";

// ============================================================================
// Node status types
// ============================================================================

/// Node status response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    /// Node version.
    pub version: NodeVersion,
    /// Chain ID.
    pub chain_id: String,
    /// Protocol version.
    pub protocol_version: u32,
    /// Latest protocol version supported.
    pub latest_protocol_version: u32,
    /// RPC address.
    #[serde(default)]
    pub rpc_addr: Option<String>,
    /// List of current validators.
    #[serde(default)]
    pub validators: Vec<ValidatorInfo>,
    /// Sync information.
    pub sync_info: SyncInfo,
    /// Validator account ID (if validating).
    #[serde(default)]
    pub validator_account_id: Option<String>,
    /// Genesis hash.
    #[serde(default)]
    pub genesis_hash: Option<String>,
    /// Node public key.
    #[serde(default)]
    pub node_public_key: Option<String>,
    /// Uptime in seconds.
    #[serde(default)]
    pub uptime_sec: Option<u64>,
}

/// Node version information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeVersion {
    /// Version string.
    pub version: String,
    /// Build string.
    pub build: String,
    /// Git commit hash.
    #[serde(default)]
    pub commit: Option<String>,
    /// Rust compiler version.
    #[serde(default)]
    pub rustc_version: Option<String>,
}

/// Validator entry in the status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorInfo {
    /// Validator account ID.
    pub account_id: String,
    /// Whether the validator was slashed.
    #[serde(default)]
    pub is_slashed: Option<bool>,
}

/// Sync information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncInfo {
    /// Latest block hash.
    pub latest_block_hash: String,
    /// Latest block height.
    pub latest_block_height: u64,
    /// Latest state root.
    pub latest_state_root: String,
    /// Latest block timestamp.
    pub latest_block_time: String,
    /// Whether the node is syncing.
    pub syncing: bool,
    /// Earliest block hash (if available).
    #[serde(default)]
    pub earliest_block_hash: Option<String>,
    /// Earliest block height (if available).
    #[serde(default)]
    pub earliest_block_height: Option<u64>,
    /// Earliest block time (if available).
    #[serde(default)]
    pub earliest_block_time: Option<String>,
    /// Current epoch ID.
    #[serde(default)]
    pub epoch_id: Option<String>,
    /// Epoch start height.
    #[serde(default)]
    pub epoch_start_height: Option<u64>,
}

// ============================================================================
// Block types
// ============================================================================

/// Block information from block RPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockView {
    /// Block author (validator account ID).
    pub author: String,
    /// Block header.
    pub header: BlockHeader,
    /// List of chunks in the block.
    pub chunks: Vec<ChunkHeader>,
}

/// Block header with full details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    /// Block height.
    pub height: u64,
    /// Previous block height (may be None for genesis).
    #[serde(default)]
    pub prev_height: Option<u64>,
    /// Epoch ID.
    pub epoch_id: String,
    /// Next epoch ID.
    pub next_epoch_id: String,
    /// Block hash.
    pub hash: String,
    /// Previous block hash.
    pub prev_hash: String,
    /// Previous state root.
    pub prev_state_root: String,
    /// Chunk receipts root.
    pub chunk_receipts_root: String,
    /// Chunk headers root.
    pub chunk_headers_root: String,
    /// Chunk transaction root.
    pub chunk_tx_root: String,
    /// Outcome root.
    pub outcome_root: String,
    /// Number of chunks included.
    pub chunks_included: u64,
    /// Challenges root.
    pub challenges_root: String,
    /// Timestamp in nanoseconds (as u64).
    pub timestamp: u64,
    /// Timestamp in nanoseconds (as string for precision).
    pub timestamp_nanosec: String,
    /// Random value for the block.
    pub random_value: String,
    /// Validator proposals.
    #[serde(default)]
    pub validator_proposals: Vec<ValidatorProposal>,
    /// Chunk mask (which shards have chunks).
    #[serde(default)]
    pub chunk_mask: Vec<bool>,
    /// Gas price for this block.
    pub gas_price: String,
    /// Block ordinal (may be None).
    #[serde(default)]
    pub block_ordinal: Option<u64>,
    /// Legacy rent field, absent on current nodes.
    #[serde(default)]
    pub rent_paid: Option<String>,
    /// Legacy reward field, absent on current nodes.
    #[serde(default)]
    pub validator_reward: Option<String>,
    /// Total supply of NEAR tokens.
    pub total_supply: String,
    /// Challenges result.
    #[serde(default)]
    pub challenges_result: Vec<ChallengeResult>,
    /// Last final block hash.
    pub last_final_block: String,
    /// Last DS final block hash.
    pub last_ds_final_block: String,
    /// Next block producer hash.
    pub next_bp_hash: String,
    /// Block merkle root.
    pub block_merkle_root: String,
    /// Epoch sync data hash (optional).
    #[serde(default)]
    pub epoch_sync_data_hash: Option<String>,
    /// Block approvals (nullable signatures).
    #[serde(default)]
    pub approvals: Vec<Option<String>>,
    /// Block signature.
    pub signature: String,
    /// Latest protocol version.
    pub latest_protocol_version: u32,
}

/// Chunk header with full details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkHeader {
    /// Chunk hash.
    pub chunk_hash: String,
    /// Previous block hash.
    pub prev_block_hash: String,
    /// Outcome root.
    pub outcome_root: String,
    /// Previous state root.
    pub prev_state_root: String,
    /// Encoded merkle root.
    pub encoded_merkle_root: String,
    /// Encoded length.
    pub encoded_length: u64,
    /// Height when chunk was created.
    pub height_created: u64,
    /// Height when chunk was included.
    pub height_included: u64,
    /// Shard ID.
    pub shard_id: u64,
    /// Gas used in this chunk.
    pub gas_used: u64,
    /// Gas limit for this chunk.
    pub gas_limit: u64,
    /// Legacy rent field, absent on current nodes.
    #[serde(default)]
    pub rent_paid: Option<String>,
    /// Validator reward.
    pub validator_reward: String,
    /// Balance burnt.
    pub balance_burnt: String,
    /// Outgoing receipts root.
    pub outgoing_receipts_root: String,
    /// Transaction root.
    pub tx_root: String,
    /// Validator proposals.
    #[serde(default)]
    pub validator_proposals: Vec<ValidatorProposal>,
    /// Chunk signature.
    pub signature: String,
}

/// Validator proposal in block and chunk headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorProposal {
    /// Validator account ID.
    pub account_id: String,
    /// Public key.
    pub public_key: String,
    /// Stake amount.
    pub stake: String,
    /// Proposal struct version.
    #[serde(default)]
    pub validator_stake_struct_version: Option<String>,
}

/// Challenge outcome recorded in a block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResult {
    /// Challenged account.
    pub account_id: String,
    /// Whether the challenge was for a double sign.
    pub is_double_sign: bool,
}

// ============================================================================
// Account types
// ============================================================================

/// Account information from view_account RPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    /// Total balance in yoctoNEAR, excluding locked.
    pub amount: String,
    /// Locked balance (staked) in yoctoNEAR.
    pub locked: String,
    /// Hash of deployed contract code (or ones if none).
    pub code_hash: String,
    /// Storage used in bytes.
    pub storage_usage: u64,
    /// Storage paid at block height (deprecated, always 0).
    #[serde(default)]
    pub storage_paid_at: u64,
    /// Block height of the query.
    pub block_height: u64,
    /// Block hash of the query.
    pub block_hash: String,
}

impl AccountView {
    /// Check if this account has a deployed contract.
    pub fn has_contract(&self) -> bool {
        self.code_hash != EMPTY_CODE_HASH
    }
}

/// Access key information from view_access_key RPC.
///
/// The same shape appears nested in [`AccessKeyInfo`], where the node omits
/// the block metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyView {
    /// Nonce for replay protection.
    pub nonce: u64,
    /// Permission level.
    pub permission: AccessKeyPermission,
    /// Block height of the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    /// Block hash of the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
}

/// Access key permission.
///
/// On the wire `FullAccess` is the bare string `"FullAccess"` while
/// `FunctionCall` is an object keyed by `"FunctionCall"`. Decoding tries the
/// bare string first and falls back to the tagged object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessKeyPermission {
    /// Full access.
    FullAccess,
    /// Function call access with restrictions.
    FunctionCall(FunctionCallPermission),
}

/// Restrictions of a function-call access key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallPermission {
    /// Maximum amount this key can spend, in yoctoNEAR. `None` is unlimited.
    pub allowance: Option<String>,
    /// Contract that can be called.
    pub receiver_id: String,
    /// Methods that can be called (empty = all).
    pub method_names: Vec<String>,
}

const FULL_ACCESS: &str = "FullAccess";
const FUNCTION_CALL: &str = "FunctionCall";

impl AccessKeyPermission {
    /// Returns true for a full access key.
    pub fn is_full_access(&self) -> bool {
        matches!(self, AccessKeyPermission::FullAccess)
    }

    /// Function call restrictions, if this is a function call key.
    pub fn as_function_call(&self) -> Option<&FunctionCallPermission> {
        match self {
            AccessKeyPermission::FunctionCall(p) => Some(p),
            AccessKeyPermission::FullAccess => None,
        }
    }

    fn from_bare_string(value: &Value) -> Option<Self> {
        (value.as_str()? == FULL_ACCESS).then_some(AccessKeyPermission::FullAccess)
    }

    fn from_tagged_object(value: &Value) -> Option<Self> {
        let inner = value.as_object()?.get(FUNCTION_CALL)?;
        serde_json::from_value(inner.clone())
            .ok()
            .map(AccessKeyPermission::FunctionCall)
    }
}

impl Serialize for AccessKeyPermission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AccessKeyPermission::FullAccess => serializer.serialize_str(FULL_ACCESS),
            AccessKeyPermission::FunctionCall(permission) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(FUNCTION_CALL, permission)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for AccessKeyPermission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        const SHAPES: &[ShapeAttempt<AccessKeyPermission>] = &[
            AccessKeyPermission::from_bare_string,
            AccessKeyPermission::from_tagged_object,
        ];

        let value = Value::deserialize(deserializer)?;
        first_match(&value, SHAPES).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid access key permission: expected \"{FULL_ACCESS}\" or \
                 {{\"{FUNCTION_CALL}\": {{...}}}}, got {value}"
            ))
        })
    }
}

/// Access key list from view_access_key_list RPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyList {
    /// List of access keys.
    pub keys: Vec<AccessKeyInfo>,
    /// Block height of the query.
    pub block_height: u64,
    /// Block hash of the query.
    pub block_hash: String,
}

/// Single access key info in list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyInfo {
    /// Public key.
    pub public_key: String,
    /// Access key details.
    pub access_key: AccessKeyView,
}

// ============================================================================
// Contract state and view calls
// ============================================================================

/// Contract state from view_state RPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResult {
    /// Key-value pairs under the requested prefix.
    pub values: Vec<StateItem>,
    /// Merkle proof nodes (empty unless requested).
    #[serde(default)]
    pub proof: Vec<String>,
    /// Block height of the query.
    pub block_height: u64,
    /// Block hash of the query.
    pub block_hash: String,
}

/// A single storage entry. Key and value are base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateItem {
    /// Base64 storage key.
    pub key: String,
    /// Base64 storage value.
    pub value: String,
    /// Per-item proof (legacy nodes only).
    #[serde(default)]
    pub proof: Vec<String>,
}

impl StateItem {
    /// Decoded storage key.
    pub fn key_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.key)
    }

    /// Decoded storage value.
    pub fn value_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.value)
    }
}

/// Result of a view function call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallResult {
    /// Raw result bytes.
    #[serde(default)]
    pub result: Vec<u8>,
    /// Logs emitted during execution.
    #[serde(default)]
    pub logs: Vec<String>,
    /// Block height of the query.
    pub block_height: u64,
    /// Block hash of the query.
    pub block_hash: String,
    /// Execution error reported inside the result by older nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FunctionCallResult {
    /// Get the raw result bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.result
    }

    /// Get the result as a UTF-8 string.
    pub fn as_string(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.result.clone())
    }

    /// Deserialize the result as JSON.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let result = client
    ///     .call_view_function("wrap.near", "ft_total_supply", b"{}", BlockReference::default())
    ///     .await?;
    /// let supply: String = result.json()?;
    /// ```
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.result)
    }
}

// ============================================================================
// Gas price
// ============================================================================

/// Gas price response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasPrice {
    /// Gas price in yoctoNEAR.
    pub gas_price: String,
}

impl GasPrice {
    /// Get gas price as u128, if it is a valid decimal number.
    pub fn as_u128(&self) -> Option<u128> {
        self.gas_price.parse().ok()
    }
}

// ============================================================================
// Validator types
// ============================================================================

/// Validators for an epoch, from the validators RPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorStakeView {
    /// Validators of the current epoch.
    pub current_validators: Vec<CurrentValidatorInfo>,
    /// Validators of the next epoch.
    pub next_validators: Vec<NextValidatorInfo>,
    /// Stake proposals for the next epoch.
    #[serde(default)]
    pub current_proposals: Vec<ValidatorProposal>,
    /// First block height of the epoch.
    pub epoch_start_height: u64,
    /// Epoch height.
    #[serde(default)]
    pub epoch_height: Option<u64>,
    /// Validators kicked out in the previous epoch.
    #[serde(default)]
    pub prev_epoch_kickout: Vec<ValidatorKickout>,
}

/// A validator of the current epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentValidatorInfo {
    /// Validator account.
    pub account_id: String,
    /// Validator public key.
    pub public_key: String,
    /// Stake in yoctoNEAR.
    pub stake: String,
    /// Shards tracked by this validator.
    #[serde(default)]
    pub shards: Vec<u64>,
    /// Blocks produced this epoch.
    pub num_produced_blocks: u64,
    /// Blocks expected this epoch.
    pub num_expected_blocks: u64,
    /// Chunks produced this epoch.
    #[serde(default)]
    pub num_produced_chunks: u64,
    /// Chunks expected this epoch.
    #[serde(default)]
    pub num_expected_chunks: u64,
    /// Whether the validator was slashed.
    #[serde(default)]
    pub is_slashed: bool,
}

/// A validator of the next epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextValidatorInfo {
    /// Validator account.
    pub account_id: String,
    /// Validator public key.
    pub public_key: String,
    /// Stake in yoctoNEAR.
    pub stake: String,
    /// Shards assigned for the next epoch.
    #[serde(default)]
    pub shards: Vec<u64>,
}

/// A validator removed from the set, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorKickout {
    /// Validator account.
    pub account_id: String,
    /// Why it was removed.
    pub reason: KickoutReason,
}

/// Why a validator was kicked out.
///
/// Unit reasons arrive as bare strings (`"Unstaked"`), the rest as objects
/// keyed by the reason name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all_fields = "camelCase")]
pub enum KickoutReason {
    /// Slashed for misbehavior.
    Slashed,
    /// Produced too few blocks.
    NotEnoughBlocks { produced: u64, expected: u64 },
    /// Produced too few chunks.
    NotEnoughChunks { produced: u64, expected: u64 },
    /// Unstaked voluntarily.
    Unstaked,
    /// Stake fell below the seat threshold (amounts in yoctoNEAR).
    NotEnoughStake { stake_u128: String, threshold_u128: String },
    /// Did not win a seat.
    DidNotGetASeat,
    /// Too few chunk endorsements.
    NotEnoughChunkEndorsements { produced: u64, expected: u64 },
    /// Running a protocol version older than the network's.
    ProtocolVersionTooOld { version: u32, network_version: u32 },
}
