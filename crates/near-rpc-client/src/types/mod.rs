//! Wire model for the NEAR JSON-RPC API.
//!
//! Response views, block references and query params, all serialized with
//! `camelCase` keys. [`naming`] converts those keys to and from the node's
//! `snake_case` convention.

mod block_reference;
pub mod naming;
mod request;
mod rpc;
pub(crate) mod shape;

pub use block_reference::{BlockId, BlockReference, Finality};
pub use request::{QueryParams, QueryRequest, RequestType};
pub use rpc::{
    AccessKeyInfo, AccessKeyList, AccessKeyPermission, AccessKeyView, AccountView, BlockHeader,
    BlockView, ChallengeResult, ChunkHeader, CurrentValidatorInfo, EMPTY_CODE_HASH,
    FunctionCallPermission, FunctionCallResult, GasPrice, KickoutReason, NextValidatorInfo,
    NodeVersion, StateItem, StateResult, StatusView, SyncInfo, ValidatorInfo, ValidatorKickout,
    ValidatorProposal, ValidatorStakeView,
};
