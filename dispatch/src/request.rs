//! Request envelope and the enumerated request kinds.
//!
//! Method names are validated at decode time: an envelope either becomes a
//! fully-typed request variant or fails, so the entry points match
//! exhaustively and never consult a runtime lookup table.

use crate::error::InvokeError;
use deed_types::{Address, TokenId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Wire shape of every incoming request.
#[derive(Clone, Debug, Deserialize)]
pub struct RequestEnvelope {
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl RequestEnvelope {
    /// Decode an envelope from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TokenParams {
    pub token_id: TokenId,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OwnerParams {
    pub owner: Address,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorQueryParams {
    pub owner: Address,
    pub operator: Address,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MintParams {
    pub to: Address,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApproveParams {
    pub to: Address,
    pub token_id: TokenId,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorParams {
    pub operator: Address,
    pub approved: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransferParams {
    pub from: Address,
    pub to: Address,
    pub token_id: TokenId,
    /// Opaque payload accepted by `safeTransferFrom`; carried but unused.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// A decoded read request.
#[derive(Clone, Debug)]
pub enum QueryRequest {
    OwnerOf(TokenParams),
    BalanceOf(OwnerParams),
    GetApproved(TokenParams),
    IsApprovedForAll(OperatorQueryParams),
    QueryTokens,
}

/// A decoded write request.
#[derive(Clone, Debug)]
pub enum MutateRequest {
    Mint(MintParams),
    Approve(ApproveParams),
    SetApprovalForAll(OperatorParams),
    TransferFrom(TransferParams),
    SafeTransferFrom(TransferParams),
}

fn decode_params<T: DeserializeOwned>(envelope: &RequestEnvelope) -> Result<T, InvokeError> {
    serde_json::from_value(envelope.params.clone()).map_err(|source| InvokeError::Malformed {
        method: envelope.method.clone(),
        source,
    })
}

impl QueryRequest {
    pub fn decode(envelope: &RequestEnvelope) -> Result<Self, InvokeError> {
        match envelope.method.as_str() {
            "ownerOf" => Ok(Self::OwnerOf(decode_params(envelope)?)),
            "balanceOf" => Ok(Self::BalanceOf(decode_params(envelope)?)),
            "getApproved" => Ok(Self::GetApproved(decode_params(envelope)?)),
            "isApprovedForAll" => Ok(Self::IsApprovedForAll(decode_params(envelope)?)),
            "queryTokens" => Ok(Self::QueryTokens),
            _ => Err(InvokeError::UnknownMethod {
                entry: "query",
                method: envelope.method.clone(),
            }),
        }
    }
}

impl MutateRequest {
    pub fn decode(envelope: &RequestEnvelope) -> Result<Self, InvokeError> {
        match envelope.method.as_str() {
            "mint" => Ok(Self::Mint(decode_params(envelope)?)),
            "approve" => Ok(Self::Approve(decode_params(envelope)?)),
            "setApprovalForAll" => Ok(Self::SetApprovalForAll(decode_params(envelope)?)),
            "transferFrom" => Ok(Self::TransferFrom(decode_params(envelope)?)),
            "safeTransferFrom" => Ok(Self::SafeTransferFrom(decode_params(envelope)?)),
            _ => Err(InvokeError::UnknownMethod {
                entry: "main",
                method: envelope.method.clone(),
            }),
        }
    }
}
