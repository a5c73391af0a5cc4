use std::fmt;

use serde::Deserialize;

/// Standard GraphQL envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvmData {
    #[serde(rename = "EVM")]
    pub evm: EvmEvents,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvmEvents {
    #[serde(default)]
    pub events: Vec<EvmEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvmEvent {
    pub transaction: Option<TransactionRef>,
    pub block: Option<BlockRef>,
    pub log: Option<LogRef>,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl EvmEvent {
    pub fn argument(&self, index: usize) -> Option<&Argument> {
        self.arguments.get(index)
    }

    pub fn argument_named(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    pub fn tx_hash(&self) -> Option<&str> {
        self.transaction.as_ref().map(|t| t.hash.as_str())
    }

    pub fn block_time(&self) -> Option<&str> {
        self.block.as_ref().map(|b| b.time.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionRef {
    pub hash: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockRef {
    pub time: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogRef {
    pub signature: SignatureRef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignatureRef {
    pub name: String,
}

/// One decoded event argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Argument {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "Type")]
    pub kind: String,
    pub value: ArgValue,
}

/// The `Value` union: at most one of these keys is present. A member no
/// fragment selects comes back as `{}` and lands in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArgValue {
    Integer(i64),
    String(String),
    Address(String),
    BigInteger(String),
    Hex(String),
    Bool(bool),
    #[serde(untagged)]
    Unknown(serde_json::Value),
}

impl ArgValue {
    pub fn as_address(&self) -> Option<&str> {
        match self {
            ArgValue::Address(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Integer(v) => write!(f, "integer:{v}"),
            ArgValue::String(v) => write!(f, "string:{v}"),
            ArgValue::Address(v) => write!(f, "address:{v}"),
            ArgValue::BigInteger(v) => write!(f, "bigInteger:{v}"),
            ArgValue::Hex(v) => write!(f, "hex:{v}"),
            ArgValue::Bool(v) => write!(f, "bool:{v}"),
            ArgValue::Unknown(v) => write!(f, "unknown:{v}"),
        }
    }
}
