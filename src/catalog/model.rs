//! Catalog records: daemons, packages, services, methods and messages.
//!
//! Key names follow the camelCase JSON written by the proto loader.
//!
//! CHANGELOG:
//! - 10/18/2026 - Request messages must be named
//! - 10/18/2026 - Closed enum for streaming direction
//! - 10/18/2026 - Initial implementation

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// A node implementation that serves one or more RPC packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Daemon {
    pub name: String,
    pub grpc_port: u16,
    pub rest_port: u16,
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// A proto package, e.g. `lnrpc` or `looprpc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// A gRPC service and the proto file that defines it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub file_name: String,
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// A single RPC operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    pub streaming_direction: StreamingDirection,
    /// HTTP verb of the REST gateway mapping (empty when unmapped)
    #[serde(default)]
    pub rest_method: String,
    #[serde(default)]
    pub rest_path: String,
    #[serde(default)]
    pub response_streaming: bool,
    #[serde(default)]
    pub description: String,
    pub request: RequestMessage,
    pub response: Message,
}

/// Request message shape. Sample code names the request type, so the name is
/// required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMessage {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Response message shape; only the fields are rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A message field, passed through to templates untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// Which side(s) of a call stream messages.
///
/// Accepts `""` or `"none"` for unary calls. Anything outside the four known
/// tags is rejected when the catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum StreamingDirection {
    #[default]
    None,
    Server,
    Client,
    Bidirectional,
}

impl StreamingDirection {
    /// Tag as written by the proto loader (`""` for unary).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Server => "server",
            Self::Client => "client",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Human-readable kind for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "unary",
            Self::Server => "server-streaming",
            Self::Client => "client-streaming",
            Self::Bidirectional => "bidirectional",
        }
    }
}

impl FromStr for StreamingDirection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Self::None),
            "server" => Ok(Self::Server),
            "client" => Ok(Self::Client),
            "bidirectional" => Ok(Self::Bidirectional),
            other => Err(CatalogError::UnknownStreamingDirection(other.to_string())),
        }
    }
}

impl TryFrom<String> for StreamingDirection {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for StreamingDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for StreamingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A method together with its borrowed ancestor chain.
#[derive(Debug, Clone, Copy)]
pub struct MethodRef<'a> {
    pub daemon: &'a Daemon,
    pub package: &'a Package,
    pub service: &'a Service,
    pub method: &'a Method,
}

impl<'a> MethodRef<'a> {
    /// `package.Service.Method`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.package.name, self.service.name, self.method.name)
    }

    /// `daemon:package.Service.Method`
    pub fn daemon_qualified_name(&self) -> String {
        format!("{}:{}", self.daemon.name, self.qualified_name())
    }

    /// `Service.Method`
    pub fn short_name(&self) -> String {
        format!("{}.{}", self.service.name, self.method.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_streaming_direction() {
        assert_eq!("".parse::<StreamingDirection>().unwrap(), StreamingDirection::None);
        assert_eq!("none".parse::<StreamingDirection>().unwrap(), StreamingDirection::None);
        assert_eq!("server".parse::<StreamingDirection>().unwrap(), StreamingDirection::Server);
        assert_eq!("client".parse::<StreamingDirection>().unwrap(), StreamingDirection::Client);
        assert_eq!(
            "bidirectional".parse::<StreamingDirection>().unwrap(),
            StreamingDirection::Bidirectional
        );
    }

    #[test]
    fn test_unknown_streaming_direction_rejected() {
        let err = "Server".parse::<StreamingDirection>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownStreamingDirection(ref s) if s == "Server"));
    }

    #[test]
    fn test_streaming_direction_serializes_as_tag() {
        let json = serde_json::to_string(&StreamingDirection::None).unwrap();
        assert_eq!(json, r#""""#);
        let json = serde_json::to_string(&StreamingDirection::Bidirectional).unwrap();
        assert_eq!(json, r#""bidirectional""#);
    }

    #[test]
    fn test_request_name_required() {
        let err = serde_json::from_str::<RequestMessage>(r#"{"fields": []}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"));

        let response: Message = serde_json::from_str(r#"{"fields": []}"#).unwrap();
        assert!(response.name.is_empty());
    }

    #[test]
    fn test_field_type_key() {
        let field: Field = serde_json::from_str(r#"{"name": "amt", "type": "int64"}"#).unwrap();
        assert_eq!(field.type_name, "int64");
        assert!(field.label.is_empty());
    }
}
