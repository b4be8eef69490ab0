//! Code-sample values for a single RPC method.
//!
//! Every accessor is a pure function of the wrapped method and its ancestors,
//! recomputed on each call. Templates read these instead of branching on raw
//! catalog data themselves.
//!
//! CHANGELOG:
//! - 10/18/2026 - Added python REST argument builder
//! - 10/18/2026 - Initial implementation

use crate::catalog::{Field, MethodRef, StreamingDirection};

use super::view::CodeSampleView;

/// Daemon whose services all import the main lightning proto.
const PRIMARY_DAEMON: &str = "lnd";

const PRIMARY_PROTO_FILE: &str = "lightning.proto";

const PRIMARY_MACAROON_PATH: &str = "LND_DIR/data/chain/bitcoin/regtest/admin.macaroon";

/// `package.Service` pairs callable without a macaroon.
const ANONYMOUS_SERVICES: [&str; 2] = ["lnrpc.WalletUnlocker", "lnrpc.State"];

const PROTO_EXTENSION: &str = ".proto";

const HEADERS_ARG: &str = "headers=headers, ";
const STREAM_ARG: &str = "stream=True, ";
const DATA_ARG: &str = "data=json.dumps(data), ";

/// Derived code-sample values for one method.
#[derive(Debug, Clone, Copy)]
pub struct CodeSamples<'a> {
    method: MethodRef<'a>,
}

impl<'a> CodeSamples<'a> {
    pub fn new(method: MethodRef<'a>) -> Self {
        Self { method }
    }

    pub fn method_ref(&self) -> MethodRef<'a> {
        self.method
    }

    pub fn daemon_name(&self) -> &'a str {
        &self.method.daemon.name
    }

    pub fn package_name(&self) -> &'a str {
        &self.method.package.name
    }

    pub fn service_name(&self) -> &'a str {
        &self.method.service.name
    }

    pub fn method_name(&self) -> &'a str {
        &self.method.method.name
    }

    /// Proto file literal(s) passed to the sample's proto loader, quotes
    /// included. lnd services outside lightning.proto also need
    /// lightning.proto loaded first.
    pub fn loader_files(&self) -> String {
        let proto = self.proto_file_name();
        if self.daemon_name() == PRIMARY_DAEMON {
            if proto == PRIMARY_PROTO_FILE {
                format!("'{PRIMARY_PROTO_FILE}'")
            } else {
                format!("['{PRIMARY_PROTO_FILE}', '{proto}']")
            }
        } else {
            format!("'{proto}'")
        }
    }

    pub fn macaroon_path(&self) -> String {
        let daemon = self.daemon_name();
        if daemon == PRIMARY_DAEMON {
            PRIMARY_MACAROON_PATH.to_string()
        } else {
            format!("{}_DIR/regtest/{}.macaroon", daemon.to_uppercase(), daemon)
        }
    }

    pub fn requires_macaroon(&self) -> bool {
        let service = format!("{}.{}", self.package_name(), self.service_name());
        !ANONYMOUS_SERVICES.contains(&service.as_str())
    }

    pub fn grpc_port(&self) -> u16 {
        self.method.daemon.grpc_port
    }

    pub fn rest_port(&self) -> u16 {
        self.method.daemon.rest_port
    }

    pub fn request_name(&self) -> &'a str {
        &self.method.method.request.name
    }

    pub fn request_fields(&self) -> &'a [Field] {
        &self.method.method.request.fields
    }

    pub fn response_fields(&self) -> &'a [Field] {
        &self.method.method.response.fields
    }

    pub fn streaming_direction(&self) -> StreamingDirection {
        self.method.method.streaming_direction
    }

    pub fn is_unary(&self) -> bool {
        self.streaming_direction() == StreamingDirection::None
    }

    pub fn is_server_streaming(&self) -> bool {
        self.streaming_direction() == StreamingDirection::Server
    }

    pub fn is_client_streaming(&self) -> bool {
        self.streaming_direction() == StreamingDirection::Client
    }

    pub fn is_bidirectional_streaming(&self) -> bool {
        self.streaming_direction() == StreamingDirection::Bidirectional
    }

    pub fn is_streaming(&self) -> bool {
        !self.is_unary()
    }

    /// Case-sensitive.
    pub fn is_rest_post(&self) -> bool {
        self.method.method.rest_method == "POST"
    }

    pub fn proto_file_name(&self) -> &'a str {
        &self.method.service.file_name
    }

    /// Proto file name without directory or `.proto` suffix, e.g. the
    /// `walletkit` in `walletkit_pb2.py`.
    pub fn stub_file_name(&self) -> String {
        let proto = self.proto_file_name().trim_end_matches('/');
        let base = proto.rsplit('/').next().unwrap_or(proto);
        match base.strip_suffix(PROTO_EXTENSION) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => base.to_string(),
        }
    }

    /// Extra keyword arguments for the python `requests` call. Each fragment
    /// carries its own trailing ", ".
    pub fn python_rest_args(&self) -> String {
        let mut args = String::new();
        if self.requires_macaroon() {
            args.push_str(HEADERS_ARG);
        }
        if self.method.method.response_streaming {
            args.push_str(STREAM_ARG);
        }
        if self.is_rest_post() {
            args.push_str(DATA_ARG);
        }
        args
    }

    /// Snapshot of every value, keyed by template variable name.
    pub fn to_view(&self) -> CodeSampleView<'a> {
        CodeSampleView {
            daemon_name: self.daemon_name(),
            package_name: self.package_name(),
            service_name: self.service_name(),
            method_name: self.method_name(),
            loader_files: self.loader_files(),
            macaroon_path: self.macaroon_path(),
            requires_macaroon: self.requires_macaroon(),
            grpc_port: self.grpc_port(),
            rest_port: self.rest_port(),
            request_name: self.request_name(),
            request_fields: self.request_fields(),
            response_fields: self.response_fields(),
            is_unary: self.is_unary(),
            is_server_streaming: self.is_server_streaming(),
            is_client_streaming: self.is_client_streaming(),
            is_bidirectional_streaming: self.is_bidirectional_streaming(),
            is_streaming: self.is_streaming(),
            is_rest_post: self.is_rest_post(),
            proto_file_name: self.proto_file_name(),
            stub_file_name: self.stub_file_name(),
            python_rest_args: self.python_rest_args(),
        }
    }
}

impl<'a> From<MethodRef<'a>> for CodeSamples<'a> {
    fn from(method: MethodRef<'a>) -> Self {
        Self::new(method)
    }
}
