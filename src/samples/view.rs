//! Serializable snapshot of [`CodeSamples`](super::CodeSamples).
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use serde::Serialize;

use crate::catalog::Field;

/// Every code-sample value of one method, keyed by the camelCase names the
/// documentation templates use.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSampleView<'a> {
    pub daemon_name: &'a str,
    pub package_name: &'a str,
    pub service_name: &'a str,
    pub method_name: &'a str,
    pub loader_files: String,
    pub macaroon_path: String,
    pub requires_macaroon: bool,
    pub grpc_port: u16,
    pub rest_port: u16,
    pub request_name: &'a str,
    pub request_fields: &'a [Field],
    pub response_fields: &'a [Field],
    pub is_unary: bool,
    pub is_server_streaming: bool,
    pub is_client_streaming: bool,
    pub is_bidirectional_streaming: bool,
    pub is_streaming: bool,
    pub is_rest_post: bool,
    pub proto_file_name: &'a str,
    pub stub_file_name: String,
    pub python_rest_args: String,
}

#[cfg(test)]
mod tests {
    use crate::catalog::fixture;
    use crate::samples::CodeSamples;

    #[test]
    fn test_view_uses_template_keys() {
        let catalog = fixture();
        let method = catalog.find_method("walletrpc.WalletKit.ListUnspent").unwrap();
        let value = serde_json::to_value(CodeSamples::new(method).to_view()).unwrap();

        assert_eq!(value["daemonName"], "lnd");
        assert_eq!(value["loaderFiles"], "['lightning.proto', 'walletkit.proto']");
        assert_eq!(value["stubFileName"], "walletkit");
        assert_eq!(value["isRestPost"], true);
        assert_eq!(value["isBidirectionalStreaming"], false);
        assert_eq!(value["pythonRestArgs"], "headers=headers, data=json.dumps(data), ");
        assert_eq!(value["responseFields"][0]["type"], "Utxo");
        assert_eq!(value["responseFields"][0]["label"], "repeated");
    }
}
