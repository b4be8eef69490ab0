//! Sample commands: show, samples.
//!
//! CHANGELOG:
//! - 10/18/2026 - Added service filter and warning on empty selection
//! - 10/18/2026 - Initial implementation

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::check_daemon;
use crate::catalog::{Catalog, Field};
use crate::output::OutputControls;
use crate::samples::{CodeSampleView, CodeSamples};

/// Select methods by daemon and/or service name.
pub fn select<'a>(
    catalog: &'a Catalog,
    daemon: Option<&str>,
    service: Option<&str>,
) -> Vec<CodeSamples<'a>> {
    catalog
        .methods()
        .filter(|m| daemon.map_or(true, |name| m.daemon.name == name))
        .filter(|m| service.map_or(true, |name| m.service.name == name))
        .map(CodeSamples::new)
        .collect()
}

/// Show every code-sample value for one method.
pub fn show(catalog: &Catalog, method: &str, output: &OutputControls) -> Result<()> {
    let method_ref = catalog
        .find_method(method)
        .with_context(|| format!("Failed to resolve method '{}'", method))?;
    let samples = CodeSamples::new(method_ref);

    if output.json {
        output.print(&samples.to_view());
    } else {
        print_text(&samples.to_view());
    }
    Ok(())
}

/// Emit code-sample values for all matching methods.
pub fn samples(
    catalog: &Catalog,
    daemon: Option<&str>,
    service: Option<&str>,
    output: &OutputControls,
) -> Result<()> {
    check_daemon(catalog, daemon)?;
    let selected = select(catalog, daemon, service);
    if selected.is_empty() {
        warn!(?daemon, ?service, "no methods matched");
    }
    info!(count = selected.len(), "rendering code samples");

    let views: Vec<CodeSampleView<'_>> = selected.iter().map(|s| s.to_view()).collect();
    if output.json {
        output.print(&views);
        return Ok(());
    }

    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_text(view);
    }
    Ok(())
}

fn print_text(view: &CodeSampleView<'_>) {
    println!(
        "{}.{}.{} ({})",
        view.package_name, view.service_name, view.method_name, view.daemon_name
    );
    println!("{}", "-".repeat(60));
    println!("protoFileName:    {}", view.proto_file_name);
    println!("stubFileName:     {}", view.stub_file_name);
    println!("loaderFiles:      {}", view.loader_files);
    println!("grpcPort:         {}", view.grpc_port);
    println!("restPort:         {}", view.rest_port);
    println!("requiresMacaroon: {}", view.requires_macaroon);
    println!("macaroonPath:     {}", view.macaroon_path);
    println!("streaming:        {}", streaming_kind(view));
    println!("isRestPost:       {}", view.is_rest_post);
    println!("pythonRestArgs:   {:?}", view.python_rest_args);
    println!("request:          {}", view.request_name);
    print_fields(view.request_fields);
    println!("response fields:");
    print_fields(view.response_fields);
}

fn print_fields(fields: &[Field]) {
    for field in fields {
        let label = if field.label.is_empty() {
            String::new()
        } else {
            format!("{} ", field.label)
        };
        println!("  {}{} {}", label, field.type_name, field.name);
    }
}

fn streaming_kind(view: &CodeSampleView<'_>) -> &'static str {
    if view.is_server_streaming {
        "server"
    } else if view.is_client_streaming {
        "client"
    } else if view.is_bidirectional_streaming {
        "bidirectional"
    } else {
        "unary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixture;

    #[test]
    fn test_select_by_service() {
        let catalog = fixture();
        let selected = select(&catalog, Some("lnd"), Some("Lightning"));
        let names: Vec<&str> = selected.iter().map(|s| s.method_name()).collect();
        assert_eq!(names, vec!["GetInfo", "AddInvoice", "SubscribeInvoices", "ChannelAcceptor"]);
    }

    #[test]
    fn test_select_anonymous_services() {
        let catalog = fixture();
        let anonymous: Vec<String> = select(&catalog, None, None)
            .into_iter()
            .filter(|s| !s.requires_macaroon())
            .map(|s| s.method_ref().qualified_name())
            .collect();
        assert_eq!(
            anonymous,
            vec!["lnrpc.WalletUnlocker.InitWallet", "lnrpc.State.SubscribeState"]
        );
    }

    #[test]
    fn test_streaming_kind() {
        let catalog = fixture();
        let method = catalog.find_method("Lightning.ChannelAcceptor").unwrap();
        let view = CodeSamples::new(method).to_view();
        assert_eq!(streaming_kind(&view), "bidirectional");
    }

    #[test]
    fn test_show_unknown_method() {
        let catalog = fixture();
        let err = show(&catalog, "Lightning.Nope", &OutputControls::default()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to resolve method 'Lightning.Nope'");
        assert_eq!(err.root_cause().to_string(), "Method not found: Lightning.Nope");
    }
}
