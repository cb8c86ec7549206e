//! Local preview server.
//!
//! Serves the asset root as-is, with `/` mapped to the production entry page,
//! so a built app can be checked the way it ships.

mod lifecycle;
mod path;
mod response;

use crate::{config::PackConfig, debug, log};
use anyhow::Result;
use std::path::PathBuf;
use tiny_http::{Request, Server};

/// Files the server answers from.
struct ServeRoot {
    root: PathBuf,
    index: PathBuf,
}

/// Bind and serve until the process is killed.
pub fn serve(config: &PackConfig) -> Result<()> {
    let site = ServeRoot {
        root: config.asset_root(),
        index: config.prod_html(),
    };
    if !site.index.is_file() {
        log!("warning"; "{} missing, run `shellpack build` first", site.index.display());
    }

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    log!("serve"; "http://{}", addr);

    run_request_loop(&server, &site);
    Ok(())
}

fn run_request_loop(server: &Server, site: &ServeRoot) {
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, site) {
            log!("serve"; "request error: {e}");
        }
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, site: &ServeRoot) -> Result<()> {
    debug!("serve"; "{} {}", request.method(), request.url());

    if !response::is_read_request(&request) {
        return response::respond_method_not_allowed(request);
    }

    match path::resolve_path(request.url(), &site.root, &site.index) {
        Some(path) => response::respond_file(request, &path),
        None => response::respond_not_found(request),
    }
}
