//! Loads the petstore route manifest and dispatches a few requests against it.
//!
//! Run with `RUST_LOG=radix_router=trace cargo run --example petstore` to see route
//! registration, node splits and misses. Extra `METHOD PATH` pairs on the command line
//! are dispatched too.

use std::path::Path;

use radix_router::{Params, RouteManifest, Router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What a handler produces; turning it into a platform response is the caller's job.
#[derive(Debug)]
struct Reply {
    status: u16,
    body: String,
}

type Handler = fn(&Params<'_, '_>) -> Reply;

fn ok(body: String) -> Reply {
    Reply { status: 200, body }
}

fn get_pet_by_id(p: &Params<'_, '_>) -> Reply {
    ok(format!("pet {}", p.get("petId").unwrap_or_default()))
}

fn find_pets_by_status(_: &Params<'_, '_>) -> Reply {
    ok("pets by status".to_string())
}

fn get_order_by_id(p: &Params<'_, '_>) -> Reply {
    ok(format!("order {}", p.get("orderId").unwrap_or_default()))
}

fn get_user_by_name(p: &Params<'_, '_>) -> Reply {
    ok(format!("user {}", p.get("username").unwrap_or_default()))
}

fn accepted(p: &Params<'_, '_>) -> Reply {
    let args: Vec<String> = p.iter().map(|(n, v)| format!("{}={}", n, v)).collect();
    Reply {
        status: 202,
        body: args.join(","),
    }
}

fn resolve(name: &str) -> Option<Handler> {
    let handler: Handler = match name {
        "get_pet_by_id" => get_pet_by_id,
        "find_pets_by_status" => find_pets_by_status,
        "get_order_by_id" => get_order_by_id,
        "get_user_by_name" => get_user_by_name,
        _ => accepted,
    };
    Some(handler)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radix_router=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let manifest_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/petstore.toml");
    let manifest = RouteManifest::load(&manifest_path)?;
    let router: Router<Handler> = Router::from_manifest(&manifest, resolve)?;
    tracing::info!(routes = router.len(), "router ready");

    let mut requests: Vec<(String, String)> = vec![
        ("GET".into(), "/pet/findByStatus".into()),
        ("GET".into(), "/pet/42".into()),
        ("POST".into(), "/pet/42/uploadImage".into()),
        ("GET".into(), "/store/order/7".into()),
        ("GET".into(), "/user/login".into()),
        ("GET".into(), "/user/ann".into()),
        ("PATCH".into(), "/pet/42".into()),
        ("GET".into(), "/pet/42/extra".into()),
    ];
    let args: Vec<String> = std::env::args().skip(1).collect();
    for pair in args.chunks(2) {
        if let [method, path] = pair {
            requests.push((method.clone(), path.clone()));
        }
    }

    for (method, path) in &requests {
        match router.dispatch(method, path) {
            Ok(m) => {
                let reply = (m.handler)(&m.params);
                println!("{} {} -> {} {}", method, path, reply.status, reply.body);
            }
            Err(e) => {
                let allowed = router.allowed_methods(path);
                if allowed.is_empty() {
                    println!("{} {} -> 404 ({})", method, path, e);
                } else {
                    println!("{} {} -> 405 (allow: {})", method, path, allowed.join(", "));
                }
            }
        }
    }
    Ok(())
}
