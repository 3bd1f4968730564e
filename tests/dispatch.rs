use std::thread;

use rand::{thread_rng, Rng};

use radix_router::{MatchError, Router};

fn petstore() -> Router<&'static str> {
    let mut r = Router::new();
    r.post("/pet", "add_pet").unwrap();
    r.put("/pet", "update_pet").unwrap();
    r.get("/pet/findByStatus", "find_pets_by_status").unwrap();
    r.get("/pet/findByTags", "find_pets_by_tags").unwrap();
    r.get("/pet/:petId", "get_pet_by_id").unwrap();
    r.post("/pet/:petId", "update_pet_with_form").unwrap();
    r.delete("/pet/:petId", "delete_pet").unwrap();
    r.post("/pet/:petId/uploadImage", "upload_file").unwrap();
    r.get("/store/inventory", "get_inventory").unwrap();
    r.post("/store/order", "place_order").unwrap();
    r.get("/store/order/:orderId", "get_order_by_id").unwrap();
    r.delete("/store/order/:orderId", "delete_order").unwrap();
    r.post("/user", "create_user").unwrap();
    r.get("/user/login", "login_user").unwrap();
    r.get("/user/logout", "logout_user").unwrap();
    r.get("/user/:username", "get_user_by_name").unwrap();
    r.put("/user/:username", "update_user").unwrap();
    r.delete("/user/:username", "delete_user").unwrap();
    r
}

fn check(
    r: &Router<&'static str>,
    method: &str,
    path: &str,
    handler: &str,
    params: &[(&str, &str)],
) {
    let m = r
        .dispatch(method, path)
        .unwrap_or_else(|e| panic!("{} {}: {}", method, path, e));
    assert_eq!(*m.handler, handler, "{} {}", method, path);
    assert_eq!(m.params.as_slice(), params, "{} {}", method, path);
}

#[test]
fn petstore_round_trip() {
    let r = petstore();
    check(&r, "POST", "/pet", "add_pet", &[]);
    check(&r, "PUT", "/pet", "update_pet", &[]);
    check(&r, "GET", "/pet/findByStatus", "find_pets_by_status", &[]);
    check(&r, "GET", "/pet/findByTags", "find_pets_by_tags", &[]);
    check(&r, "GET", "/pet/123", "get_pet_by_id", &[("petId", "123")]);
    check(&r, "POST", "/pet/123", "update_pet_with_form", &[("petId", "123")]);
    check(&r, "DELETE", "/pet/123", "delete_pet", &[("petId", "123")]);
    check(&r, "POST", "/pet/5/uploadImage", "upload_file", &[("petId", "5")]);
    check(&r, "GET", "/store/inventory", "get_inventory", &[]);
    check(&r, "POST", "/store/order", "place_order", &[]);
    check(&r, "GET", "/store/order/9", "get_order_by_id", &[("orderId", "9")]);
    check(&r, "DELETE", "/store/order/9", "delete_order", &[("orderId", "9")]);
    check(&r, "POST", "/user", "create_user", &[]);
    check(&r, "GET", "/user/login", "login_user", &[]);
    check(&r, "GET", "/user/logout", "logout_user", &[]);
    check(&r, "GET", "/user/log", "get_user_by_name", &[("username", "log")]);
    check(&r, "GET", "/user/ann", "get_user_by_name", &[("username", "ann")]);
    check(&r, "PUT", "/user/ann", "update_user", &[("username", "ann")]);
}

#[test]
fn static_routes_take_precedence() {
    let mut r = Router::new();
    r.get("/pet/:id", 1).unwrap();
    r.get("/pet/findByStatus", 2).unwrap();
    assert_eq!(*r.dispatch("GET", "/pet/findByStatus").unwrap().handler, 2);
    let m = r.dispatch("GET", "/pet/123").unwrap();
    assert_eq!(*m.handler, 1);
    assert_eq!(m.params.get("id"), Some("123"));
}

#[test]
fn shared_prefix_is_split_cleanly() {
    let mut r = Router::new();
    r.post("/pet", 1).unwrap();
    r.put("/pet/:petId", 2).unwrap();
    assert_eq!(*r.dispatch("POST", "/pet").unwrap().handler, 1);
    let m = r.dispatch("PUT", "/pet/55").unwrap();
    assert_eq!(*m.handler, 2);
    assert_eq!(m.params.get("petId"), Some("55"));
}

#[test]
fn misses_are_not_found() {
    let r = petstore();
    for (method, path) in [
        ("PATCH", "/pet"),
        ("GET", "/pet"),
        ("GET", "/pet/1/extra"),
        ("GET", "/store/inventory/"),
        ("GET", "/store"),
        ("GET", "/"),
        ("GET", ""),
    ] {
        assert_eq!(
            r.dispatch(method, path).unwrap_err(),
            MatchError::NotFound,
            "{} {}",
            method,
            path
        );
    }
}

#[test]
fn trailing_slash_is_literal() {
    let mut r = Router::new();
    r.get("/docs", 1).unwrap();
    r.get("/docs/", 2).unwrap();
    assert_eq!(*r.dispatch("GET", "/docs").unwrap().handler, 1);
    assert_eq!(*r.dispatch("GET", "/docs/").unwrap().handler, 2);
}

#[test]
fn unrelated_routes_leave_existing_matches_alone() {
    let mut r = Router::new();
    r.get("/pet/:petId", usize::MAX).unwrap();

    let mut rng = thread_rng();
    let mut longest_key = "GET /pet/:petId".len();
    for i in 0..10_000 {
        let path = format!("/r{}/{}", rng.gen_range(0..u64::MAX), i);
        longest_key = longest_key.max("GET ".len() + path.len());
        r.get(&path, i).unwrap();
    }
    assert_eq!(r.len(), 10_001);

    // Every node below the root holds at least one key byte, so tree height is bounded
    // by key length rather than by the number of routes.
    let stats = r.tree().stats();
    assert!(
        stats.max_height <= longest_key + 1,
        "height {} for keys of at most {} bytes",
        stats.max_height,
        longest_key
    );
    assert_eq!(stats.num_handlers, 10_001);

    let m = r.dispatch("GET", "/pet/7").unwrap();
    assert_eq!(*m.handler, usize::MAX);
    assert_eq!(m.params.get("petId"), Some("7"));
    assert_eq!(r.tree().stats().num_param_nodes, 1);
}

#[test]
fn concurrent_dispatch_is_consistent() {
    let r = petstore();
    let cases = [
        ("GET", "/pet/123", Some("get_pet_by_id")),
        ("GET", "/pet/findByStatus", Some("find_pets_by_status")),
        ("DELETE", "/store/order/1", Some("delete_order")),
        ("GET", "/user/logout", Some("logout_user")),
        ("PATCH", "/pet/1", None),
    ];

    thread::scope(|s| {
        for t in 0..8 {
            let r = &r;
            s.spawn(move || {
                for i in 0..20_000 {
                    let (method, path, expected) = cases[(i + t) % cases.len()];
                    let got = r.dispatch(method, path).ok().map(|m| *m.handler);
                    assert_eq!(got, expected, "{} {}", method, path);
                }
            });
        }
    });
}
