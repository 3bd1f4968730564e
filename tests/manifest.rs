use std::path::Path;

use radix_router::{ManifestError, RouteError, RouteManifest, Router};

fn petstore_manifest() -> RouteManifest {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/petstore.toml");
    RouteManifest::load(path).unwrap()
}

#[test]
fn loads_petstore_manifest() {
    let manifest = petstore_manifest();
    assert_eq!(manifest.routes.len(), 19);

    let router = Router::from_manifest(&manifest, |name| Some(name.to_string())).unwrap();
    assert_eq!(router.len(), 19);

    let m = router.dispatch("GET", "/store/order/12").unwrap();
    assert_eq!(m.handler, "get_order_by_id");
    assert_eq!(m.params.get("orderId"), Some("12"));

    let m = router.dispatch("GET", "/user/logout").unwrap();
    assert_eq!(m.handler, "logout_user");

    let m = router.dispatch("POST", "/user/createWithList").unwrap();
    assert_eq!(m.handler, "create_users_with_list_input");

    assert_eq!(router.allowed_methods("/pet"), vec!["POST", "PUT"]);
}

#[test]
fn resolver_controls_handlers() {
    let manifest = petstore_manifest();
    let err = Router::from_manifest(&manifest, |name| {
        (!name.starts_with("delete")).then_some(())
    })
    .unwrap_err();
    assert!(matches!(
        err,
        ManifestError::UnknownHandler { ref name, .. } if name == "delete_pet"
    ));
}

#[test]
fn conflicting_manifest_is_rejected() {
    let manifest = RouteManifest::from_toml_str(
        r#"
[[route]]
method = "GET"
path = "/pet/:petId"
handler = "a"

[[route]]
method = "GET"
path = "/pet/:id/photos"
handler = "b"
"#,
    )
    .unwrap();
    let err = Router::from_manifest(&manifest, |_| Some(())).unwrap_err();
    assert!(matches!(
        err,
        ManifestError::Route(RouteError::ParameterConflict { .. })
    ));
}
