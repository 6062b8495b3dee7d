use sluggish::{DispatchError, HttpMethod, Response, Router, RouterError, RouterResult};

fn expect_dispatch_error(result: RouterResult<Response>) -> DispatchError {
    match result.expect_err("expected dispatch error") {
        RouterError::Dispatch(err) => err,
        other => panic!("expected dispatch error, got {other:?}"),
    }
}

#[test]
fn router_when_two_patterns_overlap_then_first_registered_wins() {
    let router = Router::new();
    router
        .get("/users/:id", |_ctx| Response::text("by-id"))
        .expect("parameter route should register");
    router
        .get("/users/list", |_ctx| Response::text("listing"))
        .expect("literal route should register");

    let response = router
        .dispatch(HttpMethod::Get, "/users/list")
        .expect("overlapping path should dispatch");

    // no specificity ranking: /users/:id came first, so it captures "list"
    assert_eq!(response.body, b"by-id");
}

#[test]
fn router_when_literal_registered_first_then_it_shadows_the_parameter_route() {
    let router = Router::new();
    router
        .get("/users/list", |_ctx| Response::text("listing"))
        .expect("literal route should register");
    router
        .get("/users/:id", |_ctx| Response::text("by-id"))
        .expect("parameter route should register");

    let listing = router
        .dispatch(HttpMethod::Get, "/users/list")
        .expect("literal path should dispatch");
    assert_eq!(listing.body, b"listing");

    let by_id = router
        .dispatch(HttpMethod::Get, "/users/42")
        .expect("parameter path should dispatch");
    assert_eq!(by_id.body, b"by-id");
}

#[test]
fn router_when_same_pattern_two_methods_then_single_route_serves_both() {
    let router = Router::new();
    router
        .get("/things/:id", |_ctx| Response::text("got"))
        .expect("GET should register");
    router
        .delete("/things/:id", |_ctx| Response::text("deleted"))
        .expect("DELETE should register");

    assert_eq!(router.route_count(), 1);

    let got = router
        .dispatch(HttpMethod::Get, "/things/9")
        .expect("GET should dispatch");
    assert_eq!(got.body, b"got");

    let deleted = router
        .dispatch(HttpMethod::Delete, "/things/9")
        .expect("DELETE should dispatch");
    assert_eq!(deleted.body, b"deleted");
}

#[test]
fn router_when_method_not_registered_then_method_not_allowed() {
    let router = Router::new();
    router
        .get("/users/:id", |_ctx| Response::text("got"))
        .expect("route should register");

    match expect_dispatch_error(router.dispatch(HttpMethod::Post, "/users/42")) {
        DispatchError::MethodNotAllowed { path, method } => {
            assert_eq!(path, "/users/42");
            assert_eq!(method, HttpMethod::Post);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn router_when_first_match_lacks_method_then_no_backtracking() {
    let router = Router::new();
    router
        .get("/api/:resource", |_ctx| Response::text("generic"))
        .expect("first route should register");
    router
        .post("/api/orders", |_ctx| Response::text("ordered"))
        .expect("second route should register");

    // /api/orders structurally matches the first route, which has no POST;
    // dispatch stops there instead of falling through to the literal route
    match expect_dispatch_error(router.dispatch(HttpMethod::Post, "/api/orders")) {
        DispatchError::MethodNotAllowed { .. } => {}
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn router_when_same_pattern_and_method_reregistered_then_last_handler_wins() {
    let router = Router::new();
    router
        .get("/version", |_ctx| Response::text("v1"))
        .expect("first registration should succeed");
    router
        .get("/version", |_ctx| Response::text("v2"))
        .expect("re-registration should succeed");

    assert_eq!(router.route_count(), 1);

    let response = router
        .dispatch(HttpMethod::Get, "/version")
        .expect("route should dispatch");
    assert_eq!(response.body, b"v2");
}

#[test]
fn router_when_trailing_slash_on_request_then_route_not_found() {
    let router = Router::new();
    router
        .get("/users/:id", |_ctx| Response::text("got"))
        .expect("route should register");

    match expect_dispatch_error(router.dispatch(HttpMethod::Get, "/users/42/")) {
        DispatchError::RouteNotFound { path } => assert_eq!(path, "/users/42/"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn router_when_route_added_between_dispatches_then_it_becomes_reachable() {
    let router = Router::new();
    router
        .get("/a", |_ctx| Response::text("a"))
        .expect("first route should register");

    match expect_dispatch_error(router.dispatch(HttpMethod::Get, "/b")) {
        DispatchError::RouteNotFound { .. } => {}
        other => panic!("unexpected outcome: {other:?}"),
    }

    router
        .get("/b", |_ctx| Response::text("b"))
        .expect("late route should register");

    let response = router
        .dispatch(HttpMethod::Get, "/b")
        .expect("late route should dispatch");
    assert_eq!(response.body, b"b");
}

#[test]
fn router_when_users_scenario_then_spec_outcomes_hold() {
    let router = Router::new();
    router
        .get("/users/:id", |ctx| {
            Response::text(format!("user {}", ctx.param("id").unwrap_or("")))
        })
        .expect("route should register");

    let response = router
        .dispatch(HttpMethod::Get, "/users/42")
        .expect("GET /users/42 should dispatch");
    assert_eq!(response.body, b"user 42");

    match expect_dispatch_error(router.dispatch(HttpMethod::Post, "/users/42")) {
        DispatchError::MethodNotAllowed { .. } => {}
        other => panic!("unexpected outcome: {other:?}"),
    }

    match expect_dispatch_error(router.dispatch(HttpMethod::Get, "/users")) {
        DispatchError::RouteNotFound { .. } => {}
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn response_when_json_constructor_used_then_content_type_is_json() {
    let router = Router::new();
    router
        .get("/status", |_ctx| {
            Response::json(&serde_json::json!({ "ok": true }))
        })
        .expect("route should register");

    let response = router
        .dispatch(HttpMethod::Get, "/status")
        .expect("route should dispatch");

    assert_eq!(response.content_type, "application/json");
    assert_eq!(response.body, br#"{"ok":true}"#);
}
