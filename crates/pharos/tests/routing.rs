//! Facade-level smoke tests through the prelude and test client.

use std::sync::Arc;

use pharos::prelude::*;
use pharos_test::TestClient;

fn blog_controller() -> Arc<dyn Controller> {
    Arc::new(
        FnController::builder("controllers::blog::PostController")
            .handler(HandlerDescriptor::new("indexAction"), |_args, _response| {
                Some("post list".to_string())
            })
            .handler(
                HandlerDescriptor::new("getShowAction")
                    .with_route(RouteSpec::new("/blog/post/{id}"))
                    .with_param(ParamSpec::int("id")),
                |args, _response| Some(format!("post {}", args.int("id").unwrap_or_default())),
            )
            .handler(
                HandlerDescriptor::new("postCommentAction").with_param(ParamSpec::string("slug")),
                |_args, _response| Some("comment stored".to_string()),
            )
            .build(),
    )
}

#[test]
fn test_mixed_route_sources_on_one_controller() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_controller(blog_controller()).unwrap();
    let client = TestClient::new(dispatcher);

    // Convention: namespace "blog", index action.
    client.get("/blog").assert_ok().assert_body("post list");

    // Annotation route wins over what the convention would derive.
    client.get("/blog/post/9").assert_ok().assert_body("post 9");
    client.get("/blog/show/9").assert_not_found();

    // Convention with a method prefix.
    client.post("/blog/comment").assert_ok();
    client.get("/blog/comment").assert_not_found();
}

#[test]
fn test_config_driven_mounting() {
    let config = ConfigLoader::new()
        .with_string(
            r#"
            [[controllers]]
            controller = "controllers::blog::PostController"
            path = "/"
            "#,
            "toml",
        )
        .unwrap()
        .load();

    let mut dispatcher = Dispatcher::with_config(
        config.route_sources().unwrap(),
        config.base_paths().unwrap(),
    );
    dispatcher.register_controller(blog_controller()).unwrap();
    let client = TestClient::new(dispatcher);

    // "/" mounts at the root under the controller's short-name segment.
    client.get("/post").assert_ok().assert_body("post list");
    client.post("/post/comment").assert_ok();

    // The annotation route is unaffected by the mount.
    client.get("/blog/post/3").assert_ok().assert_body("post 3");
}

#[test]
fn test_error_bodies_surface_context() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_controller(blog_controller()).unwrap();
    let client = TestClient::new(dispatcher);

    client
        .get("/blog/post/nine")
        .assert_not_found()
        .assert_body_contains("'id'")
        .assert_body_contains("int");

    client.get("/nowhere").assert_not_found().assert_body("404 Not Found");
}
