use http::Request;
use indoc::indoc;
use micro_router::{Handler, Params, Router, RouterConfig, RouterError, RouteType, compact_route};

static CONFIG: &str = indoc! {r#"
    {
        "routes": [
            {
                "alias": "home",
                "type": "static",
                "pattern": "/",
                "handler": {"controller": "pages", "action": "home"}
            },
            {
                "alias": "article",
                "type": "regex",
                "pattern": {"regex": "/articles/(\\d+)(?:/(\\w+))?", "params": ["id", "section"]},
                "handler": {"controller": "articles", "action": "view", "params": {"section": "main"}}
            }
        ],
        "compact": [
            ["/about", "pages", "show", {"page": "about"}, "about", "static"],
            ["/users/([a-z]+)", [null], "users", "profile", "userProfile", "regex"]
        ]
    }
"#};

fn router() -> Router {
    let config = RouterConfig::from_json(CONFIG).unwrap();
    let router = Router::from_config(config).unwrap();
    router.validate().unwrap();
    router
}

fn dispatch(router: &Router, uri: &str) -> Option<Handler> {
    let request = Request::builder().uri(uri).body(()).unwrap();
    router.dispatch(&request, "/blog")
}

#[test]
fn test_config_keeps_route_order() {
    let router = router();
    let aliases = router.routes().iter().filter_map(|route| route.alias()).collect::<Vec<_>>();

    assert_eq!(aliases, vec!["home", "article", "about", "userProfile"]);
    assert_eq!(router.routes().find_by_alias("about").unwrap().route_type(), RouteType::Static);
}

#[test]
fn test_dispatch_root() {
    let handler = dispatch(&router(), "http://localhost/blog").unwrap();

    assert_eq!(handler, Handler::new("pages", "home"));
}

#[test]
fn test_dispatch_static_route_with_default_params() {
    let handler = dispatch(&router(), "/blog/About/").unwrap();

    assert_eq!(handler.controller(), "pages");
    assert_eq!(handler.action(), "show");
    assert_eq!(handler.params(), &Params::from([("page", "about")]));
}

#[test]
fn test_dispatch_regex_default_params_are_kept() {
    let handler = dispatch(&router(), "/blog/articles/12/comments").unwrap();

    assert_eq!(handler.controller(), "articles");
    assert_eq!(handler.params().get("id"), Some("12"));
    assert_eq!(handler.params().get("section"), Some("main"));
}

#[test]
fn test_dispatch_regex_positional_key() {
    let handler = dispatch(&router(), "/blog/users/Alice").unwrap();

    assert_eq!(handler.action(), "profile");
    assert_eq!(handler.params().get_index(0), Some("alice"));
}

#[test]
fn test_dispatch_default_convention() {
    let handler = dispatch(&router(), "/blog/tags/list/rust/2").unwrap();

    assert_eq!(handler.controller(), "tags");
    assert_eq!(handler.action(), "list");
    assert_eq!(handler.params().positional_values().collect::<Vec<_>>(), vec!["rust", "2"]);
}

#[test]
fn test_dispatch_no_handler() {
    assert!(dispatch(&router(), "/blog/tags").is_none());
}

#[test]
fn test_dispatch_raw_path_is_not_decoded() {
    let handler = dispatch(&router(), "/blog/search/find/a%20b").unwrap();

    assert_eq!(handler.params().get_index(0), Some("a%20b"));
}

#[test]
fn test_builder_with_compact_routes() {
    let router = Router::builder()
        .compact(vec![
            compact_route!["/login", "auth", "login", "login", RouteType::Static],
            compact_route!["/logout", "auth", "logout", "logout", RouteType::Static],
        ])
        .unwrap()
        .build();

    assert_eq!(router.dispatch("/logout", ""), Some(Handler::new("auth", "logout")));
}

#[test]
fn test_builder_rejects_malformed_compact_routes() {
    let result = Router::builder().compact(vec![compact_route!["/login", "auth", "prefix"]]);

    assert!(result.is_err());
}

#[test]
fn test_invalid_regex_from_config() {
    let config = RouterConfig::from_json(indoc! {r#"
        {
            "compact": [
                ["/broken/(", [], "a", "b", "broken", "regex"],
                ["/about", "pages", "show", "about", "static"]
            ]
        }
    "#})
    .unwrap();
    let router = Router::from_config(config).unwrap();

    assert!(matches!(router.validate(), Err(RouterError::InvalidRegex { .. })));
    assert_eq!(router.dispatch("/about", ""), Some(Handler::new("pages", "show")));
    assert_eq!(router.dispatch("/about/me", "").unwrap().controller(), "about");
    assert!(router.dispatch("/anything", "").is_none());
}

#[test]
fn test_router_shared_between_threads() {
    let router = router();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let handler = router.dispatch("/blog/articles/7", "/blog").unwrap();
                assert_eq!(handler.params().get("id"), Some("7"));
            });
        }
    });
}
