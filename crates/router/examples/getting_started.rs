use micro_router::{Handler, Params, RouteType, Router, compact_route};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let router = Router::builder()
        .static_route("/", Handler::new("pages", "home"))
        .regex_route("/news/(\\d+)", [Some("id".to_string())], Handler::new("news", "view"))
        .compact(vec![
            compact_route!["/about", "pages", "show", Params::from([("page", "about")]), "about", RouteType::Static],
            compact_route!["/users/([a-z]+)/(\\w+)", vec!["name"], "users", "profile", "profile", RouteType::Regex],
        ])
        .expect("compact routes should be well formed")
        .build();

    router.validate().expect("route regexes should compile");

    let paths =
        ["/app", "/app/about", "/app/News/42/", "/app/users/alice/posts", "/app/blog/archive/2024", "/app/blog"];
    for path in paths {
        match router.dispatch(path, "/app") {
            Some(handler) => info!(path, ?handler, "dispatched"),
            None => warn!(path, "no handler found"),
        }
    }
}
