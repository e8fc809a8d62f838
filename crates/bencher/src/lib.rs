use micro_router::{Handler, Params, RouteType, Router, compact_route};

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    path: &'static str,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, path: &'static str) -> Self {
        Self { name, group, path }
    }

    pub fn static_hit(name: &'static str, path: &'static str) -> Self {
        Self::new(name, TestGroup::Static, path)
    }

    pub fn regex_hit(name: &'static str, path: &'static str) -> Self {
        Self::new(name, TestGroup::Regex, path)
    }

    pub fn fallback(name: &'static str, path: &'static str) -> Self {
        Self::new(name, TestGroup::Fallback, path)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Static,
    Regex,
    Fallback,
}

pub const BASE_PATH: &str = "/app";

/// A router shaped like a small site: a few static pages followed by regex routes.
pub fn site_router() -> Router {
    let mut builder = Router::builder()
        .static_route("/", Handler::new("pages", "home"))
        .compact(vec![
            compact_route!["/about", "pages", "show", Params::from([("page", "about")]), "about", RouteType::Static],
            compact_route![
                "/contact",
                "pages",
                "show",
                Params::from([("page", "contact")]),
                "contact",
                RouteType::Static
            ],
            compact_route!["/news/(\\d+)", vec!["id"], "news", "view", "news", RouteType::Regex],
            compact_route!["/users/([a-z]+)/(\\w+)", vec!["name"], "users", "profile", "profile", RouteType::Regex],
        ])
        .expect("benchmark routes should be well formed");

    for index in 0..16 {
        builder = builder.static_route(format!("/static/page-{index}"), Handler::new("pages", "static"));
    }

    let router = builder.build();
    router.validate().expect("benchmark regexes should compile");
    router
}
