#![recursion_limit = "256"]

use anyhow::Context as _;
use leptos::prelude::*;

use app::store;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/api/{*fn_name}";
const CONTENT_PATH_ENV: &str = "PORTFOLIO_CONTENT_PATH";
const DEFAULT_CONTENT_PATH: &str = "content/site.yml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not read the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let content_path = std::env::var_os(CONTENT_PATH_ENV)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from(DEFAULT_CONTENT_PATH));
    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        content: store::ContentStore::new(content_path, leptos_options.env == Env::PROD),
    };
    // Fail early on a broken content file rather than on the first request:
    ctx.content.load().with_context(|| {
        format!("Could not load the site content, set {} to change its path", CONTENT_PATH_ENV)
    })?;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.content.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler)
            .post(leptos_server_fn_axum_handler);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not listen on {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || { provide_context(ctx.content.clone()); };
    leptos_axum::handle_server_fns_with_context(additional_context, request)
        .await
}
