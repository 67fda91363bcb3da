use leptos::prelude::LeptosOptions;

use crate::store::ContentStore;

/// State shared by the axum handlers.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub content: ContentStore,
}

// Needed by `leptos_axum::file_and_error_handler`.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(context: &Context) -> Self {
        context.leptos_options.clone()
    }
}
