use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{Footer, PitchCard, ProfileCard, Stats, Status};
use crate::dock::Dock;
use crate::store;

#[component]
pub fn Index() -> impl IntoView {
    let site = Resource::new_blocking(|| (), move |_| async { get_site().await });

    view! {
        {move || match site.get() {
            None => leptos::either::EitherOf3::A(view! { <p>{"Loading…"}</p> }.into_view()),
            Some(Ok(site)) => leptos::either::EitherOf3::B(view! { <Home site /> }.into_view()),
            Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                <p>{format!("Could not load the site: {}", err)}</p>
            }.into_view()),
        }}
    }
}

#[component]
fn Home(site: store::Site) -> impl IntoView {
    let store::Site {
        title,
        description,
        headline,
        tagline,
        now,
        previously,
        profile,
        socials,
        pitch,
        stats,
        dock,
    } = site;
    let name = profile.name.clone();

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <div class="dock-container">
            <Dock links=dock.links config=dock.config />
        </div>
        <main class="home">
            <h1>{headline}</h1>
            <section class="intro">
                <div class="about">
                    <p class="muted">{tagline}</p>
                    {now.map(|text| view! { <Status label="Now" text /> })}
                    {previously.map(|text| view! { <Status label="Previously" text /> })}
                </div>
                <ProfileCard profile socials />
            </section>
            <section class="highlights">
                {pitch.map(|pitch| view! { <PitchCard pitch /> })}
                <Stats stats />
            </section>
        </main>
        <Footer name />
    }
}

#[server(GetSite, "/api", "GetJson", "site")]
pub async fn get_site() -> Result<store::Site, ServerFnError> {
    let Some(store) = use_context::<store::ContentStore>() else {
        return Err(ServerFnError::new("the content store is missing from the context"));
    };
    store.load().map_err(|e| ServerFnError::new(e.to_string()))
}
