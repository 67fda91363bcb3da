use leptos::prelude::*;

use crate::store::{Pitch, Profile, Social, Stat};

#[component]
pub fn Status(label: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="status">
            <span class="muted">{label}</span>
            <p>{text}</p>
        </div>
    }
}

#[component]
pub fn ProfileCard(profile: Profile, socials: Vec<Social>) -> impl IntoView {
    view! {
        <aside class="card profile">
            <div class="identity">
                {profile.avatar.map(|src| view! {
                    <img class="avatar" src=src alt=profile.name.clone() width="50" height="50" />
                })}
                <div>
                    <p class="name">{profile.name}</p>
                    <p class="muted">{profile.role}</p>
                </div>
            </div>
            <hr />
            <ul class="socials">
                {socials
                    .into_iter()
                    .map(|social| view! {
                        <li><a href=social.href target="_blank" rel="noopener noreferrer">{social.name}</a></li>
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
pub fn PitchCard(pitch: Pitch) -> impl IntoView {
    view! {
        <div class="card pitch">
            <p class="muted heading">{pitch.heading}</p>
            <p class="muted">{pitch.body}</p>
            {pitch.call_to_action.map(|action| view! {
                <a class="button" href=action.href>{action.name}</a>
            })}
        </div>
    }
}

#[component]
pub fn Stats(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <div class="card stats">
            {stats
                .into_iter()
                .map(|stat| view! {
                    <div class="stat">
                        <span class="value">{stat.value}</span>
                        <span class="muted">{stat.label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Footer(name: String) -> impl IntoView {
    view! {
        <footer>
            <p>
                <a href="#top"><small>{"\u{2191}"} Copyright {"\u{24d2}"} {name} {"\u{2191}"}</small></a>
            </p>
        </footer>
    }
}
