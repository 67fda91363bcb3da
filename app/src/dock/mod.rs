//! A horizontal dock of links whose icons grow as the pointer gets close,
//! like the macOS dock.
//!
//! The [`Dock`] owns a single [`Pointer`] signal written by its mouse
//! handlers, and hands a read-only view of it to each [`DockIcon`] it builds.
//! Icons map their distance to the pointer through [`DockConfig::size_target`]
//! and animate toward that size with a [`Spring`], one animation frame at a
//! time.

mod config;
mod motion;
mod pointer;
mod profile;
mod spring;

pub use config::{Direction, DockConfig, SpringConfig};
pub use motion::IconMotion;
pub use pointer::{IconGeometry, Pointer};
pub use profile::interpolate;
pub use spring::Spring;

use leptos::{html, prelude::*};
use serde::{Deserialize, Serialize};

/// Frame duration assumed when no timing is available, in seconds.
const FRAME: f64 = 1.0 / 60.0;
/// Frames longer than this (e.g. the tab was in the background) are
/// shortened so the icons don't teleport.
const MAX_FRAME: f64 = 0.1;

/// An external link shown in the dock.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DockLink {
    pub name: String,
    pub href: String,
    pub icon: String,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Smallest screen size on which a dock link shows up.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Always,
    Sm,
    Md,
    Lg,
}

impl Visibility {
    pub fn class(&self) -> &'static str {
        match self {
            Visibility::Always => "",
            Visibility::Sm => "from-sm",
            Visibility::Md => "from-md",
            Visibility::Lg => "from-lg",
        }
    }
}

#[component]
pub fn Dock(links: Vec<DockLink>, #[prop(optional)] config: DockConfig) -> impl IntoView {
    let pointer = RwSignal::new(Pointer::Away);
    log::debug!("dock with {} links: {:?}", links.len(), config);

    view! {
        <nav
            class=format!("dock {}", config.direction.class())
            on:mousemove=move |ev| pointer.set(Pointer::At(f64::from(ev.page_x())))
            on:mouseleave=move |_| pointer.set(Pointer::Away)
        >
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <DockIcon pointer=pointer.read_only() config class=link.visibility.class()>
                            <a href=link.href target="_blank" rel="noopener noreferrer">
                                <img src=link.icon alt=link.name.clone() title=link.name />
                            </a>
                        </DockIcon>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn DockIcon(
    pointer: ReadSignal<Pointer>,
    config: DockConfig,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let size = RwSignal::new(config.min_size);
    let motion = StoredValue::new(IconMotion::new(config));

    // Only runs in the browser: measure ourselves again every time the
    // pointer moves, and wake the frame loop up if it went to sleep.
    Effect::new(move |_| {
        let pointer = pointer.get();
        let geometry = node_ref
            .get_untracked()
            .and_then(|element| IconGeometry::measure(&element));
        if on_pointer(motion, pointer, geometry) {
            animate(motion, size, None);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("dock-icon {class}")
            style:width=move || format!("{:.2}px", size.get())
        >
            {children()}
        </div>
    }
}

/// Retarget `motion`, returns whether a frame loop has to be started for it.
fn on_pointer(
    motion: StoredValue<IconMotion>,
    pointer: Pointer,
    geometry: Option<IconGeometry>,
) -> bool {
    motion
        .try_update_value(|motion| {
            motion.retarget(pointer, geometry);
            motion.start_animating()
        })
        .unwrap_or(false)
}

/// Advance `motion` by one frame and publish its size, returns whether
/// another frame is needed. Stops once the spring settles or the icon is
/// unmounted.
fn on_frame(motion: StoredValue<IconMotion>, size: RwSignal<f64>, dt: f64) -> bool {
    let Some((rendered, animating)) =
        motion.try_update_value(|motion| (motion.advance(dt), motion.is_animating()))
    else {
        return false;
    };
    size.try_set(rendered);
    animating
}

fn animate(motion: StoredValue<IconMotion>, size: RwSignal<f64>, last_frame: Option<f64>) {
    request_animation_frame(move || {
        let now = now_ms();
        let dt = match (last_frame, now) {
            (Some(last), Some(now)) => ((now - last) / 1000.0).clamp(0.0, MAX_FRAME),
            _ => FRAME,
        };
        if on_frame(motion, size, dt) {
            animate(motion, size, now);
        }
    });
}

fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
}
