use leptos::{either::Either, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::carousel::{CarouselState, AUTO_ADVANCE_MS};
use crate::content::{MediaKind, MediaSet};

use super::visibility::use_visibility_once;

/// Sliding strip of a project's screenshots and clips. Stays idle until it
/// scrolls into view, then images rotate on a timer and videos hand off when
/// their playback ends.
#[component]
pub fn MediaCarousel(media: MediaSet) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let visible = use_visibility_once(container_ref);
    let state = RwSignal::new(CarouselState::new(media.clone()));

    // one slot per item; only the videos attach an element
    let video_refs = StoredValue::new(
        media
            .items()
            .iter()
            .map(|_| NodeRef::<html::Video>::new())
            .collect::<Vec<_>>(),
    );

    Effect::new(move |_| {
        if visible.get() {
            state.update(|s| s.mark_visible());
        }
    });

    // Auto-advance one-shot. Every state change cancels and re-arms it, so
    // a manual jump always restarts the full delay.
    let UseTimeoutFnReturn { start, stop, .. } =
        use_timeout_fn(move |_: ()| state.update(|s| s.advance()), AUTO_ADVANCE_MS);
    Effect::new(move |_| {
        let armed = state.with(|s| s.timer_armed());
        stop();
        if armed {
            start(());
        }
    });

    // Keep exactly one video playing: the current one, restarted from the
    // top whenever it becomes current again.
    Effect::new(move |_| {
        let (index, on_screen) = state.with(|s| (s.index(), s.visible()));
        if !on_screen {
            return;
        }
        video_refs.with_value(|refs| {
            for (i, node) in refs.iter().enumerate() {
                let Some(video) = node.get_untracked() else {
                    continue;
                };
                if i == index {
                    video.set_current_time(0.0);
                    let _ = video.play();
                } else {
                    let _ = video.pause();
                }
            }
        });
    });

    view! {
        <div node_ref=container_ref class="intro-slider relative overflow-hidden">
            <div
                class=move || {
                    if visible.get() {
                        "slider flex transition-transform duration-500 opacity-100"
                    } else {
                        "slider flex transition-transform duration-500 opacity-0"
                    }
                }
                style:transform=move || {
                    format!("translateX(-{}%)", state.with(|s| s.index()) * 100)
                }
            >
                {media
                    .items()
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let src = item.src();
                        match item.kind() {
                            MediaKind::Video => {
                                Either::Left(
                                    view! {
                                        <video
                                            node_ref=video_refs.with_value(|refs| refs[index])
                                            class="w-full h-auto"
                                            controls
                                            muted
                                            on:ended=move |_| {
                                                state.update(|s| s.playback_ended(index))
                                            }
                                            on:error=move |_| {
                                                log::warn!("failed to load video {src}")
                                            }
                                        >
                                            <source src=src type="video/mp4" />
                                            "Your browser does not support the video tag."
                                        </video>
                                    },
                                )
                            }
                            MediaKind::Image => {
                                Either::Right(
                                    view! {
                                        <img
                                            src=src
                                            alt=format!("Media {}", index + 1)
                                            class="w-full h-auto"
                                            on:error=move |_| {
                                                log::warn!("failed to load image {src}")
                                            }
                                        />
                                    },
                                )
                            }
                        }
                    })
                    .collect_view()}
            </div>
            // navigation only renders once the carousel has been seen
            {move || {
                visible
                    .get()
                    .then(|| {
                        view! {
                            <button
                                class="prev-btn absolute top-1/2 left-4 transform -translate-y-1/2 z-10 bg-gradient-to-r from-indigo-600 to-purple-600 text-white w-10 h-10 rounded-full flex items-center justify-center shadow-md hover:bg-indigo-600 active:scale-95 transition-all duration-20"
                                on:click=move |_| state.update(|s| s.retreat())
                            >
                                "←"
                            </button>
                            <button
                                class="next-btn absolute top-1/2 right-4 transform -translate-y-1/2 z-10 bg-gradient-to-r from-indigo-600 to-purple-600 text-white w-10 h-10 rounded-full flex items-center justify-center shadow-md hover:bg-indigo-600 active:scale-95 transition-all duration-20"
                                on:click=move |_| state.update(|s| s.advance())
                            >
                                "→"
                            </button>
                        }
                    })
            }}
        </div>
    }
}
