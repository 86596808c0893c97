use std::rc::Rc;

use gloo_events::EventListener;
use yew::prelude::*;

use crate::config::IntroTimings;
use crate::intro::driver::{IntroCallbacks, IntroDriver};
use crate::intro::sequencer::IntroSequencer;
use crate::utils::document::document_loaded;
use crate::utils::scheduler::{BrowserScheduler, TaskHandle};

#[derive(Properties, PartialEq, Clone)]
pub struct LoaderProps {
    /// Fired once, on the load event or when the safety timeout stands in for it.
    pub on_page_loaded: Callback<()>,
    /// Fired once, when the curtains start to open.
    pub on_reveal_start: Callback<()>,
    /// Fired when the exit animation is over and the overlay can go.
    pub on_hidden: Callback<()>,
}

const CURTAIN: &str = "fixed left-0 w-full h-[50vh] bg-[#050505] transition-transform duration-[1200ms] ease-[cubic-bezier(0.87,0,0.13,1)]";
const W_PATH: &str = "M15 25L37 75L50 45L63 75L85 25";

#[function_component]
pub fn Loader(props: &LoaderProps) -> Html {
    let intro = use_state(IntroSequencer::new);

    {
        let intro = intro.clone();
        let on_page_loaded = props.on_page_loaded.clone();
        let on_reveal_start = props.on_reveal_start.clone();
        let on_hidden = props.on_hidden.clone();
        use_effect_with_deps(
            move |_| {
                let on_update = Callback::from(move |snapshot: IntroSequencer| {
                    let hidden = !snapshot.overlay_mounted();
                    intro.set(snapshot);
                    if hidden {
                        on_hidden.emit(());
                    }
                });
                let driver = IntroDriver::start(
                    Rc::new(BrowserScheduler),
                    IntroTimings::default(),
                    IntroCallbacks {
                        on_update,
                        on_page_loaded,
                        on_reveal: on_reveal_start,
                    },
                );
                watch_page_load(&driver);
                move || drop(driver)
            },
            (),
        );
    }

    if !intro.overlay_mounted() {
        return html! {};
    }

    let revealing = intro.is_revealing();
    html! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center pointer-events-none">
            <div class={classes!(CURTAIN, "top-0", if revealing { "-translate-y-full" } else { "translate-y-0" })} />
            <div class={classes!(CURTAIN, "bottom-0", if revealing { "translate-y-full" } else { "translate-y-0" })} />

            <div class={classes!(
                "relative", "z-[110]", "flex", "flex-col", "items-center", "transition-all", "duration-700",
                if revealing { "opacity-0 scale-75" } else { "opacity-100 scale-100" }
            )}>
                <svg width="120" height="120" viewBox="0 0 100 100" fill="none" xmlns="http://www.w3.org/2000/svg" class="loader-w">
                    <defs>
                        <linearGradient id="paint0_linear" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#00FFFF" />
                            <stop offset="100%" stop-color="#A855F7" />
                        </linearGradient>
                        <mask id="w-mask">
                            <path d={W_PATH} stroke="white" stroke-width="8" stroke-linecap="round" stroke-linejoin="round" fill="none" />
                        </mask>
                    </defs>
                    <g mask="url(#w-mask)">
                        <rect x="-50" y="-50" width="200" height="200" fill="url(#paint0_linear)" class="loader-gradient-rect" />
                    </g>
                    <path d={W_PATH} stroke="white" stroke-width="1" stroke-opacity="0.2" stroke-linecap="round" stroke-linejoin="round" fill="none" />
                </svg>
                <div class="mt-6 flex flex-col items-center gap-2">
                    <span class="text-cyan-400 font-bold tracking-[0.3em] text-xs uppercase animate-pulse">
                        {intro.status_caption()}
                    </span>
                    <div class="w-32 h-[2px] bg-white/5 rounded-full overflow-hidden">
                        <div class={classes!(
                            "h-full", "bg-gradient-to-r", "from-cyan-400", "to-purple-600", "transition-all",
                            "duration-[2500ms]", "ease-out", "w-full", "origin-left",
                            if intro.is_ready_to_exit() { "scale-x-100" } else { "scale-x-50" }
                        )}></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Feeds the host load event into the driver, or fires straight away when the
/// document finished loading before the overlay mounted.
fn watch_page_load(driver: &IntroDriver) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if document_loaded(&window) {
        driver.page_loaded();
        return;
    }
    let trigger = driver.page_loaded_trigger();
    let listener = EventListener::once(&window, "load", move |_| trigger());
    driver.keep_until_hidden(TaskHandle::new(listener));
}
