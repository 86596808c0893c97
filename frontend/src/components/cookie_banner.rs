use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONSENT_PROMPT_DELAY_MS;
use crate::consent::{record_consent, ConsentPrompt};
use crate::utils::scheduler::BrowserScheduler;
use crate::utils::storage::{KeyValueStore, LocalStorage, MemoryStore};

fn open_store() -> Rc<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("{}, consent is remembered for this visit only", e);
            Rc::new(MemoryStore::default())
        }
    }
}

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let is_visible = use_state(|| false);
    let store = use_memo(|_| open_store(), ());

    {
        let is_visible = is_visible.clone();
        let store = Rc::clone(&store);
        use_effect_with_deps(
            move |_| {
                let prompt = ConsentPrompt::mount(
                    &**store,
                    &BrowserScheduler,
                    CONSENT_PROMPT_DELAY_MS,
                    Callback::from(move |_| is_visible.set(true)),
                );
                move || drop(prompt)
            },
            (),
        );
    }

    let on_accept = {
        let is_visible = is_visible.clone();
        let store = Rc::clone(&store);
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = record_consent(&**store) {
                gloo_console::error!(format!("Failed to store cookie consent: {}", e));
            }
            is_visible.set(false);
        })
    };

    let on_later = {
        let is_visible = is_visible.clone();
        Callback::from(move |_: MouseEvent| is_visible.set(false))
    };

    if !*is_visible {
        return html! {};
    }

    html! {
        <div class="fixed bottom-6 left-6 right-6 md:right-auto md:max-w-md z-[70] animate-in fade-in slide-in-from-bottom-10 duration-700">
            <div class="glass p-6 rounded-3xl border border-white/10 shadow-2xl flex flex-col gap-4">
                <div class="flex items-center gap-3">
                    <div class="w-8 h-8 rounded-full bg-cyan-500/20 flex items-center justify-center">
                        <span class="text-cyan-400">{"🍪"}</span>
                    </div>
                    <h4 class="font-bold text-white">{"Optimize Your Experience"}</h4>
                </div>
                <p class="text-sm text-gray-400 leading-relaxed">
                    {"We use essential cookies to store configuration data and cache assets, ensuring the website loads "}
                    <span class="text-cyan-400 font-semibold">{"faster"}</span>
                    {" and runs smoother for your next visit."}
                </p>
                <div class="flex gap-3">
                    <button
                        onclick={on_accept}
                        class="flex-1 py-3 bg-cyan-500 hover:bg-cyan-400 text-black font-bold rounded-xl text-sm transition-all"
                    >
                        {"Accept & Speed Up"}
                    </button>
                    <button
                        onclick={on_later}
                        class="px-6 py-3 border border-white/10 hover:bg-white/5 text-gray-400 font-medium rounded-xl text-sm transition-all"
                    >
                        {"Later"}
                    </button>
                </div>
            </div>
        </div>
    }
}
