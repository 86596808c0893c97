use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::components::cookie_banner::CookieBanner;
use crate::components::footer::Footer;
use crate::components::loader::Loader;
use crate::components::navbar::Navbar;
use crate::components::whatsapp_widget::WhatsAppWidget;
use crate::pages::sections::{Agents, Control, Hero, Services, Specialists, Support, Voice, Workflows};
use crate::scroll::refresh::ScrollRefresh;
use crate::scroll::signals::{Band, LayoutSnapshot, ScrollSignals};
use crate::scroll::smooth::SmoothScroll;
use crate::utils::scheduler::BrowserScheduler;

fn band(node: &NodeRef) -> Option<Band> {
    node.cast::<Element>().map(|element| {
        let rect = element.get_bounding_client_rect();
        Band {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    })
}

fn measure(hero: &NodeRef, services: &NodeRef) -> LayoutSnapshot {
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    LayoutSnapshot {
        viewport_height,
        parallax_section: band(services),
        hero: band(hero),
    }
}

/// Landing page shell: loader, consent prompt and the revealed content.
#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let services_ref = use_node_ref();
    let revealed = use_state(|| false);
    let loader_mounted = use_state(|| true);
    let signals = use_state_eq(ScrollSignals::default);

    let refresher = {
        let hero_ref = hero_ref.clone();
        let services_ref = services_ref.clone();
        let signals = signals.clone();
        use_memo(
            move |_| {
                ScrollRefresh::new(
                    move || measure(&hero_ref, &services_ref),
                    Callback::from(move |next| signals.set(next)),
                )
            },
            (),
        )
    };

    {
        let refresher = Rc::clone(&refresher);
        use_effect_with_deps(
            move |_| {
                let on_scroll = Callback::from(move |_: f64| refresher.on_scroll());
                let scroll = SmoothScroll::attach(&BrowserScheduler, on_scroll);
                if scroll.is_none() {
                    log::warn!("smooth scrolling unavailable, falling back to native scroll");
                }
                move || drop(scroll)
            },
            (),
        );
    }

    let on_page_loaded = {
        let refresher = Rc::clone(&refresher);
        Callback::from(move |_| refresher.on_page_loaded())
    };
    let on_reveal_start = {
        let revealed = revealed.clone();
        let refresher = Rc::clone(&refresher);
        Callback::from(move |_| {
            log::debug!("intro finished, revealing page");
            revealed.set(true);
            refresher.on_reveal_start();
        })
    };
    let on_hidden = {
        let loader_mounted = loader_mounted.clone();
        Callback::from(move |_| loader_mounted.set(false))
    };

    let content_state = if *revealed {
        "opacity-100 scale-100 blur-0 translate-y-0"
    } else {
        "opacity-0 scale-[0.98] blur-xl translate-y-10"
    };

    html! {
        <div class="relative min-h-screen">
            if *loader_mounted {
                <Loader {on_page_loaded} {on_reveal_start} {on_hidden} />
            }
            <CookieBanner />

            <div class={classes!("transition-all", "duration-1000", "ease-[cubic-bezier(0.23,1,0.32,1)]", content_state)}>
                <Navbar />
                <WhatsAppWidget is_visible={signals.hero_scrolled_past} />
                <main>
                    <Hero node_ref={hero_ref} />
                    <Services node_ref={services_ref} parallax_offset={signals.parallax_offset} />
                    <Agents />
                    <Voice />
                    <Specialists />
                    <Support />
                    <Workflows />
                    <Control />
                </main>
                <Footer />
            </div>
        </div>
    }
}
