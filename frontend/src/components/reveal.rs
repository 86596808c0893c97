use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealProps {
    #[prop_or_else(|| AttrValue::from("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its content in the first time it scrolls into view.
#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, revealed.clone()));
                if observer.is_none() {
                    revealed.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let state = if *revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    html! {
        <@{props.tag.to_string()}
            ref={node}
            id={props.id.clone()}
            class={classes!("transition-all", "duration-1000", state, props.class.clone())}
        >
            { for props.children.iter() }
        </@>
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, EntriesCallback)> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .any(|entry| entry.is_intersecting());
            if visible {
                revealed.set(true);
                observer.disconnect();
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}
