use yew::prelude::*;

mod config;
mod consent;
mod error;
mod components {
    pub mod cookie_banner;
    pub mod footer;
    pub mod hero_background;
    pub mod loader;
    pub mod navbar;
    pub mod reveal;
    pub mod whatsapp_widget;
}
mod intro {
    pub mod driver;
    pub mod sequencer;
}
mod particles {
    pub mod field;
}
mod pages {
    pub mod landing;
    pub mod sections;
}
mod scroll {
    pub mod refresh;
    pub mod signals;
    pub mod smooth;
}
mod utils {
    pub mod document;
    pub mod scheduler;
    pub mod storage;
}

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting wavilog site");
    yew::Renderer::<App>::new().render();
}
