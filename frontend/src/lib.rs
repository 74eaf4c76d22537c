use yew::prelude::*;

pub mod config;
pub mod content;
pub mod error;

pub mod utils {
    pub mod listener;
    pub mod preload;
}

pub mod components {
    pub mod features_stack;
    pub mod hero;
    pub mod icons;
    pub mod navbar;
    pub mod pricing;
    pub mod showcase;
    pub mod thematic_grid;
}

pub mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    html! {
        <Landing />
    }
}
