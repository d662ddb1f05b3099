use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod state;
pub mod components {
    pub mod fade_in;
    pub mod float;
    pub mod header;
    pub mod line_button;
    pub mod section_heading;
    pub mod sticky_bar;
}
pub mod sections {
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod problems;
    pub mod process;
    pub mod reasons;
    pub mod solution;
    pub mod story;
    pub mod testimonials;
}
pub mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
