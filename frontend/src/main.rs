use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod overlay;
mod contact {
    pub mod api;
    pub mod form;
}
mod scroll;
mod components {
    pub mod featured_work;
    pub mod footer;
    pub mod nav;
    pub mod scroll_top;
    pub mod section_title;
    pub mod smooth_scroll;
}
mod pages {
    pub mod about;
    pub mod case_study;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod services;
    pub mod termsprivacy;
    pub mod work;
}

use components::{footer::Footer, nav::Nav, smooth_scroll::SmoothScrollProvider};
use pages::{
    about::About,
    case_study::CaseStudyPage,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    services::Services,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
    work::Work,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/work")]
    Work,
    #[at("/work/:slug")]
    WorkDetail { slug: String },
    #[at("/contact")]
    Contact,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        },
        Route::WorkDetail { slug } => {
            info!("Rendering case study {}", slug);
            html! { <CaseStudyPage {slug} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SmoothScrollProvider />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
