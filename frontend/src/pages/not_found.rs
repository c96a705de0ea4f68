use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const QUICK_LINKS: [(&str, Route); 4] = [
    ("About Us", Route::About),
    ("Services", Route::Services),
    ("Our Work", Route::Work),
    ("Contact", Route::Contact),
];

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();

    let go_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    html! {
        <div class="not-found-page">
            <div class="not-found-inner">
                <div class="not-found-code">{"404"}</div>
                <h1>{"Page Not Found"}</h1>
                <p>
                    {"Oops! The page you're looking for seems to have gone on a digital adventure. Let's get you back on track."}
                </p>
                <div class="not-found-actions">
                    <Link<Route> to={Route::Home} classes="cta-button large">
                        {"⌂ Go Home"}
                    </Link<Route>>
                    <button class="ghost-button large dark" onclick={go_back}>
                        {"← Go Back"}
                    </button>
                </div>
                <div class="not-found-links">
                    { for QUICK_LINKS.iter().map(|(name, route)| html! {
                        <Link<Route> to={route.clone()} classes="text-link">{ *name }</Link<Route>>
                    }) }
                </div>
            </div>
            <div class="not-found-orb one"></div>
            <div class="not-found-orb two"></div>
            <style>
                {r#"
                .not-found-page {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 8rem 1.5rem 4rem;
                    background: linear-gradient(135deg, #00024D, #1A1A2E 60%, #4A9FFF);
                    color: #fff;
                    text-align: center;
                }
                .not-found-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 40rem;
                }
                .not-found-code {
                    font-size: clamp(6rem, 20vw, 12rem);
                    font-weight: 900;
                    line-height: 1;
                    background: linear-gradient(90deg, #fff, #4A9FFF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: fade-up 0.6s ease both;
                }
                .not-found-inner h1 {
                    font-size: 2.5rem;
                    margin: 1rem 0;
                }
                .not-found-inner p {
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 1.125rem;
                    margin-bottom: 2.5rem;
                }
                .not-found-actions {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .not-found-links {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .not-found-links .text-link {
                    color: rgba(255, 255, 255, 0.8);
                }
                .not-found-orb {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    filter: blur(80px);
                    animation: float 4s ease-in-out infinite;
                }
                .not-found-orb.one {
                    top: 15%;
                    left: 10%;
                    background: rgba(74, 159, 255, 0.3);
                }
                .not-found-orb.two {
                    bottom: 10%;
                    right: 10%;
                    background: rgba(139, 72, 255, 0.25);
                    animation-delay: 1s;
                }
                "#}
            </style>
        </div>
    }
}
