use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::NAV_SCROLLED_THRESHOLD_PX;
use crate::overlay::{portal_host, BodyScrollLock, CloseReason, NavOverlay};
use crate::Route;

pub const NAV_LINKS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Services", Route::Services),
    ("Work", Route::Work),
    ("Contact", Route::Contact),
];

fn page_scrolled() -> bool {
    window()
        .and_then(|w| w.scroll_y().ok())
        .map(|y| y > NAV_SCROLLED_THRESHOLD_PX as f64)
        .unwrap_or(false)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let is_scrolled = use_state_eq(page_scrolled);
    let overlay = use_mut_ref(|| NavOverlay::new(Rc::new(BodyScrollLock)));
    let portal = use_state(|| None::<Element>);
    let redraw = use_force_update();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                is_scrolled.set(page_scrolled());
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // The overlay only renders once there is a live document to portal into.
    {
        let portal = portal.clone();
        use_effect_with_deps(move |_| {
            portal.set(portal_host());
            || ()
        }, ());
    }

    {
        let overlay = overlay.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(move |path: &String| {
            if overlay.borrow_mut().on_route(path) {
                redraw.force_update();
            }
            || ()
        }, route.to_path());
    }

    {
        let overlay = overlay.clone();
        use_effect_with_deps(move |_| {
            move || {
                overlay.borrow_mut().close(CloseReason::Unmounted);
            }
        }, ());
    }

    let toggle_menu = {
        let overlay = overlay.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            overlay.borrow_mut().toggle();
            redraw.force_update();
        })
    };

    let close_menu = {
        let overlay = overlay.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            overlay.borrow_mut().close(CloseReason::CloseButton);
            redraw.force_update();
        })
    };

    let select_link = {
        let overlay = overlay.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            if overlay.borrow_mut().close(CloseReason::LinkSelected) {
                redraw.force_update();
            }
        })
    };

    let menu_open = overlay.borrow().is_open();

    let mobile_menu = match (&*portal, menu_open) {
        (Some(host), true) => yew::create_portal(
            html! {
                <div class="mobile-menu" role="dialog" aria-modal="true">
                    <button class="mobile-menu-close" aria-label="Close mobile menu" onclick={close_menu}>
                        {"✕"}
                    </button>
                    <div class="mobile-menu-glow top"></div>
                    <div class="mobile-menu-glow bottom"></div>
                    <div class="mobile-menu-links">
                        { for NAV_LINKS.iter().enumerate().map(|(index, (name, target))| html! {
                            <div
                                class={classes!("mobile-menu-link", (*target == route).then(|| "active"))}
                                style={format!("animation-delay: {}ms", index * 60)}
                                onclick={select_link.clone()}
                            >
                                <Link<Route> to={target.clone()}>{ *name }</Link<Route>>
                            </div>
                        }) }
                        <div class="mobile-menu-cta" onclick={select_link.clone()}>
                            <Link<Route> to={Route::Contact} classes="cta-button">
                                {"Get Started →"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            },
            host.clone(),
        ),
        _ => html! {},
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/images/logo/ethovia-logo.png" alt="Ethovia Logo" width="160" height="160" />
                </Link<Route>>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(name, target)| {
                        let active = *target == route;
                        html! {
                            <Link<Route> to={target.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                { *name }
                                if active {
                                    <span class="nav-active-indicator"></span>
                                }
                            </Link<Route>>
                        }
                    }) }
                </div>

                <div class="nav-cta">
                    <Link<Route> to={Route::Contact} classes="cta-button">
                        {"Get Started →"}
                    </Link<Route>>
                </div>

                if !menu_open {
                    <button class="burger-menu" aria-label="Open mobile menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                }
            </div>
            { mobile_menu }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                    animation: nav-drop 0.6s ease-out;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img {
                    width: 120px;
                    height: auto;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    position: relative;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #4A9FFF;
                }
                .nav-link.active {
                    color: #22d3ee;
                }
                .nav-active-indicator {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: -6px;
                    height: 2px;
                    border-radius: 2px;
                    background: linear-gradient(90deg, #22d3ee, #4A9FFF);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    z-index: 10000;
                }
                .burger-menu span {
                    width: 26px;
                    height: 2px;
                    background: #fff;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    height: 100dvh;
                    overflow-x: hidden;
                    z-index: 9999;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(24px) saturate(180%);
                    -webkit-backdrop-filter: blur(24px) saturate(180%);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: fade-in 0.2s ease;
                }
                .mobile-menu-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    font-size: 1.75rem;
                    color: #fff;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .mobile-menu-glow {
                    position: absolute;
                    width: 18rem;
                    height: 18rem;
                    border-radius: 50%;
                    filter: blur(96px);
                    pointer-events: none;
                }
                .mobile-menu-glow.top {
                    top: 10%;
                    left: -4rem;
                    background: rgba(74, 159, 255, 0.25);
                }
                .mobile-menu-glow.bottom {
                    bottom: 10%;
                    right: -4rem;
                    background: rgba(34, 211, 238, 0.2);
                }
                .mobile-menu-links {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .mobile-menu-link {
                    animation: fade-up 0.3s ease both;
                }
                .mobile-menu-link a {
                    color: #fff;
                    font-size: 2rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .mobile-menu-link.active a {
                    color: #22d3ee;
                }
                .mobile-menu-cta {
                    margin-top: 1.5rem;
                }
                @keyframes nav-drop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                @media (max-width: 900px) {
                    .nav-links, .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
