use contracts::{portfolio, theme::hero_gradient, CaseStudy};
use web_sys::{Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::scroll::browser::GsapTimeline;
use crate::scroll::showcase::HorizontalShowcase;
use crate::Route;

const FEATURED_COUNT: usize = 3;

fn year_of(record: &CaseStudy) -> &str {
    record.date.rsplit(' ').next().unwrap_or(&record.date)
}

fn showcase_panel(record: &CaseStudy) -> Html {
    let words: Vec<&str> = record.title.split(' ').collect();
    html! {
        <div class="showcase-panel">
            <Link<Route> to={Route::WorkDetail { slug: record.slug.clone() }} classes="showcase-link">
                <div class="showcase-card" style={format!("background: {}", hero_gradient(&record.category))}>
                    <img class="showcase-image" src={record.hero_image_path.clone()} alt={record.title.clone()} loading="lazy" />
                    <div class="showcase-cursor"><span>{"VIEW"}</span></div>
                    <div class="showcase-content">
                        <div class="showcase-top">
                            <span class="showcase-eyebrow">{"Project"}</span>
                            <span class="showcase-view">{"View Project →"}</span>
                        </div>
                        <h2 class="showcase-title">
                            { for words.iter().enumerate().map(|(i, word)| html! {
                                <span class={classes!("showcase-word", (i == 1).then(|| "outline"))}>{ *word }</span>
                            }) }
                        </h2>
                        <div class="showcase-meta">
                            <p class="showcase-year">{ year_of(record) }</p>
                            <p class="showcase-category">{ record.category.clone() }</p>
                        </div>
                    </div>
                </div>
            </Link<Route>>
        </div>
    }
}

/// Home page section that pins while the first case studies scroll past
/// horizontally.
#[function_component(FeaturedWork)]
pub fn featured_work() -> Html {
    let container = use_node_ref();
    let track = use_node_ref();
    let showcase = use_mut_ref(|| None::<HorizontalShowcase<GsapTimeline>>);

    {
        let container = container.clone();
        let track = track.clone();
        let showcase = showcase.clone();
        use_effect_with_deps(move |_| {
            if let (Some(container), Some(track)) = (container.cast::<HtmlElement>(), track.cast::<HtmlElement>()) {
                let mut timeline = HorizontalShowcase::new(GsapTimeline::new(container, track));
                timeline.mount();
                *showcase.borrow_mut() = Some(timeline);
            }
            move || {
                let mounted = showcase.borrow_mut().take();
                if let Some(mut timeline) = mounted {
                    timeline.teardown();
                }
            }
        }, ());
    }

    {
        let showcase = showcase.clone();
        use_event_with_window("resize", move |_: Event| {
            if let Some(timeline) = showcase.borrow_mut().as_mut() {
                timeline.on_resize();
            }
        });
    }

    html! {
        <div ref={container} class="showcase-container">
            <div class="showcase-blob left"></div>
            <div class="showcase-blob right"></div>
            <div ref={track} class="showcase-track">
                { for portfolio().get_all().iter().take(FEATURED_COUNT).map(showcase_panel) }
                <div class="showcase-panel showcase-final">
                    <div class="showcase-final-inner fade-up">
                        <h3>
                            {"Want to see "}
                            <span class="block"><span class="text-gradient">{"more"}</span>{"?"}</span>
                        </h3>
                        <p>{"Explore our full portfolio of success stories"}</p>
                        <Link<Route> to={Route::Work} classes="cta-button large">
                            {"View All Projects →"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .showcase-container {
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #f9fafb, #fff);
                }
                .showcase-blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(128px);
                    animation: float 6s ease-in-out infinite;
                }
                .showcase-blob.left {
                    top: 25%;
                    left: 25%;
                    background: rgba(74, 159, 255, 0.1);
                }
                .showcase-blob.right {
                    bottom: 25%;
                    right: 25%;
                    background: rgba(0, 2, 77, 0.1);
                    animation-delay: 2s;
                }
                .showcase-track {
                    display: flex;
                    align-items: center;
                    will-change: transform;
                }
                .showcase-panel {
                    flex-shrink: 0;
                    width: 100vw;
                    height: 100vh;
                }
                .showcase-link {
                    display: block;
                    width: 100%;
                    height: 100%;
                    color: inherit;
                    text-decoration: none;
                }
                .showcase-card {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                }
                .showcase-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.6;
                    mix-blend-mode: overlay;
                    transition: transform 0.7s ease;
                }
                .showcase-link:hover .showcase-image {
                    transform: scale(1.05);
                }
                .showcase-cursor {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    border: 2px solid rgba(255, 255, 255, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-weight: 700;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    pointer-events: none;
                    z-index: 5;
                }
                .showcase-link:hover .showcase-cursor,
                .showcase-link:hover .showcase-view {
                    opacity: 1;
                }
                .showcase-content {
                    position: relative;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    padding: clamp(2rem, 5vw, 5rem);
                    color: #fff;
                }
                .showcase-top, .showcase-meta {
                    display: flex;
                    justify-content: space-between;
                }
                .showcase-eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.6);
                    font-weight: 600;
                }
                .showcase-view {
                    opacity: 0;
                    font-weight: 600;
                    transition: opacity 0.3s ease;
                }
                .showcase-title {
                    font-size: clamp(3rem, 9vw, 8rem);
                    line-height: 0.9;
                    text-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                }
                .showcase-word {
                    display: block;
                }
                .showcase-word.outline {
                    -webkit-text-stroke: 2px white;
                    -webkit-text-fill-color: transparent;
                }
                .showcase-year {
                    font-weight: 600;
                }
                .showcase-category {
                    color: rgba(255, 255, 255, 0.7);
                }
                .showcase-final {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 2rem;
                }
                .showcase-final-inner {
                    text-align: center;
                    max-width: 56rem;
                }
                .showcase-final-inner h3 {
                    font-size: clamp(3rem, 7vw, 6rem);
                    color: #00024D;
                    margin-bottom: 2rem;
                }
                .showcase-final-inner p {
                    font-size: 1.5rem;
                    color: #4b5563;
                    margin-bottom: 4rem;
                }
                "#}
            </style>
        </div>
    }
}
