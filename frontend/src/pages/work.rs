use contracts::{filter, portfolio, CaseStudySummary, CategorySelection, FilteredView};
use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_top::use_scroll_to_top;
use crate::components::section_title::SectionTitle;
use crate::Route;

fn work_card(index: usize, item: CaseStudySummary) -> Html {
    html! {
        <div key={item.id} class="work-card fade-up" style={format!("animation-delay: {}ms", index * 100)}>
            <Link<Route> to={Route::WorkDetail { slug: item.slug.clone() }}>
                <div class="work-card-image">
                    <img src={item.hero_image_path.clone()} alt={item.title.clone()} loading="lazy" />
                    <div class="work-card-overlay"></div>
                </div>
                <div class="work-card-body">
                    <span class="work-card-category">{ item.category.clone() }</span>
                    <h3>{ item.title.clone() }</h3>
                    <p>{ item.excerpt.clone() }</p>
                    <span class="text-link">{"View Case Study →"}</span>
                </div>
            </Link<Route>>
        </div>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    use_scroll_to_top();
    let selection = use_state(CategorySelection::default);
    let catalog = portfolio();
    let options = filter::selection_options(catalog.get_all());

    let grid = match filter::filtered_view(catalog.get_all(), &selection) {
        FilteredView::Items(items) => html! {
            <div class="work-grid" key={selection.label().to_string()}>
                { for items.into_iter().enumerate().map(|(index, record)| work_card(index, CaseStudySummary::from(record))) }
            </div>
        },
        FilteredView::Empty => html! {
            <div class="work-empty">
                <p>{"No projects found in this category."}</p>
            </div>
        },
    };

    html! {
        <div class="work-page">
            <section class="page-hero">
                <div class="page-hero-content fade-up">
                    <h1>{"Our "}<span class="text-gradient">{"Work"}</span></h1>
                    <p>{"Real results for real businesses. Explore our portfolio of success stories."}</p>
                </div>
            </section>

            <section class="section light">
                <div class="container">
                    <SectionTitle title="Portfolio" subtitle={Some(AttrValue::from("Filter by category to see specific projects"))} />
                    <div class="work-filters" role="tablist">
                        { for options.into_iter().map(|option| {
                            let active = option == *selection;
                            let label = option.label().to_string();
                            let onclick = {
                                let selection = selection.clone();
                                Callback::from(move |_: MouseEvent| {
                                    debug!("Filtering work by {}", option.label());
                                    selection.set(option.clone());
                                })
                            };
                            html! {
                                <button
                                    class={classes!("work-filter", active.then(|| "active"))}
                                    role="tab"
                                    aria-selected={active.to_string()}
                                    {onclick}
                                >
                                    { label }
                                </button>
                            }
                        }) }
                    </div>
                    { grid }
                </div>
            </section>

            <style>
                {r#"
                .work-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .work-filter {
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid #e5e7eb;
                    background: #fff;
                    color: #374151;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .work-filter:hover {
                    background: #f3f4f6;
                }
                .work-filter.active {
                    background: linear-gradient(90deg, #00024D, #4A9FFF);
                    color: #fff;
                    border: 2px solid #4A9FFF;
                    box-shadow: 0 10px 20px rgba(0, 2, 77, 0.2);
                }
                .work-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .work-card {
                    border-radius: 16px;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s ease;
                }
                .work-card:hover {
                    transform: translateY(-8px);
                }
                .work-card a {
                    color: inherit;
                    text-decoration: none;
                }
                .work-card-image {
                    position: relative;
                    height: 240px;
                    overflow: hidden;
                }
                .work-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .work-card:hover .work-card-image img {
                    transform: scale(1.1);
                }
                .work-card-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 2, 77, 0.6), transparent);
                }
                .work-card-body {
                    padding: 1.5rem 1.5rem 2rem;
                }
                .work-card-category {
                    font-size: 0.8rem;
                    font-weight: 600;
                    color: #4A9FFF;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                .work-card-body h3 {
                    font-size: 1.5rem;
                    color: #00024D;
                    margin: 0.5rem 0;
                }
                .work-card-body p {
                    color: #6b7280;
                    margin-bottom: 1rem;
                }
                .work-empty {
                    text-align: center;
                    padding: 3rem 0;
                    color: #6b7280;
                    font-size: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
