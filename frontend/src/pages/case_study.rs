use contracts::{portfolio, theme::hero_gradient, CaseStudy, ResultIcon};
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_top::use_scroll_to_top;
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub slug: String,
}

/// Detail page for `/work/{slug}`. An unknown slug renders the not-found
/// view in place.
#[function_component(CaseStudyPage)]
pub fn case_study_page(props: &CaseStudyProps) -> Html {
    use_scroll_to_top();

    match portfolio().get_by_slug(&props.slug) {
        Some(record) => case_study_view(record),
        None => {
            info!("No case study for slug {}", props.slug);
            html! { <NotFound /> }
        }
    }
}

fn case_study_view(record: &CaseStudy) -> Html {
    html! {
        <div class="case-study-page">
            <section class="case-hero" style={format!("background: {}", hero_gradient(&record.category))}>
                <div class="container fade-up">
                    <Link<Route> to={Route::Work} classes="case-back">
                        {"← Back to Portfolio"}
                    </Link<Route>>
                    <span class="case-category">{ record.category.clone() }</span>
                    <h1>{ record.title.clone() }</h1>
                    <p class="case-meta">{ format!("{} · {}", record.client, record.date) }</p>
                </div>
            </section>

            <section class="section">
                <div class="container narrow fade-up">
                    <h2>{"The Challenge"}</h2>
                    <p class="case-text">{ record.narrative.challenge.clone() }</p>
                </div>
            </section>

            <section class="section light">
                <div class="container narrow fade-up">
                    <h2>{"Our Solution"}</h2>
                    <p class="case-text">{ record.narrative.solution.clone() }</p>
                    <h3>{"Technologies Used"}</h3>
                    <div class="case-tech">
                        { for record.technologies.iter().map(|tech| html! {
                            <span class="case-tech-tag">{ tech.clone() }</span>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section case-results">
                <div class="container">
                    <h2>{"The Results"}</h2>
                    <p class="case-results-subtitle">{"Measurable impact that transformed the business"}</p>
                    <div class="case-results-grid">
                        { for record.results.iter().map(|result| {
                            let icon = ResultIcon::resolve(&result.icon_key);
                            html! {
                                <div class="case-result fade-up">
                                    <span class="case-result-icon" role="img" aria-label={icon.aria_label()}>
                                        { icon.glyph() }
                                    </span>
                                    <div class="case-result-metric">{ result.metric.clone() }</div>
                                    <div class="case-result-label">{ result.label.clone() }</div>
                                    <p class="case-result-detail">{ result.detail.clone() }</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="section light">
                <div class="container narrow case-testimonial fade-up">
                    <div class="testimonial-stars">{"★★★★★"}</div>
                    <blockquote>{ format!("\u{201c}{}\u{201d}", record.testimonial.quote) }</blockquote>
                    <div class="case-testimonial-author">
                        <img src={record.testimonial.avatar_image_path.clone()} alt={record.testimonial.author.clone()} width="64" height="64" />
                        <div>
                            <strong>{ record.testimonial.author.clone() }</strong>
                            <span>{ record.testimonial.position.clone() }</span>
                        </div>
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <div class="cta-section-inner fade-up">
                    <h2>{"Ready for Similar Results?"}</h2>
                    <p>{"Let's discuss how we can transform your business"}</p>
                    <Link<Route> to={Route::Contact} classes="cta-button large">
                        {"Start Your Project"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .case-hero {
                    min-height: 60vh;
                    display: flex;
                    align-items: flex-end;
                    padding: 8rem 0 4rem;
                    color: #fff;
                }
                .case-back {
                    display: inline-block;
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    margin-bottom: 2rem;
                }
                .case-back:hover {
                    color: #fff;
                }
                .case-category {
                    display: inline-block;
                    padding: 0.35rem 1rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.15);
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .case-hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    margin: 1rem 0;
                }
                .case-meta {
                    color: rgba(255, 255, 255, 0.7);
                }
                .case-study-page h2 {
                    font-size: 2.25rem;
                    color: #00024D;
                    margin-bottom: 1.5rem;
                }
                .case-text {
                    font-size: 1.125rem;
                    line-height: 1.8;
                    color: #374151;
                }
                .case-tech {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .case-tech-tag {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, rgba(0, 2, 77, 0.08), rgba(74, 159, 255, 0.15));
                    color: #00024D;
                    font-weight: 500;
                }
                .case-results {
                    text-align: center;
                }
                .case-results-subtitle {
                    color: #6b7280;
                    margin-bottom: 3rem;
                }
                .case-results-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .case-result {
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .case-result-icon {
                    font-size: 2rem;
                }
                .case-result-metric {
                    font-size: 2.5rem;
                    font-weight: 800;
                    background: linear-gradient(90deg, #00024D, #4A9FFF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .case-result-label {
                    font-weight: 600;
                    color: #111827;
                }
                .case-result-detail {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .case-testimonial {
                    text-align: center;
                }
                .case-testimonial blockquote {
                    font-size: 1.5rem;
                    font-style: italic;
                    color: #1f2937;
                    margin: 1.5rem 0 2rem;
                }
                .case-testimonial-author {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    text-align: left;
                }
                .case-testimonial-author img {
                    border-radius: 50%;
                    object-fit: cover;
                }
                .case-testimonial-author span {
                    display: block;
                    color: #6b7280;
                }
                "#}
            </style>
        </div>
    }
}
