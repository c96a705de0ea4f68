use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_top::use_scroll_to_top;
use crate::Route;

struct ServiceDetail {
    /// Anchor id, linked from the footer.
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    tagline: &'static str,
    description: &'static str,
    image: &'static str,
    benefits: [&'static str; 6],
    process: [(&'static str, &'static str); 4],
    case_study: (&'static str, &'static str, &'static str),
}

const SERVICES: [ServiceDetail; 4] = [
    ServiceDetail {
        id: "web-development",
        icon: "</>",
        title: "Website Development",
        tagline: "Build Your Digital Foundation",
        description: "We create lightning-fast, mobile-responsive websites that convert visitors into customers. Every pixel is crafted with purpose, every line of code optimized for performance.",
        image: "/images/services/service-web-development.png",
        benefits: [
            "Custom design tailored to your brand",
            "Mobile-first responsive development",
            "SEO-optimized architecture",
            "Lightning-fast page load speeds",
            "Conversion-focused user experience",
            "Ongoing maintenance and support",
        ],
        process: [
            ("Discovery", "Understand your brand, goals, and target audience"),
            ("Design", "Create mockups and iterate based on feedback"),
            ("Development", "Build with modern tech stack"),
            ("Launch", "Deploy, test, and optimize"),
        ],
        case_study: (
            "E-Commerce Success Story",
            "300% increase in conversions",
            "We redesigned a struggling e-commerce site, resulting in triple the conversion rate and 200% revenue growth in 6 months.",
        ),
    },
    ServiceDetail {
        id: "google-ads",
        icon: "📈",
        title: "Google Ads Management",
        tagline: "Dominate Search Results",
        description: "Our Google Ads specialists craft campaigns that put you in front of customers actively searching for your services. We optimize every dollar for maximum ROI.",
        image: "/images/services/service-google-ads.png",
        benefits: [
            "Strategic keyword research and targeting",
            "Compelling ad copy that converts",
            "Continuous A/B testing and optimization",
            "Detailed performance tracking and reporting",
            "Reduced cost per acquisition (CPA)",
            "Increased qualified leads and sales",
        ],
        process: [
            ("Audit", "Analyze current campaigns and competitor landscape"),
            ("Strategy", "Develop targeting and bidding strategy"),
            ("Launch", "Create and launch optimized campaigns"),
            ("Optimize", "Monitor, test, and refine continuously"),
        ],
        case_study: (
            "SaaS Lead Generation",
            "45% reduction in CPA",
            "We took over a SaaS company's Google Ads and reduced their cost per acquisition by 45% while doubling lead volume.",
        ),
    },
    ServiceDetail {
        id: "social-ads",
        icon: "🔗",
        title: "Social Media Advertising",
        tagline: "Reach Your Audience Where They Are",
        description: "From Facebook to TikTok, we create scroll-stopping ads that drive engagement and conversions. Our data-driven approach ensures your budget works harder.",
        image: "/images/services/service-social-ads.png",
        benefits: [
            "Multi-platform campaign management",
            "Precise audience targeting and retargeting",
            "Creative ad design and copywriting",
            "Video and carousel ad production",
            "Influencer partnership coordination",
            "Real-time campaign optimization",
        ],
        process: [
            ("Research", "Identify target audiences and platforms"),
            ("Creative", "Design ads that stop the scroll"),
            ("Launch", "Deploy campaigns with strategic targeting"),
            ("Scale", "Analyze and scale winning campaigns"),
        ],
        case_study: (
            "Fashion Brand Viral Campaign",
            "2M+ impressions in 30 days",
            "Our TikTok and Instagram campaign for a fashion startup generated over 2 million impressions and 15,000 new customers.",
        ),
    },
    ServiceDetail {
        id: "strategy",
        icon: "🎯",
        title: "Digital Strategy",
        tagline: "Your Roadmap to Success",
        description: "We create comprehensive digital marketing strategies that align with your business goals. From market research to execution plans, we map your path to growth.",
        image: "/images/services/service-strategy.png",
        benefits: [
            "Comprehensive market and competitor analysis",
            "Custom marketing strategy and roadmap",
            "Channel selection and budget allocation",
            "Content strategy and calendar",
            "KPI definition and tracking setup",
            "Quarterly strategy reviews and adjustments",
        ],
        process: [
            ("Analysis", "Deep dive into your business and market"),
            ("Planning", "Develop multi-channel strategy"),
            ("Implementation", "Execute tactics and campaigns"),
            ("Review", "Measure results and refine approach"),
        ],
        case_study: (
            "Tech Startup Growth Strategy",
            "500% ROI in first year",
            "Our holistic strategy helped a B2B tech startup achieve 500% ROI through integrated SEO, content, and paid campaigns.",
        ),
    },
];

fn service_section(index: usize, service: &ServiceDetail) -> Html {
    let (case_title, case_metric, case_description) = service.case_study;
    html! {
        <section id={service.id} class={classes!("section", "service-detail", (index % 2 == 1).then(|| "light"))}>
            <div class={classes!("container", "service-layout", (index % 2 == 1).then(|| "reversed"))}>
                <div class="service-copy fade-up">
                    <span class="service-tagline">{ service.icon }{" "}{ service.tagline }</span>
                    <h2>{ service.title }</h2>
                    <p class="service-description">{ service.description }</p>

                    <h3>{"What You Get"}</h3>
                    <ul class="service-benefits">
                        { for service.benefits.iter().map(|benefit| html! {
                            <li><span class="check">{"✓"}</span>{ *benefit }</li>
                        }) }
                    </ul>

                    <h3>{"Our Process"}</h3>
                    <ol class="service-process">
                        { for service.process.iter().enumerate().map(|(step_index, (step, detail))| html! {
                            <li>
                                <span class="step-number">{ step_index + 1 }</span>
                                <span>
                                    <strong>{ *step }</strong>
                                    <span class="step-detail">{ *detail }</span>
                                </span>
                            </li>
                        }) }
                    </ol>

                    <Link<Route> to={Route::Contact} classes="cta-button">
                        {"Get Started →"}
                    </Link<Route>>
                </div>
                <div class="service-visual fade-up">
                    <img src={service.image} alt={service.title} loading="lazy" />
                    <div class="service-case">
                        <span class="service-case-label">{"Case Study"}</span>
                        <h4>{ case_title }</h4>
                        <p class="service-case-metric">{ case_metric }</p>
                        <p>{ case_description }</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <div class="services-page">
            <section class="page-hero tall">
                <div class="page-hero-content fade-up">
                    <h1>{"Our "}<span class="text-gradient">{"Services"}</span></h1>
                    <p>{"Comprehensive digital marketing solutions designed to grow your business"}</p>
                </div>
            </section>

            { for SERVICES.iter().enumerate().map(|(index, service)| service_section(index, service)) }

            <section class="cta-section">
                <div class="cta-section-inner fade-up">
                    <h2>{"Not Sure Which Service You Need?"}</h2>
                    <p>{"Schedule a free consultation and we'll help you create the perfect strategy"}</p>
                    <Link<Route> to={Route::Contact} classes="cta-button large">
                        {"Schedule a Free Consultation"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .service-layout {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .service-layout.reversed .service-copy {
                    order: 2;
                }
                .service-tagline {
                    color: #4A9FFF;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                }
                .service-copy h2 {
                    font-size: 2.5rem;
                    color: #00024D;
                    margin: 0.5rem 0 1rem;
                }
                .service-copy h3 {
                    font-size: 1.25rem;
                    color: #00024D;
                    margin: 2rem 0 1rem;
                }
                .service-description {
                    color: #4b5563;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .service-benefits {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }
                .service-benefits .check {
                    color: #10b981;
                    margin-right: 0.5rem;
                }
                .service-process {
                    list-style: none;
                    padding: 0;
                    margin-bottom: 2rem;
                }
                .service-process li {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .step-number {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #00024D, #4A9FFF);
                    color: #fff;
                    font-weight: 700;
                }
                .step-detail {
                    display: block;
                    color: #6b7280;
                }
                .service-visual img {
                    width: 100%;
                    border-radius: 16px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                }
                .service-case {
                    margin-top: -3rem;
                    margin-left: 2rem;
                    position: relative;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: #fff;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                }
                .service-case-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #4A9FFF;
                }
                .service-case-metric {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #10b981;
                }
                @media (max-width: 900px) {
                    .service-layout {
                        grid-template-columns: 1fr;
                    }
                    .service-layout.reversed .service-copy {
                        order: 0;
                    }
                    .service-benefits {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_images_are_bundled() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for service in &SERVICES {
            let file = public.join(service.image.trim_start_matches('/'));
            assert!(file.is_file(), "{} references missing {}", service.id, service.image);
        }
    }
}
