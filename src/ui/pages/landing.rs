//! Landing page component
//!
//! The one-page marketing site for Proactive IT Agent:
//! - SEO meta tags for search engine optimization
//! - Hero section over the animated backdrop scene
//! - Feature tiers with scroll-staggered card reveals
//! - Live automation demo with the looping workflow player
//! - Trial signup form over the floating-shapes scene
//! - Header, footer and the landing CSS block

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::features::AgentFeatures;
use crate::ui::hero::HeroSection;
use crate::ui::icon::{Icon, icons};
use crate::ui::live_demo::LiveDemoSection;
use crate::ui::signup::SignupSection;

/// Landing page: the four sections in order, framed by header and footer.
#[component]
pub fn LandingPage() -> impl IntoView {
    // Scroll to the URL hash on mount so /#signup and /#demo deep links land
    // on their sections
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(hash) = window.location().hash() else {
            return;
        };
        if let Some(id) = hash.strip_prefix('#') {
            if let Some(document) = window.document() {
                if let Some(element) = document.get_element_by_id(id) {
                    let options = web_sys::ScrollIntoViewOptions::new();
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        }
    });

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header />

            <HeroSection />
            <AgentFeatures />
            <LiveDemoSection />
            <SignupSection />

            <Footer />

            <LandingStyles />
        </div>
    }
}

/// Header with anchor navigation and the trial CTA
#[component]
fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="/" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"Proactive IT Agent"</span>
                    </a>

                    // Desktop navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            <a href="#features" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Features"
                            </a>
                            <a href="#demo" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Live Demo"
                            </a>
                            <a href="#signup" class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg transition-colors shadow-md">
                                "Start Free Trial"
                            </a>
                        </nav>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-theme-secondary transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! {
                                    <Icon name=icons::X class="w-6 h-6 text-theme-primary" />
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::MENU class="w-6 h-6 text-theme-primary" />
                                }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 border-t border-theme/50">
                        <nav class="flex flex-col gap-2">
                            <a
                                href="#features"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "Features"
                            </a>
                            <a
                                href="#demo"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "Live Demo"
                            </a>
                            <a
                                href="#signup"
                                class="block w-full text-center px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-lg"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "Start Free Trial"
                            </a>
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    // JSON-LD structured data for search engines
    let structured_data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "Proactive IT Agent",
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "description": "AI-powered IT automation for MSPs and IT teams: intelligent ticket triage, automated time tracking, and instant first responses.",
        "url": "https://proagent.io",
        "author": {"@type": "Organization", "name": "Proactive IT Agent"},
        "offers": {"@type": "Offer", "price": "0", "priceCurrency": "USD"},
        "featureList": [
            "Intelligent ticket triage",
            "Automated time tracking",
            "First-response generation",
            "Task automation",
            "Performance analytics"
        ]
    })
    .to_string();

    view! {
        <Title text="Proactive IT Agent - AI-Powered IT Automation" />

        <Meta name="description" content="Automate your IT operations with AI. Intelligent ticket triage, automated time tracking, and instant responses for MSPs and IT teams. 30-day free trial." />
        <Meta name="keywords" content="IT automation, AI agent, MSP software, ticket triage, help desk automation, time tracking, IT service management" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://proagent.io/" />
        <Meta property="og:title" content="Proactive IT Agent - AI-Powered IT Automation" />
        <Meta property="og:description" content="Enhance technician productivity with AI-powered automation. Handle routine tasks, intelligent triage, and real-time insights." />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://proagent.io/" />
        <Meta property="twitter:title" content="Proactive IT Agent - AI-Powered IT Automation" />
        <Meta property="twitter:description" content="Enhance technician productivity with AI-powered automation. Handle routine tasks, intelligent triage, and real-time insights." />

        // Canonical URL
        <Link rel="canonical" href="https://proagent.io/" />

        // JSON-LD structured data (inline script)
        <script type="application/ld+json" inner_html=structured_data></script>
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-blue-600 to-violet-600 rounded-xl
                    flex items-center justify-center shadow-lg text-white">
            <Icon name=icons::BOT class="w-6 h-6" />
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">"Proactive IT Agent"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">
                            "AI-powered automation for MSPs and IT teams. Handle routine tasks, \
                             intelligent triage, and real-time insights."
                        </p>
                    </div>

                    // Product links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#features" class="text-sm text-theme-secondary hover:text-blue-400 transition-colors">
                                    "Features"
                                </a>
                            </li>
                            <li>
                                <a href="#demo" class="text-sm text-theme-secondary hover:text-blue-400 transition-colors">
                                    "Live Demo"
                                </a>
                            </li>
                            <li>
                                <a href="#signup" class="text-sm text-theme-secondary hover:text-blue-400 transition-colors">
                                    "Free Trial"
                                </a>
                            </li>
                        </ul>
                    </div>

                    // Company
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Company"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="mailto:sales@proagent.io" class="text-sm text-theme-secondary hover:text-blue-400 transition-colors">
                                    "Contact Sales"
                                </a>
                            </li>
                            <li>
                                <a href="mailto:support@proagent.io" class="text-sm text-theme-secondary hover:text-blue-400 transition-colors">
                                    "Support"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">
                        "© 2026 Proactive IT Agent. All rights reserved."
                    </span>
                    <span class="text-sm text-theme-tertiary">
                        "Built with Rust & Leptos"
                    </span>
                </div>
            </div>
        </footer>
    }
}

/// CSS styles for the landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }

            /* Hero button styles */
            .btn-hero {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                color: white;
                background-color: #2563eb;
                border-radius: 0.75rem;
                transition: all 0.3s;
                transform: scale(1);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .btn-hero:hover {
                transform: scale(1.05);
                background-color: #1d4ed8;
            }

            .btn-hero-outline {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                border: 2px solid rgba(255, 255, 255, 0.4);
                border-radius: 0.75rem;
                transition: all 0.3s;
                color: white;
                background-color: transparent;
            }
            .btn-hero-outline:hover {
                transform: scale(1.05);
                background-color: rgba(255, 255, 255, 0.1);
            }

            .badge-outline {
                padding: 0.25rem 0.75rem;
                font-size: 0.875rem;
                font-weight: 500;
                border-width: 1px;
                border-style: solid;
                border-radius: 9999px;
            }

            .hero-gradient {
                background: linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #1e1b4b 100%);
            }

            /* Scroll reveal: sections slide up when their flag flips */
            .section-reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            }

            .section-reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Staggered card reveal: delays come from the reveal timers */
            .card-reveal {
                opacity: 0;
                transform: translateY(48px) scale(0.95) rotate(-1deg);
            }

            .card-reveal.visible {
                opacity: 1;
                transform: translateY(0) scale(1) rotate(0deg);
            }

            @keyframes pulse-glow {
                0%, 100% { box-shadow: 0 0 20px rgba(59, 130, 246, 0.3); }
                50% { box-shadow: 0 0 40px rgba(59, 130, 246, 0.6); }
            }

            .pulse-glow {
                animation: pulse-glow 3s ease-in-out infinite;
            }

            @keyframes float-slow {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-10px); }
            }

            .float-slow {
                animation: float-slow 6s ease-in-out infinite;
            }
            "#
        </style>
    }
}
