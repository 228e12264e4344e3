//! Hero section: headline, calls to action, stats and the dashboard
//! preview card, over the animated backdrop scene.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::scene::{SceneCanvas, SceneLayer};

const HERO_LAYERS: &[SceneLayer] = &[SceneLayer::Backdrop, SceneLayer::Shapes];

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="min-h-screen hero-gradient relative overflow-hidden">
            <SceneCanvas layers=HERO_LAYERS class="absolute inset-0 -z-20" />

            <div class="max-w-7xl mx-auto px-4 pt-28 pb-16 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    // Left content
                    <div class="text-left space-y-8">
                        <div class="space-y-4">
                            <div class="flex items-center gap-3 mb-6">
                                <div class="p-3 bg-white/10 rounded-xl pulse-glow">
                                    <Icon name=icons::BOT class="w-8 h-8 text-white" />
                                </div>
                                <span class="text-white/80 font-medium tracking-wide">
                                    "PROACTIVE IT AGENT"
                                </span>
                            </div>

                            <h1 class="text-5xl lg:text-7xl font-bold text-white leading-tight">
                                "Automate Your"
                                <span class="block bg-gradient-to-r from-white to-blue-300 bg-clip-text text-transparent float-slow">
                                    "IT Operations"
                                </span>
                            </h1>

                            <p class="text-xl text-white/80 max-w-lg leading-relaxed">
                                "Enhance technician productivity with AI-powered automation. \
                                 Handle routine tasks, intelligent triage, and real-time insights \
                                 for MSPs and IT teams."
                            </p>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <a href="#signup" class="btn-hero inline-flex items-center gap-2 group">
                                "Get Started"
                                <Icon name=icons::ZAP class="w-5 h-5 group-hover:animate-pulse" />
                            </a>
                            <a href="#demo" class="btn-hero-outline inline-flex items-center gap-2">
                                <Icon name=icons::PLAY class="w-5 h-5" />
                                "Watch Demo"
                            </a>
                        </div>

                        // Stats
                        <div class="grid grid-cols-3 gap-8 pt-8 border-t border-white/20">
                            <HeroStat value="85%" label="Less Manual Tasks" />
                            <HeroStat value="2x" label="Faster Resolution" />
                            <HeroStat value="50%" label="Cost Reduction" />
                        </div>
                    </div>

                    // Right content - dashboard preview
                    <div class="relative">
                        <div class="relative z-10">
                            <DashboardPreview />

                            // Floating feature cards
                            <div class="absolute -bottom-6 -left-6 p-4 bg-theme-primary/95 backdrop-blur-sm rounded-xl shadow-xl border border-theme">
                                <div class="flex items-center gap-3">
                                    <Icon name=icons::TARGET class="w-6 h-6 text-violet-400" />
                                    <div>
                                        <div class="font-semibold text-theme-primary">"Auto Triage"</div>
                                        <div class="text-sm text-theme-secondary">"Real-time classification"</div>
                                    </div>
                                </div>
                            </div>

                            <div class="absolute -top-6 -right-6 p-4 bg-theme-primary/95 backdrop-blur-sm rounded-xl shadow-xl border border-theme">
                                <div class="flex items-center gap-3">
                                    <Icon name=icons::CLOCK class="w-6 h-6 text-amber-400" />
                                    <div>
                                        <div class="font-semibold text-theme-primary">"Smart Tracking"</div>
                                        <div class="text-sm text-theme-secondary">"Automated logging"</div>
                                    </div>
                                </div>
                            </div>
                        </div>

                        // Background glow effect
                        <div class="absolute inset-0 bg-blue-500/20 blur-3xl rounded-full scale-110 -z-10"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroStat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-3xl font-bold text-white">{value}</div>
            <div class="text-sm text-white/70">{label}</div>
        </div>
    }
}

/// Mock dashboard card standing in for a product screenshot.
#[component]
fn DashboardPreview() -> impl IntoView {
    let rows: Vec<(&str, &str, &str)> = vec![
        ("TK-1247", "Password reset - S. Johnson", "Resolved"),
        ("TK-1248", "VPN access - finance team", "In Progress"),
        ("TK-1249", "Printer offline - floor 3", "Queued"),
    ];

    view! {
        <div class="rounded-2xl shadow-2xl w-full bg-theme-primary border border-theme overflow-hidden float-slow">
            // Title bar
            <div class="flex items-center justify-between px-5 py-3 bg-theme-secondary border-b border-theme">
                <div class="flex items-center gap-2">
                    <Icon name=icons::BOT class="w-5 h-5 text-blue-400" />
                    <span class="text-sm font-semibold text-theme-primary">"Agent Dashboard"</span>
                </div>
                <span class="px-2 py-0.5 text-xs font-medium text-green-400 bg-green-500/10 rounded-full">
                    "Live"
                </span>
            </div>

            // Ticket rows
            <div class="divide-y divide-theme/50">
                {rows.into_iter().map(|(id, issue, status)| {
                    let status_class = match status {
                        "Resolved" => "text-green-400 bg-green-500/10",
                        "In Progress" => "text-blue-400 bg-blue-500/10",
                        _ => "text-theme-tertiary bg-theme-secondary",
                    };
                    view! {
                        <div class="px-5 py-3 flex items-center justify-between gap-3">
                            <div class="min-w-0">
                                <div class="text-xs font-mono text-theme-tertiary">{id}</div>
                                <div class="text-sm text-theme-primary truncate">{issue}</div>
                            </div>
                            <span class=format!("px-2 py-0.5 text-xs font-medium rounded-full whitespace-nowrap {}", status_class)>
                                {status}
                            </span>
                        </div>
                    }
                }).collect_view()}
            </div>

            // Footer metrics
            <div class="grid grid-cols-3 divide-x divide-theme/50 border-t border-theme text-center">
                <div class="py-3">
                    <div class="text-lg font-bold text-theme-primary">"142"</div>
                    <div class="text-xs text-theme-tertiary">"Automated today"</div>
                </div>
                <div class="py-3">
                    <div class="text-lg font-bold text-theme-primary">"1m 50s"</div>
                    <div class="text-xs text-theme-tertiary">"Avg. handle time"</div>
                </div>
                <div class="py-3">
                    <div class="text-lg font-bold text-theme-primary">"98%"</div>
                    <div class="text-xs text-theme-tertiary">"CSAT"</div>
                </div>
            </div>
        </div>
    }
}
