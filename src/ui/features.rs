//! Feature sections: three tiers of capability cards revealed on scroll
//! with a fixed per-card stagger.

use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::observer::{use_section_reveal, use_staggered_reveal};

/// One capability card.
struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    benefits: [&'static str; 3],
    color: &'static str,
    bg: &'static str,
}

const CORE_FEATURES: [Feature; 6] = [
    Feature {
        icon: icons::FILTER,
        title: "Intelligent Ticket Triage",
        description: "Automatically analyze, categorize and route tickets to the right technicians based on skills, workload and availability.",
        benefits: ["Faster routing", "Better matching", "Load balancing"],
        color: "text-blue-400",
        bg: "bg-blue-500/10",
    },
    Feature {
        icon: icons::CLOCK,
        title: "Automated Time Tracking",
        description: "AI monitors ticket activities and automatically logs time spent on tasks for accurate billing and performance insights.",
        benefits: ["Accurate billing", "No manual logging", "Performance data"],
        color: "text-violet-400",
        bg: "bg-violet-500/10",
    },
    Feature {
        icon: icons::MESSAGE,
        title: "First-Response Generation",
        description: "Generate instant, personalized responses for common issues while technicians focus on complex problems.",
        benefits: ["Instant responses", "Customer satisfaction", "Reduced workload"],
        color: "text-amber-400",
        bg: "bg-amber-500/10",
    },
    Feature {
        icon: icons::BOOK,
        title: "Knowledge Base Integration",
        description: "Automatically suggest relevant solutions from your knowledge base for faster problem resolution.",
        benefits: ["Faster solutions", "Knowledge sharing", "Reduced research time"],
        color: "text-purple-400",
        bg: "bg-purple-500/10",
    },
    Feature {
        icon: icons::COG,
        title: "Task Automation",
        description: "Execute predefined maintenance scripts and remediation tasks automatically before escalating to technicians.",
        benefits: ["Auto-remediation", "Fewer escalations", "Proactive fixes"],
        color: "text-orange-400",
        bg: "bg-orange-500/10",
    },
    Feature {
        icon: icons::TRENDING_UP,
        title: "Performance Analytics",
        description: "Real-time insights into team productivity, ticket patterns, and service delivery metrics.",
        benefits: ["Data-driven decisions", "Performance tracking", "Optimization insights"],
        color: "text-emerald-400",
        bg: "bg-emerald-500/10",
    },
];

const ADVANCED_FEATURES: [Feature; 6] = [
    Feature {
        icon: icons::TARGET,
        title: "SLA Management & Monitoring",
        description: "Automatically track SLA compliance, send alerts for potential breaches, and generate compliance reports.",
        benefits: ["SLA compliance", "Breach prevention", "Automated reporting"],
        color: "text-red-400",
        bg: "bg-red-500/10",
    },
    Feature {
        icon: icons::MONITOR,
        title: "Remote Monitoring & Management",
        description: "Proactive monitoring of client systems with automated patch management and maintenance scheduling.",
        benefits: ["Proactive monitoring", "Automated patching", "System health"],
        color: "text-blue-400",
        bg: "bg-blue-500/10",
    },
    Feature {
        icon: icons::DOLLAR,
        title: "Billing & Invoicing Automation",
        description: "Automatic time-to-billing conversion with customizable rates, contract management, and invoice generation.",
        benefits: ["Automated billing", "Contract tracking", "Revenue optimization"],
        color: "text-green-400",
        bg: "bg-green-500/10",
    },
    Feature {
        icon: icons::GLOBE,
        title: "Client Portal Integration",
        description: "Self-service portal for clients to submit tickets, track progress, access documentation, and view reports.",
        benefits: ["Self-service options", "Client satisfaction", "Reduced admin work"],
        color: "text-indigo-400",
        bg: "bg-indigo-500/10",
    },
    Feature {
        icon: icons::ALERT_TRIANGLE,
        title: "Escalation Management",
        description: "Smart escalation workflows with customizable triggers, notification chains, and resolution tracking.",
        benefits: ["Automated escalation", "Priority handling", "Resolution tracking"],
        color: "text-yellow-400",
        bg: "bg-yellow-500/10",
    },
    Feature {
        icon: icons::DATABASE,
        title: "Asset Management & Discovery",
        description: "Comprehensive IT asset tracking with automated discovery, lifecycle management, and compliance monitoring.",
        benefits: ["Asset visibility", "Lifecycle tracking", "Compliance monitoring"],
        color: "text-cyan-400",
        bg: "bg-cyan-500/10",
    },
];

const ENTERPRISE_FEATURES: [Feature; 6] = [
    Feature {
        icon: icons::SHIELD,
        title: "Security & Compliance Monitoring",
        description: "Continuous security monitoring with compliance reporting for GDPR, HIPAA, SOC 2, and other standards.",
        benefits: ["Security monitoring", "Compliance reporting", "Risk assessment"],
        color: "text-rose-400",
        bg: "bg-rose-500/10",
    },
    Feature {
        icon: icons::WORKFLOW,
        title: "Service Request Workflow",
        description: "Customizable workflow automation for service requests with approval chains and status tracking.",
        benefits: ["Workflow automation", "Approval chains", "Status tracking"],
        color: "text-violet-400",
        bg: "bg-violet-500/10",
    },
    Feature {
        icon: icons::BAR_CHART,
        title: "Business Intelligence Dashboard",
        description: "Executive dashboards with KPI tracking, trend analysis, and predictive insights for better decision making.",
        benefits: ["Executive insights", "KPI tracking", "Predictive analytics"],
        color: "text-teal-400",
        bg: "bg-teal-500/10",
    },
    Feature {
        icon: icons::GAUGE,
        title: "Performance Benchmarking",
        description: "Compare your team's performance against industry standards and identify optimization opportunities.",
        benefits: ["Industry benchmarks", "Performance comparison", "Optimization insights"],
        color: "text-amber-400",
        bg: "bg-amber-500/10",
    },
    Feature {
        icon: icons::FILE_TEXT,
        title: "Documentation & Compliance",
        description: "Automated documentation generation for processes, changes, and compliance requirements.",
        benefits: ["Auto documentation", "Compliance tracking", "Process recording"],
        color: "text-lime-400",
        bg: "bg-lime-500/10",
    },
    Feature {
        icon: icons::CHECK_CIRCLE,
        title: "Quality Assurance & CSAT",
        description: "Automated customer satisfaction surveys, quality scoring, and continuous improvement recommendations.",
        benefits: ["Quality scoring", "CSAT tracking", "Improvement insights"],
        color: "text-pink-400",
        bg: "bg-pink-500/10",
    },
];

#[component]
pub fn AgentFeatures() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let header_visible = use_section_reveal(header_ref);

    view! {
        <section id="features" class="py-24 relative overflow-hidden bg-theme-secondary/10">
            <div class="max-w-7xl mx-auto px-4">
                <div
                    node_ref=header_ref
                    class="text-center mb-16 section-reveal"
                    class:visible=move || header_visible.get()
                >
                    <div class="flex items-center justify-center gap-3 mb-6">
                        <Icon name=icons::BOT class="w-8 h-8 text-blue-400" />
                        <span class="badge-outline text-blue-400 border-blue-500/20">
                            "AI-Powered Features"
                        </span>
                    </div>

                    <h2 class="text-4xl lg:text-5xl font-bold text-theme-primary mb-6">
                        "Complete IT Automation Suite"
                    </h2>

                    <p class="text-xl text-theme-secondary max-w-3xl mx-auto">
                        "Our Proactive IT Agent transforms how MSPs and IT teams handle service delivery \
                         through intelligent automation and real-time insights."
                    </p>
                </div>

                <FeatureTier
                    badge="Core AI Features"
                    heading="Essential Automation Tools"
                    blurb="Foundation features that every MSP and IT team needs to streamline operations"
                    features=&CORE_FEATURES
                    accent="text-blue-400 border-blue-500/20"
                />

                <FeatureTier
                    badge="Advanced MSP Tools"
                    heading="Professional Service Management"
                    blurb="Advanced features for MSPs managing multiple clients with complex service requirements"
                    features=&ADVANCED_FEATURES
                    accent="text-violet-400 border-violet-500/20"
                />

                <FeatureTier
                    badge="Enterprise Features"
                    heading="Enterprise-Grade Capabilities"
                    blurb="Comprehensive features for large enterprises and MSPs with complex compliance and reporting needs"
                    features=&ENTERPRISE_FEATURES
                    accent="text-amber-400 border-amber-500/20"
                />

                // CTA
                <div
                    class="rounded-2xl bg-gradient-to-r from-blue-600 to-violet-600 text-white shadow-2xl section-reveal"
                    class:visible=move || header_visible.get()
                >
                    <div class="p-12 text-center">
                        <div class="max-w-2xl mx-auto space-y-6">
                            <h3 class="text-3xl font-bold">
                                "Ready to Transform Your IT Operations?"
                            </h3>
                            <p class="text-white/80 text-lg">
                                "Join hundreds of MSPs and IT teams already saving time and improving \
                                 service delivery with our AI-powered automation platform."
                            </p>
                            <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                                <a href="#signup" class="btn-hero inline-flex items-center gap-2">
                                    <Icon name=icons::USERS class="w-5 h-5" />
                                    "Start Free Trial"
                                </a>
                                <a href="#demo" class="btn-hero-outline inline-flex items-center gap-2">
                                    "Schedule Demo"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One tier of six cards with staggered reveal.
#[component]
fn FeatureTier(
    badge: &'static str,
    heading: &'static str,
    blurb: &'static str,
    features: &'static [Feature; 6],
    accent: &'static str,
) -> impl IntoView {
    let tier_ref = NodeRef::<html::Div>::new();
    let (tier_visible, cards) = use_staggered_reveal(tier_ref, features.len());

    view! {
        <div node_ref=tier_ref class="mb-24">
            <div
                class="text-center mb-12 section-reveal"
                class:visible=move || tier_visible.get()
            >
                <span class=format!("badge-outline mb-4 inline-block {}", accent)>{badge}</span>
                <h3 class="text-2xl lg:text-3xl font-bold text-theme-primary mb-4">{heading}</h3>
                <p class="text-theme-secondary max-w-2xl mx-auto">{blurb}</p>
            </div>

            <div class="grid lg:grid-cols-3 md:grid-cols-2 gap-8">
                {features.iter().zip(cards).map(|(feature, card_visible)| {
                    view! {
                        <FeatureCard feature=feature visible=card_visible />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature, visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            class="card-reveal group bg-theme-primary rounded-xl border border-theme p-6 \
                   hover:border-blue-500/20 hover:shadow-xl transition-all duration-700"
            class:visible=move || visible.get()
        >
            <div class=format!(
                "p-4 rounded-xl w-fit mb-4 group-hover:scale-110 transition-all duration-300 {} {}",
                feature.bg, feature.color
            )>
                <Icon name=feature.icon class="w-8 h-8" />
            </div>

            <h4 class="text-xl font-semibold text-theme-primary mb-2">{feature.title}</h4>

            <p class="text-theme-secondary leading-relaxed mb-4">{feature.description}</p>

            <div class="space-y-3">
                <h5 class="font-medium text-theme-primary text-sm">"Key Benefits:"</h5>
                <ul class="space-y-2">
                    {feature.benefits.iter().map(|benefit| {
                        view! {
                            <li class="flex items-center gap-2 text-sm text-theme-secondary">
                                <Icon name=icons::ZAP class="w-4 h-4 text-violet-400 flex-shrink-0" />
                                {*benefit}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
