//! Live-demo section: the scripted workflow player next to the static
//! ticket preview, over the dashboard scene.
//!
//! A 2.5 s interval advances the player while the section is mounted and is
//! dropped on teardown; the player itself is pure state in `core::demo`.

use leptos::prelude::*;

use crate::core::demo::{DEMO_STEPS, DemoPlayer, DemoStep, TICKET};
use crate::ui::icon::{Icon, icons};
use crate::ui::scene::{SceneCanvas, SceneLayer};

const DEMO_LAYERS: &[SceneLayer] = &[SceneLayer::Dashboard];

#[component]
pub fn LiveDemoSection() -> impl IntoView {
    let player = RwSignal::new(DemoPlayer::new());

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;
        use send_wrapper::SendWrapper;

        use crate::core::demo::STEP_INTERVAL_MS;

        let interval = SendWrapper::new(Interval::new(STEP_INTERVAL_MS, move || {
            player.update(|p| p.tick(DEMO_STEPS.len()));
        }));
        on_cleanup(move || drop(interval));
    }

    view! {
        <section id="demo" class="py-24 relative overflow-hidden">
            <SceneCanvas layers=DEMO_LAYERS class="absolute inset-0 -z-10 opacity-40" />

            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center mb-16">
                    <span class="badge-outline text-blue-400 border-blue-500/20 mb-6 inline-block">
                        "Live Automation Demo"
                    </span>

                    <h2 class="text-4xl lg:text-5xl font-bold text-theme-primary mb-6">
                        "Watch AI in Action"
                    </h2>

                    <p class="text-xl text-theme-secondary max-w-2xl mx-auto">
                        "See how our Proactive IT Agent handles real tickets from start to finish, \
                         automatically processing and resolving common IT requests."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    // Workflow player
                    <div class="bg-theme-primary rounded-xl border border-blue-500/20 shadow-xl">
                        <div class="p-6 border-b border-theme">
                            <h3 class="flex items-center gap-3 text-lg font-semibold text-theme-primary">
                                <Icon name=icons::BOT class="w-6 h-6 text-blue-400" />
                                "Agent Workflow"
                            </h3>
                            <p class="text-sm text-theme-secondary mt-1">
                                "Real-time processing of incoming service request"
                            </p>
                        </div>

                        <div class="p-6 space-y-6">
                            // Progress bar
                            <div class="h-2 rounded-full bg-theme-secondary overflow-hidden">
                                <div
                                    class="h-full bg-blue-500 rounded-full transition-all duration-500"
                                    style=move || format!("width: {}%;", player.get().progress)
                                ></div>
                            </div>

                            <div class="space-y-4">
                                {DEMO_STEPS.iter().copied().enumerate().map(|(index, step)| {
                                    view! {
                                        <WorkflowStep index=index step=step player=player />
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    </div>

                    // Ticket preview
                    <div class="space-y-6">
                        <TicketCard />
                        <ImpactCard />
                    </div>
                </div>

                <div class="text-center mt-12">
                    <a href="#signup" class="btn-hero inline-flex items-center gap-2">
                        "Experience the Platform"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </a>
                </div>
            </div>
        </section>
    }
}

/// One row of the workflow script, highlighted while active.
#[component]
fn WorkflowStep(index: usize, step: DemoStep, player: RwSignal<DemoPlayer>) -> impl IntoView {
    let is_active = move || player.get().step == index;
    let is_completed = move || index < player.get().step;

    let row_class = move || {
        if is_active() {
            "flex items-center gap-4 p-4 rounded-lg border transition-all duration-500 \
             border-blue-500/50 bg-blue-500/5 shadow-lg"
        } else if is_completed() {
            "flex items-center gap-4 p-4 rounded-lg border transition-all duration-500 \
             border-violet-500/50 bg-violet-500/5"
        } else {
            "flex items-center gap-4 p-4 rounded-lg border border-theme transition-all duration-500"
        }
    };

    let icon_wrap_class = move || {
        if is_active() {
            "p-2 rounded-full bg-blue-500/20 text-blue-400 animate-pulse"
        } else if is_completed() {
            "p-2 rounded-full bg-violet-500/20 text-violet-400"
        } else {
            "p-2 rounded-full bg-theme-secondary text-theme-tertiary"
        }
    };

    view! {
        <div class=row_class>
            <div class=icon_wrap_class>
                <Icon name=step.icon class="w-5 h-5" />
            </div>

            <div class="flex-1">
                <h4 class="font-medium text-theme-primary">{step.title}</h4>
                <p class="text-sm text-theme-secondary">{step.description}</p>
            </div>

            <Show when=is_active>
                <Icon name=icons::ZAP class="w-5 h-5 text-blue-400 animate-pulse" />
            </Show>
            <Show when=is_completed>
                <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 text-violet-400" />
            </Show>
        </div>
    }
}

#[component]
fn TicketCard() -> impl IntoView {
    view! {
        <div class="bg-theme-primary rounded-xl border border-theme shadow-xl">
            <div class="p-6 border-b border-theme">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-semibold text-theme-primary">"Ticket Details"</h3>
                    <span class="badge-outline text-violet-400 border-violet-500/20">
                        {TICKET.status}
                    </span>
                </div>
                <p class="font-mono text-sm text-theme-tertiary mt-1">{TICKET.id}</p>
            </div>

            <div class="p-6 space-y-6">
                <div class="space-y-4">
                    <div>
                        <h4 class="font-medium text-theme-primary mb-2">"Issue Description"</h4>
                        <p class="text-theme-secondary">{TICKET.issue}</p>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <h4 class="font-medium text-theme-primary mb-1">"Customer"</h4>
                            <p class="text-theme-secondary">{TICKET.customer}</p>
                        </div>
                        <div>
                            <h4 class="font-medium text-theme-primary mb-1">"Priority"</h4>
                            <span class="px-2 py-0.5 text-xs font-medium bg-theme-secondary text-theme-primary rounded-full">
                                {TICKET.priority}
                            </span>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <h4 class="font-medium text-theme-primary mb-1">"Category"</h4>
                            <p class="text-theme-secondary">{TICKET.category}</p>
                        </div>
                        <div>
                            <h4 class="font-medium text-theme-primary mb-1">"Time Spent"</h4>
                            <p class="text-violet-400 font-medium">{TICKET.time_spent}</p>
                        </div>
                    </div>
                </div>

                <div class="border-t border-theme pt-4">
                    <h4 class="font-medium text-theme-primary mb-3">"Assigned Agent"</h4>
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-full bg-blue-500 flex items-center justify-center text-white">
                            <Icon name=icons::BOT class="w-4 h-4" />
                        </div>
                        <div>
                            <p class="font-medium text-theme-primary">{TICKET.assigned_to}</p>
                            <p class="text-sm text-theme-secondary">"AI Assistant"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ImpactCard() -> impl IntoView {
    view! {
        <div class="rounded-xl bg-gradient-to-r from-blue-600 to-violet-600 text-white shadow-xl">
            <div class="p-6">
                <h3 class="font-semibold mb-3">"Automation Impact"</h3>
                <div class="grid grid-cols-2 gap-4 text-sm">
                    <div>
                        <div class="text-2xl font-bold">"0s"</div>
                        <div class="text-white/80">"Wait Time"</div>
                    </div>
                    <div>
                        <div class="text-2xl font-bold">"100%"</div>
                        <div class="text-white/80">"Automated"</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
