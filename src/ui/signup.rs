//! Trial signup section: benefits list and the validated form with a
//! simulated submit, over the floating-shapes scene.

use leptos::html;
use leptos::prelude::*;

use crate::core::signup::{FieldError, SignupForm};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::observer::use_section_reveal;
use crate::ui::scene::{SceneCanvas, SceneLayer};

const SIGNUP_LAYERS: &[SceneLayer] = &[SceneLayer::Shapes, SceneLayer::Frames];

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: icons::CLOCK,
        title: "30-Day Free Trial",
        description: "Full access to all features",
        color: "text-violet-400 bg-violet-500/10",
    },
    Benefit {
        icon: icons::SHIELD,
        title: "No Credit Card Required",
        description: "Start immediately without payment",
        color: "text-blue-400 bg-blue-500/10",
    },
    Benefit {
        icon: icons::USERS,
        title: "Expert Support",
        description: "Dedicated onboarding assistance",
        color: "text-amber-400 bg-amber-500/10",
    },
    Benefit {
        icon: icons::ZAP,
        title: "Instant Setup",
        description: "Deploy in under 10 minutes",
        color: "text-purple-400 bg-purple-500/10",
    },
];

#[component]
pub fn SignupSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let visible = use_section_reveal(section_ref);

    view! {
        <section id="signup" class="py-24 relative overflow-hidden bg-theme-secondary/10">
            <SceneCanvas layers=SIGNUP_LAYERS class="absolute inset-0 -z-20 opacity-40" interactive=true />

            // Background decoration
            <div class="absolute top-0 left-1/4 w-96 h-96 bg-blue-500/10 rounded-full blur-3xl opacity-30 animate-pulse -z-10"></div>
            <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-violet-500/10 rounded-full blur-3xl opacity-30 animate-pulse -z-10"></div>

            <div
                node_ref=section_ref
                class="max-w-7xl mx-auto px-4 relative section-reveal"
                class:visible=move || visible.get()
            >
                // Header
                <div class="text-center mb-16">
                    <div class="flex items-center justify-center gap-3 mb-6">
                        <Icon name=icons::USER_PLUS class="w-8 h-8 text-blue-400 animate-pulse" />
                        <span class="badge-outline text-blue-400 border-blue-500/20 bg-blue-500/5">
                            "Start Your Free Trial"
                        </span>
                    </div>

                    <h2 class="text-4xl lg:text-5xl font-bold text-theme-primary mb-6">
                        "Transform Your IT Operations Today"
                    </h2>

                    <p class="text-xl text-theme-secondary max-w-3xl mx-auto">
                        "Join hundreds of MSPs and IT teams already saving time with our AI-powered platform. \
                         Get started in minutes with our 30-day free trial."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-8 lg:gap-16 items-stretch max-w-7xl mx-auto">
                    // Benefits
                    <div class="space-y-8">
                        <h3 class="text-2xl font-semibold text-theme-primary mb-8">
                            "Why Choose Our Platform?"
                        </h3>

                        <div class="space-y-6">
                            {BENEFITS.iter().map(|benefit| {
                                view! {
                                    <div class="flex items-start gap-4 p-6 rounded-xl bg-theme-primary border border-theme
                                                hover:shadow-xl transition-all duration-500 hover:scale-105">
                                        <div class=format!("p-3 rounded-lg flex-shrink-0 {}", benefit.color)>
                                            <Icon name=benefit.icon class="w-6 h-6" />
                                        </div>
                                        <div>
                                            <h4 class="font-semibold text-theme-primary mb-1">{benefit.title}</h4>
                                            <p class="text-theme-secondary">{benefit.description}</p>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>

                        <div class="rounded-xl bg-gradient-to-r from-blue-600 to-violet-600 text-white shadow-xl">
                            <div class="p-6">
                                <div class="flex items-center gap-3 mb-3">
                                    <Icon name=icons::CHECK_CIRCLE class="w-6 h-6" />
                                    <h4 class="font-semibold">"What You Get:"</h4>
                                </div>
                                <ul class="space-y-2 text-white/90">
                                    <li>"- Full access to all AI automation features"</li>
                                    <li>"- Unlimited ticket processing"</li>
                                    <li>"- Complete analytics dashboard"</li>
                                    <li>"- Priority customer support"</li>
                                    <li>"- Custom integrations available"</li>
                                </ul>
                            </div>
                        </div>
                    </div>

                    // Signup form
                    <SignupFormCard />
                </div>
            </div>
        </section>
    }
}

/// The trial signup form. Fields validate on blur and on submit; a passing
/// submit runs the simulated round-trip, raises the success toast and
/// resets the form.
#[component]
fn SignupFormCard() -> impl IntoView {
    let notifications = use_notifications();
    #[cfg(feature = "ssr")]
    let _ = notifications;

    // Form state
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    // Field-level errors
    let first_error = RwSignal::new(None::<String>);
    let last_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let company_error = RwSignal::new(None::<String>);

    let current_form = move || SignupForm {
        first_name: first_name.get_untracked(),
        last_name: last_name.get_untracked(),
        email: email.get_untracked(),
        company: company.get_untracked(),
    };

    let report = |slot: RwSignal<Option<String>>, result: Result<(), FieldError>| match result {
        Ok(()) => {
            slot.set(None);
            true
        }
        Err(e) => {
            slot.set(Some(e.to_string()));
            false
        }
    };

    let validate_first = move || report(first_error, current_form().validate_first_name());
    let validate_last = move || report(last_error, current_form().validate_last_name());
    let validate_email = move || report(email_error, current_form().validate_email());
    let validate_company = move || report(company_error, current_form().validate_company());

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Validate all fields; each reports its own message
        let first_valid = validate_first();
        let last_valid = validate_last();
        let email_valid = validate_email();
        let company_valid = validate_company();

        if !first_valid || !last_valid || !email_valid || !company_valid {
            return;
        }

        submitting.set(true);

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            use crate::core::signup::{SUBMIT_DELAY_MS, success_notice};

            let form = current_form();
            spawn_local(async move {
                // Simulated round-trip; no request leaves the page
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;

                notifications.notify(success_notice(&form.first_name));

                first_name.set(String::new());
                last_name.set(String::new());
                email.set(String::new());
                company.set(String::new());
                submitting.set(false);
            });
        }
    };

    view! {
        <div class="bg-theme-primary rounded-xl border border-theme shadow-xl">
            <div class="p-6 border-b border-theme">
                <h3 class="text-2xl font-semibold text-theme-primary">"Start Your Free Trial"</h3>
                <p class="text-sm text-theme-secondary mt-1">
                    "No credit card required. Setup takes less than 5 minutes."
                </p>
            </div>

            <div class="p-6">
                <form on:submit=on_submit class="space-y-6" novalidate=true>
                    <div class="grid grid-cols-2 gap-4">
                        <SignupField
                            id="first-name"
                            label="First Name"
                            icon=icons::USER
                            placeholder="John"
                            value=first_name
                            error=first_error
                            on_blur=Callback::new(move |_| {
                                validate_first();
                            })
                        />
                        <SignupField
                            id="last-name"
                            label="Last Name"
                            icon=icons::USER
                            placeholder="Doe"
                            value=last_name
                            error=last_error
                            on_blur=Callback::new(move |_| {
                                validate_last();
                            })
                        />
                    </div>

                    <SignupField
                        id="email"
                        label="Work Email"
                        icon=icons::MAIL
                        placeholder="john@company.com"
                        input_type="email"
                        value=email
                        error=email_error
                        on_blur=Callback::new(move |_| {
                            validate_email();
                        })
                    />

                    <SignupField
                        id="company"
                        label="Company Name"
                        icon=icons::BUILDING
                        placeholder="Your Company"
                        value=company
                        error=company_error
                        on_blur=Callback::new(move |_| {
                            validate_company();
                        })
                    />

                    // Submit button
                    <button
                        type="submit"
                        class="w-full py-3 px-4 bg-gradient-to-r from-blue-600 to-violet-600 hover:opacity-90
                               text-white font-medium rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-all duration-500 hover:scale-105 shadow-lg"
                        disabled=move || submitting.get()
                    >
                        {move || {
                            if submitting.get() {
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <Icon name=icons::LOADER class="animate-spin h-4 w-4" />
                                        "Setting Up Your Trial..."
                                    </span>
                                }.into_any()
                            } else {
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        "Start Free Trial"
                                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                                    </span>
                                }.into_any()
                            }
                        }}
                    </button>

                    <p class="text-xs text-theme-tertiary text-center">
                        "By signing up, you agree to our Terms of Service and Privacy Policy. \
                         Cancel anytime during your trial period."
                    </p>
                </form>
            </div>
        </div>
    }
}

/// One labelled form field with its inline validation message.
#[component]
fn SignupField(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
    on_blur: Callback<()>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="flex items-center gap-2 text-sm font-medium text-theme-primary mb-1">
                <Icon name=icon class="w-4 h-4 text-theme-tertiary" />
                {label}
            </label>
            <input
                type=input_type
                id=id
                name=id
                placeholder=placeholder
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary placeholder-theme-tertiary
                       focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent
                       transition-colors"
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
                on:blur=move |_| {
                    on_blur.run(());
                }
            />
            {move || {
                error.get().map(|message| {
                    view! {
                        <p class="mt-1 text-sm text-red-500">{message}</p>
                    }
                })
            }}
        </div>
    }
}
