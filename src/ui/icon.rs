use leptos::prelude::*;

/// Inline SVG icon drawn from the outline set below.
#[component]
pub fn Icon(
    /// Icon name from [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d=path_for(name)
            />
        </svg>
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const BOT: &str = "bot";
    pub const ZAP: &str = "zap";
    pub const PLAY: &str = "play";
    pub const TARGET: &str = "target";
    pub const CLOCK: &str = "clock";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const USER: &str = "user";
    pub const USER_PLUS: &str = "user-plus";
    pub const USERS: &str = "users";
    pub const MAIL: &str = "mail";
    pub const BUILDING: &str = "building";
    pub const SHIELD: &str = "shield";
    pub const FILTER: &str = "filter";
    pub const MESSAGE: &str = "message";
    pub const BOOK: &str = "book";
    pub const COG: &str = "cog";
    pub const TRENDING_UP: &str = "trending-up";
    pub const MONITOR: &str = "monitor";
    pub const DOLLAR: &str = "dollar";
    pub const GLOBE: &str = "globe";
    pub const ALERT_TRIANGLE: &str = "alert-triangle";
    pub const DATABASE: &str = "database";
    pub const WORKFLOW: &str = "workflow";
    pub const BAR_CHART: &str = "bar-chart";
    pub const GAUGE: &str = "gauge";
    pub const FILE_TEXT: &str = "file-text";
    pub const LOADER: &str = "loader";
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
    pub const INFO: &str = "info";
}

fn path_for(name: &'static str) -> &'static str {
    match name {
        "bot" => {
            "M9 3v2m6-2v2M9 19v2m6-2v2M5 9H3m2 6H3m18-6h-2m2 6h-2M7 19h10a2 2 0 002-2V7a2 2 0 00-2-2H7a2 2 0 00-2 2v10a2 2 0 002 2zM9 9h6v6H9V9z"
        }
        "zap" => "M13 10V3L4 14h7v7l9-11h-7z",
        "play" => {
            "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664zM21 12a9 9 0 11-18 0 9 9 0 0118 0z"
        }
        "target" => "M12 8a4 4 0 100 8 4 4 0 000-8zM12 2a10 10 0 100 20 10 10 0 000-20z",
        "clock" => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
        "check" => "M5 13l4 4L19 7",
        "check-circle" => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        "arrow-right" => "M14 5l7 7m0 0l-7 7m7-7H3",
        "chevron-down" => "M19 9l-7 7-7-7",
        "user" => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
        "user-plus" => {
            "M18 9v3m0 0v3m0-3h3m-3 0h-3m-2-5a4 4 0 11-8 0 4 4 0 018 0zM3 20a6 6 0 0112 0v1H3v-1z"
        }
        "users" => {
            "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z"
        }
        "mail" => {
            "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
        }
        "building" => {
            "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-16 0H3m6 0v-4a1 1 0 011-1h4a1 1 0 011 1v4M9 7h1m4 0h1M9 11h1m4 0h1"
        }
        "shield" => {
            "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"
        }
        "filter" => {
            "M3 4a1 1 0 011-1h16a1 1 0 011 1v2.586a1 1 0 01-.293.707l-6.414 6.414a1 1 0 00-.293.707V17l-4 4v-6.586a1 1 0 00-.293-.707L3.293 7.293A1 1 0 013 6.586V4z"
        }
        "message" => {
            "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z"
        }
        "book" => {
            "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253"
        }
        "cog" => {
            "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065zM15 12a3 3 0 11-6 0 3 3 0 016 0z"
        }
        "trending-up" => "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
        "monitor" => {
            "M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
        }
        "dollar" => {
            "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z"
        }
        "globe" => {
            "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.657 0 3-4.03 3-9s-1.343-9-3-9m0 18c-1.657 0-3-4.03-3-9s1.343-9 3-9m-9 9a9 9 0 019-9"
        }
        "alert-triangle" => {
            "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
        }
        "database" => {
            "M4 7v10c0 2.21 3.582 4 8 4s8-1.79 8-4V7M4 7c0 2.21 3.582 4 8 4s8-1.79 8-4M4 7c0-2.21 3.582-4 8-4s8 1.79 8 4"
        }
        "workflow" => {
            "M4 5a1 1 0 011-1h14a1 1 0 011 1v2a1 1 0 01-1 1H5a1 1 0 01-1-1V5zM4 13a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H5a1 1 0 01-1-1v-6zM16 13a1 1 0 011-1h2a1 1 0 011 1v6a1 1 0 01-1 1h-2a1 1 0 01-1-1v-6z"
        }
        "bar-chart" => {
            "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"
        }
        "gauge" => "M12 13l3.5-3.5M5 13a7 7 0 0114 0m-14 0H3m18 0h-2M12 6V4",
        "file-text" => {
            "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"
        }
        "loader" => "M12 3a9 9 0 109 9h-2a7 7 0 11-7-7V3z",
        "x" => "M6 18L18 6M6 6l12 12",
        "menu" => "M4 6h16M4 12h16M4 18h16",
        "info" => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    }
}
