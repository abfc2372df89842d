//! Dashboard page with school-wide summary stats, recent activity, and
//! shortcuts into the other sections.
//!
//! All figures are placeholder data until reporting services exist.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::types::User;
use crate::state::session::SessionState;

/// Month-over-month direction of a stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "trend trend--up",
            Self::Down => "trend trend--down",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "\u{2191}",
            Self::Down => "\u{2193}",
        }
    }
}

/// One headline figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    /// Icon tint modifier (`blue`, `green`, ...).
    pub accent: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { title: "Total Students", value: "1,248", change: "+12%", trend: Trend::Up, accent: "blue" },
    Stat { title: "Fee Collection", value: "$142,580", change: "+8%", trend: Trend::Up, accent: "green" },
    Stat { title: "Attendance Today", value: "94.2%", change: "-2%", trend: Trend::Down, accent: "orange" },
    Stat { title: "Active Classes", value: "28", change: "+3%", trend: Trend::Up, accent: "purple" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Student,
    Fee,
    Attendance,
    Result,
}

impl ActivityKind {
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Student => "activity__dot activity__dot--student",
            Self::Fee => "activity__dot activity__dot--fee",
            Self::Attendance => "activity__dot activity__dot--attendance",
            Self::Result => "activity__dot activity__dot--result",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: &'static str,
    pub time: &'static str,
}

pub const RECENT_ACTIVITIES: [Activity; 4] = [
    Activity {
        kind: ActivityKind::Student,
        message: "New student Emma Johnson enrolled in Grade 10-A",
        time: "2 hours ago",
    },
    Activity { kind: ActivityKind::Fee, message: "Fee payment of $500 received from John Smith", time: "4 hours ago" },
    Activity {
        kind: ActivityKind::Attendance,
        message: "Grade 9-B marked present - 28/30 students",
        time: "6 hours ago",
    },
    Activity {
        kind: ActivityKind::Result,
        message: "Mathematics test results uploaded for Grade 8-C",
        time: "1 day ago",
    },
];

/// Shortcut into another section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction { title: "Add New Student", description: "Register a new student", href: "/students" },
    QuickAction { title: "Mark Attendance", description: "Today's attendance", href: "/attendance" },
    QuickAction { title: "Record Payment", description: "Update fee status", href: "/fees" },
];

/// Subtitle under the page heading, personalised when a name is known.
pub fn greeting(user: Option<&User>) -> String {
    match user.and_then(User::first_name) {
        Some(first) => format!("Welcome back, {first}! Here's what's happening at your school today."),
        None => "Welcome back! Here's what's happening at your school today.".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let subtitle = move || session.with(|s| greeting(s.user()));

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <p class="page__subtitle">{subtitle}</p>
            </header>

            <div class="dashboard-page__stats">
                {STATS.into_iter().map(|stat| view! { <StatCard stat/> }).collect_view()}
            </div>

            <div class="dashboard-page__grid">
                <section class="card dashboard-page__activity">
                    <h2 class="card__title">"Recent Activities"</h2>
                    <p class="card__subtitle">"Latest updates from your school"</p>
                    <ul class="activity-list">
                        {RECENT_ACTIVITIES
                            .into_iter()
                            .map(|activity| {
                                view! {
                                    <li class="activity">
                                        <span class=activity.kind.dot_class()></span>
                                        <div class="activity__text">
                                            <p class="activity__message">{activity.message}</p>
                                            <p class="activity__time">{activity.time}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="card dashboard-page__actions">
                    <h2 class="card__title">"Quick Actions"</h2>
                    <p class="card__subtitle">"Common tasks"</p>
                    {QUICK_ACTIONS
                        .into_iter()
                        .map(|action| {
                            view! {
                                <a class="quick-action" href=action.href>
                                    <p class="quick-action__title">{action.title}</p>
                                    <p class="quick-action__description">{action.description}</p>
                                </a>
                            }
                        })
                        .collect_view()}
                </section>
            </div>
        </div>
    }
}
