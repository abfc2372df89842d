//! Summary statistic card used on the dashboard.

use leptos::prelude::*;

use crate::pages::dashboard::Stat;

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let icon_class = format!("stat-card__icon stat-card__icon--{}", stat.accent);

    view! {
        <div class="card stat-card">
            <div class="stat-card__body">
                <p class="stat-card__title">{stat.title}</p>
                <p class="stat-card__value">{stat.value}</p>
                <div class="stat-card__change">
                    <span class=stat.trend.class()>{stat.trend.arrow()} " " {stat.change}</span>
                    <span class="stat-card__period">"vs last month"</span>
                </div>
            </div>
            <div class=icon_class></div>
        </div>
    }
}
