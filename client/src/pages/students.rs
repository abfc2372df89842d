//! Student roster with search and class filtering.

use leptos::prelude::*;

use crate::components::student_card::StudentCard;
use crate::net::api::{DemoStudentDirectory, StudentDirectory};
use crate::net::types::Student;
use crate::state::students::{ALL_CLASSES, CLASS_OPTIONS, ClassFilter, StudentFilter, StudentSummary, filter_students};

#[component]
pub fn StudentsPage() -> impl IntoView {
    let roster = StoredValue::new(DemoStudentDirectory.list());
    let summary = roster.with_value(|students| StudentSummary::from_roster(students));

    let search = RwSignal::new(String::new());
    let class = RwSignal::new(ALL_CLASSES.to_owned());

    let filtered = Memo::new(move |_| {
        let filter = StudentFilter::new(&search.get(), ClassFilter::from_select(&class.get()));
        roster.with_value(|students| filter_students(students, &filter))
    });

    view! {
        <div class="page students-page">
            <header class="page__header page__header--split">
                <div>
                    <h1>"Students"</h1>
                    <p class="page__subtitle">"Manage your school's student records"</p>
                </div>
                <button class="btn btn--primary" type="button">"+ Add Student"</button>
            </header>

            <section class="card students-page__filters">
                <input
                    class="students-page__search"
                    type="search"
                    placeholder="Search by name or student ID..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="students-page__class"
                    prop:value=move || class.get()
                    on:change=move |ev| class.set(event_target_value(&ev))
                >
                    <option value=ALL_CLASSES>"All Classes"</option>
                    {CLASS_OPTIONS
                        .into_iter()
                        .map(|c| view! { <option value=c>{format!("Class {c}")}</option> })
                        .collect_view()}
                </select>
            </section>

            <div class="students-page__grid">
                <For
                    each=move || filtered.get()
                    key=|student| student.id.clone()
                    children=|student: Student| view! { <StudentCard student/> }
                />
            </div>
            <Show when=move || filtered.with(Vec::is_empty)>
                <p class="students-page__empty">"No students match the current filters."</p>
            </Show>

            <section class="card students-page__summary">
                <h2 class="card__title">"Student Summary"</h2>
                <div class="summary-grid">
                    <div class="summary-grid__cell">
                        <p class="summary-grid__value summary-grid__value--blue">{summary.total}</p>
                        <p class="summary-grid__label">"Total Students"</p>
                    </div>
                    <div class="summary-grid__cell">
                        <p class="summary-grid__value summary-grid__value--green">{summary.active}</p>
                        <p class="summary-grid__label">"Active"</p>
                    </div>
                    <div class="summary-grid__cell">
                        <p class="summary-grid__value summary-grid__value--yellow">{summary.fee_pending}</p>
                        <p class="summary-grid__label">"Fee Pending"</p>
                    </div>
                    <div class="summary-grid__cell">
                        <p class="summary-grid__value summary-grid__value--red">{summary.fee_overdue}</p>
                        <p class="summary-grid__label">"Fee Overdue"</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
