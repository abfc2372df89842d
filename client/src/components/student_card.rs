//! Roster card for one student.

use leptos::prelude::*;

use crate::net::types::Student;

#[component]
pub fn StudentCard(student: Student) -> impl IntoView {
    let class_section = format!("{}-{}", student.class, student.section);

    view! {
        <div class="card student-card">
            <div class="student-card__header">
                <div>
                    <h3 class="student-card__name">{student.name}</h3>
                    <p class="student-card__id">"ID: " {student.student_id}</p>
                </div>
            </div>
            <dl class="student-card__facts">
                <div class="student-card__row">
                    <dt>"Class:"</dt>
                    <dd>{class_section}</dd>
                </div>
                <div class="student-card__row">
                    <dt>"Roll No:"</dt>
                    <dd>{student.roll_number}</dd>
                </div>
                <div class="student-card__row">
                    <dt>"Status:"</dt>
                    <dd>
                        <span class=student.status.badge_class()>{student.status.label()}</span>
                    </dd>
                </div>
                <div class="student-card__row">
                    <dt>"Fee Status:"</dt>
                    <dd>
                        <span class=student.fee_status.badge_class()>{student.fee_status.label()}</span>
                    </dd>
                </div>
            </dl>
            <div class="student-card__actions">
                <button class="btn btn--outline" type="button">"View"</button>
                <button class="btn btn--outline" type="button">"Edit"</button>
            </div>
        </div>
    }
}
