//! Staff Page Component
//!
//! Staff roster grid followed by the "join the team" call to action.

use leptos::prelude::*;

use crate::context::use_site_context;
use crate::models::StaffMember;
use crate::seed;
use crate::staff::Roster;

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// One staff member with avatar, role badge and description
#[component]
fn StaffCard(member: StaffMember) -> impl IntoView {
    let role = member.role;
    let avatar = if member.avatar.is_empty() {
        PLACEHOLDER_AVATAR.to_string()
    } else {
        member.avatar.clone()
    };

    view! {
        <div class="staff-card">
            <div class="staff-avatar">
                <img src=avatar alt=member.name.clone() />
                <span class=format!("role-badge {}", role.accent_class())>{role.icon()}</span>
            </div>
            <h3 class="staff-name">{member.name}</h3>
            <div class=format!("staff-role {}", role.accent_class())>{role.label()}</div>
            <p class="staff-description">{member.description}</p>
        </div>
    }
}

#[component]
pub fn StaffPage() -> impl IntoView {
    let ctx = use_site_context();
    let roster = Roster::from_seed(seed::staff());
    let application_url = ctx.config.application_url;

    view! {
        <div class="staff-page">
            <div class="staff-header">
                <h1>"Our " <span class="accent-blue">"Staff Team"</span></h1>
                <p>
                    "Meet the dedicated team behind " <span class="accent-blue">"DonutSMP"</span>
                    ", the people who work tirelessly to keep the server fun, friendly, and running smoothly."
                </p>
            </div>

            {if roster.is_empty() {
                view! { <p class="staff-empty">"The staff list is unavailable right now."</p> }.into_any()
            } else {
                view! {
                    <div class="staff-grid">
                        {roster.members().iter().cloned()
                            .map(|member| view! { <StaffCard member=member /> })
                            .collect_view()}
                    </div>
                }.into_any()
            }}

            <div class="staff-apply">
                <h2>"Want to Join Our Team?"</h2>
                <p>
                    "We're always looking for dedicated players to help make "
                    <span class="accent-blue">"DonutSMP"</span>
                    " even better. Check out our application process and requirements."
                </p>
                <a class="apply-btn" href=application_url>"Apply Now"</a>
            </div>
        </div>
    }
}
