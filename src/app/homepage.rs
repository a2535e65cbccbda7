use leptos::{either::Either, prelude::*};

use super::{
    contact::Contact,
    header::Header,
    hero::Hero,
    sections::{About, Education, Extracurricular, Projects, Skills, WorkExperience},
};
use crate::{
    config::SiteConfig,
    content::{self, Portfolio},
};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = SiteConfig::default();
    match content::portfolio() {
        Ok(portfolio) => Either::Left(view! { <Page portfolio=portfolio.clone() config=config /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! { <ContentUnavailable /> })
        }
    }
}

/// The whole site: every section, always, in page order.
#[component]
pub fn Page(portfolio: Portfolio, config: SiteConfig) -> impl IntoView {
    let Portfolio {
        profile,
        experience,
        projects,
        education,
        skills,
        activities,
    } = portfolio;

    view! {
        <div class="App">
            <Header name=profile.name.clone() />
            <main>
                <Hero profile=profile.clone() config=config />
                <About />
                <WorkExperience experiences=experience />
                <Projects projects=projects all_projects_link=profile.github.clone() />
                <Education education=education />
                <Skills skills=skills />
                <Extracurricular activities=activities />
                <Contact endpoint=config.contact_endpoint />
            </main>
            <Footer name=profile.name year=config.copyright_year() />
        </div>
    }
}

#[component]
fn Footer(name: String, year: i32) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{format!("© {year} {name}. All rights reserved.")}</p>
        </footer>
    }
}

#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <main class="content-unavailable">
            <p>"This page is temporarily unavailable. Please check back soon."</p>
        </main>
    }
}
