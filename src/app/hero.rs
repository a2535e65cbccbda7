use leptos::prelude::*;

use crate::{config::SiteConfig, content::Profile, sections::Section};

#[component]
pub fn Hero(profile: Profile, config: SiteConfig) -> impl IntoView {
    let Profile {
        name,
        headline,
        tagline,
        email,
        linkedin,
        github,
    } = profile;

    view! {
        <section id=Section::Home.id() class="home">
            <img src=config.photo_path alt=name.clone() class="home-img" />
            <div class="home-text">
                <h1>{name}</h1>
                <div class="subtitle">{headline}</div>
                <p class="tagline">{tagline}</p>
                <div class="home-buttons">
                    <a href=Section::Contact.anchor() class="btn">
                        "Get In Touch"
                    </a>
                    <a href=Section::Experience.anchor() class="btn">
                        "View My Work"
                    </a>
                    <a
                        href=config.resume_path
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn"
                    >
                        "Download Resume"
                    </a>
                </div>
                <div class="home-socials">
                    <a href=format!("mailto:{email}") aria-label="Email">
                        "✉"
                    </a>
                    <a href=linkedin target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a href=github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <i class="devicon-github-original"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}
